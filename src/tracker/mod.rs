//! REST resource tracker
//!
//! Collaborator used by API-driven steps: CRUD operations against a REST
//! endpoint plus accessors for the most recently created/fetched payload.
//! The tracker remembers the ID of the last created resource so follow-up
//! operations can omit it.

use reqwest::Client;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use crate::{Error, Result};

/// Stateful record of the most recent tracker exchange
#[derive(Debug, Default)]
struct TrackerState {
    current_resource_id: Option<String>,
    created_data: Option<Value>,
    last_response: Option<Value>,
    last_status: u16,
    fetched_data: Option<Value>,
}

/// REST resource lifecycle tracker
pub struct ResourceTracker {
    client: Client,
    base_url: String,
    state: RwLock<TrackerState>,
}

impl ResourceTracker {
    /// Create a tracker against the given API base URL
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            state: RwLock::new(TrackerState::default()),
        }
    }

    /// The API base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a resource via POST; stores the response body and its ID
    #[instrument(skip(self, payload))]
    pub async fn create_resource(&self, endpoint: &str, payload: &Value) -> Result<Value> {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self.client.post(&url).json(payload).send().await?;
        let status = response.status().as_u16();
        let body = read_json_body(response).await?;
        debug!("POST {} - Status: {}", endpoint, status);

        let mut state = self.state.write().await;
        state.last_status = status;
        state.last_response = Some(body.clone());
        state.created_data = Some(body.clone());
        if let Some(id) = body.get("id") {
            state.current_resource_id = Some(json_id_to_string(id));
            debug!("Resource created with ID: {:?}", state.current_resource_id);
        }
        drop(state);

        if !matches!(status, 200 | 201) {
            return Err(Error::tracker(format!(
                "POST {} returned status {}",
                endpoint, status
            )));
        }
        Ok(body)
    }

    /// Retrieve a resource via GET; uses the last created ID when none given
    #[instrument(skip(self))]
    pub async fn retrieve_resource(
        &self,
        endpoint: &str,
        resource_id: Option<&str>,
    ) -> Result<Value> {
        let url = self.resource_url(endpoint, resource_id).await;
        let response = self.client.get(&url).send().await?;
        let status = response.status().as_u16();
        let body = read_json_body(response).await?;
        debug!("GET {} - Status: {}", url, status);

        let mut state = self.state.write().await;
        state.last_status = status;
        state.last_response = Some(body.clone());
        drop(state);

        if status != 200 {
            return Err(Error::tracker(format!(
                "GET {} returned status {}",
                url, status
            )));
        }
        Ok(body)
    }

    /// Replace a resource via PUT; uses the last created ID when none given
    #[instrument(skip(self, payload))]
    pub async fn update_resource(
        &self,
        endpoint: &str,
        payload: &Value,
        resource_id: Option<&str>,
    ) -> Result<Value> {
        let id = self.require_id(resource_id).await?;
        let url = format!("{}{}/{}", self.base_url, endpoint, id);
        let response = self.client.put(&url).json(payload).send().await?;
        let status = response.status().as_u16();
        let body = read_json_body(response).await?;
        debug!("PUT {}/{} - Status: {}", endpoint, id, status);

        let mut state = self.state.write().await;
        state.last_status = status;
        state.last_response = Some(body.clone());
        state.created_data = Some(body.clone());
        drop(state);

        if !matches!(status, 200 | 204) {
            return Err(Error::tracker(format!(
                "PUT {} returned status {}",
                url, status
            )));
        }
        Ok(body)
    }

    /// Delete a resource; uses the last created ID when none given
    #[instrument(skip(self))]
    pub async fn delete_resource(&self, endpoint: &str, resource_id: Option<&str>) -> Result<()> {
        let id = self.require_id(resource_id).await?;
        let url = format!("{}{}/{}", self.base_url, endpoint, id);
        let response = self.client.delete(&url).send().await?;
        let status = response.status().as_u16();
        debug!("DELETE {}/{} - Status: {}", endpoint, id, status);

        self.state.write().await.last_status = status;

        if !matches!(status, 200 | 204) {
            return Err(Error::tracker(format!(
                "DELETE {} returned status {}",
                url, status
            )));
        }
        Ok(())
    }

    /// Assert a deleted resource answers 404 on retrieval
    #[instrument(skip(self))]
    pub async fn verify_resource_deleted(
        &self,
        endpoint: &str,
        resource_id: Option<&str>,
    ) -> Result<()> {
        let id = self.require_id(resource_id).await?;
        let url = format!("{}{}/{}", self.base_url, endpoint, id);
        let response = self.client.get(&url).send().await?;
        let status = response.status().as_u16();
        debug!("GET {} (verify deleted) - Status: {}", url, status);

        self.state.write().await.last_status = status;

        if status != 404 {
            return Err(Error::tracker(format!(
                "expected 404 for deleted resource, got {}",
                status
            )));
        }
        Ok(())
    }

    /// The last response body, if any
    pub async fn last_response(&self) -> Option<Value> {
        self.state.read().await.last_response.clone()
    }

    /// The body stored from the last create/update, if any
    pub async fn created_data(&self) -> Option<Value> {
        self.state.read().await.created_data.clone()
    }

    /// The last HTTP status code
    pub async fn last_status_code(&self) -> u16 {
        self.state.read().await.last_status
    }

    /// Store data fetched by a step for later form filling
    pub async fn set_fetched_data(&self, data: Value) {
        self.state.write().await.fetched_data = Some(data);
    }

    /// Data previously stored via [`ResourceTracker::set_fetched_data`]
    pub async fn fetched_data(&self) -> Option<Value> {
        self.state.read().await.fetched_data.clone()
    }

    /// Assert the last response carries a non-null `id`
    pub async fn validate_resource_has_id(&self) -> Result<()> {
        let state = self.state.read().await;
        match state.last_response.as_ref().and_then(|body| body.get("id")) {
            Some(id) if !id.is_null() => Ok(()),
            _ => Err(Error::tracker("last response has no valid resource ID")),
        }
    }

    async fn resource_url(&self, endpoint: &str, resource_id: Option<&str>) -> String {
        let id = match resource_id {
            Some(id) => Some(id.to_string()),
            None => self.state.read().await.current_resource_id.clone(),
        };
        match id {
            Some(id) => format!("{}{}/{}", self.base_url, endpoint, id),
            None => format!("{}{}", self.base_url, endpoint),
        }
    }

    async fn require_id(&self, resource_id: Option<&str>) -> Result<String> {
        match resource_id {
            Some(id) => Ok(id.to_string()),
            None => self
                .state
                .read()
                .await
                .current_resource_id
                .clone()
                .ok_or_else(|| {
                    Error::tracker("No resource ID available. Create a resource first or provide an ID.")
                }),
        }
    }
}

/// Read a response body as JSON, treating an empty body as `null`
async fn read_json_body(response: reqwest::Response) -> Result<Value> {
    let text = response.text().await?;
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(&text).unwrap_or(Value::Null))
}

/// Extract a display string from a possibly nested payload value
///
/// Strings and numbers map directly; objects yield their `city`, `street` or
/// `address` property when present; anything else falls back to the default.
pub fn extract_string_value(value: Option<&Value>, default: &str) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Object(map)) => {
            for nested in ["city", "street", "address"] {
                if let Some(Value::String(s)) = map.get(nested) {
                    return s.clone();
                }
            }
            default.to_string()
        }
        _ => default.to_string(),
    }
}

fn json_id_to_string(id: &Value) -> String {
    match id {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_base_url_normalization() {
        let tracker = ResourceTracker::new("https://api.example.com/");
        assert_eq!(tracker.base_url(), "https://api.example.com");
    }

    #[tokio::test]
    async fn test_resource_url_prefers_explicit_id() {
        let tracker = ResourceTracker::new("https://api.example.com");
        let url = tracker.resource_url("/contacts", Some("42")).await;
        assert_eq!(url, "https://api.example.com/contacts/42");

        // No explicit ID and nothing created yet: collection URL.
        let url = tracker.resource_url("/contacts", None).await;
        assert_eq!(url, "https://api.example.com/contacts");
    }

    #[tokio::test]
    async fn test_require_id_without_created_resource() {
        let tracker = ResourceTracker::new("https://api.example.com");
        let err = tracker.delete_resource("/contacts", None).await.unwrap_err();
        assert!(matches!(err, crate::Error::Tracker(_)));
    }

    #[tokio::test]
    async fn test_fetched_data_round_trip() {
        let tracker = ResourceTracker::new("https://api.example.com");
        assert!(tracker.fetched_data().await.is_none());

        tracker.set_fetched_data(json!({"name": "Ada"})).await;
        assert_eq!(
            tracker.fetched_data().await.unwrap()["name"],
            json!("Ada")
        );
    }

    #[test]
    fn test_extract_string_value() {
        assert_eq!(extract_string_value(Some(&json!("Ada")), "x"), "Ada");
        assert_eq!(extract_string_value(Some(&json!(7)), "x"), "7");
        assert_eq!(
            extract_string_value(Some(&json!({"city": "Oslo"})), "x"),
            "Oslo"
        );
        assert_eq!(
            extract_string_value(Some(&json!({"zip": "1234"})), "fallback"),
            "fallback"
        );
        assert_eq!(extract_string_value(None, "fallback"), "fallback");
        assert_eq!(extract_string_value(Some(&json!(null)), "fallback"), "fallback");
    }

    #[test]
    fn test_json_id_to_string() {
        assert_eq!(json_id_to_string(&json!("abc")), "abc");
        assert_eq!(json_id_to_string(&json!(42)), "42");
    }
}
