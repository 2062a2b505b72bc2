//! HTTP client for the Contactbook store API.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. The client handles authentication, error mapping,
//! and response unwrapping for the contact store's REST endpoints.

mod async_wrapper;
pub use async_wrapper::{AsyncStoreClient, AsyncStoreClientImpl};

use crate::config::Config;
use crate::error::{StoreApiError, StoreApiResult};
use crate::models::{Contact, NewContact};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

/// Response wrapper for the contacts list endpoint.
#[derive(Debug, Deserialize)]
pub struct ContactsResponse {
    /// The list of contacts
    pub contacts: Vec<Contact>,
}

/// HTTP client for the Contactbook store API.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct StoreClient {
    /// Base URL for the store API
    base_url: String,

    /// Optional API key for authentication
    api_key: Option<String>,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,
}

impl StoreClient {
    /// Create a new StoreClient from configuration.
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            base_url: config.api_base_url.clone(),
            api_key: config.api_key.clone(),
            agent: Arc::new(agent),
        }
    }

    /// Create a StoreClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, api_key: Option<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            base_url,
            api_key,
            agent: Arc::new(agent),
        }
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Attach the auth header when an API key is configured.
    fn with_auth(&self, request: ureq::Request) -> ureq::Request {
        match &self.api_key {
            Some(key) => request.set("x-contactbook-api-key", key),
            None => request,
        }
    }

    /// Execute a GET request with authentication.
    fn get(&self, path: &str) -> Result<ureq::Response, StoreApiError> {
        let url = self.build_url(path);

        tracing::debug!("GET {}", url);

        self.with_auth(self.agent.get(&url))
            .set("Content-Type", "application/json")
            .call()
            .map_err(|e| self.map_error(e))
    }

    /// Execute a POST request with authentication and JSON body.
    fn post(&self, path: &str, body: &serde_json::Value) -> Result<ureq::Response, StoreApiError> {
        let url = self.build_url(path);

        tracing::debug!("POST {}", url);
        tracing::debug!(
            "Request body: {}",
            serde_json::to_string_pretty(body).unwrap_or_else(|_| "<invalid json>".to_string())
        );

        let result = self
            .with_auth(self.agent.post(&url))
            .set("Content-Type", "application/json")
            .send_json(body)
            .map_err(|e| self.map_error(e));

        match &result {
            Ok(response) => {
                tracing::debug!("POST {} - Success (status: {})", url, response.status());
            }
            Err(e) => {
                tracing::error!("POST {} - Error: {:?}", url, e);
            }
        }

        result
    }

    /// Execute a DELETE request with authentication.
    fn delete(&self, path: &str) -> Result<ureq::Response, StoreApiError> {
        let url = self.build_url(path);

        tracing::debug!("DELETE {}", url);

        self.with_auth(self.agent.delete(&url))
            .call()
            .map_err(|e| self.map_error(e))
    }

    /// Map a ureq error to a StoreApiError.
    fn map_error(&self, error: ureq::Error) -> StoreApiError {
        match error {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                match code {
                    401 | 403 => StoreApiError::Unauthorized,
                    404 => StoreApiError::NotFound(message),
                    _ => StoreApiError::ApiError {
                        status: code,
                        message,
                    },
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    StoreApiError::HttpError("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io {
                    StoreApiError::Timeout
                } else {
                    StoreApiError::HttpError(transport.to_string())
                }
            }
        }
    }

    // ========================= Contact Operations =========================

    /// Get contacts with pagination.
    ///
    /// # Arguments
    /// * `limit` - Maximum number of contacts to return
    /// * `offset` - Number of contacts to skip (for pagination)
    pub fn get_contacts(&self, limit: usize, offset: usize) -> StoreApiResult<Vec<Contact>> {
        let path = format!("/contacts?limit={}&offset={}", limit, offset);
        let response = self.get(&path)?;
        let body = response
            .into_string()
            .map_err(|e| StoreApiError::HttpError(e.to_string()))?;

        let contacts_response: ContactsResponse =
            serde_json::from_str(&body).map_err(StoreApiError::JsonError)?;

        Ok(contacts_response.contacts)
    }

    /// Create a new contact.
    pub fn create_contact(&self, contact: &NewContact) -> StoreApiResult<Contact> {
        let body = serde_json::to_value(contact).map_err(StoreApiError::JsonError)?;

        let response = self.post("/contacts", &body)?;
        let response_body = response
            .into_string()
            .map_err(|e| StoreApiError::HttpError(e.to_string()))?;

        let created: Contact =
            serde_json::from_str(&response_body).map_err(StoreApiError::JsonError)?;
        Ok(created)
    }

    /// Delete a contact by ID.
    pub fn delete_contact(&self, contact_id: &str) -> StoreApiResult<()> {
        let path = format!("/contacts/{}", urlencoding::encode(contact_id));
        self.delete(&path)?;
        Ok(())
    }
}
