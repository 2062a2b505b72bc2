//! Async wrapper around the synchronous StoreClient.
//!
//! This module provides an async interface to the synchronous StoreClient by using
//! `tokio::task::spawn_blocking` to run HTTP operations on a dedicated thread pool,
//! preventing blocking of the async runtime.

use crate::client::StoreClient;
use crate::error::{StoreApiError, StoreApiResult};
use crate::models::{Contact, NewContact};
use async_trait::async_trait;
use std::sync::Arc;

/// Async wrapper trait for store client operations.
///
/// This trait provides async versions of all StoreClient methods,
/// internally using `tokio::task::spawn_blocking` to avoid
/// blocking the async runtime with synchronous HTTP calls.
#[async_trait]
pub trait AsyncStoreClient: Send + Sync {
    async fn get_contacts(&self, limit: usize, offset: usize) -> StoreApiResult<Vec<Contact>>;
    async fn create_contact(&self, contact: &NewContact) -> StoreApiResult<Contact>;
    async fn delete_contact(&self, id: &str) -> StoreApiResult<()>;
}

/// Async wrapper around the synchronous StoreClient.
///
/// Uses `tokio::task::spawn_blocking` to run synchronous HTTP
/// operations on a dedicated thread pool, preventing blocking
/// the async runtime.
#[derive(Clone)]
pub struct AsyncStoreClientImpl {
    client: Arc<StoreClient>,
}

impl AsyncStoreClientImpl {
    pub fn new(client: StoreClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl AsyncStoreClient for AsyncStoreClientImpl {
    async fn get_contacts(&self, limit: usize, offset: usize) -> StoreApiResult<Vec<Contact>> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.get_contacts(limit, offset))
            .await
            .map_err(|e| StoreApiError::HttpError(format!("Task join error: {}", e)))?
    }

    async fn create_contact(&self, contact: &NewContact) -> StoreApiResult<Contact> {
        let client = self.client.clone();
        let contact = contact.clone();

        tokio::task::spawn_blocking(move || client.create_contact(&contact))
            .await
            .map_err(|e| StoreApiError::HttpError(format!("Task join error: {}", e)))?
    }

    async fn delete_contact(&self, id: &str) -> StoreApiResult<()> {
        let client = self.client.clone();
        let id = id.to_string();

        tokio::task::spawn_blocking(move || client.delete_contact(&id))
            .await
            .map_err(|e| StoreApiError::HttpError(format!("Task join error: {}", e)))?
    }
}
