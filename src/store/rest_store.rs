use crate::client::AsyncStoreClient;
use crate::error::StoreApiResult;
use crate::models::{Contact, NewContact};
use crate::store::traits::ContactStore;
use async_trait::async_trait;
use std::sync::Arc;

/// Contact store implementation backed by the REST API client.
///
/// Delegates all operations to the AsyncStoreClient, providing a clean
/// abstraction layer between the UI controllers and the underlying
/// HTTP client.
pub struct RestContactStore {
    client: Arc<dyn AsyncStoreClient>,

    /// Page size used when fetching the full list.
    page_size: usize,
}

impl RestContactStore {
    /// Create a new RestContactStore with the given client.
    pub fn new(client: Arc<dyn AsyncStoreClient>, page_size: usize) -> Self {
        Self { client, page_size }
    }
}

#[async_trait]
impl ContactStore for RestContactStore {
    async fn create(&self, contact: &NewContact) -> StoreApiResult<Contact> {
        self.client.create_contact(contact).await
    }

    async fn list(&self) -> StoreApiResult<Vec<Contact>> {
        // The UI renders the whole list, so follow pagination to the end.
        let mut all_contacts = Vec::new();
        let mut offset = 0;

        loop {
            let contacts = self.client.get_contacts(self.page_size, offset).await?;
            let count = contacts.len();
            all_contacts.extend(contacts);

            if count < self.page_size {
                break;
            }
            offset += self.page_size;
        }

        Ok(all_contacts)
    }

    async fn delete(&self, id: &str) -> StoreApiResult<()> {
        self.client.delete_contact(id).await
    }
}
