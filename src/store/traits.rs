use crate::error::StoreApiResult;
use crate::models::{Contact, NewContact};
use async_trait::async_trait;

/// The external contact store collaborator.
///
/// Everything the UI controllers need from the store goes through this
/// trait, enabling different implementations (REST client, mock).
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Create a new contact. The store assigns the id.
    async fn create(&self, contact: &NewContact) -> StoreApiResult<Contact>;

    /// Retrieve the current contact list.
    async fn list(&self) -> StoreApiResult<Vec<Contact>>;

    /// Delete a contact by id.
    async fn delete(&self, id: &str) -> StoreApiResult<()>;
}
