use async_trait::async_trait;
use contactbook_ui::error::{StoreApiError, StoreApiResult};
use contactbook_ui::models::{Contact, NewContact};
use contactbook_ui::store::ContactStore;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Shared event log for asserting call ordering across collaborators.
pub type EventLog = Arc<Mutex<Vec<String>>>;

/// Create an empty event log.
pub fn new_event_log() -> EventLog {
    Arc::new(Mutex::new(Vec::new()))
}

/// Mock contact store for testing.
///
/// Provides an in-memory implementation of ContactStore that can be
/// configured with test data and failures, and tracks method calls for
/// verification. When given a shared event log, it records each call so
/// tests can assert ordering against other collaborators.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactStore {
    contacts: Arc<Mutex<Vec<Contact>>>,
    created: Arc<Mutex<Vec<NewContact>>>,
    deleted: Arc<Mutex<Vec<String>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail_create: Arc<Mutex<bool>>,
    fail_list: Arc<Mutex<bool>>,
    fail_delete: Arc<Mutex<bool>>,
    events: Option<EventLog>,
}

#[allow(dead_code)]
impl MockContactStore {
    /// Create a new empty MockContactStore.
    pub fn new() -> Self {
        Self {
            contacts: Arc::new(Mutex::new(Vec::new())),
            created: Arc::new(Mutex::new(Vec::new())),
            deleted: Arc::new(Mutex::new(Vec::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
            fail_create: Arc::new(Mutex::new(false)),
            fail_list: Arc::new(Mutex::new(false)),
            fail_delete: Arc::new(Mutex::new(false)),
            events: None,
        }
    }

    /// Create a MockContactStore that records calls into a shared event log.
    pub fn with_event_log(events: EventLog) -> Self {
        let mut store = Self::new();
        store.events = Some(events);
        store
    }

    /// Seed the store with a contact.
    pub fn add_contact(&self, contact: Contact) {
        self.contacts.lock().unwrap().push(contact);
    }

    /// Make the next create calls fail.
    pub fn fail_create(&self) {
        *self.fail_create.lock().unwrap() = true;
    }

    /// Make the next list calls fail.
    pub fn fail_list(&self) {
        *self.fail_list.lock().unwrap() = true;
    }

    /// Make the next delete calls fail.
    pub fn fail_delete(&self) {
        *self.fail_delete.lock().unwrap() = true;
    }

    /// Get the number of times a method was called.
    pub fn call_count(&self, method: &str) -> usize {
        *self.call_counts.lock().unwrap().get(method).unwrap_or(&0)
    }

    /// The payloads passed to create, in call order.
    pub fn created(&self) -> Vec<NewContact> {
        self.created.lock().unwrap().clone()
    }

    /// The ids passed to delete, in call order.
    pub fn deleted(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }

    /// The contacts currently held by the store.
    pub fn stored(&self) -> Vec<Contact> {
        self.contacts.lock().unwrap().clone()
    }

    fn track_call(&self, method: &str) {
        *self
            .call_counts
            .lock()
            .unwrap()
            .entry(method.to_string())
            .or_insert(0) += 1;

        if let Some(events) = &self.events {
            events.lock().unwrap().push(method.to_string());
        }
    }
}

impl Default for MockContactStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactStore for MockContactStore {
    async fn create(&self, contact: &NewContact) -> StoreApiResult<Contact> {
        self.track_call("create");

        if *self.fail_create.lock().unwrap() {
            return Err(StoreApiError::ApiError {
                status: 500,
                message: "create failed".to_string(),
            });
        }

        self.created.lock().unwrap().push(contact.clone());

        let mut contacts = self.contacts.lock().unwrap();
        let stored = Contact {
            id: format!("{}", contacts.len() + 1),
            name: contact.name.clone(),
            address: contact.address.clone(),
            phone: contact.phone.clone(),
            email: contact.email.clone(),
        };
        contacts.push(stored.clone());
        Ok(stored)
    }

    async fn list(&self) -> StoreApiResult<Vec<Contact>> {
        self.track_call("list");

        if *self.fail_list.lock().unwrap() {
            return Err(StoreApiError::HttpError("list failed".to_string()));
        }

        Ok(self.contacts.lock().unwrap().clone())
    }

    async fn delete(&self, id: &str) -> StoreApiResult<()> {
        self.track_call("delete");

        if *self.fail_delete.lock().unwrap() {
            return Err(StoreApiError::HttpError("delete failed".to_string()));
        }

        self.deleted.lock().unwrap().push(id.to_string());

        let mut contacts = self.contacts.lock().unwrap();
        let before = contacts.len();
        contacts.retain(|c| c.id != id);

        if contacts.len() == before {
            return Err(StoreApiError::NotFound(format!(
                "Contact {} not found",
                id
            )));
        }
        Ok(())
    }
}
