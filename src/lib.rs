//! Contactbook UI core - the interaction layer of a small contact-management app.
//!
//! This library provides the add-contact form flow and the delete confirmation
//! dialog of the Contactbook address book, backed by an external REST contact
//! store. The store and the navigation service are consumed through traits so
//! the controllers can be driven with test doubles.
//!
//! # Architecture
//!
//! - **models**: Data structures for contacts
//! - **domain**: Validated value objects for email and phone input
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **client**: HTTP client for the contact store API
//! - **store**: Contact store collaborator trait and its REST implementation
//! - **ui**: Form controller, confirmation dialog, contact list, navigation

// Re-export commonly used types
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod store;
pub mod ui;

pub use client::{AsyncStoreClient, AsyncStoreClientImpl, StoreClient};
pub use config::Config;
pub use error::{ConfigError, StoreApiError};
pub use models::{Contact, NewContact};
pub use store::{ContactStore, RestContactStore};
pub use ui::{
    ContactForm, ContactListController, DeleteConfirmDialog, DialogChoice, DialogGesture,
    FormField, LoggingNavigator, Navigator, SubmitOutcome,
};
