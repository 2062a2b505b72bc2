//! Data models for the Contactbook store.

pub mod contact;

pub use contact::{Contact, NewContact};
