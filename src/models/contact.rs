//! Contact model representing an entry in the Contactbook store.

use serde::{Deserialize, Serialize};

/// A contact as stored by the contact store.
///
/// The `id` is assigned by the store on creation; all other fields are
/// exactly what the add-contact form collected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Contact {
    /// Unique identifier assigned by the store
    pub id: String,

    /// Full name of the contact
    pub name: String,

    /// Postal address (may be empty)
    pub address: String,

    /// Phone number (may be empty)
    pub phone: String,

    /// Email address
    pub email: String,
}

/// Payload for creating a contact.
///
/// Mirrors the draft the form collects: the store assigns the id, so this
/// carries only the four user-entered fields. Values are sent exactly as
/// typed; the form validates but does not normalize them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct NewContact {
    /// Full name of the contact
    pub name: String,

    /// Postal address (may be empty)
    pub address: String,

    /// Phone number (may be empty)
    pub phone: String,

    /// Email address
    pub email: String,
}
