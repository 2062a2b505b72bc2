//! Contact list controller, the delete dialog's caller.
//!
//! Owns what the dialog deliberately does not: the loaded contacts, the
//! identity of the contact pending deletion, and the dialog's
//! visibility flag.

use crate::error::StoreApiResult;
use crate::models::Contact;
use crate::store::ContactStore;
use crate::ui::dialog::{DeleteConfirmDialog, DialogChoice, DialogGesture};
use std::sync::Arc;
use tracing::error;

/// Controller for the contact list page.
pub struct ContactListController {
    store: Arc<dyn ContactStore>,
    contacts: Vec<Contact>,
    pending_delete: Option<String>,
    dialog_visible: bool,
}

impl ContactListController {
    /// Create a controller with an empty list and a hidden dialog.
    pub fn new(store: Arc<dyn ContactStore>) -> Self {
        Self {
            store,
            contacts: Vec::new(),
            pending_delete: None,
            dialog_visible: false,
        }
    }

    /// Load the contact list from the store.
    pub async fn refresh(&mut self) -> StoreApiResult<()> {
        self.contacts = self.store.list().await?;
        Ok(())
    }

    /// The currently loaded contacts.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Ask for confirmation before deleting a contact.
    ///
    /// Records the target id and shows the dialog. Nothing is deleted
    /// until the user confirms.
    pub fn request_delete(&mut self, id: impl Into<String>) {
        self.pending_delete = Some(id.into());
        self.dialog_visible = true;
    }

    /// Whether the confirmation dialog is shown.
    pub fn dialog_visible(&self) -> bool {
        self.dialog_visible
    }

    /// The id of the contact awaiting confirmation, if any.
    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    /// Feed a dialog gesture through the confirmation dialog.
    ///
    /// On confirm, deletes the pending contact and reloads the list.
    /// On cancel, hides the dialog and leaves the store untouched.
    /// Gestures while the dialog is hidden do nothing.
    pub async fn handle_dialog(&mut self, gesture: DialogGesture) -> StoreApiResult<()> {
        let choice = match DeleteConfirmDialog::choice(self.dialog_visible, gesture) {
            Some(choice) => choice,
            None => return Ok(()),
        };

        // The user has answered either way; the dialog's involvement ends here.
        self.dialog_visible = false;
        let target = self.pending_delete.take();

        match choice {
            DialogChoice::Confirmed => {
                if let Some(id) = target {
                    if let Err(e) = self.store.delete(&id).await {
                        error!("Error deleting contact {}: {}", id, e);
                        return Err(e);
                    }
                    self.refresh().await?;
                }
                Ok(())
            }
            DialogChoice::Cancelled => Ok(()),
        }
    }
}
