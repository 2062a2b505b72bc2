//! Add-contact form controller.
//!
//! Owns the draft contact being edited and the single warning message,
//! validates on change and on submit, and on a valid submission creates
//! the contact, requests navigation, and refreshes the list through the
//! injected collaborators.

use crate::domain::{EmailAddress, PhoneInput, ValidationError};
use crate::error::StoreApiError;
use crate::models::NewContact;
use crate::store::ContactStore;
use crate::ui::navigator::{Navigator, CONTACT_LIST_ROUTE};
use std::sync::Arc;
use tracing::error;

/// Warning shown when the name check fails on submit.
pub const NAME_REQUIRED_WARNING: &str = "Name is required.";

/// Warning shown when the email check fails on submit.
pub const EMAIL_INVALID_WARNING: &str = "Please provide a valid email address.";

/// Warning shown while the phone field holds a malformed value.
pub const PHONE_FORMAT_WARNING: &str =
    "Please enter a valid phone number starting with '+' and containing only numbers.";

/// The editable fields of the add-contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Address,
    Phone,
    Email,
}

/// What a call to [`ContactForm::submit`] did.
///
/// Validation failures are not errors: they set the warning and return
/// [`SubmitOutcome::Rejected`] without touching the store. Store
/// failures are logged at the call site and carried in the outcome so a
/// caller may surface them; they are never retried.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// A validation check failed; the warning was updated and no store
    /// call was made.
    Rejected,

    /// The contact was created, navigation was requested, and the list
    /// was refreshed.
    Completed,

    /// The create call failed. Navigation did not happen and the list
    /// was not refreshed.
    CreateFailed(StoreApiError),

    /// The contact was created and navigation was requested, but the
    /// list refresh failed. Navigation is not rolled back.
    RefreshFailed(StoreApiError),
}

/// Controller for the add-contact form.
///
/// Holds the draft for the lifetime of one form session. The contact
/// store and navigator are injected so tests can substitute doubles.
pub struct ContactForm {
    draft: NewContact,
    warning: Option<String>,
    store: Arc<dyn ContactStore>,
    navigator: Arc<dyn Navigator>,
}

impl ContactForm {
    /// Create a controller with an empty draft and no warning.
    pub fn new(store: Arc<dyn ContactStore>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            draft: NewContact::default(),
            warning: None,
            store,
            navigator,
        }
    }

    /// Apply one field edit to the draft.
    ///
    /// Editing the phone field re-validates the new value against the
    /// phone pattern and sets or clears the warning accordingly. Edits
    /// to the other fields leave an existing warning in place; only
    /// the field that triggered the change is re-validated.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();

        if field == FormField::Phone {
            if PhoneInput::is_valid(&value) {
                self.warning = None;
            } else {
                self.warning = Some(PHONE_FORMAT_WARNING.to_string());
            }
        }

        match field {
            FormField::Name => self.draft.name = value,
            FormField::Address => self.draft.address = value,
            FormField::Phone => self.draft.phone = value,
            FormField::Email => self.draft.email = value,
        }
    }

    /// Validate the draft for submission.
    ///
    /// Checks run in order and the first failure wins: name must be
    /// non-empty after trimming, then email must be non-empty and
    /// contain '@'. The phone field is deliberately not checked here;
    /// its format is validated while the user types.
    fn validate(&self) -> Result<(), ValidationError> {
        if self.draft.name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }

        if !EmailAddress::is_valid(&self.draft.email) {
            return Err(ValidationError::InvalidEmail(self.draft.email.clone()));
        }

        Ok(())
    }

    /// The warning text shown for a validation failure.
    fn warning_for(err: &ValidationError) -> &'static str {
        match err {
            ValidationError::MissingName => NAME_REQUIRED_WARNING,
            ValidationError::InvalidEmail(_) => EMAIL_INVALID_WARNING,
            ValidationError::InvalidPhone(_) => PHONE_FORMAT_WARNING,
        }
    }

    /// Submit the draft.
    ///
    /// If validation passes, the draft is sent to the store as-is
    /// (values are not trimmed or normalized), then navigation to the
    /// contact list is requested, then the list is refreshed. The
    /// refresh is never issued before the create call has resolved.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if let Err(e) = self.validate() {
            self.warning = Some(Self::warning_for(&e).to_string());
            return SubmitOutcome::Rejected;
        }

        let payload = self.draft.clone();

        if let Err(e) = self.store.create(&payload).await {
            error!("Error adding contact: {}", e);
            return SubmitOutcome::CreateFailed(e);
        }

        self.navigator.navigate_to(CONTACT_LIST_ROUTE);

        // Refresh so the list page shows the new contact. The result is
        // the store's to keep; a failure here cannot undo the navigation
        // that already happened.
        match self.store.list().await {
            Ok(_) => SubmitOutcome::Completed,
            Err(e) => {
                error!("Error refreshing contact list: {}", e);
                SubmitOutcome::RefreshFailed(e)
            }
        }
    }

    /// The draft as currently edited.
    pub fn draft(&self) -> &NewContact {
        &self.draft
    }

    /// The single user-visible warning, if any.
    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }
}
