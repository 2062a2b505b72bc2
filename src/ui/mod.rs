//! UI controllers and view contracts.
//!
//! The observable behavior of the application: the add-contact form
//! controller, the delete confirmation dialog, the contact list that
//! calls it, and the navigation seam.

pub mod contact_form;
pub mod contact_list;
pub mod dialog;
pub mod navigator;

pub use contact_form::{ContactForm, FormField, SubmitOutcome};
pub use contact_list::ContactListController;
pub use dialog::{DeleteConfirmDialog, DialogChoice, DialogGesture};
pub use navigator::{LoggingNavigator, Navigator, CONTACT_LIST_ROUTE};
