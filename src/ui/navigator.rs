//! Navigation collaborator.

/// Route of the contact list page, where a successful submission lands.
pub const CONTACT_LIST_ROUTE: &str = "/";

/// Navigation service consumed by the UI controllers.
///
/// Synchronous and fire-and-forget: callers do not consume a return
/// value. Implementations decide what a route change means (swap a
/// rendered view, push browser history, or just log it).
pub trait Navigator: Send + Sync {
    fn navigate_to(&self, path: &str);
}

/// Navigator that records route changes in the log.
///
/// Used by the terminal front end, which has no page stack to drive.
#[derive(Debug, Default)]
pub struct LoggingNavigator;

impl Navigator for LoggingNavigator {
    fn navigate_to(&self, path: &str) {
        tracing::info!("Navigating to {}", path);
    }
}
