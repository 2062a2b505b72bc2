mod mock_contact_store;
mod recording_navigator;

pub use mock_contact_store::{new_event_log, EventLog, MockContactStore};
pub use recording_navigator::RecordingNavigator;
