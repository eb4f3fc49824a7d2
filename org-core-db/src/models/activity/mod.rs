pub mod activity_event;
pub mod activity_entry;

pub use activity_event::*;
pub use activity_entry::*;
