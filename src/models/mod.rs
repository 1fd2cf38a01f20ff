mod project;
mod time_entry;

pub use project::{Project, ProjectStatus};
pub use time_entry::{EntryStatus, TimeEntry};
