pub mod activity;
pub mod document;
pub mod lead;
pub mod profile;
pub mod property;
pub mod task;

pub use activity::ActivityEvent;
pub use document::Document;
pub use lead::{Lead, LeadSource, LeadStage};
pub use profile::{Profile, Role};
pub use property::{Property, PropertyStatus};
pub use task::{AgendaTask, TaskPriority, TaskType};
