pub mod agenda;
pub mod dispatch;
pub mod leads;
pub mod pipeline;

pub use agenda::AgendaView;
pub use dispatch::DispatchView;
pub use leads::{LeadDetailView, LeadListView};
pub use pipeline::{partition, PipelineColumn, PipelineView};
