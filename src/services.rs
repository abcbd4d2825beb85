pub mod activity_service;
pub mod agenda_service;
pub mod dispatch_service;
pub mod document_service;
pub mod inventory_service;
pub mod lead_service;

pub use activity_service::ActivityService;
pub use agenda_service::{AgendaService, CreateTaskPayload, TaskPage, PAGE_SIZE};
pub use dispatch_service::{DispatchService, WhatsAppDispatch, DOCUMENTATION_CATEGORY};
pub use document_service::DocumentService;
pub use inventory_service::{CreatePropertyPayload, InventoryService, UpdatePropertyPayload};
pub use lead_service::{CreateLeadPayload, LeadService, UpdateLeadPayload};
