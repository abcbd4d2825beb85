pub mod activity_repo;
pub mod client;
pub mod document_repo;
pub mod lead_repo;
pub mod profile_repo;
pub mod property_repo;
pub mod storage;
pub mod task_repo;
pub mod transport;

pub use activity_repo::ActivityRepository;
pub use client::{ListQuery, Page, StoreClient};
pub use document_repo::DocumentRepository;
pub use lead_repo::LeadRepository;
pub use profile_repo::ProfileRepository;
pub use property_repo::PropertyRepository;
pub use storage::{FileStorage, HttpFileStorage};
pub use task_repo::TaskRepository;
pub use transport::{HttpTransport, Method, StoreRequest, StoreResponse, StoreTransport};
