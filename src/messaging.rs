pub mod compose;
pub mod email;
pub mod whatsapp;

pub use compose::{compose_html, compose_message};
pub use email::{EmailApiClient, EmailParams, EmailSender};
pub use whatsapp::{normalize_phone, whatsapp_link};
