pub mod draft;
pub mod form;
pub mod service_log;

pub use draft::DraftServiceLog;
pub use form::{FieldChange, FormField, ServiceLogFormData};
pub use service_log::{ServiceLog, ServiceType};
