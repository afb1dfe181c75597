//! Lead capture core shared by the site and the intake service.
//!
//! Nothing in here knows about the DOM or HTTP. The frontend wraps these
//! types in Yew state, the backend reuses the schema to validate what
//! arrives over the wire.

pub mod dialog;
pub mod form;
pub mod industries;
pub mod schema;

pub use dialog::{DialogAction, DialogState, DEFAULT_SERVICE_LABEL};
pub use form::{FormPhase, LeadForm, SubmissionTicket, SubmitAttempt, SubmitError};
pub use industries::{all_business_types, BusinessType, Industry};
pub use schema::{validate, Field, FieldErrors, LeadDraft, LeadFormData};
