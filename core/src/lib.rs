pub mod api;
pub mod cli;
pub mod error;
pub mod mapping;
pub mod nsb;
pub mod schema;
pub mod slims;

pub use api::{ProcedureExtractor, SurgeryMetadata};
pub use cli::report::TextReport;
pub use error::{LabmetaError, Result};
pub use schema::*;
