//! Source vocabulary of the NSB surgery request list
//!
//! - [`NsbRecord`]: one flat list row, decoded from JSON
//! - [`enums`]: every choice column as a closed enum
//! - [`BurrHoleFields`]: per-slot view over the burr-hole column families

pub mod enums;
mod layout;
mod macros;
mod record;

pub use enums::*;
pub use layout::{BurrHoleFields, BURR_HOLE_COUNT};
pub use record::{NsbRecord, SchemaVersion};
