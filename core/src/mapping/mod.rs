//! NSB surgery request to canonical surgery mapping
//!
//! Layered bottom-up:
//! - [`parsers`]: free-text column parsers
//! - [`tables`]: choice-to-canonical lookup tables
//! - [`NsbMapper`]: per-column accessors over one record
//! - [`BurrHoleInfo`]: per-slot bundle of burr-hole columns
//! - [`NsbProcedures`]: procedure reconstruction and surgery assembly

mod burr_hole;
mod mapper;
pub mod parsers;
mod procedures;
pub mod tables;

pub use burr_hole::{merge_depth, BurrHoleInfo, InjectableMaterial};
pub use mapper::NsbMapper;
pub use procedures::{
    assign_fiber_names, resolve_surgery_timing, HeadPostInfo, NsbProcedures, ProcedureBuckets,
    SurgeryDuringInfo,
};
