//! SLIMS histology records and their mapping into specimen procedures

mod data;
mod histology;

pub use data::{SlimsHistologyData, SlimsReagent, SlimsWash};
pub use histology::{
    get_last_valid_end_time, map_antibody, parse_specimen_procedure_name,
    HistologyProcedureMapper,
};
