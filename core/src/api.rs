use crate::error::Result;
use crate::mapping::{NsbMapper, NsbProcedures};
use crate::nsb::{NsbRecord, SchemaVersion};
use crate::schema::{SpecimenProcedure, Surgery};
use crate::slims::{HistologyProcedureMapper, SlimsHistologyData};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Main extractor for procedure metadata
///
/// Provides a high-level API over the NSB surgery mapping and the SLIMS
/// histology mapping.
///
/// # Example
///
/// ```
/// use labmeta_core::ProcedureExtractor;
/// use labmeta_core::nsb::NsbRecord;
///
/// let json = r#"{
///     "AuthorId": 2846,
///     "LabTracks_x0020_ID": "625100",
///     "Date_x0020_of_x0020_Surgery": "2024-01-10T08:00:00Z",
///     "Procedure": "Visual Ctx 2P",
///     "CraniotomyType": "Visual Cortex 5mm",
///     "HPDuring": "Initial Surgery",
///     "HPIsoLevel": "1.50"
/// }"#;
///
/// let record = NsbRecord::from_json(json).unwrap();
/// let metadata = ProcedureExtractor::extract(&record);
///
/// assert_eq!(metadata.subject_id.as_deref(), Some("625100"));
/// assert_eq!(metadata.experimenter_full_name, "NSB-2846");
/// assert_eq!(metadata.surgeries.len(), 1);
///
/// let names: Vec<&str> = metadata.surgeries[0]
///     .procedures
///     .iter()
///     .map(|p| p.simple_name())
///     .collect();
/// assert_eq!(names, ["Craniotomy", "Headframe"]);
/// ```
pub struct ProcedureExtractor;

impl ProcedureExtractor {
    /// Maps one surgery request using its own list version
    pub fn extract(record: &NsbRecord) -> SurgeryMetadata {
        Self::extract_mapper(NsbMapper::new(record))
    }

    /// Maps one surgery request as list version `version`
    pub fn extract_with_version(record: &NsbRecord, version: SchemaVersion) -> SurgeryMetadata {
        Self::extract_mapper(NsbMapper::with_version(record, version))
    }

    fn extract_mapper(mapper: NsbMapper<'_>) -> SurgeryMetadata {
        SurgeryMetadata {
            subject_id: mapper.aind_subject_id(),
            project_name: mapper.aind_project_name().map(str::to_string),
            taskflow: mapper.aind_taskflow_name().map(str::to_string),
            iacuc_protocol: mapper.aind_iacuc_protocol(),
            experimenter_full_name: mapper.aind_experimenter_full_name(),
            surgeries: NsbProcedures::from_mapper(mapper).surgeries(),
        }
    }

    /// Loads a JSON surgery request from `path` and maps it
    ///
    /// `version` overrides the record's own list version when given.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not decode as a
    /// surgery request.
    pub fn extract_file<P: AsRef<Path>>(
        path: P,
        version: Option<SchemaVersion>,
    ) -> Result<SurgeryMetadata> {
        let record = NsbRecord::from_json(&fs::read_to_string(path)?)?;
        Ok(match version {
            Some(version) => Self::extract_with_version(&record, version),
            None => Self::extract(&record),
        })
    }

    /// Maps SLIMS histology runs into specimen procedures
    pub fn specimen_procedures(records: &[SlimsHistologyData]) -> Vec<SpecimenProcedure> {
        HistologyProcedureMapper::new(records).map_specimen_procedures()
    }

    /// Loads a JSON array of histology runs from `path` and maps it
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not an array of
    /// histology runs.
    pub fn specimen_procedures_file<P: AsRef<Path>>(path: P) -> Result<Vec<SpecimenProcedure>> {
        let records = SlimsHistologyData::list_from_json(&fs::read_to_string(path)?)?;
        Ok(Self::specimen_procedures(&records))
    }
}

/// Surgery metadata for one subject
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurgeryMetadata {
    /// LabTracks subject id
    pub subject_id: Option<String>,

    /// LIMS project, when it has a canonical name
    pub project_name: Option<String>,

    /// LIMS taskflow, when it has a canonical name
    pub taskflow: Option<String>,

    pub iacuc_protocol: Option<String>,

    pub experimenter_full_name: String,

    /// Zero to three surgeries: initial, follow up, unphased
    pub surgeries: Vec<Surgery>,
}

impl SurgeryMetadata {
    /// Total number of procedures across all surgeries
    pub fn procedure_count(&self) -> usize {
        self.surgeries.iter().map(|s| s.procedures.len()).sum()
    }

    /// Returns whether any surgery implanted a fiber
    pub fn has_fiber_implant(&self) -> bool {
        self.surgeries.iter().any(Surgery::has_fiber_implant)
    }
}
