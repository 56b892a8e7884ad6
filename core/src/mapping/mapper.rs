use super::parsers::{parse_decimal, parse_length_of_time};
use super::tables;
use crate::nsb::{NsbRecord, SchemaVersion};
use crate::schema::{BurrHoleProcedure, CraniotomyType, During, ProtectiveMaterial, Side};
use chrono::NaiveDate;
use rust_decimal::Decimal;

const MINUTES_PER_HOUR: i64 = 60;

/// Read-only translation of one NSB record into canonical values
///
/// Each `aind_*` accessor reads one source column (or a fixed pair of
/// columns) and returns the canonical value, or `None` when the column is
/// empty, holds the `Select...` placeholder, or cannot be parsed.
#[derive(Debug, Clone, Copy)]
pub struct NsbMapper<'a> {
    record: &'a NsbRecord,
    version: SchemaVersion,
}

impl<'a> NsbMapper<'a> {
    /// Creates a mapper using the record's own list version
    pub fn new(record: &'a NsbRecord) -> Self {
        Self {
            record,
            version: record.list_version,
        }
    }

    /// Creates a mapper that reads the record as list version `version`
    pub fn with_version(record: &'a NsbRecord, version: SchemaVersion) -> Self {
        Self { record, version }
    }

    pub fn record(&self) -> &'a NsbRecord {
        self.record
    }

    pub fn version(&self) -> SchemaVersion {
        self.version
    }

    /// Experimenter shown on every surgery: `NSB-{author_id}`, or `NSB`
    pub fn aind_experimenter_full_name(&self) -> String {
        match self.record.author_id {
            Some(id) => format!("NSB-{}", id),
            None => "NSB".to_string(),
        }
    }

    pub fn aind_subject_id(&self) -> Option<String> {
        self.record
            .lab_tracks_id
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }

    pub fn aind_iacuc_protocol(&self) -> Option<String> {
        self.record
            .iacuc_protocol
            .and_then(tables::map_iacuc_protocol)
            .map(str::to_string)
    }

    pub fn aind_project_name(&self) -> Option<&'static str> {
        self.record.lims_project.and_then(tables::map_lims_project)
    }

    pub fn aind_taskflow_name(&self) -> Option<&'static str> {
        self.record.lims_taskflow.and_then(tables::map_lims_taskflow)
    }

    pub fn aind_surgery_notes(&self) -> Option<String> {
        non_blank(self.record.comments.as_deref())
    }

    pub fn aind_fiber_implant_notes(&self) -> Option<String> {
        non_blank(self.record.fiber_implant_notes.as_deref())
    }

    pub fn aind_date_of_surgery(&self) -> Option<NaiveDate> {
        self.record.date_of_surgery.map(|dt| dt.date_naive())
    }

    pub fn aind_date_first_injection(&self) -> Option<NaiveDate> {
        self.record.date_first_injection.map(|dt| dt.date_naive())
    }

    pub fn aind_weight_before_surgery(&self) -> Option<Decimal> {
        parse_decimal(self.record.weight_before_surgery.as_deref())
    }

    pub fn aind_weight_after_surgery(&self) -> Option<Decimal> {
        parse_decimal(self.record.weight_after_surgery.as_deref())
    }

    pub fn aind_first_inj_weight_before(&self) -> Option<Decimal> {
        parse_decimal(self.record.first_inj_weight_before.as_deref())
    }

    pub fn aind_first_inj_weight_after(&self) -> Option<Decimal> {
        parse_decimal(self.record.first_inj_weight_after.as_deref())
    }

    pub fn aind_hp_iso_level(&self) -> Option<Decimal> {
        self.record.hp_iso_level.and_then(tables::map_iso_level)
    }

    pub fn aind_first_inj_iso_level(&self) -> Option<Decimal> {
        self.record.first_inj_iso_level.and_then(tables::map_iso_level)
    }

    /// Headpost session anaesthesia in minutes; the column holds hours
    pub fn aind_hp_anaesthesia_duration(&self) -> Option<Decimal> {
        hours_to_minutes(self.record.hp_duration_hours.as_deref())
    }

    /// First-injection session anaesthesia in minutes; the column holds hours
    pub fn aind_first_inj_anaesthesia_duration(&self) -> Option<Decimal> {
        hours_to_minutes(self.record.first_inj_duration_hours.as_deref())
    }

    pub fn aind_hp_work_station(&self) -> Option<String> {
        self.record
            .hp_work_station
            .and_then(tables::map_workstation)
            .map(str::to_string)
    }

    pub fn aind_first_inj_work_station(&self) -> Option<String> {
        self.record
            .first_inj_work_station
            .and_then(tables::map_workstation)
            .map(str::to_string)
    }

    pub fn aind_hp_recovery(&self) -> Option<Decimal> {
        parse_length_of_time(self.record.hp_recovery.as_deref())
    }

    pub fn aind_first_inj_recovery(&self) -> Option<Decimal> {
        parse_length_of_time(self.record.first_inj_recovery.as_deref())
    }

    pub fn aind_hp_during(&self) -> Option<During> {
        self.record.hp_during.and_then(tables::map_during)
    }

    pub fn aind_craniotomy_type(&self) -> Option<CraniotomyType> {
        self.record.craniotomy_type.and_then(tables::map_craniotomy_type)
    }

    pub fn aind_craniotomy_hemisphere(&self) -> Option<Side> {
        self.record.craniotomy_hemisphere.and_then(tables::map_hemisphere)
    }

    pub fn aind_cran_protective_material(&self) -> Option<ProtectiveMaterial> {
        self.record
            .cran_protective_material
            .and_then(tables::map_protective_material)
    }

    /// What was done at burr hole `slot`, if anything
    pub fn aind_burr_hole_procedure(&self, slot: u8) -> Option<BurrHoleProcedure> {
        self.record
            .burr_hole_fields(slot)
            .and_then(|fields| fields.procedure)
            .and_then(tables::map_burr_hole_procedure)
    }

    /// Whether the requested procedure kind includes a headpost
    pub fn has_headpost_procedure(&self) -> bool {
        self.record
            .procedure
            .map(tables::is_headpost_procedure)
            .unwrap_or(false)
    }

    /// Whether the requested procedure kind includes a craniotomy
    pub fn has_craniotomy_procedure(&self) -> bool {
        self.record
            .procedure
            .map(tables::is_craniotomy_procedure)
            .unwrap_or(false)
    }
}

fn hours_to_minutes(hours: Option<&str>) -> Option<Decimal> {
    parse_decimal(hours).and_then(|h| h.checked_mul(Decimal::from(MINUTES_PER_HOUR)))
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nsb::{
        NsbBurrHole, NsbCraniotomyType, NsbDuring, NsbIacucProtocol, NsbIsoLevel, NsbLimsProject,
        NsbProcedure, NsbWorkstation,
    };
    use chrono::{TimeZone, Utc};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_experimenter_full_name() {
        let mut record = NsbRecord::default();
        assert_eq!(NsbMapper::new(&record).aind_experimenter_full_name(), "NSB");
        record.author_id = Some(2846);
        assert_eq!(
            NsbMapper::new(&record).aind_experimenter_full_name(),
            "NSB-2846"
        );
    }

    #[test]
    fn test_anaesthesia_duration_in_minutes() {
        let record = NsbRecord {
            hp_duration_hours: Some("1.5".to_string()),
            first_inj_duration_hours: Some("not recorded".to_string()),
            ..Default::default()
        };
        let mapper = NsbMapper::new(&record);
        assert_eq!(mapper.aind_hp_anaesthesia_duration(), Some(dec("90")));
        assert_eq!(mapper.aind_first_inj_anaesthesia_duration(), None);
    }

    #[test]
    fn test_common_fields() {
        let record = NsbRecord {
            lab_tracks_id: Some(" 625100 ".to_string()),
            iacuc_protocol: Some(NsbIacucProtocol::P2109),
            lims_project: Some(NsbLimsProject::AindMsma),
            date_of_surgery: Some(Utc.with_ymd_and_hms(2023, 5, 1, 7, 0, 0).unwrap()),
            weight_before_surgery: Some("25.2".to_string()),
            weight_after_surgery: Some("".to_string()),
            hp_iso_level: Some(NsbIsoLevel::L175),
            hp_work_station: Some(NsbWorkstation::Sws4),
            hp_recovery: Some("15 mins".to_string()),
            hp_during: Some(NsbDuring::FollowUpSurgery),
            comments: Some("   ".to_string()),
            ..Default::default()
        };
        let mapper = NsbMapper::new(&record);
        assert_eq!(mapper.aind_subject_id().as_deref(), Some("625100"));
        assert_eq!(mapper.aind_iacuc_protocol().as_deref(), Some("2109"));
        assert_eq!(mapper.aind_project_name(), Some("MSMA Platform"));
        assert_eq!(
            mapper.aind_date_of_surgery(),
            NaiveDate::from_ymd_opt(2023, 5, 1)
        );
        assert_eq!(mapper.aind_weight_before_surgery(), Some(dec("25.2")));
        assert_eq!(mapper.aind_weight_after_surgery(), None);
        assert_eq!(mapper.aind_hp_iso_level(), Some(dec("1.75")));
        assert_eq!(mapper.aind_hp_work_station().as_deref(), Some("SWS 4"));
        assert_eq!(mapper.aind_hp_recovery(), Some(dec("15")));
        assert_eq!(mapper.aind_hp_during(), Some(During::FollowUp));
        assert_eq!(mapper.aind_surgery_notes(), None);
    }

    #[test]
    fn test_procedure_gates() {
        let mut record = NsbRecord {
            procedure: Some(NsbProcedure::HpOnly),
            ..Default::default()
        };
        assert!(NsbMapper::new(&record).has_headpost_procedure());
        assert!(!NsbMapper::new(&record).has_craniotomy_procedure());

        record.procedure = Some(NsbProcedure::FrontalCtx2p);
        assert!(!NsbMapper::new(&record).has_headpost_procedure());
        assert!(NsbMapper::new(&record).has_craniotomy_procedure());

        record.procedure = None;
        assert!(!NsbMapper::new(&record).has_headpost_procedure());
        assert!(!NsbMapper::new(&record).has_craniotomy_procedure());
    }

    #[test]
    fn test_craniotomy_fields() {
        let record = NsbRecord {
            craniotomy_type: Some(NsbCraniotomyType::Dhc),
            ..Default::default()
        };
        let mapper = NsbMapper::new(&record);
        assert_eq!(mapper.aind_craniotomy_type(), Some(CraniotomyType::Dhc));
        assert_eq!(mapper.aind_craniotomy_hemisphere(), None);
        assert_eq!(mapper.aind_cran_protective_material(), None);
    }

    #[test]
    fn test_burr_hole_procedure_accessor() {
        let record = NsbRecord {
            burr_hole_2: Some(NsbBurrHole::FiberImplant),
            burr_hole_6: Some(NsbBurrHole::Select),
            ..Default::default()
        };
        let mapper = NsbMapper::new(&record);
        assert_eq!(
            mapper.aind_burr_hole_procedure(2),
            Some(BurrHoleProcedure::FiberImplant)
        );
        assert_eq!(mapper.aind_burr_hole_procedure(6), None);
        assert_eq!(mapper.aind_burr_hole_procedure(7), None);
    }
}
