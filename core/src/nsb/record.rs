use super::enums::{
    NsbAlternatingCurrent, NsbBurrHole, NsbCraniotomyType, NsbDuring, NsbFiberType,
    NsbHeadpost, NsbHeadpostType, NsbHemisphere, NsbIacucProtocol, NsbInjectionDevice,
    NsbIsoLevel, NsbLimsProject, NsbLimsTaskflow, NsbProcedure, NsbProtectiveMaterial,
    NsbWorkstation,
};
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fmt;

/// Generation of the surgery request list a record was exported from
///
/// The list was migrated in place, so a handful of columns kept their name
/// while changing what they hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaVersion {
    /// Fiber lengths entered as bare decimals ("3.5")
    V2023,
    /// Fiber lengths chosen from "N.N mm" options
    #[default]
    V2024,
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaVersion::V2023 => write!(f, "v2023"),
            SchemaVersion::V2024 => write!(f, "v2024"),
        }
    }
}

/// One row of the NSB surgery request list
///
/// Field names follow the list's internal column names. Every column is
/// optional; categorical columns only accept the values their enum
/// declares, so a row with an unknown choice fails to decode instead of
/// reaching the mapper.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct NsbRecord {
    pub title: Option<String>,
    pub author_id: Option<i64>,
    pub list_version: SchemaVersion,
    #[serde(rename = "LabTracks_x0020_ID")]
    pub lab_tracks_id: Option<String>,
    #[serde(rename = "LIMS_x0020_Project")]
    pub lims_project: Option<NsbLimsProject>,
    #[serde(rename = "LIMS_x0020_Taskflow")]
    pub lims_taskflow: Option<NsbLimsTaskflow>,
    #[serde(rename = "IACUC_x0020_Protocol_x0020__x00")]
    pub iacuc_protocol: Option<NsbIacucProtocol>,
    pub procedure: Option<NsbProcedure>,
    #[serde(rename = "Date_x0020_of_x0020_Surgery")]
    pub date_of_surgery: Option<DateTime<Utc>>,
    #[serde(rename = "Date1stInjection")]
    pub date_first_injection: Option<DateTime<Utc>>,
    pub comments: Option<String>,

    // Initial surgery (headpost) session
    #[serde(rename = "Weight_x0020_before_x0020_Surger")]
    pub weight_before_surgery: Option<String>,
    #[serde(rename = "Weight_x0020_after_x0020_Surgery")]
    pub weight_after_surgery: Option<String>,
    #[serde(rename = "HPIsoLevel")]
    pub hp_iso_level: Option<NsbIsoLevel>,
    #[serde(rename = "HPDurationHours")]
    pub hp_duration_hours: Option<String>,
    #[serde(rename = "HPWorkStation")]
    pub hp_work_station: Option<NsbWorkstation>,
    #[serde(rename = "HPRecovery")]
    pub hp_recovery: Option<String>,
    #[serde(rename = "HPDuring")]
    pub hp_during: Option<NsbDuring>,
    pub headpost: Option<NsbHeadpost>,
    pub headpost_type: Option<NsbHeadpostType>,
    pub craniotomy_type: Option<NsbCraniotomyType>,
    pub craniotomy_hemisphere: Option<NsbHemisphere>,
    pub cran_protective_material: Option<NsbProtectiveMaterial>,

    // Follow up (first injection) session
    #[serde(rename = "FirstInjWeightBefor")]
    pub first_inj_weight_before: Option<String>,
    #[serde(rename = "FirstInjWeightAfter")]
    pub first_inj_weight_after: Option<String>,
    #[serde(rename = "FirstInjIsoLevel")]
    pub first_inj_iso_level: Option<NsbIsoLevel>,
    #[serde(rename = "FirstInjDurationHours")]
    pub first_inj_duration_hours: Option<String>,
    #[serde(rename = "WorkStation1stInjection")]
    pub first_inj_work_station: Option<NsbWorkstation>,
    #[serde(rename = "FirstInjRecovery")]
    pub first_inj_recovery: Option<String>,

    /// Free text describing custom fibers
    pub fiber_implant_notes: Option<String>,

    // Burr hole 1 (legacy injection columns)
    pub burr_hole_1: Option<NsbBurrHole>,
    pub inj1_hemisphere: Option<NsbHemisphere>,
    pub inj1_ml: Option<String>,
    pub inj1_ap: Option<String>,
    pub inj1_dv: Option<String>,
    pub inj1_dv_2: Option<String>,
    pub inj1_dv_3: Option<String>,
    pub inj1_angle: Option<String>,
    pub inj1_during: Option<NsbDuring>,
    pub inj1_type: Option<NsbInjectionDevice>,
    pub inj1_virus_strain: Option<String>,
    pub inj1_current: Option<String>,
    pub inj1_alternating_time: Option<NsbAlternatingCurrent>,
    pub inj1_ionto_time: Option<String>,
    pub inj1_vol: Option<String>,
    pub inj1_material: Option<String>,
    pub inj1_material_2: Option<String>,
    pub inj1_material_3: Option<String>,
    pub inj1_material_4: Option<String>,
    pub inj1_titer: Option<String>,
    pub inj1_titer_2: Option<String>,
    pub inj1_titer_3: Option<String>,
    pub inj1_titer_4: Option<String>,
    pub fiber_implant1_dv: Option<String>,
    pub fiber1_type: Option<NsbFiberType>,
    pub fiber1_length: Option<String>,

    // Burr hole 2 (legacy injection columns)
    pub burr_hole_2: Option<NsbBurrHole>,
    pub inj2_hemisphere: Option<NsbHemisphere>,
    pub inj2_ml: Option<String>,
    pub inj2_ap: Option<String>,
    pub inj2_dv: Option<String>,
    pub inj2_dv_2: Option<String>,
    pub inj2_dv_3: Option<String>,
    pub inj2_angle: Option<String>,
    pub inj2_during: Option<NsbDuring>,
    pub inj2_type: Option<NsbInjectionDevice>,
    pub inj2_virus_strain: Option<String>,
    pub inj2_current: Option<String>,
    pub inj2_alternating_time: Option<NsbAlternatingCurrent>,
    pub inj2_ionto_time: Option<String>,
    pub inj2_vol: Option<String>,
    pub inj2_material: Option<String>,
    pub inj2_material_2: Option<String>,
    pub inj2_material_3: Option<String>,
    pub inj2_material_4: Option<String>,
    pub inj2_titer: Option<String>,
    pub inj2_titer_2: Option<String>,
    pub inj2_titer_3: Option<String>,
    pub inj2_titer_4: Option<String>,
    pub fiber_implant2_dv: Option<String>,
    pub fiber2_type: Option<NsbFiberType>,
    pub fiber2_length: Option<String>,

    // Burr hole 3 (burr hole columns)
    pub burr_hole_3: Option<NsbBurrHole>,
    pub burr3_hemisphere: Option<NsbHemisphere>,
    pub burr3_ml: Option<String>,
    pub burr3_ap: Option<String>,
    pub burr3_dv_1: Option<String>,
    pub burr3_dv_2: Option<String>,
    pub burr3_dv_3: Option<String>,
    pub burr3_angle: Option<String>,
    pub burr3_during: Option<NsbDuring>,
    pub burr3_injection_device: Option<NsbInjectionDevice>,
    pub burr3_virus_strain: Option<String>,
    pub burr3_current: Option<String>,
    pub burr3_alternating_time: Option<NsbAlternatingCurrent>,
    pub burr3_injection_duration: Option<String>,
    pub burr3_volume: Option<String>,
    pub burr3_material_1: Option<String>,
    pub burr3_material_2: Option<String>,
    pub burr3_material_3: Option<String>,
    pub burr3_material_4: Option<String>,
    pub burr3_titer_1: Option<String>,
    pub burr3_titer_2: Option<String>,
    pub burr3_titer_3: Option<String>,
    pub burr3_titer_4: Option<String>,
    pub burr3_fiber_dv: Option<String>,
    pub burr3_fiber_type: Option<NsbFiberType>,
    pub burr3_fiber_length: Option<String>,

    // Burr hole 4 (burr hole columns)
    pub burr_hole_4: Option<NsbBurrHole>,
    pub burr4_hemisphere: Option<NsbHemisphere>,
    pub burr4_ml: Option<String>,
    pub burr4_ap: Option<String>,
    pub burr4_dv_1: Option<String>,
    pub burr4_dv_2: Option<String>,
    pub burr4_dv_3: Option<String>,
    pub burr4_angle: Option<String>,
    pub burr4_during: Option<NsbDuring>,
    pub burr4_injection_device: Option<NsbInjectionDevice>,
    pub burr4_virus_strain: Option<String>,
    pub burr4_current: Option<String>,
    pub burr4_alternating_time: Option<NsbAlternatingCurrent>,
    pub burr4_injection_duration: Option<String>,
    pub burr4_volume: Option<String>,
    pub burr4_material_1: Option<String>,
    pub burr4_material_2: Option<String>,
    pub burr4_material_3: Option<String>,
    pub burr4_material_4: Option<String>,
    pub burr4_titer_1: Option<String>,
    pub burr4_titer_2: Option<String>,
    pub burr4_titer_3: Option<String>,
    pub burr4_titer_4: Option<String>,
    pub burr4_fiber_dv: Option<String>,
    pub burr4_fiber_type: Option<NsbFiberType>,
    pub burr4_fiber_length: Option<String>,

    // Burr hole 5 (burr hole columns)
    pub burr_hole_5: Option<NsbBurrHole>,
    pub burr5_hemisphere: Option<NsbHemisphere>,
    pub burr5_ml: Option<String>,
    pub burr5_ap: Option<String>,
    pub burr5_dv_1: Option<String>,
    pub burr5_dv_2: Option<String>,
    pub burr5_dv_3: Option<String>,
    pub burr5_angle: Option<String>,
    pub burr5_during: Option<NsbDuring>,
    pub burr5_injection_device: Option<NsbInjectionDevice>,
    pub burr5_virus_strain: Option<String>,
    pub burr5_current: Option<String>,
    pub burr5_alternating_time: Option<NsbAlternatingCurrent>,
    pub burr5_injection_duration: Option<String>,
    pub burr5_volume: Option<String>,
    pub burr5_material_1: Option<String>,
    pub burr5_material_2: Option<String>,
    pub burr5_material_3: Option<String>,
    pub burr5_material_4: Option<String>,
    pub burr5_titer_1: Option<String>,
    pub burr5_titer_2: Option<String>,
    pub burr5_titer_3: Option<String>,
    pub burr5_titer_4: Option<String>,
    pub burr5_fiber_dv: Option<String>,
    pub burr5_fiber_type: Option<NsbFiberType>,
    pub burr5_fiber_length: Option<String>,

    // Burr hole 6 (burr hole columns)
    pub burr_hole_6: Option<NsbBurrHole>,
    pub burr6_hemisphere: Option<NsbHemisphere>,
    pub burr6_ml: Option<String>,
    pub burr6_ap: Option<String>,
    pub burr6_dv_1: Option<String>,
    pub burr6_dv_2: Option<String>,
    pub burr6_dv_3: Option<String>,
    pub burr6_angle: Option<String>,
    pub burr6_during: Option<NsbDuring>,
    pub burr6_injection_device: Option<NsbInjectionDevice>,
    pub burr6_virus_strain: Option<String>,
    pub burr6_current: Option<String>,
    pub burr6_alternating_time: Option<NsbAlternatingCurrent>,
    pub burr6_injection_duration: Option<String>,
    pub burr6_volume: Option<String>,
    pub burr6_material_1: Option<String>,
    pub burr6_material_2: Option<String>,
    pub burr6_material_3: Option<String>,
    pub burr6_material_4: Option<String>,
    pub burr6_titer_1: Option<String>,
    pub burr6_titer_2: Option<String>,
    pub burr6_titer_3: Option<String>,
    pub burr6_titer_4: Option<String>,
    pub burr6_fiber_dv: Option<String>,
    pub burr6_fiber_type: Option<NsbFiberType>,
    pub burr6_fiber_length: Option<String>,
}

impl NsbRecord {
    /// Decodes a record from the list's JSON item representation
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
