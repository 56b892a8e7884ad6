use super::enums::{
    CoordinateReferenceLocation, CraniotomyType, During, FerruleMaterial, ProtectiveMaterial,
    Side,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

pub const WEIGHT_UNIT: &str = "gram";
pub const TIME_UNIT: &str = "minute";
pub const VOLUME_UNIT: &str = "nanoliter";
pub const CURRENT_UNIT: &str = "microampere";
pub const SIZE_UNIT: &str = "millimeter";
pub const ANGLE_UNIT: &str = "degrees";
pub const CONCENTRATION_UNIT: &str = "mg/mL";

/// One surgical session and the procedures performed during it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Surgery {
    pub start_date: Option<NaiveDate>,
    pub experimenter_full_name: String,
    pub iacuc_protocol: Option<String>,
    pub animal_weight_prior: Option<Decimal>,
    pub animal_weight_post: Option<Decimal>,
    pub weight_unit: &'static str,
    pub anaesthesia: Option<Anaesthetic>,
    pub workstation_id: Option<String>,
    pub notes: Option<String>,
    pub procedures: Vec<SurgeryProcedure>,
}

impl Surgery {
    /// Returns whether any fiber implant was performed during the session
    pub fn has_fiber_implant(&self) -> bool {
        self.procedures
            .iter()
            .any(|p| matches!(p, SurgeryProcedure::FiberImplant(_)))
    }
}

/// Anaesthetic administered over a session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Anaesthetic {
    pub anaesthetic_type: &'static str,
    pub duration: Option<Decimal>,
    pub duration_unit: &'static str,
    /// Isoflurane percentage
    pub level: Option<Decimal>,
}

impl Anaesthetic {
    /// Isoflurane anaesthetic, or `None` when neither duration nor level is known
    pub fn isoflurane(duration: Option<Decimal>, level: Option<Decimal>) -> Option<Self> {
        if duration.is_none() && level.is_none() {
            return None;
        }
        Some(Self {
            anaesthetic_type: "isoflurane",
            duration,
            duration_unit: TIME_UNIT,
            level,
        })
    }
}

/// Procedure performed during a surgery
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "procedure_type")]
pub enum SurgeryProcedure {
    Headframe(Headframe),
    Craniotomy(Craniotomy),
    #[serde(rename = "Nanoject injection")]
    NanojectInjection(NanojectInjection),
    #[serde(rename = "Iontophoresis injection")]
    IontophoresisInjection(IontophoresisInjection),
    #[serde(rename = "Brain injection")]
    BrainInjection(BrainInjection),
    #[serde(rename = "Fiber implant")]
    FiberImplant(FiberImplant),
}

impl SurgeryProcedure {
    /// Returns simple name for display
    pub fn simple_name(&self) -> &'static str {
        match self {
            SurgeryProcedure::Headframe(_) => "Headframe",
            SurgeryProcedure::Craniotomy(_) => "Craniotomy",
            SurgeryProcedure::NanojectInjection(_) => "Nanoject injection",
            SurgeryProcedure::IontophoresisInjection(_) => "Iontophoresis injection",
            SurgeryProcedure::BrainInjection(_) => "Brain injection",
            SurgeryProcedure::FiberImplant(_) => "Fiber implant",
        }
    }
}

/// Headframe and well attached to the skull
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Headframe {
    pub headframe_type: Option<String>,
    pub headframe_part_number: Option<String>,
    pub well_type: Option<String>,
    pub well_part_number: Option<String>,
}

/// Skull window
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Craniotomy {
    pub craniotomy_type: Option<CraniotomyType>,
    pub craniotomy_hemisphere: Option<Side>,
    pub craniotomy_coordinates_reference: Option<CoordinateReferenceLocation>,
    pub craniotomy_size: Option<Decimal>,
    pub craniotomy_size_unit: &'static str,
    pub protective_material: Option<ProtectiveMaterial>,
    pub recovery_time: Option<Decimal>,
    pub recovery_time_unit: &'static str,
}

/// Material delivered by an injection
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "material_type")]
pub enum InjectionMaterial {
    #[serde(rename = "Virus")]
    Viral(ViralMaterial),
    #[serde(rename = "Reagent")]
    NonViral(NonViralMaterial),
}

/// Virus identified by its titer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViralMaterial {
    pub name: String,
    /// Genome copies per milliliter
    pub titer: Option<i64>,
}

/// Non-viral reagent identified by its concentration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NonViralMaterial {
    pub name: String,
    pub concentration: Option<Decimal>,
    pub concentration_unit: &'static str,
}

/// Stereotaxic brain injection; the shared part of every injection variant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrainInjection {
    pub protocol_id: Option<String>,
    pub during: Option<During>,
    pub injection_materials: Vec<InjectionMaterial>,
    pub virus_strain: Option<String>,
    pub injection_hemisphere: Option<Side>,
    pub injection_coordinate_ml: Option<Decimal>,
    pub injection_coordinate_ap: Option<Decimal>,
    pub injection_coordinate_depth: Option<Vec<Decimal>>,
    pub injection_coordinate_reference: Option<CoordinateReferenceLocation>,
    pub injection_angle: Option<Decimal>,
    pub injection_angle_unit: &'static str,
    pub injection_duration: Option<Decimal>,
    pub injection_duration_unit: &'static str,
    pub recovery_time: Option<Decimal>,
    pub recovery_time_unit: &'static str,
}

/// Pressure injection with a delivered volume per depth
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NanojectInjection {
    #[serde(flatten)]
    pub injection: BrainInjection,
    pub injection_volume: Option<Vec<Decimal>>,
    pub injection_volume_unit: &'static str,
}

/// Current-driven injection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IontophoresisInjection {
    #[serde(flatten)]
    pub injection: BrainInjection,
    pub injection_current: Option<Decimal>,
    pub injection_current_unit: &'static str,
    /// On/off seconds, e.g. "7/7"
    pub alternating_current: Option<String>,
}

/// Optical fibers implanted during one burr-hole procedure
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FiberImplant {
    pub protocol_id: Option<String>,
    pub probes: Vec<OphysProbe>,
}

/// Implanted optical fiber and where it went
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OphysProbe {
    pub name: String,
    pub ophys_probe: FiberProbe,
    pub stereotactic_coordinate_ml: Option<Decimal>,
    pub stereotactic_coordinate_ap: Option<Decimal>,
    pub stereotactic_coordinate_dv: Option<Decimal>,
    pub stereotactic_coordinate_reference: Option<CoordinateReferenceLocation>,
    pub angle: Option<Decimal>,
    pub angle_unit: &'static str,
    pub bregma_to_lambda_distance: Option<Decimal>,
}

/// Physical description of an optical fiber
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FiberProbe {
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub core_diameter: Option<Decimal>,
    pub core_diameter_unit: Option<&'static str>,
    pub numerical_aperture: Option<Decimal>,
    pub ferrule_material: Option<FerruleMaterial>,
    pub total_length: Option<Decimal>,
    pub length_unit: Option<&'static str>,
    pub notes: Option<String>,
}
