use serde::Serialize;
use std::fmt;

/// Side of the brain a procedure targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Returns simple name for display
    pub fn simple_name(&self) -> &'static str {
        match self {
            Side::Left => "Left",
            Side::Right => "Right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}

/// Surgical session a sub-procedure was performed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum During {
    Initial,
    FollowUp,
}

impl During {
    /// Returns simple name for display
    pub fn simple_name(&self) -> &'static str {
        match self {
            During::Initial => "initial",
            During::FollowUp => "follow up",
        }
    }
}

impl fmt::Display for During {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}

/// Craniotomy classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CraniotomyType {
    #[serde(rename = "3 mm")]
    ThreeMm,
    #[serde(rename = "5 mm")]
    FiveMm,
    #[serde(rename = "Dual hemisphere craniotomy")]
    Dhc,
    #[serde(rename = "Whole hemisphere craniotomy")]
    Whc,
    #[serde(rename = "Other")]
    Other,
}

impl CraniotomyType {
    /// Craniotomy diameter in millimeters, for the sized window types
    pub fn size_mm(&self) -> Option<u32> {
        match self {
            CraniotomyType::ThreeMm => Some(3),
            CraniotomyType::FiveMm => Some(5),
            CraniotomyType::Dhc | CraniotomyType::Whc | CraniotomyType::Other => None,
        }
    }

    /// Skull landmark the craniotomy is centered on
    pub fn coordinate_reference(&self) -> Option<CoordinateReferenceLocation> {
        match self {
            CraniotomyType::FiveMm => Some(CoordinateReferenceLocation::Lambda),
            CraniotomyType::ThreeMm
            | CraniotomyType::Dhc
            | CraniotomyType::Whc
            | CraniotomyType::Other => None,
        }
    }

    /// Returns simple name for display
    pub fn simple_name(&self) -> &'static str {
        match self {
            CraniotomyType::ThreeMm => "3 mm",
            CraniotomyType::FiveMm => "5 mm",
            CraniotomyType::Dhc => "Dual hemisphere craniotomy",
            CraniotomyType::Whc => "Whole hemisphere craniotomy",
            CraniotomyType::Other => "Other",
        }
    }
}

impl fmt::Display for CraniotomyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}

/// Skull landmark used as the origin of stereotaxic coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CoordinateReferenceLocation {
    Bregma,
    Lambda,
}

/// Injection delivery technique
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum InjectionType {
    Iontophoresis,
    Nanoject,
}

impl InjectionType {
    /// Returns simple name for display
    pub fn simple_name(&self) -> &'static str {
        match self {
            InjectionType::Iontophoresis => "iontophoresis",
            InjectionType::Nanoject => "nanoject",
        }
    }
}

impl fmt::Display for InjectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}

/// Fiber supplied for an implant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FiberType {
    Standard,
    Custom,
}

/// What was done at a burr hole
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BurrHoleProcedure {
    Injection,
    FiberImplant,
    InjectionFiberImplant,
}

impl BurrHoleProcedure {
    /// Whether an injection was performed at the hole
    pub fn has_injection(&self) -> bool {
        matches!(
            self,
            BurrHoleProcedure::Injection | BurrHoleProcedure::InjectionFiberImplant
        )
    }

    /// Whether a fiber was implanted at the hole
    pub fn has_fiber_implant(&self) -> bool {
        matches!(
            self,
            BurrHoleProcedure::FiberImplant | BurrHoleProcedure::InjectionFiberImplant
        )
    }
}

/// Material applied over an exposed craniotomy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ProtectiveMaterial {
    #[serde(rename = "Dura-Gel")]
    Duragel,
    #[serde(rename = "Kwik-Cast")]
    KwikCast,
    #[serde(rename = "SORTA-clear")]
    SortaClear,
    #[serde(rename = "Other")]
    Other,
}

/// Material of a fiber ferrule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FerruleMaterial {
    Ceramic,
    StainlessSteel,
}

/// Histology procedure classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SpecimenProcedureType {
    Delipidation,
    Expansion,
    Gelation,
    Immunolabeling,
    #[serde(rename = "Refractive index matching")]
    RefractiveIndexMatching,
}

impl SpecimenProcedureType {
    /// Returns simple name for display
    pub fn simple_name(&self) -> &'static str {
        match self {
            SpecimenProcedureType::Delipidation => "Delipidation",
            SpecimenProcedureType::Expansion => "Expansion",
            SpecimenProcedureType::Gelation => "Gelation",
            SpecimenProcedureType::Immunolabeling => "Immunolabeling",
            SpecimenProcedureType::RefractiveIndexMatching => "Refractive index matching",
        }
    }
}

impl fmt::Display for SpecimenProcedureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}

/// Whether an antibody binds the target or the primary antibody
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ImmunolabelClass {
    Primary,
    Secondary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_craniotomy_size_and_reference() {
        assert_eq!(CraniotomyType::ThreeMm.size_mm(), Some(3));
        assert_eq!(CraniotomyType::ThreeMm.coordinate_reference(), None);
        assert_eq!(CraniotomyType::FiveMm.size_mm(), Some(5));
        assert_eq!(
            CraniotomyType::FiveMm.coordinate_reference(),
            Some(CoordinateReferenceLocation::Lambda)
        );
        assert_eq!(CraniotomyType::Whc.size_mm(), None);
        assert_eq!(CraniotomyType::Other.coordinate_reference(), None);
    }

    #[test]
    fn test_burr_hole_procedure_flags() {
        assert!(BurrHoleProcedure::Injection.has_injection());
        assert!(!BurrHoleProcedure::Injection.has_fiber_implant());
        assert!(BurrHoleProcedure::InjectionFiberImplant.has_injection());
        assert!(BurrHoleProcedure::InjectionFiberImplant.has_fiber_implant());
        assert!(!BurrHoleProcedure::FiberImplant.has_injection());
    }
}
