//! Canonical metadata schema produced by the mappers
//!
//! These types are the target vocabulary of every mapping in this crate:
//! - [`Surgery`] and its [`SurgeryProcedure`] variants for surgery requests
//! - [`SpecimenProcedure`] and [`Antibody`] for SLIMS histology records
//! - the enums naming sides, phases, craniotomy and injection kinds
//!
//! They only carry data. Presence checks beyond what the mappers enforce
//! belong to whoever consumes the serialized output.

mod enums;
mod specimen;
mod surgery;

pub use enums::{
    BurrHoleProcedure, CoordinateReferenceLocation, CraniotomyType, During, FerruleMaterial,
    FiberType, ImmunolabelClass, InjectionType, ProtectiveMaterial, Side, SpecimenProcedureType,
};
pub use specimen::{Antibody, Reagent, SpecimenProcedure, MASS_UNIT};
pub use surgery::{
    Anaesthetic, BrainInjection, Craniotomy, FiberImplant, FiberProbe, Headframe,
    InjectionMaterial, IontophoresisInjection, NanojectInjection, NonViralMaterial, OphysProbe,
    Surgery, SurgeryProcedure, ViralMaterial, ANGLE_UNIT, CONCENTRATION_UNIT, CURRENT_UNIT,
    SIZE_UNIT, TIME_UNIT, VOLUME_UNIT, WEIGHT_UNIT,
};
