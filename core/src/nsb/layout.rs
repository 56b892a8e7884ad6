//! Per-slot column layout of the burr-hole field families
//!
//! The request list stores up to six burr holes as flat column families.
//! Holes 1 and 2 still use the legacy `Inj{n}*` columns from when the list
//! only tracked injections; holes 3 to 6 use `Burr{n}*`. The table below is
//! the single place that knows which column backs which attribute of which
//! slot.

use super::enums::{
    NsbAlternatingCurrent, NsbBurrHole, NsbDuring, NsbFiberType, NsbHemisphere,
    NsbInjectionDevice,
};
use super::record::NsbRecord;

/// Number of burr-hole slots the list provides
pub const BURR_HOLE_COUNT: u8 = 6;

/// Borrowed view over the raw columns of one burr-hole slot
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BurrHoleFields<'a> {
    pub procedure: Option<NsbBurrHole>,
    pub hemisphere: Option<NsbHemisphere>,
    pub ml: Option<&'a str>,
    pub ap: Option<&'a str>,
    /// Up to three depth readings in column order
    pub dv: [Option<&'a str>; 3],
    pub angle: Option<&'a str>,
    pub during: Option<NsbDuring>,
    pub device: Option<NsbInjectionDevice>,
    pub virus_strain: Option<&'a str>,
    pub current: Option<&'a str>,
    pub alternating_current: Option<NsbAlternatingCurrent>,
    pub duration: Option<&'a str>,
    pub volume: Option<&'a str>,
    pub materials: [Option<&'a str>; 4],
    pub titers: [Option<&'a str>; 4],
    pub fiber_dv: Option<&'a str>,
    pub fiber_type: Option<NsbFiberType>,
    pub fiber_length: Option<&'a str>,
}

macro_rules! slot_fields {
    ($record:ident, {
        procedure: $procedure:ident,
        hemisphere: $hemisphere:ident,
        ml: $ml:ident,
        ap: $ap:ident,
        dv: [$($dv:ident),+],
        angle: $angle:ident,
        during: $during:ident,
        device: $device:ident,
        virus_strain: $virus_strain:ident,
        current: $current:ident,
        alternating_current: $alternating_current:ident,
        duration: $duration:ident,
        volume: $volume:ident,
        materials: [$($material:ident),+],
        titers: [$($titer:ident),+],
        fiber_dv: $fiber_dv:ident,
        fiber_type: $fiber_type:ident,
        fiber_length: $fiber_length:ident,
    }) => {
        BurrHoleFields {
            procedure: $record.$procedure,
            hemisphere: $record.$hemisphere,
            ml: $record.$ml.as_deref(),
            ap: $record.$ap.as_deref(),
            dv: [$($record.$dv.as_deref()),+],
            angle: $record.$angle.as_deref(),
            during: $record.$during,
            device: $record.$device,
            virus_strain: $record.$virus_strain.as_deref(),
            current: $record.$current.as_deref(),
            alternating_current: $record.$alternating_current,
            duration: $record.$duration.as_deref(),
            volume: $record.$volume.as_deref(),
            materials: [$($record.$material.as_deref()),+],
            titers: [$($record.$titer.as_deref()),+],
            fiber_dv: $record.$fiber_dv.as_deref(),
            fiber_type: $record.$fiber_type,
            fiber_length: $record.$fiber_length.as_deref(),
        }
    };
}

impl NsbRecord {
    /// Returns the raw columns of burr-hole slot `slot` (1-based)
    ///
    /// Returns `None` for slots outside `1..=BURR_HOLE_COUNT`.
    pub fn burr_hole_fields(&self, slot: u8) -> Option<BurrHoleFields<'_>> {
        match slot {
            1 => Some(slot_fields!(self, {
                procedure: burr_hole_1,
                hemisphere: inj1_hemisphere,
                ml: inj1_ml,
                ap: inj1_ap,
                dv: [inj1_dv, inj1_dv_2, inj1_dv_3],
                angle: inj1_angle,
                during: inj1_during,
                device: inj1_type,
                virus_strain: inj1_virus_strain,
                current: inj1_current,
                alternating_current: inj1_alternating_time,
                duration: inj1_ionto_time,
                volume: inj1_vol,
                materials: [inj1_material, inj1_material_2, inj1_material_3, inj1_material_4],
                titers: [inj1_titer, inj1_titer_2, inj1_titer_3, inj1_titer_4],
                fiber_dv: fiber_implant1_dv,
                fiber_type: fiber1_type,
                fiber_length: fiber1_length,
            })),
            2 => Some(slot_fields!(self, {
                procedure: burr_hole_2,
                hemisphere: inj2_hemisphere,
                ml: inj2_ml,
                ap: inj2_ap,
                dv: [inj2_dv, inj2_dv_2, inj2_dv_3],
                angle: inj2_angle,
                during: inj2_during,
                device: inj2_type,
                virus_strain: inj2_virus_strain,
                current: inj2_current,
                alternating_current: inj2_alternating_time,
                duration: inj2_ionto_time,
                volume: inj2_vol,
                materials: [inj2_material, inj2_material_2, inj2_material_3, inj2_material_4],
                titers: [inj2_titer, inj2_titer_2, inj2_titer_3, inj2_titer_4],
                fiber_dv: fiber_implant2_dv,
                fiber_type: fiber2_type,
                fiber_length: fiber2_length,
            })),
            3 => Some(slot_fields!(self, {
                procedure: burr_hole_3,
                hemisphere: burr3_hemisphere,
                ml: burr3_ml,
                ap: burr3_ap,
                dv: [burr3_dv_1, burr3_dv_2, burr3_dv_3],
                angle: burr3_angle,
                during: burr3_during,
                device: burr3_injection_device,
                virus_strain: burr3_virus_strain,
                current: burr3_current,
                alternating_current: burr3_alternating_time,
                duration: burr3_injection_duration,
                volume: burr3_volume,
                materials: [burr3_material_1, burr3_material_2, burr3_material_3, burr3_material_4],
                titers: [burr3_titer_1, burr3_titer_2, burr3_titer_3, burr3_titer_4],
                fiber_dv: burr3_fiber_dv,
                fiber_type: burr3_fiber_type,
                fiber_length: burr3_fiber_length,
            })),
            4 => Some(slot_fields!(self, {
                procedure: burr_hole_4,
                hemisphere: burr4_hemisphere,
                ml: burr4_ml,
                ap: burr4_ap,
                dv: [burr4_dv_1, burr4_dv_2, burr4_dv_3],
                angle: burr4_angle,
                during: burr4_during,
                device: burr4_injection_device,
                virus_strain: burr4_virus_strain,
                current: burr4_current,
                alternating_current: burr4_alternating_time,
                duration: burr4_injection_duration,
                volume: burr4_volume,
                materials: [burr4_material_1, burr4_material_2, burr4_material_3, burr4_material_4],
                titers: [burr4_titer_1, burr4_titer_2, burr4_titer_3, burr4_titer_4],
                fiber_dv: burr4_fiber_dv,
                fiber_type: burr4_fiber_type,
                fiber_length: burr4_fiber_length,
            })),
            5 => Some(slot_fields!(self, {
                procedure: burr_hole_5,
                hemisphere: burr5_hemisphere,
                ml: burr5_ml,
                ap: burr5_ap,
                dv: [burr5_dv_1, burr5_dv_2, burr5_dv_3],
                angle: burr5_angle,
                during: burr5_during,
                device: burr5_injection_device,
                virus_strain: burr5_virus_strain,
                current: burr5_current,
                alternating_current: burr5_alternating_time,
                duration: burr5_injection_duration,
                volume: burr5_volume,
                materials: [burr5_material_1, burr5_material_2, burr5_material_3, burr5_material_4],
                titers: [burr5_titer_1, burr5_titer_2, burr5_titer_3, burr5_titer_4],
                fiber_dv: burr5_fiber_dv,
                fiber_type: burr5_fiber_type,
                fiber_length: burr5_fiber_length,
            })),
            6 => Some(slot_fields!(self, {
                procedure: burr_hole_6,
                hemisphere: burr6_hemisphere,
                ml: burr6_ml,
                ap: burr6_ap,
                dv: [burr6_dv_1, burr6_dv_2, burr6_dv_3],
                angle: burr6_angle,
                during: burr6_during,
                device: burr6_injection_device,
                virus_strain: burr6_virus_strain,
                current: burr6_current,
                alternating_current: burr6_alternating_time,
                duration: burr6_injection_duration,
                volume: burr6_volume,
                materials: [burr6_material_1, burr6_material_2, burr6_material_3, burr6_material_4],
                titers: [burr6_titer_1, burr6_titer_2, burr6_titer_3, burr6_titer_4],
                fiber_dv: burr6_fiber_dv,
                fiber_type: burr6_fiber_type,
                fiber_length: burr6_fiber_length,
            })),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_slots() {
        let record = NsbRecord::default();
        assert!(record.burr_hole_fields(0).is_none());
        assert!(record.burr_hole_fields(BURR_HOLE_COUNT + 1).is_none());
        assert!(record.burr_hole_fields(BURR_HOLE_COUNT).is_some());
    }

    #[test]
    fn test_legacy_slot_columns() {
        let record = NsbRecord {
            burr_hole_1: Some(NsbBurrHole::Injection),
            inj1_dv: Some("-1.0".to_string()),
            inj1_dv_3: Some("-3.0".to_string()),
            inj1_material_2: Some("AAV-GFP".to_string()),
            fiber1_type: Some(NsbFiberType::Custom),
            ..Default::default()
        };

        let fields = record.burr_hole_fields(1).unwrap();
        assert_eq!(fields.procedure, Some(NsbBurrHole::Injection));
        assert_eq!(fields.dv, [Some("-1.0"), None, Some("-3.0")]);
        assert_eq!(fields.materials[1], Some("AAV-GFP"));
        assert_eq!(fields.fiber_type, Some(NsbFiberType::Custom));
    }

    #[test]
    fn test_current_slot_columns() {
        let record = NsbRecord {
            burr_hole_5: Some(NsbBurrHole::FiberImplant),
            burr5_ap: Some("-2.0".to_string()),
            burr5_titer_4: Some("1e12".to_string()),
            burr5_fiber_length: Some("3.5 mm".to_string()),
            ..Default::default()
        };

        let fields = record.burr_hole_fields(5).unwrap();
        assert_eq!(fields.procedure, Some(NsbBurrHole::FiberImplant));
        assert_eq!(fields.ap, Some("-2.0"));
        assert_eq!(fields.titers[3], Some("1e12"));
        assert_eq!(fields.fiber_length, Some("3.5 mm"));
        assert_eq!(record.burr_hole_fields(4).unwrap(), BurrHoleFields::default());
    }
}
