use super::mapper::NsbMapper;
use super::parsers::{
    concentration_value, is_concentration, is_titer, parse_concentration, parse_current,
    parse_decimal, parse_fiber_length_mm, parse_length_of_time, parse_titer,
};
use super::tables;
use crate::nsb::{BurrHoleFields, SchemaVersion};
use crate::schema::{
    During, FiberType, InjectionMaterial, InjectionType, NonViralMaterial, Side, ViralMaterial,
    CONCENTRATION_UNIT,
};
use log::debug;
use rust_decimal::Decimal;

/// Injectable material name paired with its titer or concentration text
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InjectableMaterial {
    pub material_id: Option<String>,
    pub titer_str: Option<String>,
}

impl InjectableMaterial {
    pub fn new(material_id: Option<&str>, titer_str: Option<&str>) -> Self {
        Self {
            material_id: material_id.map(str::to_string),
            titer_str: titer_str.map(str::to_string),
        }
    }

    /// Classifies the pair as a viral or non-viral material
    ///
    /// A scientific-notation titer makes it viral, an `mg/mL` concentration
    /// non-viral. Pairs without a name or with neither pattern are dropped.
    pub fn classify(&self) -> Option<InjectionMaterial> {
        let name = self.material_id.as_deref()?.trim();
        if name.is_empty() {
            return None;
        }
        let strength = self.titer_str.as_deref().unwrap_or_default();

        if is_titer(strength) {
            return Some(InjectionMaterial::Viral(ViralMaterial {
                name: name.to_string(),
                titer: parse_titer(Some(strength)),
            }));
        }

        if is_concentration(strength) {
            return Some(InjectionMaterial::NonViral(NonViralMaterial {
                name: name.to_string(),
                concentration: parse_concentration(concentration_value(strength)),
                concentration_unit: CONCENTRATION_UNIT,
            }));
        }

        debug!(
            "Dropping material {:?}: no titer or concentration in {:?}",
            name, self.titer_str
        );
        None
    }
}

/// Everything the request says about one burr hole
///
/// Built fresh by [`NsbMapper::burr_hole_info`] and consumed by the
/// procedure builders.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BurrHoleInfo {
    pub hemisphere: Option<Side>,
    pub coordinate_ml: Option<Decimal>,
    pub coordinate_ap: Option<Decimal>,
    /// Non-empty when present; see [`merge_depth`]
    pub coordinate_depth: Option<Vec<Decimal>>,
    pub angle: Option<Decimal>,
    pub during: Option<During>,
    pub inj_type: Option<InjectionType>,
    pub virus_strain: Option<String>,
    pub inj_current: Option<Decimal>,
    pub alternating_current: Option<String>,
    pub inj_duration: Option<Decimal>,
    /// One entry per depth
    pub inj_volume: Option<Vec<Decimal>>,
    pub injectable_materials: Vec<InjectableMaterial>,
    pub fiber_implant_depth: Option<Decimal>,
    pub fiber_type: Option<FiberType>,
    pub fiber_length: Option<Decimal>,
}

/// Merges up to three depth readings, keeping order and dropping gaps
///
/// Returns `None` only when all three readings are missing.
pub fn merge_depth(
    first: Option<Decimal>,
    second: Option<Decimal>,
    third: Option<Decimal>,
) -> Option<Vec<Decimal>> {
    let depths: Vec<Decimal> = [first, second, third].into_iter().flatten().collect();
    if depths.is_empty() {
        None
    } else {
        Some(depths)
    }
}

/// Repeats the per-depth volume once for every depth
fn injection_volume(volume: Option<Decimal>, depth: Option<&[Decimal]>) -> Option<Vec<Decimal>> {
    let volume = volume?;
    match depth {
        Some(depths) => Some(vec![volume; depths.len()]),
        None => Some(vec![volume]),
    }
}

impl NsbMapper<'_> {
    /// Assembles the burr-hole bundle for slot `slot` (1-based)
    ///
    /// Slots outside the list's range yield an empty bundle.
    pub fn burr_hole_info(&self, slot: u8) -> BurrHoleInfo {
        match self.record().burr_hole_fields(slot) {
            Some(fields) => self.assemble_burr_hole(&fields),
            None => BurrHoleInfo::default(),
        }
    }

    fn assemble_burr_hole(&self, fields: &BurrHoleFields<'_>) -> BurrHoleInfo {
        let [dv1, dv2, dv3] = fields.dv;
        let coordinate_depth = merge_depth(
            parse_decimal(dv1),
            parse_decimal(dv2),
            parse_decimal(dv3),
        );
        let inj_volume = injection_volume(
            parse_decimal(fields.volume),
            coordinate_depth.as_deref(),
        );

        let injectable_materials = fields
            .materials
            .iter()
            .zip(fields.titers.iter())
            .map(|(material, titer)| InjectableMaterial::new(*material, *titer))
            .collect();

        BurrHoleInfo {
            hemisphere: fields.hemisphere.and_then(tables::map_hemisphere),
            coordinate_ml: parse_decimal(fields.ml),
            coordinate_ap: parse_decimal(fields.ap),
            coordinate_depth,
            angle: parse_decimal(fields.angle),
            during: fields.during.and_then(tables::map_during),
            inj_type: fields.device.and_then(tables::map_injection_device),
            virus_strain: fields.virus_strain.map(str::to_string),
            inj_current: parse_current(fields.current),
            alternating_current: fields
                .alternating_current
                .and_then(tables::map_alternating_current)
                .map(str::to_string),
            inj_duration: parse_length_of_time(fields.duration),
            inj_volume,
            injectable_materials,
            fiber_implant_depth: parse_decimal(fields.fiber_dv),
            fiber_type: fields.fiber_type.and_then(tables::map_fiber_type),
            fiber_length: self.fiber_length(fields.fiber_length),
        }
    }

    fn fiber_length(&self, text: Option<&str>) -> Option<Decimal> {
        match self.version() {
            SchemaVersion::V2023 => parse_decimal(text),
            SchemaVersion::V2024 => parse_fiber_length_mm(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nsb::{
        NsbAlternatingCurrent, NsbDuring, NsbFiberType, NsbHemisphere, NsbInjectionDevice,
        NsbRecord,
    };
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_merge_depth() {
        assert_eq!(merge_depth(None, None, None), None);
        assert_eq!(merge_depth(None, Some(dec("1")), None), Some(vec![dec("1")]));
        assert_eq!(
            merge_depth(Some(dec("3")), None, Some(dec("1"))),
            Some(vec![dec("3"), dec("1")])
        );
    }

    #[test]
    fn test_injection_volume() {
        let depths = [dec("1"), dec("2"), dec("3")];
        assert_eq!(
            injection_volume(Some(dec("50")), Some(&depths)),
            Some(vec![dec("50"); 3])
        );
        assert_eq!(injection_volume(Some(dec("50")), None), Some(vec![dec("50")]));
        assert_eq!(injection_volume(None, Some(&depths)), None);
    }

    #[test]
    fn test_out_of_range_slot_is_empty() {
        let record = NsbRecord::default();
        let mapper = NsbMapper::new(&record);
        assert_eq!(mapper.burr_hole_info(0), BurrHoleInfo::default());
        assert_eq!(mapper.burr_hole_info(7), BurrHoleInfo::default());
        assert!(mapper.burr_hole_info(7).injectable_materials.is_empty());
    }

    #[test]
    fn test_legacy_slot_info() {
        let record = NsbRecord {
            inj1_hemisphere: Some(NsbHemisphere::Right),
            inj1_ml: Some("-0.85".to_string()),
            inj1_ap: Some("-3.8".to_string()),
            inj1_dv: Some("3.6".to_string()),
            inj1_dv_3: Some("4.2".to_string()),
            inj1_angle: Some("10".to_string()),
            inj1_during: Some(NsbDuring::InitialSurgery),
            inj1_type: Some(NsbInjectionDevice::NanojectPressure),
            inj1_vol: Some("100".to_string()),
            inj1_ionto_time: Some("5 min".to_string()),
            inj1_material: Some("AAV-Syn-GCaMP".to_string()),
            inj1_titer: Some("2.3e12".to_string()),
            inj1_material_2: Some("Dextran".to_string()),
            ..Default::default()
        };

        let info = NsbMapper::new(&record).burr_hole_info(1);
        assert_eq!(info.hemisphere, Some(Side::Right));
        assert_eq!(info.coordinate_ml, Some(dec("-0.85")));
        assert_eq!(info.coordinate_ap, Some(dec("-3.8")));
        assert_eq!(info.coordinate_depth, Some(vec![dec("3.6"), dec("4.2")]));
        assert_eq!(info.angle, Some(dec("10")));
        assert_eq!(info.during, Some(During::Initial));
        assert_eq!(info.inj_type, Some(InjectionType::Nanoject));
        assert_eq!(info.inj_volume, Some(vec![dec("100"), dec("100")]));
        assert_eq!(info.inj_duration, Some(dec("5")));
        assert_eq!(info.injectable_materials.len(), 4);
        assert_eq!(
            info.injectable_materials[0],
            InjectableMaterial::new(Some("AAV-Syn-GCaMP"), Some("2.3e12"))
        );
        assert_eq!(
            info.injectable_materials[1],
            InjectableMaterial::new(Some("Dextran"), None)
        );
        assert_eq!(info.injectable_materials[2], InjectableMaterial::default());
    }

    #[test]
    fn test_current_slot_info() {
        let record = NsbRecord {
            burr4_injection_device: Some(NsbInjectionDevice::Iontophoresis),
            burr4_current: Some("5 uA".to_string()),
            burr4_alternating_time: Some(NsbAlternatingCurrent::SevenSeven),
            burr4_fiber_dv: Some("4.1".to_string()),
            burr4_fiber_type: Some(NsbFiberType::Standard),
            burr4_fiber_length: Some("3.5 mm".to_string()),
            ..Default::default()
        };

        let info = NsbMapper::new(&record).burr_hole_info(4);
        assert_eq!(info.inj_type, Some(InjectionType::Iontophoresis));
        assert_eq!(info.inj_current, Some(dec("5")));
        assert_eq!(info.alternating_current.as_deref(), Some("7/7"));
        assert_eq!(info.coordinate_depth, None);
        assert_eq!(info.inj_volume, None);
        assert_eq!(info.fiber_implant_depth, Some(dec("4.1")));
        assert_eq!(info.fiber_type, Some(FiberType::Standard));
        assert_eq!(info.fiber_length, Some(dec("3.5")));
    }

    #[test]
    fn test_fiber_length_by_schema_version() {
        let record = NsbRecord {
            burr3_fiber_length: Some("3.5".to_string()),
            ..Default::default()
        };
        let v2023 = NsbMapper::with_version(&record, SchemaVersion::V2023);
        let v2024 = NsbMapper::with_version(&record, SchemaVersion::V2024);
        assert_eq!(v2023.burr_hole_info(3).fiber_length, Some(dec("3.5")));
        assert_eq!(v2024.burr_hole_info(3).fiber_length, None);
    }

    #[test]
    fn test_classify_materials() {
        let viral = InjectableMaterial::new(Some("AAV-GFP"), Some("2.3e12"));
        assert_eq!(
            viral.classify(),
            Some(InjectionMaterial::Viral(ViralMaterial {
                name: "AAV-GFP".to_string(),
                titer: Some(2_300_000_000_000),
            }))
        );

        let reagent = InjectableMaterial::new(Some("Dextran"), Some("5 mg/mL"));
        assert_eq!(
            reagent.classify(),
            Some(InjectionMaterial::NonViral(NonViralMaterial {
                name: "Dextran".to_string(),
                concentration: Some(dec("5")),
                concentration_unit: CONCENTRATION_UNIT,
            }))
        );

        assert_eq!(InjectableMaterial::new(Some("Dextran"), None).classify(), None);
        assert_eq!(InjectableMaterial::new(Some("X"), Some("high")).classify(), None);
        assert_eq!(InjectableMaterial::new(None, Some("1e12")).classify(), None);
    }
}
