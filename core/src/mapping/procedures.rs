use super::burr_hole::BurrHoleInfo;
use super::mapper::NsbMapper;
use crate::nsb::{NsbHeadpost, NsbHeadpostType, NsbRecord, BURR_HOLE_COUNT};
use crate::schema::{
    Anaesthetic, BrainInjection, CoordinateReferenceLocation, Craniotomy, During, FerruleMaterial,
    FiberImplant, FiberProbe, FiberType, Headframe, InjectionType, IontophoresisInjection,
    NanojectInjection, OphysProbe, Surgery, SurgeryProcedure, ANGLE_UNIT, CURRENT_UNIT, SIZE_UNIT,
    TIME_UNIT, VOLUME_UNIT, WEIGHT_UNIT,
};
use chrono::NaiveDate;
use log::{debug, info};
use rust_decimal::Decimal;
use std::cmp::Ordering;

/// Session-level values of one surgical phase
///
/// The request keeps one column group per session: the headpost (`HP*`)
/// columns describe the initial surgery, the first-injection columns the
/// follow up.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SurgeryDuringInfo {
    pub start_date: Option<NaiveDate>,
    pub anaesthetic_duration_in_minutes: Option<Decimal>,
    pub anaesthetic_level: Option<Decimal>,
    pub workstation_id: Option<String>,
    pub recovery_time: Option<Decimal>,
    pub weight_prior: Option<Decimal>,
    pub weight_post: Option<Decimal>,
}

/// Reads the column group that belongs to `phase`
pub fn resolve_surgery_timing(phase: During, mapper: &NsbMapper<'_>) -> SurgeryDuringInfo {
    match phase {
        During::Initial => SurgeryDuringInfo {
            start_date: mapper.aind_date_of_surgery(),
            anaesthetic_duration_in_minutes: mapper.aind_hp_anaesthesia_duration(),
            anaesthetic_level: mapper.aind_hp_iso_level(),
            workstation_id: mapper.aind_hp_work_station(),
            recovery_time: mapper.aind_hp_recovery(),
            weight_prior: mapper.aind_weight_before_surgery(),
            weight_post: mapper.aind_weight_after_surgery(),
        },
        During::FollowUp => SurgeryDuringInfo {
            start_date: mapper.aind_date_first_injection(),
            anaesthetic_duration_in_minutes: mapper.aind_first_inj_anaesthesia_duration(),
            anaesthetic_level: mapper.aind_first_inj_iso_level(),
            workstation_id: mapper.aind_first_inj_work_station(),
            recovery_time: mapper.aind_first_inj_recovery(),
            weight_prior: mapper.aind_first_inj_weight_before(),
            weight_post: mapper.aind_first_inj_weight_after(),
        },
    }
}

/// Headframe and well hardware implied by a headpost choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeadPostInfo {
    pub headframe_type: Option<&'static str>,
    pub headframe_part_number: Option<&'static str>,
    pub well_type: Option<&'static str>,
    pub well_part_number: Option<&'static str>,
}

impl HeadPostInfo {
    const fn new(
        headframe_type: &'static str,
        headframe_part_number: &'static str,
        well_type: Option<&'static str>,
        well_part_number: Option<&'static str>,
    ) -> Self {
        Self {
            headframe_type: Some(headframe_type),
            headframe_part_number: Some(headframe_part_number),
            well_type,
            well_part_number,
        }
    }

    /// Looks up the hardware for a (headpost, well) combination
    ///
    /// Combinations the shop never built yield an empty info.
    pub fn from_headpost(
        headpost: Option<NsbHeadpost>,
        headpost_type: Option<NsbHeadpostType>,
    ) -> Self {
        use NsbHeadpost as Hp;
        use NsbHeadpostType as Well;

        match (headpost, headpost_type) {
            (Some(Hp::VisualCtx | Hp::FrontalCtx), Some(Well::CamStyle)) => {
                Self::new("CAM-style", "0160-100-10 Rev A", Some("CAM-style"), Some("0160-055-08"))
            }
            (Some(Hp::MotorCtx | Hp::Mesoscope), Some(Well::MesoscopeStyle)) => Self::new(
                "Mesoscope-style",
                "0160-100-10",
                Some("Mesoscope-style"),
                Some("0160-200-20"),
            ),
            (Some(Hp::NeuropixelStyle), Some(Well::NeuropixelStyle)) => Self::new(
                "Neuropixel-style",
                "0160-100-10",
                Some("Neuropixel-style"),
                Some("0160-200-36"),
            ),
            (Some(Hp::WhcNp), Some(Well::WhcNp)) => Self::new(
                "WHC NP",
                "0160-100-45",
                Some("WHC NP"),
                Some("0160-200-36"),
            ),
            (Some(Hp::Whc42WithLc), Some(Well::Whc42)) => {
                Self::new("WHC #42", "42", Some("WHC #42"), Some("0160-200-42"))
            }
            (Some(Hp::DynamicRouting), Some(Well::NeuropixelStyle)) => Self::new(
                "Dynamic Routing",
                "0160-100-46",
                Some("Neuropixel-style"),
                Some("0160-200-36"),
            ),
            (Some(Hp::AiStraightBar), None | Some(Well::NoWell | Well::Select)) => {
                Self::new("AI Straight bar", "002.202", None, None)
            }
            _ => Self::default(),
        }
    }
}

impl From<HeadPostInfo> for Headframe {
    fn from(info: HeadPostInfo) -> Self {
        Headframe {
            headframe_type: info.headframe_type.map(str::to_string),
            headframe_part_number: info.headframe_part_number.map(str::to_string),
            well_type: info.well_type.map(str::to_string),
            well_part_number: info.well_part_number.map(str::to_string),
        }
    }
}

/// Fiber NSB stocks when a request asks for the standard implant
fn standard_fiber_probe(total_length: Option<Decimal>) -> FiberProbe {
    FiberProbe {
        manufacturer: Some("Doric".to_string()),
        model: Some("MFC_200/250-0.37".to_string()),
        core_diameter: Some(Decimal::from(200)),
        core_diameter_unit: Some("um"),
        numerical_aperture: Some(Decimal::new(37, 2)),
        ferrule_material: Some(FerruleMaterial::Ceramic),
        total_length,
        length_unit: Some(SIZE_UNIT),
        notes: None,
    }
}

/// Procedures of one record, bucketed by surgical phase
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProcedureBuckets {
    pub initial: Vec<SurgeryProcedure>,
    pub follow_up: Vec<SurgeryProcedure>,
    pub other: Vec<SurgeryProcedure>,
}

impl ProcedureBuckets {
    fn push(&mut self, during: Option<During>, procedure: SurgeryProcedure) {
        match during {
            Some(During::Initial) => self.initial.push(procedure),
            Some(During::FollowUp) => self.follow_up.push(procedure),
            None => self.other.push(procedure),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.initial.is_empty() && self.follow_up.is_empty() && self.other.is_empty()
    }
}

/// Rebuilds typed procedures and surgeries from an NSB record
///
/// # Example
///
/// ```
/// use labmeta_core::mapping::NsbProcedures;
/// use labmeta_core::nsb::{NsbBurrHole, NsbDuring, NsbInjectionDevice, NsbRecord};
///
/// let record = NsbRecord {
///     burr_hole_3: Some(NsbBurrHole::Injection),
///     burr3_during: Some(NsbDuring::InitialSurgery),
///     burr3_injection_device: Some(NsbInjectionDevice::NanojectPressure),
///     burr3_volume: Some("50".to_string()),
///     ..Default::default()
/// };
///
/// let surgeries = NsbProcedures::new(&record).surgeries();
/// assert_eq!(surgeries.len(), 1);
/// assert_eq!(surgeries[0].procedures[0].simple_name(), "Nanoject injection");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NsbProcedures<'a> {
    mapper: NsbMapper<'a>,
}

impl<'a> NsbProcedures<'a> {
    pub fn new(record: &'a NsbRecord) -> Self {
        Self {
            mapper: NsbMapper::new(record),
        }
    }

    pub fn from_mapper(mapper: NsbMapper<'a>) -> Self {
        Self { mapper }
    }

    /// Headframe, if the requested procedure kind includes a headpost
    pub fn headframe(&self) -> Option<Headframe> {
        if !self.mapper.has_headpost_procedure() {
            debug!(
                "Headframe skipped: procedure {:?} has no headpost",
                self.mapper.record().procedure
            );
            return None;
        }
        Some(self.build_headframe())
    }

    fn build_headframe(&self) -> Headframe {
        let record = self.mapper.record();
        debug!(
            "Building headframe for {:?} / {:?}",
            record.headpost, record.headpost_type
        );
        HeadPostInfo::from_headpost(record.headpost, record.headpost_type).into()
    }

    /// Craniotomy, if the requested procedure kind includes one
    pub fn craniotomy(&self) -> Option<Craniotomy> {
        if !self.mapper.has_craniotomy_procedure() {
            debug!(
                "Craniotomy skipped: procedure {:?} opens no window",
                self.mapper.record().procedure
            );
            return None;
        }
        let craniotomy_type = self.mapper.aind_craniotomy_type();
        debug!("Building craniotomy of type {:?}", craniotomy_type);
        let recovery_time = self
            .mapper
            .aind_hp_during()
            .and_then(|phase| resolve_surgery_timing(phase, &self.mapper).recovery_time);

        Some(Craniotomy {
            craniotomy_type,
            craniotomy_hemisphere: self.mapper.aind_craniotomy_hemisphere(),
            craniotomy_coordinates_reference: craniotomy_type
                .and_then(|t| t.coordinate_reference()),
            craniotomy_size: craniotomy_type
                .and_then(|t| t.size_mm())
                .map(Decimal::from),
            craniotomy_size_unit: SIZE_UNIT,
            protective_material: self.mapper.aind_cran_protective_material(),
            recovery_time,
            recovery_time_unit: TIME_UNIT,
        })
    }

    /// Injection at burr hole `slot`, if the hole records one
    ///
    /// The variant follows the injection device alone.
    pub fn burr_hole_injection(&self, slot: u8) -> Option<SurgeryProcedure> {
        let kind = self.mapper.aind_burr_hole_procedure(slot)?;
        if !kind.has_injection() {
            return None;
        }
        let info = self.mapper.burr_hole_info(slot);
        Some(self.build_injection(slot, &info))
    }

    fn build_injection(&self, slot: u8, info: &BurrHoleInfo) -> SurgeryProcedure {
        let recovery_time = info
            .during
            .and_then(|phase| resolve_surgery_timing(phase, &self.mapper).recovery_time);
        let injection = BrainInjection {
            protocol_id: None,
            during: info.during,
            injection_materials: info
                .injectable_materials
                .iter()
                .filter_map(|m| m.classify())
                .collect(),
            virus_strain: info.virus_strain.clone(),
            injection_hemisphere: info.hemisphere,
            injection_coordinate_ml: info.coordinate_ml,
            injection_coordinate_ap: info.coordinate_ap,
            injection_coordinate_depth: info.coordinate_depth.clone(),
            injection_coordinate_reference: Some(CoordinateReferenceLocation::Bregma),
            injection_angle: info.angle,
            injection_angle_unit: ANGLE_UNIT,
            injection_duration: info.inj_duration,
            injection_duration_unit: TIME_UNIT,
            recovery_time,
            recovery_time_unit: TIME_UNIT,
        };

        match info.inj_type {
            Some(InjectionType::Iontophoresis) => {
                debug!("Burr hole {}: iontophoresis injection", slot);
                SurgeryProcedure::IontophoresisInjection(IontophoresisInjection {
                    injection,
                    injection_current: info.inj_current,
                    injection_current_unit: CURRENT_UNIT,
                    alternating_current: info.alternating_current.clone(),
                })
            }
            Some(InjectionType::Nanoject) => {
                debug!("Burr hole {}: nanoject injection", slot);
                SurgeryProcedure::NanojectInjection(NanojectInjection {
                    injection,
                    injection_volume: info.inj_volume.clone(),
                    injection_volume_unit: VOLUME_UNIT,
                })
            }
            None => {
                debug!("Burr hole {}: no injection device, generic injection", slot);
                SurgeryProcedure::BrainInjection(injection)
            }
        }
    }

    /// Fiber implant at burr hole `slot`, if the hole records one
    ///
    /// The probe is left unnamed; names are assigned per surgery by
    /// [`assign_fiber_names`].
    pub fn burr_hole_fiber_implant(&self, slot: u8) -> Option<SurgeryProcedure> {
        let kind = self.mapper.aind_burr_hole_procedure(slot)?;
        if !kind.has_fiber_implant() {
            return None;
        }
        let info = self.mapper.burr_hole_info(slot);
        Some(SurgeryProcedure::FiberImplant(
            self.build_fiber_implant(&info),
        ))
    }

    fn build_fiber_implant(&self, info: &BurrHoleInfo) -> FiberImplant {
        let ophys_probe = match info.fiber_type {
            Some(FiberType::Standard) => standard_fiber_probe(info.fiber_length),
            Some(FiberType::Custom) | None => FiberProbe {
                total_length: info.fiber_length,
                length_unit: info.fiber_length.map(|_| SIZE_UNIT),
                notes: self.mapper.aind_fiber_implant_notes(),
                ..Default::default()
            },
        };

        FiberImplant {
            protocol_id: None,
            probes: vec![OphysProbe {
                name: String::new(),
                ophys_probe,
                stereotactic_coordinate_ml: info.coordinate_ml,
                stereotactic_coordinate_ap: info.coordinate_ap,
                stereotactic_coordinate_dv: info.fiber_implant_depth,
                stereotactic_coordinate_reference: Some(CoordinateReferenceLocation::Bregma),
                angle: info.angle,
                angle_unit: ANGLE_UNIT,
                bregma_to_lambda_distance: None,
            }],
        }
    }

    /// Builds every recognized procedure and files it under its phase
    pub fn procedures_by_phase(&self) -> ProcedureBuckets {
        let mut buckets = ProcedureBuckets::default();

        if let Some(headframe) = self.headframe() {
            buckets.push(
                self.mapper.aind_hp_during(),
                SurgeryProcedure::Headframe(headframe),
            );
        }

        if let Some(craniotomy) = self.craniotomy() {
            let during = self.mapper.aind_hp_during();
            buckets.push(during, SurgeryProcedure::Craniotomy(craniotomy));
            // A craniotomy is always performed through a headframe.
            buckets.push(
                during,
                SurgeryProcedure::Headframe(self.build_headframe()),
            );
        }

        for slot in 1..=BURR_HOLE_COUNT {
            let during = self.mapper.burr_hole_info(slot).during;
            if let Some(injection) = self.burr_hole_injection(slot) {
                buckets.push(during, injection);
            }
            if let Some(implant) = self.burr_hole_fiber_implant(slot) {
                buckets.push(during, implant);
            }
        }

        assign_fiber_names(&mut buckets.initial);
        assign_fiber_names(&mut buckets.follow_up);
        assign_fiber_names(&mut buckets.other);
        buckets
    }

    /// Assembles one surgery per non-empty phase
    ///
    /// A record with no recognized procedure but a surgery date still
    /// yields a single surgery with an empty procedure list.
    pub fn surgeries(&self) -> Vec<Surgery> {
        let buckets = self.procedures_by_phase();
        let mut surgeries = Vec::new();

        if buckets.is_empty() {
            if let Some(start_date) = self.mapper.aind_date_of_surgery() {
                debug!("No procedures recognized, emitting generic surgery");
                surgeries.push(self.generic_surgery(start_date));
            }
            return surgeries;
        }

        let ProcedureBuckets {
            initial,
            follow_up,
            other,
        } = buckets;

        if !initial.is_empty() {
            surgeries.push(self.phased_surgery(During::Initial, initial));
        }
        if !follow_up.is_empty() {
            surgeries.push(self.phased_surgery(During::FollowUp, follow_up));
        }
        if !other.is_empty() {
            surgeries.push(self.unphased_surgery(other));
        }

        info!(
            "Mapped {} surgeries for subject {:?}",
            surgeries.len(),
            self.mapper.aind_subject_id()
        );
        surgeries
    }

    fn base_surgery(&self, start_date: Option<NaiveDate>) -> Surgery {
        Surgery {
            start_date,
            experimenter_full_name: self.mapper.aind_experimenter_full_name(),
            iacuc_protocol: self.mapper.aind_iacuc_protocol(),
            animal_weight_prior: None,
            animal_weight_post: None,
            weight_unit: WEIGHT_UNIT,
            anaesthesia: None,
            workstation_id: None,
            notes: self.mapper.aind_surgery_notes(),
            procedures: Vec::new(),
        }
    }

    fn phased_surgery(&self, phase: During, procedures: Vec<SurgeryProcedure>) -> Surgery {
        let timing = resolve_surgery_timing(phase, &self.mapper);
        Surgery {
            animal_weight_prior: timing.weight_prior,
            animal_weight_post: timing.weight_post,
            anaesthesia: Anaesthetic::isoflurane(
                timing.anaesthetic_duration_in_minutes,
                timing.anaesthetic_level,
            ),
            workstation_id: timing.workstation_id,
            procedures,
            ..self.base_surgery(timing.start_date)
        }
    }

    fn unphased_surgery(&self, procedures: Vec<SurgeryProcedure>) -> Surgery {
        Surgery {
            procedures,
            ..self.base_surgery(self.mapper.aind_date_of_surgery())
        }
    }

    fn generic_surgery(&self, start_date: NaiveDate) -> Surgery {
        Surgery {
            animal_weight_prior: self.mapper.aind_weight_before_surgery(),
            animal_weight_post: self.mapper.aind_weight_after_surgery(),
            ..self.base_surgery(Some(start_date))
        }
    }
}

/// Orders fibers across a surgery and names them `Fiber_0`, `Fiber_1`, ...
///
/// Fibers are ranked by AP descending, then ML ascending; fibers missing a
/// coordinate rank after those that have it.
pub fn assign_fiber_names(procedures: &mut [SurgeryProcedure]) {
    let mut probes: Vec<&mut OphysProbe> = procedures
        .iter_mut()
        .filter_map(|p| match p {
            SurgeryProcedure::FiberImplant(implant) => Some(implant.probes.iter_mut()),
            _ => None,
        })
        .flatten()
        .collect();

    probes.sort_by(|a, b| {
        descending_missing_last(a.stereotactic_coordinate_ap, b.stereotactic_coordinate_ap).then(
            ascending_missing_last(a.stereotactic_coordinate_ml, b.stereotactic_coordinate_ml),
        )
    });

    for (index, probe) in probes.into_iter().enumerate() {
        probe.name = format!("Fiber_{}", index);
    }
}

fn descending_missing_last(a: Option<Decimal>, b: Option<Decimal>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn ascending_missing_last(a: Option<Decimal>, b: Option<Decimal>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
