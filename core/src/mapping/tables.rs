//! Source choice → canonical vocabulary tables
//!
//! Each function is an exhaustive match over one source column. Adding a
//! choice to the list means adding an arm here; `Select...` and choices
//! with no canonical counterpart map to `None`.

use crate::nsb::{
    NsbAlternatingCurrent, NsbBurrHole, NsbCraniotomyType, NsbDuring, NsbFiberType,
    NsbHemisphere, NsbIacucProtocol, NsbInjectionDevice, NsbIsoLevel, NsbLimsProject,
    NsbLimsTaskflow, NsbProcedure, NsbProtectiveMaterial, NsbWorkstation,
};
use crate::schema::{
    BurrHoleProcedure, CraniotomyType, During, FiberType, InjectionType, ProtectiveMaterial, Side,
};
use rust_decimal::Decimal;

pub fn map_during(value: NsbDuring) -> Option<During> {
    match value {
        NsbDuring::Select => None,
        NsbDuring::InitialSurgery => Some(During::Initial),
        NsbDuring::FollowUpSurgery => Some(During::FollowUp),
    }
}

pub fn map_hemisphere(value: NsbHemisphere) -> Option<Side> {
    match value {
        NsbHemisphere::Select => None,
        NsbHemisphere::Left => Some(Side::Left),
        NsbHemisphere::Right => Some(Side::Right),
    }
}

pub fn map_burr_hole_procedure(value: NsbBurrHole) -> Option<BurrHoleProcedure> {
    match value {
        NsbBurrHole::Select => None,
        NsbBurrHole::Injection => Some(BurrHoleProcedure::Injection),
        NsbBurrHole::FiberImplant => Some(BurrHoleProcedure::FiberImplant),
        NsbBurrHole::InjectionFiberImplant => Some(BurrHoleProcedure::InjectionFiberImplant),
    }
}

pub fn map_injection_device(value: NsbInjectionDevice) -> Option<InjectionType> {
    match value {
        NsbInjectionDevice::Select => None,
        NsbInjectionDevice::Iontophoresis => Some(InjectionType::Iontophoresis),
        NsbInjectionDevice::NanojectPressure => Some(InjectionType::Nanoject),
    }
}

pub fn map_alternating_current(value: NsbAlternatingCurrent) -> Option<&'static str> {
    match value {
        NsbAlternatingCurrent::Select => None,
        NsbAlternatingCurrent::SevenSeven => Some("7/7"),
        NsbAlternatingCurrent::FiveFive => Some("5/5"),
        NsbAlternatingCurrent::Continuous => None,
    }
}

pub fn map_fiber_type(value: NsbFiberType) -> Option<FiberType> {
    match value {
        NsbFiberType::Select => None,
        NsbFiberType::Standard => Some(FiberType::Standard),
        NsbFiberType::Custom => Some(FiberType::Custom),
    }
}

pub fn map_craniotomy_type(value: NsbCraniotomyType) -> Option<CraniotomyType> {
    match value {
        NsbCraniotomyType::Select => None,
        NsbCraniotomyType::VisualCortex5mm => Some(CraniotomyType::FiveMm),
        NsbCraniotomyType::FrontalWindow3mm => Some(CraniotomyType::ThreeMm),
        NsbCraniotomyType::MotorCortex3mm => Some(CraniotomyType::ThreeMm),
        NsbCraniotomyType::WhcNp => Some(CraniotomyType::Whc),
        NsbCraniotomyType::Whc2p => Some(CraniotomyType::Whc),
        NsbCraniotomyType::Dhc => Some(CraniotomyType::Dhc),
        NsbCraniotomyType::MesoscopeWindow5mm => Some(CraniotomyType::FiveMm),
        NsbCraniotomyType::EphysWindow3mm => Some(CraniotomyType::ThreeMm),
        NsbCraniotomyType::Other => Some(CraniotomyType::Other),
    }
}

pub fn map_protective_material(value: NsbProtectiveMaterial) -> Option<ProtectiveMaterial> {
    match value {
        NsbProtectiveMaterial::Select => None,
        NsbProtectiveMaterial::KwikCast => Some(ProtectiveMaterial::KwikCast),
        NsbProtectiveMaterial::DuraGel => Some(ProtectiveMaterial::Duragel),
        NsbProtectiveMaterial::SortaClear => Some(ProtectiveMaterial::SortaClear),
        NsbProtectiveMaterial::Other => Some(ProtectiveMaterial::Other),
    }
}

/// Isoflurane percentage of an iso-level choice
pub fn map_iso_level(value: NsbIsoLevel) -> Option<Decimal> {
    let hundredths = match value {
        NsbIsoLevel::Select => return None,
        NsbIsoLevel::L025 => 25,
        NsbIsoLevel::L050 => 50,
        NsbIsoLevel::L075 => 75,
        NsbIsoLevel::L100 => 100,
        NsbIsoLevel::L125 => 125,
        NsbIsoLevel::L150 => 150,
        NsbIsoLevel::L175 => 175,
        NsbIsoLevel::L200 => 200,
        NsbIsoLevel::L225 => 225,
        NsbIsoLevel::L250 => 250,
        NsbIsoLevel::L275 => 275,
        NsbIsoLevel::L300 => 300,
    };
    Some(Decimal::new(hundredths, 2))
}

pub fn map_workstation(value: NsbWorkstation) -> Option<&'static str> {
    match value {
        NsbWorkstation::Select => None,
        NsbWorkstation::Sws1 => Some("SWS 1"),
        NsbWorkstation::Sws2 => Some("SWS 2"),
        NsbWorkstation::Sws3 => Some("SWS 3"),
        NsbWorkstation::Sws4 => Some("SWS 4"),
        NsbWorkstation::Sws5 => Some("SWS 5"),
        NsbWorkstation::Sws6 => Some("SWS 6"),
        NsbWorkstation::Sws7 => Some("SWS 7"),
        NsbWorkstation::Sws8 => Some("SWS 8"),
        NsbWorkstation::Sws9 => Some("SWS 9"),
    }
}

pub fn map_iacuc_protocol(value: NsbIacucProtocol) -> Option<&'static str> {
    match value {
        NsbIacucProtocol::Select => None,
        NsbIacucProtocol::P2001 => Some("2001"),
        NsbIacucProtocol::P2002 => Some("2002"),
        NsbIacucProtocol::P2003 => Some("2003"),
        NsbIacucProtocol::P2004 => Some("2004"),
        NsbIacucProtocol::P2005 => Some("2005"),
        NsbIacucProtocol::P2006 => Some("2006"),
        NsbIacucProtocol::P2011 => Some("2011"),
        NsbIacucProtocol::P2102 => Some("2102"),
        NsbIacucProtocol::P2103 => Some("2103"),
        NsbIacucProtocol::P2104 => Some("2104"),
        NsbIacucProtocol::P2105 => Some("2105"),
        NsbIacucProtocol::P2106 => Some("2106"),
        NsbIacucProtocol::P2107 => Some("2107"),
        NsbIacucProtocol::P2108 => Some("2108"),
        NsbIacucProtocol::P2109 => Some("2109"),
        NsbIacucProtocol::P2110 => Some("2110"),
        NsbIacucProtocol::P2113 => Some("2113"),
        NsbIacucProtocol::P2115 => Some("2115"),
        NsbIacucProtocol::P2117 => Some("2117"),
        NsbIacucProtocol::P2201 => Some("2201"),
        NsbIacucProtocol::P2202 => Some("2202"),
        NsbIacucProtocol::P2205 => Some("2205"),
        NsbIacucProtocol::P2212 => Some("2212"),
        NsbIacucProtocol::P2301 => Some("2301"),
        NsbIacucProtocol::P2304 => Some("2304"),
        NsbIacucProtocol::P2305 => Some("2305"),
        NsbIacucProtocol::P2306 => Some("2306"),
        NsbIacucProtocol::P2307 => Some("2307"),
        NsbIacucProtocol::P2401 => Some("2401"),
        NsbIacucProtocol::P2402 => Some("2402"),
        NsbIacucProtocol::P2403 => Some("2403"),
    }
}

pub fn map_lims_taskflow(value: NsbLimsTaskflow) -> Option<&'static str> {
    match value {
        NsbLimsTaskflow::Select => None,
        NsbLimsTaskflow::AindEphysSurgeryOnly => Some("Ephys Platform"),
        NsbLimsTaskflow::AindOphysSurgeryOnly => Some("Ophys Platform"),
        NsbLimsTaskflow::AindBehaviorSurgeryOnly => Some("Behavior Platform"),
        NsbLimsTaskflow::AindMsmaSurgeryOnly => Some("MSMA Platform"),
        NsbLimsTaskflow::AindU19Thalamus => Some("Thalamus in the middle"),
        NsbLimsTaskflow::AindExaSpim => Some("ExaSPIM Platform"),
        NsbLimsTaskflow::AindSmartSpim => Some("SmartSPIM Platform"),
        NsbLimsTaskflow::AindDynamicForaging => Some("Dynamic Foraging"),
        NsbLimsTaskflow::AindFiberPhotometry => Some("Ophys Platform - FIP"),
        NsbLimsTaskflow::AindBrainComputerInterface => Some("Brain Computer Interface"),
        NsbLimsTaskflow::BrainStim
        | NsbLimsTaskflow::CellTypesSurgery
        | NsbLimsTaskflow::ConnectivitySurgery
        | NsbLimsTaskflow::DynamicRoutingSurgery
        | NsbLimsTaskflow::IsiOnly
        | NsbLimsTaskflow::MesoscopeSurgery
        | NsbLimsTaskflow::OpenScopeSurgery
        | NsbLimsTaskflow::VisualBehaviorSurgery
        | NsbLimsTaskflow::Other => None,
    }
}

/// Canonical project name of a LIMS project
///
/// Only projects run by the neural dynamics platforms have one.
pub fn map_lims_project(value: NsbLimsProject) -> Option<&'static str> {
    match value {
        NsbLimsProject::Select => None,
        NsbLimsProject::AindBehavior => Some("Behavior Platform"),
        NsbLimsProject::AindBehaviorDevelopment => Some("Behavior Platform"),
        NsbLimsProject::AindBrainComputerInterface => Some("Brain Computer Interface"),
        NsbLimsProject::AindBrainWideDopamine => Some("Dopamine"),
        NsbLimsProject::AindCellTypeLookup => Some("Cell Type Lookup Table"),
        NsbLimsProject::AindCognitiveFlexibility => Some("Cognitive flexibility in patch foraging"),
        NsbLimsProject::AindDispatchBehavior => Some("Behavior Platform"),
        NsbLimsProject::AindDispatchEphys => Some("Ephys Platform"),
        NsbLimsProject::AindDispatchOphys => Some("Ophys Platform"),
        NsbLimsProject::AindDopamine => Some("Dopamine"),
        NsbLimsProject::AindDynamicForaging => Some("Dynamic Foraging"),
        NsbLimsProject::AindEphys => Some("Ephys Platform"),
        NsbLimsProject::AindEphysDevelopment => Some("Ephys Platform"),
        NsbLimsProject::AindExaSpim => Some("ExaSPIM Platform"),
        NsbLimsProject::AindFiberPhotometry => Some("Ophys Platform - FIP"),
        NsbLimsProject::AindLearningmFish => Some("Learning mFISH"),
        NsbLimsProject::AindMedulla => Some("Medulla"),
        NsbLimsProject::AindMolecularAnatomy => Some("Molecular Anatomy Cell Types"),
        NsbLimsProject::AindMsma => Some("MSMA Platform"),
        NsbLimsProject::AindNeuromodulatorDynamics => Some("Neuromodulator dynamics"),
        NsbLimsProject::AindOphys => Some("Ophys Platform"),
        NsbLimsProject::AindOpticalPhysiologyDevelopment => Some("Ophys Platform"),
        NsbLimsProject::AindSlap2 => Some("Ophys Platform - SLAP2"),
        NsbLimsProject::AindSmartSpim => Some("SmartSPIM Platform"),
        NsbLimsProject::AindThalamusMotorControl => Some("Thalamus and motor control"),
        NsbLimsProject::AindU19Thalamus => Some("Thalamus in the middle"),
        NsbLimsProject::AindVr => Some("Behavior Platform - VR"),
        NsbLimsProject::AllenInstituteOphys => None,
        NsbLimsProject::BrainTv => None,
        NsbLimsProject::BrainTvViral => None,
        NsbLimsProject::C200Task1 => None,
        NsbLimsProject::C200Task2 => None,
        NsbLimsProject::C600Task1 => None,
        NsbLimsProject::C600Task2 => None,
        NsbLimsProject::CellTypesBrainStim => None,
        NsbLimsProject::CellTypesConnectomics => None,
        NsbLimsProject::CellTypesLabelling => None,
        NsbLimsProject::CellTypesMorphology => None,
        NsbLimsProject::CellTypesPatchSeq => None,
        NsbLimsProject::CellTypesRetrogradeLabelling => None,
        NsbLimsProject::CellTypesSpatialTranscriptomics => None,
        NsbLimsProject::CellTypesTracing => None,
        NsbLimsProject::CellTypesTransgenic => None,
        NsbLimsProject::CellTypesTransgenicCharacterization => None,
        NsbLimsProject::CellTypesViral => None,
        NsbLimsProject::CitycapeSsn => None,
        NsbLimsProject::ConnectivityDevelopment => None,
        NsbLimsProject::ConnectivityRetrograde => None,
        NsbLimsProject::ConnectivityTracing => None,
        NsbLimsProject::DeepscopeDevelopment => None,
        NsbLimsProject::DeepscopeSlcProduction => None,
        NsbLimsProject::DeepscopeTask1 => None,
        NsbLimsProject::DeepscopeTask2 => None,
        NsbLimsProject::DendriticImaging => None,
        NsbLimsProject::DynamicRoutingBehavior => None,
        NsbLimsProject::DynamicRoutingEphys => None,
        NsbLimsProject::DynamicRoutingOpto => None,
        NsbLimsProject::DynamicRoutingSurgicalDevelopment => None,
        NsbLimsProject::DynamicRoutingTask1 => None,
        NsbLimsProject::DynamicRoutingUltraOpto => None,
        NsbLimsProject::EphysDevelopment => None,
        NsbLimsProject::EphysOptotagging => None,
        NsbLimsProject::GenotypingDevelopment => None,
        NsbLimsProject::H200Task1 => None,
        NsbLimsProject::H300Task1 => None,
        NsbLimsProject::HumanCellTypes => None,
        NsbLimsProject::IsiCalibration => None,
        NsbLimsProject::IsiDevelopment => None,
        NsbLimsProject::IsiProduction => None,
        NsbLimsProject::IsiTask1 => None,
        NsbLimsProject::IvscCalibration => None,
        NsbLimsProject::IvscCellTypes => None,
        NsbLimsProject::IvscDevelopment => None,
        NsbLimsProject::IvscProduction => None,
        NsbLimsProject::LearningmFishDevelopment => None,
        NsbLimsProject::LearningmFishTask1A => None,
        NsbLimsProject::LearningmFishTask1B => None,
        NsbLimsProject::LearningmFishTask2 => None,
        NsbLimsProject::MesoscopeDevelopment => None,
        NsbLimsProject::MesoscopeProduction => None,
        NsbLimsProject::MesoscopeTask1 => None,
        NsbLimsProject::MicroscopyDevelopment => None,
        NsbLimsProject::MindScope2pDevelopment => None,
        NsbLimsProject::MindScope2pTransgenic => None,
        NsbLimsProject::MindScopeAnatomyDevelopment => None,
        NsbLimsProject::MindScopeBehaviorDevelopment => None,
        NsbLimsProject::MindScopeConnectomics => None,
        NsbLimsProject::MindScopeLearning => None,
        NsbLimsProject::MindScopeMultiscopeDevelopment => None,
        NsbLimsProject::MindScopeMultiscopeSignalNoise => None,
        NsbLimsProject::MindScopeNeuropixelsDevelopment => None,
        NsbLimsProject::MindScopeNeuropixelsTransgenic => None,
        NsbLimsProject::MindScopeOphysDevelopment => None,
        NsbLimsProject::MindScopeOphysTransgenic => None,
        NsbLimsProject::MindScopeOptogenetics => None,
        NsbLimsProject::MindScopeSlc => None,
        NsbLimsProject::MindScopeTransgenic => None,
        NsbLimsProject::MindScopeViral => None,
        NsbLimsProject::MivscNpVentral => None,
        NsbLimsProject::MouseBrainCellAtlas => None,
        NsbLimsProject::MouseConnectivity => None,
        NsbLimsProject::MouseFullMorphology => None,
        NsbLimsProject::MultiscopeDevelopment => None,
        NsbLimsProject::MultiscopeSignalNoise => None,
        NsbLimsProject::MultiscopeTask1 => None,
        NsbLimsProject::NeurodataWithoutBorders => None,
        NsbLimsProject::NeuropixelOptotagging => None,
        NsbLimsProject::NeuropixelPlatformDevelopment => None,
        NsbLimsProject::NeuropixelTransgenicCharacterization => None,
        NsbLimsProject::NeuropixelVisualBehavior => None,
        NsbLimsProject::NeuropixelVisualBehaviorDevelopment => None,
        NsbLimsProject::NeuropixelVisualCoding => None,
        NsbLimsProject::NeuropixelVisualCodingDevelopment => None,
        NsbLimsProject::OpenScopeBrainWideEvents => None,
        NsbLimsProject::OpenScopeCreDriverCharacterization => None,
        NsbLimsProject::OpenScopeDeepscope => None,
        NsbLimsProject::OpenScopeDendriteCoupling => None,
        NsbLimsProject::OpenScopeEphysDevelopment => None,
        NsbLimsProject::OpenScopeGlobalLocalOddball => None,
        NsbLimsProject::OpenScopeIllusion => None,
        NsbLimsProject::OpenScopeIsiDevelopment => None,
        NsbLimsProject::OpenScopeLearning => None,
        NsbLimsProject::OpenScopeLoop => None,
        NsbLimsProject::OpenScopeMotionPerception => None,
        NsbLimsProject::OpenScopeMultiplexing => None,
        NsbLimsProject::OpenScopePredictiveProcessing => None,
        NsbLimsProject::OpenScopeSequenceLearning => None,
        NsbLimsProject::OpenScopeSurround => None,
        NsbLimsProject::OpenScopeTemporalBarcode => None,
        NsbLimsProject::OpenScopeTexture => None,
        NsbLimsProject::OpenScopeVasculature => None,
        NsbLimsProject::OpenScopeVisualNeuropixels => None,
        NsbLimsProject::OpenScopeWorkingMemory => None,
        NsbLimsProject::OptogeneticsDevelopment => None,
        NsbLimsProject::PatchSeqDevelopment => None,
        NsbLimsProject::PatchSeqProduction => None,
        NsbLimsProject::RetrogradeTracing => None,
        NsbLimsProject::SingleNeuronMetadata => None,
        NsbLimsProject::SlcDevelopment => None,
        NsbLimsProject::SlcProduction => None,
        NsbLimsProject::SpontaneousActivity => None,
        NsbLimsProject::SurgeryDevelopment => None,
        NsbLimsProject::SurgeryPractice => None,
        NsbLimsProject::SurgeryQc => None,
        NsbLimsProject::SurgeryTraining => None,
        NsbLimsProject::T301 => None,
        NsbLimsProject::T301Task1 => None,
        NsbLimsProject::T301Task2 => None,
        NsbLimsProject::T503Task1 => None,
        NsbLimsProject::T504Task1 => None,
        NsbLimsProject::T600Task1 => None,
        NsbLimsProject::TaskTrainedNetworksDevelopment => None,
        NsbLimsProject::TaskTrainedNetworksMultiscope => None,
        NsbLimsProject::TaskTrainedNetworksNeuropixel => None,
        NsbLimsProject::TaskTrainedNetworksSlc => None,
        NsbLimsProject::ThalamocorticalCircuits => None,
        NsbLimsProject::TinyBlueDotBehavior => None,
        NsbLimsProject::TransgenicCharacterization => None,
        NsbLimsProject::U01Bfct => None,
        NsbLimsProject::U01BfctTiming => None,
        NsbLimsProject::VgtEnhancers => None,
        NsbLimsProject::VipAxonalV1Phase1 => None,
        NsbLimsProject::VipSomaticV1Meso => None,
        NsbLimsProject::VipSomaticV1Phase1 => None,
        NsbLimsProject::VipSomaticV1Phase2 => None,
        NsbLimsProject::ViralStrategiesDevelopment => None,
        NsbLimsProject::ViralStrategiesProduction => None,
        NsbLimsProject::VisualBehavior => None,
        NsbLimsProject::VisualBehaviorDevelopment => None,
        NsbLimsProject::VisualBehaviorMultiscope => None,
        NsbLimsProject::VisualBehaviorMultiscope4Areasx2d => None,
        NsbLimsProject::VisualBehaviorMultiscopeDevelopment => None,
        NsbLimsProject::VisualBehaviorNeuropixels => None,
        NsbLimsProject::VisualBehaviorTask1A => None,
        NsbLimsProject::VisualBehaviorTask1B => None,
        NsbLimsProject::VisualBehaviorTask2 => None,
        NsbLimsProject::VisualCoding2p => None,
        NsbLimsProject::VisualCodingDevelopment => None,
        NsbLimsProject::VisualCodingNeuropixels => None,
        NsbLimsProject::VisualCodingTransgenic => None,
        NsbLimsProject::WholeBrainImaging => None,
        NsbLimsProject::WholeBrainMorphology => None,
        NsbLimsProject::Other => None,
    }
}

/// Request kinds whose only skull work is a headpost
pub fn is_headpost_procedure(value: NsbProcedure) -> bool {
    match value {
        NsbProcedure::HpOnly
        | NsbProcedure::HpTranscranial
        | NsbProcedure::HpTranscranialInjection
        | NsbProcedure::HpInjection
        | NsbProcedure::HpFiberImplant
        | NsbProcedure::HpInjectionFiberImplant => true,
        NsbProcedure::Select
        | NsbProcedure::StereotaxicInjection
        | NsbProcedure::InjectionFiberImplant
        | NsbProcedure::FiberImplantOnly
        | NsbProcedure::VisualCtx2p
        | NsbProcedure::VisualCtxNp
        | NsbProcedure::VisualCtxNpInjection
        | NsbProcedure::FrontalCtx2p
        | NsbProcedure::FrontalCtxNp
        | NsbProcedure::MotorCtx2p
        | NsbProcedure::MotorCtxNp
        | NsbProcedure::WhcNp
        | NsbProcedure::Whc2p
        | NsbProcedure::Dhc
        | NsbProcedure::CranialWindow
        | NsbProcedure::Mesoscope5mm
        | NsbProcedure::SxRetroOrbital
        | NsbProcedure::IntraperitonealInjection
        | NsbProcedure::IcvInjection
        | NsbProcedure::SpinalCordInjection
        | NsbProcedure::TailVeinInjection
        | NsbProcedure::Perfusion
        | NsbProcedure::Other => false,
    }
}

/// Request kinds that open a craniotomy window
pub fn is_craniotomy_procedure(value: NsbProcedure) -> bool {
    match value {
        NsbProcedure::VisualCtx2p
        | NsbProcedure::VisualCtxNp
        | NsbProcedure::VisualCtxNpInjection
        | NsbProcedure::FrontalCtx2p
        | NsbProcedure::FrontalCtxNp
        | NsbProcedure::MotorCtx2p
        | NsbProcedure::MotorCtxNp
        | NsbProcedure::WhcNp
        | NsbProcedure::Whc2p
        | NsbProcedure::Dhc
        | NsbProcedure::CranialWindow
        | NsbProcedure::Mesoscope5mm => true,
        NsbProcedure::Select
        | NsbProcedure::HpOnly
        | NsbProcedure::HpTranscranial
        | NsbProcedure::HpTranscranialInjection
        | NsbProcedure::HpInjection
        | NsbProcedure::HpFiberImplant
        | NsbProcedure::HpInjectionFiberImplant
        | NsbProcedure::StereotaxicInjection
        | NsbProcedure::InjectionFiberImplant
        | NsbProcedure::FiberImplantOnly
        | NsbProcedure::SxRetroOrbital
        | NsbProcedure::IntraperitonealInjection
        | NsbProcedure::IcvInjection
        | NsbProcedure::SpinalCordInjection
        | NsbProcedure::TailVeinInjection
        | NsbProcedure::Perfusion
        | NsbProcedure::Other => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_choice_is_mapped() {
        // Exhaustive matches guarantee totality; this checks the placeholder arms.
        assert!(NsbDuring::ALL.iter().all(|v| map_during(*v).is_some() || *v == NsbDuring::Select));
        assert!(NsbHemisphere::ALL
            .iter()
            .all(|v| map_hemisphere(*v).is_some() || *v == NsbHemisphere::Select));
        assert!(NsbIsoLevel::ALL
            .iter()
            .all(|v| map_iso_level(*v).is_some() || *v == NsbIsoLevel::Select));
        assert!(NsbIacucProtocol::ALL
            .iter()
            .all(|v| map_iacuc_protocol(*v).map(|p| p == v.as_str()).unwrap_or(true)));
        assert!(NsbWorkstation::ALL
            .iter()
            .all(|v| map_workstation(*v).map(|w| w == v.as_str()).unwrap_or(true)));
    }

    #[test]
    fn test_lims_names_only_for_aind_choices() {
        assert!(NsbLimsProject::ALL.len() > 150);
        for v in NsbLimsProject::ALL {
            let name = map_lims_project(*v);
            if v.as_str().starts_with("AIND") {
                assert!(name.is_some(), "{} has no project name", v);
            } else {
                assert_eq!(name, None, "{} should have no project name", v);
            }
        }
        for v in NsbLimsTaskflow::ALL {
            let name = map_lims_taskflow(*v);
            if v.as_str().starts_with("AIND") {
                assert!(name.is_some(), "{} has no taskflow name", v);
            } else {
                assert_eq!(name, None, "{} should have no taskflow name", v);
            }
        }
        assert_eq!(map_lims_project(NsbLimsProject::AindMsma), Some("MSMA Platform"));
        assert_eq!(map_lims_taskflow(NsbLimsTaskflow::AindExaSpim), Some("ExaSPIM Platform"));
    }

    #[test]
    fn test_source_labels_are_unique() {
        let mut labels: Vec<&str> = NsbLimsProject::ALL.iter().map(|v| v.as_str()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), NsbLimsProject::ALL.len());

        let mut labels: Vec<&str> = NsbProcedure::ALL.iter().map(|v| v.as_str()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), NsbProcedure::ALL.len());
    }

    #[test]
    fn test_iso_level_values() {
        assert_eq!(map_iso_level(NsbIsoLevel::L150), Some(Decimal::new(15, 1)));
        assert_eq!(map_iso_level(NsbIsoLevel::Select), None);
        for v in NsbIsoLevel::ALL.iter().filter(|v| **v != NsbIsoLevel::Select) {
            assert_eq!(map_iso_level(*v).unwrap().to_string(), v.as_str());
        }
    }

    #[test]
    fn test_procedure_kind_sets_are_disjoint() {
        for v in NsbProcedure::ALL {
            assert!(!(is_headpost_procedure(*v) && is_craniotomy_procedure(*v)));
        }
        assert!(is_headpost_procedure(NsbProcedure::HpOnly));
        assert!(is_craniotomy_procedure(NsbProcedure::VisualCtx2p));
        assert!(!is_headpost_procedure(NsbProcedure::StereotaxicInjection));
        assert!(!is_craniotomy_procedure(NsbProcedure::StereotaxicInjection));
    }

    #[test]
    fn test_craniotomy_type_table() {
        assert_eq!(
            map_craniotomy_type(NsbCraniotomyType::VisualCortex5mm),
            Some(CraniotomyType::FiveMm)
        );
        assert_eq!(
            map_craniotomy_type(NsbCraniotomyType::FrontalWindow3mm),
            Some(CraniotomyType::ThreeMm)
        );
        assert_eq!(map_craniotomy_type(NsbCraniotomyType::Select), None);
        for v in NsbCraniotomyType::ALL.iter().filter(|v| **v != NsbCraniotomyType::Select) {
            assert!(map_craniotomy_type(*v).is_some(), "{} is unmapped", v);
        }
    }
}
