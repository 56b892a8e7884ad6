//! Choice columns of the NSB surgery request list
//!
//! Every enum here is the complete set of values the list offers for one
//! column, spelled exactly as SharePoint stores them. `Select...` is the
//! placeholder SharePoint keeps when nobody made a choice.

use super::macros::source_enum;

source_enum! {
    /// Session a headpost or burr-hole procedure belongs to
    pub enum NsbDuring {
        Select => "Select...",
        InitialSurgery => "Initial Surgery",
        FollowUpSurgery => "Follow up Surgery",
    }
}

source_enum! {
    /// Hemisphere column
    pub enum NsbHemisphere {
        Select => "Select...",
        Left => "Left",
        Right => "Right",
    }
}

source_enum! {
    /// What the surgeon does at a burr hole
    pub enum NsbBurrHole {
        Select => "Select...",
        Injection => "Injection",
        FiberImplant => "Fiber Implant",
        InjectionFiberImplant => "Injection + Fiber Implant",
    }
}

source_enum! {
    /// Injection device column
    pub enum NsbInjectionDevice {
        Select => "Select...",
        Iontophoresis => "Iontophoresis",
        NanojectPressure => "Nanoject (Pressure)",
    }
}

source_enum! {
    /// Iontophoresis on/off cycle in seconds
    pub enum NsbAlternatingCurrent {
        Select => "Select...",
        SevenSeven => "7/7",
        FiveFive => "5/5",
        Continuous => "Continuous",
    }
}

source_enum! {
    /// Fiber supplied for an implant
    pub enum NsbFiberType {
        Select => "Select...",
        Standard => "Standard (provided by NSB)",
        Custom => "Custom",
    }
}

source_enum! {
    /// Requested procedure kind for the whole request
    pub enum NsbProcedure {
        Select => "Select...",
        HpOnly => "Headpost only",
        HpTranscranial => "HP Transcranial (for ISI)",
        HpInjection => "Headpost + Injection",
        HpFiberImplant => "Headpost + Fiber Optic Implant",
        HpInjectionFiberImplant => "Headpost + Injection + Fiber Optic Implant",
        StereotaxicInjection => "Stereotaxic Injection",
        InjectionFiberImplant => "Injection + Fiber Optic Implant",
        FiberImplantOnly => "Fiber Optic Implant",
        VisualCtx2p => "Visual Ctx 2P",
        VisualCtxNp => "Visual Ctx NP",
        FrontalCtx2p => "Frontal Ctx 2P",
        MotorCtx2p => "Motor Ctx 2P",
        WhcNp => "WHC NP",
        Whc2p => "WHC 2P",
        Dhc => "Dual hemisphere craniotomy (DHC)",
        HpTranscranialInjection => "HP Transcranial + Injection",
        FrontalCtxNp => "Frontal Ctx NP",
        MotorCtxNp => "Motor Ctx NP",
        VisualCtxNpInjection => "Visual Ctx NP + Injection",
        CranialWindow => "Cranial window",
        Mesoscope5mm => "Mesoscope 5mm window",
        SxRetroOrbital => "Retro-Orbital Injection",
        IntraperitonealInjection => "Intraperitoneal Injection",
        IcvInjection => "ICV Injection",
        SpinalCordInjection => "Spinal Cord Injection",
        TailVeinInjection => "Tail Vein Injection",
        Perfusion => "Perfusion",
        Other => "Other",
    }
}

source_enum! {
    /// Craniotomy type column
    pub enum NsbCraniotomyType {
        Select => "Select...",
        VisualCortex5mm => "Visual Cortex 5mm",
        FrontalWindow3mm => "Frontal Window 3mm",
        MotorCortex3mm => "Motor Cortex 3mm",
        WhcNp => "WHC NP",
        Whc2p => "WHC 2P",
        Dhc => "DHC",
        MesoscopeWindow5mm => "Mesoscope Window 5mm",
        EphysWindow3mm => "Ephys Window 3mm",
        Other => "Other",
    }
}

source_enum! {
    /// Material applied over the craniotomy
    pub enum NsbProtectiveMaterial {
        Select => "Select...",
        KwikCast => "Kwik-Cast",
        DuraGel => "Dura-Gel",
        SortaClear => "Sorta-Clear",
        Other => "Other",
    }
}

source_enum! {
    /// Headpost column
    pub enum NsbHeadpost {
        Select => "Select...",
        VisualCtx => "Visual Ctx",
        FrontalCtx => "Frontal Ctx",
        MotorCtx => "Motor Ctx",
        WhcNp => "WHC NP",
        Whc42WithLc => "WHC #42 with LC well",
        NeuropixelStyle => "Neuropixel-style",
        DynamicRouting => "Dynamic Routing",
        AiStraightBar => "AI Straight bar",
        Mesoscope => "Mesoscope-style",
        EphysNp => "Ephys NP",
        MesoscopeV2 => "Mesoscope-style v2",
        Custom => "Custom",
        Tbd => "TBD",
        Other => "Other",
    }
}

source_enum! {
    /// Headpost well column
    pub enum NsbHeadpostType {
        Select => "Select...",
        CamStyle => "CAM-style",
        MesoscopeStyle => "Mesoscope-style",
        NeuropixelStyle => "Neuropixel-style",
        WhcNp => "WHC NP",
        Whc42 => "WHC #42",
        NoWell => "No Well",
        CustomWell => "Custom well",
        Other => "Other",
    }
}

source_enum! {
    /// Isoflurane percentage
    pub enum NsbIsoLevel {
        Select => "Select...",
        L025 => "0.25",
        L050 => "0.50",
        L075 => "0.75",
        L100 => "1.00",
        L125 => "1.25",
        L150 => "1.50",
        L175 => "1.75",
        L200 => "2.00",
        L225 => "2.25",
        L250 => "2.50",
        L275 => "2.75",
        L300 => "3.00",
    }
}

source_enum! {
    /// Surgical workstation
    pub enum NsbWorkstation {
        Select => "Select...",
        Sws1 => "SWS 1",
        Sws2 => "SWS 2",
        Sws3 => "SWS 3",
        Sws4 => "SWS 4",
        Sws5 => "SWS 5",
        Sws6 => "SWS 6",
        Sws7 => "SWS 7",
        Sws8 => "SWS 8",
        Sws9 => "SWS 9",
    }
}

source_enum! {
    /// IACUC protocol the animal is used under
    pub enum NsbIacucProtocol {
        Select => "Select...",
        P2001 => "2001",
        P2002 => "2002",
        P2003 => "2003",
        P2004 => "2004",
        P2005 => "2005",
        P2006 => "2006",
        P2011 => "2011",
        P2102 => "2102",
        P2103 => "2103",
        P2104 => "2104",
        P2105 => "2105",
        P2106 => "2106",
        P2107 => "2107",
        P2108 => "2108",
        P2109 => "2109",
        P2110 => "2110",
        P2113 => "2113",
        P2115 => "2115",
        P2117 => "2117",
        P2201 => "2201",
        P2202 => "2202",
        P2205 => "2205",
        P2212 => "2212",
        P2301 => "2301",
        P2304 => "2304",
        P2305 => "2305",
        P2306 => "2306",
        P2307 => "2307",
        P2401 => "2401",
        P2402 => "2402",
        P2403 => "2403",
    }
}

source_enum! {
    /// LIMS workflow the request is routed through
    pub enum NsbLimsTaskflow {
        Select => "Select...",
        AindEphysSurgeryOnly => "AIND Ephys (Surgery Only)",
        AindOphysSurgeryOnly => "AIND Ophys (Surgery Only)",
        AindBehaviorSurgeryOnly => "AIND Behavior (Surgery Only)",
        AindMsmaSurgeryOnly => "AIND MSMA (Surgery Only)",
        AindU19Thalamus => "AIND U19 Thalamus",
        AindExaSpim => "AIND ExaSPIM",
        AindSmartSpim => "AIND SmartSPIM",
        AindDynamicForaging => "AIND Dynamic Foraging",
        AindFiberPhotometry => "AIND Fiber Photometry",
        AindBrainComputerInterface => "AIND BCI",
        BrainStim => "BrainStim",
        CellTypesSurgery => "Cell Types surgery",
        ConnectivitySurgery => "Connectivity surgery",
        DynamicRoutingSurgery => "Dynamic Routing surgery",
        IsiOnly => "ISI only",
        MesoscopeSurgery => "Mesoscope surgery",
        OpenScopeSurgery => "OpenScope surgery",
        VisualBehaviorSurgery => "Visual Behavior surgery",
        Other => "Other",
    }
}

source_enum! {
    /// LIMS project the request is charged to
    pub enum NsbLimsProject {
        Select => "Select...",
        AindBehavior => "AINDBehavior",
        AindBehaviorDevelopment => "AINDBehaviorDevelopment",
        AindBrainComputerInterface => "AINDBrainComputerInterface",
        AindBrainWideDopamine => "AINDBrainWideDopamine",
        AindCellTypeLookup => "AINDCellTypeLookup",
        AindCognitiveFlexibility => "AINDCognitiveFlexibility",
        AindDispatchBehavior => "AINDDispatchBehavior",
        AindDispatchEphys => "AINDDispatchEphys",
        AindDispatchOphys => "AINDDispatchOphys",
        AindDopamine => "AINDDopamine",
        AindDynamicForaging => "AINDDynamicForaging",
        AindEphys => "AINDEphys",
        AindEphysDevelopment => "AINDEphysDevelopment",
        AindExaSpim => "AINDExaSPIM",
        AindFiberPhotometry => "AINDFiberPhotometry",
        AindLearningmFish => "AINDLearningmFISH",
        AindMedulla => "AINDMedulla",
        AindMolecularAnatomy => "AINDMolecularAnatomy",
        AindMsma => "AINDMSMA",
        AindNeuromodulatorDynamics => "AINDNeuromodulatorDynamics",
        AindOphys => "AINDOphys",
        AindOpticalPhysiologyDevelopment => "AINDOphysDevelopment",
        AindSlap2 => "AINDSLAP2",
        AindSmartSpim => "AINDSmartSPIM",
        AindThalamusMotorControl => "AINDThalamusMotorControl",
        AindU19Thalamus => "AINDU19Thalamus",
        AindVr => "AINDVirtualReality",
        AllenInstituteOphys => "AllenInstituteOphys",
        BrainTv => "BrainTV",
        BrainTvViral => "BrainTV Viral Strategies",
        C200Task1 => "C200Task1",
        C200Task2 => "C200Task2",
        C600Task1 => "C600Task1",
        C600Task2 => "C600Task2",
        CellTypesBrainStim => "CellTypesBrainStim",
        CellTypesConnectomics => "CellTypesConnectomics",
        CellTypesLabelling => "CellTypesLabelling",
        CellTypesMorphology => "CellTypesMorphology",
        CellTypesPatchSeq => "CellTypesPatchSeq",
        CellTypesRetrogradeLabelling => "CellTypesRetrogradeLabelling",
        CellTypesSpatialTranscriptomics => "CellTypesSpatialTranscriptomics",
        CellTypesTracing => "CellTypesTracing",
        CellTypesTransgenic => "CellTypesTransgenic",
        CellTypesTransgenicCharacterization => "CellTypesTransgenicCharacterization",
        CellTypesViral => "CellTypesViral",
        CitycapeSsn => "CityscapeSSN",
        ConnectivityDevelopment => "ConnectivityDevelopment",
        ConnectivityRetrograde => "ConnectivityRetrograde",
        ConnectivityTracing => "ConnectivityTracing",
        DeepscopeDevelopment => "DeepscopeDevelopment",
        DeepscopeSlcProduction => "DeepscopeSLCProduction",
        DeepscopeTask1 => "DeepscopeTask1",
        DeepscopeTask2 => "DeepscopeTask2",
        DendriticImaging => "DendriticImaging",
        DynamicRoutingBehavior => "DynamicRoutingBehavior",
        DynamicRoutingEphys => "DynamicRoutingEphys",
        DynamicRoutingOpto => "DynamicRoutingOpto",
        DynamicRoutingSurgicalDevelopment => "DynamicRoutingSurgicalDevelopment",
        DynamicRoutingTask1 => "DynamicRoutingTask1Production",
        DynamicRoutingUltraOpto => "DynamicRoutingULOpto",
        EphysDevelopment => "EphysDevelopment",
        EphysOptotagging => "EphysOptotagging",
        GenotypingDevelopment => "GenotypingDevelopment",
        H200Task1 => "H200Task1",
        H300Task1 => "H300Task1",
        HumanCellTypes => "HumanCellTypes",
        IsiCalibration => "ISICalibration",
        IsiDevelopment => "ISIDevelopment",
        IsiProduction => "ISIProduction",
        IsiTask1 => "ISITask1",
        IvscCalibration => "IVSCCalibration",
        IvscCellTypes => "IVSCCellTypes",
        IvscDevelopment => "IVSCDevelopment",
        IvscProduction => "IVSCProduction",
        LearningmFishDevelopment => "LearningmFISHDevelopment",
        LearningmFishTask1A => "LearningmFISHTask1A",
        LearningmFishTask1B => "LearningmFISHTask1B",
        LearningmFishTask2 => "LearningmFISHTask2",
        MesoscopeDevelopment => "MesoscopeDevelopment",
        MesoscopeProduction => "MesoscopeProduction",
        MesoscopeTask1 => "MesoscopeTask1",
        MicroscopyDevelopment => "MicroscopyDevelopment",
        MindScope2pDevelopment => "MindScope2PDevelopment",
        MindScope2pTransgenic => "MindScope2PTransgenic",
        MindScopeAnatomyDevelopment => "MindScopeAnatomyDevelopment",
        MindScopeBehaviorDevelopment => "MindScopeBehaviorDevelopment",
        MindScopeConnectomics => "MindScopeConnectomics",
        MindScopeLearning => "MindScopeLearning",
        MindScopeMultiscopeDevelopment => "MindScopeMultiscopeDevelopment",
        MindScopeMultiscopeSignalNoise => "MindScopeMultiscopeSignalNoise",
        MindScopeNeuropixelsDevelopment => "MindScopeNeuropixelsDevelopment",
        MindScopeNeuropixelsTransgenic => "MindScopeNeuropixelsTransgenic",
        MindScopeOphysDevelopment => "MindScopeOphysDevelopment",
        MindScopeOphysTransgenic => "MindScopeOphysTransgenic",
        MindScopeOptogenetics => "MindScopeOptogenetics",
        MindScopeSlc => "MindScopeSLC",
        MindScopeTransgenic => "MindScopeTransgenic",
        MindScopeViral => "MindScopeViral",
        MivscNpVentral => "MIVSCNPVentral",
        MouseBrainCellAtlas => "MouseBrainCellAtlas",
        MouseConnectivity => "MouseConnectivity",
        MouseFullMorphology => "MouseFullMorphology",
        MultiscopeDevelopment => "MultiscopeDevelopment",
        MultiscopeSignalNoise => "MultiscopeSignalNoise",
        MultiscopeTask1 => "MultiscopeTask1",
        NeurodataWithoutBorders => "NeurodataWithoutBorders",
        NeuropixelOptotagging => "NeuropixelOptotagging",
        NeuropixelPlatformDevelopment => "NeuropixelPlatformDevelopment",
        NeuropixelTransgenicCharacterization => "NeuropixelTransgenicCharacterization",
        NeuropixelVisualBehavior => "NeuropixelVisualBehavior",
        NeuropixelVisualBehaviorDevelopment => "NeuropixelVisualBehaviorDevelopment",
        NeuropixelVisualCoding => "NeuropixelVisualCoding",
        NeuropixelVisualCodingDevelopment => "NeuropixelVisualCodingDevelopment",
        OpenScopeBrainWideEvents => "OpenScopeBrainWideEvents",
        OpenScopeCreDriverCharacterization => "OpenScopeCreDriverCharacterization",
        OpenScopeDeepscope => "OpenScopeDeepscope",
        OpenScopeDendriteCoupling => "OpenScopeDendriteCoupling",
        OpenScopeEphysDevelopment => "OpenScopeEphysDevelopment",
        OpenScopeGlobalLocalOddball => "OpenScopeGlobalLocalOddball",
        OpenScopeIllusion => "OpenScopeIllusion",
        OpenScopeIsiDevelopment => "OpenScopeISIDevelopment",
        OpenScopeLearning => "OpenScopeLearning",
        OpenScopeLoop => "OpenScopeLoop",
        OpenScopeMotionPerception => "OpenScopeMotionPerception",
        OpenScopeMultiplexing => "OpenScopeMultiplexing",
        OpenScopePredictiveProcessing => "OpenScopePredictiveProcessing",
        OpenScopeSequenceLearning => "OpenScopeSequenceLearning",
        OpenScopeSurround => "OpenScopeSurround",
        OpenScopeTemporalBarcode => "OpenScopeTemporalBarcode",
        OpenScopeTexture => "OpenScopeTexture",
        OpenScopeVasculature => "OpenScopeVasculature",
        OpenScopeVisualNeuropixels => "OpenScopeVisualNeuropixels",
        OpenScopeWorkingMemory => "OpenScopeWorkingMemory",
        OptogeneticsDevelopment => "OptogeneticsDevelopment",
        PatchSeqDevelopment => "PatchSeqDevelopment",
        PatchSeqProduction => "PatchSeqProduction",
        RetrogradeTracing => "RetrogradeTracing",
        SingleNeuronMetadata => "SingleNeuronMetadata",
        SlcDevelopment => "SLCDevelopment",
        SlcProduction => "SLCProduction",
        SpontaneousActivity => "SpontaneousActivity",
        SurgeryDevelopment => "SurgeryDevelopment",
        SurgeryPractice => "SurgeryPractice",
        SurgeryQc => "SurgeryQC",
        SurgeryTraining => "SurgeryTraining",
        T301 => "T301",
        T301Task1 => "T301Task1",
        T301Task2 => "T301Task2",
        T503Task1 => "T503Task1",
        T504Task1 => "T504Task1",
        T600Task1 => "T600Task1",
        TaskTrainedNetworksDevelopment => "TaskTrainedNetworksDevelopment",
        TaskTrainedNetworksMultiscope => "TaskTrainedNetworksMultiscope",
        TaskTrainedNetworksNeuropixel => "TaskTrainedNetworksNeuropixel",
        TaskTrainedNetworksSlc => "TaskTrainedNetworksSLC",
        ThalamocorticalCircuits => "ThalamocorticalCircuits",
        TinyBlueDotBehavior => "TinyBlueDotBehavior",
        TransgenicCharacterization => "TransgenicCharacterization",
        U01Bfct => "U01BFCT",
        U01BfctTiming => "U01BFCTTiming",
        VgtEnhancers => "VGTEnhancers",
        VipAxonalV1Phase1 => "VIPAxonalV1Phase1",
        VipSomaticV1Meso => "VIPSomaticV1Meso",
        VipSomaticV1Phase1 => "VIPSomaticV1Phase1",
        VipSomaticV1Phase2 => "VIPSomaticV1Phase2",
        ViralStrategiesDevelopment => "ViralStrategiesDevelopment",
        ViralStrategiesProduction => "ViralStrategiesProduction",
        VisualBehavior => "VisualBehavior",
        VisualBehaviorDevelopment => "VisualBehaviorDevelopment",
        VisualBehaviorMultiscope => "VisualBehaviorMultiscope",
        VisualBehaviorMultiscope4Areasx2d => "VisualBehaviorMultiscope4areasx2d",
        VisualBehaviorMultiscopeDevelopment => "VisualBehaviorMultiscopeDevelopment",
        VisualBehaviorNeuropixels => "VisualBehaviorNeuropixels",
        VisualBehaviorTask1A => "VisualBehaviorTask1A",
        VisualBehaviorTask1B => "VisualBehaviorTask1B",
        VisualBehaviorTask2 => "VisualBehaviorTask2",
        VisualCoding2p => "VisualCoding2P",
        VisualCodingDevelopment => "VisualCodingDevelopment",
        VisualCodingNeuropixels => "VisualCodingNeuropixels",
        VisualCodingTransgenic => "VisualCodingTransgenic",
        WholeBrainImaging => "WholeBrainImaging",
        WholeBrainMorphology => "WholeBrainMorphology",
        Other => "Other",
    }
}
