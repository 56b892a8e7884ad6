use crate::api::SurgeryMetadata;
use crate::schema::{SpecimenProcedure, Surgery, SurgeryProcedure};
use std::fmt;

/// Text report formatter for surgery metadata
pub struct TextReport<'a> {
    metadata: &'a SurgeryMetadata,
}

impl<'a> TextReport<'a> {
    /// Creates a new text report
    pub fn new(metadata: &'a SurgeryMetadata) -> Self {
        Self { metadata }
    }
}

fn or_unknown<T: fmt::Display>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

fn write_surgery(f: &mut fmt::Formatter<'_>, index: usize, surgery: &Surgery) -> fmt::Result {
    writeln!(f, "Surgery {}", index + 1)?;
    writeln!(f, "---------")?;
    writeln!(f, "Start Date:     {}", or_unknown(surgery.start_date))?;
    writeln!(
        f,
        "Weight Prior:   {}",
        or_unknown(surgery.animal_weight_prior)
    )?;
    writeln!(
        f,
        "Weight Post:    {}",
        or_unknown(surgery.animal_weight_post)
    )?;
    writeln!(
        f,
        "Isoflurane:     {}",
        or_unknown(surgery.anaesthesia.as_ref().and_then(|a| a.level))
    )?;
    writeln!(
        f,
        "Workstation:    {}",
        surgery.workstation_id.as_deref().unwrap_or("unknown")
    )?;
    writeln!(f, "Procedures:     {}", surgery.procedures.len())?;
    for procedure in &surgery.procedures {
        match procedure {
            SurgeryProcedure::FiberImplant(implant) => {
                for probe in &implant.probes {
                    writeln!(f, "  - {} ({})", procedure.simple_name(), probe.name)?;
                }
            }
            _ => writeln!(f, "  - {}", procedure.simple_name())?,
        }
    }
    Ok(())
}

impl<'a> fmt::Display for TextReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Surgery Metadata")?;
        writeln!(f, "================")?;
        writeln!(f)?;
        writeln!(
            f,
            "Subject:        {}",
            self.metadata.subject_id.as_deref().unwrap_or("unknown")
        )?;
        writeln!(
            f,
            "Experimenter:   {}",
            self.metadata.experimenter_full_name
        )?;
        writeln!(
            f,
            "IACUC Protocol: {}",
            self.metadata.iacuc_protocol.as_deref().unwrap_or("unknown")
        )?;
        writeln!(
            f,
            "Project:        {}",
            self.metadata.project_name.as_deref().unwrap_or("unknown")
        )?;
        writeln!(f, "Surgeries:      {}", self.metadata.surgeries.len())?;

        for (index, surgery) in self.metadata.surgeries.iter().enumerate() {
            writeln!(f)?;
            write_surgery(f, index, surgery)?;
        }

        Ok(())
    }
}

/// Text report formatter for specimen procedures
pub struct SpecimenReport<'a> {
    procedures: &'a [SpecimenProcedure],
}

impl<'a> SpecimenReport<'a> {
    pub fn new(procedures: &'a [SpecimenProcedure]) -> Self {
        Self { procedures }
    }
}

impl<'a> fmt::Display for SpecimenReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Specimen Procedures")?;
        writeln!(f, "===================")?;
        writeln!(f)?;
        if self.procedures.is_empty() {
            writeln!(f, "No specimen procedures")?;
            return Ok(());
        }
        for procedure in self.procedures {
            write!(
                f,
                "{:<26} specimen {} from {} to {}",
                procedure.procedure_type.simple_name(),
                procedure.specimen_id.as_deref().unwrap_or("unknown"),
                or_unknown(procedure.start_date),
                or_unknown(procedure.end_date)
            )?;
            if let Some(antibody) = procedure.antibodies.as_ref().and_then(|a| a.first()) {
                write!(f, " [{:?} {}]", antibody.immunolabel_class, antibody.name)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
