use super::enums::{ImmunolabelClass, SpecimenProcedureType};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

pub const MASS_UNIT: &str = "microgram";

/// Procedure performed on a tissue specimen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecimenProcedure {
    pub specimen_id: Option<String>,
    pub procedure_type: SpecimenProcedureType,
    pub procedure_name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub experimenter_full_name: Option<String>,
    pub protocol_id: Vec<String>,
    pub reagents: Vec<Reagent>,
    pub antibodies: Option<Vec<Antibody>>,
    pub notes: Option<String>,
}

/// Reagent applied during a wash
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reagent {
    pub name: String,
    pub source: Option<String>,
    pub lot_number: Option<String>,
}

/// Antibody applied during an immunolabeling wash
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Antibody {
    pub name: String,
    pub source: Option<String>,
    pub lot_number: Option<String>,
    pub immunolabel_class: ImmunolabelClass,
    pub mass: Option<Decimal>,
    pub mass_unit: &'static str,
}
