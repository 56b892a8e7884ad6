use super::data::{SlimsHistologyData, SlimsReagent, SlimsWash};
use crate::mapping::parsers::{parse_decimal, parse_html_href};
use crate::schema::{
    Antibody, ImmunolabelClass, Reagent, SpecimenProcedure, SpecimenProcedureType, MASS_UNIT,
};
use chrono::{DateTime, Utc};
use log::{debug, info};

const PRIMARY_ANTIBODY: &str = "Primary Antibody";
const SECONDARY_ANTIBODY: &str = "Secondary Antibody";

/// Looks up the procedure type of a SLIMS procedure name
pub fn parse_specimen_procedure_name(name: Option<&str>) -> Option<SpecimenProcedureType> {
    match name? {
        "SmartSPIM Delipidation" | "ExaSPIM Delipidation" => {
            Some(SpecimenProcedureType::Delipidation)
        }
        "SmartSPIM Labeling" | "ExaSPIM Labeling" => Some(SpecimenProcedureType::Immunolabeling),
        "SmartSPIM Refractive Index Matching" | "ExaSPIM Refractive Index Matching" => {
            Some(SpecimenProcedureType::RefractiveIndexMatching)
        }
        "ExaSPIM Gelation" => Some(SpecimenProcedureType::Gelation),
        "ExaSPIM Expansion" => Some(SpecimenProcedureType::Expansion),
        _ => None,
    }
}

/// Latest end time over the washes that recorded one
pub fn get_last_valid_end_time(washes: &[SlimsWash]) -> Option<DateTime<Utc>> {
    washes.iter().filter_map(|w| w.end_time).max()
}

/// Antibody applied during `wash`, classified by the wash's display name
pub fn map_antibody(wash: &SlimsWash) -> Option<Antibody> {
    let wash_name = wash.wash_name.as_deref()?;
    let immunolabel_class = if wash_name.contains(PRIMARY_ANTIBODY) {
        ImmunolabelClass::Primary
    } else if wash_name.contains(SECONDARY_ANTIBODY) {
        ImmunolabelClass::Secondary
    } else {
        return None;
    };

    let first_reagent = wash.reagents.first();
    let name = first_reagent
        .and_then(|r| r.name.clone())
        .unwrap_or_else(|| wash_name.to_string());

    Some(Antibody {
        name,
        source: first_reagent.and_then(|r| r.source.clone()),
        lot_number: first_reagent.and_then(|r| r.lot_number.clone()),
        immunolabel_class,
        mass: parse_decimal(wash.mass.as_deref()),
        mass_unit: MASS_UNIT,
    })
}

fn map_reagent(reagent: &SlimsReagent) -> Option<Reagent> {
    let Some(name) = reagent.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) else {
        debug!("Skipping unnamed reagent lot {:?}", reagent.lot_number);
        return None;
    };
    Some(Reagent {
        name: name.to_string(),
        source: reagent.source.clone(),
        lot_number: reagent.lot_number.clone(),
    })
}

/// Maps SLIMS histology runs into specimen procedures
///
/// Immunolabeling runs yield one procedure per antibody wash; every other
/// recognized run yields one procedure covering all of its washes. Runs with
/// an unrecognized procedure name contribute nothing.
#[derive(Debug, Clone, Copy)]
pub struct HistologyProcedureMapper<'a> {
    records: &'a [SlimsHistologyData],
}

impl<'a> HistologyProcedureMapper<'a> {
    pub fn new(records: &'a [SlimsHistologyData]) -> Self {
        Self { records }
    }

    pub fn map_specimen_procedures(&self) -> Vec<SpecimenProcedure> {
        let mut procedures = Vec::new();

        for record in self.records {
            let Some(procedure_type) =
                parse_specimen_procedure_name(record.procedure_name.as_deref())
            else {
                debug!(
                    "Skipping histology record with procedure name {:?}",
                    record.procedure_name
                );
                continue;
            };

            match procedure_type {
                SpecimenProcedureType::Immunolabeling => {
                    procedures.extend(
                        record
                            .washes
                            .iter()
                            .filter_map(|wash| immunolabeling_procedure(record, wash)),
                    );
                }
                _ => procedures.push(run_procedure(record, procedure_type)),
            }
        }

        info!(
            "Mapped {} specimen procedures from {} histology records",
            procedures.len(),
            self.records.len()
        );
        procedures
    }
}

fn base_procedure(
    record: &SlimsHistologyData,
    procedure_type: SpecimenProcedureType,
) -> SpecimenProcedure {
    SpecimenProcedure {
        specimen_id: record.subject_id.clone(),
        procedure_type,
        procedure_name: record.protocol_name.clone(),
        start_date: None,
        end_date: None,
        experimenter_full_name: None,
        protocol_id: parse_html_href(record.protocol_id.as_deref())
            .into_iter()
            .collect(),
        reagents: Vec::new(),
        antibodies: None,
        notes: None,
    }
}

/// One procedure spanning every wash of the run
fn run_procedure(
    record: &SlimsHistologyData,
    procedure_type: SpecimenProcedureType,
) -> SpecimenProcedure {
    let first_wash = record.washes.first();
    SpecimenProcedure {
        start_date: first_wash
            .and_then(|w| w.start_time)
            .map(|t| t.date_naive()),
        end_date: get_last_valid_end_time(&record.washes).map(|t| t.date_naive()),
        experimenter_full_name: first_wash.and_then(|w| w.modified_by.clone()),
        reagents: record
            .washes
            .iter()
            .flat_map(|w| w.reagents.iter())
            .filter_map(map_reagent)
            .collect(),
        ..base_procedure(record, procedure_type)
    }
}

/// One procedure for a single antibody wash, if the wash applied one
fn immunolabeling_procedure(
    record: &SlimsHistologyData,
    wash: &SlimsWash,
) -> Option<SpecimenProcedure> {
    let Some(antibody) = map_antibody(wash) else {
        debug!("Wash {:?} applied no antibody", wash.wash_name);
        return None;
    };
    Some(SpecimenProcedure {
        start_date: wash.start_time.map(|t| t.date_naive()),
        end_date: wash.end_time.map(|t| t.date_naive()),
        experimenter_full_name: wash.modified_by.clone(),
        reagents: wash.reagents.iter().filter_map(map_reagent).collect(),
        antibodies: Some(vec![antibody]),
        ..base_procedure(record, SpecimenProcedureType::Immunolabeling)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};
    use rstest::rstest;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, day, hour, 0, 0).unwrap()
    }

    fn wash(name: &str) -> SlimsWash {
        SlimsWash {
            wash_name: Some(name.to_string()),
            ..Default::default()
        }
    }

    fn reagent(name: &str, lot: &str) -> SlimsReagent {
        SlimsReagent {
            name: Some(name.to_string()),
            source: Some("Sigma".to_string()),
            lot_number: Some(lot.to_string()),
        }
    }

    fn run(procedure_name: &str, washes: Vec<SlimsWash>) -> SlimsHistologyData {
        SlimsHistologyData {
            procedure_name: Some(procedure_name.to_string()),
            protocol_id: Some(r#"<a href="https://doi.org/10.17504/x">protocol</a>"#.to_string()),
            protocol_name: Some("Tissue clearing".to_string()),
            subject_id: Some("744742".to_string()),
            washes,
        }
    }

    #[rstest]
    #[case(Some("SmartSPIM Delipidation"), Some(SpecimenProcedureType::Delipidation))]
    #[case(Some("ExaSPIM Delipidation"), Some(SpecimenProcedureType::Delipidation))]
    #[case(Some("SmartSPIM Labeling"), Some(SpecimenProcedureType::Immunolabeling))]
    #[case(
        Some("SmartSPIM Refractive Index Matching"),
        Some(SpecimenProcedureType::RefractiveIndexMatching)
    )]
    #[case(Some("ExaSPIM Gelation"), Some(SpecimenProcedureType::Gelation))]
    #[case(Some("ExaSPIM Expansion"), Some(SpecimenProcedureType::Expansion))]
    #[case(Some("UNKNOWN"), None)]
    #[case(None, None)]
    fn test_parse_specimen_procedure_name(
        #[case] name: Option<&str>,
        #[case] expected: Option<SpecimenProcedureType>,
    ) {
        assert_eq!(parse_specimen_procedure_name(name), expected);
    }

    #[test]
    fn test_last_valid_end_time() {
        let washes = vec![wash("a"), wash("b"), wash("c")];
        assert_eq!(get_last_valid_end_time(&washes), None);
        assert_eq!(get_last_valid_end_time(&[]), None);

        let washes = vec![
            SlimsWash {
                end_time: Some(at(12, 9)),
                ..wash("a")
            },
            wash("b"),
            SlimsWash {
                end_time: Some(at(11, 9)),
                ..wash("c")
            },
        ];
        assert_eq!(get_last_valid_end_time(&washes), Some(at(12, 9)));
    }

    #[rstest]
    #[case("Primary Antibody Wash", Some(ImmunolabelClass::Primary))]
    #[case("Secondary Antibody Wash", Some(ImmunolabelClass::Secondary))]
    #[case("Unknown Wash", None)]
    fn test_map_antibody_class(#[case] name: &str, #[case] expected: Option<ImmunolabelClass>) {
        assert_eq!(
            map_antibody(&wash(name)).map(|a| a.immunolabel_class),
            expected
        );
    }

    #[test]
    fn test_map_antibody_fields() {
        let primary = SlimsWash {
            mass: Some("10.2".to_string()),
            reagents: vec![reagent("Anti-GFP", "AB1")],
            ..wash("Primary Antibody Wash")
        };
        let antibody = map_antibody(&primary).unwrap();
        assert_eq!(antibody.name, "Anti-GFP");
        assert_eq!(antibody.lot_number.as_deref(), Some("AB1"));
        assert_eq!(antibody.mass, Some(Decimal::from_str("10.2").unwrap()));

        let secondary = SlimsWash {
            mass: Some("lots".to_string()),
            ..wash("Secondary Antibody Wash")
        };
        let antibody = map_antibody(&secondary).unwrap();
        assert_eq!(antibody.name, "Secondary Antibody Wash");
        assert_eq!(antibody.mass, None);
    }

    #[test]
    fn test_labeling_run_yields_one_procedure_per_antibody_wash() {
        let records = vec![run(
            "SmartSPIM Labeling",
            vec![
                SlimsWash {
                    mass: Some("10.2".to_string()),
                    ..wash("Primary Antibody Wash")
                },
                wash("Secondary Antibody Wash"),
            ],
        )];

        let procedures = HistologyProcedureMapper::new(&records).map_specimen_procedures();
        assert_eq!(procedures.len(), 2);
        assert!(procedures
            .iter()
            .all(|p| p.procedure_type == SpecimenProcedureType::Immunolabeling));

        let antibodies: Vec<&Antibody> = procedures
            .iter()
            .map(|p| &p.antibodies.as_ref().unwrap()[0])
            .collect();
        assert_eq!(antibodies[0].immunolabel_class, ImmunolabelClass::Primary);
        assert_eq!(antibodies[0].mass, Some(Decimal::from_str("10.2").unwrap()));
        assert_eq!(antibodies[1].immunolabel_class, ImmunolabelClass::Secondary);
        assert_eq!(antibodies[1].mass, None);
    }

    #[test]
    fn test_multiple_runs() {
        let records = vec![
            run(
                "SmartSPIM Delipidation",
                vec![
                    SlimsWash {
                        start_time: Some(at(10, 8)),
                        end_time: Some(at(10, 17)),
                        modified_by: Some("jdoe".to_string()),
                        ..wash("Wash 1")
                    },
                    SlimsWash {
                        end_time: Some(at(11, 17)),
                        reagents: vec![reagent("THF", "L1"), reagent("DCM", "L2")],
                        ..wash("Wash 2")
                    },
                    wash("Wash 3"),
                ],
            ),
            run(
                "SmartSPIM Labeling",
                vec![
                    wash("Primary Antibody Wash"),
                    wash("Secondary Antibody Wash"),
                ],
            ),
            run(
                "SmartSPIM Refractive Index Matching",
                vec![wash("EasyIndex")],
            ),
        ];

        let procedures = HistologyProcedureMapper::new(&records).map_specimen_procedures();
        let types: Vec<SpecimenProcedureType> =
            procedures.iter().map(|p| p.procedure_type).collect();
        assert_eq!(
            types,
            vec![
                SpecimenProcedureType::Delipidation,
                SpecimenProcedureType::Immunolabeling,
                SpecimenProcedureType::Immunolabeling,
                SpecimenProcedureType::RefractiveIndexMatching,
            ]
        );

        let delipidation = &procedures[0];
        assert_eq!(delipidation.specimen_id.as_deref(), Some("744742"));
        assert_eq!(delipidation.start_date, NaiveDate::from_ymd_opt(2024, 6, 10));
        assert_eq!(delipidation.end_date, NaiveDate::from_ymd_opt(2024, 6, 11));
        assert_eq!(delipidation.experimenter_full_name.as_deref(), Some("jdoe"));
        assert_eq!(delipidation.protocol_id, vec!["https://doi.org/10.17504/x"]);
        assert_eq!(delipidation.reagents.len(), 2);
        assert_eq!(delipidation.reagents[1].name, "DCM");
        assert_eq!(delipidation.antibodies, None);
    }

    #[test]
    fn test_unknown_and_unlinked_runs() {
        let mut unlinked = run("ExaSPIM Gelation", vec![]);
        unlinked.protocol_id = Some("<p>no link</p>".to_string());
        let records = vec![run("Mystery", vec![wash("Wash 1")]), unlinked];

        let procedures = HistologyProcedureMapper::new(&records).map_specimen_procedures();
        assert_eq!(procedures.len(), 1);
        assert_eq!(procedures[0].procedure_type, SpecimenProcedureType::Gelation);
        assert!(procedures[0].protocol_id.is_empty());
        assert_eq!(procedures[0].start_date, None);
    }

    #[test]
    fn test_unnamed_reagents_are_skipped() {
        let records = vec![run(
            "ExaSPIM Expansion",
            vec![SlimsWash {
                reagents: vec![SlimsReagent::default(), reagent("Water", "W1")],
                ..wash("Wash 1")
            }],
        )];
        let procedures = HistologyProcedureMapper::new(&records).map_specimen_procedures();
        assert_eq!(procedures[0].reagents.len(), 1);
        assert_eq!(procedures[0].reagents[0].name, "Water");
    }
}
