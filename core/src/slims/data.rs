use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Reagent lot attached to a wash
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct SlimsReagent {
    pub name: Option<String>,
    pub source: Option<String>,
    pub lot_number: Option<String>,
}

/// One wash step of a histology run
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct SlimsWash {
    /// Display name, e.g. `"Primary Antibody Wash"`
    pub wash_name: Option<String>,
    pub wash_type: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub modified_by: Option<String>,
    pub reagents: Vec<SlimsReagent>,
    /// Antibody mass in micrograms, as typed into SLIMS
    pub mass: Option<String>,
}

/// One histology run as returned by SLIMS
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct SlimsHistologyData {
    pub procedure_name: Option<String>,
    /// HTML anchor pointing at the protocol
    pub protocol_id: Option<String>,
    pub protocol_name: Option<String>,
    pub subject_id: Option<String>,
    /// Washes in the order they were run
    pub washes: Vec<SlimsWash>,
}

impl SlimsHistologyData {
    /// Decodes a JSON array of histology runs
    pub fn list_from_json(json: &str) -> Result<Vec<Self>> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_list_from_json() {
        let json = r#"[
            {
                "procedure_name": "SmartSPIM Delipidation",
                "subject_id": "744742",
                "washes": [
                    {
                        "wash_name": "Wash 1",
                        "start_time": "2024-06-10T14:00:00Z",
                        "reagents": [{"name": "THF", "lot_number": "L1"}]
                    }
                ]
            },
            {}
        ]"#;

        let runs = SlimsHistologyData::list_from_json(json).unwrap();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].subject_id.as_deref(), Some("744742"));
        assert_eq!(
            runs[0].washes[0].start_time,
            Some(Utc.with_ymd_and_hms(2024, 6, 10, 14, 0, 0).unwrap())
        );
        assert_eq!(runs[0].washes[0].reagents[0].source, None);
        assert!(runs[1].washes.is_empty());
    }

    #[test]
    fn test_list_from_json_rejects_object() {
        assert!(SlimsHistologyData::list_from_json("{}").is_err());
    }
}
