//! Tabular export of the results table
//!
//! Columns follow the interchange layout: `Variable, Inf. Directa,
//! Dep. Directa, Inf. Indirecta, Dep. Indirecta, Inf. Potencial,
//! Clasificación`. Direct columns are integers; indirect and potential
//! columns carry one decimal.

use crate::error::{ReportError, Result};
use micmac_domain::{Classification, MetricsRow};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Column headers, in export order
pub const HEADERS: [&str; 7] = [
    "Variable",
    "Inf. Directa",
    "Dep. Directa",
    "Inf. Indirecta",
    "Dep. Indirecta",
    "Inf. Potencial",
    "Clasificación",
];

/// Round to one decimal place, ties to even
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

/// One line of the exported table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedRow {
    /// Variable name
    #[serde(rename = "Variable")]
    pub variable: String,

    /// Direct influence
    #[serde(rename = "Inf. Directa")]
    pub direct_influence: u32,

    /// Direct dependence
    #[serde(rename = "Dep. Directa")]
    pub direct_dependence: u32,

    /// Indirect influence, one decimal
    #[serde(rename = "Inf. Indirecta", serialize_with = "one_decimal")]
    pub indirect_influence: f64,

    /// Indirect dependence, one decimal
    #[serde(rename = "Dep. Indirecta", serialize_with = "one_decimal")]
    pub indirect_dependence: f64,

    /// Potential influence, one decimal
    #[serde(rename = "Inf. Potencial", serialize_with = "one_decimal")]
    pub potential_influence: f64,

    /// Quadrant
    #[serde(
        rename = "Clasificación",
        serialize_with = "export_label",
        deserialize_with = "parse_label"
    )]
    pub classification: Classification,
}

impl From<&MetricsRow> for ExportedRow {
    fn from(row: &MetricsRow) -> Self {
        Self {
            variable: row.name.clone(),
            direct_influence: row.direct_influence,
            direct_dependence: row.direct_dependence,
            indirect_influence: round1(row.indirect_influence),
            indirect_dependence: round1(row.indirect_dependence),
            potential_influence: round1(row.potential_influence),
            classification: row.classification,
        }
    }
}

fn one_decimal<S: Serializer>(value: &f64, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{:.1}", value))
}

fn export_label<S: Serializer>(
    value: &Classification,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(value.export_label())
}

fn parse_label<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Classification, D::Error> {
    let label = String::deserialize(deserializer)?;
    Classification::parse(&label)
        .ok_or_else(|| D::Error::custom(format!("unknown classification '{}'", label)))
}

/// Write the results table as CSV
pub fn write_results<W: Write>(rows: &[MetricsRow], writer: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    if rows.is_empty() {
        writer.write_record(HEADERS)?;
    }
    for row in rows {
        writer.serialize(ExportedRow::from(row))?;
    }
    writer.flush()?;
    Ok(())
}

/// Render the results table as a CSV string
pub fn results_to_csv(rows: &[MetricsRow]) -> Result<String> {
    let mut buffer = Vec::new();
    write_results(rows, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| ReportError::InvalidTable(e.to_string()))
}

/// Write the results table to a CSV file
pub fn write_results_file(rows: &[MetricsRow], path: &Path) -> Result<()> {
    let file = File::create(path)?;
    write_results(rows, file)?;
    tracing::info!("Wrote results table to {}", path.display());
    Ok(())
}

/// Read an exported results table back
pub fn read_results<R: Read>(reader: R) -> Result<Vec<ExportedRow>> {
    let mut reader = csv::Reader::from_reader(reader);

    let headers = reader.headers()?.clone();
    let found: Vec<&str> = headers.iter().collect();
    if found != HEADERS {
        return Err(ReportError::InvalidTable(format!(
            "Unexpected columns: {}",
            found.join(", ")
        )));
    }

    let mut rows = Vec::new();
    for record in reader.deserialize() {
        rows.push(record?);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<MetricsRow> {
        vec![
            MetricsRow {
                name: "Energía".to_string(),
                direct_influence: 8,
                direct_dependence: 4,
                indirect_influence: 1234.56,
                indirect_dependence: 0.04,
                potential_influence: 9.6,
                classification: Classification::Driving,
            },
            MetricsRow {
                name: "Agua, potable".to_string(),
                direct_influence: 3,
                direct_dependence: 9,
                indirect_influence: 12.25,
                indirect_dependence: 88.0,
                potential_influence: 3.0,
                classification: Classification::KeyChallenge,
            },
        ]
    }

    #[test]
    fn test_round1() {
        assert_eq!(round1(1234.56), 1234.6);
        assert_eq!(round1(0.04), 0.0);
        assert_eq!(round1(12.25), 12.2);
        assert_eq!(round1(3.0), 3.0);
    }

    #[test]
    fn test_csv_layout() {
        let csv = results_to_csv(&rows()).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some(HEADERS.join(",").as_str()));
        assert_eq!(lines.next(), Some("Energía,8,4,1234.6,0.0,9.6,Motriz"));
        assert_eq!(lines.next(), Some("\"Agua, potable\",3,9,12.2,88.0,3.0,Clave / Reto"));
    }

    #[test]
    fn test_read_back() {
        let csv = results_to_csv(&rows()).unwrap();
        let parsed = read_results(csv.as_bytes()).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].direct_influence, 8);
        assert_eq!(parsed[1].variable, "Agua, potable");
        assert_eq!(parsed[1].classification, Classification::KeyChallenge);
        assert_eq!(parsed[0].indirect_influence, 1234.6);
    }

    #[test]
    fn test_header_only_when_empty() {
        let csv = results_to_csv(&[]).unwrap();
        assert_eq!(csv.lines().count(), 1);
        assert!(read_results(csv.as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_wrong_columns_rejected() {
        let result = read_results("Name,Score\nA,1\n".as_bytes());
        assert!(matches!(result, Err(ReportError::InvalidTable(_))));
    }

    #[test]
    fn test_unknown_label_rejected() {
        let csv = format!("{}\nA,1,1,1.0,1.0,1.0,Central\n", HEADERS.join(","));
        assert!(matches!(read_results(csv.as_bytes()), Err(ReportError::Csv(_))));
    }
}
