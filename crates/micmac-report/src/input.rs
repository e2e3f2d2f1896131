//! Matrix input: variable names plus raw cell tokens, read from CSV or JSON

use crate::error::{ReportError, Result};
use micmac_domain::{Analysis, MicmacEngine, MicmacError, VariableSet};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Source format of a matrix file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    /// Decide from the file extension, then from the content
    #[default]
    Auto,
    /// Header row of names, one labelled row per variable
    Csv,
    /// `{ "variables": [...], "matrix": [[...]] }`
    Json,
}

impl InputFormat {
    /// Resolve `Auto` to a concrete format
    pub fn resolve(self, path: Option<&Path>, data: &str) -> InputFormat {
        if self != InputFormat::Auto {
            return self;
        }

        let extension = path
            .and_then(|p| p.extension())
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);

        match extension.as_deref() {
            Some("json") => InputFormat::Json,
            Some("csv") => InputFormat::Csv,
            _ if data.trim_start().starts_with('{') => InputFormat::Json,
            _ => InputFormat::Csv,
        }
    }
}

/// Names and raw tokens as supplied by the user, before normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixInput {
    /// Variable names, in row/column order
    pub variables: Vec<String>,
    /// Raw cell tokens, one row per variable
    pub matrix: Vec<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct JsonMatrix {
    variables: Vec<String>,
    matrix: Vec<Vec<JsonCell>>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonCell {
    Text(String),
    Other(serde_json::Value),
}

impl JsonCell {
    fn into_token(self) -> String {
        match self {
            JsonCell::Text(text) => text,
            JsonCell::Other(serde_json::Value::Null) => String::new(),
            JsonCell::Other(value) => value.to_string(),
        }
    }
}

impl MatrixInput {
    /// Default editor state: "Variable 1".."Variable N", every cell "0"
    pub fn blank(count: usize) -> Self {
        Self {
            variables: VariableSet::numbered_names(count),
            matrix: vec![vec!["0".to_string(); count]; count],
        }
    }

    /// Read from a file
    pub fn read_path(path: &Path, format: InputFormat) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        let format = format.resolve(Some(path), &data);
        tracing::debug!("Reading {:?} matrix from {}", format, path.display());
        Self::parse(&data, format)
    }

    /// Parse from a string
    pub fn parse(data: &str, format: InputFormat) -> Result<Self> {
        match format.resolve(None, data) {
            InputFormat::Json => Self::from_json_str(data),
            _ => Self::from_csv_str(data),
        }
    }

    /// Parse the CSV layout
    ///
    /// The first header cell is ignored; the rest are the variable names.
    /// Each row starts with its variable's name, which must match the header
    /// at the same position. Surrounding whitespace is trimmed.
    pub fn from_csv_str(data: &str) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(data.as_bytes());

        let headers = reader.headers()?.clone();
        if headers.len() < 2 {
            return Err(ReportError::InvalidInput(
                "Header row must list the variable names".to_string(),
            ));
        }
        let variables: Vec<String> = headers.iter().skip(1).map(String::from).collect();

        let mut matrix = Vec::with_capacity(variables.len());
        for (index, result) in reader.records().enumerate() {
            let record = result?;
            let label = record.get(0).unwrap_or_default();
            if let Some(expected) = variables.get(index) {
                if label != expected {
                    return Err(ReportError::InvalidInput(format!(
                        "Row {} is labelled '{}', expected '{}'",
                        index + 1,
                        label,
                        expected
                    )));
                }
            }
            matrix.push(record.iter().skip(1).map(String::from).collect());
        }

        Ok(Self { variables, matrix })
    }

    /// Parse the JSON layout; numeric cells become their decimal text
    pub fn from_json_str(data: &str) -> Result<Self> {
        let parsed: JsonMatrix = serde_json::from_str(data)?;
        Ok(Self {
            variables: parsed.variables,
            matrix: parsed
                .matrix
                .into_iter()
                .map(|row| row.into_iter().map(JsonCell::into_token).collect())
                .collect(),
        })
    }

    /// Render in the CSV layout
    pub fn to_csv(&self) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        let mut header = vec![String::new()];
        header.extend(self.variables.iter().cloned());
        writer.write_record(&header)?;

        for (name, row) in self.variables.iter().zip(&self.matrix) {
            let mut record = vec![name.clone()];
            record.extend(row.iter().cloned());
            writer.write_record(&record)?;
        }

        let bytes = writer.into_inner()?;
        String::from_utf8(bytes).map_err(|e| ReportError::InvalidInput(e.to_string()))
    }

    /// Run the engine over this input
    pub fn analyze(&self, engine: &MicmacEngine) -> std::result::Result<Analysis, MicmacError> {
        engine.analyze_tokens(self.variables.clone(), &self.matrix)
    }
}
