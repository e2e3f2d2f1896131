//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use micmac_domain::{Analysis, Classification, Metric, MetricsRow};
use micmac_report::{results_to_csv, PlotDocument};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
    decimals: usize,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
            decimals: 1,
        }
    }

    /// Set the decimal places used for real-valued scores in tables.
    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    /// Selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format a complete analysis.
    pub fn format_analysis(&self, analysis: &Analysis) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_analysis_json(analysis),
            OutputFormat::Table => Ok(self.format_analysis_table(analysis)),
            OutputFormat::Csv => Ok(results_to_csv(&analysis.rows)?),
            OutputFormat::Quiet => Ok(self.format_analysis_quiet(analysis)),
        }
    }

    /// Format an analysis as JSON, including both plot planes.
    fn format_analysis_json(&self, analysis: &Analysis) -> Result<String> {
        let direct = analysis.direct_plane();
        let indirect = analysis.indirect_plane();

        let value = serde_json::json!({
            "rows": analysis.rows,
            "thresholds": analysis.thresholds,
            "truncation_depth": analysis.truncation_depth,
            "influence_rank_shift": analysis.influence_rank_shift(),
            "planes": {
                "direct": PlotDocument::new(&direct),
                "indirect": PlotDocument::new(&indirect),
            }
        });

        Ok(serde_json::to_string_pretty(&value)?)
    }

    /// Format an analysis as a results table followed by a summary.
    fn format_analysis_table(&self, analysis: &Analysis) -> String {
        if analysis.rows.is_empty() {
            return self.colorize("No variables to analyze.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record([
            "Variable",
            "Direct Influence",
            "Direct Dependence",
            "Indirect Influence",
            "Indirect Dependence",
            "Potential Influence",
            "Classification",
        ]);

        for row in &analysis.rows {
            builder.push_record([
                row.name.clone(),
                row.direct_influence.to_string(),
                row.direct_dependence.to_string(),
                self.real(row.indirect_influence),
                self.real(row.indirect_dependence),
                self.real(row.potential_influence),
                row.classification.to_string(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        let mut out = table.to_string();
        out.push('\n');
        out.push_str(&self.summary(analysis));
        out
    }

    /// Threshold and quadrant summary lines.
    fn summary(&self, analysis: &Analysis) -> String {
        let mut lines = vec![self.info(&format!(
            "Thresholds: influence > {:.2}, dependence > {:.2} (depth {})",
            analysis.thresholds.mean_influence,
            analysis.thresholds.mean_dependence,
            analysis.truncation_depth
        ))];

        for (class, count) in analysis.quadrant_counts() {
            lines.push(format!(
                "  {}: {}",
                self.colorize(class.as_str(), class_color(class)),
                count
            ));
        }

        lines.join("\n")
    }

    /// Format an analysis in quiet mode (name and classification).
    fn format_analysis_quiet(&self, analysis: &Analysis) -> String {
        analysis
            .rows
            .iter()
            .map(|row| format!("{}\t{}", row.name, row.classification))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format a ranking by one metric, with the direct-to-indirect influence rank shift.
    pub fn format_ranking(&self, analysis: &Analysis, metric: Metric) -> Result<String> {
        let ranked = analysis.ranking(metric);
        let shifts = analysis.influence_rank_shift();
        let shift_of = |row: &MetricsRow| {
            analysis
                .rows
                .iter()
                .position(|r| r.name == row.name)
                .map(|i| shifts[i])
                .unwrap_or(0)
        };

        match self.format {
            OutputFormat::Json => {
                let entries: Vec<serde_json::Value> = ranked
                    .iter()
                    .enumerate()
                    .map(|(i, row)| {
                        serde_json::json!({
                            "rank": i + 1,
                            "name": row.name,
                            "value": metric.value(row),
                            "influence_rank_shift": shift_of(row),
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&serde_json::json!({
                    "metric": metric,
                    "ranking": entries,
                }))?)
            }
            OutputFormat::Quiet | OutputFormat::Csv => Ok(ranked
                .iter()
                .map(|row| row.name.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Rank", "Variable", metric.as_str(), "Rank Shift"]);
                for (i, row) in ranked.iter().enumerate() {
                    builder.push_record([
                        (i + 1).to_string(),
                        row.name.clone(),
                        self.real(metric.value(row)),
                        format!("{:+}", shift_of(row)),
                    ]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn real(&self, value: f64) -> String {
        format!("{:.*}", self.decimals, value)
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}

fn class_color(class: Classification) -> &'static str {
    match class {
        Classification::KeyChallenge => "red",
        Classification::Driving => "green",
        Classification::Dependent => "magenta",
        Classification::Autonomous => "cyan",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use micmac_domain::MicmacEngine;

    fn analysis() -> Analysis {
        MicmacEngine::default_config()
            .analyze_tokens(
                vec!["Energy".into(), "Policy".into(), "Water".into()],
                &[["0", "1", "2"], ["0", "0", "3"], ["1", "0", "0"]],
            )
            .unwrap()
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_analysis(&analysis()).unwrap();
        assert!(output.contains("Direct Influence"));
        assert!(output.contains("Energy"));
        assert!(output.contains("Thresholds: influence > 2.33"));
        assert!(output.contains("Driving: 2"));
    }

    #[test]
    fn test_table_decimals() {
        let formatter = Formatter::new(OutputFormat::Table, false).with_decimals(3);
        let output = formatter.format_analysis(&analysis()).unwrap();
        assert!(output.contains("3.000"));
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_analysis(&analysis()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["rows"].as_array().unwrap().len(), 3);
        assert_eq!(value["truncation_depth"], 5);
        assert!(value["planes"]["direct"]["reference_lines"].is_object());
        assert!(value["planes"]["indirect"]["reference_lines"].is_null());
    }

    #[test]
    fn test_csv_format() {
        let formatter = Formatter::new(OutputFormat::Csv, false);
        let output = formatter.format_analysis(&analysis()).unwrap();
        assert!(output.starts_with("Variable,"));
        assert!(output.contains("Motriz"));
    }

    #[test]
    fn test_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_analysis(&analysis()).unwrap();
        assert_eq!(output, "Energy\tDriving\nPolicy\tDriving\nWater\tDependent");
    }

    #[test]
    fn test_ranking_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter
            .format_ranking(&analysis(), Metric::DirectDependence)
            .unwrap();
        assert!(output.contains("Rank Shift"));
        let water = output.find("Water").unwrap();
        let energy = output.find("Energy").unwrap();
        assert!(water < energy);
    }

    #[test]
    fn test_ranking_quiet() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter
            .format_ranking(&analysis(), Metric::DirectInfluence)
            .unwrap();
        assert_eq!(output, "Energy\nPolicy\nWater");
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.warning("careful"), "⚠ careful");
        assert_eq!(formatter.error("Error: failed"), "✗ Error: failed");
    }
}
