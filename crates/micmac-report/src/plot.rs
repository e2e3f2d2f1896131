//! Plot documents: a plane dataset plus the titles and canvas it is drawn on

use crate::error::Result;
use micmac_domain::{Plane, PlotDataset};
use serde::Serialize;

/// Canvas width for plot images
pub const CANVAS_WIDTH: u32 = 1200;

/// Canvas height for plot images
pub const CANVAS_HEIGHT: u32 = 800;

/// Titles for one plane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlotLayout {
    /// Chart title
    pub title: &'static str,
    /// Horizontal axis label (dependence)
    pub x_label: &'static str,
    /// Vertical axis label (influence)
    pub y_label: &'static str,
}

impl PlotLayout {
    /// Layout for a plane
    pub fn for_plane(plane: Plane) -> Self {
        match plane {
            Plane::Direct => Self {
                title: "Plano Influencia-Dependencia Directo",
                x_label: "Dep. Directa",
                y_label: "Inf. Directa",
            },
            Plane::Indirect => Self {
                title: "Plano Influencia-Dependencia Indirecto",
                x_label: "Dependencia Indirecta",
                y_label: "Influencia Indirecta",
            },
        }
    }
}

/// Serializable plot: layout, canvas size and the dataset
#[derive(Debug, Clone, Serialize)]
pub struct PlotDocument<'a> {
    /// Titles and axis labels
    #[serde(flatten)]
    pub layout: PlotLayout,
    /// Canvas width
    pub width: u32,
    /// Canvas height
    pub height: u32,
    /// Points and optional quadrant lines
    #[serde(flatten)]
    pub dataset: &'a PlotDataset,
}

impl<'a> PlotDocument<'a> {
    /// Wrap a dataset with its plane's layout
    pub fn new(dataset: &'a PlotDataset) -> Self {
        Self {
            layout: PlotLayout::for_plane(dataset.plane),
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            dataset,
        }
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use micmac_domain::MicmacEngine;

    fn analysis() -> micmac_domain::Analysis {
        MicmacEngine::default_config()
            .analyze_tokens(
                vec!["A".to_string(), "B".to_string(), "C".to_string()],
                &[vec!["0", "1", "2"], vec!["0", "0", "3"], vec!["P", "0", "0"]],
            )
            .unwrap()
    }

    #[test]
    fn test_direct_document() {
        let dataset = analysis().direct_plane();
        let json: serde_json::Value =
            serde_json::from_str(&PlotDocument::new(&dataset).to_json().unwrap()).unwrap();

        assert_eq!(json["title"], "Plano Influencia-Dependencia Directo");
        assert_eq!(json["x_label"], "Dep. Directa");
        assert_eq!(json["width"], 1200);
        assert_eq!(json["plane"], "direct");
        assert_eq!(json["points"].as_array().map(Vec::len), Some(3));
        assert!(json["reference_lines"]["mean_influence"].is_number());
    }

    #[test]
    fn test_indirect_document() {
        let dataset = analysis().indirect_plane();
        let json: serde_json::Value =
            serde_json::from_str(&PlotDocument::new(&dataset).to_json().unwrap()).unwrap();

        assert_eq!(json["y_label"], "Influencia Indirecta");
        assert_eq!(json["height"], 800);
        assert!(json.get("reference_lines").is_none());
    }
}
