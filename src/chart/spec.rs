//! Declarative chart specification
//!
//! Serializes to the configuration object Chart.js takes as its second
//! constructor argument: `{ type, data: { labels, datasets }, options }`.

use serde::{Deserialize, Serialize};

use super::error::{ChartError, ChartResult};

/// Chart type discriminator
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
}

/// One colour for the whole series, or one per point
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Colors {
    Single(String),
    PerPoint(Vec<String>),
}

impl From<&str> for Colors {
    fn from(color: &str) -> Self {
        Colors::Single(color.to_string())
    }
}

impl From<Vec<&str>> for Colors {
    fn from(colors: Vec<&str>) -> Self {
        Colors::PerPoint(colors.into_iter().map(str::to_string).collect())
    }
}

/// A labelled numeric series with style metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Colors>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Colors>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point_radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point_background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
}

impl Dataset {
    pub fn new(label: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            data,
            background_color: None,
            border_color: None,
            border_width: None,
            border_radius: None,
            tension: None,
            point_radius: None,
            point_background_color: None,
            fill: None,
        }
    }

    pub fn background(mut self, colors: impl Into<Colors>) -> Self {
        self.background_color = Some(colors.into());
        self
    }

    pub fn border(mut self, colors: impl Into<Colors>, width: f64) -> Self {
        self.border_color = Some(colors.into());
        self.border_width = Some(width);
        self
    }

    pub fn radius(mut self, radius: f64) -> Self {
        self.border_radius = Some(radius);
        self
    }

    /// Line smoothing and point styling
    pub fn curve(mut self, tension: f64, point_radius: f64, point_color: &str) -> Self {
        self.tension = Some(tension);
        self.point_radius = Some(point_radius);
        self.point_background_color = Some(point_color.to_string());
        self
    }

    pub fn filled(mut self) -> Self {
        self.fill = Some(true);
        self
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Legend {
    pub display: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Title {
    pub display: bool,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plugins {
    pub legend: Legend,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
}

impl Default for Plugins {
    fn default() -> Self {
        Self {
            legend: Legend { display: false },
            title: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Grid {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Ticks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Axis scale configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub begin_at_zero: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default)]
    pub grid: Grid,
    #[serde(default)]
    pub ticks: Ticks,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Scales {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<Axis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<Axis>,
}

/// Display options
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    /// `"y"` draws horizontal bars
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_axis: Option<String>,
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    #[serde(default)]
    pub plugins: Plugins,
    #[serde(default)]
    pub scales: Scales,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            index_axis: None,
            responsive: true,
            maintain_aspect_ratio: false,
            plugins: Plugins::default(),
            scales: Scales::default(),
        }
    }
}

/// Complete chart description
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartSpec {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    #[serde(default)]
    pub options: ChartOptions,
}

impl ChartSpec {
    pub fn new(kind: ChartKind, labels: Vec<String>) -> Self {
        Self {
            kind,
            data: ChartData {
                labels,
                datasets: Vec::new(),
            },
            options: ChartOptions::default(),
        }
    }

    pub fn dataset(mut self, dataset: Dataset) -> Self {
        self.data.datasets.push(dataset);
        self
    }

    pub fn options(mut self, options: ChartOptions) -> Self {
        self.options = options;
        self
    }

    /// Check that every series is drawable against the labels
    pub fn validate(&self) -> ChartResult<()> {
        if self.data.datasets.is_empty() {
            return Err(ChartError::InvalidSpec("no datasets".to_string()));
        }
        let expected = self.data.labels.len();
        for dataset in &self.data.datasets {
            if dataset.data.len() != expected {
                return Err(ChartError::InvalidSpec(format!(
                    "dataset {:?} has {} values for {} labels",
                    dataset.label,
                    dataset.data.len(),
                    expected
                )));
            }
            if let Some(bad) = dataset.data.iter().find(|v| !v.is_finite()) {
                return Err(ChartError::InvalidSpec(format!(
                    "dataset {:?} contains non-finite value {}",
                    dataset.label, bad
                )));
            }
        }
        Ok(())
    }

    /// Configuration object as JSON
    pub fn to_json(&self) -> ChartResult<String> {
        serde_json::to_string(self).map_err(|e| ChartError::InvalidSpec(e.to_string()))
    }
}
