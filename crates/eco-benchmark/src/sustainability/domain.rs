use serde::{Deserialize, Serialize};
use std::fmt;

/// Company size tier selecting the benchmark row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanySize {
    Micro,
    Small,
    Medium,
    Large,
    Huge,
}

impl CompanySize {
    pub const COUNT: usize = 5;

    pub const fn ordered() -> [Self; Self::COUNT] {
        [
            Self::Micro,
            Self::Small,
            Self::Medium,
            Self::Large,
            Self::Huge,
        ]
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Micro => 0,
            Self::Small => 1,
            Self::Medium => 2,
            Self::Large => 3,
            Self::Huge => 4,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Micro => "micro",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Huge => "huge",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Micro => "Up to 10 employees",
            Self::Small => "10-50 employees",
            Self::Medium => "50-200 employees",
            Self::Large => "200-500 employees",
            Self::Huge => "More than 500 employees",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|size| size.as_str() == normalized)
    }
}

impl fmt::Display for CompanySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw material (or resource) whose consumption is benchmarked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialType {
    Brass,
    Water,
    Paper,
    Plastic,
    Energy,
}

impl MaterialType {
    pub const COUNT: usize = 5;

    pub const fn ordered() -> [Self; Self::COUNT] {
        [
            Self::Brass,
            Self::Water,
            Self::Paper,
            Self::Plastic,
            Self::Energy,
        ]
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Brass => 0,
            Self::Water => 1,
            Self::Paper => 2,
            Self::Plastic => 3,
            Self::Energy => 4,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Brass => "brass",
            Self::Water => "water",
            Self::Paper => "paper",
            Self::Plastic => "plastic",
            Self::Energy => "energy",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Brass => "Copper and zinc metal alloys",
            Self::Water => "Water consumption",
            Self::Paper => "Paper and pulp products",
            Self::Plastic => "Plastic polymers",
            Self::Energy => "Energy consumption (electricity, gas, etc.)",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|material| material.as_str() == normalized)
    }
}

impl fmt::Display for MaterialType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyData {
    pub size: CompanySize,
    pub employees: u32,
    pub industry: String,
    #[serde(default)]
    pub current_material_consumption: Option<f64>,
}

/// One proposed (or current) material flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialUsage {
    #[serde(rename = "type")]
    pub material_type: MaterialType,
    pub quantity: f64,
    #[serde(default)]
    pub unit: String,
}

/// Reference row for one (company size, material type) pair.
///
/// Populated rows satisfy `excellent_threshold <= recommended_max <= average_usage`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Benchmark {
    pub company_size: CompanySize,
    pub material_type: MaterialType,
    pub recommended_max: f64,
    pub average_usage: f64,
    pub excellent_threshold: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialAnalysis {
    pub material_type: MaterialType,
    pub proposed_quantity: f64,
    pub company_size: CompanySize,
    pub benchmark: Benchmark,
    pub is_eco_efficient: bool,
    pub efficiency_percentage: f64,
    pub carbon_footprint_reduction: Option<f64>,
    pub recommendation: String,
}

impl MaterialAnalysis {
    /// Quantity above the benchmark's recommended maximum (negative when below it).
    pub fn excess_over_recommended(&self) -> f64 {
        self.proposed_quantity - self.benchmark.recommended_max
    }
}

/// Per-type comparison between a company's current and proposed consumption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineEntry {
    pub material_type: MaterialType,
    pub current_quantity: f64,
    pub proposed_quantity: f64,
    pub quantity_saved: f64,
    pub carbon_savings_kg: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineComparison {
    pub entries: Vec<BaselineEntry>,
    pub total_carbon_savings_kg: f64,
}

/// Aggregate report returned for one analysis request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SustainabilityReport {
    pub company: CompanyData,
    pub materials_analysis: Vec<MaterialAnalysis>,
    pub overall_score: f64,
    pub overall_recommendation: String,
    #[serde(rename = "is_eco_efficient")]
    pub overall_eco_efficient: bool,
    pub potential_savings: Option<f64>,
    pub improvements: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline: Option<BaselineComparison>,
}
