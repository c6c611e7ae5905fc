//! Fixed per-material and per-size constants.
//!
//! The carbon-reduction factor feeds the per-analysis estimate of how much CO2 a company avoids
//! by staying under its excellence threshold. The emission factor feeds `carbon_savings`, used
//! when comparing a current baseline with a proposal. The two tables must not be merged.

use super::domain::{CompanySize, MaterialType};

/// Multiplier converting the reduction estimate from tonnes to kilograms.
pub const KG_PER_TONNE: f64 = 1000.0;

/// kg CO2 avoided per unit below the excellence threshold (before the tonne conversion).
pub const fn carbon_reduction_factor(material: MaterialType) -> f64 {
    match material {
        MaterialType::Brass => 2.5,
        MaterialType::Water => 0.001,
        MaterialType::Paper => 1.8,
        MaterialType::Plastic => 2.5,
        MaterialType::Energy => 0.5,
    }
}

/// kg CO2 emitted per tonne of material (per MWh for energy).
pub const fn emission_factor(material: MaterialType) -> f64 {
    match material {
        MaterialType::Brass => 2500.0,
        MaterialType::Water => 1.0,
        MaterialType::Paper => 1800.0,
        MaterialType::Plastic => 2500.0,
        MaterialType::Energy => 500.0,
    }
}

/// kg CO2 equivalent avoided by consuming `quantity_saved` less of a material.
pub fn carbon_savings(material: MaterialType, quantity_saved: f64) -> f64 {
    quantity_saved * emission_factor(material)
}

pub const fn default_unit(material: MaterialType) -> &'static str {
    match material {
        MaterialType::Energy => "MWh",
        MaterialType::Brass | MaterialType::Water | MaterialType::Paper | MaterialType::Plastic => {
            "tonnes"
        }
    }
}

/// Largest quantity accepted for a material before the input is treated as a data-entry error.
pub const fn quantity_limit(material: MaterialType) -> f64 {
    match material {
        MaterialType::Brass => 10_000.0,
        MaterialType::Water => 1_000_000.0,
        MaterialType::Paper => 50_000.0,
        MaterialType::Plastic => 50_000.0,
        MaterialType::Energy => 100_000.0,
    }
}

/// Tonnes of water per employee typical for a size tier.
pub const fn water_intensity_per_employee(size: CompanySize) -> f64 {
    match size {
        CompanySize::Micro => 5.0,
        CompanySize::Small => 8.0,
        CompanySize::Medium => 20.0,
        CompanySize::Large => 25.0,
        CompanySize::Huge => 50.0,
    }
}
