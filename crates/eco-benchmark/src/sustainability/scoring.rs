use super::benchmarks;
use super::domain::{Benchmark, CompanySize, MaterialAnalysis, MaterialType, MaterialUsage};
use super::factors::{carbon_reduction_factor, default_unit, KG_PER_TONNE};

/// Score returned when the excellent/recommended band has zero width.
const GOOD_BAND_FALLBACK: f64 = 70.0;
/// Score returned when the recommended/average band has zero width.
const MODERATE_BAND_FALLBACK: f64 = 50.0;
/// Points lost for every `EXCESS_STEP` units consumed above the sector average.
const EXCESS_PENALTY: f64 = 5.0;
const EXCESS_STEP: f64 = 10.0;

/// Piecewise-linear efficiency score in `[0, 100]`.
///
/// Bands, each inclusive at its upper bound:
/// * up to `excellent_threshold`: 100 down to 80
/// * up to `recommended_max`: 80 down to 60
/// * up to `average_usage`: 60 down to 40
/// * above the average: 40 minus 5 points per 10 units of excess, floored at 0
pub fn efficiency_percentage(quantity: f64, benchmark: &Benchmark) -> f64 {
    let score = if quantity <= benchmark.excellent_threshold {
        let ratio = if benchmark.excellent_threshold > 0.0 {
            quantity / benchmark.excellent_threshold
        } else {
            0.0
        };
        (100.0 - ratio * 20.0).max(80.0)
    } else if quantity <= benchmark.recommended_max {
        interpolate_band(
            quantity,
            benchmark.excellent_threshold,
            benchmark.recommended_max,
            80.0,
            GOOD_BAND_FALLBACK,
        )
    } else if quantity <= benchmark.average_usage {
        interpolate_band(
            quantity,
            benchmark.recommended_max,
            benchmark.average_usage,
            60.0,
            MODERATE_BAND_FALLBACK,
        )
    } else {
        let excess = quantity - benchmark.average_usage;
        let reduction = (excess / EXCESS_STEP * EXCESS_PENALTY).min(40.0);
        (40.0 - reduction).max(0.0)
    };

    score.clamp(0.0, 100.0)
}

/// Linear 20-point drop across `(lower, upper]` starting from `ceiling`.
fn interpolate_band(quantity: f64, lower: f64, upper: f64, ceiling: f64, fallback: f64) -> f64 {
    let range = upper - lower;
    if range <= 0.0 {
        return fallback;
    }
    let ratio = (quantity - lower) / range;
    ceiling - ratio * 20.0
}

pub fn is_eco_efficient(quantity: f64, benchmark: &Benchmark) -> bool {
    quantity <= benchmark.recommended_max
}

/// Estimated kg CO2 avoided by consuming less than the excellence threshold.
///
/// `None` unless the usage is eco-efficient and strictly below `excellent_threshold`.
pub fn carbon_footprint_reduction(
    material: MaterialType,
    quantity: f64,
    benchmark: &Benchmark,
) -> Option<f64> {
    if !is_eco_efficient(quantity, benchmark) {
        return None;
    }

    let delta = quantity - benchmark.excellent_threshold;
    if delta < 0.0 {
        Some(delta.abs() * carbon_reduction_factor(material) * KG_PER_TONNE)
    } else {
        None
    }
}

/// Per-material advice keyed on the efficiency band.
pub fn material_recommendation(material: MaterialType, efficiency: f64, excess: f64) -> String {
    if efficiency >= 80.0 {
        format!("Excellent! {material} usage is within the standards of excellence.")
    } else if efficiency >= 60.0 {
        format!("Good {material} usage. Consider optimizations to reach excellence.")
    } else if efficiency >= 40.0 {
        format!("Moderate {material} usage. There is significant room for improvement.")
    } else {
        format!(
            "High {material} consumption. Reduce by at least {excess:.2} {}.",
            default_unit(material)
        )
    }
}

/// Scores one material against the benchmark for the company's size tier.
pub fn analyze_material(material: &MaterialUsage, company_size: CompanySize) -> MaterialAnalysis {
    let benchmark = *benchmarks::lookup(company_size, material.material_type);
    let quantity = material.quantity;
    let efficiency = efficiency_percentage(quantity, &benchmark);
    let eco_efficient = is_eco_efficient(quantity, &benchmark);
    let carbon_reduction = carbon_footprint_reduction(material.material_type, quantity, &benchmark);
    let recommendation = material_recommendation(
        material.material_type,
        efficiency,
        quantity - benchmark.recommended_max,
    );

    MaterialAnalysis {
        material_type: material.material_type,
        proposed_quantity: quantity,
        company_size,
        benchmark,
        is_eco_efficient: eco_efficient,
        efficiency_percentage: efficiency,
        carbon_footprint_reduction: carbon_reduction,
        recommendation,
    }
}
