use super::baseline::compare_baseline;
use super::domain::{CompanyData, MaterialAnalysis, MaterialUsage, SustainabilityReport};
use super::scoring::analyze_material;

pub const MAINTAIN_STANDARDS: &str = "Maintain current standards and keep monitoring";

/// Unweighted mean of the per-material efficiency percentages, or 0 for no materials.
pub fn overall_score(analyses: &[MaterialAnalysis]) -> f64 {
    if analyses.is_empty() {
        return 0.0;
    }

    let total: f64 = analyses
        .iter()
        .map(|analysis| analysis.efficiency_percentage)
        .sum();
    total / analyses.len() as f64
}

pub fn overall_eco_efficient(analyses: &[MaterialAnalysis]) -> bool {
    analyses.iter().all(|analysis| analysis.is_eco_efficient)
}

pub fn overall_recommendation(score: f64) -> &'static str {
    if score >= 80.0 {
        "Excellent! Your company shows a strong commitment to sustainability."
    } else if score >= 60.0 {
        "Good performance. Keep optimizing to reach excellence."
    } else if score >= 40.0 {
        "Moderate performance. There are significant opportunities for improvement."
    } else {
        "Attention required. Adopt more sustainable practices urgently."
    }
}

/// Summed excess over `recommended_max` for non eco-efficient materials; `None` when nothing
/// is in excess.
pub fn potential_savings(analyses: &[MaterialAnalysis]) -> Option<f64> {
    let total: f64 = analyses
        .iter()
        .filter(|analysis| !analysis.is_eco_efficient)
        .map(MaterialAnalysis::excess_over_recommended)
        .filter(|excess| *excess > 0.0)
        .sum();

    (total > 0.0).then_some(total)
}

/// One reduction target per non eco-efficient material. Never empty.
pub fn improvements(analyses: &[MaterialAnalysis]) -> Vec<String> {
    let mut improvements: Vec<String> = analyses
        .iter()
        .filter(|analysis| !analysis.is_eco_efficient)
        .map(|analysis| {
            format!(
                "Reduce {} by {:.2} units to reach the recommended standard",
                analysis.material_type,
                analysis.excess_over_recommended()
            )
        })
        .collect();

    if improvements.is_empty() {
        improvements.push(MAINTAIN_STANDARDS.to_string());
    }

    improvements
}

/// Combines per-material analyses into the report, preserving their order.
pub fn aggregate(company: CompanyData, analyses: Vec<MaterialAnalysis>) -> SustainabilityReport {
    let score = overall_score(&analyses);

    SustainabilityReport {
        company,
        overall_score: score,
        overall_recommendation: overall_recommendation(score).to_string(),
        overall_eco_efficient: overall_eco_efficient(&analyses),
        potential_savings: potential_savings(&analyses),
        improvements: improvements(&analyses),
        materials_analysis: analyses,
        baseline: None,
    }
}

/// Scores every proposed material for the company's tier and aggregates the result.
///
/// When `current_materials` is supplied the report also carries a baseline comparison.
pub fn analyze_sustainability(
    company: CompanyData,
    proposed_materials: &[MaterialUsage],
    current_materials: Option<&[MaterialUsage]>,
) -> SustainabilityReport {
    let analyses = proposed_materials
        .iter()
        .map(|material| analyze_material(material, company.size))
        .collect();

    let mut report = aggregate(company, analyses);
    report.baseline =
        current_materials.and_then(|current| compare_baseline(current, proposed_materials));
    report
}
