//! End-to-end scenarios for the scoring engine through its public facade.

use eco_benchmark::sustainability::{
    analyze_sustainability, lookup, AnalysisRequest, CompanyData, CompanySize, MaterialType,
    MaterialUsage, SustainabilityReport, MAINTAIN_STANDARDS,
};

fn company(size: CompanySize, employees: u32, industry: &str) -> CompanyData {
    CompanyData {
        size,
        employees,
        industry: industry.to_string(),
        current_material_consumption: None,
    }
}

fn usage(material_type: MaterialType, quantity: f64) -> MaterialUsage {
    MaterialUsage {
        material_type,
        quantity,
        unit: "tonnes".to_string(),
    }
}

#[test]
fn medium_manufacturer_within_recommended_limits() {
    let materials = [
        usage(MaterialType::Brass, 8.5),
        usage(MaterialType::Water, 850.0),
    ];
    let report = analyze_sustainability(
        company(CompanySize::Medium, 100, "Manufacturing"),
        &materials,
        None,
    );

    let types: Vec<_> = report
        .materials_analysis
        .iter()
        .map(|analysis| analysis.material_type)
        .collect();
    assert_eq!(types, vec![MaterialType::Brass, MaterialType::Water]);

    let mean = report
        .materials_analysis
        .iter()
        .map(|analysis| analysis.efficiency_percentage)
        .sum::<f64>()
        / 2.0;
    assert!((report.overall_score - mean).abs() < 1e-9);

    assert!(report.overall_eco_efficient);
    assert!(report
        .materials_analysis
        .iter()
        .all(|analysis| analysis.is_eco_efficient));
    assert_eq!(report.potential_savings, None);
    assert_eq!(report.improvements, vec![MAINTAIN_STANDARDS.to_string()]);

    // 8.5 sits in the good band (7.5..=10): 80 - 0.4 * 20
    assert!((report.materials_analysis[0].efficiency_percentage - 72.0).abs() < 1e-9);
}

#[test]
fn small_company_below_excellence_thresholds() {
    let materials = [
        usage(MaterialType::Brass, 0.8),
        usage(MaterialType::Water, 80.0),
    ];
    let report = analyze_sustainability(
        company(CompanySize::Small, 25, "Technology"),
        &materials,
        None,
    );

    for analysis in &report.materials_analysis {
        assert!(analysis.efficiency_percentage >= 80.0);
        assert!(analysis.is_eco_efficient);
        let reduction = analysis
            .carbon_footprint_reduction
            .expect("below the excellence threshold earns a reduction estimate");
        assert!(reduction > 0.0);
        assert!(analysis.recommendation.starts_with("Excellent"));
    }
    assert!(report.overall_score >= 80.0);
    assert!(report.overall_eco_efficient);

    let brass = &report.materials_analysis[0];
    let brass_reduction = brass.carbon_footprint_reduction.unwrap_or_default();
    assert!((brass_reduction - 0.7 * 2.5 * 1000.0).abs() < 1e-6);
}

#[test]
fn quantity_at_the_sector_average_scores_exactly_forty() {
    for size in CompanySize::ordered() {
        for material in MaterialType::ordered() {
            let average = lookup(size, material).average_usage;
            let report = analyze_sustainability(
                company(size, 10, "Logistics"),
                &[usage(material, average)],
                None,
            );
            let analysis = &report.materials_analysis[0];
            assert_eq!(analysis.efficiency_percentage, 40.0);
            assert!(!analysis.is_eco_efficient);
            assert!(analysis.recommendation.starts_with("Moderate"));
        }
    }
}

#[test]
fn heavy_consumers_get_reduction_targets() {
    let materials = [
        usage(MaterialType::Plastic, 3.5),
        usage(MaterialType::Energy, 8.0),
    ];
    let report = analyze_sustainability(
        company(CompanySize::Micro, 6, "Retail"),
        &materials,
        None,
    );

    let plastic = &report.materials_analysis[0];
    assert!(!plastic.is_eco_efficient);
    assert!(plastic.efficiency_percentage < 40.0);
    assert!(plastic.recommendation.contains("2.50"));
    assert_eq!(plastic.carbon_footprint_reduction, None);

    assert!(!report.overall_eco_efficient);
    assert_eq!(report.potential_savings, Some(2.5));
    assert_eq!(report.improvements.len(), 1);
    assert!(report.improvements[0].contains("plastic"));
}

#[test]
fn baseline_comparison_uses_emission_factors() {
    let current = [usage(MaterialType::Paper, 60.0)];
    let proposed = [usage(MaterialType::Paper, 45.0), usage(MaterialType::Brass, 5.0)];
    let report = analyze_sustainability(
        company(CompanySize::Medium, 120, "Publishing"),
        &proposed,
        Some(&current[..]),
    );

    let baseline = report.baseline.expect("paper overlaps");
    assert_eq!(baseline.entries.len(), 1);
    assert_eq!(baseline.entries[0].quantity_saved, 15.0);
    assert_eq!(baseline.total_carbon_savings_kg, 15.0 * 1800.0);
}

#[test]
fn report_round_trips_through_json_preserving_nulls() {
    let materials = [
        usage(MaterialType::Brass, 0.2),
        usage(MaterialType::Water, 260.0),
        usage(MaterialType::Energy, 40.0),
    ];
    let report = analyze_sustainability(
        company(CompanySize::Small, 30, "Sustainable goods"),
        &materials,
        None,
    );

    let encoded = serde_json::to_value(&report).expect("report serializes");
    assert!(encoded["materials_analysis"][1]["carbon_footprint_reduction"].is_null());
    assert!(encoded["potential_savings"].is_number());
    assert!(encoded["is_eco_efficient"].is_boolean());
    assert!(encoded.get("baseline").is_none());
    assert_eq!(encoded["materials_analysis"][0]["material_type"], "brass");

    let decoded: SustainabilityReport =
        serde_json::from_value(encoded).expect("report deserializes");
    assert_eq!(decoded, report);

    let within_limits = analyze_sustainability(
        company(CompanySize::Small, 30, "Sustainable goods"),
        &[usage(MaterialType::Brass, 1.8)],
        None,
    );
    let encoded = serde_json::to_string(&within_limits).expect("serializes");
    assert!(encoded.contains("\"potential_savings\":null"));
    let decoded: SustainabilityReport = serde_json::from_str(&encoded).expect("deserializes");
    assert_eq!(decoded.potential_savings, None);
    assert_eq!(decoded, within_limits);
}

#[test]
fn request_payload_accepts_wire_names_and_defaults() {
    let payload = r#"{
        "company": { "size": "large", "employees": 320, "industry": "Automotive" },
        "proposed_materials": [ { "type": "energy", "quantity": 600 } ]
    }"#;
    let request: AnalysisRequest = serde_json::from_str(payload).expect("payload parses");
    assert_eq!(request.company.current_material_consumption, None);

    let report = request.validate().expect("valid").analyze();
    assert_eq!(report.materials_analysis[0].benchmark.company_size, CompanySize::Large);
    assert!(report.overall_score >= 80.0);
}

#[test]
fn unknown_enum_values_never_reach_the_engine() {
    let payload = r#"{
        "company": { "size": "medium", "employees": 100, "industry": "Manufacturing" },
        "proposed_materials": [ { "type": "invalid_material", "quantity": 100, "unit": "tonnes" } ]
    }"#;
    assert!(serde_json::from_str::<AnalysisRequest>(payload).is_err());

    let payload = r#"{
        "company": { "size": "gigantic", "employees": 100, "industry": "Manufacturing" },
        "proposed_materials": [ { "type": "water", "quantity": 100 } ]
    }"#;
    assert!(serde_json::from_str::<AnalysisRequest>(payload).is_err());
}
