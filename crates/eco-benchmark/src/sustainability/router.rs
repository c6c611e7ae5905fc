use axum::{
    extract::Path,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use tracing::{info, warn};

use super::benchmarks::benchmark_map;
use super::domain::{
    Benchmark, CompanyData, CompanySize, MaterialType, MaterialUsage, SustainabilityReport,
};
use super::factors::{default_unit, water_intensity_per_employee};
use super::validation::AnalysisRequest;
use crate::error::AppError;

#[derive(Debug, Clone, Serialize)]
pub struct MaterialDescriptor {
    #[serde(rename = "type")]
    pub material_type: MaterialType,
    pub description: &'static str,
    pub default_unit: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompanySizeDescriptor {
    pub size: CompanySize,
    pub description: &'static str,
    pub water_intensity_per_employee: f64,
}

pub fn material_descriptors() -> Vec<MaterialDescriptor> {
    MaterialType::ordered()
        .into_iter()
        .map(|material_type| MaterialDescriptor {
            material_type,
            description: material_type.description(),
            default_unit: default_unit(material_type),
        })
        .collect()
}

pub fn company_size_descriptors() -> Vec<CompanySizeDescriptor> {
    CompanySize::ordered()
        .into_iter()
        .map(|size| CompanySizeDescriptor {
            size,
            description: size.description(),
            water_intensity_per_employee: water_intensity_per_employee(size),
        })
        .collect()
}

/// Sample payload for the analysis endpoint: a medium manufacturer's brass and water plan.
pub fn example_request() -> AnalysisRequest {
    AnalysisRequest {
        company: CompanyData {
            size: CompanySize::Medium,
            employees: 100,
            industry: "Manufacturing".to_string(),
            current_material_consumption: None,
        },
        proposed_materials: vec![
            MaterialUsage {
                material_type: MaterialType::Brass,
                quantity: 8.5,
                unit: "tonnes".to_string(),
            },
            MaterialUsage {
                material_type: MaterialType::Water,
                quantity: 850.0,
                unit: "tonnes".to_string(),
            },
        ],
        current_materials: None,
    }
}

/// Router exposing the sustainability analysis and reference-data endpoints.
pub fn sustainability_router() -> Router {
    Router::new()
        .route("/api/v1/sustainability/analyze", post(analyze_handler))
        .route(
            "/api/v1/sustainability/benchmarks/:company_size",
            get(benchmarks_handler),
        )
        .route("/api/v1/sustainability/materials", get(materials_handler))
        .route(
            "/api/v1/sustainability/company-sizes",
            get(company_sizes_handler),
        )
        .route("/api/v1/sustainability/example", get(example_handler))
}

pub(crate) async fn analyze_handler(
    Json(request): Json<AnalysisRequest>,
) -> Result<Json<SustainabilityReport>, AppError> {
    let company_size = request.company.size;
    let validated = request.validate().map_err(|err| {
        warn!(%company_size, error = %err, "rejected sustainability analysis request");
        err
    })?;

    let report = validated.analyze();
    info!(
        %company_size,
        materials = report.materials_analysis.len(),
        overall_score = report.overall_score,
        eco_efficient = report.overall_eco_efficient,
        "sustainability analysis completed"
    );

    Ok(Json(report))
}

pub(crate) async fn benchmarks_handler(
    Path(company_size): Path<CompanySize>,
) -> Json<BTreeMap<MaterialType, Benchmark>> {
    Json(benchmark_map(company_size))
}

pub(crate) async fn materials_handler() -> Json<Value> {
    Json(json!({ "materials": material_descriptors() }))
}

pub(crate) async fn company_sizes_handler() -> Json<Value> {
    Json(json!({ "company_sizes": company_size_descriptors() }))
}

pub(crate) async fn example_handler() -> Json<Value> {
    Json(json!({
        "example_request": example_request(),
        "note": "POST this JSON to /api/v1/sustainability/analyze",
    }))
}
