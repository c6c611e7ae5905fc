//! Benchmark-based scoring of a company's proposed raw-material consumption.
//!
//! Every operation here is a pure function of its inputs. The only shared data is the static
//! benchmark table, which is never written after compilation.

mod baseline;
pub mod benchmarks;
pub mod domain;
pub mod factors;
mod import;
mod report;
mod router;
mod scoring;
mod validation;

pub use baseline::compare_baseline;
pub use benchmarks::{benchmark_map, benchmarks_for, lookup};
pub use domain::{
    BaselineComparison, BaselineEntry, Benchmark, CompanyData, CompanySize, MaterialAnalysis,
    MaterialType, MaterialUsage, SustainabilityReport,
};
pub use import::{MaterialCsvImporter, MaterialImportError};
pub use report::{
    aggregate, analyze_sustainability, improvements, overall_eco_efficient,
    overall_recommendation, overall_score, potential_savings, MAINTAIN_STANDARDS,
};
pub use router::{
    company_size_descriptors, example_request, material_descriptors, sustainability_router,
    CompanySizeDescriptor, MaterialDescriptor,
};
pub use scoring::{
    analyze_material, carbon_footprint_reduction, efficiency_percentage, is_eco_efficient,
    material_recommendation,
};
pub use validation::{AnalysisRequest, ValidatedRequest, ValidationError};
