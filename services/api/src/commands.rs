use crate::infra::parse_company_size;
use clap::Args;
use eco_benchmark::error::AppError;
use eco_benchmark::sustainability::{
    benchmarks_for, AnalysisRequest, Benchmark, CompanyData, CompanySize, MaterialCsvImporter,
    SustainabilityReport,
};
use std::fmt::Write as _;
use std::io;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// Company size tier (micro, small, medium, large, huge)
    #[arg(
        long,
        value_parser = parse_company_size,
        required_unless_present = "request",
        conflicts_with = "request"
    )]
    pub(crate) size: Option<CompanySize>,
    /// Number of employees
    #[arg(long, default_value_t = 1)]
    pub(crate) employees: u32,
    /// Industry or sector label echoed in the report
    #[arg(long, default_value = "unspecified")]
    pub(crate) industry: String,
    /// CSV file with `type,quantity,unit` rows of proposed materials
    #[arg(long, required_unless_present = "request", conflicts_with = "request")]
    pub(crate) materials: Option<PathBuf>,
    /// Optional CSV file with current consumption to compare against
    #[arg(long, conflicts_with = "request")]
    pub(crate) current: Option<PathBuf>,
    /// JSON file containing a complete analysis request body
    #[arg(long)]
    pub(crate) request: Option<PathBuf>,
    /// Print the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct BenchmarksArgs {
    /// Restrict output to a single company size tier
    #[arg(long, value_parser = parse_company_size)]
    pub(crate) size: Option<CompanySize>,
    /// Emit CSV instead of a text table
    #[arg(long)]
    pub(crate) csv: bool,
}

pub(crate) fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let (request, json) = load_request(args)?;
    let report = request.validate()?.analyze();

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_report(&report));
    }
    Ok(())
}

fn load_request(args: AnalyzeArgs) -> Result<(AnalysisRequest, bool), AppError> {
    let AnalyzeArgs {
        size,
        employees,
        industry,
        materials,
        current,
        request,
        json,
    } = args;

    if let Some(path) = request {
        let raw = std::fs::read_to_string(path)?;
        return Ok((serde_json::from_str(&raw)?, json));
    }

    let (Some(size), Some(materials)) = (size, materials) else {
        return Err(AppError::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            "--size and --materials are required without --request",
        )));
    };

    let proposed_materials = MaterialCsvImporter::from_path(materials)?;
    let current_materials = current
        .map(MaterialCsvImporter::from_path)
        .transpose()?;

    let request = AnalysisRequest {
        company: CompanyData {
            size,
            employees,
            industry,
            current_material_consumption: None,
        },
        proposed_materials,
        current_materials,
    };
    Ok((request, json))
}

pub(crate) fn run_benchmarks(args: BenchmarksArgs) -> Result<(), AppError> {
    let rows = selected_benchmarks(args.size);
    if args.csv {
        print!("{}", benchmarks_csv(&rows)?);
    } else {
        print!("{}", render_benchmarks(&rows));
    }
    Ok(())
}

fn selected_benchmarks(size: Option<CompanySize>) -> Vec<Benchmark> {
    let sizes: Vec<CompanySize> = match size {
        Some(size) => vec![size],
        None => CompanySize::ordered().to_vec(),
    };
    sizes
        .into_iter()
        .flat_map(|size| benchmarks_for(size).iter().copied())
        .collect()
}

pub(crate) fn benchmarks_csv(rows: &[Benchmark]) -> Result<String, AppError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row).map_err(io::Error::from)?;
    }
    let bytes = writer.into_inner().map_err(|err| err.into_error())?;
    String::from_utf8(bytes)
        .map_err(|err| AppError::Io(io::Error::new(io::ErrorKind::InvalidData, err)))
}

pub(crate) fn render_benchmarks(rows: &[Benchmark]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<8} {:<8} {:>12} {:>12} {:>12}",
        "size", "material", "excellent", "recommended", "average"
    );
    for row in rows {
        let _ = writeln!(
            out,
            "{:<8} {:<8} {:>12.2} {:>12.2} {:>12.2}",
            row.company_size.as_str(),
            row.material_type.as_str(),
            row.excellent_threshold,
            row.recommended_max,
            row.average_usage
        );
    }
    out
}

pub(crate) fn render_report(report: &SustainabilityReport) -> String {
    let mut out = String::new();
    let company = &report.company;
    let _ = writeln!(
        out,
        "Sustainability report: {} ({}, {} employees)",
        company.industry, company.size, company.employees
    );
    let _ = writeln!(
        out,
        "Overall score {:.1}/100, eco-efficient: {}",
        report.overall_score,
        if report.overall_eco_efficient { "yes" } else { "no" }
    );
    let _ = writeln!(out, "{}", report.overall_recommendation);

    let _ = writeln!(out, "\nMaterials");
    for analysis in &report.materials_analysis {
        let reduction = analysis
            .carbon_footprint_reduction
            .map(|kg| format!(", avoids ~{kg:.0} kg CO2"))
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "- {:<8} {:>12.2} (max {:.2}) efficiency {:.1}%{}",
            analysis.material_type.as_str(),
            analysis.proposed_quantity,
            analysis.benchmark.recommended_max,
            analysis.efficiency_percentage,
            reduction
        );
        let _ = writeln!(out, "    {}", analysis.recommendation);
    }

    let _ = writeln!(out, "\nImprovements");
    for improvement in &report.improvements {
        let _ = writeln!(out, "- {improvement}");
    }

    if let Some(savings) = report.potential_savings {
        let _ = writeln!(out, "\nPotential savings: {savings:.2} units");
    }

    if let Some(baseline) = &report.baseline {
        let _ = writeln!(out, "\nCompared with current consumption");
        for entry in &baseline.entries {
            let _ = writeln!(
                out,
                "- {:<8} {:.2} -> {:.2} ({:+.0} kg CO2 saved)",
                entry.material_type.as_str(),
                entry.current_quantity,
                entry.proposed_quantity,
                entry.carbon_savings_kg
            );
        }
        let _ = writeln!(
            out,
            "Total carbon savings: {:.0} kg CO2",
            baseline.total_carbon_savings_kg
        );
    }

    out
}
