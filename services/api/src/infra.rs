use eco_benchmark::sustainability::{CompanySize, ValidationError};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

pub(crate) const SERVICE_NAME: &str = "eco-benchmark-api";

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_company_size(raw: &str) -> Result<CompanySize, String> {
    CompanySize::parse(raw).ok_or_else(|| {
        let expected: Vec<_> = CompanySize::ordered()
            .iter()
            .map(|size| size.as_str())
            .collect();
        format!(
            "{} (expected one of: {})",
            ValidationError::UnknownCompanySize(raw.to_string()),
            expected.join(", ")
        )
    })
}
