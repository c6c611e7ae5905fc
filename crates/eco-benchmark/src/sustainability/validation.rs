use super::domain::{CompanyData, MaterialType, MaterialUsage, SustainabilityReport};
use super::factors::{default_unit, quantity_limit};
use super::report::analyze_sustainability;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("at least one proposed material is required")]
    NoMaterials,
    #[error("employee count must be greater than zero")]
    NonPositiveEmployees,
    #[error("current material consumption must be a non-negative number")]
    NegativeConsumption,
    #[error("{material} quantity must not be negative (found {quantity})")]
    NegativeQuantity { material: MaterialType, quantity: f64 },
    #[error("{material} quantity must be a finite number")]
    NonFiniteQuantity { material: MaterialType },
    #[error("{material} quantity {quantity} exceeds the plausible limit of {limit}")]
    QuantityAboveLimit {
        material: MaterialType,
        quantity: f64,
        limit: f64,
    },
    #[error("unknown company size '{0}'")]
    UnknownCompanySize(String),
    #[error("unknown material type '{0}'")]
    UnknownMaterialType(String),
}

/// Request body accepted by the analysis endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub company: CompanyData,
    pub proposed_materials: Vec<MaterialUsage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_materials: Option<Vec<MaterialUsage>>,
}

/// A request that passed boundary checks; only these reach the scoring engine.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRequest(AnalysisRequest);

impl AnalysisRequest {
    pub fn validate(mut self) -> Result<ValidatedRequest, ValidationError> {
        if self.proposed_materials.is_empty() {
            return Err(ValidationError::NoMaterials);
        }
        if self.company.employees == 0 {
            return Err(ValidationError::NonPositiveEmployees);
        }
        if let Some(consumption) = self.company.current_material_consumption {
            if !consumption.is_finite() || consumption < 0.0 {
                return Err(ValidationError::NegativeConsumption);
            }
        }

        for usage in &mut self.proposed_materials {
            normalize_usage(usage)?;
        }
        if let Some(current) = self.current_materials.as_mut() {
            for usage in current {
                normalize_usage(usage)?;
            }
        }

        Ok(ValidatedRequest(self))
    }
}

/// Rejects non-finite, negative or implausibly large quantities and fills a blank unit.
pub(crate) fn normalize_usage(usage: &mut MaterialUsage) -> Result<(), ValidationError> {
    let material = usage.material_type;
    let quantity = usage.quantity;

    if !quantity.is_finite() {
        return Err(ValidationError::NonFiniteQuantity { material });
    }
    if quantity < 0.0 {
        return Err(ValidationError::NegativeQuantity { material, quantity });
    }
    let limit = quantity_limit(material);
    if quantity > limit {
        return Err(ValidationError::QuantityAboveLimit {
            material,
            quantity,
            limit,
        });
    }

    if usage.unit.trim().is_empty() {
        usage.unit = default_unit(material).to_string();
    }
    Ok(())
}

impl ValidatedRequest {
    pub fn request(&self) -> &AnalysisRequest {
        &self.0
    }

    pub fn analyze(self) -> SustainabilityReport {
        let AnalysisRequest {
            company,
            proposed_materials,
            current_materials,
        } = self.0;
        analyze_sustainability(company, &proposed_materials, current_materials.as_deref())
    }
}
