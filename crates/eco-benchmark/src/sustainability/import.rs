use super::domain::{MaterialType, MaterialUsage};
use super::validation::{normalize_usage, ValidationError};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum MaterialImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Invalid { line: u64, source: ValidationError },
}

impl std::fmt::Display for MaterialImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MaterialImportError::Io(err) => write!(f, "failed to read material list: {}", err),
            MaterialImportError::Csv(err) => write!(f, "invalid material CSV data: {}", err),
            MaterialImportError::Invalid { line, source } => {
                write!(f, "invalid material on line {}: {}", line, source)
            }
        }
    }
}

impl std::error::Error for MaterialImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MaterialImportError::Io(err) => Some(err),
            MaterialImportError::Csv(err) => Some(err),
            MaterialImportError::Invalid { source, .. } => Some(source),
        }
    }
}

impl From<std::io::Error> for MaterialImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for MaterialImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

#[derive(Debug, Deserialize)]
struct MaterialRow {
    #[serde(rename = "type")]
    material_type: String,
    quantity: f64,
    #[serde(default)]
    unit: Option<String>,
}

/// Reads `type,quantity,unit` rows into material usages.
///
/// Every row passes the same quantity checks as an HTTP request; blank units take the
/// material's default.
pub struct MaterialCsvImporter;

impl MaterialCsvImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<MaterialUsage>, MaterialImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<MaterialUsage>, MaterialImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);
        let headers = csv_reader.headers()?.clone();
        let mut materials = Vec::new();

        for record in csv_reader.records() {
            let record = record?;
            let line = record.position().map(|pos| pos.line()).unwrap_or_default();
            let row: MaterialRow = record.deserialize(Some(&headers))?;
            let material_type = MaterialType::parse(&row.material_type).ok_or_else(|| {
                MaterialImportError::Invalid {
                    line,
                    source: ValidationError::UnknownMaterialType(row.material_type.clone()),
                }
            })?;

            let mut usage = MaterialUsage {
                material_type,
                quantity: row.quantity,
                unit: row.unit.unwrap_or_default(),
            };
            normalize_usage(&mut usage)
                .map_err(|source| MaterialImportError::Invalid { line, source })?;
            materials.push(usage);
        }

        Ok(materials)
    }
}
