use super::domain::{BaselineComparison, BaselineEntry, MaterialType, MaterialUsage};
use super::factors::carbon_savings;

fn total_for(materials: &[MaterialUsage], material_type: MaterialType) -> f64 {
    materials
        .iter()
        .filter(|usage| usage.material_type == material_type)
        .map(|usage| usage.quantity)
        .sum()
}

/// Compares current consumption with the proposal for every material type present in both.
///
/// Entries follow the first appearance of each type in `proposed`. A negative
/// `quantity_saved` means the proposal consumes more than today.
pub fn compare_baseline(
    current: &[MaterialUsage],
    proposed: &[MaterialUsage],
) -> Option<BaselineComparison> {
    let mut seen: Vec<MaterialType> = Vec::new();
    let mut entries = Vec::new();

    for usage in proposed {
        let material_type = usage.material_type;
        if seen.contains(&material_type) {
            continue;
        }
        seen.push(material_type);

        if !current
            .iter()
            .any(|candidate| candidate.material_type == material_type)
        {
            continue;
        }

        let current_quantity = total_for(current, material_type);
        let proposed_quantity = total_for(proposed, material_type);
        let quantity_saved = current_quantity - proposed_quantity;

        entries.push(BaselineEntry {
            material_type,
            current_quantity,
            proposed_quantity,
            quantity_saved,
            carbon_savings_kg: carbon_savings(material_type, quantity_saved),
        });
    }

    if entries.is_empty() {
        return None;
    }

    let total_carbon_savings_kg = entries.iter().map(|entry| entry.carbon_savings_kg).sum();
    Some(BaselineComparison {
        entries,
        total_carbon_savings_kg,
    })
}
