use super::domain::{Benchmark, CompanySize, MaterialType};
use std::collections::BTreeMap;

use CompanySize::{Huge, Large, Medium, Micro, Small};
use MaterialType::{Brass, Energy, Paper, Plastic, Water};

const fn row(
    company_size: CompanySize,
    material_type: MaterialType,
    excellent_threshold: f64,
    recommended_max: f64,
    average_usage: f64,
) -> Benchmark {
    Benchmark {
        company_size,
        material_type,
        recommended_max,
        average_usage,
        excellent_threshold,
    }
}

/// Rows are indexed by `CompanySize::index()` then `MaterialType::index()`.
/// Quantities are tonnes, except energy which is MWh.
static BENCHMARKS: [[Benchmark; MaterialType::COUNT]; CompanySize::COUNT] = [
    [
        row(Micro, Brass, 0.3, 0.5, 1.0),
        row(Micro, Water, 30.0, 50.0, 100.0),
        row(Micro, Paper, 1.5, 2.0, 4.0),
        row(Micro, Plastic, 0.5, 1.0, 2.5),
        row(Micro, Energy, 7.0, 10.0, 20.0),
    ],
    [
        row(Small, Brass, 1.5, 2.0, 5.0),
        row(Small, Water, 150.0, 200.0, 400.0),
        row(Small, Paper, 7.0, 10.0, 20.0),
        row(Small, Plastic, 3.0, 5.0, 12.0),
        row(Small, Energy, 35.0, 50.0, 100.0),
    ],
    [
        row(Medium, Brass, 7.5, 10.0, 25.0),
        row(Medium, Water, 750.0, 1000.0, 2000.0),
        row(Medium, Paper, 35.0, 50.0, 100.0),
        row(Medium, Plastic, 15.0, 25.0, 60.0),
        row(Medium, Energy, 175.0, 250.0, 500.0),
    ],
    [
        row(Large, Brass, 37.5, 50.0, 125.0),
        row(Large, Water, 3750.0, 5000.0, 10000.0),
        row(Large, Paper, 175.0, 250.0, 500.0),
        row(Large, Plastic, 75.0, 125.0, 300.0),
        row(Large, Energy, 875.0, 1250.0, 2500.0),
    ],
    [
        row(Huge, Brass, 187.5, 250.0, 625.0),
        row(Huge, Water, 18750.0, 25000.0, 50000.0),
        row(Huge, Paper, 875.0, 1250.0, 2500.0),
        row(Huge, Plastic, 375.0, 625.0, 1500.0),
        row(Huge, Energy, 4375.0, 6250.0, 12500.0),
    ],
];

/// Benchmark row for a size tier and material.
pub fn lookup(company_size: CompanySize, material_type: MaterialType) -> &'static Benchmark {
    &BENCHMARKS[company_size.index()][material_type.index()]
}

/// All five material rows for a size tier, in `MaterialType::ordered()` order.
pub fn benchmarks_for(company_size: CompanySize) -> &'static [Benchmark; MaterialType::COUNT] {
    &BENCHMARKS[company_size.index()]
}

/// Material-keyed view of a tier, as exposed over HTTP.
pub fn benchmark_map(company_size: CompanySize) -> BTreeMap<MaterialType, Benchmark> {
    benchmarks_for(company_size)
        .iter()
        .map(|benchmark| (benchmark.material_type, *benchmark))
        .collect()
}

pub fn all_benchmarks() -> impl Iterator<Item = &'static Benchmark> {
    BENCHMARKS.iter().flat_map(|tier| tier.iter())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_cell_matches_its_key() {
        for size in CompanySize::ordered() {
            for material in MaterialType::ordered() {
                let benchmark = lookup(size, material);
                assert_eq!(benchmark.company_size, size);
                assert_eq!(benchmark.material_type, material);
            }
        }
    }

    #[test]
    fn thresholds_are_ordered_for_all_rows() {
        let rows: Vec<_> = all_benchmarks().collect();
        assert_eq!(rows.len(), 25);
        for benchmark in rows {
            assert!(
                benchmark.excellent_threshold <= benchmark.recommended_max
                    && benchmark.recommended_max <= benchmark.average_usage,
                "unordered thresholds for {} / {}",
                benchmark.company_size,
                benchmark.material_type
            );
            assert!(benchmark.excellent_threshold >= 0.0);
        }
    }

    #[test]
    fn tiers_scale_up_with_company_size() {
        for material in MaterialType::ordered() {
            let maxima: Vec<f64> = CompanySize::ordered()
                .into_iter()
                .map(|size| lookup(size, material).recommended_max)
                .collect();
            assert!(maxima.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }

    #[test]
    fn medium_tier_rows_match_published_values() {
        let brass = lookup(CompanySize::Medium, MaterialType::Brass);
        assert_eq!(brass.excellent_threshold, 7.5);
        assert_eq!(brass.recommended_max, 10.0);
        assert_eq!(brass.average_usage, 25.0);

        let water = lookup(CompanySize::Medium, MaterialType::Water);
        assert_eq!(water.recommended_max, 1000.0);
    }

    #[test]
    fn benchmark_map_covers_every_material() {
        let map = benchmark_map(CompanySize::Small);
        assert_eq!(map.len(), MaterialType::COUNT);
        assert_eq!(map[&MaterialType::Water].excellent_threshold, 150.0);
    }
}
