//! Estimate and simulated build bounds

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::path::PathBuf;
use synthfs::estimate::SizeBudget;
use synthfs::spec::DatasetSpec;
use synthfs::tree::builder::{BuildOptions, DatasetBuilder};

fn spec_strategy() -> impl Strategy<Value = DatasetSpec> {
    (1u32..5, 1u32..5, 1u32..20, 0u64..10_000, 0u64..10_000).prop_map(|(w, d, m, a, b)| {
        DatasetSpec::new(w, d, m, a.min(b), a.max(b)).unwrap()
    })
}

fn simulate(spec: DatasetSpec, seed: u64, fill: bool) -> synthfs::tree::builder::BuildReport {
    DatasetBuilder::new(PathBuf::from("/nonexistent/synthfs-prop"), spec)
        .with_options(BuildOptions {
            estimate_only: true,
            fill_to_max: fill,
            ..BuildOptions::default()
        })
        .build(&mut SmallRng::seed_from_u64(seed))
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_budget_ordering(spec in spec_strategy()) {
        let budget = SizeBudget::for_spec(&spec);
        prop_assert!(budget.min_size <= budget.max_size);
        prop_assert!(budget.total_dirs <= budget.max_file_count);
    }

    #[test]
    fn test_simulated_total_never_exceeds_max(spec in spec_strategy(), seed in any::<u64>(), fill in any::<bool>()) {
        let report = simulate(spec, seed, fill);
        prop_assert!(report.total_size <= report.budget.max_size);
        prop_assert!(report.levels >= spec.folders_depth);
        if !fill {
            prop_assert_eq!(report.levels, spec.folders_depth);
        }
    }

    #[test]
    fn test_same_seed_same_simulation(spec in spec_strategy(), seed in any::<u64>()) {
        prop_assert_eq!(simulate(spec, seed, false), simulate(spec, seed, false));
    }
}
