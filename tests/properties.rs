//! Property tests for the knapsack GA invariants.

use knapsack_ga::catalog::{Catalog, GeneType};
use knapsack_ga::error::{GaError, InfeasibleStage};
use knapsack_ga::ga::operators::exchange_genes;
use knapsack_ga::ga::random::{create_rng, cumulative_band_index, equal_band_index};
use knapsack_ga::ga::selection::select_parents;
use knapsack_ga::ga::{Chromosome, Evolution, GaConfig, RunState};
use proptest::prelude::*;

fn catalog_strategy() -> impl Strategy<Value = Catalog> {
    prop::collection::vec((0.1f64..3.0, 0.0f64..1000.0, 0u32..=4), 1..=4).prop_map(|items| {
        let gene_types = items
            .into_iter()
            .enumerate()
            .map(|(i, (w, v, q))| GeneType::new(format!("item-{i}"), w, v, q))
            .collect();
        Catalog::new(gene_types).expect("strategy only produces valid records")
    })
}

fn chromosome_for(catalog: &Catalog, picks: &[u32]) -> Chromosome {
    let quantities: Vec<u32> = catalog
        .iter()
        .zip(picks.iter().cycle())
        .map(|(t, &p)| p % (t.max_quantity + 1))
        .collect();
    Chromosome::from_quantities(catalog, &quantities)
}

proptest! {
    #[test]
    fn equal_bands_stay_in_range_and_ordered(count in 1usize..60, a in 0u32..=100, b in 0u32..=100) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let i = equal_band_index(count, lo);
        let j = equal_band_index(count, hi);
        prop_assert!(i < count && j < count);
        prop_assert!(i <= j);
    }

    #[test]
    fn cumulative_bands_stay_in_range(weights in prop::collection::vec(0.0f64..10.0, 1..10), p in 0u32..=100) {
        let total: f64 = weights.iter().sum();
        let shares: Vec<f64> = if total > 0.0 {
            weights.iter().map(|w| w * 100.0 / total).collect()
        } else {
            vec![100.0 / weights.len() as f64; weights.len()]
        };
        prop_assert!(cumulative_band_index(&shares, p) < shares.len());
    }

    #[test]
    fn exchange_only_touches_points(
        catalog in catalog_strategy(),
        a in prop::collection::vec(0u32..5, 4),
        b in prop::collection::vec(0u32..5, 4),
        x in 0usize..4,
        y in 0usize..4,
    ) {
        let n = catalog.len();
        let first = chromosome_for(&catalog, &a);
        let second = chromosome_for(&catalog, &b);
        let mut points = vec![x % n];
        if y % n != x % n {
            points.push(y % n);
        }

        let (ca, cb) = exchange_genes(&first, &second, &points);
        prop_assert_eq!(ca.len(), n);
        prop_assert_eq!(cb.len(), n);
        for i in 0..n {
            if points.contains(&i) {
                prop_assert_eq!(&ca.genes()[i], &second.genes()[i]);
                prop_assert_eq!(&cb.genes()[i], &first.genes()[i]);
            } else {
                prop_assert_eq!(&ca.genes()[i], &first.genes()[i]);
                prop_assert_eq!(&cb.genes()[i], &second.genes()[i]);
            }
        }
    }

    #[test]
    fn better_parent_never_worth_less(
        catalog in catalog_strategy(),
        picks in prop::collection::vec(prop::collection::vec(0u32..5, 4), 1..5),
        seed in any::<u64>(),
    ) {
        // Duplicate to get an even population.
        let population: Vec<Chromosome> = picks
            .iter()
            .chain(picks.iter())
            .map(|p| chromosome_for(&catalog, p))
            .collect();
        let mut rng = create_rng(seed);
        let parents = select_parents(&population, &mut rng);
        prop_assert!(parents.better.total_value() >= parents.worse.total_value());
    }

    #[test]
    fn runs_keep_every_invariant(
        catalog in catalog_strategy(),
        capacity in 1.0f64..20.0,
        half_population in 1usize..4,
        mutation in 0u32..=100,
        seed in any::<u64>(),
    ) {
        let config = GaConfig::default()
            .with_capacity(capacity)
            .with_population_size(half_population * 2)
            .with_max_generations(30)
            .with_mutation_probability_percent(mutation);
        let mut evolution = Evolution::new(&catalog, &config, create_rng(seed))
            .expect("an all-zero loading is always reachable");

        let mut last_best = evolution.best().total_value();
        while evolution.state() == RunState::Running {
            match evolution.step() {
                Ok(_) => {}
                // Some parent pairs admit no feasible 1-2 gene exchange. The
                // failed step must leave the previous state intact.
                Err(GaError::ConfigurationInfeasible { stage: InfeasibleStage::Crossover, .. }) => {
                    prop_assert_eq!(evolution.population().len(), config.population_size);
                    prop_assert!(evolution.population().iter().all(|c| c.is_feasible(capacity)));
                    prop_assert!(evolution.best().chromosome.is_feasible(capacity));
                    prop_assert_eq!(evolution.best().total_value(), last_best);
                    prop_assume!(false, "crossover exhausted its retries");
                }
                Err(e) => return Err(TestCaseError::fail(e.to_string())),
            }

            prop_assert_eq!(evolution.population().len(), config.population_size);
            for chromosome in evolution.population() {
                prop_assert!(chromosome.is_feasible(capacity));
                prop_assert_eq!(chromosome.len(), catalog.len());
                for (i, gene) in chromosome.genes().iter().enumerate() {
                    prop_assert_eq!(gene.type_index, i);
                    prop_assert!(gene.quantity <= catalog[i].max_quantity);
                }
            }

            let best = evolution.best();
            prop_assert!(best.chromosome.is_feasible(capacity));
            for chromosome in evolution.population() {
                prop_assert!(best.total_value() >= chromosome.total_value());
            }
            prop_assert!(best.total_value() >= last_best);
            last_best = best.total_value();
        }
    }
}
