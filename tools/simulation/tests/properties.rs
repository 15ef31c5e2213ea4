//! Property tests over randomly shaped runs
//!
//! Output alignment, non-negative volumes, imbalance bounds and sign, the
//! Langevin recurrence, and seed idempotence.

use orderflow_sim::engine::{run_seeded, Engine};
use proptest::prelude::*;
use types::config::{SimulationConfig, SimulationSpec, WallConfiguration};

/// Run shape with walls placed inside the book.
fn arb_spec() -> impl Strategy<Value = SimulationSpec> {
    (
        1usize..60,
        1usize..80,
        prop_oneof![Just(0.1), Just(0.25), Just(1.0)],
        proptest::collection::vec(0.0f64..1.0, 0..4),
    )
        .prop_map(|(n_steps, n_levels, tick_size, fracs)| {
            let walls = fracs
                .into_iter()
                .map(|f| ((f * n_levels as f64) as usize).min(n_levels - 1))
                .collect();
            SimulationSpec::new(
                SimulationConfig::new(n_steps, n_levels, tick_size),
                WallConfiguration::new(walls),
            )
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_outputs_aligned(spec in arb_spec(), seed in any::<u64>()) {
        let n_steps = spec.config.n_steps;
        let n_levels = spec.config.n_levels;
        let result = Engine::seeded(spec, seed).unwrap().run();
        prop_assert_eq!(result.price_series.len(), n_steps);
        prop_assert_eq!(result.book_snapshots.len(), n_steps);
        prop_assert_eq!(result.step_stats.len(), n_steps);
        prop_assert!(result.book_snapshots.iter().all(|b| b.n_levels() == n_levels));
    }

    #[test]
    fn prop_volumes_non_negative(spec in arb_spec(), seed in any::<u64>()) {
        let result = Engine::seeded(spec, seed).unwrap().run();
        for book in &result.book_snapshots {
            prop_assert!(book.bid_volumes().iter().all(|&v| v >= 0.0));
            prop_assert!(book.ask_volumes().iter().all(|&v| v >= 0.0));
        }
    }

    #[test]
    fn prop_imbalance_bounded_and_signed(spec in arb_spec(), seed in any::<u64>()) {
        let result = Engine::seeded(spec, seed).unwrap().run();
        for s in &result.step_stats {
            if s.bid_sum + s.ask_sum > 0.0 {
                prop_assert!((-1.0..=1.0).contains(&s.imbalance));
                prop_assert_eq!(s.imbalance > 0.0, s.bid_sum > s.ask_sum);
            }
        }
    }

    #[test]
    fn prop_langevin_recurrence(spec in arb_spec(), seed in any::<u64>()) {
        let friction = spec.force.friction;
        let mut mid = spec.force.initial_mid;
        let result = Engine::seeded(spec, seed).unwrap().run();
        let mut velocity = 0.0;
        for (trace, new_mid) in result.traces.iter().zip(result.price_series.iter()) {
            prop_assert_eq!(trace.velocity, friction * velocity + trace.force);
            prop_assert_eq!(new_mid, mid + trace.velocity);
            mid = new_mid;
            velocity = trace.velocity;
        }
    }

    #[test]
    fn prop_same_seed_identical(spec in arb_spec(), seed in any::<u64>()) {
        let a = run_seeded(spec.config.clone(), spec.walls.clone(), seed).unwrap();
        let b = run_seeded(spec.config, spec.walls, seed).unwrap();
        let bits_a: Vec<u64> = a.price_series.iter().map(f64::to_bits).collect();
        let bits_b: Vec<u64> = b.price_series.iter().map(f64::to_bits).collect();
        prop_assert_eq!(bits_a, bits_b);
    }
}
