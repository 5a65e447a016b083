//! Property tests for the interval recurrence and history window

use proptest::prelude::*;

use safe_amr::AmrSimulator;
use safe_core::{AmrConfig, Interval, SeverityMode, HISTORY_WINDOW, MAX_INTERVAL, MIN_INTERVAL};
use safe_test::Scenario;

fn any_mode() -> impl Strategy<Value = SeverityMode> {
    prop_oneof![
        Just(SeverityMode::Moderate),
        Just(SeverityMode::Critical),
        Just(SeverityMode::Catastrophic),
    ]
}

fn start_interval() -> impl Strategy<Value = f64> {
    MIN_INTERVAL..=MAX_INTERVAL
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    #[test]
    fn moderate_grows_to_ceiling(start in start_interval(), ticks in 1u64..300) {
        let trace = Scenario::new().starting_at(start).ticks(ticks).run().unwrap();
        prop_assert!(trace.is_monotone_non_decreasing(0..trace.len() + 1));
        prop_assert!(trace.max_interval() <= Interval(MAX_INTERVAL));
    }

    #[test]
    fn catastrophic_decays_to_floor(start in start_interval(), ticks in 1u64..300) {
        let trace = Scenario::new()
            .starting_at(start)
            .mode(SeverityMode::Catastrophic)
            .ticks(ticks)
            .run()
            .unwrap();
        prop_assert!(trace.is_monotone_non_increasing(0..trace.len() + 1));
        prop_assert!(trace.min_interval() >= Interval(MIN_INTERVAL));
    }

    #[test]
    fn critical_never_below_its_floor(start in start_interval(), ticks in 1u64..300) {
        let trace = Scenario::new()
            .starting_at(start)
            .mode(SeverityMode::Critical)
            .ticks(ticks)
            .run()
            .unwrap();
        prop_assert!(trace.snapshots.iter().all(|s| s.interval.0 >= 1.0));
    }

    #[test]
    fn mixed_schedule_stays_in_bounds(
        start in start_interval(),
        schedule in prop::collection::vec((any_mode(), 0u64..40), 1..12),
    ) {
        let mut scenario = Scenario::new().starting_at(start);
        for (mode, ticks) in &schedule {
            scenario = scenario.mode(*mode).ticks(*ticks);
        }
        let trace = scenario.run().unwrap();
        let expected: u64 = schedule.iter().map(|(_, n)| n).sum();

        prop_assert!(trace.within_bounds(MIN_INTERVAL, MAX_INTERVAL));
        prop_assert_eq!(trace.last().tick, expected);
    }

    #[test]
    fn history_keeps_most_recent_window(ticks in 0u64..200) {
        let mut sim = AmrSimulator::new();
        sim.tick_n(ticks);

        let history: Vec<u64> = sim.history().iter().map(|s| s.tick).collect();
        let first = ticks.saturating_sub(HISTORY_WINDOW as u64) + 1;
        let expected: Vec<u64> = (first..=ticks).collect();

        prop_assert!(history.len() <= HISTORY_WINDOW);
        prop_assert_eq!(history, expected);
    }

    #[test]
    fn tick_count_increments_by_one(modes in prop::collection::vec(any_mode(), 1..50)) {
        let mut sim = AmrSimulator::new();
        for (i, mode) in modes.iter().enumerate() {
            sim.set_mode(*mode);
            let sample = sim.tick();
            prop_assert_eq!(sample.tick, i as u64 + 1);
            prop_assert_eq!(sim.tick_count(), i as u64 + 1);
        }
    }

    #[test]
    fn set_mode_never_steps(pre in 0u64..50, mode in any_mode()) {
        let mut sim = AmrSimulator::new();
        sim.tick_n(pre);
        let before = sim.snapshot();
        sim.set_mode(mode);
        let after = sim.snapshot();

        prop_assert_eq!(after.interval, before.interval);
        prop_assert_eq!(after.tick, before.tick);
        prop_assert_eq!(after.history, before.history);
    }

    #[test]
    fn same_schedule_same_trace(
        schedule in prop::collection::vec((any_mode(), 0u64..20), 1..8),
    ) {
        let build = || {
            schedule
                .iter()
                .fold(Scenario::new(), |s, (mode, n)| s.mode(*mode).ticks(*n))
        };
        let a = build().run().unwrap();
        let b = build().run().unwrap();
        prop_assert_eq!(a.snapshots, b.snapshots);
    }
}

#[test]
fn saturation_scenarios_are_exact() {
    let down = Scenario::new()
        .mode(SeverityMode::Catastrophic)
        .ticks(200)
        .run()
        .unwrap();
    assert_eq!(down.final_interval(), Interval(0.5));

    let up = Scenario::new().starting_at(0.5).ticks(200).run().unwrap();
    assert_eq!(up.final_interval(), Interval(2.5));
}

#[test]
fn custom_config_moves_bounds() {
    let config = AmrConfig {
        min_interval: 0.25,
        critical_floor: 0.75,
        max_interval: 4.0,
        ..AmrConfig::default()
    };
    let trace = Scenario::new()
        .with_config(config)
        .ticks(100)
        .mode(SeverityMode::Catastrophic)
        .ticks(100)
        .run()
        .unwrap();

    assert_eq!(trace.max_interval(), Interval(4.0));
    assert_eq!(trace.final_interval(), Interval(0.25));
}
