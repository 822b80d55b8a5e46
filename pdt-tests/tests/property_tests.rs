//! Property Tests mit proptest

use pdt_core::config::{DURATION_MAX, DURATION_MIN};
use pdt_core::tasks::StartDebouncer;
use pdt_core::{
    DebouncePolicy, Phase, SensorReading, SharedState, adjust_duration, clamp_axis, fluence,
    irradiance, led_power, scale_axis,
};
use proptest::prelude::*;
use rgb::RGB8;

proptest! {
    #[test]
    fn scaled_axis_is_monotonic(a in 0i32..=4095, b in 0i32..=4095) {
        prop_assume!(a <= b);
        prop_assert!(scale_axis(a) >= scale_axis(b));
    }

    #[test]
    fn clamped_axis_stays_in_range(raw in any::<i32>()) {
        let v = clamp_axis(raw);
        prop_assert!((0..=4095).contains(&v));
    }

    #[test]
    fn duration_always_in_bounds(start in 0u16..=2000, delta in -2000i32..=2000) {
        let d = adjust_duration(start, delta);
        prop_assert!((DURATION_MIN..=DURATION_MAX).contains(&d));
    }

    #[test]
    fn power_and_irradiance_bounded(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let p = led_power(RGB8 { r, g, b });
        prop_assert!((0.0..=9.0 + 1e-4).contains(&p));
        let e = irradiance(p);
        prop_assert!((0.0..=13.64).contains(&e));
    }

    #[test]
    fn fluence_scales_with_minutes(e in 0.0f32..14.0, minutes in 1u16..=720) {
        let single = fluence(e, minutes);
        let double = fluence(e, minutes * 2);
        prop_assert!((double - 2.0 * single).abs() < 1e-2);
    }

    #[test]
    fn final_irradiance_only_takes_values_above_threshold(
        samples in proptest::collection::vec(0.0f32..14.0, 1..32)
    ) {
        let mut reading = SensorReading::default();
        for e in &samples {
            reading.update(Some(1), *e);
        }
        let expected = samples.iter().rev().find(|e| **e > 0.05).copied().unwrap_or(0.0);
        prop_assert_eq!(reading.final_irradiance, expected);
    }

    #[test]
    fn sustained_debounce_needs_full_streak(touches in proptest::collection::vec(any::<bool>(), 1..40)) {
        let mut debouncer = StartDebouncer::new(DebouncePolicy::Sustained { polls: 3 });
        let mut streak = 0u32;
        for touched in touches {
            streak = if touched { streak + 1 } else { 0 };
            prop_assert_eq!(debouncer.poll(touched), streak >= 3);
        }
    }

    #[test]
    fn only_forward_transitions_succeed(targets in proptest::collection::vec(0u8..3, 0..12)) {
        let shared = SharedState::new();
        for t in targets {
            let to = match t {
                0 => Phase::Configuring,
                1 => Phase::Treating,
                _ => Phase::Finished,
            };
            let before = shared.phase();
            let result = shared.advance_phase(to);
            if before.next() == Some(to) {
                prop_assert_eq!(result, Ok(to));
                prop_assert_eq!(shared.phase(), to);
            } else {
                prop_assert!(result.is_err());
                prop_assert_eq!(shared.phase(), before);
            }
        }
    }
}
