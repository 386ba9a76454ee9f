//! Invariants of the progress to frame mapping over arbitrary inputs

use profix_core::motion::{lerp, map_progress_to_frame, SequencePlayer};
use profix_core::SequenceConfig;
use proptest::prelude::*;

proptest! {
    #[test]
    fn result_is_always_a_valid_frame(
        progress in -10.0f64..10.0,
        total in 1u32..2_000,
        smoothing in 0.0f64..=1.0,
        previous in 0u32..5_000,
    ) {
        let frame = map_progress_to_frame(progress, total, smoothing, previous);
        prop_assert!(frame < total);
    }

    #[test]
    fn unsmoothed_equals_rounded_target(
        progress in 0.0f64..=1.0,
        total in 2u32..2_000,
        previous in 0u32..2_000,
    ) {
        let expected = (progress * f64::from(total - 1)).round() as u32;
        prop_assert_eq!(map_progress_to_frame(progress, total, 1.0, previous), expected.min(total - 1));
    }

    #[test]
    fn one_step_matches_rounded_lerp(
        progress in 0.0f64..=1.0,
        total in 2u32..2_000,
        smoothing in 0.0f64..=1.0,
        previous in 0u32..2_000,
    ) {
        let previous = previous.min(total - 1);
        let expected = lerp(f64::from(previous), progress * f64::from(total - 1), smoothing).round() as u32;
        prop_assert_eq!(map_progress_to_frame(progress, total, smoothing, previous), expected);
    }

    #[test]
    fn smoothing_never_overshoots_or_retreats(
        progress in 0.0f64..=1.0,
        total in 2u32..500,
        smoothing in 0.01f64..=1.0,
        previous in 0u32..500,
    ) {
        let previous = previous.min(total - 1);
        let target = map_progress_to_frame(progress, total, 1.0, previous);
        let next = map_progress_to_frame(progress, total, smoothing, previous);

        let (lo, hi) = if previous <= target { (previous, target) } else { (target, previous) };
        prop_assert!(lo <= next && next <= hi, "{} not between {} and {}", next, lo, hi);
    }

    #[test]
    fn player_reaches_exact_target(
        progress in 0.0f64..=1.0,
        total in 2u32..300,
        smoothing in 0.05f64..=1.0,
    ) {
        let mut player = SequencePlayer::new(SequenceConfig {
            total_frames: total,
            smoothing,
            ..Default::default()
        });
        let target = player.target_frame(progress);
        let mut ticks = 0;
        while !player.is_settled(progress) {
            player.update(progress);
            ticks += 1;
            prop_assert!(ticks <= 10 * total as usize, "did not settle");
        }
        prop_assert_eq!(player.current_frame(), target);
    }
}

#[test]
fn degenerate_sequences_always_show_frame_zero() {
    for total in [0, 1] {
        for progress in [-1.0, 0.0, 0.25, 1.0, 9.0] {
            assert_eq!(map_progress_to_frame(progress, total, 0.12, 7), 0);
        }
    }
}
