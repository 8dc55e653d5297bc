mod common;

use approx::assert_relative_eq;

use projector_core::source::{SourceKind, SourceSet};
use projector_core::zoom::{round2, ZoomConfig, ZoomMachine};

use common::{test_zoom_config, thumb_and_full};

fn machine_at(config: ZoomConfig) -> ZoomMachine {
    let mut m = ZoomMachine::new(config);
    m.on_source_changed(&thumb_and_full());
    m
}

const IN: f64 = -100.0;
const OUT: f64 = 100.0;

#[test]
fn test_initial_state() {
    let m = machine_at(test_zoom_config());
    let s = m.state();
    assert_eq!(s.level, 1.0);
    assert!(!s.high_res_loaded);
    assert_eq!(s.active_source, SourceKind::Thumb);
}

#[test]
fn test_zoom_in_one_step_from_one() {
    let mut m = machine_at(test_zoom_config());
    let outcome = m.on_wheel(IN);
    assert_relative_eq!(outcome.level, 1.1);
    assert_relative_eq!(m.level(), 1.1);
    assert!(outcome.changed());
}

#[test]
fn test_step_grows_with_integer_part_of_level() {
    let mut m = machine_at(ZoomConfig {
        initial: 3.0,
        ..test_zoom_config()
    });
    m.on_wheel(IN);
    assert_relative_eq!(m.level(), 3.3);
}

#[test]
fn test_zoom_out_uses_look_ahead_candidate() {
    // 2.05 - 0.2 = 1.85, but the step at 1.85 is only 0.1, so 1.95 wins.
    let mut m = machine_at(ZoomConfig {
        initial: 2.05,
        ..test_zoom_config()
    });
    m.on_wheel(OUT);
    assert_relative_eq!(m.level(), 1.95);
}

#[test]
fn test_zoom_out_clamps_to_min() {
    let mut m = machine_at(ZoomConfig {
        initial: 1.05,
        ..test_zoom_config()
    });
    m.on_wheel(OUT);
    assert_eq!(m.level(), 1.0);

    let outcome = m.on_wheel(OUT);
    assert_eq!(outcome.level, 1.0);
    assert!(!outcome.changed());
}

#[test]
fn test_zoom_in_clamps_to_max() {
    let mut m = machine_at(ZoomConfig {
        initial: 1.95,
        max: 2.0,
        load_threshold: 1.5,
        ..test_zoom_config()
    });
    m.on_wheel(IN);
    assert_eq!(m.level(), 2.0);
    m.on_wheel(IN);
    assert_eq!(m.level(), 2.0);
}

#[test]
fn test_zero_delta_is_ignored() {
    let mut m = machine_at(test_zoom_config());
    let outcome = m.on_wheel(0.0);
    assert!(!outcome.changed());
    assert!(!outcome.load_full);
    let outcome = m.on_wheel(f64::NAN);
    assert!(!outcome.changed());
}

#[test]
fn test_level_never_leaves_bounds() {
    let config = ZoomConfig {
        initial: 1.5,
        min: 0.8,
        max: 20.0,
        load_threshold: 4.0,
        wheel_sensitivity: 0.1,
    };
    let mut m = machine_at(config.clone());
    // Long runs in each direction interleaved with jitter.
    let pattern: Vec<f64> = std::iter::repeat(IN)
        .take(80)
        .chain(std::iter::repeat(OUT).take(90))
        .chain((0..200).map(|i| if i % 3 == 0 { OUT } else { IN }))
        .chain(std::iter::repeat(OUT).take(200))
        .collect();
    for delta in pattern {
        m.on_wheel(delta);
        let level = m.level();
        assert!(
            level >= config.min && level <= config.max,
            "level {level} escaped [{}, {}]",
            config.min,
            config.max
        );
    }
    assert_eq!(m.level(), config.min);
}

#[test]
fn test_in_then_out_does_not_exceed_start() {
    let starts = [1.0, 1.5, 1.95, 2.0, 2.5, 3.95, 7.3, 9.9];
    for &start in &starts {
        let mut m = machine_at(ZoomConfig {
            initial: start,
            ..test_zoom_config()
        });
        m.on_wheel(IN);
        m.on_wheel(OUT);
        assert!(
            m.level() <= start + 1e-9,
            "start {start} came back at {}",
            m.level()
        );
    }
}

#[test]
fn test_in_then_out_can_overshoot_with_large_step() {
    // The zoom-out step is taken from the already-grown level, so a coarse
    // sensitivity across an integer boundary lands above the start.
    let mut m = machine_at(ZoomConfig {
        initial: 2.0,
        wheel_sensitivity: 0.5,
        ..test_zoom_config()
    });
    m.on_wheel(IN);
    assert_relative_eq!(m.level(), 3.0);
    m.on_wheel(OUT);
    assert_relative_eq!(m.level(), 2.5);
}

#[test]
fn test_out_of_range_initial_is_clamped() {
    let config = ZoomConfig {
        initial: 15.0,
        ..test_zoom_config()
    };
    let mut m = ZoomMachine::new(config.clone());
    assert_eq!(m.level(), 10.0);

    m.on_source_changed(&thumb_and_full());
    assert_eq!(m.level(), 10.0);

    m.set_config(ZoomConfig {
        initial: 0.2,
        ..test_zoom_config()
    });
    assert_eq!(m.level(), 1.0);
}

#[test]
fn test_latch_fires_once_per_source() {
    let mut m = machine_at(test_zoom_config());
    let mut fired = 0;
    for _ in 0..40 {
        if m.on_wheel(IN).load_full {
            fired += 1;
        }
    }
    assert_eq!(fired, 1);
    assert!(m.state().high_res_loaded);
    assert_eq!(m.state().active_source, SourceKind::Full);

    // Going back below the threshold and up again does not re-fire.
    for _ in 0..40 {
        m.on_wheel(OUT);
    }
    for _ in 0..40 {
        assert!(!m.on_wheel(IN).load_full);
    }
}

#[test]
fn test_latch_compares_new_level_strictly() {
    let mut m = machine_at(ZoomConfig {
        load_threshold: 1.1,
        ..test_zoom_config()
    });
    let first = m.on_wheel(IN);
    assert_relative_eq!(first.level, 1.1);
    assert!(!first.load_full, "1.1 is not above 1.1");
    let second = m.on_wheel(IN);
    assert!(second.load_full);
}

#[test]
fn test_zoom_out_never_latches() {
    let mut m = machine_at(ZoomConfig {
        initial: 5.0,
        ..test_zoom_config()
    });
    assert!(!m.on_wheel(OUT).load_full);
    assert!(!m.state().high_res_loaded);
}

#[test]
fn test_no_full_source_never_latches() {
    let mut m = ZoomMachine::new(test_zoom_config());
    m.on_source_changed(&SourceSet::new("only-thumb.jpg", None));
    for _ in 0..40 {
        assert!(!m.on_wheel(IN).load_full);
    }
    assert!(!m.state().high_res_loaded);
    assert_eq!(m.state().active_source, SourceKind::Thumb);
}

#[test]
fn test_source_change_resets_mid_zoom_at_max() {
    let mut m = machine_at(test_zoom_config());
    for _ in 0..60 {
        m.on_wheel(IN);
    }
    assert_eq!(m.level(), 10.0);
    assert!(m.state().high_res_loaded);

    m.on_source_changed(&SourceSet::new("next.jpg", Some("next-full.jpg".into())));
    assert_eq!(m.level(), 1.0);
    assert!(!m.state().high_res_loaded);
    assert_eq!(m.state().active_source, SourceKind::Thumb);

    // The latch is armed again for the new source.
    let fired = (0..40).filter(|_| m.on_wheel(IN).load_full).count();
    assert_eq!(fired, 1);
}

#[test]
fn test_round2() {
    assert_eq!(round2(1.0 + 0.1), 1.1);
    assert_eq!(round2(2.345_000_1), 2.35);
    assert_eq!(round2(0.1 + 0.2), 0.3);
}

#[test]
fn test_many_small_steps_do_not_drift() {
    let mut m = machine_at(test_zoom_config());
    for _ in 0..10 {
        m.on_wheel(IN);
    }
    assert_eq!(m.level(), 2.0);
}
