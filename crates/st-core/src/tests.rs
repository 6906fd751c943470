//! Unit tests for st-core primitives.

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
    }

    #[test]
    fn invalid_sentinel_is_max_and_default() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(AgentId::default(), AgentId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod vec2 {
    use crate::{Vec2, clamp_magnitude, magnitude, normalize};

    #[test]
    fn magnitude_of_3_4_is_5() {
        assert_eq!(magnitude(Vec2::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn normalize_zero_is_zero() {
        let n = normalize(Vec2::ZERO);
        assert_eq!(n, Vec2::ZERO);
        assert!(!n.x.is_nan() && !n.y.is_nan());
    }

    #[test]
    fn normalize_has_unit_length() {
        let n = normalize(Vec2::new(10.0, 0.0));
        assert_eq!(n, Vec2::new(1.0, 0.0));
        let d = normalize(Vec2::new(-2.0, 2.0));
        assert!((d.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn clamp_leaves_short_vectors_alone() {
        let v = Vec2::new(1.0, 1.0);
        assert_eq!(clamp_magnitude(v, 4.0), v);
        // Exactly at the limit is not rescaled.
        let edge = Vec2::new(0.0, 4.0);
        assert_eq!(clamp_magnitude(edge, 4.0), edge);
    }

    #[test]
    fn clamp_rescales_long_vectors() {
        let c = clamp_magnitude(Vec2::new(30.0, 40.0), 5.0);
        assert!((c.x - 3.0).abs() < 1e-5);
        assert!((c.y - 4.0).abs() < 1e-5);
    }

    #[test]
    fn clamp_negative_max_yields_zero() {
        assert_eq!(clamp_magnitude(Vec2::new(1.0, 0.0), -1.0), Vec2::ZERO);
    }

    #[test]
    fn operators() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, -1.0);
        assert_eq!(a + b, Vec2::new(4.0, 1.0));
        assert_eq!(a - b, Vec2::new(-2.0, 3.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(-a, Vec2::new(-1.0, -2.0));

        let mut c = a;
        c += b;
        c -= a;
        c *= 0.5;
        assert_eq!(c, Vec2::new(1.5, -0.5));
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(0.0, 7.5);
        assert_eq!(a.distance(b), 7.5);
        assert_eq!(b.distance(a), 7.5);
    }
}

#[cfg(test)]
mod vec2_props {
    use proptest::prelude::*;

    use crate::{Vec2, clamp_magnitude, normalize};

    proptest! {
        /// Property: clamping never exceeds the limit (up to f32 rounding).
        #[test]
        fn prop_clamp_bounded(
            x in -1.0e4f32..1.0e4f32,
            y in -1.0e4f32..1.0e4f32,
            max in 0.0f32..100.0f32,
        ) {
            let c = clamp_magnitude(Vec2::new(x, y), max);
            prop_assert!(c.length() <= max * (1.0 + 1e-5) + 1e-6);
        }

        /// Property: vectors already within the limit come back unchanged.
        #[test]
        fn prop_clamp_identity_when_short(
            x in -10.0f32..10.0f32,
            y in -10.0f32..10.0f32,
        ) {
            let v = Vec2::new(x, y);
            let max = v.length() + 0.001;
            prop_assert_eq!(clamp_magnitude(v, max), v);
        }

        /// Property: normalization is unit length or exactly zero.
        #[test]
        fn prop_normalize_unit_or_zero(
            x in -1.0e3f32..1.0e3f32,
            y in -1.0e3f32..1.0e3f32,
        ) {
            let n = normalize(Vec2::new(x, y));
            let len = n.length();
            prop_assert!(len == 0.0 || (len - 1.0).abs() < 1e-4);
        }
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, SimConfig, SteerError, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(15).since(Tick(10)), 5);
    }

    #[test]
    fn clock_elapsed() {
        let mut clock = SimClock::new(0.5);
        assert_eq!(clock.elapsed_secs(), 0.0);
        clock.advance();
        clock.advance();
        assert_eq!(clock.current_tick, Tick(2));
        assert!((clock.elapsed_secs() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn ticks_for_secs_rounds_up() {
        let clock = SimClock::new(0.02);
        assert_eq!(clock.ticks_for_secs(1.0), 50);
        assert_eq!(clock.ticks_for_secs(0.03), 2);
        assert_eq!(clock.ticks_for_secs(0.0), 0);
    }

    #[test]
    fn config_validate_rejects_bad_timestep() {
        assert!(SimConfig::default().validate().is_ok());
        for dt in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let config = SimConfig { fixed_dt: dt, ..SimConfig::default() };
            assert!(matches!(config.validate(), Err(SteerError::Config(_))), "dt = {dt}");
        }
    }

    #[test]
    fn config_defaults_and_output_ticks() {
        let config = SimConfig::default();
        assert_eq!(config.fixed_dt, 0.02);
        assert_eq!(config.end_tick(), Tick(config.total_ticks));

        let every_ten = SimConfig { output_interval_ticks: 10, ..SimConfig::default() };
        assert!(every_ten.is_output_tick(Tick(0)));
        assert!(every_ten.is_output_tick(Tick(20)));
        assert!(!every_ten.is_output_tick(Tick(5)));

        let never = SimConfig { output_interval_ticks: 0, ..SimConfig::default() };
        assert!(!never.is_output_tick(Tick(0)));
    }
}

#[cfg(test)]
mod rng {
    use crate::{SimRng, Vec2};

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimRng::new(7);
        let mut b = SimRng::new(7);
        for _ in 0..16 {
            assert_eq!(a.gen_range(0u32..1000), b.gen_range(0u32..1000));
        }
    }

    #[test]
    fn point_near_stays_in_square() {
        let mut rng = SimRng::new(1);
        let center = Vec2::new(5.0, -5.0);
        for _ in 0..100 {
            let p = rng.point_near(center, 2.0);
            assert!((p.x - center.x).abs() <= 2.0);
            assert!((p.y - center.y).abs() <= 2.0);
        }
        assert_eq!(rng.point_near(center, 0.0), center);
    }

    #[test]
    fn unit_direction_is_unit() {
        let mut rng = SimRng::new(3);
        let d = rng.unit_direction();
        assert!((d.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn child_rngs_diverge() {
        let mut root = SimRng::new(99);
        let mut c1 = root.child(1);
        let mut c2 = root.child(2);
        let s1: Vec<u32> = (0..8).map(|_| c1.gen_range(0..u32::MAX)).collect();
        let s2: Vec<u32> = (0..8).map(|_| c2.gen_range(0..u32::MAX)).collect();
        assert_ne!(s1, s2);
    }
}
