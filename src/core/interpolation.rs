//! Scale-driven interpolation.
//!
//! Scale is multiplicative, so fades between two scales are linear in
//! `log2(scale)` rather than in `scale` itself.

/// Main interpolation utilities
pub struct Interpolation;

impl Interpolation {
    /// Linear interpolation between two f64 values
    pub fn linear(start: f64, end: f64, t: f64) -> f64 {
        start + (end - start) * t
    }

    /// Position of `scale` between `min_scale` and `max_scale` in log2 space,
    /// clamped to `[0, 1]`.
    pub fn log_scale_fraction(scale: f64, min_scale: f64, max_scale: f64) -> f64 {
        if scale <= min_scale {
            return 0.0;
        }
        if scale >= max_scale {
            return 1.0;
        }
        let log_min = min_scale.log2();
        let log_max = max_scale.log2();
        ((scale.log2() - log_min) / (log_max - log_min)).clamp(0.0, 1.0)
    }

    /// Interpolate from `min_value` at `min_scale` to `max_value` at `max_scale`.
    ///
    /// Returns the endpoint values exactly at and beyond either end of the range.
    pub fn log_scale(
        min_value: f32,
        max_value: f32,
        scale: f64,
        min_scale: f64,
        max_scale: f64,
    ) -> f32 {
        if scale <= min_scale {
            return min_value;
        }
        if scale >= max_scale {
            return max_value;
        }
        let t = Self::log_scale_fraction(scale, min_scale, max_scale);
        Self::linear(min_value as f64, max_value as f64, t) as f32
    }

    /// Integer variant of [`Interpolation::log_scale`], rounded to nearest.
    pub fn log_scale_rounded(
        min_value: i32,
        max_value: i32,
        scale: f64,
        min_scale: f64,
        max_scale: f64,
    ) -> i32 {
        if scale <= min_scale {
            return min_value;
        }
        if scale >= max_scale {
            return max_value;
        }
        let t = Self::log_scale_fraction(scale, min_scale, max_scale);
        Self::linear(min_value as f64, max_value as f64, t).round() as i32
    }

    /// Alpha channel for a log-scale fade between fully transparent and opaque.
    pub fn log_scale_alpha(scale: f64, min_scale: f64, max_scale: f64) -> u8 {
        Self::log_scale_rounded(0, 255, scale, min_scale, max_scale).clamp(0, 255) as u8
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn log_scale_is_monotonic_between_endpoints(
            low_exp in -7i32..3,
            span in 1i32..6,
            a in 0.0f64..1.0,
            b in 0.0f64..1.0,
        ) {
            let min_scale = 2f64.powi(low_exp);
            let max_scale = 2f64.powi(low_exp + span);
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let s1 = min_scale * (max_scale / min_scale).powf(lo);
            let s2 = min_scale * (max_scale / min_scale).powf(hi);

            let v1 = Interpolation::log_scale(0.0, 1.0, s1, min_scale, max_scale);
            let v2 = Interpolation::log_scale(0.0, 1.0, s2, min_scale, max_scale);
            prop_assert!(v1 <= v2);
            prop_assert!((0.0..=1.0).contains(&v1));
        }

        #[test]
        fn log_scale_clamps_outside_range(
            scale in 1e-6f64..1e6,
            min_value in -10.0f32..10.0,
            max_value in -10.0f32..10.0,
        ) {
            let value = Interpolation::log_scale(min_value, max_value, scale, 0.5, 4.0);
            if scale <= 0.5 {
                prop_assert_eq!(value, min_value);
            } else if scale >= 4.0 {
                prop_assert_eq!(value, max_value);
            }
        }
    }
}
