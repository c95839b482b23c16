//! Health attribute pair with mutation-time validation

use crate::error::{HealthError, Result};
use serde::{Deserialize, Serialize};

/// Current and maximum health for an entity.
///
/// The pair keeps `0 <= current <= max` across every mutation. The bounds
/// are checked when a value is set, not encoded in the numeric type: an
/// out-of-range value is reported as an error and the stored attributes
/// are left untouched.
///
/// Entity types that take damage embed one of these and forward the
/// [`Damageable`](crate::damageable::Damageable) accessors to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Health {
    /// Current health
    current: f64,
    /// Maximum health
    max: f64,
}

impl Health {
    /// Largest maximum health a setter accepts.
    ///
    /// Matches the single-precision ceiling of host runtimes that store
    /// vitals as 32-bit floats.
    pub const CEILING: f64 = f32::MAX as f64;

    /// Maximum health used by [`Health::default`]
    pub const DEFAULT_MAX: f64 = 20.0;

    /// Create a health pair at full health.
    ///
    /// Fails when `max` is not finite, negative, or above
    /// [`Health::CEILING`].
    pub fn new(max: f64) -> Result<Self> {
        if !max.is_finite() {
            return Err(HealthError::NotFinite(max));
        }
        if max < 0.0 || max > Self::CEILING {
            return Err(HealthError::MaxHealthOutOfRange {
                value: max,
                ceiling: Self::CEILING,
            });
        }
        Ok(Self { current: max, max })
    }

    /// Current health
    #[inline]
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Maximum health
    #[inline]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Set current health.
    ///
    /// Fails when `value` is not finite or lies outside `0 ..= max`;
    /// the stored value is unchanged on failure.
    pub fn set_current(&mut self, value: f64) -> Result<()> {
        if !value.is_finite() {
            return Err(HealthError::NotFinite(value));
        }
        if value < 0.0 || value > self.max {
            return Err(HealthError::HealthOutOfRange {
                value,
                max: self.max,
            });
        }
        self.current = value;
        Ok(())
    }

    /// Set maximum health.
    ///
    /// Fails when `value` is not finite, negative, or above
    /// [`Health::CEILING`]. Lowering the maximum below the current health
    /// clamps current down so the pair stays consistent.
    pub fn set_max(&mut self, value: f64) -> Result<()> {
        if !value.is_finite() {
            return Err(HealthError::NotFinite(value));
        }
        if value < 0.0 || value > Self::CEILING {
            return Err(HealthError::MaxHealthOutOfRange {
                value,
                ceiling: Self::CEILING,
            });
        }
        self.max = value;
        if self.current > self.max {
            log::debug!(
                "max health lowered below current, clamping {} -> {}",
                self.current,
                self.max
            );
            self.current = self.max;
        }
        Ok(())
    }

    /// Reduce current health by `amount`, saturating at zero.
    ///
    /// Damage amounts are not validated; non-finite amounts are ignored.
    /// Returns the health actually removed.
    pub fn apply_damage(&mut self, amount: f64) -> f64 {
        if !amount.is_finite() {
            return 0.0;
        }
        let before = self.current;
        self.current = (self.current - amount).clamp(0.0, self.max);
        before - self.current
    }

    /// Whether current health has reached zero
    #[inline]
    pub fn is_depleted(&self) -> bool {
        self.current <= 0.0
    }

    /// Whether current health equals the maximum
    #[inline]
    pub fn is_full(&self) -> bool {
        self.current >= self.max
    }

    /// Current health as a fraction of the maximum (0.0 - 1.0)
    pub fn fraction(&self) -> f64 {
        if self.max <= 0.0 {
            return 0.0;
        }
        self.current / self.max
    }
}

impl Default for Health {
    fn default() -> Self {
        Self {
            current: Self::DEFAULT_MAX,
            max: Self::DEFAULT_MAX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_starts_full() {
        let health = Health::new(20.0).unwrap();

        assert_eq!(health.current(), 20.0);
        assert_eq!(health.max(), 20.0);
        assert!(health.is_full());
        assert!(!health.is_depleted());
    }

    #[test]
    fn test_new_rejects_bad_max() {
        assert!(matches!(
            Health::new(-1.0),
            Err(HealthError::MaxHealthOutOfRange { .. })
        ));
        assert!(matches!(
            Health::new(Health::CEILING * 2.0),
            Err(HealthError::MaxHealthOutOfRange { .. })
        ));
        assert!(matches!(
            Health::new(f64::NAN),
            Err(HealthError::NotFinite(_))
        ));
    }

    #[test]
    fn test_set_current_roundtrip() {
        let mut health = Health::new(20.0).unwrap();

        health.set_current(15.0).unwrap();
        assert_eq!(health.current(), 15.0);

        // Bounds are inclusive
        health.set_current(0.0).unwrap();
        assert_eq!(health.current(), 0.0);
        health.set_current(20.0).unwrap();
        assert_eq!(health.current(), 20.0);
    }

    #[test]
    fn test_set_current_out_of_range() {
        let mut health = Health::new(20.0).unwrap();
        health.set_current(15.0).unwrap();

        assert_eq!(
            health.set_current(25.0),
            Err(HealthError::HealthOutOfRange {
                value: 25.0,
                max: 20.0
            })
        );
        assert!(health.set_current(-0.5).is_err());

        // Failed sets leave the value untouched
        assert_eq!(health.current(), 15.0);
    }

    #[test]
    fn test_set_max_rejects_out_of_range() {
        let mut health = Health::new(20.0).unwrap();

        assert!(health.set_max(-1.0).is_err());
        assert!(health.set_max(Health::CEILING * 2.0).is_err());
        assert_eq!(health.max(), 20.0);

        // The ceiling itself is accepted
        health.set_max(Health::CEILING).unwrap();
        assert_eq!(health.max(), Health::CEILING);
    }

    #[test]
    fn test_set_max_clamps_current() {
        let mut health = Health::new(20.0).unwrap();

        health.set_max(10.0).unwrap();
        assert_eq!(health.max(), 10.0);
        assert_eq!(health.current(), 10.0);

        // Raising the maximum leaves current alone
        health.set_max(30.0).unwrap();
        assert_eq!(health.current(), 10.0);
    }

    #[test]
    fn test_non_finite_rejected() {
        let mut health = Health::new(20.0).unwrap();

        assert!(matches!(
            health.set_current(f64::NAN),
            Err(HealthError::NotFinite(_))
        ));
        assert!(health.set_current(f64::INFINITY).is_err());
        assert!(health.set_max(f64::NEG_INFINITY).is_err());
        assert_eq!(health.current(), 20.0);
        assert_eq!(health.max(), 20.0);
    }

    #[test]
    fn test_apply_damage() {
        let mut health = Health::new(20.0).unwrap();

        let removed = health.apply_damage(5.0);
        assert_eq!(removed, 5.0);
        assert_eq!(health.current(), 15.0);
    }

    #[test]
    fn test_apply_damage_saturates() {
        let mut health = Health::new(20.0).unwrap();

        let removed = health.apply_damage(50.0);
        assert_eq!(removed, 20.0);
        assert_eq!(health.current(), 0.0);
        assert!(health.is_depleted());
    }

    #[test]
    fn test_apply_damage_ignores_non_finite() {
        let mut health = Health::new(20.0).unwrap();

        assert_eq!(health.apply_damage(f64::NAN), 0.0);
        assert_eq!(health.apply_damage(f64::INFINITY), 0.0);
        assert_eq!(health.current(), 20.0);
    }

    #[test]
    fn test_fractional_damage_accumulates() {
        let mut health = Health::new(20.0).unwrap();

        for _ in 0..3 {
            health.apply_damage(0.1);
        }
        assert_relative_eq!(health.current(), 19.7, epsilon = 1e-9);
        assert_relative_eq!(health.fraction(), 0.985, epsilon = 1e-9);
    }

    #[test]
    fn test_fraction_with_zero_max() {
        let health = Health::new(0.0).unwrap();
        assert_eq!(health.fraction(), 0.0);
    }

    #[test]
    fn test_default() {
        let health = Health::default();
        assert_eq!(health.max(), Health::DEFAULT_MAX);
        assert!(health.is_full());
    }
}
