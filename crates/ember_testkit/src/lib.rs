//! Ember Testkit - Test Utilities for Entity Contracts
//!
//! Helpers for host runtimes implementing the `ember_entity` contracts:
//! a reference entity whose knockback is observable, and contract checks
//! that any `Damageable` implementation is expected to pass.
//!
//! # Example
//!
//! ```ignore
//! use ember_testkit::prelude::*;
//!
//! let mut creeper = MyCreeper::spawn();
//! contract::check_health_roundtrip(&mut creeper);
//! contract::check_setter_rejections(&mut creeper);
//! contract::check_damage_reduces_health(&mut creeper);
//! ```

use ember_entity::prelude::*;

/// Reference `Damageable` implementation with observable side effects.
///
/// Holds a position and counts knockbacks, so a test can tell whether a
/// hit displaced the entity. Each knockback shifts the position by
/// [`TestEntity::KNOCKBACK_STEP`] along `-z`.
#[derive(Debug, Clone)]
pub struct TestEntity {
    health: Health,
    /// World position
    pub position: [f64; 3],
    /// Number of knockbacks applied so far
    pub knockbacks: u32,
}

impl TestEntity {
    /// Displacement applied per knockback
    pub const KNOCKBACK_STEP: f64 = 0.5;

    /// Create a test entity at the origin, full at `max` health.
    ///
    /// Panics when `max` is not a valid maximum health; fixtures are
    /// expected to be constructed with in-range values.
    pub fn new(max: f64) -> Self {
        Self {
            health: Health::new(max).expect("fixture max health in range"),
            position: [0.0; 3],
            knockbacks: 0,
        }
    }

    /// Whether any knockback has been applied
    pub fn was_knocked_back(&self) -> bool {
        self.knockbacks > 0
    }
}

impl Default for TestEntity {
    fn default() -> Self {
        Self::new(Health::DEFAULT_MAX)
    }
}

impl Damageable for TestEntity {
    fn damage_with_knockback(&mut self, amount: f64, knockback: bool) {
        self.health.apply_damage(amount);
        if knockback {
            self.position[2] -= Self::KNOCKBACK_STEP;
            self.knockbacks += 1;
        }
    }

    fn health(&self) -> f64 {
        self.health.current()
    }

    fn max_health(&self) -> f64 {
        self.health.max()
    }

    fn set_health(&mut self, health: f64) -> Result<()> {
        self.health.set_current(health)
    }

    fn set_max_health(&mut self, health: f64) -> Result<()> {
        self.health.set_max(health)
    }
}

pub mod prelude {
    //! Common imports for contract testing
    pub use crate::{contract, TestEntity};
    pub use ember_entity::prelude::*;
}

pub mod contract {
    //! Contract checks for `Damageable` implementations.
    //!
    //! Each check panics with a descriptive message when the subject
    //! violates the contract. Knockback observability is implementation
    //! specific and is not covered here; use [`TestEntity`](crate::TestEntity)
    //! when a test needs to see the displacement.

    use ember_entity::prelude::*;

    /// After a successful `set_health`, `health` returns the set value.
    pub fn check_health_roundtrip(subject: &mut dyn Damageable) {
        let max = subject.max_health();
        assert!(max > 0.0, "subject needs a positive max health");

        let target = max / 2.0;
        subject
            .set_health(target)
            .expect("in-range set_health must succeed");
        assert_eq!(subject.health(), target, "health must echo the set value");
    }

    /// Out-of-range values are rejected and leave health untouched.
    pub fn check_setter_rejections(subject: &mut dyn Damageable) {
        let before = subject.health();
        let above_max = subject.max_health() + 1.0;

        assert!(
            subject.set_health(-1.0).is_err(),
            "negative health must be rejected"
        );
        assert!(
            subject.set_health(above_max).is_err(),
            "health above the maximum must be rejected"
        );
        assert!(
            subject.set_max_health(-1.0).is_err(),
            "negative max health must be rejected"
        );
        assert!(
            subject.set_max_health(Health::CEILING * 2.0).is_err(),
            "max health above the ceiling must be rejected"
        );
        assert_eq!(subject.health(), before, "rejected sets must not mutate");
    }

    /// Positive damage lowers health and saturates at zero.
    pub fn check_damage_reduces_health(subject: &mut dyn Damageable) {
        let max = subject.max_health();
        assert!(max > 0.0, "subject needs a positive max health");

        subject.set_health(max).expect("reset to full");
        subject.damage(max / 4.0);
        assert!(subject.health() < max, "damage must lower health");

        subject.damage(max * 2.0);
        assert_eq!(subject.health(), 0.0, "health must saturate at zero");
    }
}
