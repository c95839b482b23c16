//! The damageable entity capability

use crate::error::Result;

/// Capability contract for an entity that has a health value and can take
/// damage.
///
/// The host runtime implements this for each concrete entity type that
/// carries vitals; the set of implementing types is open. The contract
/// says nothing about scheduling: how entity mutation is serialized is
/// the host's decision.
///
/// Health always satisfies `0 <= health() <= max_health()`. The setters
/// enforce the bounds at mutation time and report violations as errors.
pub trait Damageable {
    /// Damage the entity by `amount`, with knockback.
    fn damage(&mut self, amount: f64) {
        self.damage_with_knockback(amount, true);
    }

    /// Damage the entity by `amount`.
    ///
    /// `knockback` controls whether the hit also displaces the entity;
    /// the magnitude and direction of the displacement are up to the
    /// implementation.
    fn damage_with_knockback(&mut self, amount: f64, knockback: bool);

    // TODO: damage entry points that carry the cause and attacking entity,
    // once the damage cause registry design lands

    /// Current health of the entity, in `0 ..= max_health()`
    fn health(&self) -> f64;

    /// Maximum health currently set for the entity
    fn max_health(&self) -> f64;

    /// Set the health of the entity.
    ///
    /// Accepts values from 0 to [`max_health`](Damageable::max_health),
    /// inclusive. Fails with an invalid-argument error otherwise, leaving
    /// the entity unchanged.
    fn set_health(&mut self, health: f64) -> Result<()>;

    /// Set the maximum health of the entity.
    ///
    /// Fails with an invalid-argument error when `health` is negative or
    /// above the single-precision ceiling.
    fn set_max_health(&mut self, health: f64) -> Result<()>;
}
