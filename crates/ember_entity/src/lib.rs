//! Ember Entity - Entity Capability Contracts
//!
//! This crate defines the capability contracts the Ember server runtime
//! implements for its entity types.
//!
//! # Features
//!
//! - `Damageable` contract for entities that have health and take damage
//! - `Health` attribute pair with mutation-time validation
//! - Invalid-argument failures surfaced as `Result`s, never panics
//!
//! # Example
//!
//! ```ignore
//! use ember_entity::prelude::*;
//!
//! struct Zombie {
//!     health: Health,
//!     velocity: [f64; 3],
//! }
//!
//! impl Damageable for Zombie {
//!     fn damage_with_knockback(&mut self, amount: f64, knockback: bool) {
//!         self.health.apply_damage(amount);
//!         if knockback {
//!             self.velocity[1] += 0.4;
//!         }
//!     }
//!
//!     fn health(&self) -> f64 {
//!         self.health.current()
//!     }
//!
//!     fn max_health(&self) -> f64 {
//!         self.health.max()
//!     }
//!
//!     fn set_health(&mut self, health: f64) -> Result<()> {
//!         self.health.set_current(health)
//!     }
//!
//!     fn set_max_health(&mut self, health: f64) -> Result<()> {
//!         self.health.set_max(health)
//!     }
//! }
//! ```

pub mod damageable;
pub mod error;
pub mod health;

pub mod prelude {
    //! Common imports for entity capability work
    pub use crate::damageable::Damageable;
    pub use crate::error::{HealthError, Result};
    pub use crate::health::Health;
}

pub use prelude::*;
