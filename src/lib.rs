//! # seedkit — deterministic test-data seeding
//!
//! Helpers for seeding fake test data into ORM-backed models, built around
//! two conventions:
//!
//! - **Consistent seeding**: before a scenario seeder runs, the fake-data
//!   generator is reseeded from a CRC32 of the seeder's identifying name,
//!   so the values a seeder produces are the same whether it runs alone or
//!   alongside others, on every run.
//! - **Find-or-create**: records are looked up by column equality and, when
//!   absent, constructed unsaved with those columns assigned. Seeding stays
//!   idempotent and persistence stays with the caller.
//!
//! The generator lives in a [`SeedingContext`] that is passed explicitly to
//! each seeder; there is no hidden global state.
//!
//! ## Quick start
//!
//! ```rust
//! use seedkit::prelude::*;
//!
//! let mut generator = FakeGenerator::new(Locale::EnGb);
//! generator.seed(consistent_seed("UserScenario"));
//! let email = generator.email();
//!
//! // Reseeding with the same name restores the same sequence.
//! generator.seed(consistent_seed("UserScenario"));
//! assert_eq!(email, generator.email());
//! ```

pub mod error;
pub mod factory;
pub mod generator;
pub mod model;
pub mod postgres;
pub mod recipe;
pub mod seeder;

pub use error::{SeedError, SeedResult};
pub use factory::SeedingFactory;
pub use generator::{FakeGenerator, Locale};
pub use model::{Equals, SeedModel};
pub use recipe::Recipe;
pub use seeder::{consistent_seed, ScenarioRunner, ScenarioSeeder, SeedingContext};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{SeedError, SeedResult};
    pub use crate::factory::SeedingFactory;
    pub use crate::generator::{FakeGenerator, Locale};
    pub use crate::model::{Equals, SeedModel};
    pub use crate::recipe::Recipe;
    pub use crate::seeder::{consistent_seed, ScenarioRunner, ScenarioSeeder, SeedingContext};

    pub use serde_json::{json, Value as JsonValue};
}
