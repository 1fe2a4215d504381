//! Deterministic scenario seeding.
//!
//! Every seeder is identified by a name, and the generator is reseeded from
//! a CRC32 of that name before the seeder's body runs. The sequence a
//! seeder observes is therefore the same whether it runs alone or after any
//! number of other seeders, and the same on every run.
//!
//! Two integration points are provided over the one contract: a
//! [`ScenarioRunner`] for hosts with a before-scenario hook, and
//! [`SeedingContext::run`] for hosts that invoke seeders directly.

use crate::error::SeedResult;
use crate::factory::SeedingFactory;
use crate::generator::FakeGenerator;

/// Seed value for an identifying name.
///
/// CRC32 of the name, widened to `u64`. Same name, same seed, always. Two
/// differently-named seeders colliding on a hash is accepted, not mitigated.
pub fn consistent_seed(name: &str) -> u64 {
    u64::from(crc32fast::hash(name.as_bytes()))
}

/// Everything a seeder needs for one run: the fake-data generator and a
/// handle to the backing store.
///
/// The context is passed `&mut` through each invocation; there is no shared
/// global generator, and serial execution is enforced by the borrow rather
/// than by convention.
pub struct SeedingContext<C> {
    generator: FakeGenerator,
    conn: C,
}

impl<C: Send + Sync> SeedingContext<C> {
    pub fn new(generator: FakeGenerator, conn: C) -> Self {
        Self { generator, conn }
    }

    pub fn generator(&self) -> &FakeGenerator {
        &self.generator
    }

    pub fn generator_mut(&mut self) -> &mut FakeGenerator {
        &mut self.generator
    }

    pub fn conn(&self) -> &C {
        &self.conn
    }

    /// A factory over this context's store handle.
    pub fn factory(&self) -> SeedingFactory<'_, C> {
        SeedingFactory::new(&self.conn)
    }

    /// Generator and factory at the same time, for seeder bodies that
    /// interleave generation with lookups.
    pub fn parts(&mut self) -> (&mut FakeGenerator, SeedingFactory<'_, C>) {
        (&mut self.generator, SeedingFactory::new(&self.conn))
    }

    /// Reseed the generator for the given identifying name.
    pub fn reseed_for(&mut self, name: &str) {
        self.generator.seed(consistent_seed(name));
    }

    /// Run a single seeder, reseeding first.
    ///
    /// The direct-invocation integration point, for host frameworks without
    /// a before-scenario hook. Errors from the seeder body propagate
    /// unchanged.
    pub async fn run<S>(&mut self, seeder: &S) -> SeedResult<()>
    where
        S: ScenarioSeeder<C> + ?Sized,
    {
        let name = seeder.scenario_name().to_string();
        tracing::info!("seeding scenario: {}", name);
        self.reseed_for(&name);
        seeder.seed(self).await
    }
}

/// A unit of scenario seeding logic.
///
/// Implementations populate model fields from the context's generator,
/// usually through the context's factory. The name is the reseed key; use
/// the scenario's declared name, or the type's own name where there is no
/// separate scenario.
#[async_trait::async_trait]
pub trait ScenarioSeeder<C: Send + Sync>: Send + Sync {
    /// Identifying name; the generator is reseeded from this before `seed`.
    fn scenario_name(&self) -> &str;

    async fn seed(&self, cx: &mut SeedingContext<C>) -> SeedResult<()>;
}

/// Serial runner over a list of seeders.
///
/// The before-scenario integration point: each seeder gets the generator
/// reseeded from its own name before its body runs, so removing or
/// reordering seeders never changes what any one of them produces.
pub struct ScenarioRunner<C: Send + Sync> {
    seeders: Vec<Box<dyn ScenarioSeeder<C>>>,
}

impl<C: Send + Sync> Default for ScenarioRunner<C> {
    fn default() -> Self {
        Self {
            seeders: Vec::new(),
        }
    }
}

impl<C: Send + Sync> ScenarioRunner<C> {
    pub fn new() -> Self {
        Self {
            seeders: Vec::new(),
        }
    }

    pub fn add<S: ScenarioSeeder<C> + 'static>(mut self, seeder: S) -> Self {
        self.seeders.push(Box::new(seeder));
        self
    }

    pub fn len(&self) -> usize {
        self.seeders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seeders.is_empty()
    }

    /// Run every seeder in order against the given context.
    pub async fn run_all(&self, cx: &mut SeedingContext<C>) -> SeedResult<()> {
        tracing::info!("running {} scenario seeders", self.seeders.len());

        for seeder in &self.seeders {
            cx.run(seeder.as_ref()).await?;
        }

        tracing::info!("all scenario seeders completed");
        Ok(())
    }
}
