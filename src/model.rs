//! Model seam onto the backing object store.
//!
//! The seeding helpers never own records; they only look them up or build
//! unsaved instances through this trait. Implementations delegate to
//! whatever store backs the application (a `sqlx` pool in real apps, an
//! in-memory table in tests — see the `postgres` module for the sqlx side).

use serde_json::Value;

use crate::error::SeedResult;

/// A single column equality constraint.
#[derive(Debug, Clone, PartialEq)]
pub struct Equals {
    pub column: String,
    pub value: Value,
}

impl Equals {
    pub fn new(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            column: column.into(),
            value: value.into(),
        }
    }
}

/// Trait for model types that can be seeded.
///
/// Lookups return `Ok(None)` on no match rather than raising a not-found
/// error; find-or-create branches on the absence directly. Persistence is
/// deliberately not part of this trait — the factory returns unsaved
/// records and saving them stays with the caller.
#[async_trait::async_trait]
pub trait SeedModel: Sized + Send {
    /// Handle to the backing store this model is queried through.
    type Conn: Send + Sync;

    /// Table (or collection) name, used in error messages.
    fn table_name() -> &'static str;

    /// Return the first record matching all of the given constraints.
    async fn find_first(conn: &Self::Conn, filters: &[Equals]) -> SeedResult<Option<Self>>;

    /// Construct a new unsaved record with no columns populated.
    fn new_record() -> Self;

    /// Assign a column by name on an unsaved record.
    ///
    /// Returns `SeedError::UnknownColumn` for names the model does not have.
    fn set_column(&mut self, column: &str, value: Value) -> SeedResult<()>;
}
