//! Find-or-create factory over the model seam.

use serde_json::Value;

use crate::error::{SeedError, SeedResult};
use crate::model::{Equals, SeedModel};

/// Looks up or constructs model records by column values.
///
/// The factory is stateless over a borrowed store handle. It never saves:
/// records built on a lookup miss are returned unsaved and persisting them
/// is the caller's responsibility.
pub struct SeedingFactory<'c, C> {
    conn: &'c C,
}

impl<'c, C: Send + Sync> SeedingFactory<'c, C> {
    pub fn new(conn: &'c C) -> Self {
        Self { conn }
    }

    /// Return the first record matching all column/value pairs.
    ///
    /// Fails with [`SeedError::NotFound`] when nothing matches; store errors
    /// propagate unchanged.
    pub async fn find_by_columns<M>(&self, columns: &[(&str, Value)]) -> SeedResult<M>
    where
        M: SeedModel<Conn = C>,
    {
        let filters = to_filters(columns);
        M::find_first(self.conn, &filters)
            .await?
            .ok_or_else(|| SeedError::not_found(M::table_name()))
    }

    /// Return the first matching record, or a new unsaved one.
    ///
    /// On a hit the existing record comes back unmodified. On a miss a new
    /// record is constructed and each pair is assigned as a column, in the
    /// order given. Errors other than "nothing matched" propagate uncaught.
    pub async fn find_or_create_by_columns<M>(&self, columns: &[(&str, Value)]) -> SeedResult<M>
    where
        M: SeedModel<Conn = C>,
    {
        let filters = to_filters(columns);
        if let Some(existing) = M::find_first(self.conn, &filters).await? {
            return Ok(existing);
        }

        let mut record = M::new_record();
        for (column, value) in columns {
            record.set_column(column, value.clone())?;
        }
        Ok(record)
    }
}

fn to_filters(columns: &[(&str, Value)]) -> Vec<Equals> {
    columns
        .iter()
        .map(|(column, value)| Equals::new(*column, value.clone()))
        .collect()
}
