//! Scoped persistence session.

use sqlx::{PgConnection, PgPool, Postgres, Transaction};

/// One request's unit of work: a pooled connection holding an open transaction.
///
/// Every mutation made through the session becomes visible atomically on [`Session::save`].
/// A session dropped without `save` rolls back and returns its connection to the pool, so
/// the connection is released on every exit path, including early `?` returns and panics.
pub struct Session {
    tx: Transaction<'static, Postgres>,
}

impl Session {
    pub async fn begin(pool: &PgPool) -> Result<Self, sqlx::Error> {
        Ok(Self {
            tx: pool.begin().await?,
        })
    }

    /// Commits everything done in this session.
    pub async fn save(self) -> Result<(), sqlx::Error> {
        self.tx.commit().await
    }

    pub(crate) fn conn(&mut self) -> &mut PgConnection {
        &mut self.tx
    }
}
