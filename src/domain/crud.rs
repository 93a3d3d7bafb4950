//! Generic CRUD template shared by every entity.
//!
//! Each entity supplies a read shape ([`Record`]) and a write shape
//! ([`Draft`]); the operations here own outcome classification. Zero rows
//! from a get, or zero affected rows from an update or delete, is a
//! distinct not-found outcome — never a silent success and never a
//! zero-valued record.

use sqlx::postgres::PgRow;
use sqlx::FromRow;

use crate::error::AppError;
use crate::infra::db::{PgQuery, Store};

/// Read shape: the denormalized, joined representation returned to callers.
pub trait Record: for<'r> FromRow<'r, PgRow> + Send + Unpin {
    /// Singular noun used in error detail text.
    const ENTITY: &'static str;
    /// Machine-readable code for the not-found outcome.
    const NOT_FOUND: &'static str;
    /// Canonical joined select producing every read-shape column.
    const SELECT: &'static str;
    /// [`Self::SELECT`] filtered by primary key (`$1`).
    const SELECT_BY_ID: &'static str;
    /// Delete filtered by primary key (`$1`).
    const DELETE_BY_ID: &'static str;
}

/// Write shape: normalized fields referencing related entities by id.
/// Ids and timestamps are never part of a draft; the store assigns them.
pub trait Draft {
    type Rec: Record;
    /// Insert of every draft field.
    const INSERT: &'static str;
    /// Full-row update advancing `updated_at`, with the primary key as the
    /// final placeholder (bound by [`update`], not by [`Draft::bind`]).
    const UPDATE: &'static str;
    /// Bind every draft field in statement order.
    fn bind<'q>(&self, query: PgQuery<'q>) -> PgQuery<'q>;
}

fn not_found<R: Record>(id: i32) -> AppError {
    AppError::not_found(R::NOT_FOUND, format!("{} {id} does not exist", R::ENTITY))
}

/// Canonical joined select, unfiltered and unordered. An empty table is a
/// valid empty result, not an error.
pub async fn list<R: Record>(store: &Store) -> Result<Vec<R>, AppError> {
    store.fetch_all(sqlx::query_as(R::SELECT)).await
}

pub async fn get_by_id<R: Record>(store: &Store, id: i32) -> Result<R, AppError> {
    store
        .fetch_optional(sqlx::query_as(R::SELECT_BY_ID).bind(id))
        .await?
        .ok_or_else(|| not_found::<R>(id))
}

/// Insert a new row. Dangling foreign keys are not validated here; they
/// fail at the store with a constraint error, which propagates unmasked.
pub async fn create<D: Draft>(store: &Store, draft: &D) -> Result<(), AppError> {
    store.execute(draft.bind(sqlx::query(D::INSERT))).await?;
    Ok(())
}

/// Full-replacement update: every draft field is rewritten, not merged.
/// A well-formed statement against a missing id affects zero rows and is
/// classified as not-found.
pub async fn update<D: Draft>(store: &Store, id: i32, draft: &D) -> Result<(), AppError> {
    let affected = store
        .execute(draft.bind(sqlx::query(D::UPDATE)).bind(id))
        .await?;
    if affected == 0 {
        return Err(not_found::<D::Rec>(id));
    }
    Ok(())
}

/// Delete by primary key. Deleting an absent row yields not-found, so a
/// repeated delete reports not-found on the second call.
pub async fn delete<R: Record>(store: &Store, id: i32) -> Result<(), AppError> {
    let affected = store.execute(sqlx::query(R::DELETE_BY_ID).bind(id)).await?;
    if affected == 0 {
        return Err(not_found::<R>(id));
    }
    Ok(())
}
