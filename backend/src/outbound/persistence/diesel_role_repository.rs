//! PostgreSQL-backed `RoleRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{
    RoleRepository, RoleRepositoryError, RoleTransaction, Transaction, TransactionError,
};
use crate::domain::{NewRole, Role, RoleId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::diesel_transaction::DieselTransaction;
use super::models::{NewRoleRow, RoleRow};
use super::pool::{DbPool, PoolError};
use super::schema::role;

/// Diesel-backed implementation of the role repository port.
#[derive(Clone)]
pub struct DieselRoleRepository {
    pool: DbPool,
}

impl DieselRoleRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> RoleRepositoryError {
    map_basic_pool_error(error, RoleRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error, operation: &str) -> RoleRepositoryError {
    map_basic_diesel_error(
        error,
        operation,
        RoleRepositoryError::query,
        RoleRepositoryError::connection,
    )
}

struct DieselRoleTransaction {
    tx: DieselTransaction,
}

#[async_trait]
impl Transaction for DieselRoleTransaction {
    async fn commit(&mut self) -> Result<(), TransactionError> {
        self.tx.commit().await
    }

    async fn rollback(&mut self) -> Result<(), TransactionError> {
        self.tx.rollback().await
    }
}

#[async_trait]
impl RoleTransaction for DieselRoleTransaction {
    async fn insert(&mut self, new_role: &NewRole) -> Result<RoleId, RoleRepositoryError> {
        diesel::insert_into(role::table)
            .values(&NewRoleRow {
                name: &new_role.name,
            })
            .returning(role::id)
            .get_result::<i64>(self.tx.conn())
            .await
            .map_err(|err| map_diesel_error(err, "insert role"))
    }
}

#[async_trait]
impl RoleRepository for DieselRoleRepository {
    async fn begin(&self) -> Result<Box<dyn RoleTransaction>, RoleRepositoryError> {
        let tx = DieselTransaction::begin(
            &self.pool,
            RoleRepositoryError::query,
            RoleRepositoryError::connection,
        )
        .await?;
        Ok(Box::new(DieselRoleTransaction { tx }))
    }

    async fn find_by_id(&self, id: RoleId) -> Result<Option<Role>, RoleRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = role::table
            .find(id)
            .select(RoleRow::as_select())
            .first::<RoleRow>(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, "find role"))?;
        Ok(row.map(Role::from))
    }

    async fn find_all(&self) -> Result<Vec<Role>, RoleRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows = role::table
            .select(RoleRow::as_select())
            .order(role::id.asc())
            .load::<RoleRow>(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "list roles"))?;
        Ok(rows.into_iter().map(Role::from).collect())
    }

    async fn find_by_ids(&self, ids: &[RoleId]) -> Result<Vec<Role>, RoleRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows = role::table
            .filter(role::id.eq_any(ids))
            .select(RoleRow::as_select())
            .order(role::id.asc())
            .load::<RoleRow>(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "find roles by ids"))?;
        Ok(rows.into_iter().map(Role::from).collect())
    }

    async fn delete_by_id(&self, id: RoleId) -> Result<(), RoleRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::delete(role::table.find(id))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| map_diesel_error(err, "delete role"))
    }

    async fn delete_by_ids(&self, ids: &[RoleId]) -> Result<(), RoleRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::delete(role::table.filter(role::id.eq_any(ids)))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| map_diesel_error(err, "delete roles"))
    }
}
