//! PostgreSQL-backed `EmployeeRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel_async::RunQueryDsl;

use crate::domain::ports::{
    EmployeeRepository, EmployeeRepositoryError, EmployeeTransaction, Transaction,
    TransactionError,
};
use crate::domain::{Employee, EmployeeId, NewEmployee};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::diesel_transaction::DieselTransaction;
use super::models::{EmployeeRow, NewEmployeeRow};
use super::pool::{DbPool, PoolError};
use super::schema::employee;

/// Diesel-backed implementation of the employee repository port.
#[derive(Clone)]
pub struct DieselEmployeeRepository {
    pool: DbPool,
}

impl DieselEmployeeRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> EmployeeRepositoryError {
    map_basic_pool_error(error, EmployeeRepositoryError::connection)
}

fn map_diesel_error(error: DieselError, operation: &str) -> EmployeeRepositoryError {
    map_basic_diesel_error(
        error,
        operation,
        EmployeeRepositoryError::query,
        EmployeeRepositoryError::connection,
    )
}

/// Insert failures, with the unique name index reported as a duplicate.
fn map_insert_error(error: DieselError, name: &str) -> EmployeeRepositoryError {
    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            EmployeeRepositoryError::duplicate(name)
        }
        other => map_diesel_error(other, "insert employee"),
    }
}

/// Escape `LIKE` metacharacters and wrap `filter` for a substring match.
pub(crate) fn contains_pattern(filter: &str) -> String {
    let mut pattern = String::with_capacity(filter.len() + 2);
    pattern.push('%');
    for c in filter.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Employee writes inside one open transaction.
struct DieselEmployeeTransaction {
    tx: DieselTransaction,
}

#[async_trait]
impl Transaction for DieselEmployeeTransaction {
    async fn commit(&mut self) -> Result<(), TransactionError> {
        self.tx.commit().await
    }

    async fn rollback(&mut self) -> Result<(), TransactionError> {
        self.tx.rollback().await
    }
}

#[async_trait]
impl EmployeeTransaction for DieselEmployeeTransaction {
    async fn exists_by_name(&mut self, name: &str) -> Result<bool, EmployeeRepositoryError> {
        diesel::select(diesel::dsl::exists(
            employee::table.filter(employee::name.eq(name)),
        ))
        .get_result::<bool>(self.tx.conn())
        .await
        .map_err(|err| map_diesel_error(err, "check employee name"))
    }

    async fn insert(
        &mut self,
        new_employee: &NewEmployee,
    ) -> Result<EmployeeId, EmployeeRepositoryError> {
        let row = NewEmployeeRow {
            name: &new_employee.name,
            role_id: new_employee.role_id,
        };
        diesel::insert_into(employee::table)
            .values(&row)
            .returning(employee::id)
            .get_result::<i64>(self.tx.conn())
            .await
            .map_err(|err| map_insert_error(err, &new_employee.name))
    }
}

#[async_trait]
impl EmployeeRepository for DieselEmployeeRepository {
    async fn begin(&self) -> Result<Box<dyn EmployeeTransaction>, EmployeeRepositoryError> {
        let tx = DieselTransaction::begin(
            &self.pool,
            EmployeeRepositoryError::query,
            EmployeeRepositoryError::connection,
        )
        .await?;
        Ok(Box::new(DieselEmployeeTransaction { tx }))
    }

    async fn find_by_id(
        &self,
        id: EmployeeId,
    ) -> Result<Option<Employee>, EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = employee::table
            .find(id)
            .select(EmployeeRow::as_select())
            .first::<EmployeeRow>(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, "find employee"))?;
        Ok(row.map(Employee::from))
    }

    async fn find_all(&self) -> Result<Vec<Employee>, EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows = employee::table
            .select(EmployeeRow::as_select())
            .order(employee::id.asc())
            .load::<EmployeeRow>(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "list employees"))?;
        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn find_by_ids(
        &self,
        ids: &[EmployeeId],
    ) -> Result<Vec<Employee>, EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows = employee::table
            .filter(employee::id.eq_any(ids))
            .select(EmployeeRow::as_select())
            .order(employee::id.asc())
            .load::<EmployeeRow>(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "find employees by ids"))?;
        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn find_with_offset(
        &self,
        offset: i64,
        limit: i64,
        filter: Option<String>,
    ) -> Result<Vec<Employee>, EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let mut query = employee::table
            .select(EmployeeRow::as_select())
            .into_boxed();
        if let Some(filter) = filter.as_deref() {
            query = query.filter(employee::name.ilike(contains_pattern(filter)));
        }
        let rows = query
            .order(employee::id.asc())
            .offset(offset)
            .limit(limit)
            .load::<EmployeeRow>(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "page employees"))?;
        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn count(&self, filter: Option<String>) -> Result<i64, EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let mut query = employee::table
            .select(diesel::dsl::count_star())
            .into_boxed();
        if let Some(filter) = filter.as_deref() {
            query = query.filter(employee::name.ilike(contains_pattern(filter)));
        }
        query
            .get_result::<i64>(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "count employees"))
    }

    async fn delete_by_id(&self, id: EmployeeId) -> Result<(), EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::delete(employee::table.find(id))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| map_diesel_error(err, "delete employee"))
    }

    async fn delete_by_ids(&self, ids: &[EmployeeId]) -> Result<(), EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::delete(employee::table.filter(employee::id.eq_any(ids)))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| map_diesel_error(err, "delete employees"))
    }
}
