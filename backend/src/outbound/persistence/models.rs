//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and are
//! never exposed to the domain.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::{Employee, Role};

use super::schema::{employee, role};

/// Row read from the `employee` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = employee)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct EmployeeRow {
    pub id: i64,
    pub name: String,
    pub role_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            role_id: row.role_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Insertable employee values; timestamps use column defaults.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = employee)]
pub(crate) struct NewEmployeeRow<'a> {
    pub name: &'a str,
    pub role_id: i64,
}

/// Row read from the `role` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = role)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct RoleRow {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<RoleRow> for Role {
    fn from(row: RoleRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Insertable role values.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = role)]
pub(crate) struct NewRoleRow<'a> {
    pub name: &'a str,
}
