//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! This module provides concrete implementations of domain repository ports
//! backed by PostgreSQL via the Diesel ORM with async support through
//! `diesel-async` and `bb8` connection pooling.
//!
//! # Architecture
//!
//! - **Thin adapters**: Repository implementations only translate between
//!   Diesel models and domain types. No business logic resides here.
//! - **Internal models**: Diesel row structs (`models.rs`) and schema
//!   definitions (`schema.rs`) are internal implementation details, never
//!   exposed to the domain layer.
//! - **Explicit transactions**: write paths open a transaction on an owned
//!   pooled connection and hand it to the domain, which finalises it.
//!
//! # Example
//!
//! ```ignore
//! use idm::outbound::persistence::{DbPool, DieselEmployeeRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/idm")).await?;
//! let employees = DieselEmployeeRepository::new(pool);
//! ```

mod diesel_basic_error_mapping;
mod diesel_employee_repository;
mod diesel_health_probe;
mod diesel_role_repository;
mod diesel_transaction;
mod models;
mod pool;
mod schema;

pub use diesel_employee_repository::DieselEmployeeRepository;
pub use diesel_health_probe::DieselHealthProbe;
pub use diesel_role_repository::DieselRoleRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
