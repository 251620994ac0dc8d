//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{EmployeeCommand, EmployeeQuery, RoleCommand, RoleQuery};

/// Dependency bundle for `/api/v1` handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Employee writes.
    pub employees: Arc<dyn EmployeeCommand>,
    /// Employee reads.
    pub employees_query: Arc<dyn EmployeeQuery>,
    /// Role writes.
    pub roles: Arc<dyn RoleCommand>,
    /// Role reads.
    pub roles_query: Arc<dyn RoleQuery>,
}

impl HttpState {
    /// Construct state from one service per aggregate.
    ///
    /// Each service implements both its command and query port.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use idm::domain::{EmployeeService, RoleService};
    /// use idm::inbound::http::state::HttpState;
    /// use idm::outbound::persistence::{
    ///     DbPool, DieselEmployeeRepository, DieselRoleRepository, PoolConfig,
    /// };
    ///
    /// # async fn build() -> Result<(), Box<dyn std::error::Error>> {
    /// let pool = DbPool::new(PoolConfig::new("postgres://localhost/idm")).await?;
    /// let employees = Arc::new(EmployeeService::new(Arc::new(
    ///     DieselEmployeeRepository::new(pool.clone()),
    /// )));
    /// let roles = Arc::new(RoleService::new(Arc::new(DieselRoleRepository::new(pool))));
    /// let state = HttpState::from_services(employees, roles);
    /// let _query = state.employees_query.clone();
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_services<E, R>(employees: Arc<E>, roles: Arc<R>) -> Self
    where
        E: EmployeeCommand + EmployeeQuery + 'static,
        R: RoleCommand + RoleQuery + 'static,
    {
        Self {
            employees: employees.clone(),
            employees_query: employees,
            roles: roles.clone(),
            roles_query: roles,
        }
    }
}
