//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`, [`Transaction`], [`HealthProbe`]) are
//! implemented by the Diesel adapters in `outbound::persistence`. Driving
//! ports (`*Command`, `*Query`) are implemented by the domain services and
//! consumed by the HTTP adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod employee_command;
mod employee_query;
mod employee_repository;
mod health_probe;
mod role_command;
mod role_query;
mod role_repository;
mod transaction;

#[cfg(test)]
pub use employee_command::MockEmployeeCommand;
pub use employee_command::EmployeeCommand;
#[cfg(test)]
pub use employee_query::MockEmployeeQuery;
pub use employee_query::EmployeeQuery;
#[cfg(test)]
pub use employee_repository::{MockEmployeeRepository, MockEmployeeTransaction};
pub use employee_repository::{EmployeeRepository, EmployeeRepositoryError, EmployeeTransaction};
#[cfg(test)]
pub use health_probe::MockHealthProbe;
pub use health_probe::{HealthProbe, HealthProbeError};
#[cfg(test)]
pub use role_command::MockRoleCommand;
pub use role_command::RoleCommand;
#[cfg(test)]
pub use role_query::MockRoleQuery;
pub use role_query::RoleQuery;
#[cfg(test)]
pub use role_repository::{MockRoleRepository, MockRoleTransaction};
pub use role_repository::{RoleRepository, RoleRepositoryError, RoleTransaction};
pub use transaction::{Transaction, TransactionError};
