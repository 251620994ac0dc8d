//! Domain entities, services, and ports.
//!
//! Purpose: hold the transport-agnostic core of the service. Entities and
//! request DTOs live here together with their validation rules; services
//! implement the driving ports declared in [`ports`] and depend only on the
//! driven repository ports.
//!
//! Public surface:
//! - [`Error`] / [`ErrorCode`]: failure taxonomy shared by every adapter.
//! - [`RequestContext`]: explicit per-request trace id and principal.
//! - [`EmployeeService`] / [`RoleService`]: driving port implementations.
//! - [`validate_request`]: declarative request validation.

pub mod context;
pub mod employee;
pub mod employee_service;
pub mod error;
pub mod ports;
pub mod requests;
pub mod role;
pub mod role_service;
pub mod trace_id;
mod transaction;
pub mod validation;

pub use self::context::{AccessRole, Principal, RequestContext};
pub use self::employee::{
    CreateEmployeeRequest, Employee, EmployeeId, EmployeeResponse, NewEmployee, PageRequest,
};
pub use self::employee_service::EmployeeService;
pub use self::error::{Error, ErrorCode};
pub use self::requests::{IdRequest, IdResponse, IdsRequest};
pub use self::role::{CreateRoleRequest, NewRole, Role, RoleId, RoleResponse};
pub use self::role_service::RoleService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::validation::{Violation, validate_request};
