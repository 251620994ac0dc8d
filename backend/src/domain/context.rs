//! Per-request context passed explicitly into every service call.
//!
//! Handlers build a [`RequestContext`] from the trace identifier attached by
//! the `Trace` middleware and the principal resolved by the bearer gate.
//! Services use it to correlate logs and to stamp errors with the trace id.

use super::{Error, TraceId};

/// Realm role granted to an authenticated caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessRole {
    /// Full access, including creates and deletes.
    Admin,
    /// Read-only access.
    User,
}

impl AccessRole {
    /// Claim value carried in `realm_access.roles`.
    pub const fn as_claim(self) -> &'static str {
        match self {
            Self::Admin => "IDM_ADMIN",
            Self::User => "IDM_USER",
        }
    }

    /// Parse a realm role claim, ignoring roles this service does not know.
    pub fn from_claim(value: &str) -> Option<Self> {
        match value {
            "IDM_ADMIN" => Some(Self::Admin),
            "IDM_USER" => Some(Self::User),
            _ => None,
        }
    }
}

/// Authenticated caller identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    subject: String,
    roles: Vec<AccessRole>,
}

impl Principal {
    /// Build a principal from a token subject and its known roles.
    pub fn new(subject: impl Into<String>, roles: Vec<AccessRole>) -> Self {
        Self {
            subject: subject.into(),
            roles,
        }
    }

    /// Token subject (`sub` claim).
    pub fn subject(&self) -> &str {
        self.subject.as_str()
    }

    /// Roles granted to the caller.
    pub fn roles(&self) -> &[AccessRole] {
        &self.roles
    }

    /// Whether the caller holds at least one of `allowed`.
    pub fn has_any_role(&self, allowed: &[AccessRole]) -> bool {
        self.roles.iter().any(|role| allowed.contains(role))
    }
}

/// Explicit request-scoped context.
///
/// # Examples
/// ```
/// use idm::domain::{Error, RequestContext};
/// use idm::TraceId;
///
/// let ctx = RequestContext::new(TraceId::generate());
/// let err = ctx.attach(Error::not_found("missing"));
/// assert_eq!(err.trace_id(), Some(ctx.trace_id().to_string().as_str()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    trace_id: TraceId,
    principal: Option<Principal>,
}

impl RequestContext {
    /// Anonymous context for `trace_id`.
    pub fn new(trace_id: TraceId) -> Self {
        Self {
            trace_id,
            principal: None,
        }
    }

    /// Attach the authenticated caller.
    pub fn with_principal(mut self, principal: Principal) -> Self {
        self.principal = Some(principal);
        self
    }

    /// Trace identifier of the current request.
    pub fn trace_id(&self) -> TraceId {
        self.trace_id
    }

    /// Authenticated caller, if any.
    pub fn principal(&self) -> Option<&Principal> {
        self.principal.as_ref()
    }

    /// Stamp `error` with this request's trace identifier.
    pub fn attach(&self, error: Error) -> Error {
        error.with_trace_id(self.trace_id.to_string())
    }
}
