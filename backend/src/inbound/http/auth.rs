//! Bearer token gate for `/api/v1`.
//!
//! Tokens are JWTs carrying `sub`, `exp`, and the realm roles under
//! `realm_access.roles`. The verification key is either a shared HMAC secret
//! (HS256) or an RSA public key in PEM form (RS256). Handlers take an
//! [`Authenticated`] extractor and call [`Authenticated::require`] with the
//! roles the endpoint admits.

use std::future::{Ready, ready};

use actix_web::http::header::AUTHORIZATION;
use actix_web::{FromRequest, HttpMessage, HttpRequest, dev::Payload, web};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::{AccessRole, Error, Principal, RequestContext, TraceId};

/// Roles admitted by create and delete endpoints.
pub const WRITERS: &[AccessRole] = &[AccessRole::Admin];

/// Roles admitted by read endpoints.
pub const READERS: &[AccessRole] = &[AccessRole::Admin, AccessRole::User];

/// Realm role section of the token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RealmAccess {
    /// Realm role names, e.g. `IDM_ADMIN`.
    #[serde(default)]
    pub roles: Vec<String>,
}

/// Claims read from a bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject the token was issued to.
    pub sub: String,
    /// Expiry as seconds since the Unix epoch.
    pub exp: i64,
    /// Realm roles held by the subject.
    #[serde(default)]
    pub realm_access: RealmAccess,
}

impl From<Claims> for Principal {
    fn from(claims: Claims) -> Self {
        let roles = claims
            .realm_access
            .roles
            .iter()
            .filter_map(|role| AccessRole::from_claim(role))
            .collect();
        Principal::new(claims.sub, roles)
    }
}

/// Failures building a verifier from configuration.
#[derive(Debug, thiserror::Error)]
pub enum VerifierConfigError {
    /// The configured PEM does not hold an RSA public key.
    #[error("invalid RSA public key: {0}")]
    InvalidRsaKey(#[source] jsonwebtoken::errors::Error),
}

/// Checks bearer token signatures and expiry.
#[derive(Clone)]
pub struct JwtVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl JwtVerifier {
    /// Verify HS256 tokens signed with `secret`.
    pub fn hmac(secret: &[u8]) -> Self {
        Self::with_key(DecodingKey::from_secret(secret), Algorithm::HS256)
    }

    /// Verify RS256 tokens against a PEM-encoded RSA public key.
    ///
    /// # Errors
    ///
    /// Returns [`VerifierConfigError::InvalidRsaKey`] when `pem` does not hold
    /// an RSA public key.
    pub fn rsa_pem(pem: &[u8]) -> Result<Self, VerifierConfigError> {
        let key = DecodingKey::from_rsa_pem(pem).map_err(VerifierConfigError::InvalidRsaKey)?;
        Ok(Self::with_key(key, Algorithm::RS256))
    }

    fn with_key(key: DecodingKey, algorithm: Algorithm) -> Self {
        let mut validation = Validation::new(algorithm);
        validation.set_required_spec_claims(&["sub", "exp"]);
        // Audience is issuer-specific and not configured here.
        validation.validate_aud = false;
        Self { key, validation }
    }

    /// Decode `token` and resolve the caller it names.
    ///
    /// # Errors
    ///
    /// Returns `Unauthorized` for malformed, expired, or badly signed tokens.
    pub fn verify(&self, token: &str) -> Result<Principal, Error> {
        decode::<Claims>(token, &self.key, &self.validation)
            .map(|data| Principal::from(data.claims))
            .map_err(|err| {
                debug!(error = %err, "bearer token rejected");
                let message = match err.kind() {
                    ErrorKind::ExpiredSignature => "token expired",
                    ErrorKind::InvalidSignature => "invalid token signature",
                    _ => "invalid token",
                };
                Error::unauthorized(message)
            })
    }
}

/// Request context of a caller whose bearer token verified.
#[derive(Debug, Clone)]
pub struct Authenticated(RequestContext);

impl Authenticated {
    /// Admit the caller when they hold one of `allowed`.
    ///
    /// # Errors
    ///
    /// Returns `Forbidden` when the caller holds none of the roles.
    pub fn require(self, allowed: &[AccessRole]) -> Result<RequestContext, Error> {
        let permitted = self
            .0
            .principal()
            .is_some_and(|principal| principal.has_any_role(allowed));
        if permitted {
            Ok(self.0)
        } else {
            warn!(
                trace_id = %self.0.trace_id(),
                subject = self.0.principal().map(Principal::subject),
                "caller lacks required role"
            );
            Err(self.0.attach(Error::forbidden("Permission denied")))
        }
    }
}

/// Trace id stored by the `Trace` middleware, or a fresh one outside it.
pub(crate) fn request_trace_id(req: &HttpRequest) -> TraceId {
    req.extensions()
        .get::<TraceId>()
        .copied()
        .or_else(TraceId::current)
        .unwrap_or_else(TraceId::generate)
}

fn bearer_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

fn authenticate(req: &HttpRequest) -> Result<Authenticated, Error> {
    let ctx = RequestContext::new(request_trace_id(req));
    let Some(verifier) = req.app_data::<web::Data<JwtVerifier>>() else {
        return Err(ctx.attach(Error::internal("token verifier not configured")));
    };
    let Some(token) = bearer_token(req) else {
        return Err(ctx.attach(Error::unauthorized("missing bearer token")));
    };
    let principal = verifier.verify(token).map_err(|err| ctx.attach(err))?;
    Ok(Authenticated(ctx.with_principal(principal)))
}

impl FromRequest for Authenticated {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

#[cfg(test)]
pub(crate) mod test_tokens {
    //! Token minting for handler tests.

    use chrono::{Duration, Utc};
    use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

    use super::{Claims, RealmAccess};

    pub(crate) const SECRET: &[u8] = b"test-secret-with-enough-length-for-hs256";
    pub(crate) const RSA_PRIVATE_PEM: &[u8] =
        include_bytes!("../../../tests/fixtures/jwt_rs256_private.pem");
    pub(crate) const RSA_PUBLIC_PEM: &[u8] =
        include_bytes!("../../../tests/fixtures/jwt_rs256_public.pem");

    pub(crate) fn token_with(roles: &[&str], ttl: Duration, secret: &[u8]) -> String {
        let claims = Claims {
            sub: "tester".to_owned(),
            exp: (Utc::now() + ttl).timestamp(),
            realm_access: RealmAccess {
                roles: roles.iter().map(|role| (*role).to_owned()).collect(),
            },
        };
        encode(&Header::default(), &claims, &EncodingKey::from_secret(secret))
            .expect("encode test token")
    }

    pub(crate) fn rs256_token(roles: &[&str]) -> String {
        let claims = Claims {
            sub: "tester".to_owned(),
            exp: (Utc::now() + Duration::minutes(5)).timestamp(),
            realm_access: RealmAccess {
                roles: roles.iter().map(|role| (*role).to_owned()).collect(),
            },
        };
        let key = EncodingKey::from_rsa_pem(RSA_PRIVATE_PEM).expect("test RSA private key");
        encode(&Header::new(Algorithm::RS256), &claims, &key).expect("encode RS256 token")
    }

    pub(crate) fn token(roles: &[&str]) -> String {
        token_with(roles, Duration::minutes(5), SECRET)
    }

    pub(crate) fn bearer(roles: &[&str]) -> (&'static str, String) {
        ("Authorization", format!("Bearer {}", token(roles)))
    }
}
