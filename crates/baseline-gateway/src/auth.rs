use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use baseline_core::{ClaimSet, Identity};
use tracing::error;

use crate::error::ApiError;

/// Verified claims installed into the request by the upstream token
/// verifier. The gateway trusts the contents and never verifies tokens
/// itself.
#[derive(Debug, Clone)]
pub struct VerifiedClaims(pub ClaimSet);

/// Extractor binding a request to its verified caller identity.
///
/// A request without claims is unauthenticated (401), rejected before any
/// handler or store access. A claim set without a usable subject means the
/// upstream verifier is misconfigured; that is answered 500 and logged as
/// a server-side anomaly.
#[derive(Debug, Clone)]
pub struct Caller(pub Identity);

impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(claims) = parts.extensions.get::<VerifiedClaims>() else {
            return Err(ApiError::Unauthenticated);
        };

        match Identity::from_claims(&claims.0) {
            Ok(identity) => Ok(Caller(identity)),
            Err(err) => {
                error!(error = %err, "verified claim set has no usable subject");
                Err(ApiError::Internal)
            }
        }
    }
}
