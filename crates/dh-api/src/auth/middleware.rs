use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    TypedHeader,
    extract::{PrivateCookieJar, cookie::Key},
    headers::{Authorization, authorization::Bearer},
};

use super::jwt::{AUTH_COOKIE_NAME, verify_jwt_token};
use crate::{error::ApiError, state::AuthConfig};

/// Authenticated user extractor
///
/// Use this in route handlers to ensure the user is authenticated. The token
/// is read from an `Authorization: Bearer` header, falling back to the private
/// `auth_token` cookie. Requests without a valid token are rejected with 401
/// before the handler body runs.
///
/// # Example
/// ```
/// use axum::extract::State;
/// use dh_api::{error::ApiError, auth::AuthUser, ApiState};
///
/// async fn protected_route(
///     auth_user: AuthUser,
///     State(state): State<ApiState>,
/// ) -> Result<(), ApiError> {
///     // auth_user.user_id is available
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: i64,
}

impl<S> FromRequestParts<S> for AuthUser
where
    AuthConfig: FromRef<S>,
    Key: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_config = AuthConfig::from_ref(state);

        let bearer = TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
            .await
            .ok()
            .map(|TypedHeader(Authorization(bearer))| bearer.token().to_owned());

        let token = match bearer {
            Some(token) => token,
            None => {
                let jar = PrivateCookieJar::<Key>::from_request_parts(parts, state)
                    .await
                    .map_err(|_| ApiError::Auth("Failed to read cookies".to_string()))?;

                jar.get(AUTH_COOKIE_NAME)
                    .ok_or_else(|| ApiError::Auth("Not authenticated".to_string()))?
                    .value()
                    .to_owned()
            }
        };

        let claims = verify_jwt_token(&token, &auth_config.jwt_secret)?;

        let user_id = claims
            .sub
            .parse::<i64>()
            .map_err(|_| ApiError::Auth("Invalid user ID in token".to_string()))?;

        tracing::debug!(user_id, "authenticated request");

        Ok(Self { user_id })
    }
}
