// Caller identity at the HTTP boundary.
//
// An upstream gateway authenticates the caller and forwards the result as headers.
// Admins may read any user's report, everyone else only their own.

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, StatusCode, request::Parts},
};

pub const USER_ID_HEADER: &str = "x-user-id";
pub const USER_ROLE_HEADER: &str = "x-user-role";
pub const ADMIN_ROLE: &str = "admin";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub user_id: String,
    pub is_admin: bool,
}

impl Principal {
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let user_id = headers
            .get(USER_ID_HEADER)?
            .to_str()
            .ok()
            .map(str::trim)
            .filter(|id| !id.is_empty())?
            .to_string();
        let is_admin = headers
            .get(USER_ROLE_HEADER)
            .and_then(|role| role.to_str().ok())
            .is_some_and(|role| role.trim().eq_ignore_ascii_case(ADMIN_ROLE));
        Some(Self { user_id, is_admin })
    }

    pub fn can_access_user(&self, user_id: &str) -> bool {
        self.is_admin || self.user_id == user_id
    }
}

impl<S> FromRequestParts<S> for Principal
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Principal::from_headers(&parts.headers).ok_or(StatusCode::UNAUTHORIZED)
    }
}
