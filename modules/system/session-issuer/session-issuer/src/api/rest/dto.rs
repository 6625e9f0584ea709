use serde::Serialize;

/// Body of `GET /api/auth/token`.
#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Body of `POST /api/auth/sign-out`.
#[derive(Debug, Clone, Serialize)]
pub struct SignOutResponse {
    pub success: bool,
}
