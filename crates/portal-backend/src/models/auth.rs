use crate::models::user::WireUser;
use serde::{Deserialize, Serialize};

/// Registration payload. Posted to `/login` (the path is a historical
/// accident of the backend; sign-in lives at `/signin`).
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub project_role: String,
    pub role_id: i64,
    pub stack_id: i64,
}

#[derive(Debug, Serialize)]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct OtpRequest {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct VerifyOtpRequest {
    pub email: String,
    pub otp: String,
}

/// `{token, user}` returned by `/signin`, `/admin_login` and `/verify-otp`
#[derive(Debug, Deserialize)]
pub struct SessionResponse {
    pub token: String,
    pub user: WireUser,
}
