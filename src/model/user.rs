use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub last_login_at: NaiveDateTime,
}

/// Credentials submitted to `POST /api/auth/login`
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

impl LoginDto {
    pub fn validate(&self) -> Result<(), crate::model::validation::ValidationError> {
        crate::model::validation::require("email", &self.email)?;
        crate::model::validation::require("password", &self.password)?;

        Ok(())
    }
}
