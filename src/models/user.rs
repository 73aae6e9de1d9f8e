use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    Coordinator,
    Teacher,
    Parent,
    Student,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Coordinator => "COORDINATOR",
            UserRole::Teacher => "TEACHER",
            UserRole::Parent => "PARENT",
            UserRole::Student => "STUDENT",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authenticated user's profile, as issued by the credential table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    /// National identifier in punctuated form (`DDD.DDD.DDD-DD`)
    pub cpf: String,
    pub email: String,
    pub role: UserRole,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub identifier: String,
    pub secret: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// Seed entry mapping a normalized CPF to its secret and issued session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialRecord {
    pub cpf: String,
    pub token: String,
    pub secret: String,
    pub user: User,
}

impl CredentialRecord {
    pub fn to_auth_response(&self) -> AuthResponse {
        AuthResponse {
            token: self.token.clone(),
            user: self.user.clone(),
        }
    }
}
