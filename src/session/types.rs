// Session types and data structures

use crate::models::{AuthResponse, User};
use crate::storage::StorageError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The two states a store can be in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    Anonymous,
    Authenticated,
}

/// Live pairing of a token and the user it was issued for
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

impl From<AuthResponse> for Session {
    fn from(response: AuthResponse) -> Self {
        Self {
            token: response.token,
            user: response.user,
        }
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    /// Identifier unknown or secret wrong; which one is not disclosed
    #[error("Invalid credentials")]
    InvalidCredentials,
    /// The session could not be written to durable storage
    #[error("Failed to persist session: {0}")]
    Storage(#[from] StorageError),
}

/// Outcome of reading the persisted keys at startup
#[derive(Debug)]
pub(crate) enum RestoredSession {
    /// One or both keys missing
    Absent,
    Valid(Session),
    /// Present but not a well-formed session issued by the credential table
    Corrupt(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserRole;

    #[test]
    fn test_session_from_auth_response() {
        let response = AuthResponse {
            token: "mock_token_teacher_def456".to_string(),
            user: User {
                id: "usr_003".to_string(),
                name: "Carlos Eduardo Santos".to_string(),
                cpf: "111.222.333-44".to_string(),
                email: "carlos.santos@escola.edu.br".to_string(),
                role: UserRole::Teacher,
            },
        };

        let session = Session::from(response.clone());
        assert_eq!(session.token, response.token);
        assert_eq!(session.user, response.user);
    }

    #[test]
    fn test_invalid_credentials_message_is_generic() {
        assert_eq!(
            SessionError::InvalidCredentials.to_string(),
            "Invalid credentials"
        );
    }
}
