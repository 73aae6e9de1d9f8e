// Credential store
// Matches an identifier/secret pair against the fixed credential table

use super::identifier::normalize_cpf;
use crate::models::{AuthResponse, CredentialRecord, User, UserRole};
use std::collections::HashMap;
use thiserror::Error;

/// Trait for credential lookups
pub trait CredentialStore: Send + Sync {
    /// Authenticate an identifier (any punctuation) and secret
    fn authenticate(&self, identifier: &str, secret: &str)
    -> Result<AuthResponse, CredentialError>;

    /// Look up a record by identifier
    fn find_by_cpf(&self, identifier: &str) -> Option<&CredentialRecord>;

    /// Whether `token` and `user` are exactly what the table issues for that user
    fn matches(&self, token: &str, user: &User) -> bool {
        self.find_by_cpf(&user.cpf)
            .is_some_and(|record| record.token == token && &record.user == user)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CredentialError {
    /// Unknown identifier or wrong secret; deliberately not told apart
    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// Immutable credential table built from configuration
pub struct StaticCredentialStore {
    records: HashMap<String, CredentialRecord>,
}

impl StaticCredentialStore {
    /// Build the table, keyed by each record's normalized CPF
    pub fn new(records: Vec<CredentialRecord>) -> Self {
        let records = records
            .into_iter()
            .map(|record| (normalize_cpf(&record.cpf), record))
            .collect();

        StaticCredentialStore { records }
    }
}

impl Default for StaticCredentialStore {
    fn default() -> Self {
        Self::new(seed_records())
    }
}

impl CredentialStore for StaticCredentialStore {
    fn authenticate(
        &self,
        identifier: &str,
        secret: &str,
    ) -> Result<AuthResponse, CredentialError> {
        let record = self
            .find_by_cpf(identifier)
            .filter(|record| record.secret == secret)
            .ok_or(CredentialError::InvalidCredentials)?;

        Ok(record.to_auth_response())
    }

    fn find_by_cpf(&self, identifier: &str) -> Option<&CredentialRecord> {
        self.records.get(&normalize_cpf(identifier))
    }
}

fn record(
    cpf: &str,
    token: &str,
    id: &str,
    name: &str,
    email: &str,
    role: UserRole,
    secret: &str,
) -> CredentialRecord {
    CredentialRecord {
        cpf: cpf.to_string(),
        token: token.to_string(),
        secret: secret.to_string(),
        user: User {
            id: id.to_string(),
            name: name.to_string(),
            cpf: cpf.to_string(),
            email: email.to_string(),
            role,
        },
    }
}

/// Built-in demo accounts
pub fn seed_records() -> Vec<CredentialRecord> {
    vec![
        record(
            "123.456.789-00",
            "mock_token_parent_abc123",
            "usr_001",
            "Maria Betânia da Silva",
            "maria.silva@email.com",
            UserRole::Parent,
            "Maria#19820225",
        ),
        record(
            "987.654.321-00",
            "mock_token_coordinator_xyz789",
            "usr_002",
            "Lívia Villar",
            "livia.villar@escola.edu.br",
            UserRole::Coordinator,
            "Livia#19711208",
        ),
        record(
            "111.222.333-44",
            "mock_token_teacher_def456",
            "usr_003",
            "Carlos Eduardo Santos",
            "carlos.santos@escola.edu.br",
            UserRole::Teacher,
            "Teacher#123456",
        ),
        record(
            "590.167.064-70",
            "mock_token_coordinator_livia",
            "usr_004",
            "Lívia Villar",
            "livia.villar@email.com",
            UserRole::Coordinator,
            "Livia#19711208",
        ),
        record(
            "093.149.994-16",
            "mock_token_parent_maria",
            "usr_005",
            "Maria Betânia da Silva",
            "maria.silva@email.com",
            UserRole::Parent,
            "Maria#19820225",
        ),
        record(
            "116.293.034-96",
            "mock_token_student_mauricio",
            "usr_006",
            "Maurício Fabrício da Silva",
            "mauricio.silva@email.com",
            UserRole::Student,
            "Mauricio#20130503",
        ),
    ]
}
