use super::dashboard::DashboardTemplate;
use super::user::CredentialRecord;
use crate::auth::credentials::seed_records;
use crate::auth::identifier::normalize_cpf;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

/// Where the session keys are persisted
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StorageConfig {
    /// Process-local map, lost on exit
    Memory,
    /// JSON object file on disk
    File { path: PathBuf },
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig::File {
            path: PathBuf::from("session-storage.json"),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Address the local API listens on
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// Durable key/value storage backend
    #[serde(default)]
    pub storage: StorageConfig,
    /// Credential table; defaults to the built-in seed records
    #[serde(default = "seed_records")]
    pub credentials: Vec<CredentialRecord>,
    /// Static dashboard payload
    #[serde(default)]
    pub dashboard: DashboardTemplate,
}

fn default_bind_address() -> String {
    "127.0.0.1:3000".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            storage: StorageConfig::default(),
            credentials: seed_records(),
            dashboard: DashboardTemplate::default(),
        }
    }
}

impl AppConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.credentials.is_empty() {
            return Err("Configuration must have at least one credential record".to_string());
        }

        let mut seen = HashSet::new();
        for record in &self.credentials {
            if normalize_cpf(&record.cpf) != record.cpf {
                return Err(format!(
                    "Credential record '{}' is not in normalized CPF form",
                    record.cpf
                ));
            }
            if record.user.cpf != record.cpf {
                return Err(format!(
                    "Credential record '{}' carries a user with CPF '{}'",
                    record.cpf, record.user.cpf
                ));
            }
            if record.token.is_empty() {
                return Err(format!("Credential record '{}' must have a token", record.cpf));
            }
            if record.secret.is_empty() {
                return Err(format!("Credential record '{}' must have a secret", record.cpf));
            }
            if !seen.insert(record.cpf.as_str()) {
                return Err(format!("Duplicate credential record '{}'", record.cpf));
            }
        }

        if let StorageConfig::File { path } = &self.storage
            && path.as_os_str().is_empty()
        {
            return Err("File storage must have a path".to_string());
        }

        Ok(())
    }
}
