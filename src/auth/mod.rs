pub mod credentials;
pub mod identifier;

pub use credentials::{CredentialError, CredentialStore, StaticCredentialStore, seed_records};
pub use identifier::normalize_cpf;
