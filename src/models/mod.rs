pub mod config;
pub mod dashboard;
pub mod user;

pub use config::{AppConfig, StorageConfig};
pub use dashboard::{
    Commitment, CommitmentKind, DashboardData, DashboardStats, DashboardTemplate, StudentCard,
    UserCard,
};
pub use user::{AuthResponse, CredentialRecord, LoginRequest, User, UserRole};
