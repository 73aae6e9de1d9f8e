// Session management module
// Holds the single authenticated session, persists it and answers role queries

pub mod store;
pub mod types;

pub use store::SessionStore;
pub use types::{Session, SessionError, SessionState};
