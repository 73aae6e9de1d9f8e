// Session store: the single live session of an app instance

use super::types::{RestoredSession, Session, SessionError, SessionState};
use crate::auth::CredentialStore;
use crate::models::{User, UserRole};
use crate::storage::{KeyValueStorage, StorageError, TOKEN_KEY, USER_KEY};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Authenticates against the credential table, persists the session and
/// publishes the current user to subscribers.
///
/// Mutation takes `&mut self`: one owner drives every transition.
pub struct SessionStore {
    storage: Arc<dyn KeyValueStorage>,
    credentials: Arc<dyn CredentialStore>,
    current: watch::Sender<Option<User>>,
}

impl SessionStore {
    /// Create a store, restoring whatever session the storage holds.
    ///
    /// Persisted data that is not a session issued by `credentials` is
    /// cleared and the store starts anonymous.
    pub fn new(storage: Arc<dyn KeyValueStorage>, credentials: Arc<dyn CredentialStore>) -> Self {
        let restored = match Self::read_persisted(storage.as_ref(), credentials.as_ref()) {
            RestoredSession::Valid(session) => {
                info!(
                    "Restored session for user {} ({})",
                    session.user.id, session.user.role
                );
                Some(session.user)
            }
            RestoredSession::Absent => {
                debug!("No persisted session");
                None
            }
            RestoredSession::Corrupt(reason) => {
                warn!("Discarding corrupt persisted session: {}", reason);
                if let Err(e) = storage.remove_items(&[TOKEN_KEY, USER_KEY]) {
                    warn!("Failed to clear corrupt session: {}", e);
                }
                None
            }
        };

        let (current, _) = watch::channel(restored);

        Self {
            storage,
            credentials,
            current,
        }
    }

    fn read_persisted(
        storage: &dyn KeyValueStorage,
        credentials: &dyn CredentialStore,
    ) -> RestoredSession {
        let read = |key: &str| match storage.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                warn!("Failed to read '{}' from storage: {}", key, e);
                None
            }
        };

        let (Some(token), Some(user_json)) = (read(TOKEN_KEY), read(USER_KEY)) else {
            return RestoredSession::Absent;
        };

        if token.is_empty() || user_json.is_empty() {
            return RestoredSession::Absent;
        }

        let user: User = match serde_json::from_str(&user_json) {
            Ok(user) => user,
            Err(e) => return RestoredSession::Corrupt(format!("unparseable user: {}", e)),
        };

        if !credentials.matches(&token, &user) {
            return RestoredSession::Corrupt(format!(
                "user {} does not match any credential record",
                user.id
            ));
        }

        RestoredSession::Valid(Session { token, user })
    }

    /// Authenticate and establish a session.
    ///
    /// On failure any existing session stays as it was.
    pub fn login(&mut self, identifier: &str, secret: &str) -> Result<Session, SessionError> {
        let session: Session = self
            .credentials
            .authenticate(identifier, secret)
            .map_err(|_| {
                info!("Login rejected");
                SessionError::InvalidCredentials
            })?
            .into();

        let user_json = serde_json::to_string(&session.user).map_err(StorageError::from)?;
        self.storage
            .set_items(&[(TOKEN_KEY, session.token.as_str()), (USER_KEY, user_json.as_str())])?;

        self.current.send_replace(Some(session.user.clone()));

        info!(
            "User {} logged in as {}",
            session.user.id, session.user.role
        );

        Ok(session)
    }

    /// End the session. The store is anonymous afterwards even if the
    /// storage could not be cleared.
    pub fn logout(&mut self) {
        if let Err(e) = self.storage.remove_items(&[TOKEN_KEY, USER_KEY]) {
            warn!("Failed to clear persisted session: {}", e);
        }

        if let Some(user) = self.current.send_replace(None) {
            info!("User {} logged out", user.id);
        }
    }

    /// Current user, if any
    pub fn current_user(&self) -> Option<User> {
        self.current.borrow().clone()
    }

    pub fn state(&self) -> SessionState {
        if self.current.borrow().is_some() {
            SessionState::Authenticated
        } else {
            SessionState::Anonymous
        }
    }

    /// True iff there is a live user and the stored token is non-empty
    pub fn is_authenticated(&self) -> bool {
        self.current.borrow().is_some() && self.token().is_some_and(|t| !t.is_empty())
    }

    /// Stored session token
    pub fn token(&self) -> Option<String> {
        match self.storage.get_item(TOKEN_KEY) {
            Ok(token) => token,
            Err(e) => {
                warn!("Failed to read session token: {}", e);
                None
            }
        }
    }

    pub fn user_role(&self) -> Option<UserRole> {
        self.current.borrow().as_ref().map(|user| user.role)
    }

    pub fn has_role(&self, role: UserRole) -> bool {
        self.user_role() == Some(role)
    }

    pub fn has_any_role(&self, roles: &[UserRole]) -> bool {
        roles.iter().any(|role| self.has_role(*role))
    }

    /// Observe the current user. The receiver starts at the latest value.
    pub fn subscribe(&self) -> watch::Receiver<Option<User>> {
        self.current.subscribe()
    }
}
