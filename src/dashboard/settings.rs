// Settings screen controller

use super::navigation::{NavCommand, Route};
use crate::session::SessionStore;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsView {
    pub notifications_enabled: bool,
}

#[derive(Debug)]
pub struct SettingsController {
    notifications_enabled: bool,
}

impl Default for SettingsController {
    fn default() -> Self {
        Self {
            notifications_enabled: true,
        }
    }
}

impl SettingsController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> SettingsView {
        SettingsView {
            notifications_enabled: self.notifications_enabled,
        }
    }

    /// Apply the switch position and return the status text for it
    pub fn toggle_notifications(&mut self, enabled: bool) -> &'static str {
        self.notifications_enabled = enabled;
        if enabled {
            "Notificações Ativadas"
        } else {
            "Notificações Desativadas"
        }
    }

    pub fn go_back(&self) -> NavCommand {
        NavCommand::back(Route::Home)
    }

    /// End the session and reset navigation to the login screen.
    ///
    /// The notifications switch goes back to its default for the next user.
    pub fn logout(&mut self, session: &mut SessionStore) -> NavCommand {
        session.logout();
        *self = Self::default();
        NavCommand::root(Route::Login)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::StaticCredentialStore;
    use crate::dashboard::navigation::Direction;
    use crate::storage::MemoryStorage;
    use std::sync::Arc;

    #[test]
    fn test_notifications_default_on() {
        assert!(SettingsController::new().view().notifications_enabled);
    }

    #[test]
    fn test_toggle_notifications() {
        let mut settings = SettingsController::new();

        assert_eq!(settings.toggle_notifications(false), "Notificações Desativadas");
        assert!(!settings.view().notifications_enabled);

        assert_eq!(settings.toggle_notifications(true), "Notificações Ativadas");
        assert!(settings.view().notifications_enabled);
    }

    #[test]
    fn test_go_back_returns_home() {
        let command = SettingsController::new().go_back();
        assert_eq!(command.direction, Direction::Back);
        assert_eq!(command.route, Route::Home);
    }

    #[test]
    fn test_logout_clears_session() {
        let mut session = SessionStore::new(
            Arc::new(MemoryStorage::new()),
            Arc::new(StaticCredentialStore::default()),
        );
        session.login("111.222.333-44", "Teacher#123456").unwrap();

        let command = SettingsController::new().logout(&mut session);

        assert!(!session.is_authenticated());
        assert_eq!(command.direction, Direction::Root);
        assert_eq!(command.route, Route::Login);
    }

    #[test]
    fn test_logout_resets_notifications() {
        let mut session = SessionStore::new(
            Arc::new(MemoryStorage::new()),
            Arc::new(StaticCredentialStore::default()),
        );
        let mut settings = SettingsController::new();

        session.login("093.149.994-16", "Maria#19820225").unwrap();
        settings.toggle_notifications(false);
        settings.logout(&mut session);

        session.login("111.222.333-44", "Teacher#123456").unwrap();
        assert!(settings.view().notifications_enabled);
    }
}
