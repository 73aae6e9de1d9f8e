// Home dashboard controller

use super::navigation::{NavCommand, Route};
use super::provider::DashboardProvider;
use crate::models::{DashboardData, UserRole};
use crate::session::SessionStore;
use serde::{Deserialize, Serialize};

/// Query parameters the route guard attaches when it bounces a navigation
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessDeniedParams {
    pub access_denied: Option<String>,
    pub required_role: Option<String>,
}

/// Text of the access-denied alert and where to go once it is dismissed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessDeniedNotice {
    pub header: String,
    pub message: String,
    pub then: NavCommand,
}

/// Home screen state
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeView {
    pub data: Option<DashboardData>,
    pub is_menu_open: bool,
    pub is_coordinator: bool,
}

#[derive(Debug, Default)]
pub struct HomeController {
    data: Option<DashboardData>,
    is_menu_open: bool,
    is_coordinator: bool,
}

impl HomeController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the session and build the dashboard
    pub fn init(&mut self, session: &SessionStore, provider: &DashboardProvider) {
        self.is_coordinator = session.has_role(UserRole::Coordinator);
        self.data = Some(provider.dashboard_for(session.current_user().as_ref()));
    }

    pub fn view(&self) -> HomeView {
        HomeView {
            data: self.data.clone(),
            is_menu_open: self.is_menu_open,
            is_coordinator: self.is_coordinator,
        }
    }

    pub fn is_coordinator(&self) -> bool {
        self.is_coordinator
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.is_menu_open = !self.is_menu_open;
        self.is_menu_open
    }

    pub fn go_to_chat(&self) -> NavCommand {
        NavCommand::forward(Route::Chat)
    }

    pub fn go_to_settings(&self) -> NavCommand {
        NavCommand::forward(Route::Settings)
    }

    pub fn go_to_calendar(&self) -> NavCommand {
        NavCommand::forward(Route::Calendar)
    }

    pub fn go_to_coordinator_dashboard(&self) -> NavCommand {
        NavCommand::forward(Route::CoordinatorDashboard)
    }

    /// Notice to show when the guard sent the user here, `None` otherwise
    pub fn check_access_denied(&self, params: &AccessDeniedParams) -> Option<AccessDeniedNotice> {
        if params.access_denied.as_deref() != Some("true") {
            return None;
        }

        let detail = match params.required_role.as_deref() {
            Some(role) if !role.is_empty() => {
                format!("Esta funcionalidade requer perfil de {}.", role)
            }
            _ => "Acesso restrito a administradores.".to_string(),
        };

        Some(AccessDeniedNotice {
            header: "Acesso Negado".to_string(),
            message: format!(
                "Você não possui permissão para acessar esta área. {}",
                detail
            ),
            then: NavCommand::root(Route::Home).replacing_url(),
        })
    }
}
