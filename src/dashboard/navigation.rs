// Navigation commands and the route guard

use crate::models::UserRole;
use crate::session::SessionStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Logical screens of the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    Login,
    Home,
    Settings,
    Chat,
    Calendar,
    CoordinatorDashboard,
}

impl Route {
    pub const ALL: [Route; 6] = [
        Route::Login,
        Route::Home,
        Route::Settings,
        Route::Chat,
        Route::Calendar,
        Route::CoordinatorDashboard,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Home => "/home",
            Route::Settings => "/settings",
            Route::Chat => "/chat",
            Route::Calendar => "/calendar",
            Route::CoordinatorDashboard => "/coordinator-dashboard",
        }
    }

    /// Parse a route name, with or without the leading slash
    pub fn from_name(name: &str) -> Option<Route> {
        let name = name.strip_prefix('/').unwrap_or(name);
        Route::ALL.into_iter().find(|route| &route.path()[1..] == name)
    }

    /// Reachable without a session
    pub fn is_public(&self) -> bool {
        matches!(self, Route::Login)
    }

    /// Roles allowed in; empty means any signed-in user
    pub fn required_roles(&self) -> &'static [UserRole] {
        match self {
            Route::CoordinatorDashboard => &[UserRole::Coordinator],
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Forward,
    Back,
    /// Reset the navigation stack
    Root,
}

/// Route-to-screen request issued by a controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavCommand {
    pub direction: Direction,
    pub route: Route,
    pub replace_url: bool,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub query: BTreeMap<String, String>,
}

impl NavCommand {
    fn new(direction: Direction, route: Route) -> Self {
        Self {
            direction,
            route,
            replace_url: false,
            query: BTreeMap::new(),
        }
    }

    pub fn forward(route: Route) -> Self {
        Self::new(Direction::Forward, route)
    }

    pub fn back(route: Route) -> Self {
        Self::new(Direction::Back, route)
    }

    pub fn root(route: Route) -> Self {
        Self::new(Direction::Root, route)
    }

    pub fn replacing_url(mut self) -> Self {
        self.replace_url = true;
        self
    }

    pub fn with_query(mut self, key: &str, value: &str) -> Self {
        self.query.insert(key.to_string(), value.to_string());
        self
    }

    /// Path plus percent-encoded query string
    pub fn url(&self) -> String {
        if self.query.is_empty() {
            return self.route.path().to_string();
        }

        let query: Vec<String> = self
            .query
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(key),
                    urlencoding::encode(value)
                )
            })
            .collect();
        format!("{}?{}", self.route.path(), query.join("&"))
    }
}

/// Whether a navigation may proceed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "lowercase")]
pub enum GuardDecision {
    Allow,
    Redirect { to: NavCommand },
}

/// Decide a navigation to `route` from the current session.
///
/// Anonymous users go to the login screen; signed-in users without one of
/// the route's roles go home with the access-denied flag set.
pub fn authorize(session: &SessionStore, route: Route) -> GuardDecision {
    if route.is_public() {
        return GuardDecision::Allow;
    }

    if !session.is_authenticated() {
        return GuardDecision::Redirect {
            to: NavCommand::root(Route::Login).replacing_url(),
        };
    }

    let required = route.required_roles();
    if !required.is_empty() && !session.has_any_role(required) {
        let roles: Vec<&str> = required.iter().map(|role| role.as_str()).collect();
        return GuardDecision::Redirect {
            to: NavCommand::root(Route::Home)
                .with_query("accessDenied", "true")
                .with_query("requiredRole", &roles.join(",")),
        };
    }

    GuardDecision::Allow
}
