// View controllers for the home and settings screens

pub mod home;
pub mod navigation;
pub mod provider;
pub mod settings;

pub use home::{AccessDeniedNotice, AccessDeniedParams, HomeController, HomeView};
pub use navigation::{Direction, GuardDecision, NavCommand, Route, authorize};
pub use provider::DashboardProvider;
pub use settings::{SettingsController, SettingsView};
