// Library exports for testing
pub mod auth;
pub mod config;
pub mod dashboard;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod session;
pub mod state;
pub mod storage;
