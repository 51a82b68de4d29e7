//! Desktop client for a remote audio event classification service.
/// Application directory resolution.
pub mod app_dirs;
/// Shared egui UI modules.
pub mod egui_app;
mod http_client;
/// Tracing setup.
pub mod logging;
/// Remote service gateway.
pub mod service;
/// Client configuration and the category table.
pub mod settings;
/// Training request parameters.
pub mod training;
/// Audio file validation for uploads.
pub mod upload;
