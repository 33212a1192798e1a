// Temajuk Tourism API - REST backend for the Temajuk tourism CMS.

pub mod api;
pub mod app_state;
pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod repository;
pub mod schemas;

pub use error::{AppError, AppResult};
