//! Ingredient Compliance Resolution Service
//!
//! This library provides the core functionality for the supplement-compliance
//! system, which resolves free-text ingredient names to regulatory compliance
//! records and validates supplement recommendations against them.

pub mod app_state;
pub mod config;
pub mod db;
pub mod models;
pub mod routes;
pub mod services;
