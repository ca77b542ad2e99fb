//! fintrack - Personal finance tracking from the terminal
//!
//! Records income and expense transactions, monthly per-category budgets
//! and savings goals, and derives monthly totals, budget usage, goal
//! progress and spending trends from them.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, budgets, goals, categories)
//! - `engine`: Pure monthly aggregation and status classification
//! - `storage`: Record stores (JSON files or memory)
//! - `services`: Validation and CRUD on top of the stores
//! - `reports`: Dashboard, budget overview and goals summary
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use fintrack::config::{paths::FintrackPaths, settings::Settings};
//! use fintrack::reports::DashboardReport;
//! use fintrack::storage::Storage;
//!
//! let paths = FintrackPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::open(&paths)?;
//! let month = "2024-05".parse()?;
//! let report = DashboardReport::generate(&storage, month, &settings)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{FieldErrors, FintrackError, FintrackResult};
