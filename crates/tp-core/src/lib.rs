//! Core model and aggregation for the training plan dashboard.
//!
//! The catalog is a static, read-only literal. Views are built by passing
//! (optionally filtered) session slices through the functions in
//! [`aggregate`]; nothing here performs I/O except [`config`] loading.

pub mod aggregate;
pub mod buckets;
pub mod calendar;
pub mod catalog;
pub mod config;
pub mod stats;
pub mod types;

pub use buckets::Buckets;
pub use catalog::SessionStore;
pub use config::Config;
pub use stats::DashboardStats;
pub use types::{MonthGroup, Session, Theme, ThemeFilter, ViewKind};
