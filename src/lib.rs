//! Pension projection engine comparing NPS and UPS retirement benefits.
//!
//! This crate simulates a government employee's month-by-month pay trajectory
//! under a tiered pay matrix (promotions, decennial pay-scale revisions, annual
//! increments, dearness-allowance revisions, compounding corpus growth) and
//! reduces the finished timeline into two competing retirement-benefit figures:
//! the contribution-based NPS scheme and the defined-benefit UPS scheme.
//!
//! The engine is synchronous, deterministic, and free of I/O: callers supply a
//! [`models::CareerProfile`], promotion drafts, a [`config::PayMatrix`], and a
//! [`config::PolicyConfig`], and receive a [`models::ProjectionResult`] or a
//! typed [`error::EngineError`].
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use rust_decimal::Decimal;
//! use pension_engine::calculation::calculate_projection;
//! use pension_engine::config::{PayMatrix, PolicyConfig};
//! use pension_engine::models::{CareerProfile, IncrementMonth};
//!
//! let matrix = PayMatrix::generate();
//! let policy = PolicyConfig::default();
//! let profile = CareerProfile {
//!     level: 1,
//!     basic_pay: Decimal::from(18000),
//!     allowance_percent: Decimal::from(50),
//!     increment_month: IncrementMonth::January,
//!     start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!     retirement_date: NaiveDate::from_ymd_opt(2054, 1, 1).unwrap(),
//!     opening_corpus: None,
//! };
//!
//! let result = calculate_projection(&profile, &[], &matrix, &policy).unwrap();
//! assert_eq!(result.timeline.len(), 361);
//! assert_eq!(result.service_years, 30);
//! assert!(result.ups_eligible);
//! ```

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
