//! Gradelite Core Library
//!
//! Curriculum catalog lookup and credit-weighted GPA calculation.

pub mod catalog;
pub mod config;
pub mod error;
pub mod form;
pub mod format;
pub mod gpa;
pub mod logging;
