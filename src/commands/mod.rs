//! CLI commands for gradelite

pub mod catalog;
pub mod dispatch;
pub mod format;
pub mod gpa;
pub mod subjects;
