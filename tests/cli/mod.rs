pub mod support;

mod catalog;
mod config;
mod gpa;
mod logging;
mod subjects;
