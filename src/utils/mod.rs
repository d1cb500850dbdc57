//! Small helpers shared by the collectors

pub mod command;
pub mod file;
pub mod parsing;
