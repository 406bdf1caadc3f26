//! Taskline library - Core functionality for the command-line task tracker

pub mod cli;
pub mod config;
pub mod task;
