//! Configuration, SDK client construction and CLI plumbing shared by every example

pub mod cli;
pub mod clients;
pub mod config;
