// regexpr/src/lib.rs
//! # regexpr CLI Application
//!
//! This crate provides the command-line interface over `regexpr-core`: building
//! pattern recipes, filtering lines that match them and listing matches.

pub mod cli;
pub mod commands;
pub mod logger;
