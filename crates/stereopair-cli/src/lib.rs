//! StereoPair CLI library.
//!
//! This crate provides the batch driver for the `stereopair` binary:
//! directory scanning, pair enumeration, per-pair reporting and logging setup.

pub mod commands;
pub mod logging;
