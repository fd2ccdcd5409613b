//! Blocky (workspace facade crate).
//!
//! The board model lives in `crates/core`, automated players in `crates/engine` and shared
//! types in `crates/types`. This package re-exports them as `blocky::{core, engine, types}`
//! and hosts the configuration of the headless runner.

pub mod config;

pub use blocky_core as core;
pub use blocky_engine as engine;
pub use blocky_types as types;
