//! # advis-core
//!
//! Core types and error types for Advis.
//!
//! This crate provides the foundational types shared across all Advis crates:
//! - Record structs for the nine snapshot tables (students, attendance, ...)
//! - `RiskTier` and `TableKind` enums
//! - Cross-cutting error types
//! - View-model response types returned by the engine, CLI, and HTTP server
//! - A JSON Schema registry for the response types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;
pub mod schema;
