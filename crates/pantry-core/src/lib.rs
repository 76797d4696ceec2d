//! # pantry-core
//!
//! Core types, ID prefixes, and error types for Pantry.
//!
//! This crate provides the foundational types shared across all Pantry crates:
//! - Entity structs for all domain objects (users, recipes, follows, likes, comments)
//! - The like state machine
//! - ID prefix constants
//! - Cross-cutting error types
//! - Storage accessor traits consumed by the feed core
//! - Time-of-day meal tag selection
//! - HTTP response payload types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod meal;
pub mod responses;
pub mod store;
