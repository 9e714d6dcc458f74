// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports between the playback core and the platform.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - The player controller only talks to the platform through these ports

pub mod port;
