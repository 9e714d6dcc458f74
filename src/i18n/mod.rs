// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the player labels.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles language detection, translation file loading, and string formatting.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - `.ftl` translation files embedded at build time
//! - Fallback to `en-US` when the requested locale is unavailable

pub mod fluent;

pub use fluent::I18n;
