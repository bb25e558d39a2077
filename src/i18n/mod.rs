// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Locale detection (CLI, config, system), embedded `.ftl` translation files
//! and string formatting with Fluent arguments.

pub mod fluent;
