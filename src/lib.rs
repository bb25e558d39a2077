// SPDX-License-Identifier: MPL-2.0
//! `keepsake` is a digital greeting card built with the Iced GUI framework.
//!
//! An intro screen opens onto a slideshow of shared memories, with floating
//! particles, a heart burst on entry and optional background music. Cards
//! are TOML documents; the bundled sample is shown when none is given.

pub mod app;
pub mod card;
pub mod config;
pub mod effects;
pub mod error;
pub mod i18n;
pub mod music;
pub mod slideshow;
pub mod ui;
