// SPDX-License-Identifier: MPL-2.0
//! User interface of the card.
//!
//! Views follow the Elm-style "state down, messages up" pattern: they read
//! the slideshow [`Stage`](crate::slideshow::Stage) and emit their own
//! message type, which the application routes to the controller.
//!
//! # Panels
//!
//! - [`intro`] - Greeting with the enter control
//! - [`slideshow`] - Slides, navigation, dots and status line
//!
//! # Shared Infrastructure
//!
//! - [`widgets`] - Canvas widgets (particles, heart burst, ripple)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theme`] - Theme and color helpers

pub mod design_tokens;
pub mod intro;
pub mod slideshow;
pub mod styles;
pub mod theme;
pub mod widgets;
