// SPDX-License-Identifier: MPL-2.0
//! Slide navigation, auto-play and the input that drives them.

pub mod autoplay;
pub mod controller;
pub mod effect;
pub mod input;
pub mod stage;

pub use autoplay::{AutoPlayHandle, AutoPlayInterval};
pub use controller::{ControllerOptions, Phase, SlideshowController};
pub use effect::{Effect, Timer};
pub use input::{Command, Key};
pub use stage::Stage;
