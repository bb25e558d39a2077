// SPDX-License-Identifier: MPL-2.0
pub mod heart_overlay;
pub mod particle_field;
pub mod ripple_layer;

pub use heart_overlay::HeartOverlay;
pub use particle_field::ParticleField;
pub use ripple_layer::RippleLayer;
