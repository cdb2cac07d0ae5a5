//! Easing rigs for the 3D backdrop scene
//!
//! Only the motion math lives here. Lights, materials, and the render
//! pipeline belong to the embedding page; these types just produce smooth
//! positions for it to apply every frame.

pub mod rig;
pub mod spring;

pub use rig::{CameraRig, CursorLight, SmoothDamp3};
pub use spring::{Spring2, SpringPreset};
