//! Procedural generator for the gradient cart icons of a PWA.

pub mod draw;
pub mod error;
pub mod icon_gen;
pub mod manifest;

pub use icon_gen::{generate_icons, IconConfig};
