// src/math/color/mod.rs

// Farbraum-Umrechnungen
pub mod hls;
pub mod luv;

pub use self::hls::{hls_to_rgb, hue_color};
pub use self::luv::{d65_white, luv_to_xyz, xyz_to_linear_srgb};
