/*
    isosurface_lib
    Author: Michal Majer
    Date: 2022-05-05
*/

//! Iso-surface volume renderer
//!
//! Each pixel marches a ray through a scalar volume, finds the first place where
//! the transfer function opacity rises over a threshold, refines it by bisection
//! and shades it with a head-light.

pub mod camera;
pub mod color;
pub mod common;
pub mod error;
pub mod premade;
pub mod render;
pub mod test_helpers;
pub mod volumetric;

pub use camera::PerspectiveCamera;
pub use error::{OptionsError, RenderError, TransferFunctionError, VolumeError};
pub use volumetric::TF;
