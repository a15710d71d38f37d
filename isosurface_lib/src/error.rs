//! Error types of the library.
//!
//! The rendering algorithm itself cannot fail, every anomaly along a ray
//! produces a defined color. Errors only come from building volumes,
//! transfer functions and render options.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VolumeError {
    #[error("cannot read volume: {0}")]
    Io(#[from] std::io::Error),

    #[error("path does not lead to a file: {0:?}")]
    NotAFile(PathBuf),

    #[error("header parse error")]
    Parse,

    #[error("unknown sample order {0}")]
    UnknownSampleOrder(u8),

    #[error("volume dimensions must be non-zero, got {x}x{y}x{z}")]
    ZeroDimension { x: usize, y: usize, z: usize },

    #[error("volume of {x}x{y}x{z} samples does not fit in memory")]
    TooLarge { x: usize, y: usize, z: usize },

    #[error("expected {expected} samples, data source holds {actual}")]
    SizeMismatch { expected: usize, actual: usize },
}

#[derive(Error, Debug, PartialEq)]
pub enum TransferFunctionError {
    #[error("lookup table needs at least 2 entries, got {0}")]
    TooShort(usize),
}

#[derive(Error, Debug, PartialEq)]
pub enum OptionsError {
    #[error("threshold must be in range (0;1], got {0}")]
    Threshold(f32),

    #[error("sample budget must be positive")]
    ZeroSamples,

    #[error("gradient delta must be positive, got {0}")]
    GradientDelta(f32),

    #[error("step length must be positive on every axis")]
    StepLength,

    #[error("specular exponent must be finite and non-negative, got {0}")]
    SpecularPower(f32),

    #[error("resolution must be non-zero")]
    Resolution,

    #[error("worker count and tile side must be non-zero")]
    Parallelism,
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("cannot spawn render worker: {0}")]
    WorkerSpawn(#[from] std::io::Error),

    #[error("render worker panicked")]
    WorkerPanic,

    #[error("render worker disconnected")]
    Disconnected,
}
