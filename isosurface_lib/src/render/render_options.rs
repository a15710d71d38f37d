use nalgebra::{vector, Vector2, Vector3};

use crate::error::OptionsError;

use super::{
    gradient::DEFAULT_GRADIENT_DELTA,
    iso_detector::{DEFAULT_THRESHOLD, MAX_SAMPLES},
    shading::DEFAULT_SPECULAR_POWER,
};

/// Source of the diffuse color of the surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DiffuseColor {
    /// Same color everywhere
    Constant(Vector3<f32>),
    /// RGB of the transfer function at the surface point
    TransferFunction,
}

impl Default for DiffuseColor {
    fn default() -> Self {
        DiffuseColor::Constant(vector![0.8, 0.8, 0.8])
    }
}

/// Settings of renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    /// Resolution of rendered image, width and height
    pub resolution: Vector2<u16>,
    /// Iso value of the surface, driving value in `(0;1]`
    pub threshold: f32,
    /// Maximum steps per ray
    pub max_samples: u32,
    /// Step length per axis in normalized space, `None` for one voxel
    pub step_length: Option<Vector3<f32>>,
    /// Offset of central differences
    pub gradient_delta: f32,
    /// Exponent of the specular highlight
    pub specular_power: f32,
    pub diffuse_color: DiffuseColor,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            resolution: vector![512, 512],
            threshold: DEFAULT_THRESHOLD,
            max_samples: MAX_SAMPLES,
            step_length: None,
            gradient_delta: DEFAULT_GRADIENT_DELTA,
            specular_power: DEFAULT_SPECULAR_POWER,
            diffuse_color: DiffuseColor::default(),
        }
    }
}

impl RenderOptions {
    pub fn builder() -> RenderOptionsBuilder {
        RenderOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.resolution.x == 0 || self.resolution.y == 0 {
            return Err(OptionsError::Resolution);
        }
        if !(self.threshold > 0.0 && self.threshold <= 1.0) {
            return Err(OptionsError::Threshold(self.threshold));
        }
        if self.max_samples == 0 {
            return Err(OptionsError::ZeroSamples);
        }
        if let Some(step) = self.step_length {
            if !step.iter().all(|&v| v > 0.0 && v.is_finite()) {
                return Err(OptionsError::StepLength);
            }
        }
        if !(self.gradient_delta > 0.0 && self.gradient_delta.is_finite()) {
            return Err(OptionsError::GradientDelta(self.gradient_delta));
        }
        if !(self.specular_power >= 0.0 && self.specular_power.is_finite()) {
            return Err(OptionsError::SpecularPower(self.specular_power));
        }
        Ok(())
    }

    /// Number of pixels of rendered image
    pub fn pixel_count(&self) -> usize {
        self.resolution.x as usize * self.resolution.y as usize
    }
}

/// Builder of [`RenderOptions`], unset fields keep default values
#[derive(Default)]
pub struct RenderOptionsBuilder {
    opts: RenderOptions,
}

impl RenderOptionsBuilder {
    pub fn resolution(mut self, resolution: Vector2<u16>) -> Self {
        self.opts.resolution = resolution;
        self
    }

    pub fn threshold(mut self, threshold: f32) -> Self {
        self.opts.threshold = threshold;
        self
    }

    pub fn max_samples(mut self, max_samples: u32) -> Self {
        self.opts.max_samples = max_samples;
        self
    }

    pub fn step_length(mut self, step_length: Vector3<f32>) -> Self {
        self.opts.step_length = Some(step_length);
        self
    }

    pub fn gradient_delta(mut self, delta: f32) -> Self {
        self.opts.gradient_delta = delta;
        self
    }

    pub fn specular_power(mut self, power: f32) -> Self {
        self.opts.specular_power = power;
        self
    }

    pub fn diffuse_color(mut self, diffuse_color: DiffuseColor) -> Self {
        self.opts.diffuse_color = diffuse_color;
        self
    }

    pub fn build(self) -> Result<RenderOptions, OptionsError> {
        self.opts.validate()?;
        Ok(self.opts)
    }

    /// Skips validation
    pub fn build_unchecked(self) -> RenderOptions {
        self.opts
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let opts = RenderOptions::builder().build().unwrap();
        assert_eq!(opts.threshold, 40.0 / 255.0);
        assert_eq!(opts.max_samples, 1000);
        assert_eq!(opts.gradient_delta, 0.01);
        assert_eq!(opts.pixel_count(), 512 * 512);
    }

    #[test]
    fn rejects_bad_threshold() {
        let res = RenderOptions::builder().threshold(0.0).build();
        assert_eq!(res, Err(OptionsError::Threshold(0.0)));
        let res = RenderOptions::builder().threshold(1.5).build();
        assert_eq!(res, Err(OptionsError::Threshold(1.5)));
        assert!(RenderOptions::builder().threshold(1.0).build().is_ok());
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(
            RenderOptions::builder().max_samples(0).build(),
            Err(OptionsError::ZeroSamples)
        );
        assert_eq!(
            RenderOptions::builder()
                .step_length(vector![0.1, 0.0, 0.1])
                .build(),
            Err(OptionsError::StepLength)
        );
        assert_eq!(
            RenderOptions::builder().gradient_delta(-0.01).build(),
            Err(OptionsError::GradientDelta(-0.01))
        );
        assert_eq!(
            RenderOptions::builder().specular_power(f32::INFINITY).build(),
            Err(OptionsError::SpecularPower(f32::INFINITY))
        );
        assert_eq!(
            RenderOptions::builder().resolution(vector![0, 10]).build(),
            Err(OptionsError::Resolution)
        );
    }

    #[test]
    fn unchecked_keeps_values() {
        let opts = RenderOptions::builder().max_samples(0).build_unchecked();
        assert_eq!(opts.max_samples, 0);
    }
}
