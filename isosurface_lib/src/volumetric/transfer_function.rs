use crate::{
    color::{self, RGBA},
    error::TransferFunctionError,
};

/// Transfer function as a plain mapping, sample `<0;1>` to color.
/// Gets baked into [`TransferFunction`] lookup table.
pub type TF = fn(f32) -> RGBA;

/// Default number of lookup table entries
pub const TF_LUT_LEN: usize = 256;

/// 1D lookup table mapping density to color and opacity.
///
/// Entry `i` of `n` belongs to density `i / (n - 1)`.
/// Lookup interpolates linearly between neighbouring entries.
#[derive(Debug, Clone)]
pub struct TransferFunction {
    lut: Vec<RGBA>,
}

impl TransferFunction {
    pub fn new(lut: Vec<RGBA>) -> Result<TransferFunction, TransferFunctionError> {
        if lut.len() < 2 {
            return Err(TransferFunctionError::TooShort(lut.len()));
        }
        Ok(TransferFunction { lut })
    }

    /// Bake function into table of `len` entries
    pub fn from_fn<F>(len: usize, f: F) -> Result<TransferFunction, TransferFunctionError>
    where
        F: Fn(f32) -> RGBA,
    {
        let last = len.saturating_sub(1).max(1) as f32;
        let lut = (0..len).map(|i| f(i as f32 / last)).collect();
        TransferFunction::new(lut)
    }

    /// Bake plain transfer function with default table length
    pub fn from_tf(tf: TF) -> TransferFunction {
        TransferFunction {
            lut: Self::bake(tf, TF_LUT_LEN),
        }
    }

    /// White, opacity equal to density
    pub fn identity() -> TransferFunction {
        TransferFunction::from_tf(|sample| color::mono(1.0, sample))
    }

    fn bake(tf: TF, len: usize) -> Vec<RGBA> {
        let last = (len - 1) as f32;
        (0..len).map(|i| tf(i as f32 / last)).collect()
    }

    pub fn len(&self) -> usize {
        self.lut.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lut.is_empty()
    }

    /// Color of density `sample`, clamped to `<0;1>`
    pub fn lookup(&self, sample: f32) -> RGBA {
        let sample = if sample.is_nan() {
            0.0
        } else {
            sample.clamp(0.0, 1.0)
        };

        let last = self.lut.len() - 1;
        let pos = sample * last as f32;
        let index = usize::min(pos as usize, last - 1);
        let t = pos - index as f32;

        self.lut[index] * (1.0 - t) + self.lut[index + 1] * t
    }

    /// Opacity channel of [`lookup`](TransferFunction::lookup)
    pub fn opacity(&self, sample: f32) -> f32 {
        self.lookup(sample).w
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn identity_is_exact() {
        let tf = TransferFunction::identity();
        for &s in &[0.0, 0.1, 40.0 / 255.0, 0.5, 0.77, 1.0] {
            assert!((tf.opacity(s) - s).abs() < 1e-6);
        }
    }

    #[test]
    fn clamps_input() {
        let tf = TransferFunction::identity();
        assert_eq!(tf.opacity(-3.0), 0.0);
        assert_eq!(tf.opacity(5.0), 1.0);
        assert_eq!(tf.opacity(f32::NAN), 0.0);
    }

    #[test]
    fn interpolates_between_entries() {
        let tf = TransferFunction::new(vec![color::zero(), color::new(1.0, 0.5, 0.0, 1.0)]).unwrap();
        let c = tf.lookup(0.25);
        assert!((c - color::new(0.25, 0.125, 0.0, 0.25)).norm() < 1e-6);
    }

    #[test]
    fn too_short() {
        let res = TransferFunction::new(vec![color::zero()]);
        assert_eq!(res.unwrap_err(), TransferFunctionError::TooShort(1));
        assert!(TransferFunction::from_fn(0, |_| color::zero()).is_err());
    }
}
