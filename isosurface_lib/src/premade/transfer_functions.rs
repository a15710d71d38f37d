use crate::{
    color::{self, RGBA},
    error::TransferFunctionError,
    volumetric::{TransferFunction, TF, TF_LUT_LEN},
};

// R G B A -- all <0;1>
// Samples normalized, u8 volumes are divided by 255

/// White, opacity equal to sample
pub fn identity_tf(sample: f32) -> RGBA {
    color::mono(1.0, sample)
}

/// Bone of CT scans, sample over 60 (of 255)
pub fn skull_tf(sample: f32) -> RGBA {
    if sample > 60.0 / 255.0 {
        color::new(227.0 / 255.0, 218.0 / 255.0, 201.0 / 255.0, 1.0)
    } else {
        color::zero()
    }
}

/// Anything over 10 (of 255)
pub fn white_tf(sample: f32) -> RGBA {
    if sample > 10.0 / 255.0 {
        color::mono(1.0, 1.0)
    } else {
        color::zero()
    }
}

/// Colored by density, opaque only for dense parts
pub fn heat_tf(sample: f32) -> RGBA {
    color::new(sample, 0.4 * sample, 1.0 - sample, sample * sample)
}

/// White, opaque from `threshold` up.
/// Built at runtime, the threshold does not fit a plain [`TF`].
pub fn step_tf(threshold: f32) -> Result<TransferFunction, TransferFunctionError> {
    TransferFunction::from_fn(TF_LUT_LEN, |sample| {
        if sample >= threshold {
            color::mono(1.0, 1.0)
        } else {
            color::zero()
        }
    })
}

/// Premade transfer function by name
pub fn by_name(name: &str) -> Option<TF> {
    let tf: TF = match name {
        "identity" => identity_tf,
        "skull" => skull_tf,
        "white" => white_tf,
        "heat" => heat_tf,
        _ => return None,
    };
    Some(tf)
}

pub const TF_NAMES: &[&str] = &["identity", "skull", "white", "heat"];

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn names_resolve() {
        for name in TF_NAMES {
            assert!(by_name(name).is_some());
        }
        assert!(by_name("beetle").is_none());
    }

    #[test]
    fn step_is_binary() {
        let tf = step_tf(0.5).unwrap();
        assert_eq!(tf.opacity(0.2), 0.0);
        assert_eq!(tf.opacity(0.8), 1.0);
        assert_eq!(tf.opacity(1.0), 1.0);
    }

    #[test]
    fn skull_cuts_soft_tissue() {
        assert_eq!(skull_tf(0.1).w, 0.0);
        assert_eq!(skull_tf(0.5).w, 1.0);
    }
}
