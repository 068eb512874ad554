//! Named perceptual colour ramps.
//!
//! The perceptual ramps are piecewise-linear through their published anchor
//! colours; jet is the classic analytic piecewise definition. Both directions
//! of the contour pipeline (render and digitize) evaluate the same tables, so
//! round-trip accuracy is bounded only by colour-map sampling resolution.

use crate::error::{ContourError, ContourResult};
use sg_core::Real;
use std::str::FromStr;

/// Anchor colours for viridis, evenly spaced on [0, 1].
const VIRIDIS: [[Real; 3]; 9] = [
    [0.2667, 0.0039, 0.3294],
    [0.2824, 0.1569, 0.4706],
    [0.2431, 0.2902, 0.5373],
    [0.1922, 0.4078, 0.5569],
    [0.1490, 0.5098, 0.5569],
    [0.1216, 0.6196, 0.5373],
    [0.2078, 0.7176, 0.4745],
    [0.4275, 0.8039, 0.3490],
    [0.9922, 0.9059, 0.1451],
];

/// Anchor colours for plasma, evenly spaced on [0, 1].
const PLASMA: [[Real; 3]; 9] = [
    [0.0510, 0.0314, 0.5294],
    [0.2745, 0.0118, 0.6235],
    [0.4471, 0.0039, 0.6588],
    [0.6118, 0.0902, 0.6196],
    [0.7412, 0.2157, 0.5255],
    [0.8471, 0.3412, 0.4196],
    [0.9294, 0.4745, 0.3255],
    [0.9843, 0.6235, 0.2275],
    [0.9412, 0.9765, 0.1294],
];

/// A reference colour ramp known by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NamedRamp {
    Viridis,
    Plasma,
    Jet,
}

impl NamedRamp {
    pub fn name(&self) -> &'static str {
        match self {
            NamedRamp::Viridis => "viridis",
            NamedRamp::Plasma => "plasma",
            NamedRamp::Jet => "jet",
        }
    }

    /// Colour at normalized position `t` (clamped to [0, 1]), channels in
    /// [0, 1].
    pub fn eval(&self, t: Real) -> [Real; 3] {
        let t = t.clamp(0.0, 1.0);
        match self {
            NamedRamp::Viridis => eval_anchors(&VIRIDIS, t),
            NamedRamp::Plasma => eval_anchors(&PLASMA, t),
            NamedRamp::Jet => {
                let ramp = |x: Real| (1.5 - x.abs()).clamp(0.0, 1.0);
                [
                    ramp(4.0 * t - 3.0),
                    ramp(4.0 * t - 2.0),
                    ramp(4.0 * t - 1.0),
                ]
            }
        }
    }
}

fn eval_anchors(anchors: &[[Real; 3]], t: Real) -> [Real; 3] {
    // endpoints must hit the anchor colours exactly
    if t >= 1.0 {
        return anchors[anchors.len() - 1];
    }
    let scaled = t * (anchors.len() - 1) as Real;
    let lo = (scaled.floor() as usize).min(anchors.len() - 2);
    let frac = scaled - lo as Real;
    let a = anchors[lo];
    let b = anchors[lo + 1];
    [
        a[0] + (b[0] - a[0]) * frac,
        a[1] + (b[1] - a[1]) * frac,
        a[2] + (b[2] - a[2]) * frac,
    ]
}

impl FromStr for NamedRamp {
    type Err = ContourError;

    fn from_str(s: &str) -> ContourResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "viridis" => Ok(NamedRamp::Viridis),
            "plasma" => Ok(NamedRamp::Plasma),
            "jet" => Ok(NamedRamp::Jet),
            other => Err(ContourError::UnknownRamp {
                name: other.to_string(),
            }),
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn eval_is_total_and_bounded(t in -1.0_f64..2.0) {
            for ramp in [NamedRamp::Viridis, NamedRamp::Plasma, NamedRamp::Jet] {
                let c = ramp.eval(t);
                for ch in c {
                    prop_assert!(ch.is_finite());
                    prop_assert!((0.0..=1.0).contains(&ch));
                }
            }
        }
    }
}
