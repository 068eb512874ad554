//! Colour-to-value sample sequences.
//!
//! A colour map pairs an ordered run of colours with the scalar values they
//! stand for. It is built once per target field, either by evaluating a named
//! ramp or by reading the colour-bar legend strip out of the plot image
//! itself, and is immutable for the rest of the run.

use crate::error::{ContourError, ContourResult};
use crate::ramp::NamedRamp;
use image::RgbImage;
use sg_core::Real;

/// Colours closer than this (Euclidean, unit channels) count as identical
/// when probing a strip for an actual gradient.
const MIN_GRADIENT: Real = 0.05;

/// One (colour, value) pair of a colour bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColourSample {
    /// RGB, channels in [0, 1]
    pub colour: [Real; 3],
    pub value: Real,
}

/// Which way the long axis of a colour-bar strip runs. Vertical strips are
/// read bottom-up so the first sample is the range minimum, matching the
/// usual legend layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StripOrientation {
    Horizontal,
    Vertical,
}

/// Ordered (colour, value) samples spanning exactly a declared value range.
///
/// Monotonic in sampling position; not necessarily monotonic in value
/// distance for diverging ramps, which is why inverse lookup works on ramp
/// positions rather than values.
#[derive(Clone, Debug, PartialEq)]
pub struct ColourMap {
    samples: Vec<ColourSample>,
}

impl ColourMap {
    /// Evaluate a named ramp at `n_samples` even positions across
    /// `[value_min, value_max]`.
    pub fn from_named_ramp(
        ramp: NamedRamp,
        n_samples: usize,
        value_min: Real,
        value_max: Real,
    ) -> ContourResult<Self> {
        check_range(value_min, value_max)?;
        if n_samples < 2 {
            return Err(ContourError::Config {
                what: format!("colour map needs at least 2 samples, got {n_samples}"),
            });
        }
        let samples = (0..n_samples)
            .map(|i| {
                let t = i as Real / (n_samples - 1) as Real;
                ColourSample {
                    colour: ramp.eval(t),
                    // last sample pinned so the map spans exactly [min, max]
                    value: if i == n_samples - 1 {
                        value_max
                    } else {
                        value_min + t * (value_max - value_min)
                    },
                }
            })
            .collect();
        Ok(Self { samples })
    }

    /// Read a colour-bar legend strip: one sample per pixel along the long
    /// axis (averaged across the short axis), values linear across
    /// `[value_min, value_max]`. The caller has already located the strip.
    pub fn from_image_strip(
        strip: &RgbImage,
        orientation: StripOrientation,
        value_min: Real,
        value_max: Real,
    ) -> ContourResult<Self> {
        check_range(value_min, value_max)?;
        let (w, h) = strip.dimensions();
        let long = match orientation {
            StripOrientation::Horizontal => w,
            StripOrientation::Vertical => h,
        } as usize;
        if long < 2 {
            return Err(ContourError::Degenerate {
                what: format!("colour-bar strip of length {long} along its long axis"),
            });
        }

        let mut samples = Vec::with_capacity(long);
        for i in 0..long {
            let colour = match orientation {
                StripOrientation::Horizontal => column_mean(strip, i as u32),
                // read bottom-up: legend minimum sits at the bottom
                StripOrientation::Vertical => row_mean(strip, h - 1 - i as u32),
            };
            let t = i as Real / (long - 1) as Real;
            samples.push(ColourSample {
                colour,
                value: if i == long - 1 {
                    value_max
                } else {
                    value_min + t * (value_max - value_min)
                },
            });
        }

        let spread = samples
            .iter()
            .map(|s| colour_distance(s.colour, samples[0].colour))
            .fold(0.0, Real::max);
        if spread < MIN_GRADIENT {
            return Err(ContourError::Degenerate {
                what: "colour-bar strip has no discernible gradient".to_string(),
            });
        }

        Ok(Self { samples })
    }

    pub fn samples(&self) -> &[ColourSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Declared value range (first and last sample).
    pub fn value_range(&self) -> (Real, Real) {
        (
            self.samples.first().expect("at least 2 samples").value,
            self.samples.last().expect("at least 2 samples").value,
        )
    }

    /// Colour for a value, interpolated along the ramp position. Values
    /// outside the declared range clamp to the end colours.
    pub fn colour_for_value(&self, value: Real) -> [Real; 3] {
        let (vmin, vmax) = self.value_range();
        let t = ((value - vmin) / (vmax - vmin)).clamp(0.0, 1.0);
        let scaled = t * (self.samples.len() - 1) as Real;
        let lo = (scaled.floor() as usize).min(self.samples.len() - 2);
        let frac = scaled - lo as Real;
        let a = self.samples[lo].colour;
        let b = self.samples[lo + 1].colour;
        [
            a[0] + (b[0] - a[0]) * frac,
            a[1] + (b[1] - a[1]) * frac,
            a[2] + (b[2] - a[2]) * frac,
        ]
    }
}

fn check_range(value_min: Real, value_max: Real) -> ContourResult<()> {
    if !value_min.is_finite() || !value_max.is_finite() || value_min >= value_max {
        return Err(ContourError::Config {
            what: format!("value range [{value_min}, {value_max}] must be finite and increasing"),
        });
    }
    Ok(())
}

/// Euclidean distance in unit-channel RGB; the working metric for all
/// inverse lookups.
pub(crate) fn colour_distance(a: [Real; 3], b: [Real; 3]) -> Real {
    let d0 = a[0] - b[0];
    let d1 = a[1] - b[1];
    let d2 = a[2] - b[2];
    (d0 * d0 + d1 * d1 + d2 * d2).sqrt()
}

pub(crate) fn pixel_to_unit(p: &image::Rgb<u8>) -> [Real; 3] {
    [
        p.0[0] as Real / 255.0,
        p.0[1] as Real / 255.0,
        p.0[2] as Real / 255.0,
    ]
}

pub(crate) fn unit_to_pixel(c: [Real; 3]) -> image::Rgb<u8> {
    image::Rgb([
        (c[0].clamp(0.0, 1.0) * 255.0).round() as u8,
        (c[1].clamp(0.0, 1.0) * 255.0).round() as u8,
        (c[2].clamp(0.0, 1.0) * 255.0).round() as u8,
    ])
}

fn column_mean(img: &RgbImage, x: u32) -> [Real; 3] {
    let h = img.height();
    let mut acc = [0.0; 3];
    for y in 0..h {
        let c = pixel_to_unit(img.get_pixel(x, y));
        for k in 0..3 {
            acc[k] += c[k];
        }
    }
    acc.map(|v| v / h as Real)
}

fn row_mean(img: &RgbImage, y: u32) -> [Real; 3] {
    let w = img.width();
    let mut acc = [0.0; 3];
    for x in 0..w {
        let c = pixel_to_unit(img.get_pixel(x, y));
        for k in 0..3 {
            acc[k] += c[k];
        }
    }
    acc.map(|v| v / w as Real)
}
