//! Integration test: render-then-digitize round trip.
//!
//! A synthetic swirl-angle field rendered through a known ramp and digitized
//! back with the same ramp must reproduce the original values within the
//! colour-map sampling resolution.

use image::Rgb;
use nalgebra::Point2;
use sg_contour::{ColourMap, DigitizerOptions, NamedRamp, PlotAxes, digitize, render_field};
use sg_core::{NodeId, Real};
use sg_field::ScalarField;
use sg_mesh::{InletShape, MeshNode, structured_nodes};

fn synthetic_angles(nodes: &[MeshNode]) -> ScalarField {
    // a smooth profile spanning most of the declared range
    ScalarField::new(
        nodes
            .iter()
            .map(|n| 25.0 * (n.position.x + n.position.y))
            .collect(),
    )
}

fn round_trip(ramp: NamedRamp, max_err: Real) {
    let nodes = structured_nodes(InletShape::Rect { x_side: 1.0, y_side: 1.0 }, 12, 12).unwrap();
    let original = synthetic_angles(&nodes);

    let map = ColourMap::from_named_ramp(ramp, 128, -30.0, 30.0).unwrap();
    let axes = PlotAxes::full_image((-0.5, 0.5), (-0.5, 0.5), 260, 260).unwrap();
    let image = render_field(
        &nodes,
        &original,
        &map,
        &axes,
        260,
        260,
        Rgb([255, 255, 255]),
        6,
    )
    .unwrap();

    let recovered = digitize(&image, &map, &axes, &nodes, &DigitizerOptions::default()).unwrap();

    for (a, b) in original.values().iter().zip(recovered.values()) {
        assert!(
            (a - b).abs() <= max_err,
            "{ramp:?}: expected {a}, digitized {b}"
        );
    }
}

#[test]
fn viridis_round_trip_recovers_the_field() {
    // 128 samples over a 60 degree range: ~0.5 degree resolution, plus
    // 8-bit quantization slack
    round_trip(NamedRamp::Viridis, 1.0);
}

#[test]
fn jet_round_trip_recovers_the_field() {
    round_trip(NamedRamp::Jet, 1.0);
}

#[test]
fn strip_extracted_map_round_trips_against_its_ramp() {
    // build the map from a rendered legend strip instead of the ramp itself
    let mut strip = image::RgbImage::new(6, 120);
    for y in 0..120 {
        let t = (119 - y) as Real / 119.0;
        let c = NamedRamp::Viridis.eval(t);
        let px = Rgb([
            (c[0] * 255.0).round() as u8,
            (c[1] * 255.0).round() as u8,
            (c[2] * 255.0).round() as u8,
        ]);
        for x in 0..6 {
            strip.put_pixel(x, y, px);
        }
    }
    let from_strip =
        ColourMap::from_image_strip(&strip, sg_contour::StripOrientation::Vertical, -30.0, 30.0)
            .unwrap();

    let nodes: Vec<MeshNode> = (0..5)
        .map(|i| {
            MeshNode::new(
                NodeId::from_index(i),
                Point2::new(-0.4 + 0.2 * i as Real, 0.1),
                None,
            )
        })
        .collect();
    let original = synthetic_angles(&nodes);

    let axes = PlotAxes::full_image((-0.5, 0.5), (-0.5, 0.5), 120, 120).unwrap();
    let image = render_field(
        &nodes,
        &original,
        &from_strip,
        &axes,
        120,
        120,
        Rgb([255, 255, 255]),
        4,
    )
    .unwrap();
    let recovered =
        digitize(&image, &from_strip, &axes, &nodes, &DigitizerOptions::default()).unwrap();

    for (a, b) in original.values().iter().zip(recovered.values()) {
        assert!((a - b).abs() <= 1.0, "expected {a}, digitized {b}");
    }
}
