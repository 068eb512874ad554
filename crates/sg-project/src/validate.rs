//! Case validation: every check names the offending field.

use crate::error::{ProjectError, ProjectResult};
use crate::schema::{CaseDef, ContourPlotDef, InletDef};
use sg_contour::NamedRamp;
use sg_field::VortexModel;

const CURRENT_VERSION: u32 = 1;
const SUPPORTED_FORMATS: &[&str] = &["su2"];

fn fail(what: impl Into<String>) -> ProjectError {
    ProjectError::Validation { what: what.into() }
}

/// Validate a parsed case before compiling it.
pub fn validate(case: &CaseDef) -> ProjectResult<()> {
    if case.version != CURRENT_VERSION {
        return Err(fail(format!(
            "version: expected {CURRENT_VERSION}, got {}",
            case.version
        )));
    }
    if !SUPPORTED_FORMATS.contains(&case.output.format.as_str()) {
        return Err(fail(format!(
            "output.format: '{}' not supported (supported: {})",
            case.output.format,
            SUPPORTED_FORMATS.join(", ")
        )));
    }

    match case.inlet {
        InletDef::Circle {
            radius,
            x_cells,
            y_cells,
        } => {
            if !radius.is_finite() || radius <= 0.0 {
                return Err(fail(format!("inlet.radius: must be positive, got {radius}")));
            }
            check_cells(x_cells, y_cells)?;
        }
        InletDef::Rect {
            x_side,
            y_side,
            x_cells,
            y_cells,
        } => {
            if !x_side.is_finite() || x_side <= 0.0 || !y_side.is_finite() || y_side <= 0.0 {
                return Err(fail(format!(
                    "inlet side lengths: must be positive, got {x_side} x {y_side}"
                )));
            }
            check_cells(x_cells, y_cells)?;
        }
    }

    if case.vortex.is_none() && case.contour.is_none() {
        return Err(fail(
            "case needs a vortex section or a contour section (or both)",
        ));
    }

    if let Some(vortex) = &case.vortex {
        vortex
            .model
            .parse::<VortexModel>()
            .map_err(|e| fail(format!("vortex.model: {e}")))?;
        if vortex.vortices.is_empty() {
            return Err(fail("vortex.vortices: at least one vortex must be defined"));
        }
        for (i, v) in vortex.vortices.iter().enumerate() {
            if !v.core_radius.is_finite() || v.core_radius <= 0.0 {
                return Err(fail(format!(
                    "vortex.vortices[{i}].core_radius: must be positive, got {}",
                    v.core_radius
                )));
            }
            if !v.strength.is_finite() || !v.center.iter().all(|c| c.is_finite()) {
                return Err(fail(format!("vortex.vortices[{i}]: non-finite parameter")));
            }
        }
        if !vortex.axial_velocity.is_finite() {
            return Err(fail("vortex.axial_velocity: must be finite"));
        }
    }

    if let Some(contour) = &case.contour {
        check_plot(&contour.tangential, "contour.tangential")?;
        check_plot(&contour.radial, "contour.radial")?;
        if !contour.axial_velocity.is_finite() {
            return Err(fail("contour.axial_velocity: must be finite"));
        }
    }

    if let Some(bl) = &case.boundary_layer {
        if !bl.ref_length.is_finite() || bl.ref_length <= 0.0 {
            return Err(fail(format!(
                "boundary_layer.ref_length: must be positive, got {}",
                bl.ref_length
            )));
        }
    }

    Ok(())
}

fn check_cells(x_cells: u32, y_cells: u32) -> ProjectResult<()> {
    if x_cells == 0 || y_cells == 0 {
        return Err(fail("inlet cell counts: must be at least 1"));
    }
    Ok(())
}

fn check_plot(plot: &ContourPlotDef, section: &str) -> ProjectResult<()> {
    let [lo, hi] = plot.value_range;
    if !lo.is_finite() || !hi.is_finite() || lo >= hi {
        return Err(fail(format!(
            "{section}.value_range: must be finite and increasing, got [{lo}, {hi}]"
        )));
    }
    for (axis, [a, b]) in [("x_extent", plot.x_extent), ("y_extent", plot.y_extent)] {
        if !a.is_finite() || !b.is_finite() || a >= b {
            return Err(fail(format!(
                "{section}.{axis}: must be finite and increasing, got [{a}, {b}]"
            )));
        }
    }
    match (&plot.ramp, &plot.colour_bar) {
        (None, None) => Err(fail(format!(
            "{section}: needs a ramp name or a colour_bar region"
        ))),
        (Some(ramp), _) => {
            ramp.parse::<NamedRamp>()
                .map_err(|e| fail(format!("{section}.ramp: {e}")))?;
            Ok(())
        }
        (None, Some(bar)) => {
            if bar.region.width == 0 || bar.region.height == 0 {
                return Err(fail(format!("{section}.colour_bar: degenerate region")));
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_case;

    fn base_case() -> String {
        r#"
version: 1
name: test
output: { filename: out.dat }
inlet: { shape: circle, radius: 0.5, x_cells: 10, y_cells: 10 }
vortex:
  model: solid
  vortices:
    - { center: [0.0, 0.0], strength: 15.0, core_radius: 0.5 }
"#
        .to_string()
    }

    #[test]
    fn valid_case_passes() {
        let case = parse_case(&base_case()).unwrap();
        validate(&case).unwrap();
    }

    #[test]
    fn unsupported_format_names_the_field() {
        let text = base_case().replace("filename: out.dat", "filename: out.dat, format: cgns");
        let case = parse_case(&text).unwrap();
        let err = validate(&case).unwrap_err();
        assert!(format!("{err}").contains("output.format"));
    }

    #[test]
    fn unknown_vortex_model_is_reported() {
        let text = base_case().replace("model: solid", "model: rankine");
        let case = parse_case(&text).unwrap();
        let err = validate(&case).unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("vortex.model") && msg.contains("rankine"));
    }

    #[test]
    fn non_positive_core_radius_is_reported_with_index() {
        let text = base_case().replace("core_radius: 0.5", "core_radius: 0.0");
        let case = parse_case(&text).unwrap();
        let err = validate(&case).unwrap_err();
        assert!(format!("{err}").contains("vortices[0].core_radius"));
    }

    #[test]
    fn empty_vortex_list_is_rejected() {
        let text = r#"
version: 1
name: test
output: { filename: out.dat }
inlet: { shape: circle, radius: 0.5, x_cells: 10, y_cells: 10 }
vortex:
  model: lo
"#;
        let case = parse_case(text).unwrap();
        let err = validate(&case).unwrap_err();
        assert!(format!("{err}").contains("at least one vortex"));
    }

    #[test]
    fn method_free_case_is_rejected() {
        let text = r#"
version: 1
name: test
output: { filename: out.dat }
inlet: { shape: circle, radius: 0.5, x_cells: 10, y_cells: 10 }
"#;
        let case = parse_case(text).unwrap();
        assert!(validate(&case).is_err());
    }

    #[test]
    fn contour_needs_ramp_or_colour_bar() {
        let text = r#"
version: 1
name: test
output: { filename: out.dat }
inlet: { shape: rect, x_side: 1.0, y_side: 1.0, x_cells: 8, y_cells: 8 }
contour:
  tangential:
    image: tan.png
    value_range: [-30.0, 30.0]
    x_extent: [-0.5, 0.5]
    y_extent: [-0.5, 0.5]
  radial:
    image: rad.png
    value_range: [-10.0, 10.0]
    ramp: jet
    x_extent: [-0.5, 0.5]
    y_extent: [-0.5, 0.5]
"#;
        let case = parse_case(text).unwrap();
        let err = validate(&case).unwrap_err();
        assert!(format!("{err}").contains("contour.tangential"));
    }
}
