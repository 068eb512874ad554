use clap::{Parser, Subcommand};
use sg_bc::{FieldSnapshot, write_su2_inlet};
use sg_contour::DigitizerOptions;
use sg_field::{VelocityField, assemble, check_boundaries, synthesize};
use sg_mesh::MeshNode;
use sg_project::schema::{ContourPlotDef, InletDef};
use sg_project::{CaseDef, compile, load_case, validate};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Samples drawn from a named ramp when building a colour map.
const RAMP_SAMPLES: usize = 128;
/// Marker tag written into SU2 inlet profiles.
const INLET_MARKER: &str = "inlet";

#[derive(Parser)]
#[command(name = "sg-cli")]
#[command(about = "swirlgen - swirling inlet boundary condition generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate case file syntax and contents
    Validate {
        /// Path to the case YAML file
        case_path: PathBuf,
    },
    /// Print the generated inlet nodes
    Nodes {
        /// Path to the case YAML file
        case_path: PathBuf,
    },
    /// Generate the boundary condition from the vortex definitions
    Generate {
        /// Path to the case YAML file
        case_path: PathBuf,
        /// Boundary-layer reference length, overriding the case file
        #[arg(long)]
        bl: Option<f64>,
        /// Report wall through-flow of the synthesized field
        #[arg(long)]
        check_boundaries: bool,
        /// Also save a JSON field snapshot
        #[arg(long)]
        snapshot: Option<PathBuf>,
    },
    /// Reconstruct the boundary condition from contour-plot images
    Digitize {
        /// Path to the case YAML file
        case_path: PathBuf,
        /// Also save a JSON field snapshot
        #[arg(long)]
        snapshot: Option<PathBuf>,
        /// Render the digitized tangential angles back to an image for
        /// visual comparison against the source plot
        #[arg(long)]
        render_check: Option<PathBuf>,
    },
}

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Project(#[from] sg_project::ProjectError),

    #[error(transparent)]
    Field(#[from] sg_field::FieldError),

    #[error(transparent)]
    Contour(#[from] sg_contour::ContourError),

    #[error(transparent)]
    Bc(#[from] sg_bc::BcError),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("{what}")]
    Case { what: String },
}

type CliResult<T> = Result<T, CliError>;

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { case_path } => cmd_validate(&case_path),
        Commands::Nodes { case_path } => cmd_nodes(&case_path),
        Commands::Generate {
            case_path,
            bl,
            check_boundaries,
            snapshot,
        } => cmd_generate(&case_path, bl, check_boundaries, snapshot.as_deref()),
        Commands::Digitize {
            case_path,
            snapshot,
            render_check,
        } => cmd_digitize(&case_path, snapshot.as_deref(), render_check.as_deref()),
    }
}

fn load_valid_case(case_path: &Path) -> CliResult<CaseDef> {
    let case = load_case(case_path)?;
    validate::validate(&case)?;
    Ok(case)
}

fn cmd_validate(case_path: &Path) -> CliResult<()> {
    println!("Validating case: {}", case_path.display());
    load_valid_case(case_path)?;
    println!("✓ Case is valid");
    Ok(())
}

fn cmd_nodes(case_path: &Path) -> CliResult<()> {
    let case = load_valid_case(case_path)?;
    let nodes = compile::build_nodes(&case)?;

    println!("Inlet nodes for '{}': {}", case.name, nodes.len());
    for node in &nodes {
        match node.wall_distance {
            Some(d) => println!(
                "  {}  ({:.6}, {:.6})  wall={:.6}",
                node.id, node.position.x, node.position.y, d
            ),
            None => println!(
                "  {}  ({:.6}, {:.6})",
                node.id, node.position.x, node.position.y
            ),
        }
    }
    Ok(())
}

fn cmd_generate(
    case_path: &Path,
    bl_override: Option<f64>,
    check: bool,
    snapshot: Option<&Path>,
) -> CliResult<()> {
    let case = load_valid_case(case_path)?;
    let vortex_section = case.vortex.as_ref().ok_or_else(|| CliError::Case {
        what: format!(
            "generate needs a vortex section in {}",
            case_path.display()
        ),
    })?;

    let nodes = compile::build_nodes(&case)?;
    let vortices = compile::build_vortices(vortex_section)?;
    println!(
        "Synthesizing field: {} nodes, {} vortices ({})",
        nodes.len(),
        vortices.len(),
        vortex_section.model
    );

    let bl_ref_length = bl_override.or(case.boundary_layer.map(|bl| bl.ref_length));
    let field = synthesize(
        &vortices,
        &nodes,
        vortex_section.axial_velocity,
        bl_ref_length,
    )?;

    if check {
        report_boundaries(&case, &nodes, &field)?;
    }

    finish_run(&case, &nodes, &field, snapshot)
}

fn cmd_digitize(
    case_path: &Path,
    snapshot: Option<&Path>,
    render_check: Option<&Path>,
) -> CliResult<()> {
    let case = load_valid_case(case_path)?;
    let contour = case.contour.as_ref().ok_or_else(|| CliError::Case {
        what: format!(
            "digitize needs a contour section in {}",
            case_path.display()
        ),
    })?;

    let nodes = compile::build_nodes(&case)?;
    println!("Reconstructing field from contour plots: {} nodes", nodes.len());

    let tangential = digitize_plot(&contour.tangential, &nodes, "tangential")?;
    let radial = digitize_plot(&contour.radial, &nodes, "radial")?;

    if let Some(path) = render_check {
        render_self_check(&contour.tangential, &nodes, &tangential, path)?;
    }

    let field = assemble(
        Some(&tangential),
        Some(&radial),
        contour.axial_velocity,
        &nodes,
    )?;

    finish_run(&case, &nodes, &field, snapshot)
}

fn digitize_plot(
    plot: &ContourPlotDef,
    nodes: &[MeshNode],
    which: &str,
) -> CliResult<sg_field::ScalarField> {
    println!("  Digitizing {which} angles from {}", plot.image.display());
    let image = image::open(&plot.image)?.to_rgb8();
    let map = compile::build_colour_map(plot, &image, RAMP_SAMPLES)?;
    let axes = compile::build_axes(plot, &image)?;
    let angles = sg_contour::digitize(&image, &map, &axes, nodes, &DigitizerOptions::default())?;
    Ok(angles)
}

/// Paint the digitized angles back through the same colour map so the result
/// can be eyeballed against the source plot.
fn render_self_check(
    plot: &ContourPlotDef,
    nodes: &[MeshNode],
    angles: &sg_field::ScalarField,
    path: &Path,
) -> CliResult<()> {
    let image = image::open(&plot.image)?.to_rgb8();
    let map = compile::build_colour_map(plot, &image, RAMP_SAMPLES)?;
    let axes = compile::build_axes(plot, &image)?;
    let rendered = sg_contour::render_field(
        nodes,
        angles,
        &map,
        &axes,
        image.width(),
        image.height(),
        image::Rgb([255, 255, 255]),
        2,
    )?;
    rendered.save(path)?;
    println!("✓ Digitization self-check rendered to {}", path.display());
    Ok(())
}

fn report_boundaries(
    case: &CaseDef,
    nodes: &[MeshNode],
    field: &VelocityField,
) -> CliResult<()> {
    let shape = compile::inlet_shape(&case.inlet);
    // inspect nodes within half a cell of the wall
    let wall_tol = match case.inlet {
        InletDef::Circle {
            radius, x_cells, ..
        } => radius / x_cells as f64,
        InletDef::Rect {
            x_side, x_cells, ..
        } => x_side / x_cells as f64 / 2.0,
    };
    let report = check_boundaries(nodes, field, &shape, wall_tol, 1e-6)?;
    if report.ok {
        println!(
            "✓ Boundary check passed ({} wall nodes)",
            report.wall_nodes
        );
    } else {
        println!(
            "⚠ Boundary check: max wall-normal velocity {:.4e} at node {} ({} wall nodes)",
            report.max_normal_velocity,
            report
                .worst_node
                .map(|id| id.to_string())
                .unwrap_or_else(|| "-".to_string()),
            report.wall_nodes
        );
    }
    Ok(())
}

fn finish_run(
    case: &CaseDef,
    nodes: &[MeshNode],
    field: &VelocityField,
    snapshot: Option<&Path>,
) -> CliResult<()> {
    write_su2_inlet(&case.output.filename, INLET_MARKER, nodes, field)?;
    println!(
        "✓ Inlet BC written to {} ({} records)",
        case.output.filename.display(),
        field.len()
    );

    if let Some(path) = snapshot {
        let snap = FieldSnapshot::capture(&case.name, nodes, field)?;
        snap.save(path)?;
        println!("✓ Field snapshot saved to {}", path.display());
    }
    Ok(())
}
