//! SU2 inlet-profile writer.
//!
//! Emits the complete, ordered per-node velocity records as an SU2 profile
//! file: a NMARK/MARKER_TAG/NROW/NCOL header followed by one whitespace
//! separated numeric row per node. The inlet plane sits at z = 0.

use crate::error::{BcError, BcResult};
use sg_field::VelocityField;
use sg_mesh::MeshNode;
use std::fmt::Write as _;
use std::path::Path;

const NCOL: usize = 6;

/// Render the profile file contents.
pub fn format_su2_inlet(
    marker: &str,
    nodes: &[MeshNode],
    field: &VelocityField,
) -> BcResult<String> {
    if field.len() != nodes.len() {
        return Err(BcError::Mismatch {
            what: "su2 inlet profile",
            field_len: field.len(),
            nodes_len: nodes.len(),
        });
    }

    let mut out = String::new();
    writeln!(out, "NMARK= 1").expect("string write");
    writeln!(out, "MARKER_TAG= {marker}").expect("string write");
    writeln!(out, "NROW= {}", nodes.len()).expect("string write");
    writeln!(out, "NCOL= {NCOL}").expect("string write");
    for (node, vel) in nodes.iter().zip(field.values()) {
        writeln!(
            out,
            "{:.10e}\t{:.10e}\t{:.10e}\t{:.10e}\t{:.10e}\t{:.10e}",
            node.position.x, node.position.y, 0.0, vel.x, vel.y, vel.z
        )
        .expect("string write");
    }
    Ok(out)
}

/// Write the profile file to disk.
pub fn write_su2_inlet(
    path: &Path,
    marker: &str,
    nodes: &[MeshNode],
    field: &VelocityField,
) -> BcResult<()> {
    let contents = format_su2_inlet(marker, nodes, field)?;
    std::fs::write(path, contents)?;
    Ok(())
}
