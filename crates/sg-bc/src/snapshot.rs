//! JSON snapshots of a computed field.
//!
//! Captures nodes, velocities, and the derived swirl-angle profile in one
//! self-describing document, so a run can be inspected or compared without
//! re-synthesizing. Load checks the format tag and internal consistency.

use crate::error::{BcError, BcResult};
use serde::{Deserialize, Serialize};
use sg_field::VelocityField;
use sg_mesh::MeshNode;
use std::path::Path;

const FORMAT_TAG: &str = "swirlgen/field-snapshot-v1";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SnapshotNode {
    pub id: u32,
    pub position: [f64; 2],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wall_distance: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldSnapshot {
    /// Format tag, checked on load
    pub format: String,
    /// Case name the field came from
    pub name: String,
    pub nodes: Vec<SnapshotNode>,
    /// Per-node (vx, vy, vz) [m/s], index-aligned with `nodes`
    pub velocities: Vec<[f64; 3]>,
    /// Per-node swirl angle [deg], index-aligned with `nodes`
    pub swirl_angle_deg: Vec<f64>,
}

impl FieldSnapshot {
    /// Capture a computed field together with its swirl-angle profile.
    pub fn capture(name: &str, nodes: &[MeshNode], field: &VelocityField) -> BcResult<Self> {
        if field.len() != nodes.len() {
            return Err(BcError::Mismatch {
                what: "field snapshot",
                field_len: field.len(),
                nodes_len: nodes.len(),
            });
        }
        let swirl = field.swirl_angle(nodes)?;
        Ok(Self {
            format: FORMAT_TAG.to_string(),
            name: name.to_string(),
            nodes: nodes
                .iter()
                .map(|n| SnapshotNode {
                    id: n.id.index(),
                    position: [n.position.x, n.position.y],
                    wall_distance: n.wall_distance,
                })
                .collect(),
            velocities: field.values().iter().map(|v| [v.x, v.y, v.z]).collect(),
            swirl_angle_deg: swirl.values().to_vec(),
        })
    }

    pub fn save(&self, path: &Path) -> BcResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn load(path: &Path) -> BcResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let snapshot: Self = serde_json::from_str(&text)?;
        snapshot.check()?;
        Ok(snapshot)
    }

    fn check(&self) -> BcResult<()> {
        if self.format != FORMAT_TAG {
            return Err(BcError::BadSnapshot {
                what: format!("unexpected format tag '{}'", self.format),
            });
        }
        if self.velocities.len() != self.nodes.len()
            || self.swirl_angle_deg.len() != self.nodes.len()
        {
            return Err(BcError::BadSnapshot {
                what: format!(
                    "inconsistent lengths: {} nodes, {} velocities, {} angles",
                    self.nodes.len(),
                    self.velocities.len(),
                    self.swirl_angle_deg.len()
                ),
            });
        }
        Ok(())
    }
}
