//! Level data and entity wiring.
//!
//! A level is a flat list of named nodes, as exported from the scene editor.
//! The node name decides what the spawned entity can do:
//!
//! | name              | spawned as                                      |
//! |-------------------|-------------------------------------------------|
//! | `player`          | piece + obstacle + player                       |
//! | `two*`, `three*`  | piece + obstacle                                |
//! | `stop*`           | wall (obstacle)                                 |
//! | `target`          | target                                          |
//! | `text*`           | instruction text                                |
//! | anything else     | not spawned                                     |
//!
//! A child node named `smoke` becomes a smoke emitter stuck to its parent.
//!
//! # JSON Format
//!
//! ```json
//! {
//!   "name": "rush hour",
//!   "nodes": [
//!     { "name": "player", "position": [2.5, 0.5, 1.0], "size": [1.0, 1.0, 2.0],
//!       "children": [ { "name": "smoke", "position": [0.0, 0.5, -1.0] } ] },
//!     { "name": "two.001", "position": [0.5, 0.5, 3.0], "size": [1.0, 1.0, 2.0], "yaw": 90.0 },
//!     { "name": "text.001", "position": [0.0, 3.0, 0.0], "text": "Arrows: select, Enter: move" }
//!   ]
//! }
//! ```
//!
//! Positions are box centers; `size` is the world-space extent of the box,
//! already accounting for the node's yaw.

use std::path::Path;

use bevy_ecs::prelude::*;
use glam::Vec3;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::components::boxcollider::BoxCollider;
use crate::components::dynamictext::DynamicText;
use crate::components::mapposition::MapPosition;
use crate::components::nodename::NodeName;
use crate::components::piece::Piece;
use crate::components::rotation::Rotation;
use crate::components::smoke::{EMIT_INTERVAL, SmokeEmitter};
use crate::components::stuckto::StuckTo;
use crate::components::tags::{Instruction, Obstacle, Player, Target};
use crate::error::PuzzleError;
use crate::resources::puzzlerng::PuzzleRng;

const EMITTER_NODE: &str = "smoke";

/// What a level node turns into, derived from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeRole {
    Player,
    Piece,
    Wall,
    Target,
    Instruction,
    Scenery,
}

impl NodeRole {
    pub fn from_name(name: &str) -> Self {
        if name == "player" {
            NodeRole::Player
        } else if name.starts_with("two") || name.starts_with("three") {
            NodeRole::Piece
        } else if name.starts_with("stop") {
            NodeRole::Wall
        } else if name == "target" {
            NodeRole::Target
        } else if name.starts_with("text") {
            NodeRole::Instruction
        } else {
            NodeRole::Scenery
        }
    }
}

fn unit_size() -> Vec3 {
    Vec3::ONE
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LevelNode {
    pub name: String,
    pub position: Vec3,
    #[serde(default = "unit_size")]
    pub size: Vec3,
    /// Yaw in degrees.
    #[serde(default)]
    pub yaw: f32,
    #[serde(default)]
    pub text: Option<String>,
    /// Child positions are relative to this node.
    #[serde(default)]
    pub children: Vec<LevelNode>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LevelData {
    #[serde(default)]
    pub name: String,
    pub nodes: Vec<LevelNode>,
}

/// Counts of what [`spawn_level`] created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelSummary {
    pub pieces: usize,
    pub walls: usize,
    pub targets: usize,
    pub instructions: usize,
    pub emitters: usize,
}

impl LevelData {
    /// Loads level data from a JSON file at the specified path.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, PuzzleError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| PuzzleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| PuzzleError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Spawn one entity per meaningful node of `level` into `world`.
///
/// Emitters draw their first countdown from the world's [`PuzzleRng`],
/// which is created from entropy if the world has none yet.
pub fn spawn_level(world: &mut World, level: &LevelData) -> LevelSummary {
    let mut summary = LevelSummary::default();

    for node in &level.nodes {
        let role = NodeRole::from_name(&node.name);
        let base = (
            NodeName::new(node.name.clone()),
            MapPosition::from_vec(node.position),
        );
        let collider = BoxCollider::centered(node.size);
        let rotation = Rotation::new(node.yaw);

        let entity = match role {
            NodeRole::Player => {
                summary.pieces += 1;
                world
                    .spawn((base, collider, rotation, Piece::new(), Obstacle, Player))
                    .id()
            }
            NodeRole::Piece => {
                summary.pieces += 1;
                world
                    .spawn((base, collider, rotation, Piece::new(), Obstacle))
                    .id()
            }
            NodeRole::Wall => {
                summary.walls += 1;
                world.spawn((base, collider, rotation, Obstacle)).id()
            }
            NodeRole::Target => {
                summary.targets += 1;
                world.spawn((base, collider, Target)).id()
            }
            NodeRole::Instruction => {
                summary.instructions += 1;
                let text = DynamicText::new(node.text.clone().unwrap_or_default());
                world.spawn((base, text, Instruction)).id()
            }
            NodeRole::Scenery => {
                debug!("Skipping scenery node '{}'", node.name);
                continue;
            }
        };

        for child in node.children.iter().filter(|c| c.name == EMITTER_NODE) {
            let ttl = world
                .get_resource_or_insert_with(PuzzleRng::default)
                .range_f32(EMIT_INTERVAL);
            world.spawn((
                NodeName::new(format!("{}/{}", node.name, child.name)),
                MapPosition::from_vec(node.position + child.position),
                SmokeEmitter::new(ttl),
                StuckTo::new(entity).with_offset(child.position),
            ));
            summary.emitters += 1;
        }
    }

    info!(
        "Spawned level '{}': {} pieces, {} walls, {} targets, {} instructions, {} emitters",
        level.name,
        summary.pieces,
        summary.walls,
        summary.targets,
        summary.instructions,
        summary.emitters
    );
    summary
}
