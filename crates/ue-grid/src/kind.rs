//! Names of the three fields the engine owns.

use std::fmt;

/// Which of the engine's grids an accessor refers to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GridKind {
    Resource,
    Traffic,
    Pollution,
}

impl GridKind {
    pub const ALL: [GridKind; 3] = [GridKind::Resource, GridKind::Traffic, GridKind::Pollution];
}

impl fmt::Display for GridKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GridKind::Resource  => "resource",
            GridKind::Traffic   => "traffic",
            GridKind::Pollution => "pollution",
        })
    }
}
