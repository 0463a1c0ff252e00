use bevy::prelude::*;
use hex_core::core::{Mark, HEX_SIZE};

use super::{CELL_GAP, OUTLINE_WIDTH};
use crate::settings::Palette;

/// Meshes shared by all tiles.
#[derive(Debug, Resource)]
pub struct HexMeshes {
    fill: Handle<Mesh>,
    outline: Handle<Mesh>,
}

impl HexMeshes {
    pub fn fill(&self) -> Handle<Mesh> {
        self.fill.clone()
    }

    pub fn outline(&self) -> Handle<Mesh> {
        self.outline.clone()
    }
}

impl FromWorld for HexMeshes {
    fn from_world(world: &mut World) -> Self {
        let mut meshes = world.resource_mut::<Assets<Mesh>>();
        Self {
            fill: meshes.add(RegularPolygon::new(HEX_SIZE - CELL_GAP - OUTLINE_WIDTH, 6)),
            outline: meshes.add(RegularPolygon::new(HEX_SIZE - CELL_GAP, 6)),
        }
    }
}

/// One material per mark plus the outline, built from the [`Palette`].
#[derive(Debug, Resource)]
pub struct CellMaterials {
    empty: Handle<ColorMaterial>,
    x: Handle<ColorMaterial>,
    o: Handle<ColorMaterial>,
    outline: Handle<ColorMaterial>,
}

impl CellMaterials {
    pub fn mark(&self, mark: Mark) -> Handle<ColorMaterial> {
        match mark {
            Mark::Empty => self.empty.clone(),
            Mark::X => self.x.clone(),
            Mark::O => self.o.clone(),
        }
    }

    pub fn outline(&self) -> Handle<ColorMaterial> {
        self.outline.clone()
    }
}

impl FromWorld for CellMaterials {
    fn from_world(world: &mut World) -> Self {
        let palette = world.resource::<Palette>().clone();
        let mut materials = world.resource_mut::<Assets<ColorMaterial>>();
        Self {
            empty: materials.add(palette.mark(Mark::Empty)),
            x: materials.add(palette.mark(Mark::X)),
            o: materials.add(palette.mark(Mark::O)),
            outline: materials.add(palette.outline),
        }
    }
}
