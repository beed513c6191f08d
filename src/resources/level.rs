//! Level data loaded from a Tiled JSON map.
//!
//! Only the parts of the map the game uses are kept:
//!
//! - the tile layer named [`GROUND_LAYER`], as a grid of [`TileCell`]s. A cell
//!   is solid when its tileset entry carries the boolean custom property
//!   `collides = true`;
//! - the object layer named [`OBJECTS_LAYER`], as a list of [`LevelObject`]s
//!   (spawn marker, coins, exits).
//!
//! Tiled stores flip and rotation flags in the top four bits of every gid;
//! they are masked out. Tile frames are indices into the first
//! (embedded) tileset. External `.tsx` tilesets are not supported.
//!
//! The level is loaded once during setup and never changes afterwards.

use std::path::Path;

use bevy_ecs::prelude::Resource;
use log::{info, warn};
use serde::Deserialize;

pub const GROUND_LAYER: &str = "Ground-n-Platforms";
pub const OBJECTS_LAYER: &str = "Objects";
pub const SPAWN_OBJECT: &str = "Spawn";
pub const COIN_OBJECT: &str = "coin";
pub const EXIT_OBJECT: &str = "Exit";

const COLLIDES_PROPERTY: &str = "collides";
const GID_MASK: u32 = 0x0FFF_FFFF;

// ---------------------------------------------------------------------------
// Tiled JSON
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct TiledMap {
    pub width: u32,
    pub height: u32,
    #[serde(rename = "tilewidth")]
    pub tile_width: u32,
    #[serde(rename = "tileheight")]
    pub tile_height: u32,
    pub layers: Vec<TiledLayer>,
    #[serde(default)]
    pub tilesets: Vec<TiledTileset>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum TiledLayer {
    #[serde(rename = "tilelayer")]
    Tiles {
        name: String,
        width: u32,
        height: u32,
        data: Vec<u32>,
    },
    #[serde(rename = "objectgroup")]
    Objects {
        name: String,
        objects: Vec<TiledObject>,
    },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
pub struct TiledObject {
    #[serde(default)]
    pub name: String,
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub gid: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct TiledTileset {
    pub firstgid: u32,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub columns: u32,
    #[serde(default)]
    pub tiles: Vec<TiledTile>,
}

#[derive(Debug, Deserialize)]
pub struct TiledTile {
    pub id: u32,
    #[serde(default)]
    pub properties: Vec<TiledProperty>,
}

#[derive(Debug, Deserialize)]
pub struct TiledProperty {
    pub name: String,
    pub value: serde_json::Value,
}

// ---------------------------------------------------------------------------
// Level
// ---------------------------------------------------------------------------

/// A non-empty cell of the ground layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileCell {
    /// Frame index inside the tileset sheet.
    pub frame: u32,
    pub solid: bool,
}

/// A placed object of the objects layer.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelObject {
    pub name: String,
    pub x: f32,
    pub y: f32,
    /// Tileset frame for tile objects; `None` for plain markers.
    pub frame: Option<u32>,
}

#[derive(Resource, Debug, Clone)]
pub struct Level {
    /// Size in tiles.
    pub width: u32,
    pub height: u32,
    /// Tile size in pixels.
    pub tile_width: u32,
    pub tile_height: u32,
    /// Row-major cells of the ground layer.
    pub tiles: Vec<Option<TileCell>>,
    /// Columns of the tileset sheet, for frame → source rectangle lookups.
    pub tileset_columns: u32,
    pub objects: Vec<LevelObject>,
}

impl Level {
    /// Read and parse a Tiled JSON map from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read level {:?}: {}", path, e))?;
        let level =
            Self::from_json_str(&text).map_err(|e| format!("Invalid level {:?}: {}", path, e))?;
        info!(
            "Loaded level {:?}: {}x{} tiles of {}x{} px, {} objects",
            path,
            level.width,
            level.height,
            level.tile_width,
            level.tile_height,
            level.objects.len()
        );
        Ok(level)
    }

    pub fn from_json_str(text: &str) -> Result<Self, String> {
        let map: TiledMap =
            serde_json::from_str(text).map_err(|e| format!("Tiled JSON error: {}", e))?;
        Self::from_tiled(map)
    }

    /// Build the level from a parsed map. Fails on a zero tile size, and when
    /// the ground layer, the objects layer, the spawn marker or every exit is
    /// missing.
    pub fn from_tiled(map: TiledMap) -> Result<Self, String> {
        if map.tile_width == 0 || map.tile_height == 0 {
            return Err(format!(
                "Invalid tile size {}x{}",
                map.tile_width, map.tile_height
            ));
        }
        let tileset = map
            .tilesets
            .first()
            .ok_or_else(|| "Map has no tileset".to_string())?;
        if let Some(source) = &tileset.source {
            return Err(format!("External tileset '{}' is not supported", source));
        }
        if map.tilesets.len() > 1 {
            warn!(
                "Map has {} tilesets, only the first one is used",
                map.tilesets.len()
            );
        }
        let firstgid = tileset.firstgid;
        let solid_ids: Vec<u32> = tileset
            .tiles
            .iter()
            .filter(|t| {
                t.properties
                    .iter()
                    .any(|p| p.name == COLLIDES_PROPERTY && p.value == serde_json::Value::Bool(true))
            })
            .map(|t| t.id)
            .collect();

        let mut ground = None;
        let mut objects = None;
        for layer in &map.layers {
            match layer {
                TiledLayer::Tiles {
                    name,
                    width,
                    height,
                    data,
                } if name == GROUND_LAYER => ground = Some((*width, *height, data)),
                TiledLayer::Objects { name, objects: o } if name == OBJECTS_LAYER => {
                    objects = Some(o)
                }
                _ => {}
            }
        }
        let (width, height, data) =
            ground.ok_or_else(|| format!("Missing tile layer '{}'", GROUND_LAYER))?;
        let objects = objects.ok_or_else(|| format!("Missing object layer '{}'", OBJECTS_LAYER))?;

        if data.len() != (width * height) as usize {
            return Err(format!(
                "Layer '{}' has {} cells, expected {}x{}",
                GROUND_LAYER,
                data.len(),
                width,
                height
            ));
        }

        let tiles = data
            .iter()
            .map(|&raw| {
                let gid = raw & GID_MASK;
                if gid < firstgid || gid == 0 {
                    return None;
                }
                let frame = gid - firstgid;
                Some(TileCell {
                    frame,
                    solid: solid_ids.contains(&frame),
                })
            })
            .collect();

        let objects: Vec<LevelObject> = objects
            .iter()
            .map(|o| LevelObject {
                name: o.name.clone(),
                x: o.x,
                y: o.y,
                frame: o
                    .gid
                    .map(|g| g & GID_MASK)
                    .filter(|&g| g >= firstgid && g != 0)
                    .map(|g| g - firstgid),
            })
            .collect();

        let level = Level {
            width,
            height,
            tile_width: map.tile_width,
            tile_height: map.tile_height,
            tiles,
            tileset_columns: tileset.columns.max(1),
            objects,
        };

        if level.find_object(SPAWN_OBJECT).is_none() {
            return Err(format!("Missing '{}' object", SPAWN_OBJECT));
        }
        if level.tile_objects_named(EXIT_OBJECT).next().is_none() {
            return Err(format!("Missing '{}' tile object", EXIT_OBJECT));
        }
        Ok(level)
    }

    pub fn width_px(&self) -> f32 {
        (self.width * self.tile_width) as f32
    }

    pub fn height_px(&self) -> f32 {
        (self.height * self.tile_height) as f32
    }

    /// Cell at tile coordinates; `None` outside the map or for empty cells.
    pub fn cell(&self, tx: i32, ty: i32) -> Option<TileCell> {
        if tx < 0 || ty < 0 || tx >= self.width as i32 || ty >= self.height as i32 {
            return None;
        }
        self.tiles[(ty as u32 * self.width + tx as u32) as usize]
    }

    pub fn is_solid(&self, tx: i32, ty: i32) -> bool {
        self.cell(tx, ty).is_some_and(|c| c.solid)
    }

    /// Iterate `(tx, ty, cell)` over the non-empty cells.
    pub fn iter_tiles(&self) -> impl Iterator<Item = (u32, u32, TileCell)> + '_ {
        self.tiles.iter().enumerate().filter_map(|(i, cell)| {
            cell.map(|c| (i as u32 % self.width, i as u32 / self.width, c))
        })
    }

    /// Top-left of a tileset frame inside the sheet, in pixels.
    pub fn frame_origin(&self, frame: u32) -> (f32, f32) {
        let col = frame % self.tileset_columns;
        let row = frame / self.tileset_columns;
        (
            (col * self.tile_width) as f32,
            (row * self.tile_height) as f32,
        )
    }

    /// First object with the given name.
    pub fn find_object(&self, name: &str) -> Option<&LevelObject> {
        self.objects.iter().find(|o| o.name == name)
    }

    /// Objects with the given name that reference a tile.
    pub fn tile_objects_named<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a LevelObject> + 'a {
        self.objects
            .iter()
            .filter(move |o| o.name == name && o.frame.is_some())
    }

    /// Bottom-centre pivot of a tile object.
    pub fn object_pivot(&self, object: &LevelObject) -> (f32, f32) {
        (object.x + self.tile_width as f32 * 0.5, object.y)
    }
}
