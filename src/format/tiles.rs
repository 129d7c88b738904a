//! Tiles document parsing.

use crate::format::error::LoadError;
use crate::model::Tile;

/// Parse the tiles document: a JSON array of `{file, bounds}` records.
pub fn parse_tiles(json: &str) -> Result<Vec<Tile>, LoadError> {
    let tiles: Vec<Tile> = serde_json::from_str(json)?;
    Ok(tiles)
}
