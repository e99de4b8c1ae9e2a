//! Scene file reader.

use std::path::Path;

use crate::error::SceneError;
use crate::parser::{ParsedScene, SceneParser};

/// Read a scene from a path.
///
/// # Arguments
///
/// * `path` - Path to the scene file
pub fn read_scene(path: impl AsRef<Path>) -> Result<ParsedScene, SceneError> {
    let data = std::fs::read(path)?;
    read_scene_from_buffer(&data)
}

/// Read a scene from a byte buffer.
pub fn read_scene_from_buffer(data: &[u8]) -> Result<ParsedScene, SceneError> {
    SceneParser::parse(data)
}
