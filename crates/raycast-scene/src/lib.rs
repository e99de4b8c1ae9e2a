#![warn(missing_docs)]

//! Scene description parser for the raycast renderer.
//!
//! Reads the JSON-like scene format (an array of camera, sphere and plane
//! objects) into a validated [`Scene`]. Parsing is a single pass with one
//! character of lookahead and stops at the first error, which always names
//! the line it was found on.
//!
//! # Example
//!
//! ```no_run
//! use raycast_scene::read_scene;
//!
//! let parsed = read_scene("scene.json").unwrap();
//! for warning in &parsed.warnings {
//!     eprintln!("warning: {warning}");
//! }
//! let scene = parsed.scene;
//! ```

mod cursor;
mod error;
mod parser;
mod reader;
mod scene;

pub use error::SceneError;
pub use parser::{ParsedScene, SceneParser};
pub use reader::{read_scene, read_scene_from_buffer};
pub use scene::{Camera, ObjectKind, Plane, RenderableObject, Scene, SceneWarning, Sphere};
