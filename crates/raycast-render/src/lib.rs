#![warn(missing_docs)]

//! Ray casting for raycast scenes.
//!
//! Casts one ray per pixel from a fixed eye point through the camera's view
//! plane and colors each pixel with the nearest object's flat color.
//!
//! # Architecture
//!
//! - [`Ray`] - Ray representation with origin and direction
//! - [`intersect`] - Closed-form ray-sphere and ray-plane intersection
//! - [`Raycaster`] - Pixel-to-ray mapping and nearest-hit selection
//! - [`Framebuffer`] - The rendered 8-bit pixels
//!
//! # Example
//!
//! ```no_run
//! use raycast_render::render;
//! use raycast_scene::read_scene;
//!
//! let scene = read_scene("scene.json").unwrap().scene;
//! let frame = render(&scene, 640, 480).unwrap();
//! assert_eq!(frame.pixels().len(), 640 * 480);
//! ```

mod error;
pub mod intersect;
mod ray;
mod raycaster;

pub use error::RenderError;
pub use ray::Ray;
pub use raycaster::{render, to_rgb8, Framebuffer, Hit, Raycaster, Rgb8, VIEW_PLANE_DISTANCE};
