//! Per-pixel ray casting with nearest-object shading.
//!
//! The eye sits at the origin looking down +z. The view plane is centered on
//! the z axis at [`VIEW_PLANE_DISTANCE`] and spans the camera's width and
//! height. Pixel `(row, col)` samples the center of its cell, with row 0 at
//! the top of the image.

use raycast_math::{Color, Vec3};
use raycast_scene::{Camera, RenderableObject, Scene};
use tracing::debug;

use crate::error::RenderError;
use crate::intersect::{intersect, is_valid_hit};
use crate::Ray;

/// Distance from the eye to the view plane along +z.
pub const VIEW_PLANE_DISTANCE: f64 = 1.0;

/// An 8-bit RGB pixel.
pub type Rgb8 = [u8; 3];

/// The nearest intersection along a ray.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    /// Parameter along the ray.
    pub t: f64,
    /// Index of the object in the scene's declaration order.
    pub index: usize,
    /// The object that was hit.
    pub object: &'a RenderableObject,
}

/// Rendered pixels, row-major from the top row down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    width: usize,
    height: usize,
    pixels: Vec<Rgb8>,
}

impl Framebuffer {
    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixel at `(row, col)`, or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Rgb8> {
        if row < self.height && col < self.width {
            Some(self.pixels[row * self.width + col])
        } else {
            None
        }
    }

    /// All pixels, row-major.
    pub fn pixels(&self) -> &[Rgb8] {
        &self.pixels
    }

    /// Consume the framebuffer, returning its pixels.
    pub fn into_pixels(self) -> Vec<Rgb8> {
        self.pixels
    }
}

/// Convert a color to 8-bit channels.
///
/// Channels are clamped to `[0, 1]`, scaled by 255 and truncated.
pub fn to_rgb8(color: &Color) -> Rgb8 {
    let channel = |c: f64| (c.clamp(0.0, 1.0) * 255.0) as u8;
    [channel(color.x), channel(color.y), channel(color.z)]
}

/// Casts one ray per pixel through a scene.
pub struct Raycaster<'a> {
    scene: &'a Scene,
    camera: Camera,
    width: usize,
    height: usize,
}

impl<'a> Raycaster<'a> {
    /// Prepare to render `scene` at `width × height` pixels.
    ///
    /// Fails if the scene has no camera, either dimension is zero, or the
    /// framebuffer would be too large to allocate.
    pub fn new(scene: &'a Scene, width: usize, height: usize) -> Result<Self, RenderError> {
        let camera = scene.camera.ok_or(RenderError::NoCamera)?;
        let addressable = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(3))
            .is_some_and(|bytes| bytes <= isize::MAX as usize);
        if width == 0 || height == 0 || !addressable {
            return Err(RenderError::InvalidResolution { width, height });
        }
        Ok(Self {
            scene,
            camera,
            width,
            height,
        })
    }

    /// The ray from the eye through the center of pixel `(row, col)`.
    ///
    /// The direction is normalized, so hit parameters are distances.
    pub fn primary_ray(&self, row: usize, col: usize) -> Ray {
        let pixel_width = self.camera.width / self.width as f64;
        let pixel_height = self.camera.height / self.height as f64;

        let x = -self.camera.width / 2.0 + pixel_width * (col as f64 + 0.5);
        // Rows count downward, y counts upward
        let y = self.camera.height / 2.0 - pixel_height * (row as f64 + 0.5);

        let target = Vec3::new(x, y, VIEW_PLANE_DISTANCE);
        Ray::new(Vec3::zeros(), target.normalize())
    }

    /// The closest object hit by `ray`.
    ///
    /// Objects are tested in declaration order and a later object only
    /// replaces the current best if it is strictly closer.
    pub fn nearest_hit(&self, ray: &Ray) -> Option<Hit<'a>> {
        let mut best: Option<Hit<'a>> = None;

        for (index, object) in self.scene.objects.iter().enumerate() {
            let Some(t) = intersect(ray, object) else {
                continue;
            };
            if !is_valid_hit(t) {
                continue;
            }
            if best.map_or(true, |hit| t < hit.t) {
                best = Some(Hit { t, index, object });
            }
        }

        best
    }

    /// Color seen along `ray`: the nearest object's color, or the background.
    pub fn trace(&self, ray: &Ray) -> Color {
        self.nearest_hit(ray)
            .map_or(self.scene.background, |hit| hit.object.color())
    }

    /// Render every pixel.
    pub fn render(&self) -> Framebuffer {
        debug!(
            width = self.width,
            height = self.height,
            objects = self.scene.objects.len(),
            "rendering"
        );

        let mut pixels = Vec::with_capacity(self.width * self.height);
        for row in 0..self.height {
            for col in 0..self.width {
                let ray = self.primary_ray(row, col);
                pixels.push(to_rgb8(&self.trace(&ray)));
            }
        }

        Framebuffer {
            width: self.width,
            height: self.height,
            pixels,
        }
    }
}

/// Render `scene` at `width × height` pixels.
pub fn render(scene: &Scene, width: usize, height: usize) -> Result<Framebuffer, RenderError> {
    Ok(Raycaster::new(scene, width, height)?.render())
}
