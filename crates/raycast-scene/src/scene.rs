//! In-memory scene description.

use std::fmt;

use raycast_math::{Color, Vec3};

/// The view-plane extent. The camera itself is never rendered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// View-plane width.
    pub width: f64,
    /// View-plane height.
    pub height: f64,
}

/// A sphere, stored by center and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    /// Center point.
    pub center: Vec3,
    /// Radius (never negative).
    pub radius: f64,
    /// Flat surface color.
    pub color: Color,
}

/// An infinite plane `normal · P + offset = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Plane normal (not necessarily unit length).
    pub normal: Vec3,
    /// Signed offset term.
    pub offset: f64,
    /// Flat surface color.
    pub color: Color,
}

impl Plane {
    /// Build the plane through `point` with the given `normal`.
    pub fn through_point(normal: Vec3, point: Vec3, color: Color) -> Self {
        Self {
            normal,
            offset: -normal.dot(&point),
            color,
        }
    }
}

/// Anything a ray can hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderableObject {
    /// A sphere.
    Sphere(Sphere),
    /// A plane.
    Plane(Plane),
}

impl RenderableObject {
    /// Flat color of the object.
    pub fn color(&self) -> Color {
        match self {
            RenderableObject::Sphere(sphere) => sphere.color,
            RenderableObject::Plane(plane) => plane.color,
        }
    }

    /// Kind tag of the object.
    pub fn kind(&self) -> ObjectKind {
        match self {
            RenderableObject::Sphere(_) => ObjectKind::Sphere,
            RenderableObject::Plane(_) => ObjectKind::Plane,
        }
    }
}

/// The object kinds a scene file may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    /// `"camera"`
    Camera,
    /// `"sphere"`
    Sphere,
    /// `"plane"`
    Plane,
}

impl ObjectKind {
    /// Look up a kind by its `"type"` value.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "camera" => Some(Self::Camera),
            "sphere" => Some(Self::Sphere),
            "plane" => Some(Self::Plane),
            _ => None,
        }
    }

    /// The `"type"` value for this kind.
    pub fn name(self) -> &'static str {
        match self {
            Self::Camera => "camera",
            Self::Sphere => "sphere",
            Self::Plane => "plane",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A parsed scene: camera, objects in declaration order, and background.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// The camera, if the input declared one.
    pub camera: Option<Camera>,
    /// Renderable objects in declaration order.
    pub objects: Vec<RenderableObject>,
    /// Color of pixels whose ray hits nothing. Set by the caller.
    pub background: Color,
}

impl Scene {
    /// An empty scene with no camera and a black background.
    pub fn new() -> Self {
        Self {
            camera: None,
            objects: Vec::new(),
            background: Color::zeros(),
        }
    }

    /// Replace the background color.
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

/// A non-fatal diagnostic produced while parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneWarning {
    /// The input was `[]`.
    EmptyScene,
    /// A field the camera does not use (e.g. `position` or `normal`).
    CameraFieldIgnored {
        /// Line the camera closed on.
        line: usize,
        /// The ignored field.
        field: &'static str,
    },
    /// A known field that does not apply to the object's kind.
    FieldIgnored {
        /// Line the object closed on.
        line: usize,
        /// Kind of the object.
        kind: ObjectKind,
        /// The ignored field.
        field: &'static str,
    },
}

impl fmt::Display for SceneWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneWarning::EmptyScene => write!(f, "empty scene file"),
            SceneWarning::CameraFieldIgnored { line, field } => {
                write!(f, "camera does not use {field:?} at this time (line {line})")
            }
            SceneWarning::FieldIgnored { line, kind, field } => {
                write!(f, "{kind} ignores field {field:?} (line {line})")
            }
        }
    }
}
