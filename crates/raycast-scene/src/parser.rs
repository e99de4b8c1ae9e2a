//! Recursive-descent parser for scene files.
//!
//! A scene file is a single array of objects:
//!
//! ```text
//! [
//!   {"type": "camera", "width": 4, "height": 4},
//!   {"type": "sphere", "color": [1, 0, 0], "position": [0, 0, 5], "radius": 1}
//! ]
//! ```
//!
//! Each object starts with its `"type"` key. The remaining keys are checked
//! against the object kind when the object closes, and derived values
//! (e.g. a plane's offset) are computed right away. The first error aborts
//! the whole parse.

use raycast_math::Vec3;
use tracing::{debug, warn};

use crate::cursor::Cursor;
use crate::error::SceneError;
use crate::scene::{Camera, ObjectKind, Plane, RenderableObject, Scene, SceneWarning, Sphere};

/// Output of a successful parse.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedScene {
    /// The scene. Its camera is `None` if the input declared none.
    pub scene: Scene,
    /// Non-fatal diagnostics, in the order they were raised.
    pub warnings: Vec<SceneWarning>,
}

/// Keys an object may carry after `"type"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Width,
    Height,
    Radius,
    Color,
    Position,
    Normal,
}

impl Field {
    fn from_key(key: &str) -> Option<Self> {
        match key {
            "width" => Some(Self::Width),
            "height" => Some(Self::Height),
            "radius" => Some(Self::Radius),
            "color" => Some(Self::Color),
            "position" => Some(Self::Position),
            "normal" => Some(Self::Normal),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Width => "width",
            Self::Height => "height",
            Self::Radius => "radius",
            Self::Color => "color",
            Self::Position => "position",
            Self::Normal => "normal",
        }
    }

    /// Scalar fields take a bare number, the rest a `[x, y, z]` vector.
    fn is_scalar(self) -> bool {
        matches!(self, Self::Width | Self::Height | Self::Radius)
    }
}

/// A field value as read from the input.
enum Value {
    Number(f64),
    Vector(Vec3),
}

/// Fields collected for the object currently being parsed.
#[derive(Debug, Default)]
struct ObjectFields {
    width: Option<f64>,
    height: Option<f64>,
    radius: Option<f64>,
    color: Option<Vec3>,
    position: Option<Vec3>,
    normal: Option<Vec3>,
}

impl ObjectFields {
    fn set(&mut self, field: Field, value: Value) {
        match (field, value) {
            (Field::Width, Value::Number(v)) => self.width = Some(v),
            (Field::Height, Value::Number(v)) => self.height = Some(v),
            (Field::Radius, Value::Number(v)) => self.radius = Some(v),
            (Field::Color, Value::Vector(v)) => self.color = Some(v),
            (Field::Position, Value::Vector(v)) => self.position = Some(v),
            (Field::Normal, Value::Vector(v)) => self.normal = Some(v),
            // parse_value picks the shape from the field
            _ => unreachable!("value shape does not match field"),
        }
    }

    fn is_set(&self, field: Field) -> bool {
        match field {
            Field::Width => self.width.is_some(),
            Field::Height => self.height.is_some(),
            Field::Radius => self.radius.is_some(),
            Field::Color => self.color.is_some(),
            Field::Position => self.position.is_some(),
            Field::Normal => self.normal.is_some(),
        }
    }
}

fn require<T>(
    value: Option<T>,
    line: usize,
    kind: ObjectKind,
    field: Field,
) -> Result<T, SceneError> {
    value.ok_or(SceneError::MissingField {
        line,
        kind,
        field: field.name(),
    })
}

/// Parser for scene files.
pub struct SceneParser<'a> {
    cursor: Cursor<'a>,
    scene: Scene,
    warnings: Vec<SceneWarning>,
}

impl<'a> SceneParser<'a> {
    /// Parse a scene from bytes.
    pub fn parse(input: &'a [u8]) -> Result<ParsedScene, SceneError> {
        let parser = SceneParser {
            cursor: Cursor::new(input),
            scene: Scene::new(),
            warnings: Vec::new(),
        };
        parser.parse_scene()
    }

    fn parse_scene(mut self) -> Result<ParsedScene, SceneError> {
        self.cursor.skip_whitespace();
        self.cursor.expect_char(b'[')?;
        self.cursor.skip_whitespace();

        if self.cursor.peek_char()? == b']' {
            self.cursor.advance();
            self.warn(SceneWarning::EmptyScene);
        } else {
            loop {
                self.parse_object()?;
                self.cursor.skip_whitespace();

                match self.cursor.next_char()? {
                    b',' => {
                        self.cursor.skip_whitespace();
                        // Trailing comma before the closing bracket
                        if self.cursor.peek_char()? == b']' {
                            self.cursor.advance();
                            break;
                        }
                    }
                    b']' => break,
                    ch => {
                        return Err(SceneError::unexpected(
                            self.cursor.line(),
                            "',' or ']'",
                            ch,
                        ))
                    }
                }
            }
        }

        if !self.cursor.at_end() {
            return Err(SceneError::TrailingCharacters {
                line: self.cursor.line(),
            });
        }

        debug!(
            objects = self.scene.objects.len(),
            has_camera = self.scene.camera.is_some(),
            "parsed scene"
        );

        Ok(ParsedScene {
            scene: self.scene,
            warnings: self.warnings,
        })
    }

    fn parse_object(&mut self) -> Result<(), SceneError> {
        self.cursor.expect_char(b'{')?;
        self.cursor.skip_whitespace();

        let line = self.cursor.line();
        let key = self.cursor.read_string()?;
        if key != "type" {
            return Err(SceneError::ExpectedTypeKey { line, found: key });
        }

        self.cursor.skip_whitespace();
        self.cursor.expect_char(b':')?;
        self.cursor.skip_whitespace();

        let line = self.cursor.line();
        let name = self.cursor.read_string()?;
        let kind = ObjectKind::from_name(&name).ok_or(SceneError::UnknownType { line, name })?;

        self.cursor.skip_whitespace();

        let mut fields = ObjectFields::default();
        loop {
            match self.cursor.next_char()? {
                b'}' => break,
                b',' => {
                    self.cursor.skip_whitespace();
                    let line = self.cursor.line();
                    let key = self.cursor.read_string()?;
                    let field =
                        Field::from_key(&key).ok_or(SceneError::UnknownField { line, key })?;

                    self.cursor.skip_whitespace();
                    self.cursor.expect_char(b':')?;
                    self.cursor.skip_whitespace();

                    let value = self.parse_value(field)?;
                    fields.set(field, value);
                    self.cursor.skip_whitespace();
                }
                ch => {
                    return Err(SceneError::unexpected(
                        self.cursor.line(),
                        "',' or '}'",
                        ch,
                    ))
                }
            }
        }

        self.finish_object(kind, fields)
    }

    fn parse_value(&mut self, field: Field) -> Result<Value, SceneError> {
        if field.is_scalar() {
            Ok(Value::Number(self.cursor.read_number()?))
        } else {
            Ok(Value::Vector(self.parse_vector()?))
        }
    }

    fn parse_vector(&mut self) -> Result<Vec3, SceneError> {
        self.cursor.expect_char(b'[')?;
        let mut v = [0.0; 3];
        for (i, slot) in v.iter_mut().enumerate() {
            if i > 0 {
                self.cursor.expect_char(b',')?;
            }
            self.cursor.skip_whitespace();
            *slot = self.cursor.read_number()?;
            self.cursor.skip_whitespace();
        }
        self.cursor.expect_char(b']')?;
        Ok(Vec3::new(v[0], v[1], v[2]))
    }

    /// Validate the collected fields and store the finished object.
    fn finish_object(&mut self, kind: ObjectKind, fields: ObjectFields) -> Result<(), SceneError> {
        let line = self.cursor.line();

        match kind {
            ObjectKind::Camera => {
                let width = require(fields.width, line, kind, Field::Width)?;
                let height = require(fields.height, line, kind, Field::Height)?;
                if width <= 0.0 || height <= 0.0 {
                    return Err(SceneError::InvalidCameraExtent { line, width, height });
                }
                if self.scene.camera.is_some() {
                    return Err(SceneError::DuplicateCamera { line });
                }

                for field in [Field::Position, Field::Normal] {
                    if fields.is_set(field) {
                        self.warn(SceneWarning::CameraFieldIgnored {
                            line,
                            field: field.name(),
                        });
                    }
                }
                self.warn_unused(kind, &fields, &[Field::Color, Field::Radius], line);

                self.scene.camera = Some(Camera { width, height });
                debug!(line, width, height, "camera");
            }
            ObjectKind::Sphere => {
                let radius = require(fields.radius, line, kind, Field::Radius)?;
                if radius < 0.0 {
                    return Err(SceneError::NegativeRadius { line, radius });
                }
                let color = require(fields.color, line, kind, Field::Color)?;
                let center = require(fields.position, line, kind, Field::Position)?;
                self.warn_unused(
                    kind,
                    &fields,
                    &[Field::Width, Field::Height, Field::Normal],
                    line,
                );

                self.scene
                    .objects
                    .push(RenderableObject::Sphere(Sphere { center, radius, color }));
                debug!(line, radius, "sphere");
            }
            ObjectKind::Plane => {
                let color = require(fields.color, line, kind, Field::Color)?;
                let position = require(fields.position, line, kind, Field::Position)?;
                let normal = require(fields.normal, line, kind, Field::Normal)?;
                self.warn_unused(
                    kind,
                    &fields,
                    &[Field::Width, Field::Height, Field::Radius],
                    line,
                );

                self.scene
                    .objects
                    .push(RenderableObject::Plane(Plane::through_point(normal, position, color)));
                debug!(line, "plane");
            }
        }

        Ok(())
    }

    fn warn_unused(
        &mut self,
        kind: ObjectKind,
        fields: &ObjectFields,
        unused: &[Field],
        line: usize,
    ) {
        for &field in unused {
            if fields.is_set(field) {
                self.warn(SceneWarning::FieldIgnored {
                    line,
                    kind,
                    field: field.name(),
                });
            }
        }
    }

    fn warn(&mut self, warning: SceneWarning) {
        warn!("{warning}");
        self.warnings.push(warning);
    }
}
