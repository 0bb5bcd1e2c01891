//! Line-based scene text parser.
//!
//! # Supported Syntax
//!
//! - `NEAR n`, `LEFT l`, `RIGHT r`, `BOTTOM b`, `TOP t`
//! - `RES width height`
//! - `SPHERE name px py pz sx sy sz r g b ka kd ks kr n`
//! - `LIGHT name px py pz ir ig ib`
//! - `BACK r g b`, `AMBIENT r g b`
//! - `OUTPUT name`
//!
//! Blank lines and `#` comments are skipped. Unknown keys are logged and
//! skipped. Extra tokens at the end of a line are ignored.

use std::str::{FromStr, SplitWhitespace};

use thiserror::Error;
use whitted_math::{DVec3, Frustum};

use crate::{Color, Light, Scene, SceneError, Sphere, SphereParams};

/// Errors that can occur while parsing a scene description.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Invalid number '{token}' at line {line}")]
    InvalidNumber { line: usize, token: String },

    #[error("Missing required key {0}")]
    MissingKey(&'static str),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid scene: {0}")]
    Invalid(#[from] SceneError),
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Whitespace tokens of a single line.
struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
    line: usize,
}

impl<'a> Tokens<'a> {
    fn new(content: &'a str, line: usize) -> Self {
        Self {
            inner: content.split_whitespace(),
            line,
        }
    }

    fn word(&mut self, what: &str) -> ParseResult<&'a str> {
        self.inner.next().ok_or_else(|| ParseError::Parse {
            line: self.line,
            message: format!("expected {what}"),
        })
    }

    fn number<T: FromStr>(&mut self, what: &str) -> ParseResult<T> {
        let token = self.word(what)?;
        token.parse::<T>().map_err(|_| ParseError::InvalidNumber {
            line: self.line,
            token: token.to_string(),
        })
    }

    fn vec3(&mut self, what: &str) -> ParseResult<DVec3> {
        Ok(DVec3::new(
            self.number(what)?,
            self.number(what)?,
            self.number(what)?,
        ))
    }
}

/// Scene fields collected while reading lines.
#[derive(Default)]
struct SceneBuilder {
    near: Option<f64>,
    left: Option<f64>,
    right: Option<f64>,
    bottom: Option<f64>,
    top: Option<f64>,
    resolution: Option<(u32, u32)>,
    background: Color,
    ambient: Color,
    spheres: Vec<Sphere>,
    lights: Vec<Light>,
    output: Option<String>,
}

impl SceneBuilder {
    fn process_line(&mut self, line: &str, line_num: usize) -> ParseResult<()> {
        let mut tokens = Tokens::new(line, line_num);
        let key = match tokens.inner.next() {
            Some(key) if !key.starts_with('#') => key,
            _ => return Ok(()),
        };

        match key {
            "NEAR" => self.near = Some(tokens.number("near plane distance")?),
            "LEFT" => self.left = Some(tokens.number("left plane")?),
            "RIGHT" => self.right = Some(tokens.number("right plane")?),
            "BOTTOM" => self.bottom = Some(tokens.number("bottom plane")?),
            "TOP" => self.top = Some(tokens.number("top plane")?),
            "RES" => {
                let width = tokens.number("width")?;
                let height = tokens.number("height")?;
                self.resolution = Some((width, height));
            }
            "SPHERE" => {
                let sphere = parse_sphere(&mut tokens)?;
                log::debug!("Sphere {} at {}", sphere.name(), sphere.position());
                self.spheres.push(sphere);
            }
            "LIGHT" => {
                let light = parse_light(&mut tokens)?;
                log::debug!("Light {} at {}", light.name(), light.position());
                self.lights.push(light);
            }
            "BACK" => self.background = tokens.vec3("background color")?,
            "AMBIENT" => self.ambient = tokens.vec3("ambient color")?,
            "OUTPUT" => self.output = Some(tokens.word("output name")?.to_string()),
            other => log::warn!("Ignoring unknown key '{}' at line {}", other, line_num),
        }

        Ok(())
    }

    fn finish(self) -> ParseResult<Scene> {
        let near = self.near.ok_or(ParseError::MissingKey("NEAR"))?;
        let left = self.left.ok_or(ParseError::MissingKey("LEFT"))?;
        let right = self.right.ok_or(ParseError::MissingKey("RIGHT"))?;
        let bottom = self.bottom.ok_or(ParseError::MissingKey("BOTTOM"))?;
        let top = self.top.ok_or(ParseError::MissingKey("TOP"))?;
        let (width, height) = self.resolution.ok_or(ParseError::MissingKey("RES"))?;

        let mut scene = Scene::new(Frustum::new(near, left, right, bottom, top), width, height)
            .with_background(self.background)
            .with_ambient(self.ambient);
        scene.spheres = self.spheres;
        scene.lights = self.lights;
        scene.output = self.output;

        scene.validate()?;
        Ok(scene)
    }
}

fn parse_sphere(tokens: &mut Tokens) -> ParseResult<Sphere> {
    let params = SphereParams {
        name: tokens.word("sphere name")?.to_string(),
        position: tokens.vec3("sphere position")?,
        scale: tokens.vec3("sphere scale")?,
        color: tokens.vec3("sphere color")?,
        ambient: tokens.number("ambient coefficient")?,
        diffuse: tokens.number("diffuse coefficient")?,
        specular: tokens.number("specular coefficient")?,
        reflectivity: tokens.number("reflectivity")?,
        specular_exponent: tokens.number("specular exponent")?,
    };
    Ok(Sphere::new(params))
}

fn parse_light(tokens: &mut Tokens) -> ParseResult<Light> {
    let name = tokens.word("light name")?;
    let position = tokens.vec3("light position")?;
    let intensity = tokens.vec3("light intensity")?;
    Ok(Light::new(name, position, intensity))
}

/// Parse a text scene description and validate it.
pub fn parse_scene(content: &str) -> ParseResult<Scene> {
    let mut builder = SceneBuilder::default();

    for (index, line) in content.lines().enumerate() {
        builder.process_line(line, index + 1)?;
    }

    builder.finish()
}

/// Parse a JSON scene description and validate it.
pub fn parse_scene_json(content: &str) -> ParseResult<Scene> {
    let scene: Scene = serde_json::from_str(content)?;
    scene.validate()?;
    Ok(scene)
}
