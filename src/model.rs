//! Renderable model input types.
//!
//! A [`Model`] is what the frame driver hands the pipeline each tick:
//! an ordered list of [`Face`]s in object space plus a pose
//! (translation, Euler rotation, scale). Models are rebuilt or reused
//! by the caller every frame; the pipeline never retains them.

use std::error::Error;
use std::fmt;

use crate::math::Vec4;

/// A face with an invalid vertex count was supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceError {
    /// The rejected vertex count.
    pub vertex_count: usize,
}

impl fmt::Display for FaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "face must have 3 or 4 vertices, got {}",
            self.vertex_count
        )
    }
}

impl Error for FaceError {}

/// One polygonal face: 3 or 4 raw object-space vertex positions.
///
/// The vertex-count invariant is enforced at construction, so a `Face`
/// held by a [`Model`] is always valid pipeline input.
#[derive(Clone, Debug, PartialEq)]
pub struct Face {
    points: Vec<[f32; 3]>,
}

impl Face {
    /// Build a face from raw points, rejecting any count other than 3
    /// or 4.
    pub fn new(points: Vec<[f32; 3]>) -> Result<Self, FaceError> {
        match points.len() {
            3 | 4 => Ok(Self { points }),
            vertex_count => Err(FaceError { vertex_count }),
        }
    }

    pub fn triangle(a: [f32; 3], b: [f32; 3], c: [f32; 3]) -> Self {
        Self {
            points: vec![a, b, c],
        }
    }

    pub fn quad(a: [f32; 3], b: [f32; 3], c: [f32; 3], d: [f32; 3]) -> Self {
        Self {
            points: vec![a, b, c, d],
        }
    }

    pub fn points(&self) -> &[[f32; 3]] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate the raw points as homogeneous world-space candidates.
    pub fn vertices(&self) -> impl Iterator<Item = Vec4> + '_ {
        self.points.iter().map(|p| Vec4::point(p[0], p[1], p[2]))
    }
}

/// Failed to load a model from an OBJ file.
#[derive(Debug)]
pub enum LoadError {
    /// The OBJ parser rejected the file.
    Obj(tobj::LoadError),
    /// The file contained no geometry.
    Empty,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Obj(e) => write!(f, "failed to parse OBJ file: {e}"),
            LoadError::Empty => write!(f, "OBJ file contains no faces"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LoadError::Obj(e) => Some(e),
            LoadError::Empty => None,
        }
    }
}

impl From<tobj::LoadError> for LoadError {
    fn from(e: tobj::LoadError) -> Self {
        LoadError::Obj(e)
    }
}

/// One renderable object: faces plus a pose.
#[derive(Clone, Debug)]
pub struct Model {
    pub faces: Vec<Face>,
    pub translation: Vec4,
    pub rotation: Vec4,
    pub scale: Vec4,
}

impl Model {
    /// Create a model at the origin with no rotation and unit scale.
    pub fn new(faces: Vec<Face>) -> Self {
        Self {
            faces,
            translation: Vec4::ZERO,
            rotation: Vec4::ZERO,
            scale: Vec4::point(1.0, 1.0, 1.0),
        }
    }

    pub fn with_translation(mut self, translation: Vec4) -> Self {
        self.translation = translation;
        self
    }

    /// Euler angles in radians, applied X then Y then Z.
    pub fn with_rotation(mut self, rotation: Vec4) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vec4) -> Self {
        self.scale = scale;
        self
    }

    /// Load a model from an OBJ file, triangulating as needed.
    ///
    /// All meshes in the file are flattened into one face list.
    pub fn from_obj(file_path: &str) -> Result<Self, LoadError> {
        let (meshes, _materials) = tobj::load_obj(
            file_path,
            &tobj::LoadOptions {
                triangulate: true,
                single_index: true,
                ..Default::default()
            },
        )?;

        let mut faces = Vec::new();
        for mesh in meshes {
            let mesh = mesh.mesh;
            let position = |index: u32| -> [f32; 3] {
                let i = index as usize * 3;
                [
                    mesh.positions[i],
                    mesh.positions[i + 1],
                    mesh.positions[i + 2],
                ]
            };

            for tri in mesh.indices.chunks_exact(3) {
                faces.push(Face::triangle(
                    position(tri[0]),
                    position(tri[1]),
                    position(tri[2]),
                ));
            }
        }

        if faces.is_empty() {
            return Err(LoadError::Empty);
        }

        Ok(Model::new(faces))
    }
}
