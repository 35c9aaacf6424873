//! Mesh data and the line-based text format loader
//!
//! The format is a small subset of Wavefront OBJ: `v x y z` vertex records
//! and `f i1 i2 i3` triangle records with 1-based indices into the vertex
//! list. Anything else (comments, normals, blank lines) is skipped.

use std::fs;
use std::path::Path;

use super::math::Vec3;

/// A triangular face. Each face owns copies of its three vertex positions;
/// no shared-vertex topology is kept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    pub p: [Vec3; 3],
}

impl Face {
    pub fn new(p0: Vec3, p1: Vec3, p2: Vec3) -> Self {
        Self { p: [p0, p1, p2] }
    }
}

/// An ordered collection of faces. Order matters only for loader
/// determinism; rendering re-sorts by depth every frame.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub faces: Vec<Face>,
}

/// Error type for mesh loading
#[derive(Debug)]
pub enum MeshError {
    Io(std::io::Error),
    BadNumber { line: usize, token: String },
    MissingField { line: usize },
    BadIndex { line: usize, index: i64 },
}

impl From<std::io::Error> for MeshError {
    fn from(e: std::io::Error) -> Self {
        MeshError::Io(e)
    }
}

impl std::fmt::Display for MeshError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MeshError::Io(e) => write!(f, "IO error: {}", e),
            MeshError::BadNumber { line, token } => {
                write!(f, "line {}: unparsable number {:?}", line, token)
            }
            MeshError::MissingField { line } => {
                write!(f, "line {}: record is missing fields", line)
            }
            MeshError::BadIndex { line, index } => {
                write!(f, "line {}: vertex index {} out of range", line, index)
            }
        }
    }
}

impl std::error::Error for MeshError {}

impl Mesh {
    /// Load a mesh from a text file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Mesh, MeshError> {
        let contents = fs::read_to_string(path)?;
        Mesh::from_str(&contents)
    }

    /// Parse a mesh from text (for embedded meshes or testing)
    pub fn from_str(source: &str) -> Result<Mesh, MeshError> {
        let mut verts: Vec<Vec3> = Vec::new();
        let mut faces: Vec<Face> = Vec::new();

        for (i, line) in source.lines().enumerate() {
            let line_no = i + 1;
            let mut tokens = line.split_whitespace();
            match tokens.next() {
                Some("v") => {
                    let x = parse_coord(tokens.next(), line_no)?;
                    let y = parse_coord(tokens.next(), line_no)?;
                    let z = parse_coord(tokens.next(), line_no)?;
                    verts.push(Vec3::new(x, y, z));
                }
                Some("f") => {
                    let p0 = resolve_vertex(tokens.next(), &verts, line_no)?;
                    let p1 = resolve_vertex(tokens.next(), &verts, line_no)?;
                    let p2 = resolve_vertex(tokens.next(), &verts, line_no)?;
                    faces.push(Face::new(p0, p1, p2));
                }
                _ => {}
            }
        }

        Ok(Mesh { faces })
    }

    /// The built-in demo mesh: a unit cube as 12 clockwise-wound faces,
    /// two per side
    pub fn cube() -> Mesh {
        let v = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(0.0, 1.0, 1.0),
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(1.0, 0.0, 1.0),
        ];
        let indices: [[usize; 3]; 12] = [
            // south
            [0, 1, 2],
            [0, 2, 3],
            // east
            [3, 2, 6],
            [3, 6, 7],
            // north
            [7, 6, 5],
            [7, 5, 4],
            // west
            [4, 5, 1],
            [4, 1, 0],
            // top
            [1, 5, 6],
            [1, 6, 2],
            // bottom
            [7, 4, 0],
            [7, 0, 3],
        ];
        Mesh {
            faces: indices
                .iter()
                .map(|&[a, b, c]| Face::new(v[a], v[b], v[c]))
                .collect(),
        }
    }
}

fn parse_coord(token: Option<&str>, line: usize) -> Result<f32, MeshError> {
    let token = token.ok_or(MeshError::MissingField { line })?;
    token.parse::<f32>().map_err(|_| MeshError::BadNumber {
        line,
        token: token.to_string(),
    })
}

/// Resolve a 1-based vertex index against the vertices seen so far
fn resolve_vertex(token: Option<&str>, verts: &[Vec3], line: usize) -> Result<Vec3, MeshError> {
    let token = token.ok_or(MeshError::MissingField { line })?;
    let index = token.parse::<i64>().map_err(|_| MeshError::BadNumber {
        line,
        token: token.to_string(),
    })?;
    if index < 1 || index as usize > verts.len() {
        return Err(MeshError::BadIndex { line, index });
    }
    Ok(verts[index as usize - 1])
}
