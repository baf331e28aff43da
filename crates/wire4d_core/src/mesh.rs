//! STL mesh loading
//!
//! Loads a 3D triangle mesh as a wireframe: each triangle contributes its 3
//! vertices and 3 edges, as a plain triangle soup with no vertex
//! deduplication. Both binary STL (80-byte header, little-endian, 50-byte
//! records) and ASCII STL (`solid`/`facet`/`vertex`) are accepted. The
//! format carries no usable edge color, so the caller supplies one.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use crate::{Color, Edge, Wireframe};

/// Size of one binary STL triangle record: normal + 3 vertices + attribute.
const BINARY_TRIANGLE_SIZE: usize = 12 + 36 + 2;

/// Offset of the triangle-count word in a binary STL file.
const BINARY_HEADER_SIZE: usize = 80;

/// Error type for mesh loading.
#[derive(Debug)]
pub enum MeshError {
    /// The file could not be read.
    Io(io::Error),
    /// The bytes are not a well-formed STL mesh.
    Parse(String),
}

impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeshError::Io(err) => write!(f, "mesh IO error: {err}"),
            MeshError::Parse(msg) => write!(f, "mesh parse error: {msg}"),
        }
    }
}

impl std::error::Error for MeshError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MeshError::Io(err) => Some(err),
            MeshError::Parse(_) => None,
        }
    }
}

impl From<io::Error> for MeshError {
    fn from(err: io::Error) -> Self {
        MeshError::Io(err)
    }
}

/// Load an STL file as a wireframe with `color` edges.
pub fn load_stl<P: AsRef<Path>>(path: P, color: Color) -> Result<Wireframe<3>, MeshError> {
    let bytes = fs::read(path.as_ref())?;
    let shape = parse_stl(&bytes, color)?;
    log::info!(
        "loaded mesh {}: {} points, {} edges",
        path.as_ref().display(),
        shape.point_count(),
        shape.edge_count()
    );
    Ok(shape)
}

/// Parse STL bytes, auto-detecting the binary and ASCII encodings.
///
/// Detection: a file whose length matches the binary record arithmetic is
/// binary (binary files may legally begin with the word "solid"); anything
/// else starting with "solid" is parsed as ASCII.
pub fn parse_stl(bytes: &[u8], color: Color) -> Result<Wireframe<3>, MeshError> {
    if let Some(count) = binary_triangle_count(bytes) {
        return parse_binary(bytes, count, color);
    }
    let text = std::str::from_utf8(bytes)
        .map_err(|_| MeshError::Parse("neither binary STL nor UTF-8 text".into()))?;
    if text.trim_start().starts_with("solid") {
        return parse_ascii(text, color);
    }
    Err(MeshError::Parse(
        "not an STL file: bad binary length and no `solid` header".into(),
    ))
}

/// Returns the triangle count if the byte length matches binary STL layout.
fn binary_triangle_count(bytes: &[u8]) -> Option<usize> {
    let count_bytes = bytes
        .get(BINARY_HEADER_SIZE..BINARY_HEADER_SIZE + 4)?
        .try_into()
        .ok()?;
    let count = u32::from_le_bytes(count_bytes) as usize;
    let expected = BINARY_HEADER_SIZE + 4 + count * BINARY_TRIANGLE_SIZE;
    (bytes.len() == expected).then_some(count)
}

fn parse_binary(bytes: &[u8], count: usize, color: Color) -> Result<Wireframe<3>, MeshError> {
    let mut points = Vec::with_capacity(count * 3);
    let mut edges = Vec::with_capacity(count * 3);

    for tri in 0..count {
        let record = BINARY_HEADER_SIZE + 4 + tri * BINARY_TRIANGLE_SIZE;
        // Skip the 12-byte normal; the wireframe only needs vertices.
        for vertex in 0..3 {
            let at = record + 12 + vertex * 12;
            points.push([
                read_f32(bytes, at)?,
                read_f32(bytes, at + 4)?,
                read_f32(bytes, at + 8)?,
            ]);
        }
        push_triangle_edges(&mut edges, tri, color);
    }

    log::debug!("parsed binary STL: {count} triangles");
    Wireframe::new(points, edges).map_err(|e| MeshError::Parse(e.to_string()))
}

fn parse_ascii(text: &str, color: Color) -> Result<Wireframe<3>, MeshError> {
    let mut points = Vec::new();

    for (line_no, line) in text.lines().enumerate() {
        let mut tokens = line.split_whitespace();
        if tokens.next() != Some("vertex") {
            continue;
        }
        let mut coord = [0.0f32; 3];
        for value in &mut coord {
            let token = tokens.next().ok_or_else(|| {
                MeshError::Parse(format!("line {}: vertex with fewer than 3 coordinates", line_no + 1))
            })?;
            *value = token.parse().map_err(|_| {
                MeshError::Parse(format!("line {}: bad coordinate {token:?}", line_no + 1))
            })?;
        }
        points.push(coord);
    }

    if points.is_empty() {
        return Err(MeshError::Parse("ASCII STL contains no vertices".into()));
    }
    if points.len() % 3 != 0 {
        return Err(MeshError::Parse(format!(
            "ASCII STL vertex count {} is not a multiple of 3",
            points.len()
        )));
    }

    let triangles = points.len() / 3;
    let mut edges = Vec::with_capacity(points.len());
    for tri in 0..triangles {
        push_triangle_edges(&mut edges, tri, color);
    }

    log::debug!("parsed ASCII STL: {triangles} triangles");
    Wireframe::new(points, edges).map_err(|e| MeshError::Parse(e.to_string()))
}

fn push_triangle_edges(edges: &mut Vec<Edge>, triangle: usize, color: Color) {
    let base = triangle * 3;
    edges.push(Edge::new(color, base, base + 1));
    edges.push(Edge::new(color, base + 1, base + 2));
    edges.push(Edge::new(color, base + 2, base));
}

fn read_f32(bytes: &[u8], at: usize) -> Result<f32, MeshError> {
    let raw = bytes
        .get(at..at + 4)
        .ok_or_else(|| MeshError::Parse(format!("truncated binary STL at byte {at}")))?;
    Ok(f32::from_le_bytes(raw.try_into().expect("slice of length 4")))
}
