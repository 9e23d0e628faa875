use std::fs;
use std::path::Path;

use bmpvox_geom::{Aabb, Vec3};
use bmpvox_mesh::GroupBox;

use crate::error::IoError;

const FIELDS: usize = 7;

/// Parses whitespace-separated `minx miny minz maxx maxy maxz inside`
/// records. A trailing incomplete record is dropped.
pub fn parse_boxes(text: &str) -> Result<Vec<GroupBox>, IoError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let complete = tokens.len() / FIELDS;
    if tokens.len() % FIELDS != 0 {
        log::warn!(
            target: "boxes",
            "ignoring {} trailing token(s) after {} complete box record(s)",
            tokens.len() % FIELDS,
            complete
        );
    }
    let mut out = Vec::with_capacity(complete);
    for (record, chunk) in tokens.chunks_exact(FIELDS).enumerate() {
        let mut v = [0.0f32; 6];
        for (field, slot) in v.iter_mut().enumerate() {
            *slot = chunk[field].parse().map_err(|_| IoError::BoxField {
                record,
                field,
                token: chunk[field].to_string(),
            })?;
        }
        let inside = match chunk[6] {
            "1" | "true" => true,
            "0" | "false" => false,
            other => {
                return Err(IoError::BoxField {
                    record,
                    field: 6,
                    token: other.to_string(),
                });
            }
        };
        out.push(GroupBox {
            bounds: Aabb::new(Vec3::new(v[0], v[1], v[2]), Vec3::new(v[3], v[4], v[5])),
            inside,
        });
    }
    Ok(out)
}

/// Reads group boxes from `path`, or a single all-enclosing box when the
/// file does not exist.
pub fn read_boxes(path: &Path) -> Result<Vec<GroupBox>, IoError> {
    if !path.exists() {
        log::debug!(target: "boxes", "{:?} not found; using a single group", path);
        return Ok(vec![GroupBox::EVERYTHING]);
    }
    let text = fs::read_to_string(path).map_err(|source| IoError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let boxes = parse_boxes(&text)?;
    log::info!(target: "boxes", "read {} group box(es) from {:?}", boxes.len(), path);
    Ok(boxes)
}
