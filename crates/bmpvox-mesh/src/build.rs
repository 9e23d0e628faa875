use bmpvox_pool::{Handle, PoolConfig, SimpleVertex};

use crate::group::{GroupBox, MeshGroup};
use crate::hex::{Element, voxel_corners};
use crate::mask::SliceMask;

/// Stacks slices along z and emits one hexahedron per solid pixel.
///
/// Each group box gets its own pool. Element numbering is shared by all
/// groups, so indices keep counting across group files.
pub struct LatticeBuilder {
    groups: Vec<MeshGroup>,
    next_element: u32,
    slice: u32,
}

impl LatticeBuilder {
    pub fn new(boxes: &[GroupBox], config: PoolConfig) -> Self {
        let groups = boxes.iter().map(|b| MeshGroup::new(*b, config)).collect();
        Self {
            groups,
            next_element: 1,
            slice: 0,
        }
    }

    /// Depth of the next slice.
    #[inline]
    pub fn slice_index(&self) -> u32 {
        self.slice
    }

    /// Elements emitted so far across every group.
    #[inline]
    pub fn element_count(&self) -> u32 {
        self.next_element - 1
    }

    #[inline]
    pub fn groups(&self) -> &[MeshGroup] {
        &self.groups
    }

    #[inline]
    pub fn groups_mut(&mut self) -> &mut [MeshGroup] {
        &mut self.groups
    }

    /// Adds the voxels of `mask` at the current depth and advances it.
    /// Returns the number of elements emitted.
    pub fn push_slice(&mut self, mask: &SliceMask) -> usize {
        let z = self.slice as i32;
        let before = self.next_element;
        for group in &mut self.groups {
            for y in 0..mask.height {
                for x in 0..mask.width {
                    if !mask.get(x, y) {
                        continue;
                    }
                    let corners = voxel_corners(x as i32, y as i32, z);
                    if !group.bounds.admits(corners[0]) {
                        continue;
                    }
                    let handles: [Handle; 8] =
                        corners.map(|c| group.pool.add_vert_ref(SimpleVertex::new(c)));
                    group
                        .elements
                        .push(Element::from_handles(self.next_element, handles));
                    self.next_element += 1;
                }
            }
        }
        let emitted = (self.next_element - before) as usize;
        log::debug!(target: "lattice", "slice {} -> {} element(s)", self.slice, emitted);
        self.slice += 1;
        emitted
    }

    /// Advances the depth without emitting, for slices that failed to load.
    pub fn skip_slice(&mut self) {
        log::debug!(target: "lattice", "slice {} skipped", self.slice);
        self.slice += 1;
    }

    pub fn finish(self) -> Vec<MeshGroup> {
        self.groups
    }
}
