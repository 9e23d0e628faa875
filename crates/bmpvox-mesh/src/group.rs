use bmpvox_geom::{Aabb, Vec3};
use bmpvox_pool::{PoolConfig, SimpleVertex, VertexPool};

use crate::hex::Element;

/// Selects the voxels of one output mesh. With `inside` the voxel's first
/// corner must lie strictly inside `bounds`; without it, anywhere else.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroupBox {
    pub bounds: Aabb,
    pub inside: bool,
}

impl GroupBox {
    pub const EVERYTHING: GroupBox = GroupBox {
        bounds: Aabb::EVERYTHING,
        inside: true,
    };

    #[inline]
    pub fn admits(&self, p: Vec3) -> bool {
        self.bounds.contains_strict(p) == self.inside
    }
}

impl Default for GroupBox {
    fn default() -> Self {
        Self::EVERYTHING
    }
}

/// Independent mesh: its own node pool and element list.
pub struct MeshGroup {
    pub bounds: GroupBox,
    pub pool: VertexPool<SimpleVertex>,
    pub elements: Vec<Element>,
}

impl MeshGroup {
    pub fn new(bounds: GroupBox, config: PoolConfig) -> Self {
        Self {
            bounds,
            pool: VertexPool::new(config),
            elements: Vec::new(),
        }
    }

    /// Hands over elements emitted so far, keeping the pool intact.
    pub fn drain_elements(&mut self) -> Vec<Element> {
        std::mem::take(&mut self.elements)
    }
}
