use bmpvox_geom::Vec3;
use bmpvox_pool::Handle;

/// Corner order of [`voxel_corners`] mapped to element node order. Swapping
/// the third/fourth corners of each face gives consistent hexahedral winding.
pub const HEX_WINDING: [usize; 8] = [0, 1, 3, 2, 4, 5, 7, 6];

/// The eight corners of the unit cube at lattice position `(x, y, z)`:
/// x varies fastest, then y, then z.
#[inline]
pub fn voxel_corners(x: i32, y: i32, z: i32) -> [Vec3; 8] {
    [
        Vec3::from_lattice(x, y, z),
        Vec3::from_lattice(x + 1, y, z),
        Vec3::from_lattice(x, y + 1, z),
        Vec3::from_lattice(x + 1, y + 1, z),
        Vec3::from_lattice(x, y, z + 1),
        Vec3::from_lattice(x + 1, y, z + 1),
        Vec3::from_lattice(x, y + 1, z + 1),
        Vec3::from_lattice(x + 1, y + 1, z + 1),
    ]
}

/// One hexahedron. `index` and `nodes` are 1-based, nodes in winding order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Element {
    pub index: u32,
    pub nodes: [u32; 8],
}

impl Element {
    /// `handles` are pool handles in [`voxel_corners`] order.
    pub fn from_handles(index: u32, handles: [Handle; 8]) -> Self {
        Self {
            index,
            nodes: HEX_WINDING.map(|i| handles[i] + 1),
        }
    }
}
