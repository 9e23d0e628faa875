use bmpvox_geom::Vec3;

/// Integer cell id: `zi * dim² + yi * dim + xi`, wrapping on overflow.
pub type CellKey = u64;

/// Quantization grid shared by every key a pool computes. Fixed for the
/// lifetime of the pool.
///
/// Each axis is mapped as `floor(((coord + min) / span) * dim) mod dim`, so
/// coordinates a multiple of `span` apart alias onto the same bucket.
/// `span` must be non-zero on every axis; a zero component yields an
/// infinite or NaN bucket coordinate, which saturates instead of trapping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PoolConfig {
    pub dim: u32,
    pub min: Vec3,
    pub span: Vec3,
}

impl PoolConfig {
    /// # Panics
    /// If `dim` is zero.
    pub fn new(dim: u32, min: Vec3, span: Vec3) -> Self {
        assert!(dim >= 1, "pool grid dimension must be at least 1");
        Self { dim, min, span }
    }

    /// Grid for a `width x height x depth` voxel volume: one voxel of margin
    /// on each side and `dim = width * dim_scale` buckets per axis.
    pub fn for_volume(width: u32, height: u32, depth: u32, dim_scale: f32) -> Self {
        let dim = ((width as f32) * dim_scale) as u32;
        Self::new(
            dim.max(1),
            Vec3::splat(-1.0),
            Vec3::new(
                width as f32 + 2.0,
                height as f32 + 2.0,
                depth as f32 + 2.0,
            ),
        )
    }

    #[inline]
    fn bucket(&self, coord: f32, min: f32, span: f32) -> u64 {
        let dim = self.dim as f32;
        let raw = (((coord + min) / span) * dim).floor() as i64;
        raw.rem_euclid(self.dim as i64) as u64
    }

    /// Per-axis bucket indices of `p`, each in `[0, dim)`.
    #[inline]
    pub fn cell(&self, p: Vec3) -> [u64; 3] {
        [
            self.bucket(p.x, self.min.x, self.span.x),
            self.bucket(p.y, self.min.y, self.span.y),
            self.bucket(p.z, self.min.z, self.span.z),
        ]
    }

    #[inline]
    pub fn key(&self, p: Vec3) -> CellKey {
        let [xi, yi, zi] = self.cell(p);
        let dim = self.dim as u64;
        zi.wrapping_mul(dim)
            .wrapping_mul(dim)
            .wrapping_add(yi.wrapping_mul(dim))
            .wrapping_add(xi)
    }
}
