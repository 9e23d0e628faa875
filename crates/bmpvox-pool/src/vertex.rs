use bmpvox_geom::Vec3;

/// A vertex the pool can key and blend. Everything except the position is
/// carried through untouched.
pub trait PooledVertex {
    fn position(&self) -> Vec3;
    fn set_position(&mut self, pos: Vec3);
}

impl PooledVertex for Vec3 {
    #[inline]
    fn position(&self) -> Vec3 {
        *self
    }

    #[inline]
    fn set_position(&mut self, pos: Vec3) {
        *self = pos;
    }
}

/// Lattice corner with an (unused by the pool) normal payload.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SimpleVertex {
    pub pos: Vec3,
    pub norm: Vec3,
}

impl SimpleVertex {
    #[inline]
    pub const fn new(pos: Vec3) -> Self {
        Self {
            pos,
            norm: Vec3::ZERO,
        }
    }
}

impl From<Vec3> for SimpleVertex {
    #[inline]
    fn from(pos: Vec3) -> Self {
        Self::new(pos)
    }
}

impl PooledVertex for SimpleVertex {
    #[inline]
    fn position(&self) -> Vec3 {
        self.pos
    }

    #[inline]
    fn set_position(&mut self, pos: Vec3) {
        self.pos = pos;
    }
}
