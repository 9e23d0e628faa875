/// Thresholded slice, row-major, `true` where the voxel is solid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SliceMask {
    pub width: u32,
    pub height: u32,
    pub active: Vec<bool>,
}

impl SliceMask {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            active: vec![false; width as usize * height as usize],
        }
    }

    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> bool) -> Self {
        let mut mask = Self::new(width, height);
        for y in 0..height {
            for x in 0..width {
                let i = mask.idx(x, y);
                mask.active[i] = f(x, y);
            }
        }
        mask
    }

    #[inline]
    pub fn idx(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> bool {
        self.active[self.idx(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: u32, y: u32, on: bool) {
        let i = self.idx(x, y);
        self.active[i] = on;
    }

    pub fn active_count(&self) -> usize {
        self.active.iter().filter(|a| **a).count()
    }
}
