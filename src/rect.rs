use nalgebra::Matrix1x4;
use num::Float;
use std::fmt::Debug;

/* ------------------------------------------------------------------------------
 * Rect struct
 * ------------------------------------------------------------------------------ */
#[derive(Debug, Clone, PartialEq)]
pub struct Rect<T>
where
    T: Debug + Float,
{
    tlwh: Matrix1x4<T>,
}

impl<T> Rect<T>
where
    T: Clone + Debug + Float,
{
    pub fn new(x: T, y: T, width: T, height: T) -> Self {
        let tlwh = Matrix1x4::new(x, y, width, height);
        Self { tlwh }
    }

    /// Square region of `size` pixels anchored at the operator-selected point.
    pub fn square(x: T, y: T, size: T) -> Self {
        Self::new(x, y, size, size)
    }

    #[inline(always)]
    pub fn x(&self) -> T {
        self.tlwh[(0, 0)]
    }

    #[inline(always)]
    pub fn set_x(&mut self, x: T) {
        self.tlwh[(0, 0)] = x;
    }

    #[inline(always)]
    pub fn y(&self) -> T {
        self.tlwh[(0, 1)]
    }

    #[inline(always)]
    pub fn set_y(&mut self, y: T) {
        self.tlwh[(0, 1)] = y;
    }

    #[inline(always)]
    pub fn width(&self) -> T {
        self.tlwh[(0, 2)]
    }

    #[inline(always)]
    pub fn set_width(&mut self, width: T) {
        self.tlwh[(0, 2)] = width;
    }

    #[inline(always)]
    pub fn height(&self) -> T {
        self.tlwh[(0, 3)]
    }

    #[inline(always)]
    pub fn set_height(&mut self, height: T) {
        self.tlwh[(0, 3)] = height;
    }

    /// Box midpoint.
    pub fn center(&self) -> (T, T) {
        let two = T::from(2).unwrap();
        (
            self.tlwh[(0, 0)] + self.tlwh[(0, 2)] / two,
            self.tlwh[(0, 1)] + self.tlwh[(0, 3)] / two,
        )
    }

    /// Open-interval overlap test. Boxes that merely touch along an edge or
    /// at a corner do not overlap; the intersection must have positive area.
    /// Zero-size boxes therefore never overlap anything.
    pub fn overlaps(&self, other: &Rect<T>) -> bool {
        // a degenerate box has no area to intersect, even when it sits
        // strictly inside the other box
        if self.tlwh[(0, 2)] <= T::zero()
            || self.tlwh[(0, 3)] <= T::zero()
            || other.tlwh[(0, 2)] <= T::zero()
            || other.tlwh[(0, 3)] <= T::zero()
        {
            return false;
        }
        self.tlwh[(0, 0)] < other.tlwh[(0, 0)] + other.tlwh[(0, 2)]
            && self.tlwh[(0, 0)] + self.tlwh[(0, 2)] > other.tlwh[(0, 0)]
            && self.tlwh[(0, 1)] < other.tlwh[(0, 1)] + other.tlwh[(0, 3)]
            && self.tlwh[(0, 1)] + self.tlwh[(0, 3)] > other.tlwh[(0, 1)]
    }

    /// Get bounding box as [x1, y1, x2, y2] format
    pub fn get_xyxy(&self) -> [T; 4] {
        [
            self.tlwh[(0, 0)],
            self.tlwh[(0, 1)],
            self.tlwh[(0, 0)] + self.tlwh[(0, 2)],
            self.tlwh[(0, 1)] + self.tlwh[(0, 3)],
        ]
    }

    /// Create Rect from [x1, y1, x2, y2] format
    pub fn from_xyxy(x1: T, y1: T, x2: T, y2: T) -> Self {
        Self::new(x1, y1, x2 - x1, y2 - y1)
    }
}
