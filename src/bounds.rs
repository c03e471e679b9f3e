use crate::geometry::{EPSILON, Point};

/// Boundary ID for the bottom side (y = min), negative to prevent conflicts
/// with site indices.
pub const BOX_ID_BOTTOM: i32 = -1;
/// Boundary ID for the right side (x = max), negative to prevent conflicts
/// with site indices.
pub const BOX_ID_RIGHT: i32 = -2;
/// Boundary ID for the top side (y = max), negative to prevent conflicts
/// with site indices.
pub const BOX_ID_TOP: i32 = -3;
/// Boundary ID for the left side (x = min), negative to prevent conflicts
/// with site indices.
pub const BOX_ID_LEFT: i32 = -4;

/// Axis-aligned clip rectangle.
#[derive(Clone, Copy, Debug)]
pub struct BoundingBox {
    pub min: [f64; 2],
    pub max: [f64; 2],
}

impl BoundingBox {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min: [min_x, min_y],
            max: [max_x, max_y],
        }
    }

    pub fn width(&self) -> f64 {
        self.max[0] - self.min[0]
    }

    pub fn height(&self) -> f64 {
        self.max[1] - self.min[1]
    }

    pub fn is_valid(&self) -> bool {
        self.min[0].is_finite()
            && self.min[1].is_finite()
            && self.max[0].is_finite()
            && self.max[1].is_finite()
            && self.min[0] < self.max[0]
            && self.min[1] < self.max[1]
    }

    /// Absolute tolerance used for on-boundary and containment decisions,
    /// scaled to the rectangle's extent.
    pub(crate) fn tolerance(&self) -> f64 {
        let m = self.min[0]
            .abs()
            .max(self.min[1].abs())
            .max(self.max[0].abs())
            .max(self.max[1].abs());
        EPSILON * (1.0 + m)
    }

    /// Whether `p` lies inside the rectangle or on its boundary, within
    /// tolerance.
    pub fn contains(&self, p: Point) -> bool {
        let tol = self.tolerance();
        p.x >= self.min[0] - tol
            && p.x <= self.max[0] + tol
            && p.y >= self.min[1] - tol
            && p.y <= self.max[1] + tol
    }

    /// The four corners in counter-clockwise order, starting at (min, min).
    pub(crate) fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.min[0], self.min[1]),
            Point::new(self.max[0], self.min[1]),
            Point::new(self.max[0], self.max[1]),
            Point::new(self.min[0], self.max[1]),
        ]
    }

    /// Snap coordinates within tolerance onto the rectangle sides and clamp
    /// the result inside. Returns the snapped point and whether it lies on
    /// the boundary. Every boundary vertex in the pipeline goes through this
    /// one routine, so adjacent cells agree on shared border coordinates.
    pub(crate) fn snap_point(&self, p: Point) -> (Point, bool) {
        let tol = self.tolerance();
        let mut q = p;
        if (q.x - self.min[0]).abs() <= tol {
            q.x = self.min[0];
        } else if (q.x - self.max[0]).abs() <= tol {
            q.x = self.max[0];
        }
        if (q.y - self.min[1]).abs() <= tol {
            q.y = self.min[1];
        } else if (q.y - self.max[1]).abs() <= tol {
            q.y = self.max[1];
        }
        q.x = q.x.clamp(self.min[0], self.max[0]);
        q.y = q.y.clamp(self.min[1], self.max[1]);
        let on_border = q.x == self.min[0]
            || q.x == self.max[0]
            || q.y == self.min[1]
            || q.y == self.max[1];
        (q, on_border)
    }

    /// Canonical point where the line `origin + t * dir` meets the boundary.
    pub(crate) fn boundary_point(&self, origin: Point, dir: Point, t: f64) -> Point {
        self.snap_point(origin + dir * t).0
    }

    pub(crate) fn perimeter(&self) -> f64 {
        2.0 * (self.width() + self.height())
    }

    /// Arc-length position of a boundary point, walking counter-clockwise
    /// from the (min, min) corner. The four corners evaluate to the same
    /// position whichever of their two sides is picked.
    pub(crate) fn perimeter_coord(&self, p: Point) -> f64 {
        let tol = self.tolerance();
        let w = self.width();
        let h = self.height();
        if (p.y - self.min[1]).abs() <= tol {
            p.x - self.min[0]
        } else if (p.x - self.max[0]).abs() <= tol {
            w + (p.y - self.min[1])
        } else if (p.y - self.max[1]).abs() <= tol {
            w + h + (self.max[0] - p.x)
        } else {
            debug_assert!((p.x - self.min[0]).abs() <= tol, "point off the boundary");
            2.0 * w + h + (self.max[1] - p.y)
        }
    }

    /// Boundary ID of the side a boundary point lies on. Corners resolve in
    /// the fixed order bottom, right, top, left, which only matters for the
    /// side tag of a border edge, never for its geometry.
    pub(crate) fn side_of(&self, p: Point) -> i32 {
        let tol = self.tolerance();
        if (p.y - self.min[1]).abs() <= tol {
            BOX_ID_BOTTOM
        } else if (p.x - self.max[0]).abs() <= tol {
            BOX_ID_RIGHT
        } else if (p.y - self.max[1]).abs() <= tol {
            BOX_ID_TOP
        } else {
            BOX_ID_LEFT
        }
    }
}
