use std::ops::{Add, Mul, Sub};

/// Global tolerance for floating-point comparisons. Scaled by operand
/// magnitude in [`approx_eq`], so it acts as a combined absolute and
/// relative epsilon.
pub const EPSILON: f64 = 1e-9;

/// A point (or vector) in the plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn dot(self, rhs: Self) -> f64 {
        self.x * rhs.x + self.y * rhs.y
    }

    pub fn cross(self, rhs: Self) -> f64 {
        self.x * rhs.y - self.y * rhs.x
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn distance(self, rhs: Self) -> f64 {
        (self - rhs).length()
    }

    pub fn distance_sq(self, rhs: Self) -> f64 {
        let d = self - rhs;
        d.dot(d)
    }

    /// Unit vector in the same direction. The zero vector is returned
    /// unchanged; callers only normalize bisector directions, which come
    /// from pairs of distinct sites.
    pub fn normalized(self) -> Self {
        let len = self.length();
        if len > 0.0 {
            self * (1.0 / len)
        } else {
            self
        }
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

/// Combined absolute/relative comparison of two coordinates.
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPSILON * (1.0 + a.abs().max(b.abs()))
}

/// The perpendicular of `v`, rotated clockwise (x-right, y-up). This is the
/// direction a breakpoint between a left arc `a` and a right arc `b` travels
/// when `v = b - a`.
pub(crate) fn perp_cw(v: Point) -> Point {
    Point::new(v.y, -v.x)
}

/// Twice the signed area of the triangle `a`, `b`, `c`. Positive for a
/// counter-clockwise turn at `b`.
pub fn orient(a: Point, b: Point, c: Point) -> f64 {
    (b - a).cross(c - b)
}

/// Whether `a`, `b`, `c` make a strict clockwise turn. Collinear triples,
/// within tolerance, are rejected so they never schedule a circle event.
pub(crate) fn is_clockwise(a: Point, b: Point, c: Point) -> bool {
    let m = a.x.abs().max(a.y.abs()).max(b.x.abs()).max(b.y.abs()).max(c.x.abs()).max(c.y.abs());
    orient(a, b, c) < -(EPSILON * (1.0 + m * m))
}

/// Circumcenter of the triangle `a`, `b`, `c`, equidistant from all three.
/// Returns `None` for a (numerically) collinear triple instead of producing
/// NaN coordinates.
pub fn circumcenter(a: Point, b: Point, c: Point) -> Option<Point> {
    let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
    let m = a.x.abs().max(a.y.abs()).max(b.x.abs()).max(b.y.abs()).max(c.x.abs()).max(c.y.abs());
    if d.abs() <= EPSILON * (1.0 + m * m) {
        return None;
    }

    let a2 = a.dot(a);
    let b2 = b.dot(b);
    let c2 = c.dot(c);
    let ux = (a2 * (b.y - c.y) + b2 * (c.y - a.y) + c2 * (a.y - b.y)) / d;
    let uy = (a2 * (c.x - b.x) + b2 * (a.x - c.x) + c2 * (b.x - a.x)) / d;
    Some(Point::new(ux, uy))
}

/// Intersection of segments `a0`-`a1` and `b0`-`b1`, or `None` when they are
/// parallel or miss each other.
pub fn segment_intersection(a0: Point, a1: Point, b0: Point, b1: Point) -> Option<Point> {
    let da = a1 - a0;
    let db = b1 - b0;
    let denom = da.cross(db);
    let m = da.x.abs().max(da.y.abs()).max(db.x.abs()).max(db.y.abs());
    if denom.abs() <= EPSILON * (1.0 + m * m) {
        return None;
    }

    let diff = b0 - a0;
    let t = diff.cross(db) / denom;
    let u = diff.cross(da) / denom;
    let slack = EPSILON * (1.0 + m);
    if t < -slack || t > 1.0 + slack || u < -slack || u > 1.0 + slack {
        return None;
    }
    Some(a0 + da * t)
}

/// Height of the parabola with the given focus and horizontal directrix,
/// evaluated at `x`. Callers guarantee the focus does not lie on the
/// directrix.
pub(crate) fn parabola_y(focus: Point, directrix: f64, x: f64) -> f64 {
    let dx = x - focus.x;
    (dx * dx + focus.y * focus.y - directrix * directrix) / (2.0 * (focus.y - directrix))
}

/// X-coordinate of the breakpoint between the arc of site `p` (left) and the
/// arc of site `r` (right) while the sweep line sits at `directrix`.
pub(crate) fn breakpoint_x(p: Point, r: Point, directrix: f64) -> f64 {
    if approx_eq(p.y, r.y) {
        // Cohorizontal sites: the bisector is vertical.
        return (p.x + r.x) * 0.5;
    }
    // A site on the sweep line has a degenerate, vertical-ray arc.
    if approx_eq(p.y, directrix) {
        return p.x;
    }
    if approx_eq(r.y, directrix) {
        return r.x;
    }

    let dp = 2.0 * (p.y - directrix);
    let dr = 2.0 * (r.y - directrix);
    let a = 1.0 / dp - 1.0 / dr;
    let b = -2.0 * (p.x / dp - r.x / dr);
    let c = (p.x * p.x + p.y * p.y - directrix * directrix) / dp
        - (r.x * r.x + r.y * r.y - directrix * directrix) / dr;

    // a = 2(r.y - p.y) / (dp * dr) is nonzero here since p.y != r.y.
    let disc = (b * b - 4.0 * a * c).max(0.0).sqrt();
    let x1 = (-b - disc) / (2.0 * a);
    let x2 = (-b + disc) / (2.0 * a);
    let (lo, hi) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };

    // Of the two parabola intersections, the left-to-right transition from
    // p's arc to r's arc is the larger root when p sits below r.
    if p.y < r.y {
        hi
    } else {
        lo
    }
}
