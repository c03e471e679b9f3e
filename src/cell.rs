use crate::error::VoronoiError;
use crate::geometry::{orient, Point};

/// A Voronoi cell: the counterclockwise polygon of the region closer to its
/// site than to any other. Cells for duplicate sites (and every cell in
/// no-border mode) stay empty.
#[derive(Clone, Debug)]
pub struct Cell {
    id: usize,
    site: Point,
    points: Vec<Point>,
}

impl Cell {
    pub(crate) fn empty(id: usize, site: Point) -> Self {
        Self {
            id,
            site,
            points: Vec::new(),
        }
    }

    /// Chain a site's edge segments into one closed ring. Segments arrive
    /// in arbitrary order and orientation; endpoints are matched within
    /// `match_tol`. A gap in the ring is a hard error since it means the
    /// diagram itself is inconsistent.
    pub(crate) fn assemble(
        id: usize,
        site: Point,
        segments: &[(Point, Point)],
        match_tol: f64,
    ) -> Result<Self, VoronoiError> {
        let mut pool: Vec<(Point, Point)> = segments
            .iter()
            .copied()
            .filter(|(a, b)| a.distance(*b) > match_tol)
            .collect();
        if pool.is_empty() {
            return Ok(Self::empty(id, site));
        }

        let (first_a, first_b) = pool.swap_remove(0);
        let mut points = vec![first_a];
        let mut cursor = first_b;
        while !pool.is_empty() {
            let mut best = None;
            let mut best_dist = match_tol;
            for (i, (a, b)) in pool.iter().enumerate() {
                let da = cursor.distance(*a);
                let db = cursor.distance(*b);
                if da <= best_dist && da <= db {
                    best_dist = da;
                    best = Some((i, *b));
                } else if db <= best_dist {
                    best_dist = db;
                    best = Some((i, *a));
                }
            }
            let (i, far) = match best {
                Some(hit) => hit,
                None => return Err(VoronoiError::OpenCell { site: id }),
            };
            pool.swap_remove(i);
            points.push(cursor);
            cursor = far;
        }
        if cursor.distance(points[0]) > match_tol {
            return Err(VoronoiError::OpenCell { site: id });
        }

        let mut cell = Self { id, site, points };
        if cell.signed_area() < 0.0 {
            cell.points.reverse();
        }
        Ok(cell)
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn site(&self) -> Point {
        self.site
    }

    /// Ring vertices in counterclockwise order. Empty for a cell that was
    /// never assembled.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    fn signed_area(&self) -> f64 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }
        let mut sum = 0.0;
        for i in 0..n {
            sum += self.points[i].cross(self.points[(i + 1) % n]);
        }
        sum * 0.5
    }

    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Area centroid of the ring. Falls back to the site position for an
    /// empty cell and to the vertex mean when the ring is degenerate.
    pub fn centroid(&self) -> Point {
        let n = self.points.len();
        if n == 0 {
            return self.site;
        }
        let mut area_sum = 0.0;
        let mut cx = 0.0;
        let mut cy = 0.0;
        for i in 0..n {
            let p = self.points[i];
            let q = self.points[(i + 1) % n];
            let cross = p.cross(q);
            area_sum += cross;
            cx += (p.x + q.x) * cross;
            cy += (p.y + q.y) * cross;
        }
        if area_sum.abs() < 1e-9 {
            let mut mean = Point::new(0.0, 0.0);
            for p in &self.points {
                mean = mean + *p;
            }
            return mean * (1.0 / n as f64);
        }
        Point::new(cx / (3.0 * area_sum), cy / (3.0 * area_sum))
    }

    /// Point-in-cell test against the counterclockwise ring, with a small
    /// tolerance so boundary points count as inside.
    pub fn contains(&self, p: Point, tol: f64) -> bool {
        let n = self.points.len();
        if n < 3 {
            return false;
        }
        for i in 0..n {
            if orient(self.points[i], self.points[(i + 1) % n], p) < -tol {
                return false;
            }
        }
        true
    }
}
