use crate::bounds::BoundingBox;
use crate::builder::RawEdge;
use crate::geometry::Point;

/// Whether the tessellation synthesizes edges along the bounding box.
///
/// With [`BorderMode::ClosedBorders`] every cell is a closed polygon and the
/// box perimeter is partitioned into border edges owned by the nearest
/// site. [`BorderMode::NoBorders`] keeps only the interior bisector pieces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BorderMode {
    ClosedBorders,
    NoBorders,
}

/// A finite Voronoi edge after clipping.
///
/// Interior edges carry the two adjacent site indices. Border edges carry
/// the owning site on the left and a negative box side id
/// ([`crate::bounds::BOX_ID_BOTTOM`] and friends) on the right.
#[derive(Clone, Copy, Debug)]
pub struct Edge {
    pub start: Point,
    pub end: Point,
    pub site_left: i32,
    pub site_right: i32,
}

/// Intersect the infinite line `origin + t * dir` with the box, returning
/// the parameter interval inside it. Liang-Barsky, one slab per axis.
fn line_rect_interval(origin: Point, dir: Point, bounds: &BoundingBox) -> Option<(f64, f64)> {
    let mut ta = f64::NEG_INFINITY;
    let mut tb = f64::INFINITY;
    let tol = bounds.tolerance();
    for axis in 0..2 {
        let (o, d) = if axis == 0 {
            (origin.x, dir.x)
        } else {
            (origin.y, dir.y)
        };
        let (lo, hi) = (bounds.min[axis], bounds.max[axis]);
        if d.abs() <= tol {
            if o < lo - tol || o > hi + tol {
                return None;
            }
            continue;
        }
        let (t0, t1) = {
            let a = (lo - o) / d;
            let b = (hi - o) / d;
            if a <= b { (a, b) } else { (b, a) }
        };
        ta = ta.max(t0);
        tb = tb.min(t1);
    }
    if ta < tb {
        Some((ta, tb))
    } else {
        None
    }
}

/// Clip the raw sweep output to the box and, in closed mode, partition the
/// box perimeter into border edges. Site indices are still in the
/// deduplicated space the sweep ran in.
pub(crate) fn clip_diagram(
    raw: &[RawEdge],
    sites: &[Point],
    bounds: &BoundingBox,
    mode: BorderMode,
) -> Vec<Edge> {
    let tol = bounds.tolerance();
    let mut edges = Vec::new();
    let mut crossings: Vec<Point> = Vec::new();

    for e in raw {
        let t_of = |p: Point| (p - e.origin).dot(e.dir);
        let t0 = e.ends[0].map_or(f64::NEG_INFINITY, t_of);
        let t1 = e.ends[1].map_or(f64::INFINITY, t_of);
        if t1 - t0 <= tol {
            continue;
        }
        let (ta, tb) = match line_rect_interval(e.origin, e.dir, bounds) {
            Some(window) => window,
            None => continue,
        };
        let s = t0.max(ta);
        let t = t1.min(tb);
        if t - s <= tol {
            continue;
        }

        let mut endpoint = |resolved: Option<Point>, clamped: f64, inside: bool| -> Point {
            match resolved {
                Some(p) if inside => {
                    let (snapped, on_border) = bounds.snap_point(p);
                    if on_border {
                        crossings.push(snapped);
                    }
                    snapped
                }
                _ => {
                    let p = bounds.boundary_point(e.origin, e.dir, clamped);
                    crossings.push(p);
                    p
                }
            }
        };
        let start = endpoint(e.ends[0], s, t0 >= ta);
        let end = endpoint(e.ends[1], t, t1 <= tb);

        edges.push(Edge {
            start,
            end,
            site_left: e.site_left as i32,
            site_right: e.site_right as i32,
        });
    }

    if mode == BorderMode::ClosedBorders && !sites.is_empty() {
        border_edges(&crossings, sites, bounds, &mut edges);
    }
    edges
}

/// Walk the box perimeter counterclockwise through every corner and edge
/// crossing, and emit one border edge per gap, owned by the site nearest
/// the gap's midpoint. Counterclockwise travel keeps the owner on the left.
fn border_edges(crossings: &[Point], sites: &[Point], bounds: &BoundingBox, out: &mut Vec<Edge>) {
    let tol = bounds.tolerance();
    let perimeter = bounds.perimeter();

    let mut marks: Vec<(f64, Point)> = bounds
        .corners()
        .iter()
        .map(|&c| (bounds.perimeter_coord(c), c))
        .collect();
    marks.extend(crossings.iter().map(|&p| (bounds.perimeter_coord(p), p)));
    marks.sort_by(|a, b| a.0.total_cmp(&b.0));

    // Merge marks closer than the dedupe window, keeping the first of each
    // cluster (corners sort ahead of coincident crossings).
    let mut merged: Vec<(f64, Point)> = Vec::with_capacity(marks.len());
    for m in marks {
        match merged.last() {
            Some(last) if m.0 - last.0 <= 4.0 * tol => {}
            _ => merged.push(m),
        }
    }
    // The wrap-around pair can be coincident too.
    if merged.len() > 1 {
        let first = merged[0].0;
        let last = merged[merged.len() - 1].0;
        if perimeter - last + first <= 4.0 * tol {
            merged.pop();
        }
    }

    for i in 0..merged.len() {
        let (_, a) = merged[i];
        let (_, b) = merged[(i + 1) % merged.len()];
        if a.distance(b) <= tol {
            continue;
        }
        // Every corner is a mark, so each gap lies on a single side and the
        // straight midpoint is on the perimeter.
        let mid = (a + b) * 0.5;
        let mut owner = 0usize;
        let mut best = f64::INFINITY;
        for (j, site) in sites.iter().enumerate() {
            let d = mid.distance_sq(*site);
            if d < best {
                best = d;
                owner = j;
            }
        }
        out.push(Edge {
            start: a,
            end: b,
            site_left: owner as i32,
            site_right: bounds.side_of(mid),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::approx_eq;

    fn unit_box() -> BoundingBox {
        BoundingBox::new(0.0, 0.0, 1000.0, 1000.0)
    }

    fn raw(site_left: usize, site_right: usize, origin: Point, dir: Point) -> RawEdge {
        RawEdge {
            site_left,
            site_right,
            origin,
            dir: dir.normalized(),
            ends: [None, None],
        }
    }

    #[test]
    fn test_open_line_clips_to_chord() {
        let bounds = unit_box();
        let sites = [Point::new(500.0, 700.0), Point::new(500.0, 300.0)];
        let e = raw(0, 1, Point::new(500.0, 500.0), Point::new(1.0, 0.0));
        let edges = clip_diagram(&[e], &sites, &bounds, BorderMode::NoBorders);
        assert_eq!(edges.len(), 1);
        let xs = [edges[0].start.x, edges[0].end.x];
        assert!(xs.contains(&0.0) && xs.contains(&1000.0));
        assert!(approx_eq(edges[0].start.y, 500.0));
    }

    #[test]
    fn test_line_outside_is_dropped() {
        let bounds = unit_box();
        let sites = [Point::new(500.0, 500.0)];
        let e = raw(0, 0, Point::new(500.0, 2000.0), Point::new(1.0, 0.0));
        let edges = clip_diagram(&[e], &sites, &bounds, BorderMode::NoBorders);
        assert!(edges.is_empty());
    }

    #[test]
    fn test_zero_length_edge_is_dropped() {
        let bounds = unit_box();
        let sites = [Point::new(400.0, 500.0), Point::new(600.0, 500.0)];
        let mut e = raw(0, 1, Point::new(500.0, 500.0), Point::new(0.0, 1.0));
        e.ends = [Some(Point::new(500.0, 500.0)), Some(Point::new(500.0, 500.0))];
        let edges = clip_diagram(&[e], &sites, &bounds, BorderMode::NoBorders);
        assert!(edges.is_empty());
    }

    #[test]
    fn test_border_partition_two_sites() {
        let bounds = unit_box();
        let sites = [Point::new(500.0, 700.0), Point::new(500.0, 300.0)];
        let e = raw(0, 1, Point::new(500.0, 500.0), Point::new(1.0, 0.0));
        let edges = clip_diagram(&[e], &sites, &bounds, BorderMode::ClosedBorders);
        // One interior chord plus six border pieces: the two crossings cut
        // the left and right sides in half.
        assert_eq!(edges.len(), 7);
        let border: Vec<&Edge> = edges.iter().filter(|e| e.site_right < 0).collect();
        assert_eq!(border.len(), 6);
        for b in &border {
            assert!(b.site_left == 0 || b.site_left == 1);
            // Owner is the site nearer the piece.
            let mid = (b.start + b.end) * 0.5;
            let d0 = mid.distance(sites[0]);
            let d1 = mid.distance(sites[1]);
            if b.site_left == 0 {
                assert!(d0 <= d1);
            } else {
                assert!(d1 <= d0);
            }
        }
        // Border pieces tile the perimeter exactly.
        let total: f64 = border.iter().map(|b| b.start.distance(b.end)).sum();
        assert!((total - bounds.perimeter()).abs() < 1e-6);
    }

    #[test]
    fn test_single_site_gets_whole_box() {
        let bounds = unit_box();
        let sites = [Point::new(400.0, 400.0)];
        let edges = clip_diagram(&[], &sites, &bounds, BorderMode::ClosedBorders);
        assert_eq!(edges.len(), 4);
        for e in &edges {
            assert_eq!(e.site_left, 0);
            assert!(e.site_right < 0);
        }
    }
}
