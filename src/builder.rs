use crate::beachline::{Beachline, Breakpoint, EdgeEnd};
use crate::event::{EventQueue, SweepEvent};
use crate::geometry::{
    approx_eq, circumcenter, is_clockwise, parabola_y, perp_cw, Point, EPSILON,
};

/// An unclipped Voronoi edge: a maximal straight piece of a bisector.
///
/// The edge lives on the line `origin + t * dir`. A resolved end pins one
/// side to a vertex; an open end extends to infinity on that side until
/// clipping. `ends[0]` is the `t -> -inf` side, `ends[1]` the `t -> +inf`
/// side. Walking along `dir`, `site_left` is the site on the left.
#[derive(Clone, Copy, Debug)]
pub(crate) struct RawEdge {
    pub(crate) site_left: usize,
    pub(crate) site_right: usize,
    pub(crate) origin: Point,
    pub(crate) dir: Point,
    pub(crate) ends: [Option<Point>; 2],
}

struct Sweep<'a> {
    sites: &'a [Point],
    beach: Beachline,
    queue: EventQueue,
    edges: Vec<RawEdge>,
}

/// Run the sweep over a deduplicated site set and return every bisector
/// piece it traced. Sites are processed top to bottom.
pub(crate) fn sweep(sites: &[Point]) -> Vec<RawEdge> {
    let mut state = Sweep {
        sites,
        beach: Beachline::new(),
        queue: EventQueue::new(),
        edges: Vec::new(),
    };
    for (i, &p) in sites.iter().enumerate() {
        state.queue.push_site(i, p);
    }
    while let Some((y, event)) = state.queue.pop() {
        match event {
            SweepEvent::Site { site } => state.handle_site(site),
            SweepEvent::Circle {
                arc,
                generation,
                center,
            } => state.handle_circle(arc, generation, center, y),
        }
    }
    state.edges
}

impl Sweep<'_> {
    fn handle_site(&mut self, site: usize) {
        let p = self.sites[site];
        if self.beach.is_empty() {
            self.beach.seed(site);
            return;
        }

        let arc = self.beach.locate(self.sites, p.x, p.y);
        let q = self.sites[self.beach.site_of(arc)];

        // A site on the current directrix sees a degenerate (vertical-ray)
        // parabola above it. This only happens while every site seen so far
        // shares the top row, so the new arc just goes in side by side and
        // the bisector is a fully open vertical line.
        if approx_eq(q.y, p.y) {
            let edge = self.push_edge(RawEdge {
                site_left: site,
                site_right: self.beach.site_of(arc),
                origin: (q + p) * 0.5,
                dir: perp_cw(p - q).normalized(),
                ends: [None, None],
            });
            self.beach.append_after(
                arc,
                site,
                Breakpoint {
                    edge,
                    end: EdgeEnd::Pos,
                },
            );
            return;
        }

        // Normal split: the new site pierces `arc` and both breakpoints
        // start at the point where it emerges on the parabola.
        let emergence = Point::new(p.x, parabola_y(q, p.y, p.x));
        let edge = self.push_edge(RawEdge {
            site_left: self.beach.site_of(arc),
            site_right: site,
            origin: emergence,
            dir: perp_cw(q - p).normalized(),
            ends: [None, None],
        });
        let left_bp = Breakpoint {
            edge,
            end: EdgeEnd::Neg,
        };
        let right_bp = Breakpoint {
            edge,
            end: EdgeEnd::Pos,
        };
        let (_mid, right) = self.beach.split(arc, site, left_bp, right_bp);

        self.schedule(arc, p.y);
        self.schedule(right, p.y);
    }

    fn handle_circle(&mut self, arc: usize, generation: u64, center: Point, y: f64) {
        if !self.beach.is_alive(arc) || self.beach.generation(arc) != generation {
            return;
        }

        let removed = self.beach.remove(arc);
        self.resolve(removed.left, center);
        self.resolve(removed.right, center);

        let l = self.beach.site_of(removed.prev);
        let r = self.beach.site_of(removed.next);
        let edge = self.push_edge(RawEdge {
            site_left: r,
            site_right: l,
            origin: center,
            dir: perp_cw(self.sites[r] - self.sites[l]).normalized(),
            ends: [Some(center), None],
        });
        self.beach.link(
            removed.prev,
            removed.next,
            Breakpoint {
                edge,
                end: EdgeEnd::Pos,
            },
        );

        self.schedule(removed.prev, y);
        self.schedule(removed.next, y);
    }

    /// Try to schedule a circle event for `arc`. Always bumps the arc's
    /// generation first, so whatever was queued for it before goes stale
    /// even if no new event qualifies.
    fn schedule(&mut self, arc: usize, sweep_y: f64) {
        let generation = self.beach.bump(arc);
        let (prev, next) = match (self.beach.prev_of(arc), self.beach.next_of(arc)) {
            (Some(p), Some(n)) => (p, n),
            _ => return,
        };
        let a = self.sites[self.beach.site_of(prev)];
        let b = self.sites[self.beach.site_of(arc)];
        let c = self.sites[self.beach.site_of(next)];

        // The breakpoints around `arc` converge only when the triple turns
        // clockwise in sweep order.
        if !is_clockwise(a, b, c) {
            return;
        }
        let center = match circumcenter(a, b, c) {
            Some(center) => center,
            None => return,
        };
        let event_y = center.y - center.distance(a);
        if event_y > sweep_y + EPSILON * (1.0 + sweep_y.abs()) {
            return;
        }
        self.queue.push_circle(arc, generation, center, event_y);
    }

    fn resolve(&mut self, bp: Breakpoint, at: Point) {
        self.edges[bp.edge].ends[bp.end as usize] = Some(at);
    }

    fn push_edge(&mut self, edge: RawEdge) -> usize {
        self.edges.push(edge);
        self.edges.len() - 1
    }
}
