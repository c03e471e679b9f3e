use crate::geometry::{breakpoint_x, Point};

/// Which end of a raw edge a breakpoint traces: `Neg` runs against the edge
/// direction, `Pos` runs along it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum EdgeEnd {
    Neg = 0,
    Pos = 1,
}

/// A moving breakpoint between two adjacent arcs, tied to the raw edge it
/// traces out.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Breakpoint {
    pub(crate) edge: usize,
    pub(crate) end: EdgeEnd,
}

#[derive(Clone, Copy, Debug)]
struct Arc {
    site: usize,
    prev: Option<usize>,
    next: Option<usize>,
    /// Breakpoint shared with `prev` (absent for the leftmost arc).
    left: Option<Breakpoint>,
    /// Breakpoint shared with `next` (absent for the rightmost arc).
    right: Option<Breakpoint>,
    /// Bumped whenever the arc's neighborhood changes; circle events
    /// scheduled against an older generation are stale.
    generation: u64,
    alive: bool,
}

/// Data handed back when an arc is squeezed out, so the caller can close the
/// converging edges and stitch its neighbors together.
pub(crate) struct RemovedArc {
    pub(crate) prev: usize,
    pub(crate) next: usize,
    pub(crate) left: Breakpoint,
    pub(crate) right: Breakpoint,
}

/// The beach line as a doubly linked list of parabolic arcs in an arena.
/// Arcs are never reused; removed slots just go dead.
pub(crate) struct Beachline {
    arcs: Vec<Arc>,
    head: Option<usize>,
}

impl Beachline {
    pub(crate) fn new() -> Self {
        Self {
            arcs: Vec::new(),
            head: None,
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    fn alloc(&mut self, arc: Arc) -> usize {
        self.arcs.push(arc);
        self.arcs.len() - 1
    }

    /// First arc ever: the whole beachline is one parabola.
    pub(crate) fn seed(&mut self, site: usize) -> usize {
        let id = self.alloc(Arc {
            site,
            prev: None,
            next: None,
            left: None,
            right: None,
            generation: 0,
            alive: true,
        });
        self.head = Some(id);
        id
    }

    pub(crate) fn site_of(&self, arc: usize) -> usize {
        self.arcs[arc].site
    }

    pub(crate) fn prev_of(&self, arc: usize) -> Option<usize> {
        self.arcs[arc].prev
    }

    pub(crate) fn next_of(&self, arc: usize) -> Option<usize> {
        self.arcs[arc].next
    }

    #[cfg(test)]
    fn left_bp(&self, arc: usize) -> Option<Breakpoint> {
        self.arcs[arc].left
    }

    #[cfg(test)]
    fn right_bp(&self, arc: usize) -> Option<Breakpoint> {
        self.arcs[arc].right
    }

    pub(crate) fn is_alive(&self, arc: usize) -> bool {
        self.arcs[arc].alive
    }

    pub(crate) fn generation(&self, arc: usize) -> u64 {
        self.arcs[arc].generation
    }

    /// Invalidate any circle event scheduled against this arc.
    pub(crate) fn bump(&mut self, arc: usize) -> u64 {
        self.arcs[arc].generation += 1;
        self.arcs[arc].generation
    }

    /// Find the arc vertically above `x` by walking breakpoints left to
    /// right. The beachline holds O(n) arcs so a linear scan keeps the
    /// whole construction simple at the cost of worst-case O(n^2) overall.
    pub(crate) fn locate(&self, sites: &[Point], x: f64, directrix: f64) -> usize {
        let mut cur = self.head.expect("locate on an empty beachline");
        while let Some(next) = self.arcs[cur].next {
            let bx = breakpoint_x(
                sites[self.arcs[cur].site],
                sites[self.arcs[next].site],
                directrix,
            );
            // Ties go to the right arc so a new site lands on the arc it
            // actually splits.
            if x < bx {
                break;
            }
            cur = next;
        }
        cur
    }

    /// Split `arc` under a new site: the old slot keeps the left piece, a
    /// fresh arc for `site` goes in the middle, and a copy of the old arc
    /// becomes the right piece (inheriting the old right breakpoint).
    /// Returns (middle, right piece).
    pub(crate) fn split(
        &mut self,
        arc: usize,
        site: usize,
        left_bp: Breakpoint,
        right_bp: Breakpoint,
    ) -> (usize, usize) {
        let old = self.arcs[arc];
        let mid = self.alloc(Arc {
            site,
            prev: Some(arc),
            next: None,
            left: Some(left_bp),
            right: Some(right_bp),
            generation: 0,
            alive: true,
        });
        let right = self.alloc(Arc {
            site: old.site,
            prev: Some(mid),
            next: old.next,
            left: Some(right_bp),
            right: old.right,
            generation: 0,
            alive: true,
        });
        self.arcs[mid].next = Some(right);
        if let Some(n) = old.next {
            self.arcs[n].prev = Some(right);
        }
        self.arcs[arc].next = Some(mid);
        self.arcs[arc].right = Some(left_bp);
        self.bump(arc);
        (mid, right)
    }

    /// Append a new arc after `arc` without splitting it; used when the new
    /// site shares the sweep line with everything seen so far and the
    /// bisector is vertical.
    pub(crate) fn append_after(&mut self, arc: usize, site: usize, bp: Breakpoint) -> usize {
        let old_next = self.arcs[arc].next;
        let id = self.alloc(Arc {
            site,
            prev: Some(arc),
            next: old_next,
            left: Some(bp),
            right: self.arcs[arc].right,
            generation: 0,
            alive: true,
        });
        if let Some(n) = old_next {
            self.arcs[n].prev = Some(id);
        }
        self.arcs[arc].next = Some(id);
        self.arcs[arc].right = Some(bp);
        self.bump(arc);
        id
    }

    /// Delete a squeezed-out arc and stitch its neighbors together. The
    /// caller installs the new breakpoint between them afterwards via
    /// [`Beachline::link`].
    pub(crate) fn remove(&mut self, arc: usize) -> RemovedArc {
        let a = self.arcs[arc];
        let prev = a.prev.expect("removed arc must have a left neighbor");
        let next = a.next.expect("removed arc must have a right neighbor");
        let left = a.left.expect("removed arc must have a left breakpoint");
        let right = a.right.expect("removed arc must have a right breakpoint");
        self.arcs[prev].next = Some(next);
        self.arcs[next].prev = Some(prev);
        self.arcs[arc].alive = false;
        RemovedArc {
            prev,
            next,
            left,
            right,
        }
    }

    /// Install the breakpoint between two arcs made adjacent by a removal.
    pub(crate) fn link(&mut self, left_arc: usize, right_arc: usize, bp: Breakpoint) {
        self.arcs[left_arc].right = Some(bp);
        self.arcs[right_arc].left = Some(bp);
    }
}
