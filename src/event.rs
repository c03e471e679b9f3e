use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::geometry::Point;

/// A pending sweep event.
///
/// Circle events carry the generation the referenced arc had when the event
/// was scheduled. A mismatch at pop time means the beachline changed around
/// the arc and the event is stale; it is discarded without effect. This is
/// the lazy counterpart of arbitrary queue removal.
#[derive(Clone, Copy, Debug)]
pub(crate) enum SweepEvent {
    Site {
        site: usize,
    },
    Circle {
        arc: usize,
        generation: u64,
        center: Point,
    },
}

struct QueuedEvent {
    /// Sweep position: the site's y, or the bottom of the circumcircle.
    y: f64,
    x: f64,
    /// Sites before circle events on a coordinate tie.
    kind: u8,
    /// Push sequence number; for sites this is the input order.
    seq: u64,
    event: SweepEvent,
}

impl PartialEq for QueuedEvent {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueuedEvent {}

impl PartialOrd for QueuedEvent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueuedEvent {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap pops the maximum: greatest y first, then smallest x,
        // then sites before circles, then earliest push.
        self.y
            .total_cmp(&other.y)
            .then_with(|| other.x.total_cmp(&self.x))
            .then_with(|| other.kind.cmp(&self.kind))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Priority queue of site and circle events, ordered by descending sweep
/// coordinate with deterministic tie-breaks.
pub(crate) struct EventQueue {
    heap: BinaryHeap<QueuedEvent>,
    seq: u64,
}

impl EventQueue {
    pub(crate) fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    fn push(&mut self, y: f64, x: f64, kind: u8, event: SweepEvent) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(QueuedEvent {
            y,
            x,
            kind,
            seq,
            event,
        });
    }

    pub(crate) fn push_site(&mut self, site: usize, pos: Point) {
        self.push(pos.y, pos.x, 0, SweepEvent::Site { site });
    }

    /// Schedule a circle event at sweep position `y` (the bottom of the
    /// circumcircle through the arc's triple).
    pub(crate) fn push_circle(&mut self, arc: usize, generation: u64, center: Point, y: f64) {
        self.push(
            y,
            center.x,
            1,
            SweepEvent::Circle {
                arc,
                generation,
                center,
            },
        );
    }

    pub(crate) fn pop(&mut self) -> Option<(f64, SweepEvent)> {
        self.heap.pop().map(|q| (q.y, q.event))
    }
}
