use std::collections::HashMap;

use rayon::prelude::*;

use crate::bounds::BoundingBox;
use crate::builder::sweep;
use crate::cell::Cell;
use crate::clip::{clip_diagram, BorderMode, Edge};
use crate::error::VoronoiError;
use crate::geometry::Point;

/// A bounded planar Voronoi tessellation.
///
/// Feed it sites with [`Tessellation::set_sites`], run
/// [`Tessellation::calculate`], then read back [`Tessellation::edges`] and
/// [`Tessellation::cells`]. [`Tessellation::relax`] moves each site to its
/// cell centroid for Lloyd iteration.
#[derive(Debug)]
pub struct Tessellation {
    bounds: BoundingBox,
    border_mode: BorderMode,
    sites: Vec<Point>,
    cells: Vec<Cell>,
    edges: Vec<Edge>,
}

impl Tessellation {
    pub fn new(bounds: BoundingBox, border_mode: BorderMode) -> Result<Self, VoronoiError> {
        if !bounds.is_valid() {
            return Err(VoronoiError::InvalidBounds {
                min_x: bounds.min[0],
                min_y: bounds.min[1],
                max_x: bounds.max[0],
                max_y: bounds.max[1],
            });
        }
        Ok(Self {
            bounds,
            border_mode,
            sites: Vec::new(),
            cells: Vec::new(),
            edges: Vec::new(),
        })
    }

    /// Replace the site set. Coordinates come flat as `[x0, y0, x1, y1, ..]`
    /// and every site must be finite and inside the bounds. Previous results
    /// are discarded.
    pub fn set_sites(&mut self, coords: &[f64]) -> Result<(), VoronoiError> {
        if coords.len() % 2 != 0 {
            return Err(VoronoiError::OddCoordinates { len: coords.len() });
        }
        let mut sites = Vec::with_capacity(coords.len() / 2);
        for (i, pair) in coords.chunks_exact(2).enumerate() {
            let p = Point::new(pair[0], pair[1]);
            if !p.is_finite() {
                return Err(VoronoiError::NonFiniteSite {
                    index: i,
                    x: p.x,
                    y: p.y,
                });
            }
            if !self.bounds.contains(p) {
                return Err(VoronoiError::SiteOutOfBounds {
                    index: i,
                    x: p.x,
                    y: p.y,
                });
            }
            sites.push(p);
        }
        self.sites = sites;
        self.cells.clear();
        self.edges.clear();
        Ok(())
    }

    /// Build the diagram for the current sites.
    ///
    /// Bit-identical duplicate sites collapse to one generator for the
    /// sweep; the first occurrence owns the cell and later duplicates get
    /// empty cells. In [`BorderMode::NoBorders`] every cell stays empty
    /// since open regions have no polygon.
    pub fn calculate(&mut self) -> Result<(), VoronoiError> {
        let mut unique: Vec<Point> = Vec::with_capacity(self.sites.len());
        let mut orig_of: Vec<usize> = Vec::with_capacity(self.sites.len());
        let mut owner_unique: Vec<Option<usize>> = vec![None; self.sites.len()];
        let mut seen: HashMap<(u64, u64), usize> = HashMap::new();
        for (i, &p) in self.sites.iter().enumerate() {
            let key = (p.x.to_bits(), p.y.to_bits());
            if seen.contains_key(&key) {
                continue;
            }
            seen.insert(key, unique.len());
            owner_unique[i] = Some(unique.len());
            orig_of.push(i);
            unique.push(p);
        }

        let raw = sweep(&unique);
        let mut edges = clip_diagram(&raw, &unique, &self.bounds, self.border_mode);
        for e in &mut edges {
            if e.site_left >= 0 {
                e.site_left = orig_of[e.site_left as usize] as i32;
            }
            if e.site_right >= 0 {
                e.site_right = orig_of[e.site_right as usize] as i32;
            }
        }

        let mut cells = Vec::with_capacity(self.sites.len());
        if self.border_mode == BorderMode::ClosedBorders {
            let mut segments: Vec<Vec<(Point, Point)>> = vec![Vec::new(); self.sites.len()];
            for e in &edges {
                for side in [e.site_left, e.site_right] {
                    if side >= 0 {
                        segments[side as usize].push((e.start, e.end));
                    }
                }
            }
            let match_tol = 8.0 * self.bounds.tolerance();
            for (i, &site) in self.sites.iter().enumerate() {
                let cell = if owner_unique[i].is_some() {
                    Cell::assemble(i, site, &segments[i], match_tol)?
                } else {
                    Cell::empty(i, site)
                };
                cells.push(cell);
            }
        } else {
            for (i, &site) in self.sites.iter().enumerate() {
                cells.push(Cell::empty(i, site));
            }
        }

        self.edges = edges;
        self.cells = cells;
        Ok(())
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    pub fn count_sites(&self) -> usize {
        self.sites.len()
    }

    pub fn count_cells(&self) -> usize {
        self.cells.len()
    }

    /// One Lloyd step: move every site to its cell centroid. Sites whose
    /// cells are empty stay put. A stale or missing diagram makes this a
    /// no-op; results are cleared so the caller recalculates.
    pub fn relax(&mut self) {
        if self.cells.len() != self.sites.len() {
            return;
        }
        let relaxed: Vec<Point> = self
            .cells
            .par_iter()
            .zip(self.sites.par_iter())
            .map(|(cell, &site)| {
                if cell.is_empty() {
                    site
                } else {
                    cell.centroid()
                }
            })
            .collect();
        self.sites = relaxed;
        self.cells.clear();
        self.edges.clear();
    }
}

/// Build a tessellation in one call from flat `[x0, y0, x1, y1, ..]` site
/// coordinates.
pub fn tessellate(
    sites: &[f64],
    bounds: BoundingBox,
    border_mode: BorderMode,
) -> Result<Tessellation, VoronoiError> {
    let mut tess = Tessellation::new(bounds, border_mode)?;
    tess.set_sites(sites)?;
    tess.calculate()?;
    Ok(tess)
}
