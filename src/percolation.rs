/// Percolation grid: an n×n field of sites that open one at a time, backed
/// by quick-find disjoint sets with two virtual terminals
///
/// Site (row, col) maps to disjoint-set label `n*row + col + 1`. Label 0 is
/// the virtual source (above the top row) and label n²+1 the virtual sink
/// (below the bottom row), so "does the grid percolate" collapses to a
/// single component-equality check between the two terminals.
///
/// Fullness is tracked in a second structure that never wires the sink.
/// With only one structure, the moment the grid percolates the sink's
/// component merges with the source's, and every open bottom-row site would
/// report full even without a path to the top (backwash).
use log::debug;

use crate::error::PercolationError;
use crate::quick_find::QuickFind;

#[derive(Debug)]
pub struct Percolation {
    /// Open/blocked flags, row-major, `size * size` entries.
    open: Vec<bool>,
    /// Source and sink wired to the boundary rows; answers `percolates`.
    components: QuickFind,
    /// Source-only wiring; answers `is_full` without backwash.
    full_components: QuickFind,
    size: usize,
    source: usize,
    sink: usize,
    open_count: usize,
}

impl Percolation {
    /// Create an n×n grid with every site blocked.
    ///
    /// The source is pre-unioned with every top-row label. The sink is
    /// pre-unioned with every bottom-row label when n ≥ 2; a 1×1 grid wires
    /// its sink in `open` instead, since its one site sits in both boundary
    /// rows and eager wiring would make a fully blocked grid percolate.
    pub fn new(n: usize) -> Result<Self, PercolationError> {
        if n == 0 {
            return Err(PercolationError::InvalidSize(n));
        }

        let source = 0;
        let sink = n * n + 1;
        let mut components = QuickFind::new(n * n + 2)?;
        let mut full_components = QuickFind::new(n * n + 2)?;

        for col in 0..n {
            components.union(source, col + 1)?;
            full_components.union(source, col + 1)?;
            if n > 1 {
                components.union(sink, n * (n - 1) + col + 1)?;
            }
        }

        Ok(Percolation {
            open: vec![false; n * n],
            components,
            full_components,
            size: n,
            source,
            sink,
            open_count: 0,
        })
    }

    /// Grid dimension n.
    pub fn size(&self) -> usize {
        self.size
    }

    fn check_coords(&self, row: usize, col: usize) -> Result<(), PercolationError> {
        if row >= self.size {
            return Err(PercolationError::OutOfRange {
                index: row,
                limit: self.size,
            });
        }
        if col >= self.size {
            return Err(PercolationError::OutOfRange {
                index: col,
                limit: self.size,
            });
        }
        Ok(())
    }

    /// Disjoint-set label for already-validated coordinates.
    ///
    /// Bijection between valid (row, col) pairs and labels `1..=n*n`.
    fn label(&self, row: usize, col: usize) -> usize {
        self.size * row + col + 1
    }

    /// Union two site labels in both structures.
    fn link(&mut self, a: usize, b: usize) -> Result<(), PercolationError> {
        self.components.union(a, b)?;
        self.full_components.union(a, b)?;
        Ok(())
    }

    /// Open a site and union it with its open orthogonal neighbors.
    ///
    /// The open-site counter moves only on the closed→open transition, but
    /// the neighbor unions run on every call, so re-opening a site still
    /// picks up neighbors that opened since (union on a merged pair is a
    /// no-op). Neighbors outside the grid are skipped by bounds comparison,
    /// not by probing and discarding a range error.
    pub fn open(&mut self, row: usize, col: usize) -> Result<(), PercolationError> {
        self.check_coords(row, col)?;
        let idx = row * self.size + col;
        let was_percolating = self.percolates();

        if !self.open[idx] {
            self.open[idx] = true;
            self.open_count += 1;
            debug!("opened site ({row}, {col}); {} open so far", self.open_count);

            if self.size == 1 {
                // deferred sink wiring for the 1x1 grid
                self.components.union(self.sink, self.label(0, 0))?;
            }
        }

        let site = self.label(row, col);

        // up
        if row > 0 && self.open[idx - self.size] {
            self.link(site, self.label(row - 1, col))?;
        }
        // left
        if col > 0 && self.open[idx - 1] {
            self.link(site, self.label(row, col - 1))?;
        }
        // down
        if row + 1 < self.size && self.open[idx + self.size] {
            self.link(site, self.label(row + 1, col))?;
        }
        // right
        if col + 1 < self.size && self.open[idx + 1] {
            self.link(site, self.label(row, col + 1))?;
        }

        if !was_percolating && self.percolates() {
            debug!(
                "grid percolates after opening ({row}, {col}) with {} sites open",
                self.open_count
            );
        }
        Ok(())
    }

    /// Whether the site has been opened.
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool, PercolationError> {
        self.check_coords(row, col)?;
        Ok(self.open[row * self.size + col])
    }

    /// Whether the site's component contains the virtual source.
    ///
    /// This is raw connectivity: it does not require the queried site itself
    /// to be open, so a still-blocked top-row site reports full through the
    /// construction-time source wiring.
    pub fn is_full(&self, row: usize, col: usize) -> Result<bool, PercolationError> {
        self.check_coords(row, col)?;
        self.full_components
            .connected(self.label(row, col), self.source)
    }

    /// Whether an open path connects the top row to the bottom row.
    pub fn percolates(&self) -> bool {
        matches!(
            (
                self.components.find(self.source),
                self.components.find(self.sink)
            ),
            (Ok(a), Ok(b)) if a == b
        )
    }

    /// Total number of distinct sites ever opened.
    pub fn open_site_count(&self) -> usize {
        self.open_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_grid_state() {
        let grid = Percolation::new(4).unwrap();
        assert_eq!(grid.size(), 4);
        assert_eq!(grid.open_site_count(), 0);
        assert!(!grid.percolates());
        for row in 0..4 {
            for col in 0..4 {
                assert!(!grid.is_open(row, col).unwrap());
            }
        }
    }

    #[test]
    fn test_top_row_is_full_before_opening() {
        // construction wires the source to the whole top row, and is_full
        // checks component membership only, so even closed top-row sites
        // report full
        let grid = Percolation::new(3).unwrap();
        for col in 0..3 {
            assert!(grid.is_full(0, col).unwrap());
        }
        assert!(!grid.is_full(1, 1).unwrap());
        assert!(!grid.is_full(2, 1).unwrap());
    }

    #[test]
    fn test_single_site_grid_lifecycle() {
        let mut grid = Percolation::new(1).unwrap();
        assert!(!grid.percolates());
        grid.open(0, 0).unwrap();
        assert!(grid.percolates());
        assert!(grid.is_full(0, 0).unwrap());
        assert_eq!(grid.open_site_count(), 1);
    }

    #[test]
    fn test_open_marks_only_target_site() {
        let mut grid = Percolation::new(3).unwrap();
        grid.open(1, 1).unwrap();
        for row in 0..3 {
            for col in 0..3 {
                assert_eq!(grid.is_open(row, col).unwrap(), (row, col) == (1, 1));
            }
        }
    }

    #[test]
    fn test_zero_size_rejected() {
        assert_eq!(
            Percolation::new(0).unwrap_err(),
            PercolationError::InvalidSize(0)
        );
    }

    #[test]
    fn test_corner_sites_skip_outside_neighbors() {
        let mut grid = Percolation::new(2).unwrap();
        grid.open(0, 0).unwrap();
        grid.open(1, 1).unwrap();
        assert!(!grid.percolates());
        grid.open(1, 0).unwrap();
        assert!(grid.percolates());
    }

    #[test]
    fn test_no_backwash_through_the_sink() {
        // once column 1 percolates, the sink joins the source component,
        // but fullness must not leak to the rest of the bottom row
        let mut grid = Percolation::new(3).unwrap();
        grid.open(0, 1).unwrap();
        grid.open(1, 1).unwrap();
        grid.open(2, 1).unwrap();
        assert!(grid.percolates());
        grid.open(2, 0).unwrap();
        assert!(!grid.is_full(2, 0).unwrap());
        assert!(!grid.is_full(2, 2).unwrap());
    }
}
