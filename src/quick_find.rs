/// Quick-find disjoint set over a fixed universe of elements `0..size`
///
/// Every element stores its component id directly, so `find` is a single
/// array lookup and `union` relabels one whole component. The slow-union /
/// fast-find trade-off is part of the contract here: callers perform many
/// more connectivity queries than merges, and the component ids they observe
/// must stay stable under that exact scheme.
use crate::error::PercolationError;

#[derive(Debug)]
pub struct QuickFind {
    component: Vec<usize>,
}

impl QuickFind {
    /// Create a disjoint set of `size` singleton components.
    pub fn new(size: usize) -> Result<Self, PercolationError> {
        if size == 0 {
            return Err(PercolationError::InvalidSize(size));
        }
        Ok(QuickFind {
            component: (0..size).collect(),
        })
    }

    /// Number of elements in the universe.
    pub fn len(&self) -> usize {
        self.component.len()
    }

    pub fn is_empty(&self) -> bool {
        self.component.is_empty()
    }

    fn check(&self, p: usize) -> Result<(), PercolationError> {
        if p >= self.component.len() {
            return Err(PercolationError::OutOfRange {
                index: p,
                limit: self.component.len(),
            });
        }
        Ok(())
    }

    /// Component id of element `p`. O(1).
    ///
    /// `find(a) == find(b)` exactly when a and b are currently connected;
    /// the id itself is an arbitrary representative and not otherwise
    /// meaningful.
    pub fn find(&self, p: usize) -> Result<usize, PercolationError> {
        self.check(p)?;
        Ok(self.component[p])
    }

    /// Merge the components containing `p` and `q`. O(size).
    ///
    /// Relabels every element of q's component with p's id. No-op when the
    /// two are already connected.
    pub fn union(&mut self, p: usize, q: usize) -> Result<(), PercolationError> {
        let p_id = self.find(p)?;
        let q_id = self.find(q)?;

        if p_id == q_id {
            return Ok(());
        }

        for id in self.component.iter_mut() {
            if *id == q_id {
                *id = p_id;
            }
        }
        Ok(())
    }

    /// Check if two elements are in the same component.
    pub fn connected(&self, p: usize, q: usize) -> Result<bool, PercolationError> {
        Ok(self.find(p)? == self.find(q)?)
    }
}
