//! Arena of reusable tour buffers.
//!
//! ```text
//!   buffers:     [ t0 ][ t1 ][ t2 ][ t3 ]      Vec<Vec<usize>>, each path_size long
//!   generations: [  2 ][  0 ][  1 ][  0 ]      bumped on every reclaim
//!   free:        [ 2, 0 ]                      stack; create() pops from the end
//!
//!   PooledTour { pool, slot: 1, generation: 0, cost: Some(..) }  -> live
//!   PooledTour { pool, slot: 2, generation: 0, cost: .. }        -> stale, reclaim is a no-op
//! ```
//!
//! A handle names a slot; the pool owns the storage. Handles are `Clone`
//! so the annealing driver can hold the same slot as both "current" and
//! "best", and it is the driver's job to reclaim a slot once neither role
//! holds it. The generation check turns a second reclaim of the same slot
//! into a no-op instead of putting the slot on the free list twice.

use std::mem;
use std::sync::atomic::{AtomicU64, Ordering};

use super::matrix::CostMatrix;

static NEXT_POOL_ID: AtomicU64 = AtomicU64::new(0);

/// Handle to a tour stored in a [`TourPool`].
///
/// Carries a lazily computed cost. Two handles are equal when they name
/// the same slot of the same pool, whatever their cached costs.
#[derive(Debug, Clone)]
pub struct PooledTour {
    pool: u64,
    slot: usize,
    generation: u32,
    cost: Option<f64>,
}

impl PooledTour {
    /// Slot index inside the owning pool.
    pub fn slot(&self) -> usize {
        self.slot
    }

    /// The cached cost, if it has been computed.
    pub fn cached_cost(&self) -> Option<f64> {
        self.cost
    }

    /// Returns the tour cost, computing and caching it on first call.
    pub fn ensure_cost(&mut self, pool: &TourPool<'_>) -> f64 {
        match self.cost {
            Some(cost) => cost,
            None => {
                let cost = pool.calc_cost(pool.tour(self));
                self.cost = Some(cost);
                cost
            }
        }
    }

    /// Returns the slot to `pool`.
    pub fn destroy(self, pool: &mut TourPool<'_>) -> bool {
        pool.reclaim(self)
    }
}

impl PartialEq for PooledTour {
    fn eq(&self, other: &Self) -> bool {
        self.pool == other.pool && self.slot == other.slot
    }
}

impl Eq for PooledTour {}

/// Owns every tour buffer of one solve.
///
/// One pool belongs to exactly one solve and is dropped with it.
#[derive(Debug)]
pub struct TourPool<'m> {
    id: u64,
    matrix: &'m CostMatrix,
    roundtrip: bool,
    path_size: usize,
    buffers: Vec<Vec<usize>>,
    generations: Vec<u32>,
    free: Vec<usize>,
}

impl<'m> TourPool<'m> {
    pub fn new(matrix: &'m CostMatrix, roundtrip: bool) -> Self {
        let path_size = matrix.node_count() + usize::from(roundtrip);
        Self {
            id: NEXT_POOL_ID.fetch_add(1, Ordering::Relaxed),
            matrix,
            roundtrip,
            path_size,
            buffers: Vec::new(),
            generations: Vec::new(),
            free: Vec::new(),
        }
    }

    pub fn matrix(&self) -> &'m CostMatrix {
        self.matrix
    }

    pub fn roundtrip(&self) -> bool {
        self.roundtrip
    }

    /// Number of nodes in the instance.
    pub fn node_count(&self) -> usize {
        self.matrix.node_count()
    }

    /// Length of every tour: `n`, or `n + 1` for round trips.
    pub fn path_size(&self) -> usize {
        self.path_size
    }

    /// Hands out a slot, reusing a reclaimed one when available.
    ///
    /// The buffer keeps whatever a previous tour left in it; callers
    /// overwrite every position.
    pub fn create(&mut self) -> PooledTour {
        let slot = match self.free.pop() {
            Some(slot) => slot,
            None => {
                self.buffers.push(vec![0; self.path_size]);
                self.generations.push(0);
                self.buffers.len() - 1
            }
        };
        PooledTour {
            pool: self.id,
            slot,
            generation: self.generations[slot],
            cost: None,
        }
    }

    /// Returns a handle's slot to the free list.
    ///
    /// Returns `false`, leaving the pool untouched, when the handle belongs
    /// to another pool or its slot was already reclaimed.
    pub fn reclaim(&mut self, tour: PooledTour) -> bool {
        if !self.is_live(&tour) {
            return false;
        }
        self.generations[tour.slot] = self.generations[tour.slot].wrapping_add(1);
        self.free.push(tour.slot);
        true
    }

    /// Whether `tour` names a slot of this pool that has not been reclaimed.
    pub fn is_live(&self, tour: &PooledTour) -> bool {
        tour.pool == self.id
            && self
                .generations
                .get(tour.slot)
                .is_some_and(|&g| g == tour.generation)
    }

    /// The tour stored in `tour`'s slot.
    ///
    /// # Panics
    /// Panics if the slot index is out of range for this pool.
    pub fn tour(&self, tour: &PooledTour) -> &[usize] {
        debug_assert!(self.is_live(tour), "stale tour handle {tour:?}");
        &self.buffers[tour.slot]
    }

    /// Mutable access to `tour`'s slot.
    ///
    /// # Panics
    /// Panics if the slot index is out of range for this pool.
    pub fn tour_mut(&mut self, tour: &PooledTour) -> &mut [usize] {
        debug_assert!(self.is_live(tour), "stale tour handle {tour:?}");
        &mut self.buffers[tour.slot]
    }

    /// Cost of a tour under this pool's matrix; O(n).
    pub fn calc_cost(&self, tour: &[usize]) -> f64 {
        self.matrix.path_cost(tour)
    }

    /// Creates a new tour whose buffer is filled from `source` by `fill`.
    ///
    /// `fill` receives the source tour and the new, stale buffer, and must
    /// overwrite every position of the latter.
    pub fn derive<F>(&mut self, source: &PooledTour, fill: F) -> PooledTour
    where
        F: FnOnce(&[usize], &mut [usize]),
    {
        debug_assert!(self.is_live(source), "stale tour handle {source:?}");
        let target = self.create();
        let mut buffer = mem::take(&mut self.buffers[target.slot]);
        fill(&self.buffers[source.slot], &mut buffer);
        self.buffers[target.slot] = buffer;
        target
    }

    /// Slots ever allocated.
    pub fn allocated(&self) -> usize {
        self.buffers.len()
    }

    /// Slots waiting on the free list.
    pub fn free_slots(&self) -> usize {
        self.free.len()
    }

    /// Slots currently handed out.
    pub fn live(&self) -> usize {
        self.allocated() - self.free_slots()
    }
}
