//! Tab-cycling state machine
//!
//! Persists across ticks and rotates the hard target through the merged
//! cone + close-circle pool. The hysteresis rule: while the candidate
//! identifier set is unchanged between invocations the established rotation
//! order is kept (new ids appended, vanished ids dropped in place), so the
//! pointer never jumps just because the snapshot re-ordered itself. Any
//! change to the set rebuilds the order from scratch by distance.
//!
//! Ordering is significant everywhere here, which is why the bookkeeping
//! uses ordered sequences with explicit set semantics instead of hash sets.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::util::vec3::Vec3;
use crate::world::entity::{Entity, EntityId};

/// Rotation orders rarely exceed a handful of targets; keep them inline
type RotationOrder = SmallVec<[EntityId; 8]>;

/// Cycling bookkeeping, owned by the engine for the life of the session
/// and cleared on zone change
#[derive(Debug, Clone, Default)]
pub struct CyclingState {
    /// Identifier set seen by the previous cycling invocation
    last_cone_ids: FxHashSet<EntityId>,
    /// Traversal order among the current candidates
    rotation_order: RotationOrder,
}

impl CyclingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zone change: stale identifiers must never leak into the new zone
    pub fn reset(&mut self) {
        self.last_cone_ids.clear();
        self.rotation_order.clear();
    }

    /// Current traversal order, for diagnostics
    pub fn rotation_order(&self) -> &[EntityId] {
        &self.rotation_order
    }

    /// Advance the rotation over a distance-sorted candidate pool and return
    /// the next target, or `None` when the pool is empty.
    ///
    /// An empty pool clears the remembered identifier set but deliberately
    /// leaves `rotation_order` alone: existing behavior that callers may
    /// rely on is to only invalidate the order when the set changes.
    pub fn advance(&mut self, pool: &[Entity], current: Option<EntityId>) -> Option<EntityId> {
        if pool.is_empty() {
            self.last_cone_ids.clear();
            return None;
        }

        let ids: RotationOrder = pool.iter().map(|e| e.id).collect();
        let id_set: FxHashSet<EntityId> = ids.iter().copied().collect();

        if self.last_cone_ids == id_set {
            // Same candidates as last time: keep the established order,
            // folding in newcomers and dropping leavers in place
            ordered_union(&mut self.rotation_order, &ids);
            self.rotation_order.retain(|id| id_set.contains(id));
        } else {
            self.rotation_order = ids;
            self.last_cone_ids = id_set;
        }

        next_in_rotation(&self.rotation_order, current)
    }
}

/// Merge the cone and close-circle pools, dropping duplicate identifiers
/// (cone entries win) and sorting ascending by distance to `origin`.
/// The sort is stable so equidistant entries keep their union order.
pub fn merged_pool(cone: &[Entity], close: &[Entity], origin: Vec3) -> Vec<Entity> {
    let mut seen: FxHashSet<EntityId> = FxHashSet::default();
    let mut pool: Vec<Entity> = Vec::with_capacity(cone.len() + close.len());

    for entity in cone.iter().chain(close) {
        if seen.insert(entity.id) {
            pool.push(*entity);
        }
    }

    pool.sort_by(|a, b| {
        a.position
            .distance_sq_to(origin)
            .partial_cmp(&b.position.distance_sq_to(origin))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    pool
}

/// Append identifiers from `ids` that `order` does not already contain,
/// preserving the relative order of both sequences
fn ordered_union(order: &mut RotationOrder, ids: &[EntityId]) {
    for id in ids {
        if !order.contains(id) {
            order.push(*id);
        }
    }
}

/// Position after `current` in the rotation, wrapping at the end. A missing
/// or unknown current target enters the rotation at the first entry.
fn next_in_rotation(order: &[EntityId], current: Option<EntityId>) -> Option<EntityId> {
    if order.is_empty() {
        return None;
    }
    let next = match current.and_then(|id| order.iter().position(|&o| o == id)) {
        Some(index) if index + 1 < order.len() => index + 1,
        _ => 0,
    };
    Some(order[next])
}
