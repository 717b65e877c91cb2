//! Targeting engine
//!
//! Owns the only state that survives a tick: the priority memo (the cone
//! set from the most recent classification) and the cycling bookkeeping.
//! The host's input layer calls exactly one entry point per tick; each one
//! re-classifies the snapshot, applies its strategy and, on success, clears
//! the soft target and locks the chosen entity as the hard target.
//!
//! Every degraded condition is a logged no-op: no avatar, empty pools and
//! unavailable host services never raise an error and never disturb the
//! previously locked target.

use tracing::debug;

use crate::targeting::classifier::{self, ClassifyStats, ObjectSet};
use crate::targeting::cycling::{self, CyclingState};
use crate::targeting::strategies;
use crate::world::entity::{Avatar, Entity, EntityId};
use crate::world::view::{TargetHandle, WorldView};

/// Per-session targeting state and the four selection entry points
#[derive(Debug, Default)]
pub struct TargetingEngine {
    /// Cone set from the most recent classification, consulted ahead of the
    /// close-circle pool by the proximity strategies
    priority_memo: Vec<Entity>,
    cycling: CyclingState,
    last_stats: Option<ClassifyStats>,
}

impl TargetingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts from the most recent classification pass, for diagnostics
    pub fn last_stats(&self) -> Option<ClassifyStats> {
        self.last_stats
    }

    /// Cone targets from the most recent classification pass
    pub fn priority_targets(&self) -> &[Entity] {
        &self.priority_memo
    }

    /// Zone/territory change: drop all cycling state so identifiers from
    /// the old zone cannot leak into the new one. The priority memo is
    /// rebuilt on the next invocation anyway and is left alone.
    pub fn on_zone_change(&mut self) {
        self.cycling.reset();
    }

    /// Target the entity closest to the avatar
    pub fn select_nearest<V: WorldView, T: TargetHandle>(
        &mut self,
        view: &V,
        targets: &mut T,
    ) -> Option<EntityId> {
        self.select_closest(view, targets, false)
    }

    /// Target the entity with the least current health
    pub fn select_lowest_health<V: WorldView, T: TargetHandle>(
        &mut self,
        view: &V,
        targets: &mut T,
    ) -> Option<EntityId> {
        self.select_closest(view, targets, true)
    }

    fn select_closest<V: WorldView, T: TargetHandle>(
        &mut self,
        view: &V,
        targets: &mut T,
        lowest_health: bool,
    ) -> Option<EntityId> {
        let Some(avatar) = view.avatar() else {
            debug!("no controlled avatar, skipping selection");
            return None;
        };

        let set = self.refresh(view, avatar);

        // Cone memo first, then the close circle, then everything visible,
        // then the roster
        let pool: &[Entity] = if !self.priority_memo.is_empty() {
            &self.priority_memo
        } else {
            &set.close_targets
        };
        let pool: &[Entity] = if !pool.is_empty() {
            pool
        } else if !set.on_screen_targets.is_empty() {
            &set.on_screen_targets
        } else {
            &set.roster_targets
        };

        let chosen = if lowest_health {
            strategies::lowest_health(pool, avatar.position)
        } else {
            strategies::nearest(pool, avatar.position)
        };
        let chosen = chosen.map(|entity| entity.id);

        if let Some(id) = chosen {
            Self::acquire(targets, id);
        }
        chosen
    }

    /// Target the best anchor for an area attack, preferring the roster
    /// pool, then the frontal cone, then anything on screen
    pub fn select_best_aoe<V: WorldView, T: TargetHandle>(
        &mut self,
        view: &V,
        targets: &mut T,
    ) -> Option<EntityId> {
        let Some(avatar) = view.avatar() else {
            debug!("no controlled avatar, skipping selection");
            return None;
        };

        let set = self.refresh(view, avatar);

        for pool in [&set.roster_targets, &set.cone_targets, &set.on_screen_targets] {
            if let Some(entity) = strategies::best_aoe(pool) {
                let id = entity.id;
                Self::acquire(targets, id);
                return Some(id);
            }
        }

        debug!("no viable area target in any pool");
        None
    }

    /// Rotate the hard target through the merged cone + close-circle pool
    pub fn cycle_targets<V: WorldView, T: TargetHandle>(
        &mut self,
        view: &V,
        targets: &mut T,
    ) -> Option<EntityId> {
        let Some(avatar) = view.avatar() else {
            debug!("no controlled avatar, skipping cycle");
            return None;
        };

        let set = self.refresh(view, avatar);
        let pool = cycling::merged_pool(&set.cone_targets, &set.close_targets, avatar.position);

        if pool.is_empty() && set.roster_targets.is_empty() && set.on_screen_targets.is_empty() {
            return None;
        }

        let current = targets.current_target().or_else(|| targets.previous_target());
        let next = self.cycling.advance(&pool, current);
        if let Some(id) = next {
            Self::acquire(targets, id);
        }
        next
    }

    /// Classify the snapshot and overwrite the priority memo
    fn refresh<V: WorldView>(&mut self, view: &V, avatar: &Avatar) -> ObjectSet {
        let set = classifier::classify(view, avatar);
        self.priority_memo = set.cone_targets.clone();
        self.last_stats = Some(set.stats(view.snapshot().len()));
        set
    }

    fn acquire<T: TargetHandle>(targets: &mut T, id: EntityId) {
        targets.clear_soft_target();
        targets.set_hard_target(Some(id));
    }
}
