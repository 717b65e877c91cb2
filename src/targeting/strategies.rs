//! Selection strategies
//!
//! Pure ranking functions over a candidate pool. Pool choice and the actual
//! target assignment live in the engine; these functions never touch state.
//! Ties always resolve to the earliest pool entry so a repeated invocation
//! over the same snapshot is deterministic.

use std::cmp::Ordering;

use crate::targeting::constants::aoe::CLUSTER_RADIUS;
use crate::util::vec3::Vec3;
use crate::world::entity::Entity;

/// Health used for ordering; entities without a health capability sort as
/// if at full health so lowest-health never prefers them
#[inline]
fn health_key(entity: &Entity) -> u32 {
    entity.current_hp.unwrap_or(u32::MAX)
}

fn compare_distance(a: &Entity, b: &Entity, origin: Vec3) -> Ordering {
    a.position
        .distance_sq_to(origin)
        .partial_cmp(&b.position.distance_sq_to(origin))
        .unwrap_or(Ordering::Equal)
}

/// Entity closest to `origin`, first pool entry on ties
pub fn nearest<'a>(pool: &'a [Entity], origin: Vec3) -> Option<&'a Entity> {
    pool.iter().min_by(|a, b| compare_distance(a, b, origin))
}

/// Entity with the least current health, distance to `origin` as tie-break
pub fn lowest_health<'a>(pool: &'a [Entity], origin: Vec3) -> Option<&'a Entity> {
    pool.iter().min_by(|a, b| {
        health_key(a)
            .cmp(&health_key(b))
            .then_with(|| compare_distance(a, b, origin))
    })
}

/// Best anchor for an area attack: the entity with the most pool members
/// within [`CLUSTER_RADIUS`], higher health breaking ties on the theory that
/// a tougher target outlives the attack
pub fn best_aoe(pool: &[Entity]) -> Option<&Entity> {
    let mut best: Option<(usize, u32, &Entity)> = None;

    for entity in pool {
        let in_range = pool
            .iter()
            .filter(|other| {
                other.id != entity.id
                    && entity.position.distance_to(other.position) <= CLUSTER_RADIUS
            })
            .count();
        let hp = entity.current_hp.unwrap_or(0);

        let better = match best {
            None => true,
            Some((best_count, best_hp, _)) => (in_range, hp) > (best_count, best_hp),
        };
        if better {
            best = Some((in_range, hp, entity));
        }
    }

    best.map(|(_, _, entity)| entity)
}
