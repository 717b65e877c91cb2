//! Target classifier
//!
//! Rebuilds the four candidate sets from the raw entity snapshot each tick:
//!
//! - cone targets: inside both a distance and an angular threshold in front
//!   of the avatar
//! - close targets: inside a small omnidirectional circle around the avatar
//! - roster targets: tracked by the host's active-hostiles roster,
//!   independent of geometry and targetability
//! - on-screen targets: visible inside the viewport with clear line of sight
//!
//! Cone and close targets are always a subset of the on-screen targets.
//! Ordering inside each set is snapshot order; callers sort as needed.

use tracing::debug;

use crate::targeting::constants::range::MAX_TARGET_DISTANCE;
use crate::targeting::geometry;
use crate::world::entity::{Avatar, Entity};
use crate::world::view::WorldView;

/// The four candidate sets produced by one classification pass.
/// Rebuilt every tick, never persisted.
#[derive(Debug, Clone, Default)]
pub struct ObjectSet {
    /// Entities in the frontal cone bands
    pub cone_targets: Vec<Entity>,
    /// Entities in the close omnidirectional circle
    pub close_targets: Vec<Entity>,
    /// Entities tracked by the active-hostiles roster
    pub roster_targets: Vec<Entity>,
    /// Every eligible entity visible on screen
    pub on_screen_targets: Vec<Entity>,
}

impl ObjectSet {
    /// True when every set is empty
    pub fn is_empty(&self) -> bool {
        self.cone_targets.is_empty()
            && self.close_targets.is_empty()
            && self.roster_targets.is_empty()
            && self.on_screen_targets.is_empty()
    }

    /// Per-set counts for diagnostics
    pub fn stats(&self, scanned: usize) -> ClassifyStats {
        ClassifyStats {
            scanned,
            cone: self.cone_targets.len(),
            close: self.close_targets.len(),
            roster: self.roster_targets.len(),
            on_screen: self.on_screen_targets.len(),
        }
    }
}

/// Statistics about one classification pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifyStats {
    /// Snapshot entities examined
    pub scanned: usize,
    pub cone: usize,
    pub close: usize,
    pub roster: usize,
    pub on_screen: usize,
}

/// Classify the current snapshot into an [`ObjectSet`].
///
/// Filter order per entity: eligibility (kind, self, attackability), roster
/// membership (independent of everything below), targetability, private
/// instance ownership, hard range cutoff, viewport projection and line of
/// sight, then the close circle and the cone bands.
pub fn classify<V: WorldView>(view: &V, avatar: &Avatar) -> ObjectSet {
    let mut set = ObjectSet::default();
    let config = view.config();
    let roster = view.hostile_roster();
    let snapshot = view.snapshot();

    for entity in snapshot {
        if !entity.is_combatant() || entity.id == avatar.id || !view.can_attack(entity) {
            continue;
        }

        // Roster membership ignores every geometric filter below
        if roster.contains(&entity.id) {
            set.roster_targets.push(*entity);
        }

        if !view.is_targetable(entity) {
            continue;
        }

        // Bound to another party's private director
        if let Some(instance) = entity.instance {
            if instance != avatar.instance {
                continue;
            }
        }

        let distance = geometry::distance(avatar.position, entity.position);
        if distance > MAX_TARGET_DISTANCE {
            continue;
        }

        if !geometry::is_on_screen(view, entity.position)
            || !geometry::is_in_line_of_sight(view, entity)
        {
            continue;
        }
        set.on_screen_targets.push(*entity);

        if config.close_circle_enabled && distance < config.close_circle_radius {
            set.close_targets.push(*entity);
        }

        if distance > config.outer_cone_distance() {
            continue;
        }
        let angle = config.cone_angle_at(distance);
        if !geometry::is_in_field_of_view(view, entity, angle) {
            continue;
        }
        set.cone_targets.push(*entity);
    }

    debug!(
        scanned = snapshot.len(),
        cone = set.cone_targets.len(),
        close = set.close_targets.len(),
        roster = set.roster_targets.len(),
        on_screen = set.on_screen_targets.len(),
        "classified snapshot"
    );

    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TargetingConfig;
    use crate::util::vec3::Vec3;
    use crate::world::entity::{EntityId, EntityKind, ScreenPoint, Viewport};
    use rustc_hash::FxHashSet;

    /// World with an identity projection: the x/y components of a position
    /// double as its screen coordinates, z < 0 means behind the camera.
    /// Facing is +z from the origin; the field-of-view check measures the
    /// deviation from that axis.
    struct MockWorld {
        entities: Vec<Entity>,
        avatar: Avatar,
        roster: FxHashSet<EntityId>,
        config: TargetingConfig,
        los_blocked: FxHashSet<EntityId>,
        untargetable: FxHashSet<EntityId>,
        unattackable: FxHashSet<EntityId>,
    }

    impl MockWorld {
        fn new(entities: Vec<Entity>) -> Self {
            Self {
                entities,
                avatar: Avatar::new(0, Vec3::ZERO),
                roster: FxHashSet::default(),
                config: TargetingConfig::default(),
                los_blocked: FxHashSet::default(),
                untargetable: FxHashSet::default(),
                unattackable: FxHashSet::default(),
            }
        }
    }

    impl WorldView for MockWorld {
        fn snapshot(&self) -> &[Entity] {
            &self.entities
        }
        fn avatar(&self) -> Option<&Avatar> {
            Some(&self.avatar)
        }
        fn hostile_roster(&self) -> &FxHashSet<EntityId> {
            &self.roster
        }
        fn viewport(&self) -> Viewport {
            Viewport {
                width: 1920.0,
                height: 1080.0,
            }
        }
        fn project(&self, position: Vec3) -> Option<ScreenPoint> {
            if position.z < 0.0 {
                return None;
            }
            Some(ScreenPoint {
                x: position.x,
                y: position.y,
            })
        }
        fn line_of_sight(&self, entity: &Entity) -> bool {
            !self.los_blocked.contains(&entity.id)
        }
        fn in_field_of_view(&self, entity: &Entity, angle_degrees: f32) -> bool {
            let direction = (entity.position - self.avatar.position).normalize();
            let deviation = direction.dot(Vec3::FORWARD).clamp(-1.0, 1.0).acos();
            deviation.to_degrees() <= angle_degrees / 2.0
        }
        fn is_targetable(&self, entity: &Entity) -> bool {
            !self.untargetable.contains(&entity.id)
        }
        fn can_attack(&self, entity: &Entity) -> bool {
            !self.unattackable.contains(&entity.id)
        }
        fn config(&self) -> &TargetingConfig {
            &self.config
        }
    }

    fn hostile(id: EntityId, position: Vec3) -> Entity {
        Entity::new(id, EntityKind::HostileNpc, position)
    }

    /// A hostile straight ahead of the avatar at the given distance
    fn hostile_ahead(id: EntityId, distance: f32) -> Entity {
        hostile(id, Vec3::new(0.0, 0.0, distance))
    }

    #[test]
    fn test_cone_and_close_are_subsets_of_on_screen() {
        let mut world = MockWorld::new(vec![
            hostile_ahead(1, 3.0),
            hostile_ahead(2, 10.0),
            hostile(3, Vec3::new(40.0, 0.0, 2.0)), // close-ish but far off-axis
            hostile_ahead(4, 45.0),                // beyond every cone band
        ]);
        world.config.close_circle_enabled = true;
        world.roster.insert(2);

        let set = classify(&world, &world.avatar);

        for entity in set.cone_targets.iter().chain(&set.close_targets) {
            assert!(
                set.on_screen_targets.iter().any(|o| o.id == entity.id),
                "entity {} escaped the on-screen set",
                entity.id
            );
        }
    }

    #[test]
    fn test_skips_self_and_non_combatants() {
        let mut world = MockWorld::new(vec![
            hostile_ahead(7, 3.0),
            Entity::new(8, EntityKind::Other, Vec3::new(0.0, 0.0, 3.0)),
        ]);
        world.avatar = Avatar::new(7, Vec3::ZERO);

        let set = classify(&world, &world.avatar);
        assert!(set.is_empty());
    }

    #[test]
    fn test_skips_unattackable() {
        let mut world = MockWorld::new(vec![hostile_ahead(1, 3.0)]);
        world.unattackable.insert(1);
        world.roster.insert(1);

        let set = classify(&world, &world.avatar);
        // Attackability gates even the roster set
        assert!(set.is_empty());
    }

    #[test]
    fn test_roster_ignores_geometry_and_targetability() {
        let mut world = MockWorld::new(vec![
            hostile(1, Vec3::new(0.0, 0.0, -10.0)), // behind camera
            hostile_ahead(2, 3.0),
        ]);
        world.roster.insert(1);
        world.roster.insert(2);
        world.untargetable.insert(1);

        let set = classify(&world, &world.avatar);

        assert_eq!(set.roster_targets.len(), 2);
        // ...but entity 1 appears nowhere else
        assert_eq!(set.on_screen_targets.len(), 1);
        assert_eq!(set.on_screen_targets[0].id, 2);
    }

    #[test]
    fn test_untargetable_excluded_from_screen_sets() {
        let mut world = MockWorld::new(vec![hostile_ahead(1, 3.0)]);
        world.untargetable.insert(1);

        let set = classify(&world, &world.avatar);
        assert!(set.on_screen_targets.is_empty());
        assert!(set.cone_targets.is_empty());
    }

    #[test]
    fn test_foreign_private_instance_excluded() {
        let mut leve_mob = hostile_ahead(1, 3.0);
        leve_mob.instance = Some(99);
        let mut own_mob = hostile_ahead(2, 3.0);
        own_mob.instance = Some(5);

        let mut world = MockWorld::new(vec![leve_mob, own_mob]);
        world.avatar.instance = 5;

        let set = classify(&world, &world.avatar);
        assert_eq!(set.on_screen_targets.len(), 1);
        assert_eq!(set.on_screen_targets[0].id, 2);
    }

    #[test]
    fn test_hard_range_cutoff() {
        let world = MockWorld::new(vec![hostile_ahead(1, 48.0), hostile_ahead(2, 50.0)]);

        let set = classify(&world, &world.avatar);
        assert_eq!(set.on_screen_targets.len(), 1);
        assert_eq!(set.on_screen_targets[0].id, 1);
    }

    #[test]
    fn test_line_of_sight_blocked_excluded() {
        let mut world = MockWorld::new(vec![hostile_ahead(1, 3.0)]);
        world.los_blocked.insert(1);

        let set = classify(&world, &world.avatar);
        assert!(set.on_screen_targets.is_empty());
    }

    #[test]
    fn test_behind_camera_excluded() {
        let world = MockWorld::new(vec![hostile(1, Vec3::new(0.0, 0.0, -3.0))]);

        let set = classify(&world, &world.avatar);
        assert!(set.on_screen_targets.is_empty());
    }

    #[test]
    fn test_close_circle_disabled_by_default() {
        let world = MockWorld::new(vec![hostile_ahead(1, 2.0)]);

        let set = classify(&world, &world.avatar);
        assert!(set.close_targets.is_empty());
        assert_eq!(set.cone_targets.len(), 1);
    }

    #[test]
    fn test_close_circle_is_omnidirectional() {
        // Well off-axis but still projected on screen
        let side_mob = hostile(1, Vec3::new(3.0, 0.0, 0.1));
        let mut world = MockWorld::new(vec![side_mob]);
        world.config.close_circle_enabled = true;
        world.config.close_circle_radius = 5.0;

        let set = classify(&world, &world.avatar);
        assert_eq!(set.close_targets.len(), 1);
        // Way outside the 70-degree half-angle of cone1
        assert!(set.cone_targets.is_empty());
    }

    #[test]
    fn test_cone_band_selection_by_distance() {
        // cone1: 7.0/140, cone2: 15.0/90, cone3: 30.0/60 (defaults).
        // 35 degrees off-axis: inside cone1's 70-degree half-angle and
        // cone2's 45, outside cone3's 30.
        let off_axis = |id, d: f32| {
            let rad = 35.0_f32.to_radians();
            hostile(id, Vec3::new(d * rad.sin(), 0.0, d * rad.cos()))
        };
        let world = MockWorld::new(vec![
            off_axis(1, 5.0),  // band 1
            off_axis(2, 12.0), // band 2
            off_axis(3, 25.0), // band 3: 35 > 30, rejected
        ]);

        let set = classify(&world, &world.avatar);
        let cone_ids: Vec<_> = set.cone_targets.iter().map(|e| e.id).collect();
        assert_eq!(cone_ids, vec![1, 2]);
        assert_eq!(set.on_screen_targets.len(), 3);
    }

    #[test]
    fn test_spec_scenario_three_entities() {
        // Avatar at origin facing +z; A(d=3, hp=50), B(d=3, hp=10),
        // C(d=40, hp=100); single 8.0/30-degree cone band.
        let mut a = hostile_ahead(1, 3.0);
        a.current_hp = Some(50);
        let mut b = hostile(2, Vec3::new(0.1, 0.0, 3.0));
        b.current_hp = Some(10);
        let mut c = hostile_ahead(3, 40.0);
        c.current_hp = Some(100);

        let mut world = MockWorld::new(vec![a, b, c]);
        world.config.cone1.max_distance = 8.0;
        world.config.cone1.angle_degrees = 30.0;
        world.config.cone2 = None;
        world.config.cone3 = None;

        let set = classify(&world, &world.avatar);

        let cone_ids: Vec<_> = set.cone_targets.iter().map(|e| e.id).collect();
        assert_eq!(cone_ids, vec![1, 2]);
        assert!(set.close_targets.is_empty());
        let screen_ids: Vec<_> = set.on_screen_targets.iter().map(|e| e.id).collect();
        assert_eq!(screen_ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_stats_match_set_lengths() {
        let mut world = MockWorld::new(vec![hostile_ahead(1, 3.0), hostile_ahead(2, 45.0)]);
        world.roster.insert(1);

        let set = classify(&world, &world.avatar);
        let stats = set.stats(world.entities.len());

        assert_eq!(stats.scanned, 2);
        assert_eq!(stats.cone, set.cone_targets.len());
        assert_eq!(stats.close, set.close_targets.len());
        assert_eq!(stats.roster, set.roster_targets.len());
        assert_eq!(stats.on_screen, set.on_screen_targets.len());
    }
}
