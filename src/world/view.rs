//! Service contracts implemented by the surrounding host
//!
//! The targeting pipeline never talks to the renderer, the input layer or the
//! simulation directly; everything it needs is behind these two traits. All
//! methods are synchronous queries against in-memory state — none perform I/O
//! and none may block. An unavailable or inconclusive answer is expressed as
//! `false`/`None` and degrades to "entity excluded", never to an error.

use rustc_hash::FxHashSet;

use crate::config::TargetingConfig;
use crate::util::vec3::Vec3;
use crate::world::entity::{Avatar, Entity, EntityId, ScreenPoint, Viewport};

/// Read-only view of the world, refreshed by the host once per tick
pub trait WorldView {
    /// All nearby entities this tick, in host iteration order
    fn snapshot(&self) -> &[Entity];

    /// The controlled entity, or `None` while not embodied
    fn avatar(&self) -> Option<&Avatar>;

    /// Identifiers currently tracked by the host's active-hostiles roster
    fn hostile_roster(&self) -> &FxHashSet<EntityId>;

    /// Current viewport dimensions
    fn viewport(&self) -> Viewport;

    /// World-to-screen projection; `None` when the point is behind the camera
    fn project(&self, position: Vec3) -> Option<ScreenPoint>;

    /// Whether the camera has an unobstructed view of the entity
    fn line_of_sight(&self, entity: &Entity) -> bool;

    /// Whether the entity lies within the given angular threshold of the
    /// avatar's facing direction
    fn in_field_of_view(&self, entity: &Entity, angle_degrees: f32) -> bool;

    /// Whether the entity can currently be targeted at all
    fn is_targetable(&self, entity: &Entity) -> bool;

    /// Whether the avatar is capable of attacking the entity
    fn can_attack(&self, entity: &Entity) -> bool;

    /// Targeting configuration for this tick
    fn config(&self) -> &TargetingConfig;
}

/// Mutable handle on the host's target registers
pub trait TargetHandle {
    /// Entity currently locked as the hard target
    fn current_target(&self) -> Option<EntityId>;

    /// Hard target before the current one, if the host remembers it
    fn previous_target(&self) -> Option<EntityId>;

    /// Lock an entity as the hard target, or clear it with `None`
    fn set_hard_target(&mut self, target: Option<EntityId>);

    /// Drop any non-committed soft target indicator
    fn clear_soft_target(&mut self);
}
