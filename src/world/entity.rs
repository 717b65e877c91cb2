//! World snapshot types consumed by the targeting pipeline
//!
//! The host refreshes a flat entity snapshot once per tick; nothing here is
//! persisted between ticks. Identifiers are stable across ticks for the same
//! underlying object.

use serde::{Deserialize, Serialize};

use crate::util::vec3::Vec3;

/// Unique entity identifier, issued by the host
pub type EntityId = u64;

/// Identifier of a private-content director instance (treasure hunt, leve)
pub type InstanceId = u32;

/// Coarse entity classification; only hostile NPCs and players are
/// ever eligible as targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    HostileNpc,
    Player,
    Other,
}

/// One entity from the per-tick world snapshot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub kind: EntityKind,
    /// World position
    pub position: Vec3,
    /// Current health; `None` for objects without a health capability
    pub current_hp: Option<u32>,
    /// Private-content director this entity is bound to, if any.
    /// Entities bound to another party's director are never targetable by us.
    pub instance: Option<InstanceId>,
}

impl Entity {
    pub fn new(id: EntityId, kind: EntityKind, position: Vec3) -> Self {
        Self {
            id,
            kind,
            position,
            current_hp: None,
            instance: None,
        }
    }

    /// Whether this entity kind can ever be attacked
    #[inline]
    pub fn is_combatant(&self) -> bool {
        matches!(self.kind, EntityKind::HostileNpc | EntityKind::Player)
    }

    #[inline]
    pub fn distance_to(&self, point: Vec3) -> f32 {
        self.position.distance_to(point)
    }
}

/// The controlled entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Avatar {
    pub id: EntityId,
    pub position: Vec3,
    /// The avatar's own director instance; 0 when not bound to any
    pub instance: InstanceId,
}

impl Avatar {
    pub fn new(id: EntityId, position: Vec3) -> Self {
        Self {
            id,
            position,
            instance: 0,
        }
    }
}

/// Projected screen-space coordinate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

/// Current viewport dimensions in screen units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Whether a projected point falls inside the viewport bounds
    #[inline]
    pub fn contains(&self, point: ScreenPoint) -> bool {
        point.x >= 0.0 && point.x <= self.width && point.y >= 0.0 && point.y <= self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combatant_kinds() {
        let npc = Entity::new(1, EntityKind::HostileNpc, Vec3::ZERO);
        let player = Entity::new(2, EntityKind::Player, Vec3::ZERO);
        let other = Entity::new(3, EntityKind::Other, Vec3::ZERO);

        assert!(npc.is_combatant());
        assert!(player.is_combatant());
        assert!(!other.is_combatant());
    }

    #[test]
    fn test_distance_to() {
        let e = Entity::new(1, EntityKind::HostileNpc, Vec3::new(3.0, 0.0, 4.0));
        assert!((e.distance_to(Vec3::ZERO) - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_viewport_contains() {
        let vp = Viewport {
            width: 1920.0,
            height: 1080.0,
        };
        assert!(vp.contains(ScreenPoint { x: 0.0, y: 0.0 }));
        assert!(vp.contains(ScreenPoint { x: 1920.0, y: 1080.0 }));
        assert!(!vp.contains(ScreenPoint { x: -0.1, y: 500.0 }));
        assert!(!vp.contains(ScreenPoint { x: 960.0, y: 1080.1 }));
    }

    #[test]
    fn test_serde_roundtrip() {
        let entity = Entity {
            id: 42,
            kind: EntityKind::Player,
            position: Vec3::new(1.0, 2.0, 3.0),
            current_hp: Some(5000),
            instance: Some(7),
        };
        let encoded = bincode::serde::encode_to_vec(&entity, bincode::config::standard()).unwrap();
        let (decoded, _): (Entity, usize) =
            bincode::serde::decode_from_slice(&encoded, bincode::config::standard()).unwrap();
        assert_eq!(entity, decoded);
    }
}
