//! Pure geometric queries used by the classifier
//!
//! Everything here is a side-effect-free predicate. Visibility and facing
//! checks delegate to the host services on [`WorldView`]; an unavailable or
//! inconclusive answer counts as `false` and simply excludes the entity.

use crate::util::vec3::Vec3;
use crate::world::entity::Entity;
use crate::world::view::WorldView;

/// Euclidean distance between two world positions
#[inline]
pub fn distance(a: Vec3, b: Vec3) -> f32 {
    a.distance_to(b)
}

/// Whether a world position projects inside the current viewport.
///
/// The projection itself answers "in front of the camera"; the bounds test
/// catches points that project off the edges of the screen.
pub fn is_on_screen<V: WorldView>(view: &V, position: Vec3) -> bool {
    match view.project(position) {
        Some(point) => view.viewport().contains(point),
        None => false,
    }
}

/// Whether the camera's view of the entity is unobstructed
#[inline]
pub fn is_in_line_of_sight<V: WorldView>(view: &V, entity: &Entity) -> bool {
    view.line_of_sight(entity)
}

/// Whether the entity falls within the given angular threshold of the
/// avatar's facing direction
#[inline]
pub fn is_in_field_of_view<V: WorldView>(view: &V, entity: &Entity, angle_degrees: f32) -> bool {
    view.in_field_of_view(entity, angle_degrees)
}
