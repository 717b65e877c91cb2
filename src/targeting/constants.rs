/// Range constants
pub mod range {
    /// Hard cutoff for any target candidate, slightly under the distance at
    /// which the client stops letting you target things the vanilla way
    pub const MAX_TARGET_DISTANCE: f32 = 49.0;
}

/// Area-attack clustering constants
pub mod aoe {
    /// Two entities within this distance of each other count as clustered
    pub const CLUSTER_RADIUS: f32 = 5.0;
}

/// Default cone band tuning: a wide cone for close targets, progressively
/// narrower cones further out
pub mod cone {
    pub const CONE1_DISTANCE: f32 = 7.0;
    pub const CONE1_ANGLE: f32 = 140.0;
    pub const CONE2_DISTANCE: f32 = 15.0;
    pub const CONE2_ANGLE: f32 = 90.0;
    pub const CONE3_DISTANCE: f32 = 30.0;
    pub const CONE3_ANGLE: f32 = 60.0;
}

/// Close omnidirectional circle defaults
pub mod close {
    /// Radius of the facing-independent close circle
    pub const RADIUS: f32 = 5.0;
}
