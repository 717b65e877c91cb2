//! Tab-Targeting Library
//!
//! A target classification and selection engine for third-person games:
//! a classifier that buckets nearby hostiles into geometric candidate
//! pools each invocation, pure selection strategies over those pools
//! (nearest, lowest health, best area anchor) and a stateful tab-cycling
//! rotation with hysteresis against snapshot reordering.
//!
//! The host supplies world access through the [`world::view::WorldView`]
//! and [`world::view::TargetHandle`] traits; everything else is driven by
//! [`targeting::engine::TargetingEngine`].

pub mod config;
pub mod targeting;
pub mod util;
pub mod world;
