//! Presentation sync: pushes the transform of every bound visual.
//!
//! Runs last in the tick, after cleanup, so no handle released this tick is
//! touched again.

use hecs::World;

use negspace_core::components::{Appearance, Heading, Visual};
use negspace_core::events::VisualTransform;
use negspace_core::types::Position;

use crate::map::GameMap;
use crate::presentation::Presentation;

pub fn run(world: &World, map: &GameMap, presentation: &mut Presentation) {
    for (_entity, (visual, pos, heading, appearance)) in world
        .query::<(&Visual, &Position, Option<&Heading>, Option<&Appearance>)>()
        .iter()
    {
        let (scale, alpha) = match appearance {
            Some(a) => (a.scale, if a.visible { 1.0 } else { 0.0 }),
            None => (1.0, 1.0),
        };
        presentation.set_transform(
            visual.handle,
            VisualTransform {
                position: *pos,
                rotation: heading.map(|h| h.rotation).unwrap_or(0.0),
                scale,
                alpha,
            },
        );
    }

    for (_slot, marker) in map.active_room().exit_markers() {
        presentation.set_transform(
            marker.visual,
            VisualTransform {
                position: marker.position,
                rotation: marker.rotation,
                scale: 0.7,
                alpha: 1.0,
            },
        );
    }
}
