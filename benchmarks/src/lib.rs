//! Shared world-setup helpers for the keel benchmarks.

use glam::{Quat, Vec3};
use keel::{Contact, RigidBody, ShapePrimitive, Transform};

/// Spawn `n` moving bodies on a line and build one single-body contact per
/// body, each resting on an unmodeled ground plane with normal +Y.
pub fn setup_contact_world(n: usize) -> (hecs::World, Vec<Contact>) {
    let mut world = hecs::World::new();
    let mut contacts = Vec::with_capacity(n);

    for i in 0..n {
        let x = i as f32 * 2.0;
        let entity = world.spawn((
            Transform::from_position(Vec3::new(x, 1.0, 0.0)),
            RigidBody {
                linear_velocity: Vec3::new(0.0, -1.0 - (i % 7) as f32 * 0.1, 0.0),
                angular_velocity: Vec3::new(0.0, 0.0, 0.5),
                acceleration: Vec3::new(0.0, -9.81, 0.0),
                ..Default::default()
            },
        ));

        contacts.push(Contact {
            bodies: [Some(entity), None],
            normal: Vec3::Y,
            position: Vec3::new(x, 0.0, 0.0),
            penetration: 0.01,
            restitution: 0.3,
            static_friction: 0.6,
            dynamic_friction: 0.4,
            ..Default::default()
        });
    }

    (world, contacts)
}

/// Build `n` shapes alternating between rotated boxes and circles.
pub fn setup_shapes(n: usize) -> Vec<ShapePrimitive> {
    (0..n)
        .map(|i| {
            let position = Vec3::new(i as f32 * 1.5, (i % 5) as f32, 0.0);
            if i % 2 == 0 {
                ShapePrimitive::OrientedBox {
                    position,
                    orientation: Quat::from_rotation_z(i as f32 * 0.1),
                    half_width: 1.0,
                    half_height: 0.5,
                }
            } else {
                ShapePrimitive::Circle {
                    position,
                    radius: 0.75,
                }
            }
        })
        .collect()
}
