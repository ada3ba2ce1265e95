//! The authored keyframe tables for the 11-second pinball loop.
//!
//! These are data, not logic: every `(time, value)` pair below was keyed by
//! hand against the cycle clock. Times are seconds within the cycle.

use tilt_animation_core::{Channel, Result, Rig};

/// Channel names used as frame-sample keys.
pub mod names {
    pub const BALL_X: &str = "ball.x";
    pub const BALL_Z: &str = "ball.z";
    pub const STAR_ROT: &str = "star.rot";
    pub const CROSS_ROT: &str = "cross.rot";
    pub const LEVER_L: &str = "lever.left";
    pub const LEVER_R: &str = "lever.right";
    pub const PLUNGER_Z: &str = "plunger.z";
    pub const CAMERA_Z: &str = "camera.z";
    pub const LOOK_Y: &str = "camera.look_y";
    pub const STAR_R: &str = "star.color.r";
    pub const STAR_G: &str = "star.color.g";
    pub const STAR_B: &str = "star.color.b";
    pub const CROSS_R: &str = "cross.color.r";
    pub const CROSS_G: &str = "cross.color.g";
    pub const CROSS_B: &str = "cross.color.b";
    pub const TRIANGLE_R: &str = "triangle.color.r";
    pub const TRIANGLE_G: &str = "triangle.color.g";
    pub const TRIANGLE_B: &str = "triangle.color.b";
}

// Resting colors the star/cross flash back from on impact.
const STAR_RED: f32 = 0.2;
const STAR_GREEN: f32 = 0.35;
const STAR_BLUE: f32 = 0.45;
const CROSS_RED: f32 = 0.45;
const CROSS_GREEN: f32 = 0.2;
const CROSS_BLUE: f32 = 0.4;

pub const BALL_X: &[(f32, f32)] = &[
    // launch lane
    (6.1, 4.95),
    (6.2, 3.2),
    (6.3, 0.0),
    (6.4, -3.2),
    (6.5, -4.95),
    // exit the lane, glance off the star
    (6.6, -4.0),
    (6.64, -3.08),
    (6.67, -2.24),
    // right lever flip (impact exaggerated)
    (6.8, 0.05),
    (6.95, 0.05),
    (7.0, 0.1),
    (7.3, 1.46),
    // into the bumper chaos
    (7.7, -3.88),
    (7.8, -3.24),
    (7.9, -3.95),
    (8.0, -3.55),
    (8.1, -3.55),
    (8.2, -3.38),
    // out again, second star hit
    (8.3, -3.1),
    (8.4, -3.14),
    (8.6, -2.19),
    (8.7, -1.7),
    // left lever flip
    (8.9, -1.42),
    (9.0, -1.34),
    (9.05, -0.8),
    // right circle, triangle, left circle
    (9.3, 1.67),
    (9.4, 2.19),
    (9.6, -1.64),
    // final right lever touch and drain
    (10.0, 0.43),
    (10.05, 0.1),
    (10.1, -0.3),
    (10.3, -1.0),
];

pub const BALL_Z: &[(f32, f32)] = &[
    // plunger pull and release
    (4.0, 4.3),
    (6.0, 5.8),
    (6.05, 4.3),
    // launch lane
    (6.1, -1.5),
    (6.2, -5.3),
    (6.3, -6.5),
    (6.4, -5.3),
    (6.5, -1.5),
    // exit the lane, glance off the star
    (6.6, 1.5),
    (6.64, 1.6),
    (6.67, 2.6),
    // right lever flip
    (6.8, 5.13),
    (6.95, 5.4),
    (7.0, 5.25),
    (7.3, -5.0),
    // into the bumper chaos
    (7.7, -2.29),
    (7.8, -1.26),
    (7.9, -1.5),
    (8.0, -0.7),
    (8.1, 0.1),
    (8.2, 0.05),
    // out again, second star hit
    (8.3, 1.04),
    (8.4, 1.33),
    (8.6, 2.36),
    (8.7, 3.25),
    // left lever flip
    (8.9, 4.94),
    (9.0, 5.56),
    (9.05, 5.0),
    // right circle, triangle, left circle
    (9.3, 0.46),
    (9.4, 2.83),
    (9.6, 0.3),
    // final right lever touch and drain
    (10.0, 4.86),
    (10.05, 5.25),
    (10.1, 5.74),
    (10.3, 7.4),
];

pub const STAR_ROT: &[(f32, f32)] = &[
    (6.6, 0.0),
    (6.8, -360.0 * 1.8),
    (8.0, -360.0 * 2.73),
    (8.4, -360.0 * 2.73),
    (8.75, -360.0 * 3.0),
    (11.0, -360.0 * 3.25),
];

pub const CROSS_ROT: &[(f32, f32)] = &[
    (7.2, 0.0),
    (7.23, 50.0),
    (7.5, 100.0),
    (8.5, 160.0),
    (8.8, 180.0),
];

pub const LEVER_L: &[(f32, f32)] = &[(8.9, 0.0), (8.95, -35.0), (9.0, -35.0), (9.05, 0.0)];

pub const LEVER_R: &[(f32, f32)] = &[(6.8, 0.0), (6.85, 30.0), (6.95, 30.0), (7.0, 0.0)];

pub const PLUNGER_Z: &[(f32, f32)] = &[(4.0, 6.0), (6.0, 7.5), (6.05, 6.0)];

// Camera fly-in over the first four seconds.
pub const CAMERA_Z: &[(f32, f32)] = &[(0.0, 35.0), (3.0, 5.0)];
pub const LOOK_Y: &[(f32, f32)] = &[(3.0, 10.0), (4.0, 0.0)];

pub const STAR_R: &[(f32, f32)] = &[
    (6.55, 0.8),
    (6.6, STAR_RED),
    (8.3, STAR_RED),
    (8.35, 0.8),
];
pub const STAR_G: &[(f32, f32)] = &[
    (6.55, 0.7),
    (6.6, STAR_GREEN),
    (8.3, STAR_GREEN),
    (8.35, 0.7),
];
pub const STAR_B: &[(f32, f32)] = &[
    (6.55, 0.3),
    (6.6, STAR_BLUE),
    (8.3, STAR_BLUE),
    (8.35, 0.3),
];

pub const CROSS_R: &[(f32, f32)] = &[(7.15, 0.8), (7.2, CROSS_RED), (7.4, 0.8)];
pub const CROSS_G: &[(f32, f32)] = &[(7.15, 0.7), (7.2, CROSS_GREEN), (7.4, 0.7)];
pub const CROSS_B: &[(f32, f32)] = &[(7.15, 0.3), (7.2, CROSS_BLUE), (7.5, 0.3)];

pub const TRIANGLE_R: &[(f32, f32)] = &[(9.35, 0.8), (9.4, STAR_RED), (9.45, 0.8)];
pub const TRIANGLE_G: &[(f32, f32)] = &[(9.35, 0.7), (9.4, STAR_GREEN), (9.45, 0.7)];
pub const TRIANGLE_B: &[(f32, f32)] = &[(9.3, 0.3), (9.4, STAR_BLUE), (9.5, 0.3)];

/// Load every authored channel into a rig. Channel order matches the table
/// order above; frame samples key values by the `names` constants.
pub fn build_rig() -> Result<Rig> {
    let tables: [(&str, &[(f32, f32)]); 18] = [
        (names::BALL_X, BALL_X),
        (names::BALL_Z, BALL_Z),
        (names::STAR_ROT, STAR_ROT),
        (names::CROSS_ROT, CROSS_ROT),
        (names::LEVER_L, LEVER_L),
        (names::LEVER_R, LEVER_R),
        (names::PLUNGER_Z, PLUNGER_Z),
        (names::CAMERA_Z, CAMERA_Z),
        (names::LOOK_Y, LOOK_Y),
        (names::STAR_R, STAR_R),
        (names::STAR_G, STAR_G),
        (names::STAR_B, STAR_B),
        (names::CROSS_R, CROSS_R),
        (names::CROSS_G, CROSS_G),
        (names::CROSS_B, CROSS_B),
        (names::TRIANGLE_R, TRIANGLE_R),
        (names::TRIANGLE_G, TRIANGLE_G),
        (names::TRIANGLE_B, TRIANGLE_B),
    ];
    let mut rig = Rig::new();
    for (name, keys) in tables {
        rig.add_channel(Channel::from_keys(name, keys))?;
    }
    Ok(rig)
}
