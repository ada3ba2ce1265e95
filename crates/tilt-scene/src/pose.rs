//! Per-frame scene pose: one clock reading fanned out to every channel.

use serde::{Deserialize, Serialize};
use tilt_animation_core::{AnimError, Config, CycleClock, FrameSample, Result, Rig};

use crate::keyframes::{build_rig, names};
use crate::math::{Rgb, Vec3};
use crate::palette::Palette;

/// Fixed table layout: anchors the rendering side composes the animated
/// values with. These never change over the cycle.
pub mod layout {
    use crate::math::Vec3;

    /// Height of the rolling ball's center above the plate.
    pub const BALL_Y: f32 = 1.8;
    /// The spotlight that follows the ball sits slightly above it.
    pub const BALL_LIGHT_Y: f32 = 2.3;
    /// The plunger travels along Z at this X.
    pub const PLUNGER_X: f32 = 4.95;

    pub const STAR_ANCHOR: Vec3 = Vec3::new(-3.5, 1.8, 2.7);
    pub const CROSS_ANCHOR: Vec3 = Vec3::new(0.0, 1.8, -3.0);
    pub const TRIANGLE_ANCHOR: Vec3 = Vec3::new(2.6, 1.8, 2.9);
    pub const CIRCLE_LEFT_ANCHOR: Vec3 = Vec3::new(-2.4, 1.8, -0.5);
    pub const CIRCLE_RIGHT_ANCHOR: Vec3 = Vec3::new(2.4, 1.8, -0.5);

    pub const LEVER_LEFT_ANCHOR: Vec3 = Vec3::new(-2.0, 1.8, 5.26);
    pub const LEVER_RIGHT_ANCHOR: Vec3 = Vec3::new(0.97, 1.8, 5.26);
    /// Rest rotation applied after the animated flip angle.
    pub const LEVER_LEFT_REST_DEG: f32 = -130.0;
    pub const LEVER_RIGHT_REST_DEG: f32 = 130.0;

    /// Camera eye height; eye Z and look-at Y are animated.
    pub const CAMERA_EYE_Y: f32 = 14.0;
}

/// The animated camera for one frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub eye: Vec3,
    pub look: Vec3,
    pub up: Vec3,
}

/// Every animated quantity the renderer needs for one frame, composed from
/// a single clock reading.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenePose {
    /// The cycle time this pose was sampled at (seconds).
    pub time: f32,
    pub ball: Vec3,
    /// Anchor for the spotlight tracking the ball.
    pub ball_light: Vec3,
    pub star_rotation_deg: f32,
    pub star_color: Rgb,
    pub cross_rotation_deg: f32,
    pub cross_color: Rgb,
    pub triangle_color: Rgb,
    /// Animated flip angles; compose with the `layout` rest rotations.
    pub lever_left_deg: f32,
    pub lever_right_deg: f32,
    pub plunger: Vec3,
    pub camera: CameraPose,
}

/// The assembled pinball animation: authored channels plus the cycle clock.
#[derive(Debug, Clone)]
pub struct PinballScene {
    rig: Rig,
    clock: CycleClock,
    accent: Palette,
}

impl PinballScene {
    /// Build the scene with the standard 11-second cycle.
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self {
            rig: build_rig()?,
            clock: config.clock()?,
            accent: Palette::Yellow,
        })
    }

    pub fn clock(&self) -> &CycleClock {
        &self.clock
    }

    pub fn rig(&self) -> &Rig {
        &self.rig
    }

    /// Selectable accent color for the table trim (yellow until changed).
    pub fn accent(&self) -> Palette {
        self.accent
    }

    pub fn set_accent(&mut self, accent: Palette) {
        self.accent = accent;
    }

    /// Sample every channel at the cycle time for `elapsed_ms` and compose
    /// the frame's pose. The clock is read exactly once; all channels see
    /// the same instant.
    pub fn pose_at(&self, elapsed_ms: u64) -> Result<ScenePose> {
        let now = self.clock.cycle_time(elapsed_ms);
        let sample = self.rig.sample_all(now)?;

        let ball_x = value(&sample, names::BALL_X)?;
        let ball_z = value(&sample, names::BALL_Z)?;
        Ok(ScenePose {
            time: now,
            ball: Vec3::new(ball_x, layout::BALL_Y, ball_z),
            ball_light: Vec3::new(ball_x, layout::BALL_LIGHT_Y, ball_z),
            star_rotation_deg: value(&sample, names::STAR_ROT)?,
            star_color: rgb(&sample, names::STAR_R, names::STAR_G, names::STAR_B)?,
            cross_rotation_deg: value(&sample, names::CROSS_ROT)?,
            cross_color: rgb(&sample, names::CROSS_R, names::CROSS_G, names::CROSS_B)?,
            triangle_color: rgb(
                &sample,
                names::TRIANGLE_R,
                names::TRIANGLE_G,
                names::TRIANGLE_B,
            )?,
            lever_left_deg: value(&sample, names::LEVER_L)?,
            lever_right_deg: value(&sample, names::LEVER_R)?,
            plunger: Vec3::new(
                layout::PLUNGER_X,
                layout::BALL_Y,
                value(&sample, names::PLUNGER_Z)?,
            ),
            camera: CameraPose {
                eye: Vec3::new(0.0, layout::CAMERA_EYE_Y, value(&sample, names::CAMERA_Z)?),
                look: Vec3::new(0.0, value(&sample, names::LOOK_Y)?, 0.0),
                up: Vec3::new(0.0, 0.0, -1.0),
            },
        })
    }
}

fn value(sample: &FrameSample, key: &str) -> Result<f32> {
    sample.get(key).ok_or_else(|| AnimError::UnknownChannel {
        name: key.to_string(),
    })
}

fn rgb(sample: &FrameSample, r: &str, g: &str, b: &str) -> Result<Rgb> {
    Ok(Rgb::new(
        value(sample, r)?,
        value(sample, g)?,
        value(sample, b)?,
    ))
}
