// Copyright 2025 the UniCAVE Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Analog drive: the always-active locomotion tool.
//!
//! ## Overview
//!
//! [`AnalogDrive`] turns analog stick input into [`DriveCommand`]s for a
//! [`Locomotion`] sink (typically the host's scene root). The horizontal axis
//! turns, the vertical axis moves along the wand heading.
//!
//! ## Shaping
//!
//! Input is shaped per axis by [`DriveConfig::shape`]:
//!
//! 1) Inversion: an inverted axis is negated.
//! 2) Dead zone: an axis whose magnitude is below `dead_zone` reads as zero.
//!
//! Values are not clamped; a stick reporting `1.5` drives at `1.5x` speed.
//! If both axes read as zero, no command is emitted.
//!
//! ## Example
//!
//! ```
//! use wand_tools::drive::{AnalogDrive, DriveCommand, DriveConfig};
//! use wand_tools::tool::DriveHandler;
//!
//! let config = DriveConfig::default().with_movement_speed(2.0);
//! let mut drive = AnalogDrive::new(config, Vec::<DriveCommand>::new()).unwrap();
//! drive.analog(0.0, 0.5);
//! drive.analog(0.05, 0.1); // inside the dead zone
//! assert_eq!(drive.locomotion().len(), 1);
//! assert_eq!(drive.locomotion()[0].forward, 1.0);
//! ```

use alloc::vec::Vec;

use kurbo::Vec2;

use crate::error::{Error, Result};
use crate::tool::DriveHandler;
use crate::types::{ButtonCode, Vec3};

/// Tuning parameters for [`AnalogDrive`].
///
/// With the `serde` feature, missing fields fall back to [`Default`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct DriveConfig {
    /// Per-axis magnitude below which input reads as zero. Must be finite and `>= 0`.
    pub dead_zone: f64,
    /// Yaw rate per unit of horizontal input.
    pub rotation_speed: f64,
    /// Forward speed per unit of vertical input.
    pub movement_speed: f64,
    /// Negate the horizontal axis before shaping.
    pub invert_horizontal: bool,
    /// Negate the vertical axis before shaping.
    pub invert_vertical: bool,
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            dead_zone: 0.2,
            rotation_speed: 1.0,
            movement_speed: 1.0,
            invert_horizontal: false,
            invert_vertical: false,
        }
    }
}

impl DriveConfig {
    /// Set the dead zone.
    pub fn with_dead_zone(mut self, dead_zone: f64) -> Self {
        self.dead_zone = dead_zone;
        self
    }

    /// Set the rotation speed.
    pub fn with_rotation_speed(mut self, rotation_speed: f64) -> Self {
        self.rotation_speed = rotation_speed;
        self
    }

    /// Set the movement speed.
    pub fn with_movement_speed(mut self, movement_speed: f64) -> Self {
        self.movement_speed = movement_speed;
        self
    }

    /// Set axis inversion.
    pub fn with_inversion(mut self, horizontal: bool, vertical: bool) -> Self {
        self.invert_horizontal = horizontal;
        self.invert_vertical = vertical;
        self
    }

    /// Check that the parameters describe a usable drive.
    pub fn validate(&self) -> Result<()> {
        if !self.dead_zone.is_finite() || self.dead_zone < 0.0 {
            return Err(Error::InvalidDriveConfig {
                reason: "dead zone must be finite and non-negative",
            });
        }
        if !self.rotation_speed.is_finite() {
            return Err(Error::InvalidDriveConfig {
                reason: "rotation speed must be finite",
            });
        }
        if !self.movement_speed.is_finite() {
            return Err(Error::InvalidDriveConfig {
                reason: "movement speed must be finite",
            });
        }
        Ok(())
    }

    /// Apply inversion, then the per-axis dead zone, to raw stick input.
    pub fn shape(&self, stick: Vec2) -> Vec2 {
        let x = if self.invert_horizontal { -stick.x } else { stick.x };
        let y = if self.invert_vertical { -stick.y } else { stick.y };
        Vec2::new(self.dead(x), self.dead(y))
    }

    fn dead(&self, v: f64) -> f64 {
        if -self.dead_zone < v && v < self.dead_zone {
            0.0
        } else {
            v
        }
    }
}

/// Wand pose captured from the most recent click.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct WandPose {
    /// Tracker position.
    pub origin: Vec3,
    /// Tracker forward direction.
    pub direction: Vec3,
}

/// One frame of locomotion.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DriveCommand {
    /// Turn rate; positive turns right.
    pub yaw: f64,
    /// Movement along the wand heading; positive moves forward.
    pub forward: f64,
    /// Last wand pose seen by the drive, if any click has been observed.
    pub pose: Option<WandPose>,
}

/// Receiver of drive commands, usually the host's top-level scene object.
pub trait Locomotion {
    /// Apply one command.
    fn drive(&mut self, command: DriveCommand);
}

impl Locomotion for Vec<DriveCommand> {
    fn drive(&mut self, command: DriveCommand) {
        self.push(command);
    }
}

impl<L: Locomotion + ?Sized> Locomotion for &mut L {
    fn drive(&mut self, command: DriveCommand) {
        (**self).drive(command);
    }
}

/// Stock [`DriveHandler`]: shapes analog input and forwards it to a [`Locomotion`] sink.
#[derive(Clone, Debug)]
pub struct AnalogDrive<M> {
    config: DriveConfig,
    locomotion: M,
    pose: Option<WandPose>,
}

impl<M: Locomotion> AnalogDrive<M> {
    /// Create a drive tool after validating `config`.
    pub fn new(config: DriveConfig, locomotion: M) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            locomotion,
            pose: None,
        })
    }

    /// The tuning in effect.
    pub fn config(&self) -> &DriveConfig {
        &self.config
    }

    /// The last wand pose recorded from a click.
    pub fn pose(&self) -> Option<WandPose> {
        self.pose
    }

    /// Borrow the locomotion sink.
    pub fn locomotion(&self) -> &M {
        &self.locomotion
    }

    /// Mutably borrow the locomotion sink.
    pub fn locomotion_mut(&mut self) -> &mut M {
        &mut self.locomotion
    }

    /// Consume the drive and return its locomotion sink.
    pub fn into_locomotion(self) -> M {
        self.locomotion
    }
}

impl<M: Locomotion> DriveHandler for AnalogDrive<M> {
    fn button_click(&mut self, code: ButtonCode, origin: Vec3, direction: Vec3) {
        tracing::trace!(?code, "drive: recording wand pose");
        self.pose = Some(WandPose { origin, direction });
    }

    fn analog(&mut self, horizontal: f64, vertical: f64) {
        let stick = self.config.shape(Vec2::new(horizontal, vertical));
        if stick.x == 0.0 && stick.y == 0.0 {
            return;
        }
        let command = DriveCommand {
            yaw: stick.x * self.config.rotation_speed,
            forward: stick.y * self.config.movement_speed,
            pose: self.pose,
        };
        tracing::trace!(yaw = command.yaw, forward = command.forward, "drive");
        self.locomotion.drive(command);
    }
}
