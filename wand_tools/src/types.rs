// Copyright 2025 the UniCAVE Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for tool dispatch: wand geometry, button codes, and drag hits.
//!
//! ## Overview
//!
//! These types describe the events a host feeds into the
//! [`ToolManager`](crate::manager::ToolManager) and that the manager forwards
//! to [`Tool`](crate::tool::Tool) and [`DriveHandler`](crate::tool::DriveHandler)
//! implementations. They carry no behavior of their own.

use core::ops::{Add, Mul, Neg, Sub};

/// A point or vector in tracker space.
///
/// Used for the wand origin, its forward direction, and drag offsets.
/// Directions are not required to be normalized.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    /// X component.
    pub x: f64,
    /// Y component (up in most trackers).
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Create a new vector.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Dot product.
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Whether every component is finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Neg for Vec3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

/// Logical button that produced an event.
///
/// Two values are manager-level commands:
/// [`NextTool`](ButtonCode::NextTool) and [`PreviousTool`](ButtonCode::PreviousTool)
/// cycle the selection in [`ToolManager::handle_button_click`](crate::manager::ToolManager::handle_button_click).
/// Every other value is opaque to the manager and forwarded as-is.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ButtonCode {
    /// Select the next tool (wraps to the first).
    NextTool,
    /// Select the previous tool (wraps to the last).
    PreviousTool,
    /// Primary trigger.
    Trigger,
    /// Grip or side button.
    Grip,
    /// Menu button.
    Menu,
    /// Analog pad or stick press.
    Pad,
    /// Any other device-specific button.
    Other(u16),
}

impl ButtonCode {
    /// Whether this code is a tool-cycling command handled by the manager itself.
    pub const fn is_tool_command(self) -> bool {
        matches!(self, Self::NextTool | Self::PreviousTool)
    }
}

/// Opaque identifier of the scene object a ray hit, assigned by the host.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct HitTarget(pub u64);

/// A resolved ray intersection, as reported by the host's picker.
///
/// Passed through [`ToolManager::handle_button_drag`](crate::manager::ToolManager::handle_button_drag)
/// to the current tool; routing never depends on it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RayHit {
    /// Object that was hit.
    pub target: HitTarget,
    /// World-space intersection point.
    pub point: Vec3,
    /// Surface normal at the intersection.
    pub normal: Vec3,
    /// Distance along the ray from the wand origin.
    pub distance: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec3_arithmetic() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(0.5, -1.0, 2.0);
        assert_eq!(a + b, Vec3::new(1.5, 1.0, 5.0));
        assert_eq!(a - b, Vec3::new(0.5, 3.0, 1.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(a.dot(b), 0.5 - 2.0 + 6.0);
    }

    #[test]
    fn vec3_finiteness() {
        assert!(Vec3::ZERO.is_finite());
        assert!(!Vec3::new(f64::NAN, 0.0, 0.0).is_finite());
        assert!(!Vec3::new(0.0, 0.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn only_cycling_codes_are_tool_commands() {
        assert!(ButtonCode::NextTool.is_tool_command());
        assert!(ButtonCode::PreviousTool.is_tool_command());
        for code in [
            ButtonCode::Trigger,
            ButtonCode::Grip,
            ButtonCode::Menu,
            ButtonCode::Pad,
            ButtonCode::Other(0),
            ButtonCode::Other(u16::MAX),
        ] {
            assert!(!code.is_tool_command(), "{code:?}");
        }
    }
}
