// Copyright 2025 the UniCAVE Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Handler capabilities consumed by the manager.
//!
//! ## Overview
//!
//! - [`Tool`]: a discrete, mutually exclusive tool (warp, grab, button, rotate, ...).
//!   Exactly one is current at a time.
//! - [`DriveHandler`]: the always-active locomotion handler. It sees clicks and
//!   analog input no matter which tool is current.
//! - [`LabelSink`]: where the manager writes the current tool's display name.
//!
//! Blanket implementations for `Box<T>` and `&mut T` let a registry hold
//! heterogeneous tools as `Box<dyn Tool>` or borrow host-owned handlers.

use alloc::boxed::Box;
use alloc::string::String;

use crate::types::{ButtonCode, RayHit, Vec3};

/// A selectable input-interpretation mode bound to the wand.
///
/// Implementations hold their own state; the manager only calls into them.
pub trait Tool {
    /// Human-readable name shown on the label, e.g. `"Warp"`.
    fn name(&self) -> &str;

    /// Release any mode-specific state (for example drop a held object).
    ///
    /// Called on the outgoing tool before the selection changes.
    fn shut_down(&mut self);

    /// A non-command button was clicked while this tool is current.
    fn button_click(&mut self, code: ButtonCode, origin: Vec3, direction: Vec3);

    /// A button is being dragged while this tool is current.
    ///
    /// `offset` is the offset of the original hit from the center of the hit object.
    fn button_drag(&mut self, hit: &RayHit, offset: Vec3, origin: Vec3, direction: Vec3);
}

impl<T: Tool + ?Sized> Tool for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn shut_down(&mut self) {
        (**self).shut_down();
    }

    fn button_click(&mut self, code: ButtonCode, origin: Vec3, direction: Vec3) {
        (**self).button_click(code, origin, direction);
    }

    fn button_drag(&mut self, hit: &RayHit, offset: Vec3, origin: Vec3, direction: Vec3) {
        (**self).button_drag(hit, offset, origin, direction);
    }
}

impl<T: Tool + ?Sized> Tool for &mut T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn shut_down(&mut self) {
        (**self).shut_down();
    }

    fn button_click(&mut self, code: ButtonCode, origin: Vec3, direction: Vec3) {
        (**self).button_click(code, origin, direction);
    }

    fn button_drag(&mut self, hit: &RayHit, offset: Vec3, origin: Vec3, direction: Vec3) {
        (**self).button_drag(hit, offset, origin, direction);
    }
}

/// The always-active locomotion handler.
///
/// See [`AnalogDrive`](crate::drive::AnalogDrive) for the stock implementation.
pub trait DriveHandler {
    /// A non-command button was clicked. Called after the current tool has seen the click.
    fn button_click(&mut self, code: ButtonCode, origin: Vec3, direction: Vec3);

    /// Analog stick input, nominally in `[-1, 1]` per axis.
    ///
    /// Values arrive exactly as the host reported them; clamping and dead-zone
    /// handling belong to the implementation.
    fn analog(&mut self, horizontal: f64, vertical: f64);
}

impl<D: DriveHandler + ?Sized> DriveHandler for Box<D> {
    fn button_click(&mut self, code: ButtonCode, origin: Vec3, direction: Vec3) {
        (**self).button_click(code, origin, direction);
    }

    fn analog(&mut self, horizontal: f64, vertical: f64) {
        (**self).analog(horizontal, vertical);
    }
}

impl<D: DriveHandler + ?Sized> DriveHandler for &mut D {
    fn button_click(&mut self, code: ButtonCode, origin: Vec3, direction: Vec3) {
        (**self).button_click(code, origin, direction);
    }

    fn analog(&mut self, horizontal: f64, vertical: f64) {
        (**self).analog(horizontal, vertical);
    }
}

/// Text sink for the on-screen tool label.
pub trait LabelSink {
    /// Replace the displayed text.
    fn set_text(&mut self, text: &str);
}

impl LabelSink for String {
    fn set_text(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}

impl<S: LabelSink + ?Sized> LabelSink for &mut S {
    fn set_text(&mut self, text: &str) {
        (**self).set_text(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    struct Counter {
        shut_downs: usize,
        clicks: Vec<ButtonCode>,
    }

    impl Tool for Counter {
        fn name(&self) -> &str {
            "Counter"
        }

        fn shut_down(&mut self) {
            self.shut_downs += 1;
        }

        fn button_click(&mut self, code: ButtonCode, _origin: Vec3, _direction: Vec3) {
            self.clicks.push(code);
        }

        fn button_drag(&mut self, _hit: &RayHit, _offset: Vec3, _origin: Vec3, _direction: Vec3) {}
    }

    #[test]
    fn string_label_is_overwritten() {
        let mut label = String::from("stale text that is long");
        label.set_text("Tool: Grab");
        assert_eq!(label, "Tool: Grab");
        label.set_text("");
        assert!(label.is_empty());
    }

    #[test]
    fn borrowed_label_writes_through() {
        let mut label = String::new();
        {
            let mut borrowed = &mut label;
            LabelSink::set_text(&mut borrowed, "Tool: Rotate");
        }
        assert_eq!(label, "Tool: Rotate");
    }

    #[test]
    fn boxed_and_borrowed_tools_forward() {
        let mut inner = Counter {
            shut_downs: 0,
            clicks: Vec::new(),
        };
        {
            let mut borrowed = &mut inner;
            <&mut Counter as Tool>::shut_down(&mut borrowed);
            <&mut Counter as Tool>::button_click(
                &mut borrowed,
                ButtonCode::Trigger,
                Vec3::ZERO,
                Vec3::ZERO,
            );
            assert_eq!(<&mut Counter as Tool>::name(&borrowed), "Counter");
        }
        let mut boxed = Box::new(inner);
        <Box<Counter> as Tool>::shut_down(&mut boxed);
        <Box<Counter> as Tool>::button_click(&mut boxed, ButtonCode::Grip, Vec3::ZERO, Vec3::ZERO);
        assert_eq!(boxed.shut_downs, 2);
        assert_eq!(boxed.clicks, [ButtonCode::Trigger, ButtonCode::Grip]);

        let erased: Box<dyn Tool> = boxed;
        assert_eq!(erased.name(), "Counter");
    }
}
