// Copyright 2025 the UniCAVE Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wand Tools: deterministic, `no_std` tool dispatch for a tracked VR wand.
//!
//! ## Overview
//!
//! A wand carries several interchangeable tools (warp, grab, button-press, rotate) and one
//! always-active drive tool for analog locomotion.
//! This crate arbitrates between them: it keeps track of the current tool, cycles the selection
//! on two reserved buttons, routes click, drag, and analog events to the right handlers, and
//! keeps an on-screen label naming the current tool.
//!
//! It does not implement the discrete tools themselves, and it does not poll devices or render.
//! Those are host capabilities reached through the traits in [`tool`].
//!
//! ## Routing
//!
//! - Click: [`ButtonCode::NextTool`](crate::types::ButtonCode::NextTool) and
//!   [`ButtonCode::PreviousTool`](crate::types::ButtonCode::PreviousTool) switch tools.
//!   Any other code goes to the current tool and then the drive tool.
//! - Drag: current tool only.
//! - Analog: drive tool only, values unmodified.
//!
//! Switching shuts down the outgoing tool. The incoming tool is not notified.
//!
//! ## Workflow
//!
//! 1) Implement [`Tool`](crate::tool::Tool) for each of your tools, and
//!    [`LabelSink`](crate::tool::LabelSink) for your label (or use a `String`).
//! 2) Build a [`ToolManager`](crate::manager::ToolManager), either from a
//!    [`Toolset`](crate::toolset::Toolset) with the stock [`AnalogDrive`](crate::drive::AnalogDrive),
//!    or from any non-empty registry and your own [`DriveHandler`](crate::tool::DriveHandler).
//! 3) Forward device events each frame.
//!
//! ## Example
//!
//! ```
//! use wand_tools::drive::{DriveCommand, DriveConfig};
//! use wand_tools::manager::ToolManager;
//! use wand_tools::tool::Tool;
//! use wand_tools::toolset::Toolset;
//! use wand_tools::types::{ButtonCode, RayHit, Vec3};
//!
//! struct Named(&'static str);
//!
//! impl Tool for Named {
//!     fn name(&self) -> &str { self.0 }
//!     fn shut_down(&mut self) {}
//!     fn button_click(&mut self, _: ButtonCode, _: Vec3, _: Vec3) {}
//!     fn button_drag(&mut self, _: &RayHit, _: Vec3, _: Vec3, _: Vec3) {}
//! }
//!
//! let toolset = Toolset {
//!     warp: Named("Warp"),
//!     grab: Named("Grab"),
//!     button: Named("Button"),
//!     rotate: Named("Rotate"),
//! };
//! let mut manager = ToolManager::from_toolset(
//!     toolset,
//!     DriveConfig::default(),
//!     Vec::<DriveCommand>::new(),
//!     String::new(),
//! )
//! .unwrap();
//! assert_eq!(manager.label(), "Tool: Warp");
//!
//! manager.handle_button_click(ButtonCode::PreviousTool, Vec3::ZERO, Vec3::ZERO);
//! assert_eq!(manager.label(), "Tool: Rotate");
//!
//! manager.handle_analog(0.0, 1.0);
//! assert_eq!(manager.drive().locomotion().len(), 1);
//! ```
//!
//! ## Logging
//!
//! Tool switches are reported with `tracing` at `debug` level; forwarded events and drive
//! commands at `trace`. Install any subscriber to see them.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod drive;
pub mod error;
pub mod manager;
pub mod tool;
pub mod toolset;
pub mod types;

pub use error::{Error, Result};
