// Copyright 2025 the UniCAVE Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tool manager implementation.
//!
//! ## Overview
//!
//! Owns an ordered registry of discrete tools, one always-active drive handler,
//! and the label sink. Exactly one tool is current at a time.
//!
//! ## Routing
//!
//! | Event  | Current tool | Drive |
//! |--------|--------------|-------|
//! | click  | yes          | yes   |
//! | drag   | yes          | no    |
//! | analog | no           | yes   |
//!
//! [`ButtonCode::NextTool`] and [`ButtonCode::PreviousTool`] clicks are consumed
//! by the manager and reach neither.
//!
//! ## Switching
//!
//! - The outgoing tool is shut down before the index moves.
//! - The index wraps in both directions.
//! - The incoming tool gets no activation call.
//! - [`ToolManager::next_tool`] and [`ToolManager::previous_tool`] leave the
//!   label alone; the click path refreshes it.

use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use tracing::{debug, trace};

use crate::drive::{AnalogDrive, DriveConfig, Locomotion};
use crate::error::{Error, Result};
use crate::tool::{DriveHandler, LabelSink, Tool};
use crate::toolset::Toolset;
use crate::types::{ButtonCode, RayHit, Vec3};

/// Text written before the tool name on the label.
pub const TOOL_NAME_PREFIX: &str = "Tool: ";

/// Tool-dispatch state machine for a single wand.
///
/// ## Usage
///
/// - Construct with [`ToolManager::new`] from any non-empty registry, or with
///   [`ToolManager::from_toolset`] for the stock warp, grab, button, rotate loadout.
/// - Feed device events through [`ToolManager::handle_button_click`],
///   [`ToolManager::handle_button_drag`], and [`ToolManager::handle_analog`].
///   All three return `true`; the value is an acknowledgment only.
pub struct ToolManager<T, D, S> {
    tools: Vec<T>,
    current: usize,
    drive: D,
    label: S,
}

impl<T: Tool, D, S> core::fmt::Debug for ToolManager<T, D, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ToolManager")
            .field("tools", &self.tools.len())
            .field("current", &self.current)
            .field("tool", &self.tools[self.current].name())
            .finish_non_exhaustive()
    }
}

impl<'a, M: Locomotion, S: LabelSink> ToolManager<Box<dyn Tool + 'a>, AnalogDrive<M>, S> {
    /// Create a manager over the stock loadout with an [`AnalogDrive`].
    ///
    /// Tools are registered as warp, grab, button, rotate; warp is current.
    /// Fails if `drive` does not pass [`DriveConfig::validate`].
    pub fn from_toolset<W, G, B, R>(
        toolset: Toolset<W, G, B, R>,
        drive: DriveConfig,
        locomotion: M,
        label: S,
    ) -> Result<Self>
    where
        W: Tool + 'a,
        G: Tool + 'a,
        B: Tool + 'a,
        R: Tool + 'a,
    {
        let drive = AnalogDrive::new(drive, locomotion)?;
        Self::new(toolset.into_registry(), drive, label)
    }
}

impl<T: Tool, D: DriveHandler, S: LabelSink> ToolManager<T, D, S> {
    /// Create a manager with the first tool current and write its label.
    ///
    /// Returns [`Error::EmptyRegistry`] if `tools` is empty.
    pub fn new(tools: Vec<T>, drive: D, label: S) -> Result<Self> {
        if tools.is_empty() {
            return Err(Error::EmptyRegistry);
        }
        let mut manager = Self {
            tools,
            current: 0,
            drive,
            label,
        };
        manager.refresh_label();
        debug!(
            tools = manager.tools.len(),
            current = manager.tool_name(),
            "tool manager ready"
        );
        Ok(manager)
    }

    /// Shut down the current tool and select the next one, wrapping to the first.
    pub fn next_tool(&mut self) {
        let from = self.current;
        self.tools[from].shut_down();
        self.current = (from + 1) % self.tools.len();
        debug!(
            from = self.tools[from].name(),
            to = self.tool_name(),
            index = self.current,
            "next tool"
        );
    }

    /// Shut down the current tool and select the previous one, wrapping to the last.
    pub fn previous_tool(&mut self) {
        let from = self.current;
        let len = self.tools.len();
        self.tools[from].shut_down();
        self.current = (from + len - 1) % len;
        debug!(
            from = self.tools[from].name(),
            to = self.tool_name(),
            index = self.current,
            "previous tool"
        );
    }

    /// Handle a button click.
    ///
    /// Tool-cycling codes switch tools and refresh the label. Any other code
    /// goes to the current tool, then to the drive handler.
    pub fn handle_button_click(&mut self, code: ButtonCode, origin: Vec3, direction: Vec3) -> bool {
        match code {
            ButtonCode::NextTool => {
                self.next_tool();
                self.refresh_label();
            }
            ButtonCode::PreviousTool => {
                self.previous_tool();
                self.refresh_label();
            }
            _ => {
                trace!(?code, tool = self.tool_name(), "click");
                self.tools[self.current].button_click(code, origin, direction);
                self.drive.button_click(code, origin, direction);
            }
        }
        true
    }

    /// Handle a button drag. Only the current tool sees it; `code` does not affect routing.
    pub fn handle_button_drag(
        &mut self,
        code: ButtonCode,
        hit: &RayHit,
        offset: Vec3,
        origin: Vec3,
        direction: Vec3,
    ) -> bool {
        trace!(?code, hit = hit.target.0, tool = self.tool_name(), "drag");
        self.tools[self.current].button_drag(hit, offset, origin, direction);
        true
    }

    /// Handle analog stick input. Only the drive handler sees it, unmodified.
    pub fn handle_analog(&mut self, horizontal: f64, vertical: f64) -> bool {
        self.drive.analog(horizontal, vertical);
        true
    }

    /// Overwrite the manager's own label with the current tool name.
    pub fn refresh_label(&mut self) {
        let text = self.label_text();
        self.label.set_text(&text);
    }
}

impl<T: Tool, D, S> ToolManager<T, D, S> {
    /// Write [`TOOL_NAME_PREFIX`] followed by the current tool name into `sink`.
    pub fn update_tool_name(&self, sink: &mut impl LabelSink) {
        sink.set_text(&self.label_text());
    }

    /// The label text for the current tool, e.g. `"Tool: Warp"`.
    pub fn label_text(&self) -> String {
        format!("{TOOL_NAME_PREFIX}{}", self.tool_name())
    }

    /// Index of the current tool in registry order.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Number of registered tools (always at least one).
    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }

    /// The current tool.
    pub fn current_tool(&self) -> &T {
        &self.tools[self.current]
    }

    /// Name of the current tool.
    pub fn tool_name(&self) -> &str {
        self.tools[self.current].name()
    }

    /// All tools in registry order.
    pub fn tools(&self) -> &[T] {
        &self.tools
    }

    /// The drive handler.
    pub fn drive(&self) -> &D {
        &self.drive
    }

    /// Mutable access to the drive handler.
    pub fn drive_mut(&mut self) -> &mut D {
        &mut self.drive
    }

    /// The label sink.
    pub fn label(&self) -> &S {
        &self.label
    }

    /// Tear down the manager, returning its registry, drive handler, and label sink.
    pub fn into_parts(self) -> (Vec<T>, D, S) {
        (self.tools, self.drive, self.label)
    }
}
