// Copyright 2025 the UniCAVE Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The stock four-tool loadout.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::tool::Tool;

/// The four wand tools, already resolved by the host.
///
/// [`ToolManager::from_toolset`](crate::manager::ToolManager::from_toolset)
/// registers them in field order: warp, grab, button, rotate.
#[derive(Clone, Debug, Default)]
pub struct Toolset<W, G, B, R> {
    /// Warp/teleport tool. Current after construction.
    pub warp: W,
    /// Grabber tool.
    pub grab: G,
    /// Button-activate tool.
    pub button: B,
    /// Rotator tool.
    pub rotate: R,
}

impl<W, G, B, R> Toolset<W, G, B, R> {
    /// Erase the tool types into a registry in warp, grab, button, rotate order.
    pub fn into_registry<'a>(self) -> Vec<Box<dyn Tool + 'a>>
    where
        W: Tool + 'a,
        G: Tool + 'a,
        B: Tool + 'a,
        R: Tool + 'a,
    {
        let mut registry: Vec<Box<dyn Tool + 'a>> = Vec::with_capacity(4);
        registry.push(Box::new(self.warp));
        registry.push(Box::new(self.grab));
        registry.push(Box::new(self.button));
        registry.push(Box::new(self.rotate));
        registry
    }
}
