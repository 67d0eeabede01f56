// Copyright 2025 the UniCAVE Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tool cycling.
//!
//! Builds the stock warp, grab, button, rotate loadout, then replays a short
//! scripted input session: clicks, a drag, tool switches, and stick input.
//! Each tool reports what it receives.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p wand_tools_demos --example tool_cycling`

use tracing_subscriber::EnvFilter;
use wand_tools::drive::{DriveCommand, DriveConfig};
use wand_tools::manager::ToolManager;
use wand_tools::tool::Tool;
use wand_tools::toolset::Toolset;
use wand_tools::types::{ButtonCode, HitTarget, RayHit, Vec3};

/// A stand-in tool that prints every call.
struct Verbose {
    name: &'static str,
    holding: Option<HitTarget>,
}

impl Verbose {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            holding: None,
        }
    }
}

impl Tool for Verbose {
    fn name(&self) -> &str {
        self.name
    }

    fn shut_down(&mut self) {
        if let Some(target) = self.holding.take() {
            println!("  [{}] released {:?}", self.name, target);
        }
        println!("  [{}] shut down", self.name);
    }

    fn button_click(&mut self, code: ButtonCode, origin: Vec3, direction: Vec3) {
        println!(
            "  [{}] click {:?} from {:?} toward {:?}",
            self.name, code, origin, direction
        );
    }

    fn button_drag(&mut self, hit: &RayHit, offset: Vec3, _origin: Vec3, _direction: Vec3) {
        self.holding = Some(hit.target);
        println!(
            "  [{}] drag {:?} at distance {:.2}, offset {:?}",
            self.name, hit.target, hit.distance, offset
        );
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let toolset = Toolset {
        warp: Verbose::new("Warp"),
        grab: Verbose::new("Grab"),
        button: Verbose::new("Button"),
        rotate: Verbose::new("Rotate"),
    };
    let mut manager = match ToolManager::from_toolset(
        toolset,
        DriveConfig::default(),
        Vec::<DriveCommand>::new(),
        String::new(),
    ) {
        Ok(manager) => manager,
        Err(err) => {
            eprintln!("failed to build tool manager: {err}");
            return;
        }
    };

    let origin = Vec3::new(0.0, 1.6, 0.0);
    let forward = Vec3::new(0.0, 0.0, 1.0);
    let hit = RayHit {
        target: HitTarget(7),
        point: origin + forward * 2.5,
        normal: -forward,
        distance: 2.5,
    };

    println!("== {} ==", manager.label());
    manager.handle_button_click(ButtonCode::Trigger, origin, forward);

    manager.handle_button_click(ButtonCode::NextTool, origin, forward);
    println!("== {} ==", manager.label());
    manager.handle_button_drag(ButtonCode::Trigger, &hit, Vec3::new(0.1, 0.0, 0.0), origin, forward);

    // Switching away from the grabber drops the held object.
    manager.handle_button_click(ButtonCode::PreviousTool, origin, forward);
    manager.handle_button_click(ButtonCode::PreviousTool, origin, forward);
    println!("== {} ==", manager.label());

    for (h, v) in [(0.0, 0.9), (0.1, 0.1), (-0.6, 0.0)] {
        manager.handle_analog(h, v);
    }
    println!("== Drive ==");
    for command in manager.drive().locomotion() {
        println!("  yaw={:+.2} forward={:+.2}", command.yaw, command.forward);
    }
}
