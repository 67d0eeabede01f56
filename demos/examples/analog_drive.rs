// Copyright 2025 the UniCAVE Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Analog drive tuning.
//!
//! Loads a `DriveConfig` from TOML (unset fields keep their defaults) and shows
//! how dead zone, inversion, and speeds shape a sweep of stick input.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p wand_tools_demos --example analog_drive`

use tracing_subscriber::EnvFilter;
use wand_tools::drive::{AnalogDrive, DriveCommand, DriveConfig};
use wand_tools::tool::DriveHandler;
use wand_tools::types::{ButtonCode, Vec3};

const TUNING: &str = r#"
dead_zone = 0.15
rotation_speed = 45.0
movement_speed = 2.5
invert_vertical = true
"#;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config: DriveConfig = match toml::from_str(TUNING) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("bad drive tuning: {err}");
            return;
        }
    };
    println!("{config:?}");

    let mut drive = match AnalogDrive::new(config, Vec::<DriveCommand>::new()) {
        Ok(drive) => drive,
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };
    drive.button_click(
        ButtonCode::Pad,
        Vec3::new(0.0, 1.6, 0.0),
        Vec3::new(0.0, 0.0, 1.0),
    );

    let sweep = [(0.0, 0.0), (0.1, -0.1), (0.5, 0.0), (0.0, -1.0), (1.2, 0.4)];
    for (h, v) in sweep {
        let before = drive.locomotion().len();
        drive.analog(h, v);
        match drive.locomotion().get(before) {
            Some(cmd) => println!(
                "stick ({h:+.2}, {v:+.2}) -> yaw {:+.2}, forward {:+.2}",
                cmd.yaw, cmd.forward
            ),
            None => println!("stick ({h:+.2}, {v:+.2}) -> dead zone"),
        }
    }
}
