// Copyright 2025 the UniCAVE Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use wand_tools::drive::{AnalogDrive, DriveCommand, DriveConfig, Locomotion};
use wand_tools::manager::ToolManager;
use wand_tools::tool::Tool;
use wand_tools::toolset::Toolset;
use wand_tools::types::{ButtonCode, HitTarget, RayHit, Vec3};

/// Tool that only counts calls.
struct Tally {
    name: &'static str,
    calls: u64,
}

impl Tally {
    fn new(name: &'static str) -> Self {
        Self { name, calls: 0 }
    }
}

impl Tool for Tally {
    fn name(&self) -> &str {
        self.name
    }

    fn shut_down(&mut self) {
        self.calls += 1;
    }

    fn button_click(&mut self, _code: ButtonCode, _origin: Vec3, _direction: Vec3) {
        self.calls += 1;
    }

    fn button_drag(&mut self, _hit: &RayHit, _offset: Vec3, _origin: Vec3, _direction: Vec3) {
        self.calls += 1;
    }
}

/// Locomotion sink that keeps only the last command.
#[derive(Default)]
struct Last(Option<DriveCommand>);

impl Locomotion for Last {
    fn drive(&mut self, command: DriveCommand) {
        self.0 = Some(command);
    }
}

fn stock() -> ToolManager<Box<dyn Tool>, AnalogDrive<Last>, String> {
    let toolset = Toolset {
        warp: Tally::new("Warp"),
        grab: Tally::new("Grab"),
        button: Tally::new("Button"),
        rotate: Tally::new("Rotate"),
    };
    ToolManager::from_toolset(toolset, DriveConfig::default(), Last::default(), String::new())
        .expect("default drive config is valid")
}

fn bench_dispatch(c: &mut Criterion) {
    let origin = Vec3::new(0.0, 1.6, 0.0);
    let forward = Vec3::new(0.0, 0.0, 1.0);
    let hit = RayHit {
        target: HitTarget(1),
        point: forward * 2.0,
        normal: -forward,
        distance: 2.0,
    };

    let mut group = c.benchmark_group("dispatch");
    group.throughput(Throughput::Elements(1));

    let mut m = stock();
    group.bench_function("click_forwarded", |b| {
        b.iter(|| m.handle_button_click(black_box(ButtonCode::Trigger), origin, forward));
    });

    let mut m = stock();
    group.bench_function("click_next_tool", |b| {
        b.iter(|| m.handle_button_click(black_box(ButtonCode::NextTool), origin, forward));
    });

    let mut m = stock();
    group.bench_function("drag", |b| {
        b.iter(|| m.handle_button_drag(ButtonCode::Trigger, black_box(&hit), Vec3::ZERO, origin, forward));
    });

    let mut m = stock();
    group.bench_function("analog", |b| {
        b.iter(|| m.handle_analog(black_box(0.4), black_box(-0.8)));
    });

    group.finish();
}

criterion_group!(benches, bench_dispatch);
criterion_main!(benches);
