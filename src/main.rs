use anyhow::Context;
use bevy::prelude::*;

use pinned_gear::core::{events::LogEvent, resources::PinConfig, states::AppState};
use pinned_gear::{data::DataPlugin, PinnedGearPlugins};

const CONFIG_PATH: &str = "assets/config/pins.toml";

fn main() -> anyhow::Result<()> {
    let config = PinConfig::load(CONFIG_PATH)
        .with_context(|| format!("failed to load {CONFIG_PATH}"))?;

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                visible: false,
                ..default()
            }), // 不显示窗口，实现“无 UI”
            ..default()
        }))
        .insert_resource(config)
        .add_plugins(PinnedGearPlugins)
        .add_plugins(DataPlugin)
        .add_systems(Update, forward_log_event)
        .add_systems(Startup, |mut next: ResMut<NextState<AppState>>| {
            next.set(AppState::Loading);
        })
        .run();

    Ok(())
}

fn forward_log_event(mut reader: EventReader<LogEvent>) {
    for e in reader.read() {
        println!("> {}", e.0);
    }
}
