use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use std::time::Duration;

use pinned_gear::character::components::{Player, User};
use pinned_gear::core::{events::LogEvent, resources::PinConfig, states::AppState};
use pinned_gear::data::catalog::ContentCatalog;
use pinned_gear::data::schema::{CharacterClass, GearSlotType};
use pinned_gear::data::DataPlugin;
use pinned_gear::PinnedGearPlugins;

/// 走完整的 Loading 流程，目录从 assets/ 读取
fn loading_app(catalog_path: &str) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin, AssetPlugin::default()))
        .add_plugins(PinnedGearPlugins)
        .add_plugins(DataPlugin)
        .insert_resource(PinConfig {
            catalog_path: catalog_path.to_string(),
            starting_class: Some(CharacterClass::Warrior),
            ..default()
        });
    app.world_mut()
        .resource_mut::<NextState<AppState>>()
        .set(AppState::Loading);
    app
}

struct Run {
    reached: bool,
    exited: bool,
    log: Vec<String>,
}

/// 资源在 IO 线程上加载，逐帧推进直到进入目标状态
fn run_until(app: &mut App, state: AppState) -> Run {
    let mut run = Run {
        reached: false,
        exited: false,
        log: Vec::new(),
    };
    for _ in 0..500 {
        app.update();
        run.log.extend(
            app.world()
                .resource::<Events<LogEvent>>()
                .iter_current_update_events()
                .map(|ev| ev.0.clone()),
        );
        run.exited |= app.should_exit().is_some();
        if *app.world().resource::<State<AppState>>().get() == state {
            run.reached = true;
            break;
        }
        std::thread::sleep(Duration::from_millis(10));
    }
    run
}

#[test]
fn ron_catalog_loads_and_enters_game() {
    let mut app = loading_app("data/gear.ron");
    let run = run_until(&mut app, AppState::InGame);
    assert!(run.reached, "catalog never finished loading");
    assert!(!run.exited);

    let catalog = app.world().resource::<ContentCatalog>();
    assert_eq!(
        catalog.gear_types(),
        [
            GearSlotType::Weapon,
            GearSlotType::Armor,
            GearSlotType::Head,
            GearSlotType::Shield
        ]
    );
    assert_eq!(catalog.official_pinned().len(), 3);

    let world = app.world_mut();
    let mut query = world.query_filtered::<&User, With<Player>>();
    let user = query.single(world).unwrap();
    let paths: Vec<&str> = user.pinned_items.iter().map(|p| p.path.as_str()).collect();
    assert_eq!(
        paths,
        [
            "gear.flat.weapon_warrior_0",
            "gear.flat.armor_warrior_1",
            "gear.flat.head_warrior_1",
            "gear.flat.shield_warrior_1",
        ]
    );
}

#[test]
fn missing_catalog_is_reported_and_exits() {
    let mut app = loading_app("data/missing.ron");
    let run = run_until(&mut app, AppState::Shutdown);

    assert!(run.reached, "load failure left the app in Loading");
    assert!(run.exited);
    assert!(
        run.log.iter().any(|line| line.contains("data/missing.ron")),
        "{:?}",
        run.log
    );
    assert!(app.world().get_resource::<ContentCatalog>().is_none());
}
