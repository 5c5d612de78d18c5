pub mod catalog;
pub mod loader;
pub mod schema;

use bevy::prelude::*;
use catalog::ContentCatalog;
use schema::CatalogFile;
use bevy::asset::LoadState;
use crate::core::{events::LogEvent, resources::PinConfig, states::AppState};

// --------------------------- 资源 ---------------------------
#[derive(Resource, Default)]
pub struct CatalogAssets {
    handle: Option<Handle<CatalogFile>>,
}

// --------------------------- 插件 ---------------------------
pub struct DataPlugin;
impl Plugin for DataPlugin {
    fn build(&self, app: &mut App) {
        app
            // 注册资产类型 & Loader
            .init_asset::<CatalogFile>()
            .register_asset_loader(loader::RonCatalogLoader)
            .init_resource::<CatalogAssets>()
            // Loading 流程
            .add_systems(OnEnter(AppState::Loading), start_loading)
            .add_systems(
                Update,
                check_loaded.run_if(in_state(AppState::Loading)),
            );
    }
}

// --------------------------- 系统 ---------------------------
fn start_loading(
    mut catalog_assets: ResMut<CatalogAssets>,
    asset_server: Res<AssetServer>,
    config: Res<PinConfig>,
) {
    let handle: Handle<CatalogFile> = asset_server.load(config.catalog_path.clone());
    catalog_assets.handle = Some(handle);
}

/// 目录加载完成后构建 ContentCatalog（只构建一次）并进入游戏；
/// 加载失败则报告原因并进入 Shutdown
fn check_loaded(
    mut commands: Commands,
    mut next: ResMut<NextState<AppState>>,
    mut ev_log: EventWriter<LogEvent>,
    mut app_exit: EventWriter<AppExit>,
    catalog_assets: Res<CatalogAssets>,
    files: Res<Assets<CatalogFile>>,
    asset_server: Res<AssetServer>,
    config: Res<PinConfig>,
) {
    let Some(handle) = catalog_assets.handle.as_ref() else {
        return;
    };

    if let Some(file) = files.get(handle) {
        let catalog = ContentCatalog::from(file);
        info!(
            "✔ Catalog loaded: {} slot types, {} gear items",
            catalog.gear_types().len(),
            file.gear.len()
        );
        commands.insert_resource(catalog);
        next.set(AppState::InGame);
        return;
    }

    if let LoadState::Failed(err) = asset_server.load_state(handle.id()) {
        error!("目录 {} 加载失败: {err}", config.catalog_path);
        ev_log.write(LogEvent(format!(
            "无法加载目录 {}: {err}",
            config.catalog_path
        )));
        next.set(AppState::Shutdown);
        app_exit.write(AppExit::error());
    }
}
