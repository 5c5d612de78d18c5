//! 职业装备自动置顶与手动置顶切换
//!
//! 核心逻辑在 [`pins`]：纯同步函数，直接修改传入的 [`character::components::User`]。
//! 其余模块把它们接入 bevy 的事件/系统。

pub mod character;
pub mod core;
pub mod data;
pub mod inventory;
pub mod pins;

use bevy::app::{PluginGroup, PluginGroupBuilder};

/// 除资源加载外的全部插件；目录由调用方以 `ContentCatalog` 资源提供
pub struct PinnedGearPlugins;

impl PluginGroup for PinnedGearPlugins {
    fn build(self) -> PluginGroupBuilder {
        PluginGroupBuilder::start::<Self>()
            .add(crate::core::CorePlugin)
            .add(character::CharacterPlugin)
            .add(inventory::InventoryPlugin)
            .add(pins::PinsPlugin)
    }
}
