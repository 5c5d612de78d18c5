use bevy::prelude::*;

use super::model::PinRequest;

/// 用户点击置顶/取消置顶
#[derive(Event, Debug, Clone)]
pub struct TogglePin {
    pub entity: Entity, // PLACEHOLDER 表示玩家
    pub request: PinRequest,
    pub language: Option<String>,
}

/// 切换成功；path 为解析后的目录地址，pinned 表示切换后是否处于置顶
#[derive(Event, Debug, Clone)]
pub struct PinToggled {
    pub entity: Entity,
    pub path: String,
    pub pinned: bool,
}

#[derive(Event, Debug, Clone)]
pub struct PinRejected {
    pub entity: Entity,
    pub message: String,
}
