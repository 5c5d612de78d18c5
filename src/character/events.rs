use bevy::prelude::*;

use crate::data::schema::CharacterClass;

/// 选择/切换职业；entity 为 PLACEHOLDER 时指玩家
#[derive(Event, Debug, Clone)]
pub struct SelectClass {
    pub entity: Entity,
    pub class: CharacterClass,
}

/// 打印当前实际置顶列表
#[derive(Event, Debug, Clone)]
pub struct ShowPins {
    pub entity: Option<Entity>, // None 表示玩家
}
