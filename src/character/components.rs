use bevy::prelude::*;
use std::collections::HashMap;

use crate::data::schema::CharacterClass;
use crate::pins::model::PinReference;

/// 玩家标记组件
#[derive(Component)]
pub struct Player;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFlags {
    /// 为 true 时才按职业自动置顶
    pub class_selected: bool,
}

/// 用户实体上与置顶相关的字段
///
/// `pinned_items` 与 `unpinned_items` 各自按 path 去重。
#[derive(Component, Debug, Clone, Default, PartialEq, Eq)]
pub struct User {
    pub class: Option<CharacterClass>,
    pub owned_gear: HashMap<String, bool>,
    pub pinned_items: Vec<PinReference>,
    pub unpinned_items: Vec<PinReference>,
    pub flags: UserFlags,
}

impl User {
    pub fn owns(&self, key: &str) -> bool {
        self.owned_gear.get(key).copied().unwrap_or(false)
    }

    pub fn mark_owned(&mut self, key: &str) {
        self.owned_gear.insert(key.to_string(), true);
    }
}
