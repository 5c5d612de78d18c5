use bevy::asset::Asset;
use bevy::reflect::TypePath;
use serde::{Deserialize, Serialize};

use crate::pins::model::PinReference;

/// 装备槽类型（封闭枚举，顺序由目录文件声明）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GearSlotType {
    Weapon,
    Armor,
    Head,
    Shield,
    Body,
    Back,
    HeadAccessory,
    Eyewear,
}

/// 职业
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Warrior,
    Rogue,
    Wizard,
    Healer,
}

/// 静态装备条目
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GearItem {
    pub key: String,
    #[serde(rename = "type")]
    pub slot: GearSlotType,
    pub klass: CharacterClass,
    #[serde(default)]
    pub text: String,
}

impl GearItem {
    /// 目录中的唯一地址
    pub fn path(&self) -> String {
        format!("gear.flat.{}", self.key)
    }
}

/// RON 文件的顶层结构
#[derive(Asset, TypePath, Deserialize, Debug)]
pub struct CatalogFile {
    pub gear_types: Vec<GearSlotType>,
    pub gear: Vec<GearItem>,
    #[serde(default)]
    pub official_pinned: Vec<PinReference>,
}
