use bevy::prelude::*;
use std::collections::HashMap;

use super::schema::{CatalogFile, CharacterClass, GearItem, GearSlotType};
use crate::pins::model::PinReference;

/// 只读内容目录：装备树 + 槽位排序 + 官方置顶列表
///
/// 构建一次，之后只读。
#[derive(Resource, Debug, Clone, Default)]
pub struct ContentCatalog {
    gear_types: Vec<GearSlotType>,
    sort_order: HashMap<GearSlotType, usize>,
    tree: HashMap<(GearSlotType, CharacterClass), Vec<GearItem>>,
    flat: HashMap<String, GearItem>,
    official_pinned: Vec<PinReference>,
}

impl ContentCatalog {
    pub fn new(
        gear_types: Vec<GearSlotType>,
        gear: Vec<GearItem>,
        official_pinned: Vec<PinReference>,
    ) -> Self {
        let mut sort_order = HashMap::with_capacity(gear_types.len());
        let mut declared = Vec::with_capacity(gear_types.len());
        for slot in gear_types {
            if !sort_order.contains_key(&slot) {
                sort_order.insert(slot, declared.len());
                declared.push(slot);
            }
        }

        let mut tree: HashMap<(GearSlotType, CharacterClass), Vec<GearItem>> = HashMap::new();
        let mut flat = HashMap::with_capacity(gear.len());
        for item in gear {
            // 同一 key 只保留第一次出现
            if flat.contains_key(&item.key) {
                warn!("目录中重复的装备 key: {}", item.key);
                continue;
            }
            tree.entry((item.slot, item.klass))
                .or_default()
                .push(item.clone());
            flat.insert(item.key.clone(), item);
        }

        Self {
            gear_types: declared,
            sort_order,
            tree,
            flat,
            official_pinned,
        }
    }

    /// 目录声明的槽位顺序
    pub fn gear_types(&self) -> &[GearSlotType] {
        &self.gear_types
    }

    /// 槽位在全局顺序中的位置；未声明的槽位排在最后
    pub fn sort_key(&self, slot: GearSlotType) -> usize {
        self.sort_order.get(&slot).copied().unwrap_or(usize::MAX)
    }

    /// 某职业某槽位下按目录顺序排列的装备
    pub fn gear_for(&self, slot: GearSlotType, klass: CharacterClass) -> &[GearItem] {
        self.tree
            .get(&(slot, klass))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn gear_by_key(&self, key: &str) -> Option<&GearItem> {
        self.flat.get(key)
    }

    /// 按地址查找装备，例如 `gear.flat.weapon_warrior_1`
    pub fn resolve(&self, path: &str) -> Option<&GearItem> {
        path.strip_prefix("gear.flat.")
            .and_then(|key| self.gear_by_key(key))
    }

    pub fn official_pinned(&self) -> &[PinReference] {
        &self.official_pinned
    }
}

impl From<&CatalogFile> for ContentCatalog {
    fn from(file: &CatalogFile) -> Self {
        Self::new(
            file.gear_types.clone(),
            file.gear.clone(),
            file.official_pinned.clone(),
        )
    }
}
