use bevy::prelude::*;

use crate::character::components::User;
use crate::data::{catalog::ContentCatalog, schema::GearItem};

/// 每个槽位选出本职业下第一件未拥有的装备，按目录的槽位顺序返回
///
/// 纯函数；未选职业或某槽位全部拥有时该槽位不产生候选。
pub fn select_gear_to_pin<'c>(user: &User, catalog: &'c ContentCatalog) -> Vec<&'c GearItem> {
    let Some(klass) = user.class else {
        return Vec::new();
    };

    let mut changes: Vec<&GearItem> = catalog
        .gear_types()
        .iter()
        .filter_map(|slot| {
            catalog
                .gear_for(*slot, klass)
                .iter()
                .find(|item| !user.owns(&item.key))
        })
        .collect();

    changes.sort_by_key(|item| catalog.sort_key(item.slot));
    debug!("{:?} 的候选装备: {}", klass, changes.len());
    changes
}
