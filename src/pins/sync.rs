use bevy::prelude::*;

use super::collab::PinServices;
use super::error::PinError;
use super::model::{PinReference, PinType};
use super::selector::select_gear_to_pin;
use crate::character::components::User;
use crate::data::schema::CharacterClass;

/// path 不存在时才追加，重复调用无副作用
pub fn add_pinned_gear(user: &mut User, pin_type: PinType, path: &str) {
    if user.pinned_items.iter().any(|pinned| pinned.path == path) {
        return;
    }
    debug!("置顶 {path}");
    user.pinned_items.push(PinReference::new(pin_type, path));
}

/// 移除第一个匹配 path 的置顶，返回是否真的移除了
pub fn remove_item_by_path(user: &mut User, path: &str) -> bool {
    match user.pinned_items.iter().position(|pinned| pinned.path == path) {
        Some(idx) => {
            user.pinned_items.remove(idx);
            debug!("取消置顶 {path}");
            true
        }
        None => false,
    }
}

/// 把当前职业的候选装备加入置顶
pub fn add_pinned_gear_by_class(user: &mut User, services: &PinServices) -> Result<(), PinError> {
    if !user.flags.class_selected {
        return Ok(());
    }

    for item in select_gear_to_pin(user, services.catalog) {
        let info = services
            .resolver
            .item_info(user, PinType::MarketGear, &item.key, None)?;
        add_pinned_gear(user, info.pin_type, &info.path);
    }
    Ok(())
}

/// 把当前职业的候选装备从置顶中移除（切换职业前调用）
pub fn remove_pinned_gear_by_class(
    user: &mut User,
    services: &PinServices,
) -> Result<(), PinError> {
    if !user.flags.class_selected {
        return Ok(());
    }

    for item in select_gear_to_pin(user, services.catalog) {
        let info = services
            .resolver
            .item_info(user, PinType::MarketGear, &item.key, None)?;
        remove_item_by_path(user, &info.path);
    }
    Ok(())
}

/// 切换职业：先移除旧职业的候选，再按新职业加入
pub fn change_class(
    user: &mut User,
    class: CharacterClass,
    services: &PinServices,
) -> Result<(), PinError> {
    remove_pinned_gear_by_class(user, services)?;
    user.class = Some(class);
    user.flags.class_selected = true;
    add_pinned_gear_by_class(user, services)
}

/// 获得一件装备后更新置顶
///
/// 若该装备正是当前候选之一，则整体重算：先移除旧候选，再标记拥有，
/// 最后按新的拥有状态重新加入候选。否则只标记拥有。
/// 两种情况下该装备自身的置顶都会被移除。
pub fn remove_pinned_gear_add_possible_new_ones(
    user: &mut User,
    services: &PinServices,
    item_path: &str,
    new_item_key: &str,
) -> Result<(), PinError> {
    // 必须在标记拥有之前判断
    let mut was_candidate = false;
    for item in select_gear_to_pin(user, services.catalog) {
        let info = services
            .resolver
            .item_info(user, PinType::MarketGear, &item.key, None)?;
        if info.path == item_path {
            was_candidate = true;
            break;
        }
    }

    remove_item_by_path(user, item_path);

    if was_candidate {
        remove_pinned_gear_by_class(user, services)?;
        user.mark_owned(new_item_key);
        add_pinned_gear_by_class(user, services)?;
    } else {
        user.mark_owned(new_item_key);
    }
    Ok(())
}
