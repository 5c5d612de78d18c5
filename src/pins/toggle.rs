use super::collab::{OfficialPins, PinServices};
use super::error::PinError;
use super::model::{PinReference, PinRequest, PinType, RequestContext};
use crate::character::components::User;

/// 用户永远不能置顶/取消置顶的路径
pub const PROTECTED_PATHS: [&str; 2] = ["armoire", "potion"];

/// 把请求解析为目录地址；空 path / 空 key 视为缺失
pub fn resolve_pin_path(
    user: &User,
    request: &PinRequest,
    ctx: &RequestContext,
    services: &PinServices,
) -> Result<String, PinError> {
    match request {
        PinRequest::ByPath { path, .. } if !path.is_empty() => Ok(path.clone()),
        PinRequest::ByItem { item_key, pin_type } if !item_key.is_empty() => Ok(services
            .resolver
            .item_info(user, *pin_type, item_key, ctx.language.as_deref())?
            .path),
        _ => Err(PinError::MissingItem),
    }
}

/// 切换一个条目的置顶状态，返回切换后该条目是否处于置顶
///
/// 官方置顶的条目通过 `unpinned_items` 记录/清除屏蔽；
/// 其它条目直接在 `pinned_items` 中增删。
/// 受保护路径在任何修改之前被拒绝。
pub fn toggle_pinned_item(
    user: &mut User,
    request: &PinRequest,
    ctx: &RequestContext,
    services: &PinServices,
) -> Result<bool, PinError> {
    let path = resolve_pin_path(user, request, ctx, services)?;
    toggle_pinned_path(user, request.pin_type(), &path, ctx, services)
}

/// 已解析出 path 时的切换
pub fn toggle_pinned_path(
    user: &mut User,
    pin_type: PinType,
    path: &str,
    ctx: &RequestContext,
    services: &PinServices,
) -> Result<bool, PinError> {
    if PROTECTED_PATHS.contains(&path) {
        return Err(PinError::InvalidRequest(
            services
                .i18n
                .t("cannotUnpinArmoirPotion", ctx.language.as_deref()),
        ));
    }

    let is_official_pinned = services
        .official
        .official_pinned_items(user)
        .iter()
        .any(|official| official.path == path);

    let target = if is_official_pinned {
        &mut user.unpinned_items
    } else {
        &mut user.pinned_items
    };

    match target.iter().position(|pinned| pinned.path == path) {
        Some(idx) => {
            target.remove(idx);
            Ok(is_official_pinned)
        }
        None => {
            target.push(PinReference::new(pin_type, path));
            Ok(!is_official_pinned)
        }
    }
}

/// 条目当前是否处于置顶：用户置顶，或官方置顶且未被屏蔽
pub fn is_pinned(user: &User, official: &dyn OfficialPins, path: &str) -> bool {
    if user.pinned_items.iter().any(|pinned| pinned.path == path) {
        return true;
    }
    official
        .official_pinned_items(user)
        .iter()
        .any(|pinned| pinned.path == path)
        && !user.unpinned_items.iter().any(|unpinned| unpinned.path == path)
}

/// 实际展示的置顶列表：未屏蔽的官方置顶在前，用户置顶在后，path 不重复
pub fn effective_pinned_items(user: &User, official: &dyn OfficialPins) -> Vec<PinReference> {
    let mut items: Vec<PinReference> = official
        .official_pinned_items(user)
        .into_iter()
        .filter(|pinned| !user.unpinned_items.contains(pinned))
        .collect();

    for pinned in &user.pinned_items {
        if !items.contains(pinned) {
            items.push(pinned.clone());
        }
    }
    items
}
