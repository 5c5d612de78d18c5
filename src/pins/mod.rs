pub mod collab;
pub mod error;
pub mod events;
pub mod model;
pub mod selector;
pub mod sync;
mod systems;
pub mod toggle;

#[cfg(test)]
pub(crate) mod test_support;

use crate::core::states::AppState;
use bevy::prelude::*;
use collab::Messages;
use events::*;
use systems::*;

pub use error::PinError;
pub use model::{PinReference, PinRequest, PinType, RequestContext};

/// 置顶插件：注册文案资源与切换事件
pub struct PinsPlugin;

impl Plugin for PinsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Messages>()
            .add_event::<TogglePin>()
            .add_event::<PinToggled>()
            .add_event::<PinRejected>()
            .add_systems(
                Update,
                handle_toggle_pin.run_if(in_state(AppState::InGame)),
            );
    }
}
