use bevy::prelude::*;

pub mod events;
pub mod resources;
pub mod states;

/// 核心插件：注册全局状态 / 事件 / 配置
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        use states::AppState;

        app.init_state::<AppState>()
            .add_event::<events::LogEvent>()
            .init_resource::<resources::PinConfig>();
    }
}
