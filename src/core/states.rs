use bevy::prelude::*;

/// 宿主程序的大状态：目录加载完成前不处理任何置顶事件
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum AppState {
    #[default]
    Startup,
    Loading,
    InGame,
    /// 目录加载失败等不可恢复的情况
    Shutdown,
}
