use bevy::prelude::*;

/// 面向用户的一行输出，由宿主决定怎么展示
#[derive(Event, Debug, Clone)]
pub struct LogEvent(pub String);
