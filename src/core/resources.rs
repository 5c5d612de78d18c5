use bevy::prelude::*;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::data::schema::CharacterClass;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Could not parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// 宿主配置（TOML）
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PinConfig {
    /// RON 目录在 assets/ 下的路径
    pub catalog_path: String,
    pub default_language: String,
    /// 进入游戏时替玩家选择的职业
    pub starting_class: Option<CharacterClass>,
}

impl Default for PinConfig {
    fn default() -> Self {
        Self {
            catalog_path: "data/gear.ron".to_string(),
            default_language: "en".to_string(),
            starting_class: None,
        }
    }
}

impl PinConfig {
    pub fn from_toml(src: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(src)?)
    }

    /// 文件不存在时使用默认值；格式错误则报错
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            warn!("配置文件 {} 不存在，使用默认配置", path.display());
            return Ok(Self::default());
        }
        let src = std::fs::read_to_string(path)?;
        Self::from_toml(&src)
    }
}
