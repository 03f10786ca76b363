//! 会话配置
//!
//! 加载顺序：内置默认值 → JSON 配置文件（`--config` 或 `SECRET_SANTA_CONFIG`）→ 命令行覆盖。

use std::ffi::OsString;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{AppError, AppResult};

/// 配置文件路径的环境变量
pub const CONFIG_ENV: &str = "SECRET_SANTA_CONFIG";

/// 抽签按钮可用的最少人数
pub const DEFAULT_MIN_PARTICIPANTS: usize = 3;

/// 拒绝采样的默认尝试次数
///
/// n ≥ 2 时单次洗牌得到错排的概率不低于 1/3，100 次全部失败几乎不可能。
pub const DEFAULT_MAX_DRAW_ATTEMPTS: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionConfig {
    /// 允许抽签的最少参与人数，不能小于 2
    pub min_participants: usize,
    /// 固定随机种子（用于复现一次抽签），为空时每个会话随机生成
    pub seed: Option<u64>,
    /// 错排拒绝采样的最大尝试次数，用尽后退化为单环构造
    pub max_draw_attempts: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            min_participants: DEFAULT_MIN_PARTICIPANTS,
            seed: None,
            max_draw_attempts: DEFAULT_MAX_DRAW_ATTEMPTS,
        }
    }
}

impl SessionConfig {
    /// 从 JSON 文件加载，缺失字段使用默认值
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        tracing::debug!("Loaded session config from {}", path.display());
        Ok(config)
    }

    /// 按显式路径或环境变量加载，两者都没有时返回默认配置
    pub fn resolve(explicit: Option<&Path>) -> AppResult<Self> {
        Self::resolve_with(explicit, std::env::var_os(CONFIG_ENV))
    }

    /// `env_path` 为环境变量的值，空字符串视为未设置
    fn resolve_with(explicit: Option<&Path>, env_path: Option<OsString>) -> AppResult<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match env_path {
            Some(path) if !path.is_empty() => Self::load(path),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.min_participants < 2 {
            return Err(AppError::Config(format!(
                "minParticipants must be at least 2, got {}",
                self.min_participants
            )));
        }
        if self.max_draw_attempts == 0 {
            return Err(AppError::Config(
                "maxDrawAttempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
