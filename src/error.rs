//! 应用错误处理模块
//!
//! Tauri 命令的错误必须实现 Serialize 才能传递给前端，
//! 终端前端直接使用 Display 输出。

use serde::Serialize;
use thiserror::Error;

/// 应用统一错误类型
///
/// 注意：使用 `#[from]` 的变体会存储原始错误类型，
/// 但由于 `std::io::Error` 等不实现 `Serialize`，
/// 通过自定义 Serialize 实现统一转为 `{ kind, message }` 格式。
#[derive(Debug, Error)]
pub enum AppError {
    /// 文件系统错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// 序列化/反序列化错误
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// 配置无效
    #[error("Config error: {0}")]
    Config(String),

    /// 参与者名字为空（trim 之后）
    #[error("Participant name must not be empty")]
    EmptyName,

    #[error("Participant already added: {0}")]
    DuplicateParticipant(String),

    #[error("Participant not found: {0}")]
    ParticipantNotFound(String),

    #[error("Unknown draw method: {0}")]
    UnknownDrawMethod(String),

    /// 尚未选择抽签方式
    #[error("No draw method selected")]
    NoDrawMethod,

    /// 参与人数不足，抽签按钮不可用
    #[error("At least {required} participants are required, got {found}")]
    NotEnoughParticipants { required: usize, found: usize },

    /// 少于 2 人时不存在合法的配对
    #[error("Cannot pair {participants} participant(s) without someone drawing themselves")]
    UnsatisfiableDraw { participants: usize },

    /// 终端输入无法解析
    #[error("Invalid command: {0}")]
    InvalidCommand(String),
}

/// 传递给前端的序列化错误格式
impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("AppError", 2)?;

        let kind = match self {
            AppError::Io(_) => "Io",
            AppError::Serialization(_) => "Serialization",
            AppError::Config(_) => "Config",
            AppError::EmptyName => "EmptyName",
            AppError::DuplicateParticipant(_) => "DuplicateParticipant",
            AppError::ParticipantNotFound(_) => "ParticipantNotFound",
            AppError::UnknownDrawMethod(_) => "UnknownDrawMethod",
            AppError::NoDrawMethod => "NoDrawMethod",
            AppError::NotEnoughParticipants { .. } => "NotEnoughParticipants",
            AppError::UnsatisfiableDraw { .. } => "UnsatisfiableDraw",
            AppError::InvalidCommand(_) => "InvalidCommand",
        };

        state.serialize_field("kind", kind)?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

// ============ 便捷类型别名 ============

/// Result 类型别名
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_kind_and_message() {
        let err = AppError::NotEnoughParticipants {
            required: 3,
            found: 1,
        };
        let value = serde_json::to_value(&err).unwrap();
        assert_eq!(value["kind"], "NotEnoughParticipants");
        assert_eq!(value["message"], "At least 3 participants are required, got 1");

        let value = serde_json::to_value(AppError::DuplicateParticipant("Ayşe".into())).unwrap();
        assert_eq!(value["kind"], "DuplicateParticipant");
        assert_eq!(value["message"], "Participant already added: Ayşe");
    }
}
