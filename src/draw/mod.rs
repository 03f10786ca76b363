//! 抽签模块
//!
//! 定义抽签方式、配对和抽签结果。配对生成的核心逻辑在
//! [`derangement`] 中，对外统一通过 [`DrawMethod::draw`] 调用。

pub mod derangement;

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{AppError, AppResult};

/// 抽签方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DrawMethod {
    /// 每个人随机给另一个人准备礼物
    Classic,
}

impl DrawMethod {
    pub const ALL: &'static [DrawMethod] = &[DrawMethod::Classic];

    pub fn key(&self) -> &'static str {
        match self {
            DrawMethod::Classic => "classic",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            DrawMethod::Classic => "Classic draw: everyone buys a gift for one random person",
        }
    }

    /// 按本抽签方式为参与者生成配对
    pub fn draw<R: Rng + ?Sized>(
        &self,
        participants: &[String],
        rng: &mut R,
        max_attempts: u32,
    ) -> AppResult<Vec<Assignment>> {
        match self {
            DrawMethod::Classic => derangement::pair_up(participants, rng, max_attempts),
        }
    }
}

impl fmt::Display for DrawMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for DrawMethod {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        DrawMethod::ALL
            .iter()
            .copied()
            .find(|method| method.key().eq_ignore_ascii_case(value))
            .ok_or_else(|| AppError::UnknownDrawMethod(value.to_string()))
    }
}

/// 抽签方式列表项（供前端下拉框展示）
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawMethodInfo {
    pub method: DrawMethod,
    pub description: &'static str,
}

impl From<DrawMethod> for DrawMethodInfo {
    fn from(method: DrawMethod) -> Self {
        Self {
            method,
            description: method.description(),
        }
    }
}

pub fn list_methods() -> Vec<DrawMethodInfo> {
    DrawMethod::ALL.iter().copied().map(Into::into).collect()
}

/// 一条配对：giver 给 receiver 准备礼物
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub giver: String,
    pub receiver: String,
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.giver, self.receiver)
    }
}

/// 一次抽签的完整结果，生成后不可变，下次抽签整体替换
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawResult {
    pub id: Uuid,
    pub method: DrawMethod,
    pub drawn_at: i64,
    pub assignments: Vec<Assignment>,
}

impl DrawResult {
    pub fn new(method: DrawMethod, assignments: Vec<Assignment>) -> Self {
        Self {
            id: Uuid::new_v4(),
            method,
            drawn_at: chrono::Utc::now().timestamp_millis(),
            assignments,
        }
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_parse() {
        assert_eq!("classic".parse::<DrawMethod>().unwrap(), DrawMethod::Classic);
        assert_eq!(" Classic ".parse::<DrawMethod>().unwrap(), DrawMethod::Classic);
        assert!(matches!(
            "mutual".parse::<DrawMethod>(),
            Err(AppError::UnknownDrawMethod(key)) if key == "mutual"
        ));
    }

    #[test]
    fn test_method_serde_key() {
        assert_eq!(
            serde_json::to_string(&DrawMethod::Classic).unwrap(),
            "\"classic\""
        );
        let method: DrawMethod = serde_json::from_str("\"classic\"").unwrap();
        assert_eq!(method, DrawMethod::Classic);
    }

    #[test]
    fn test_list_methods() {
        let methods = list_methods();
        assert_eq!(methods.len(), 1);
        assert_eq!(methods[0].method, DrawMethod::Classic);
        assert!(!methods[0].description.is_empty());
    }

    #[test]
    fn test_draw_result_ids_differ() {
        let a = DrawResult::new(DrawMethod::Classic, Vec::new());
        let b = DrawResult::new(DrawMethod::Classic, Vec::new());
        assert_ne!(a.id, b.id);
        assert!(a.is_empty());
    }
}
