//! 参与者名单
//!
//! 有序、去重（区分大小写的精确匹配）的参与者列表，顺序即加入顺序，
//! 抽签结果中送礼人的顺序也以此为准。

use serde::Serialize;

use crate::{AppError, AppResult};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// 加入参与者，返回 trim 后实际存储的名字
    pub fn add(&mut self, raw: &str) -> AppResult<&str> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(AppError::EmptyName);
        }
        if self.contains(name) {
            return Err(AppError::DuplicateParticipant(name.to_string()));
        }
        self.names.push(name.to_string());
        Ok(self.names.last().map(String::as_str).unwrap_or_default())
    }

    /// 移除参与者，其余成员保持原有相对顺序
    pub fn remove(&mut self, name: &str) -> AppResult<String> {
        let name = name.trim();
        let index = self
            .names
            .iter()
            .position(|n| n == name)
            .ok_or_else(|| AppError::ParticipantNotFound(name.to_string()))?;
        Ok(self.names.remove(index))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
