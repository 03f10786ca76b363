//! 揭晓状态机
//!
//! `Idle`（还没有抽签结果）→ `Revealing`（0 ≤ cursor < total）→ `Complete`（cursor == total）。
//! 每次揭晓游标加一，到达 `Complete` 后继续揭晓不产生任何变化，
//! 只有新的抽签才会把游标重置为 0。

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RevealPhase {
    Idle,
    Revealing,
    Complete,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealCursor {
    revealed: usize,
    total: usize,
}

impl RevealCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// 新抽签结果生效时调用
    pub fn reset(&mut self, total: usize) {
        self.revealed = 0;
        self.total = total;
    }

    /// 揭晓下一条，返回被揭晓的下标；已全部揭晓时返回 `None`
    pub fn advance(&mut self) -> Option<usize> {
        if self.revealed >= self.total {
            return None;
        }
        self.revealed += 1;
        Some(self.revealed - 1)
    }

    /// 一次揭晓剩余全部，返回本次新揭晓的条数
    pub fn advance_all(&mut self) -> usize {
        let remaining = self.total - self.revealed;
        self.revealed = self.total;
        remaining
    }

    pub fn phase(&self) -> RevealPhase {
        if self.total == 0 {
            RevealPhase::Idle
        } else if self.revealed < self.total {
            RevealPhase::Revealing
        } else {
            RevealPhase::Complete
        }
    }

    pub fn revealed(&self) -> usize {
        self.revealed
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// 最近一次揭晓的下标（前端用于高亮）
    pub fn latest(&self) -> Option<usize> {
        self.revealed.checked_sub(1)
    }
}
