//! 会话模块
//!
//! 一个抽签会话的全部状态：参与者名单、抽签方式、抽签结果和揭晓游标。
//! 核心逻辑在 [`SantaSession`](manager::SantaSession)，每个用户操作对应一个方法，
//! 前端（终端或 Tauri 命令）只负责参数解析和展示。

mod manager;

pub use manager::{SantaSession, SessionState};

use serde::Serialize;
use uuid::Uuid;

use crate::draw::{Assignment, DrawMethod};
use crate::reveal::RevealPhase;

/// 会话状态快照（推送给前端）
///
/// 只包含已揭晓的配对，未揭晓的部分不会离开后端。
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub participants: Vec<String>,
    pub selected_method: Option<DrawMethod>,
    pub can_draw: bool,
    pub phase: RevealPhase,
    pub draw_id: Option<Uuid>,
    pub drawn_at: Option<i64>,
    /// 本次抽签的配对总数
    pub total: usize,
    pub revealed: Vec<Assignment>,
    /// 最近一次揭晓的下标
    pub latest_revealed: Option<usize>,
}
