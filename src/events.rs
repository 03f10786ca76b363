//! Tauri 事件名常量
//!
//! 所有后端 → 前端的事件名集中定义，避免硬编码字符串散落各模块。

// === 参与者 ===
pub const PARTICIPANTS_CHANGED: &str = "participants-changed";

// === 抽签 ===
pub const DRAW_METHOD_SELECTED: &str = "draw-method-selected";
pub const DRAW_COMPLETED: &str = "draw-completed";

// === 揭晓 ===
pub const ASSIGNMENT_REVEALED: &str = "assignment-revealed";
