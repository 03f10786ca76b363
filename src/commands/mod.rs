//! Tauri IPC 命令入口
//!
//! 薄层命令入口，仅负责 Tauri 状态读取和参数解析，
//! 所有业务逻辑委托给 [`session`](crate::session) 模块。
//! 修改类命令返回最新的 [`SessionSnapshot`]，并 emit 对应事件通知前端。

mod draw;
mod participants;

// glob re-export：Tauri 的 #[tauri::command] 宏会生成 __cmd__* 隐藏符号，
// generate_handler! 需要通过模块路径访问这些符号，显式导出无法覆盖。
pub use draw::*;
pub use participants::*;

use tauri::State;

use crate::draw::DrawMethodInfo;
use crate::session::{SessionSnapshot, SessionState};
use crate::AppResult;

/// 获取当前会话快照（前端初始化时调用）
#[tauri::command]
pub async fn get_session(session: State<'_, SessionState>) -> AppResult<SessionSnapshot> {
    Ok(session.lock().await.snapshot())
}

/// 可选的抽签方式
#[tauri::command]
pub fn list_draw_methods() -> Vec<DrawMethodInfo> {
    crate::draw::list_methods()
}
