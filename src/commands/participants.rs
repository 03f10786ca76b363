use tauri::{AppHandle, Emitter, Runtime, State};

use crate::events;
use crate::session::{SessionSnapshot, SessionState};
use crate::AppResult;

/// 加入参与者
///
/// 名字为空或重复时返回错误，名单不变。
#[tauri::command]
pub async fn add_participant<R: Runtime>(
    app: AppHandle<R>,
    session: State<'_, SessionState>,
    name: String,
) -> AppResult<SessionSnapshot> {
    let mut guard = session.lock().await;
    guard.add_participant(&name)?;

    let _ = app.emit(events::PARTICIPANTS_CHANGED, guard.participants());
    Ok(guard.snapshot())
}

/// 移除参与者
#[tauri::command]
pub async fn remove_participant<R: Runtime>(
    app: AppHandle<R>,
    session: State<'_, SessionState>,
    name: String,
) -> AppResult<SessionSnapshot> {
    let mut guard = session.lock().await;
    guard.remove_participant(&name)?;

    let _ = app.emit(events::PARTICIPANTS_CHANGED, guard.participants());
    Ok(guard.snapshot())
}
