use tauri::{AppHandle, Emitter, Runtime, State};

use crate::draw::DrawMethod;
use crate::events;
use crate::session::{SessionSnapshot, SessionState};
use crate::AppResult;

/// 选择抽签方式
#[tauri::command]
pub async fn select_draw_method<R: Runtime>(
    app: AppHandle<R>,
    session: State<'_, SessionState>,
    method: DrawMethod,
) -> AppResult<SessionSnapshot> {
    let mut guard = session.lock().await;
    guard.select_method(method);

    let _ = app.emit(events::DRAW_METHOD_SELECTED, method);
    Ok(guard.snapshot())
}

/// 开始抽签
///
/// 未选择抽签方式或人数不足时返回错误；成功后揭晓游标归零，
/// emit `draw-completed`（只携带快照，未揭晓的配对不会发给前端）。
#[tauri::command]
pub async fn perform_draw<R: Runtime>(
    app: AppHandle<R>,
    session: State<'_, SessionState>,
) -> AppResult<SessionSnapshot> {
    let mut guard = session.lock().await;
    guard.draw()?;

    let snapshot = guard.snapshot();
    let _ = app.emit(events::DRAW_COMPLETED, &snapshot);
    Ok(snapshot)
}

/// 揭晓下一条配对，全部揭晓后为 no-op
#[tauri::command]
pub async fn reveal_next<R: Runtime>(
    app: AppHandle<R>,
    session: State<'_, SessionState>,
) -> AppResult<SessionSnapshot> {
    let mut guard = session.lock().await;
    if let Some(assignment) = guard.reveal_next() {
        let _ = app.emit(events::ASSIGNMENT_REVEALED, assignment);
    }
    Ok(guard.snapshot())
}
