#[cfg(feature = "desktop")]
pub mod commands;
pub mod config;
pub mod console;
pub mod draw;
pub mod error;
#[cfg(feature = "desktop")]
pub mod events;
pub mod reveal;
pub mod roster;
pub mod session;
pub use error::{AppError, AppResult};

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// 日志写到 stderr，stdout 只留给配对结果
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("secret_santa_lib=info")),
        )
        .try_init();
}

#[cfg(feature = "desktop")]
pub fn run() {
    use crate::config::SessionConfig;
    use crate::session::SantaSession;

    init_tracing();

    let config = SessionConfig::resolve(None).unwrap_or_else(|e| {
        tracing::warn!("Failed to load session config, using defaults: {e}");
        SessionConfig::default()
    });

    tauri::Builder::default()
        .manage(tokio::sync::Mutex::new(SantaSession::new(config)))
        .invoke_handler(tauri::generate_handler![
            commands::get_session,
            commands::list_draw_methods,
            commands::add_participant,
            commands::remove_participant,
            commands::select_draw_method,
            commands::perform_draw,
            commands::reveal_next,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
