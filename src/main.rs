// Prevents additional console window on Windows in release, DO NOT REMOVE!!
#![cfg_attr(
    all(feature = "desktop", not(debug_assertions)),
    windows_subsystem = "windows"
)]

use std::process::ExitCode;

#[cfg(feature = "desktop")]
fn main() -> ExitCode {
    secret_santa_lib::run();
    ExitCode::SUCCESS
}

#[cfg(not(feature = "desktop"))]
fn main() -> ExitCode {
    secret_santa_lib::console::run()
}
