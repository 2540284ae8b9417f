// credforge platform abstraction
// Resolves where the settings file lives on Windows, macOS, and Linux.
//
// Uses `cfg(target_os)` to pick the implementation at compile time.

use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Returns the platform-specific configuration directory for credforge.
///
/// - **Linux**: `~/.config/credforge` (or `$XDG_CONFIG_HOME/credforge`)
/// - **macOS**: `~/Library/Application Support/CredForge`
/// - **Windows**: `%APPDATA%/CredForge`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_config_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_config_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_config_dir()
    }
}
