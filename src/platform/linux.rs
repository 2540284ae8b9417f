// credforge config path on Linux: $XDG_CONFIG_HOME/credforge or ~/.config/credforge

use std::env;
use std::path::PathBuf;

/// Uses `$XDG_CONFIG_HOME/credforge` if set and non-empty, otherwise `~/.config/credforge`.
pub fn get_config_dir() -> PathBuf {
    match env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg).join("credforge"),
        _ => {
            let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
            PathBuf::from(home).join(".config").join("credforge")
        }
    }
}
