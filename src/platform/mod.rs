// webview-shell platform abstraction
// Provides platform-specific paths and the system opener for Windows, macOS, and Linux.
//
// Uses `cfg(target_os)` for conditional compilation to select the correct
// platform-specific implementation at compile time.

use std::io;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Returns the platform-specific configuration directory.
///
/// - **Linux**: `~/.config/webview-shell` (or `$XDG_CONFIG_HOME/webview-shell`)
/// - **macOS**: `~/Library/Application Support/WebViewShell`
/// - **Windows**: `%APPDATA%/WebViewShell`
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

/// Returns the user's public downloads directory.
pub fn get_downloads_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_downloads_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_downloads_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_downloads_dir()
    }
}

#[cfg(target_os = "linux")]
use linux::{OPENER, OPENER_STATUS_IS_RELIABLE};
#[cfg(target_os = "macos")]
use macos::{OPENER, OPENER_STATUS_IS_RELIABLE};
#[cfg(target_os = "windows")]
use windows::{OPENER, OPENER_STATUS_IS_RELIABLE};

/// Hands a URI or folder path to the OS default handler. Returns once the
/// opener has started; [`wait_for_opener`] reports whether it found a handler.
pub fn open_with_system(target: &str) -> io::Result<Child> {
    open_with_program(OPENER, target)
}

/// Runs `program target` detached from the shell's stdio.
pub fn open_with_program(program: &str, target: &str) -> io::Result<Child> {
    Command::new(program)
        .arg(target)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
}

/// Blocks until the opener exits. A non-zero exit is an error wherever the
/// platform opener reports failures through its status.
pub fn wait_for_opener(child: Child) -> io::Result<()> {
    check_opener_exit(child, OPENER_STATUS_IS_RELIABLE)
}

fn check_opener_exit(mut child: Child, status_is_reliable: bool) -> io::Result<()> {
    let status = child.wait()?;
    if status.success() || !status_is_reliable {
        Ok(())
    } else {
        Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("no handler accepted the target ({})", status),
        ))
    }
}
