//! Best-effort privilege probes and the pre-run advisory.
//!
//! Every probe in this module is infallible from the caller's point of view:
//! a probe that cannot run reports "not elevated" (or "unknown" for Developer
//! Mode) instead of returning an error.
use crate::exec;
use crate::logging::Log;
use crate::platform::Platform;

/// Registry key path for Windows Developer Mode (display only).
const DEVELOPER_MODE_KEY: &str = r"HKLM\SOFTWARE\Microsoft\Windows\CurrentVersion\AppModelUnlock";

/// Registry subkey path for native Windows registry access.
#[cfg(windows)]
const DEVELOPER_MODE_SUBKEY: &str = r"SOFTWARE\Microsoft\Windows\CurrentVersion\AppModelUnlock";

/// Registry value name for the developer mode flag.
const DEVELOPER_MODE_VALUE: &str = "AllowDevelopmentWithoutDevLicense";

/// Whether the current process holds elevated privileges.
///
/// On Windows `net session` only succeeds from an elevated token; elsewhere
/// the effective user id must be `0`.  Any failure to run the probe counts as
/// "not elevated".
#[must_use]
pub fn is_elevated(platform: &Platform) -> bool {
    if platform.is_windows() {
        exec::run_unchecked("net", &["session"]).is_ok_and(|r| r.success)
    } else {
        exec::run_unchecked("id", &["-u"]).is_ok_and(|r| r.success && r.stdout.trim() == "0")
    }
}

/// Whether Windows Developer Mode is enabled.
///
/// Returns `None` when the state cannot be read or the host is not Windows.
#[must_use]
pub fn developer_mode_enabled() -> Option<bool> {
    #[cfg(windows)]
    {
        use winreg::RegKey;
        use winreg::enums::HKEY_LOCAL_MACHINE;
        let hklm = RegKey::predef(HKEY_LOCAL_MACHINE);
        match hklm.open_subkey(DEVELOPER_MODE_SUBKEY) {
            Ok(key) => match key.get_value::<u32, _>(DEVELOPER_MODE_VALUE) {
                Ok(v) => Some(v == 1),
                Err(ref e) if e.kind() == std::io::ErrorKind::NotFound => Some(false),
                Err(_) => None,
            },
            Err(ref e) if e.kind() == std::io::ErrorKind::NotFound => Some(false),
            Err(_) => None,
        }
    }
    #[cfg(not(windows))]
    {
        None
    }
}

/// Print the privilege advisory if this platform restricts symlink creation
/// and the process is not elevated.
///
/// Returns `true` when the advisory was printed.
pub fn advise(platform: &Platform, elevated: bool, log: &dyn Log) -> bool {
    if !platform.restricts_symlinks() {
        return false;
    }

    match developer_mode_enabled() {
        Some(enabled) => log.debug(&format!(
            "developer mode ({DEVELOPER_MODE_KEY}\\{DEVELOPER_MODE_VALUE}): {}",
            if enabled { "enabled" } else { "disabled" }
        )),
        None => log.debug("developer mode: unknown"),
    }

    if elevated {
        log.debug("running with administrator privileges");
        return false;
    }

    log.warn(&format!(
        "running on {} without administrator privileges",
        platform.os
    ));
    log.warn("if linking fails, run as Administrator or enable Developer Mode");
    true
}

/// Print remediation hints after a failed symlink creation.
pub fn creation_hint(platform: &Platform, log: &dyn Log) {
    if !platform.restricts_symlinks() {
        return;
    }
    log.warn("creating symlinks on Windows usually requires one of:");
    log.warn("  1. running this terminal as Administrator");
    log.warn("  2. enabling Developer Mode (Settings > System > For developers)");
}
