//! Host platform detection and native binding resolution
//!
//! The packaged SDK ships one native binary per platform under
//! `bin/<platform>/`. Resolution probes the installed-package location
//! first, then a local checkout, and falls back to the relative layout so a
//! missing directory surfaces as a load error at open time rather than
//! here.

use crate::errors::BindingError;
use once_cell::sync::Lazy;
use std::env::consts;
use std::fmt;
use std::path::{Path, PathBuf};

/// Directory name of this package inside the runtime's module tree.
pub const PACKAGE_DIR: &str = "voxbridge";

/// File name of the native binding inside the platform directory.
pub const BINDING_FILE: &str = "voxclient.node";

static DETECTED: Lazy<Result<Platform, BindingError>> = Lazy::new(Platform::detect);

/// Platforms the SDK ships binaries for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Win32,
    Win64,
    LinuxX86,
    LinuxAmd64,
    Mac,
}

impl Platform {
    /// Detect the host platform from the build target.
    pub fn detect() -> Result<Self, BindingError> {
        Self::from_os_arch(consts::OS, consts::ARCH)
    }

    /// The detected host platform, computed once per process.
    pub fn current() -> Result<Self, BindingError> {
        DETECTED.clone()
    }

    pub fn from_os_arch(os: &str, arch: &str) -> Result<Self, BindingError> {
        match (os, arch) {
            ("windows", "x86_64") => Ok(Platform::Win64),
            ("windows", _) => Ok(Platform::Win32),
            ("linux", "x86_64") => Ok(Platform::LinuxAmd64),
            ("linux", "x86") => Ok(Platform::LinuxX86),
            ("macos", _) => Ok(Platform::Mac),
            _ => Err(BindingError::UnsupportedPlatform {
                os: os.to_string(),
                arch: arch.to_string(),
            }),
        }
    }

    /// Name of the per-platform resource directory.
    pub fn dir_name(self) -> &'static str {
        match self {
            Platform::Win32 => "win32",
            Platform::Win64 => "win64",
            Platform::LinuxX86 => "linux_x86",
            Platform::LinuxAmd64 => "linux_amd64",
            Platform::Mac => "mac",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dir_name())
    }
}

/// Directory holding the SDK resources for `platform`, resolved against
/// `base`.
///
/// Prefers `base/node_modules/<pkg>/bin/<platform>` (installed package),
/// then `base/bin/<platform>` (local checkout); if neither directory exists
/// the relative `bin/<platform>` path is returned unresolved.
pub fn resource_path(base: &Path, platform: Platform) -> PathBuf {
    let rel = Path::new("bin").join(platform.dir_name());

    let packaged = base
        .join("node_modules")
        .join(PACKAGE_DIR)
        .join(&rel);
    if packaged.is_dir() {
        return packaged;
    }

    let local = base.join(&rel);
    if local.is_dir() {
        return local;
    }

    rel
}

/// Full path of the native binding for `platform`, resolved against `base`.
pub fn bindings_path(base: &Path, platform: Platform) -> PathBuf {
    resource_path(base, platform).join(BINDING_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dir_names_per_platform() {
        assert_eq!(Platform::Win32.dir_name(), "win32");
        assert_eq!(Platform::Win64.dir_name(), "win64");
        assert_eq!(Platform::LinuxX86.dir_name(), "linux_x86");
        assert_eq!(Platform::LinuxAmd64.dir_name(), "linux_amd64");
        assert_eq!(Platform::Mac.dir_name(), "mac");
    }

    #[test]
    fn test_from_os_arch() {
        assert_eq!(
            Platform::from_os_arch("windows", "x86_64").unwrap(),
            Platform::Win64
        );
        assert_eq!(
            Platform::from_os_arch("windows", "x86").unwrap(),
            Platform::Win32
        );
        assert_eq!(
            Platform::from_os_arch("linux", "x86_64").unwrap(),
            Platform::LinuxAmd64
        );
        assert_eq!(Platform::from_os_arch("macos", "aarch64").unwrap(), Platform::Mac);
        assert!(matches!(
            Platform::from_os_arch("freebsd", "x86_64"),
            Err(BindingError::UnsupportedPlatform { .. })
        ));
    }

    #[test]
    fn test_detect_matches_current_host() {
        // Either the host is supported and detection is stable, or both
        // calls agree on the failure.
        assert_eq!(Platform::detect().is_ok(), Platform::current().is_ok());
    }

    #[test]
    fn test_resource_path_prefers_installed_package() {
        let dir = tempfile::tempdir().unwrap();
        let packaged = dir
            .path()
            .join("node_modules")
            .join(PACKAGE_DIR)
            .join("bin")
            .join("mac");
        std::fs::create_dir_all(&packaged).unwrap();

        assert_eq!(resource_path(dir.path(), Platform::Mac), packaged);
    }

    #[test]
    fn test_resource_path_falls_back_to_local_checkout() {
        let dir = tempfile::tempdir().unwrap();
        let local = dir.path().join("bin").join("linux_amd64");
        std::fs::create_dir_all(&local).unwrap();

        assert_eq!(resource_path(dir.path(), Platform::LinuxAmd64), local);
    }

    #[test]
    fn test_resource_path_relative_when_nothing_exists() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            resource_path(dir.path(), Platform::Win64),
            Path::new("bin").join("win64")
        );
    }

    #[test]
    fn test_bindings_path_appends_binding_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = bindings_path(dir.path(), Platform::Mac);
        assert!(path.ends_with(Path::new("mac").join(BINDING_FILE)));
    }
}
