use std::backtrace::Backtrace;
use std::fmt;
use std::panic::Location;

/// Source location a dump was requested from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
}

impl CallSite {
    #[track_caller]
    pub fn caller() -> Self {
        Self::from(Location::caller())
    }
}

impl From<&'static Location<'static>> for CallSite {
    fn from(location: &'static Location<'static>) -> Self {
        Self {
            file: location.file(),
            line: location.line(),
        }
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Locations of the current call stack, innermost first.
///
/// Frames from the standard library and from this crate are dropped. The
/// result is empty when the binary carries no debug info.
pub fn call_trail() -> Vec<String> {
    let backtrace = Backtrace::force_capture().to_string();
    frame_locations(&backtrace)
}

fn frame_locations(backtrace: &str) -> Vec<String> {
    let mut locations = Vec::new();
    let mut symbol = "";

    for line in backtrace.lines().map(str::trim) {
        match line.strip_prefix("at ") {
            Some(location) => {
                if !is_internal(symbol, location) {
                    locations.push(strip_column(location));
                }
            }
            None => symbol = strip_frame_index(line),
        }
    }

    locations
}

/// `12: app::main` → `app::main`
fn strip_frame_index(line: &str) -> &str {
    match line.split_once(": ") {
        Some((index, symbol)) if index.chars().all(|c| c.is_ascii_digit()) => symbol,
        _ => line,
    }
}

fn is_internal(symbol: &str, location: &str) -> bool {
    let symbol = symbol.trim_start_matches('<');
    ["std::", "core::", "alloc::", "typedump_sdk::"]
        .iter()
        .any(|prefix| symbol.starts_with(prefix))
        || location.starts_with("/rustc/")
        || location.contains("/library/std/")
        || location.contains("/library/core/")
        || location.split(['/', '\\']).any(is_sdk_dir)
}

/// `typedump-sdk` or a registry checkout such as `typedump-sdk-0.2.0`
fn is_sdk_dir(component: &str) -> bool {
    match component.strip_prefix("typedump-sdk") {
        Some("") => true,
        Some(rest) => rest
            .strip_prefix('-')
            .is_some_and(|version| version.starts_with(|c: char| c.is_ascii_digit())),
        None => false,
    }
}

/// `file:line:col` → `file:line`
fn strip_column(location: &str) -> String {
    match location.rsplit_once(':') {
        Some((head, col)) if head.contains(':') && col.chars().all(|c| c.is_ascii_digit()) => {
            head.to_string()
        }
        _ => location.to_string(),
    }
}
