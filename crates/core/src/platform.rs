//! Identify the platform a program is running on.

/// The operating system family a program is running on.
///
/// Some interaction affordances are conventional only on certain platforms,
/// like the scrollbar drag snap-back on Windows. Components take a
/// [`Platform`] in their options instead of reading [`Platform::CURRENT`]
/// directly, so tests can force a specific one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Platform {
    /// Microsoft Windows.
    Windows,
    /// Apple macOS.
    Macos,
    /// Linux.
    Linux,
    /// Any other platform, including the web.
    Other,
}

impl Platform {
    /// The platform the program was compiled for.
    pub const CURRENT: Self = if cfg!(target_os = "windows") {
        Self::Windows
    } else if cfg!(target_os = "macos") {
        Self::Macos
    } else if cfg!(target_os = "linux") {
        Self::Linux
    } else {
        Self::Other
    };

    /// Returns true on Microsoft Windows.
    pub fn is_windows(self) -> bool {
        self == Self::Windows
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::CURRENT
    }
}
