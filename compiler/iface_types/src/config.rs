//! Checker configuration.

use std::fmt;
use std::str::FromStr;

use iface_diagnostic::DiagnosticConfig;

/// Language mode, `major.minor`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct LangVersion {
    pub major: u16,
    pub minor: u16,
}

impl LangVersion {
    /// Newest supported mode.
    pub const LATEST: LangVersion = LangVersion::new(1, 18);

    pub const fn new(major: u16, minor: u16) -> Self {
        LangVersion { major, minor }
    }

    /// Whether this mode has `feature`.
    pub fn allows(self, feature: Feature) -> bool {
        self >= feature.since()
    }
}

impl Default for LangVersion {
    fn default() -> Self {
        Self::LATEST
    }
}

impl fmt::Display for LangVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
#[error("invalid language version {0:?}: expected `major.minor`")]
pub struct ParseVersionError(String);

impl FromStr for LangVersion {
    type Err = ParseVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseVersionError(s.to_string());
        let (major, minor) = s.split_once('.').ok_or_else(err)?;
        Ok(LangVersion {
            major: major.parse().map_err(|_| err())?,
            minor: minor.parse().map_err(|_| err())?,
        })
    }
}

/// Version-gated language features.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Feature {
    /// Embedded interfaces may share methods with identical signatures.
    OverlappingEmbeds,
    /// Unions, `~` terms, and type parameters as interface elements.
    Generics,
}

impl Feature {
    /// First mode with the feature.
    pub const fn since(self) -> LangVersion {
        match self {
            Feature::OverlappingEmbeds => LangVersion::new(1, 14),
            Feature::Generics => LangVersion::new(1, 18),
        }
    }
}

/// Checker options.
#[derive(Clone, Debug, Default)]
pub struct CheckerConfig {
    pub version: LangVersion,
    /// Use the compiler's wording where it differs from the type checker's.
    pub compiler_error_messages: bool,
    /// Accept methods that declare their own type parameters.
    pub accept_method_type_params: bool,
    pub diagnostics: DiagnosticConfig,
}

impl CheckerConfig {
    #[must_use]
    pub fn with_version(mut self, version: LangVersion) -> Self {
        self.version = version;
        self
    }

    #[must_use]
    pub fn with_compiler_error_messages(mut self, enabled: bool) -> Self {
        self.compiler_error_messages = enabled;
        self
    }

    #[must_use]
    pub fn with_method_type_params(mut self, accept: bool) -> Self {
        self.accept_method_type_params = accept;
        self
    }

    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: DiagnosticConfig) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    #[inline]
    pub fn allows(&self, feature: Feature) -> bool {
        self.version.allows(feature)
    }
}
