//! Error codes for interface diagnostics.
//!
//! - E2xxx: interface declaration and completion errors
//! - E9xxx: internal errors

use std::fmt;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Blank (`_`) method name
    E2001,
    /// More than one legacy type list in one interface
    E2002,
    /// Method member whose type is not a signature
    E2003,
    /// Method with its own type parameters
    E2004,
    /// Duplicate method (explicit, or overlapping embedded)
    E2005,
    /// Embedded type is not an interface
    E2006,
    /// Embedded type parameter
    E2007,
    /// `~T` where `T` is not its own underlying type
    E2008,
    /// Overlapping terms in one union
    E2009,
    /// Undeclared name in a type expression
    E2010,
    /// Union or approximate term outside an interface element
    E2011,

    /// Internal invariant violated during checking
    E9001,
}

impl ErrorCode {
    /// Every variant. Keep in sync with `as_str()`.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E2003,
        ErrorCode::E2004,
        ErrorCode::E2005,
        ErrorCode::E2006,
        ErrorCode::E2007,
        ErrorCode::E2008,
        ErrorCode::E2009,
        ErrorCode::E2010,
        ErrorCode::E2011,
        ErrorCode::E9001,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E2005 => "E2005",
            ErrorCode::E2006 => "E2006",
            ErrorCode::E2007 => "E2007",
            ErrorCode::E2008 => "E2008",
            ErrorCode::E2009 => "E2009",
            ErrorCode::E2010 => "E2010",
            ErrorCode::E2011 => "E2011",
            ErrorCode::E9001 => "E9001",
        }
    }

    /// One-line explanation for `--explain`-style lookups.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E2001 => "interface methods must have a non-blank name",
            ErrorCode::E2002 => "an interface may contain at most one type list",
            ErrorCode::E2003 => "an interface method must have a function signature",
            ErrorCode::E2004 => "interface methods cannot declare type parameters",
            ErrorCode::E2005 => "an interface cannot contain two methods with the same name",
            ErrorCode::E2006 => "only interfaces can be embedded before generics",
            ErrorCode::E2007 => "type parameters cannot be embedded before generics",
            ErrorCode::E2008 => "`~T` requires `T` to be its own underlying type",
            ErrorCode::E2009 => "union terms must not overlap",
            ErrorCode::E2010 => "the name does not refer to a declared type",
            ErrorCode::E2011 => "unions and `~` terms may only appear in interface elements",
            ErrorCode::E9001 => "internal error",
        }
    }

    /// Whether this code belongs to the internal-error range.
    pub fn is_internal(&self) -> bool {
        matches!(self, ErrorCode::E9001)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse `"E2005"` (case-insensitive).
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}

#[cfg(test)]
mod tests;
