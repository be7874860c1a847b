//! Strongly-typed string identifiers used across the domain.
//!
//! Catalog records are authored by hand, so identifiers are human-readable
//! slugs (`roundlab-dokdo-toner`) rather than generated UUIDs.

use crate::error::{DomainError, DomainResult};

/// Check that `s` is a non-empty slug of `[a-z0-9-]`, not starting or ending
/// with `-`.
pub fn validate_slug(name: &str, s: &str) -> DomainResult<()> {
    if s.is_empty() {
        return Err(DomainError::invalid_id(format!("{name}: empty")));
    }
    if s.starts_with('-') || s.ends_with('-') {
        return Err(DomainError::invalid_id(format!(
            "{name}: '{s}' must not start or end with '-'"
        )));
    }
    if let Some(c) = s
        .chars()
        .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
    {
        return Err(DomainError::invalid_id(format!(
            "{name}: '{s}' contains invalid character {c:?}"
        )));
    }
    Ok(())
}

/// Declare a slug-backed identifier newtype.
///
/// The generated type is `serde(transparent)`, implements `Display`,
/// `FromStr` (validating) and `AsRef<str>`, and offers `from_static` for
/// compile-time literals in authored data.
#[macro_export]
macro_rules! slug_id {
    ($(#[$meta:meta])* $vis:vis struct $t:ident, $name:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(transparent)]
        $vis struct $t(::std::borrow::Cow<'static, str>);

        impl $t {
            /// Wrap an authored literal. Checked by catalog validation.
            pub const fn from_static(s: &'static str) -> Self {
                Self(::std::borrow::Cow::Borrowed(s))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $t {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl ::core::str::FromStr for $t {
            type Err = $crate::DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $crate::validate_slug($name, s)?;
                Ok(Self(::std::borrow::Cow::Owned(s.to_string())))
            }
        }
    };
}
