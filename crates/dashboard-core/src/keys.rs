//! Validated identifiers used to build dashboard links.
//!
//! Component keys and metric keys are plain strings on the wire, but an empty
//! value can never produce a meaningful link, so both are checked once at
//! construction time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::encode::encode_component;
use crate::error::{Error, Result};

/// Macro to generate non-empty string identifier types.
macro_rules! key_type {
    ($(#[$meta:meta])* $name:ident, $what:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier.
            ///
            /// # Errors
            ///
            /// Returns [`Error::InvalidInput`] if the value is empty.
            pub fn new(value: impl Into<String>) -> Result<Self> {
                let value = value.into();
                if value.is_empty() {
                    tracing::debug!(kind = $what, "rejected empty identifier");
                    return Err(Error::InvalidInput(
                        concat!($what, " cannot be empty").to_string(),
                    ));
                }
                Ok(Self(value))
            }

            /// Returns the raw, unencoded value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Converts into the raw, unencoded value.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = Error;

            fn try_from(value: String) -> Result<Self> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = Error;

            fn try_from(value: &str) -> Result<Self> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(key: $name) -> Self {
                key.0
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                Self::new(s)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

key_type!(
    /// Identifier of a project or module, e.g. `org.sonarsource.sonarqube:sonarqube`.
    ComponentKey,
    "component key"
);
key_type!(
    /// Metric identifier such as `coverage`, used verbatim as a path segment.
    MetricKey,
    "metric key"
);

impl ComponentKey {
    /// Returns the key percent-encoded for use as a query value.
    #[must_use]
    pub fn encoded(&self) -> String {
        encode_component(&self.0)
    }
}
