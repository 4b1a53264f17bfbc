//! Output formats understood by the name service.

use std::str::FromStr;

use crate::Error;

/// Serialisation the service renders responses in.
///
/// Sent on every request as the `format` query parameter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Format {
    /// `format=json`. This is the default.
    #[default]
    Json,
    /// `format=xml`.
    Xml,
}

impl Format {
    /// Value sent in the `format` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Xml => "xml",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "xml" => Ok(Format::Xml),
            other => Err(Error::Config(format!("unsupported format: {:?}", other))),
        }
    }
}
