//! Vendor dialect detection.

use radial_common::Metadata;
use serde::{Deserialize, Serialize};

/// Instrument family that wrote a radial file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// CODAR Ocean Sensors SeaSonde
    Codar,
    /// Helzel Messtechnik WERA
    Wera,
    /// Neither could be recognised
    Unknown,
}

impl Dialect {
    /// Detect the dialect from header fields.
    ///
    /// `Manufacturer` wins when present; otherwise a `CTF` field without a
    /// manufacturer is taken as CODAR.
    pub fn detect(metadata: &Metadata) -> Self {
        if let Some(manufacturer) = metadata.get("Manufacturer") {
            let lower = manufacturer.to_string().to_lowercase();
            if lower.contains("codar") {
                return Dialect::Codar;
            }
            if lower.contains("wera") || lower.contains("helzel") {
                return Dialect::Wera;
            }
        } else if metadata.contains_key("CTF") {
            return Dialect::Codar;
        }
        Dialect::Unknown
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::Codar => "codar",
            Dialect::Wera => "wera",
            Dialect::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
