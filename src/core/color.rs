//! CSS-kompatible Farb-Strings.

use serde::{Deserialize, Serialize};

use crate::core::DrawError;

/// Eine validierte, CSS-kompatible Farbe.
///
/// Akzeptierte Formen:
/// - benannter CSS-Name, z.B. `"darkblue"`
/// - `#rrggbb`
/// - `#rrggbbaa` (Alpha als zwei Hex-Ziffern 0–255, nicht 0–1)
///
/// Der Kern interpretiert die Farbe nicht weiter; sie wird unveraendert an
/// die [`CanvasSurface`](crate::CanvasSurface) durchgereicht.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

impl Color {
    /// Validiert und erstellt eine Farbe.
    pub fn new(value: impl Into<String>) -> Result<Self, DrawError> {
        let value = value.into();
        if Self::is_valid(&value) {
            Ok(Self(value))
        } else {
            Err(DrawError::InvalidColor(value))
        }
    }

    /// Konstruktor fuer Compile-Zeit-bekannte Default-Farben.
    ///
    /// Umgeht die Validierung; ein Test stellt sicher, dass alle
    /// Default-Konstanten auch regulaer validieren.
    pub(crate) fn known(value: &str) -> Self {
        Self(value.to_owned())
    }

    /// Der rohe CSS-String.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn is_valid(value: &str) -> bool {
        if let Some(hex) = value.strip_prefix('#') {
            (hex.len() == 6 || hex.len() == 8) && hex.chars().all(|c| c.is_ascii_hexdigit())
        } else {
            !value.is_empty() && value.chars().all(|c| c.is_ascii_alphabetic())
        }
    }
}

impl TryFrom<String> for Color {
    type Error = DrawError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Color {
    type Error = DrawError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> String {
        color.0
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
