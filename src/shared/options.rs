//! Zentrale Konfiguration der Zeichen-Defaults.
//!
//! `DrawingOptions` enthaelt die zur Laufzeit aenderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten — benannte
//! Konstanten statt prozessweiter veraenderlicher Defaults.

use serde::{Deserialize, Serialize};

use crate::core::Color;

// ── Formen ──────────────────────────────────────────────────────────

/// Default-Farbe fuer Formen (weisslich, grossteils opak — passt zum
/// schwarzen Default-Hintergrund).
pub const DEFAULT_SHAPE_COLOR: &str = "#cccccccc";
/// Default-Breite fuer Konturen und Linien in Geraete-Pixeln.
pub const DEFAULT_LINE_WIDTH: f64 = 2.0;
/// Default-Font fuer Text-Formen (CSS-Shorthand).
pub const DEFAULT_TEXT_FACE: &str = "24px serif";

// ── Drawing ─────────────────────────────────────────────────────────

/// Default-Hintergrund (schwarz, opak).
pub const DEFAULT_BACKGROUND: &str = "#000000ff";
/// Default-Rahmenfarbe (grau, opak).
pub const DEFAULT_BORDER: &str = "#888888ff";
/// Default-Rahmenbreite in Pixeln.
pub const DEFAULT_BORDER_WIDTH: f64 = 2.0;

/// Zur Laufzeit aenderbare Drawing-Defaults.
///
/// `None` bei `background`/`border` unterdrueckt Hintergrund bzw. Rahmen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawingOptions {
    /// Hintergrundfarbe oder `None`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
    /// Rahmenfarbe oder `None`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<Color>,
    /// Rahmenbreite in Pixeln
    pub border_width: f64,
}

impl Default for DrawingOptions {
    fn default() -> Self {
        Self {
            background: Some(Color::known(DEFAULT_BACKGROUND)),
            border: Some(Color::known(DEFAULT_BORDER)),
            border_width: DEFAULT_BORDER_WIDTH,
        }
    }
}

impl DrawingOptions {
    /// Laedt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Zeichen-Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Zeichen-Optionen gespeichert nach: {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = DrawingOptions::default();
        assert_eq!(
            opts.background.as_ref().map(|c| c.as_str()),
            Some(DEFAULT_BACKGROUND)
        );
        assert_eq!(
            opts.border.as_ref().map(|c| c.as_str()),
            Some(DEFAULT_BORDER)
        );
        assert_eq!(opts.border_width, DEFAULT_BORDER_WIDTH);
    }

    #[test]
    fn test_toml_roundtrip() {
        let opts = DrawingOptions {
            background: None,
            border: Some(Color::new("#112233").unwrap()),
            border_width: 4.5,
        };
        let content = toml::to_string_pretty(&opts).unwrap();
        let parsed: DrawingOptions = toml::from_str(&content).unwrap();
        assert_eq!(parsed, opts);
    }

    #[test]
    fn test_ungueltige_farbe_in_toml_faellt_beim_parsen_auf() {
        let result: Result<DrawingOptions, _> =
            toml::from_str("border = \"#zz0000\"\nborder_width = 2.0\n");
        assert!(result.is_err());
    }
}
