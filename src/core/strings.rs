//! # Localized Strings
//!
//! Fixed display text used by menus and tables. The layout code treats these
//! as opaque; nothing is formatted based on their content.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strings {
    pub exit_label: String,
    pub table_empty: String,
    pub press_any_key: String,
    pub navigation_hint: String,
}

/// Sparse overrides as they appear in the `[strings]` config section.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct StringOverrides {
    pub exit_label: Option<String>,
    pub table_empty: Option<String>,
    pub press_any_key: Option<String>,
    pub navigation_hint: Option<String>,
}

impl Strings {
    pub fn english() -> Self {
        Self {
            exit_label: "Exit".to_string(),
            table_empty: "The table is empty.".to_string(),
            press_any_key: "Press any key to continue...".to_string(),
            navigation_hint:
                "Use the arrow keys to navigate the menu. Select an option by pressing enter."
                    .to_string(),
        }
    }

    pub fn french() -> Self {
        Self {
            exit_label: "Quitter".to_string(),
            table_empty: "Le tableau est vide.".to_string(),
            press_any_key: "Appuyez sur une touche pour continuer...".to_string(),
            navigation_hint: "Utilisez les flèches pour naviguer dans le menu. \
                Appuyez sur Entrée pour sélectionner une option."
                .to_string(),
        }
    }

    /// Looks up a built-in table by language tag (`en`, `fr`, `fr-CA`, ...).
    /// Unknown locales fall back to English.
    pub fn for_locale(locale: &str) -> Self {
        let lang = locale
            .split(['-', '_', '.'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match lang.as_str() {
            "fr" => Self::french(),
            "en" => Self::english(),
            other => {
                log::warn!("No strings for locale {other:?}, using English");
                Self::english()
            }
        }
    }

    /// Replaces every field that has an override.
    pub fn with_overrides(mut self, overrides: &StringOverrides) -> Self {
        let apply = |slot: &mut String, value: &Option<String>| {
            if let Some(v) = value {
                *slot = v.clone();
            }
        };
        apply(&mut self.exit_label, &overrides.exit_label);
        apply(&mut self.table_empty, &overrides.table_empty);
        apply(&mut self.press_any_key, &overrides.press_any_key);
        apply(&mut self.navigation_hint, &overrides.navigation_hint);
        self
    }
}

impl Default for Strings {
    fn default() -> Self {
        Self::english()
    }
}
