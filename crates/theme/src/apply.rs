//! Applying tokens to a presentation surface.
//!
//! The engine never touches a live document. A surface implements
//! [`StyleTarget`] and [`apply_theme`] drives it.

use indexmap::IndexMap;

use crate::tokens::ThemeTokens;

/// A single-writer presentation surface that holds custom properties and a
/// dark-mode marker.
pub trait StyleTarget {
    fn set_property(&mut self, name: &str, value: &str);
    fn remove_dark_marker(&mut self);
    fn add_dark_marker(&mut self);
}

/// Write every light variable; in dark mode, set the marker and overwrite the
/// semantic aliases with their dark values.
pub fn apply_theme<T: StyleTarget + ?Sized>(tokens: &ThemeTokens, dark: bool, target: &mut T) {
    target.remove_dark_marker();

    for (name, value) in tokens.light_variables() {
        target.set_property(name, value);
    }

    if dark {
        target.add_dark_marker();
        for (name, value) in tokens.dark_variables() {
            target.set_property(name, value);
        }
    }
}

/// In-memory style target: the resolved properties and the marker state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComputedStyle {
    properties: IndexMap<String, String>,
    dark: bool,
}

impl ComputedStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl StyleTarget for ComputedStyle {
    fn set_property(&mut self, name: &str, value: &str) {
        self.properties.insert(name.to_string(), value.to_string());
    }

    fn remove_dark_marker(&mut self) {
        self.dark = false;
    }

    fn add_dark_marker(&mut self) {
        self.dark = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::build_theme_tokens;
    use crate::types::{Stop, ThemeColors};

    #[derive(Default)]
    struct Recorder(Vec<String>);

    impl StyleTarget for Recorder {
        fn set_property(&mut self, name: &str, value: &str) {
            self.0.push(format!("set {name}={value}"));
        }

        fn remove_dark_marker(&mut self) {
            self.0.push("clear".to_string());
        }

        fn add_dark_marker(&mut self) {
            self.0.push("mark".to_string());
        }
    }

    fn tokens() -> ThemeTokens {
        build_theme_tokens(&ThemeColors::new("#3B82F6", "#10B981"))
    }

    #[test]
    fn test_light_mode() {
        let tokens = tokens();
        let mut style = ComputedStyle::new();
        apply_theme(&tokens, false, &mut style);

        assert!(!style.is_dark());
        assert_eq!(style.len(), 58);
        assert_eq!(style.get("--background"), Some(tokens.colors.primary.get(Stop::S50)));
        assert_eq!(style.get("dark---background"), None);
    }

    #[test]
    fn test_dark_mode_overwrites_aliases() {
        let tokens = tokens();
        let mut style = ComputedStyle::new();
        apply_theme(&tokens, true, &mut style);

        assert!(style.is_dark());
        assert_eq!(style.len(), 58);
        assert_eq!(style.get("--background"), Some(tokens.colors.primary.get(Stop::S950)));
        assert_eq!(style.get("--primary-500"), Some("#3B82F6"));
        assert_eq!(style.get("--radius"), Some("0.5rem"));
    }

    #[test]
    fn test_switching_back_to_light() {
        let tokens = tokens();
        let mut style = ComputedStyle::new();
        apply_theme(&tokens, true, &mut style);
        apply_theme(&tokens, false, &mut style);

        assert!(!style.is_dark());
        assert_eq!(style.get("--background"), Some(tokens.colors.primary.get(Stop::S50)));
    }

    #[test]
    fn test_call_order() {
        let mut recorder = Recorder::default();
        apply_theme(&tokens(), true, &mut recorder);

        assert_eq!(recorder.0[0], "clear");
        assert_eq!(recorder.0[59], "mark");
        assert_eq!(recorder.0.len(), 1 + 58 + 1 + 13);
    }
}
