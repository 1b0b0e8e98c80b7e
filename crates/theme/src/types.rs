//! Core theme types.
//!
//! This module defines the value objects shared by the whole engine:
//! - `Role` - the four semantic color slots of a theme
//! - `Stop` - the 11 named lightness levels of a tonal palette
//! - `Palette` - one role's tonal scale (stop -> hex)
//! - `ColorPalettes` - a palette per role
//! - `ThemeColors` / `ResolvedColors` - seed colors before and after validation

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::color::{HexColor, Rgb};
use crate::error::ColorError;

/// One of the four semantic color slots a theme defines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Primary,
    Secondary,
    Destructive,
    Warning,
}

impl Role {
    pub const ALL: [Role; 4] = [
        Role::Primary,
        Role::Secondary,
        Role::Destructive,
        Role::Warning,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Primary => "primary",
            Role::Secondary => "secondary",
            Role::Destructive => "destructive",
            Role::Warning => "warning",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| ColorError::UnknownColorKey(s.to_string()))
    }
}

/// A named lightness level of a tonal palette, lightest (50) to darkest (950).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stop {
    S50,
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
    S950,
}

impl Stop {
    pub const ALL: [Stop; 11] = [
        Stop::S50,
        Stop::S100,
        Stop::S200,
        Stop::S300,
        Stop::S400,
        Stop::S500,
        Stop::S600,
        Stop::S700,
        Stop::S800,
        Stop::S900,
        Stop::S950,
    ];

    pub fn value(&self) -> u16 {
        match self {
            Stop::S50 => 50,
            Stop::S100 => 100,
            Stop::S200 => 200,
            Stop::S300 => 300,
            Stop::S400 => 400,
            Stop::S500 => 500,
            Stop::S600 => 600,
            Stop::S700 => 700,
            Stop::S800 => 800,
            Stop::S900 => 900,
            Stop::S950 => 950,
        }
    }

    pub fn from_value(value: u16) -> Option<Self> {
        Stop::ALL.into_iter().find(|stop| stop.value() == value)
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl FromStr for Stop {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u16>()
            .ok()
            .and_then(Stop::from_value)
            .ok_or_else(|| ColorError::UnknownColorKey(s.to_string()))
    }
}

/// One role's tonal scale: a hex color for each of the 11 stops.
///
/// Every stop is a valid 6-digit hex color by construction. Serializes as a
/// map keyed by stop name (`{"50": "#ebf3fe", ...}`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "IndexMap<String, String>")]
pub struct Palette {
    stops: [HexColor; 11],
}

impl Palette {
    /// Stops ordered lightest first.
    pub fn new(stops: [HexColor; 11]) -> Self {
        Self { stops }
    }

    /// Build a palette from hex strings, lightest stop first.
    pub fn from_hex(stops: [String; 11]) -> Result<Self, ColorError> {
        let parsed = stops
            .into_iter()
            .map(HexColor::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let stops = parsed
            .try_into()
            .map_err(|_| ColorError::MissingStop(Stop::S950.to_string()))?;
        Ok(Self { stops })
    }

    pub fn get(&self, stop: Stop) -> &str {
        self.stops[stop.index()].as_str()
    }

    pub fn swatch(&self, stop: Stop) -> &HexColor {
        &self.stops[stop.index()]
    }

    pub fn rgb(&self, stop: Stop) -> Rgb {
        self.stops[stop.index()].rgb()
    }

    /// The stop-500 color, which is always the seed the palette was built from.
    pub fn base(&self) -> &str {
        self.get(Stop::S500)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Stop, &str)> {
        Stop::ALL
            .into_iter()
            .map(move |stop| (stop, self.get(stop)))
    }
}

impl Serialize for Palette {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.stops.len()))?;
        for (stop, color) in self.iter() {
            map.serialize_entry(&stop.to_string(), color)?;
        }
        map.end()
    }
}

impl TryFrom<IndexMap<String, String>> for Palette {
    type Error = ColorError;

    fn try_from(mut map: IndexMap<String, String>) -> Result<Self, Self::Error> {
        let mut take = |stop: Stop| {
            map.swap_remove(&stop.to_string())
                .ok_or_else(|| ColorError::MissingStop(stop.to_string()))
        };

        Self::from_hex([
            take(Stop::S50)?,
            take(Stop::S100)?,
            take(Stop::S200)?,
            take(Stop::S300)?,
            take(Stop::S400)?,
            take(Stop::S500)?,
            take(Stop::S600)?,
            take(Stop::S700)?,
            take(Stop::S800)?,
            take(Stop::S900)?,
            take(Stop::S950)?,
        ])
    }
}

/// A palette for every role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPalettes {
    pub primary: Palette,
    pub secondary: Palette,
    pub destructive: Palette,
    pub warning: Palette,
}

impl ColorPalettes {
    pub fn get(&self, role: Role) -> &Palette {
        match role {
            Role::Primary => &self.primary,
            Role::Secondary => &self.secondary,
            Role::Destructive => &self.destructive,
            Role::Warning => &self.warning,
        }
    }

    /// Look up a single swatch.
    pub fn color(&self, role: Role, stop: Stop) -> &str {
        self.get(role).get(stop)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Role, &Palette)> {
        Role::ALL.into_iter().map(move |role| (role, self.get(role)))
    }
}

/// The user-facing seed colors of a theme.
///
/// Any field may be malformed; `destructive` and `warning` may be absent.
/// Validation substitutes defaults instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColors {
    #[serde(default)]
    pub primary: String,
    #[serde(default)]
    pub secondary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destructive: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl ThemeColors {
    pub fn new(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
            destructive: None,
            warning: None,
        }
    }

    pub fn with_destructive(mut self, color: impl Into<String>) -> Self {
        self.destructive = Some(color.into());
        self
    }

    pub fn with_warning(mut self, color: impl Into<String>) -> Self {
        self.warning = Some(color.into());
        self
    }

    pub fn get(&self, role: Role) -> Option<&str> {
        match role {
            Role::Primary => Some(self.primary.as_str()),
            Role::Secondary => Some(self.secondary.as_str()),
            Role::Destructive => self.destructive.as_deref(),
            Role::Warning => self.warning.as_deref(),
        }
        .filter(|color| !color.is_empty())
    }
}

/// Seed colors after validation: every role is present and normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedColors {
    pub primary: HexColor,
    pub secondary: HexColor,
    pub destructive: HexColor,
    pub warning: HexColor,
}

impl ResolvedColors {
    pub fn get(&self, role: Role) -> &HexColor {
        match role {
            Role::Primary => &self.primary,
            Role::Secondary => &self.secondary,
            Role::Destructive => &self.destructive,
            Role::Warning => &self.warning,
        }
    }
}

impl From<ResolvedColors> for ThemeColors {
    fn from(colors: ResolvedColors) -> Self {
        Self {
            primary: colors.primary.into(),
            secondary: colors.secondary.into(),
            destructive: Some(colors.destructive.into()),
            warning: Some(colors.warning.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered_palette() -> Palette {
        Palette::from_hex(Stop::ALL.map(|stop| format!("#{:06}", stop.value()))).unwrap()
    }

    #[test]
    fn test_stop_parse_and_display() {
        assert_eq!("950".parse::<Stop>().unwrap(), Stop::S950);
        assert_eq!(Stop::S50.to_string(), "50");
        assert!("550".parse::<Stop>().is_err());
        assert!("primary".parse::<Stop>().is_err());
    }

    #[test]
    fn test_stops_are_ordered_light_to_dark() {
        let values: Vec<u16> = Stop::ALL.iter().map(Stop::value).collect();
        assert_eq!(
            values,
            vec![50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950]
        );
    }

    #[test]
    fn test_role_parse() {
        assert_eq!("warning".parse::<Role>().unwrap(), Role::Warning);
        assert_eq!(
            "accent".parse::<Role>(),
            Err(ColorError::UnknownColorKey("accent".to_string()))
        );
    }

    #[test]
    fn test_palette_serializes_as_stop_map() {
        let json = serde_json::to_value(numbered_palette()).unwrap();
        assert_eq!(json["50"], "#000050");
        assert_eq!(json["950"], "#000950");
        assert_eq!(json.as_object().unwrap().len(), 11);
    }

    #[test]
    fn test_palette_deserialize_requires_every_stop() {
        let json = serde_json::to_string(&numbered_palette()).unwrap();
        let parsed: Palette = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, numbered_palette());

        let err = serde_json::from_str::<Palette>(r##"{"50": "#ffffff"}"##).unwrap_err();
        assert!(err.to_string().contains("missing stop 100"), "{err}");
    }

    #[test]
    fn test_palette_rejects_malformed_stop() {
        let mut stops = Stop::ALL.map(|_| "#ffffff".to_string());
        stops[3] = "#zzzzzz".to_string();
        assert_eq!(
            Palette::from_hex(stops),
            Err(ColorError::InvalidColorFormat("#zzzzzz".to_string()))
        );
    }

    #[test]
    fn test_palette_keeps_parsed_channels() {
        let palette = numbered_palette();
        assert_eq!(palette.rgb(Stop::S950), Rgb::new(0, 0x09, 0x50));
        assert_eq!(palette.base(), "#000500");
    }

    #[test]
    fn test_theme_colors_treats_empty_as_absent() {
        let colors = ThemeColors::new("", "#10B981");
        assert_eq!(colors.get(Role::Primary), None);
        assert_eq!(colors.get(Role::Secondary), Some("#10B981"));
        assert_eq!(colors.get(Role::Warning), None);
    }
}
