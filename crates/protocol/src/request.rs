use serde::{Deserialize, Serialize};
use tinta_theme::ThemeColors;

use crate::error::{FieldError, Rejection};

/// Body of a preview or save request.
///
/// Missing required colors deserialize as empty strings so they are reported
/// per field by [`ThemeRequest::validate`] instead of failing the whole body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeRequest {
    #[serde(default)]
    pub primary_color: String,
    #[serde(default)]
    pub secondary_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destructive_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning_color: Option<String>,
}

/// `^#[0-9A-F]{6}$`, case-insensitive.
pub fn is_stored_hex(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|digits| digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()))
}

impl ThemeRequest {
    pub fn new(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            primary_color: primary.into(),
            secondary_color: secondary.into(),
            ..Default::default()
        }
    }

    pub fn with_destructive(mut self, color: impl Into<String>) -> Self {
        self.destructive_color = Some(color.into());
        self
    }

    pub fn with_warning(mut self, color: impl Into<String>) -> Self {
        self.warning_color = Some(color.into());
        self
    }

    /// Parse and validate a JSON body.
    pub fn parse(body: &str) -> Result<ThemeColors, Rejection> {
        let request: Self = serde_json::from_str(body).map_err(|err| Rejection::InvalidData {
            details: vec![FieldError::new("", err.to_string())],
        })?;
        request.validate()
    }

    /// Check every color field and collect all failures.
    pub fn validate(&self) -> Result<ThemeColors, Rejection> {
        let fields = [
            ("primaryColor", Some(&self.primary_color), "Primary"),
            ("secondaryColor", Some(&self.secondary_color), "Secondary"),
            ("destructiveColor", self.destructive_color.as_ref(), "Destructive"),
            ("warningColor", self.warning_color.as_ref(), "Warning"),
        ];

        let details: Vec<FieldError> = fields
            .into_iter()
            .filter_map(|(field, value, label)| {
                let value = value?;
                (!is_stored_hex(value))
                    .then(|| FieldError::new(field, format!("{label} color must be a valid HEX")))
            })
            .collect();

        if !details.is_empty() {
            return Err(Rejection::InvalidData { details });
        }

        Ok(ThemeColors {
            primary: self.primary_color.clone(),
            secondary: self.secondary_color.clone(),
            destructive: self.destructive_color.clone(),
            warning: self.warning_color.clone(),
        })
    }
}
