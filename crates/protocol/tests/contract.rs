use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use tinta_protocol::*;
use tinta_theme::{PairLevel, ThemeColors};

fn service() -> ThemeService {
    ThemeService::default()
}

fn to_value<T: serde::Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap()
}

#[test]
fn save_accepts_black_and_white() {
    let saved = service()
        .save(&ThemeRequest::new("#000000", "#FFFFFF"))
        .unwrap();

    assert_eq!(saved.contrast.pass_rate, 79);
    assert_eq!(saved.contrast.level, PairLevel::Good);
    assert_eq!(saved.contrast.passing, 11);
    assert_eq!(saved.contrast.failing, 3);
    assert_eq!(saved.tokens.colors.destructive.base(), "#EF4444");
}

#[test]
fn save_rejects_weak_pair() {
    let err = service()
        .save(&ThemeRequest::new("#3B82F6", "#10B981"))
        .unwrap_err();

    let Rejection::InsufficientPairContrast { contrast, level } = err else {
        panic!("expected pair rejection, got {err:?}");
    };
    assert!((contrast - 64.29).abs() < 0.01);
    assert_eq!(level, PairLevel::Poor);
}

#[test]
fn save_rejects_failing_audit() {
    // The pair is scored against the stock fallbacks; the pale custom
    // destructive/warning seeds only fail in the full build.
    let request = ThemeRequest::new("#000000", "#FFFFFF")
        .with_destructive("#FFFFE6")
        .with_warning("#FFFFE6");

    assert_eq!(
        service().save(&request).unwrap_err(),
        Rejection::AccessibilityRequirements {
            pass_rate: 64,
            failing: 5,
            total: 14,
        }
    );
}

#[test]
fn save_rejects_invalid_fields_before_scoring() {
    let err = service()
        .save(&ThemeRequest::new("#000", "#FFFFFF"))
        .unwrap_err();
    assert_eq!(
        err,
        Rejection::InvalidData {
            details: vec![FieldError::new(
                "primaryColor",
                "Primary color must be a valid HEX"
            )],
        }
    );
}

#[test]
fn preview_has_no_gate() {
    let preview = service()
        .preview(&ThemeRequest::new("#3B82F6", "#10B981"))
        .unwrap();

    assert!(!preview.contrast.is_valid);
    assert_eq!(preview.contrast.pass_rate, 64);
    assert_eq!(preview.contrast.total, 14);
    assert_eq!(preview.recommendations.accessibility, Accessibility::ImproveContrast);
    assert_eq!(preview.recommendations.contrast, PairLevel::Poor);
    assert_eq!(preview.recommendations.readiness, Readiness::NeedsAdjustments);
}

#[test]
fn preview_ready_theme() {
    let preview = service()
        .preview(&ThemeRequest::new("#000000", "#FFFFFF"))
        .unwrap();

    assert!(preview.contrast.is_valid);
    assert_eq!(preview.recommendations.accessibility, Accessibility::Great);
    assert_eq!(preview.recommendations.readiness, Readiness::Ready);
}

#[test]
fn preview_json_shape() {
    let preview = service()
        .preview(&ThemeRequest::new("#000000", "#FFFFFF"))
        .unwrap();
    let value = to_value(&ApiResponse::ok(preview));

    assert_eq!(value["success"], true);
    assert_eq!(value["version"], API_VERSION);
    assert!(value.get("message").is_none());

    let data = &value["data"];
    assert_eq!(data["colors"], json!({"primary": "#000000", "secondary": "#FFFFFF"}));
    assert_eq!(data["contrast"]["isValid"], true);
    assert_eq!(data["contrast"]["level"], "good");
    assert_eq!(data["contrast"]["passRate"], 79);
    assert_eq!(
        data["recommendations"],
        json!({"accessibility": "Great", "contrast": "good", "readiness": "Ready to use"})
    );
    assert_eq!(data["tokens"]["colors"]["primary"]["500"], "#000000");
    assert_eq!(data["tokens"]["css"]["--primary-500"], "#000000");
    assert_eq!(data["tokens"]["summary"]["passRate"], 79);
    assert_eq!(data["tokens"]["contrast"]["Primary Button"]["level"], "AAA");
}

#[test]
fn saved_json_shape() {
    let saved = service()
        .save(&ThemeRequest::new("#000000", "#FFFFFF"))
        .unwrap();
    let value = to_value(&ApiResponse::ok(saved).with_message("Theme saved"));

    assert_eq!(value["message"], "Theme saved");
    assert_eq!(
        value["data"]["contrast"],
        json!({"passRate": 79, "level": "good", "passing": 11, "failing": 3})
    );
    assert!(value["data"]["updatedAt"].is_string());
}

#[test]
fn error_bodies() {
    let fields = Rejection::InvalidData {
        details: vec![FieldError::new("secondaryColor", "Secondary color must be a valid HEX")],
    };
    assert_eq!(
        to_value(&fields.body()),
        json!({
            "error": "Invalid data",
            "details": [{"field": "secondaryColor", "message": "Secondary color must be a valid HEX"}],
        })
    );

    let pair = Rejection::InsufficientPairContrast {
        contrast: 50.0,
        level: PairLevel::Poor,
    };
    let body = to_value(&pair.body());
    assert_eq!(body["error"], "Insufficient contrast between primary and secondary colors");
    assert_eq!(body["details"]["level"], "poor");
    assert!(body["details"]["recommendation"].is_string());

    let audit = Rejection::AccessibilityRequirements {
        pass_rate: 64,
        failing: 5,
        total: 14,
    };
    let body = to_value(&audit.body());
    assert_eq!(body["details"]["passRate"], 64);
    assert_eq!(audit.status(), 400);
}

#[test]
fn error_body_round_trip_keeps_variant() {
    let body = Rejection::AccessibilityRequirements {
        pass_rate: 64,
        failing: 5,
        total: 14,
    }
    .body();
    let parsed: ErrorBody = serde_json::from_str(&serde_json::to_string(&body).unwrap()).unwrap();
    assert!(matches!(parsed.details, RejectionDetails::Audit { pass_rate: 64, .. }));
}

#[test]
fn current_theme_fills_missing_roles() {
    let stored = ThemeColors {
        primary: "#7C3AED".to_string(),
        secondary: String::new(),
        destructive: None,
        warning: Some("#EAB308".to_string()),
    };
    let current = service().current(&stored);

    assert_eq!(
        current.colors,
        ThemeColors::new("#7C3AED", "#10B981")
            .with_destructive("#EF4444")
            .with_warning("#EAB308")
    );
    assert_eq!(current.tokens.colors.secondary.base(), "#10B981");
}

#[test]
fn request_body_round_trip() {
    let request = ThemeRequest::new("#000000", "#FFFFFF").with_warning("#EAB308");
    let body = serde_json::to_string(&request).unwrap();
    assert_eq!(
        serde_json::from_str::<Value>(&body).unwrap(),
        json!({"primaryColor": "#000000", "secondaryColor": "#FFFFFF", "warningColor": "#EAB308"})
    );
    assert_eq!(
        ThemeRequest::parse(&body).unwrap(),
        ThemeColors::new("#000000", "#FFFFFF").with_warning("#EAB308")
    );
}
