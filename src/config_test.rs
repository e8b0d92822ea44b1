use super::*;

#[test]
fn defaults_match_page_template() {
    let config = PageConfig::default();
    assert_eq!(config.short_url_id, "shortUrl");
    assert_eq!(config.copy_hint_id, "copyHint");
    assert_eq!(config.alias_container_id, "aliasContainer");
    assert_eq!(config.alias_toggle_id, "aliasToggle");
    assert_eq!(config.alias_input_id, "alias");
    assert_eq!(config.theme_icon_id, "themeIcon");
    assert_eq!(config.theme_attribute, "data-theme");
    assert_eq!(config.storage_key, "theme");
    assert_eq!(config.copied_text, "Copied!");
    assert_eq!(config.hint_duration(), Duration::from_millis(2000));
}

#[test]
fn from_json_overrides_only_given_fields() {
    let config = PageConfig::from_json(r#"{"storageKey":"qs_theme","hintDurationMs":500}"#)
        .expect("valid config");
    assert_eq!(config.storage_key, "qs_theme");
    assert_eq!(config.hint_duration_ms, 500);
    assert_eq!(config.short_url_id, "shortUrl");
    assert_eq!(config.accent_color, "var(--pico-primary)");
}

#[test]
fn from_json_empty_object_is_default() {
    assert_eq!(PageConfig::from_json("{}").expect("valid config"), PageConfig::default());
}

#[test]
fn from_json_rejects_malformed_input() {
    let err = PageConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, PageError::Config(_)));
}

#[test]
fn from_json_rejects_wrong_field_type() {
    assert!(PageConfig::from_json(r#"{"hintDurationMs":"soon"}"#).is_err());
}
