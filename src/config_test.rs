use super::*;

#[test]
fn none_yields_defaults() {
    let cfg = HostConfig::from_json(None).unwrap();
    assert_eq!(cfg, HostConfig::default());
    assert_eq!(cfg.canvas_id, DEFAULT_CANVAS_ID);
    assert_eq!(cfg.quality, DEFAULT_QUALITY);
    assert_eq!(cfg.frame_budget, 3);
    assert_eq!(cfg.drag_cursor, "");
}

#[test]
fn blank_string_yields_defaults() {
    let cfg = HostConfig::from_json(Some("   ")).unwrap();
    assert_eq!(cfg, HostConfig::default());
}

#[test]
fn partial_object_keeps_other_defaults() {
    let cfg = HostConfig::from_json(Some(r#"{"canvas_id":"foo","quality":2}"#)).unwrap();
    assert_eq!(cfg.canvas_id, "foo");
    assert_eq!(cfg.quality, 2);
    assert_eq!(cfg.frame_budget, DEFAULT_FRAME_BUDGET);
    assert_eq!(cfg.log_level, "info");
}

#[test]
fn full_override() {
    let cfg = HostConfig::from_json(Some(
        r#"{"canvas_id":"view","quality":4,"frame_budget":5,"drag_cursor":"none","log_level":"DEBUG"}"#,
    ))
    .unwrap();
    assert_eq!(cfg.frame_budget, 5);
    assert_eq!(cfg.drag_cursor, "none");
    assert_eq!(cfg.level().unwrap(), log::Level::Debug);
}

#[test]
fn zero_frame_budget_rejected() {
    let err = HostConfig::from_json(Some(r#"{"frame_budget":0}"#)).unwrap_err().to_string();
    assert!(err.contains("frame_budget"));
}

#[test]
fn empty_canvas_id_rejected() {
    let err = HostConfig::from_json(Some(r#"{"canvas_id":" "}"#)).unwrap_err().to_string();
    assert!(err.contains("canvas_id"));
}

#[test]
fn unknown_log_level_rejected() {
    let err = HostConfig::from_json(Some(r#"{"log_level":"loud"}"#)).unwrap_err().to_string();
    assert!(err.contains("unknown level 'loud'"));
}

#[test]
fn unknown_field_rejected() {
    let err = HostConfig::from_json(Some(r#"{"canvas":"x"}"#)).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn malformed_json_rejected() {
    let err = HostConfig::from_json(Some("{not json")).unwrap_err();
    assert!(err.to_string().starts_with("config parse failed"));
}
