use waterworks_engine::SimSettings;

#[test]
fn settings_smoke_parses_and_round_trips() {
    let json = r#"{
        "area_width": 800,
        "area_height": 600,
        "neck_size": 7,
        "num_droplets": 25000,
        "update_ms": 16
    }"#;

    let settings = SimSettings::from_json(json).expect("document should parse");
    assert_eq!(settings.area_width, 800);
    assert_eq!(settings.area_height, 600);
    assert_eq!(settings.neck_size, 7);
    assert_eq!(settings.num_droplets, 25000);
    assert_eq!(settings.update_ms, 16);

    let round_tripped = SimSettings::from_json(&settings.to_json()).expect("dump should parse");
    assert_eq!(round_tripped, settings);
}

#[test]
fn settings_smoke_fills_defaults() {
    let settings = SimSettings::from_json("{}").expect("empty document should parse");
    assert_eq!(settings, SimSettings::default());
}

#[test]
fn settings_smoke_rejects_bad_documents() {
    // Area below the floor.
    assert!(SimSettings::from_json(r#"{"area_width": 320}"#).is_err());
    // Neck wider than the play area can fit.
    assert!(SimSettings::from_json(r#"{"neck_size": 400}"#).is_err());
    // Zero tick interval.
    assert!(SimSettings::from_json(r#"{"update_ms": 0}"#).is_err());
    // Not JSON at all.
    assert!(SimSettings::from_json("droplets go brr").is_err());
}
