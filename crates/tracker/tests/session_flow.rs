mod common;

use common::{date, init_tracing};
use rust_decimal::Decimal;
use tracker::codes::keys;
use tracker::{
    JsonFileStore, KeyValueStore, MemoryStore, ProfileForm, SelfCheckForm, Session,
    TrackerConfig,
};

fn some(text: &str) -> Option<String> {
    Some(text.to_string())
}

fn profile_form() -> ProfileForm {
    ProfileForm {
        date_of_birth: "1998-01-10".to_string(),
        gender: "M".to_string(),
    }
}

fn full_self_check() -> SelfCheckForm {
    SelfCheckForm {
        date: "2025-10-01".to_string(),
        cardio_exercise: some("2mile_run"),
        cardio_value: some("13:25"),
        strength_exercise: some("pushups"),
        strength_value: some("45"),
        core_exercise: some("situps"),
        core_value: some("45"),
        height_inches: some("70"),
        waist_inches: some("32.5"),
        ..SelfCheckForm::default()
    }
}

#[test]
fn test_forms_to_history_on_disk() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let config = TrackerConfig {
        store_path: dir.path().join("pfa.json"),
        ..TrackerConfig::default()
    };

    let mut session = config.open_session().unwrap();
    assert!(session.needs_onboarding());
    session.complete_onboarding().unwrap();

    let d_code = session
        .set_profile(profile_form().to_demographics().unwrap())
        .unwrap();
    let s_code = session
        .record_assessment(&full_self_check().to_assessment().unwrap())
        .unwrap();
    session.set_target_date(date(2026, 5, 1)).unwrap();
    drop(session);

    let session = config.open_session().unwrap();
    assert!(!session.needs_onboarding());
    assert_eq!(session.d_code(), Some(d_code.as_str()));
    assert_eq!(session.s_codes(), [s_code.clone()]);
    assert_eq!(session.target_date(), Some(date(2026, 5, 1)));

    let history = session.history();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].code, s_code);

    let score = history[0].score.as_ref().unwrap();
    assert_eq!(score.age, 27);
    assert_eq!(score.composite.composite, Some(Decimal::new(904, 1)));
    assert_eq!(score.composite.pass, Some(true));
}

#[test]
fn test_codes_move_between_devices() {
    let mut phone = Session::load(MemoryStore::new()).unwrap();
    let d_code = phone
        .set_profile(profile_form().to_demographics().unwrap())
        .unwrap();
    let s_code = phone
        .record_assessment(&full_self_check().to_assessment().unwrap())
        .unwrap();

    let mut laptop = Session::load(MemoryStore::new()).unwrap();
    laptop.update_d_code(&d_code).unwrap();
    assert!(laptop.add_s_code(&s_code).unwrap());

    assert_eq!(laptop.history(), phone.history());
}

#[test]
fn test_history_survives_corrupt_code() {
    init_tracing();
    let mut session = Session::load(MemoryStore::new()).unwrap();
    session
        .set_profile(profile_form().to_demographics().unwrap())
        .unwrap();
    let good = session
        .record_assessment(&full_self_check().to_assessment().unwrap())
        .unwrap();

    // Damage the saved list behind the session's back
    let mut store = session.into_store();
    let mut tampered = good.clone();
    let flipped = if &good[10..11] == "A" { "B" } else { "A" };
    tampered.replace_range(10..11, flipped);
    store
        .set_list(keys::S_CODES, &[tampered.clone(), good.clone()])
        .unwrap();

    let session = Session::load(store).unwrap();
    let history = session.history();

    assert_eq!(history.len(), 2);
    assert_eq!(history[0].code, tampered);
    assert!(history[0].decoded.is_none());
    assert!(history[0].error.is_some());
    assert!(history[1].error.is_none());
    assert_eq!(
        history[1].score.as_ref().unwrap().composite.pass,
        Some(true)
    );
}

#[test]
fn test_newer_code_reports_update() {
    let mut store = MemoryStore::new();
    store
        .set_list(keys::S_CODES, &["S9-AAAA".to_string()])
        .unwrap();

    let session = Session::load(store).unwrap();
    let history = session.history();
    assert!(history[0].error.as_deref().unwrap().contains("update"));
}

#[test]
fn test_json_store_shared_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pfa.json");

    let mut session = Session::load(JsonFileStore::open(&path).unwrap()).unwrap();
    session.complete_onboarding().unwrap();
    session.clear().unwrap();
    drop(session);

    let store = JsonFileStore::open(&path).unwrap();
    assert_eq!(store.get_string(keys::ONBOARDED).unwrap(), None);
}
