//! Unit tests for session configuration parsing.

use std::collections::HashMap;
use std::io::Write;

use env_lock::lock_env;
use mockable::{DefaultEnv, MockEnv};
use rstest::{fixture, rstest};
use tempfile::NamedTempFile;

use super::*;

fn key_file(len: usize) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create key file");
    file.write_all(&vec![b'k'; len]).expect("write key file");
    file
}

fn mock_env(vars: HashMap<&'static str, String>) -> MockEnv {
    let mut env = MockEnv::new();
    env.expect_string()
        .times(0..)
        .returning(move |key| vars.get(key).cloned());
    env
}

#[fixture]
fn release_key() -> NamedTempFile {
    key_file(SESSION_KEY_MIN_LEN)
}

fn release_vars(key: &NamedTempFile) -> HashMap<&'static str, String> {
    HashMap::from([
        (KEY_FILE_ENV, key.path().display().to_string()),
        (COOKIE_SECURE_ENV, "1".to_owned()),
        (SAMESITE_ENV, "Strict".to_owned()),
        (ALLOW_EPHEMERAL_ENV, "0".to_owned()),
    ])
}

#[rstest]
fn release_accepts_complete_configuration(release_key: NamedTempFile) {
    let env = mock_env(release_vars(&release_key));
    let settings = session_settings_from_env(&env, BuildMode::Release).expect("valid settings");
    assert!(settings.cookie_secure);
    assert_eq!(settings.same_site, SameSite::Strict);
}

#[rstest]
fn process_environment_is_read_through_default_env(release_key: NamedTempFile) {
    let _guard = lock_env([
        (KEY_FILE_ENV, Some(release_key.path().display().to_string())),
        (COOKIE_SECURE_ENV, Some("1".to_owned())),
        (SAMESITE_ENV, Some("Lax".to_owned())),
        (ALLOW_EPHEMERAL_ENV, Some("0".to_owned())),
    ]);

    let settings =
        session_settings_from_env(&DefaultEnv::new(), BuildMode::Release).expect("valid settings");
    assert!(settings.cookie_secure);
    assert_eq!(settings.same_site, SameSite::Lax);
}

#[rstest]
#[case(COOKIE_SECURE_ENV)]
#[case(SAMESITE_ENV)]
#[case(ALLOW_EPHEMERAL_ENV)]
fn release_requires_every_toggle(release_key: NamedTempFile, #[case] missing: &'static str) {
    let mut vars = release_vars(&release_key);
    vars.remove(missing);
    let env = mock_env(vars);
    let Err(err) = session_settings_from_env(&env, BuildMode::Release) else {
        panic!("missing {missing} should fail");
    };
    assert!(matches!(err, SessionConfigError::MissingEnv { name } if name == missing));
}

#[rstest]
#[case(COOKIE_SECURE_ENV, "maybe")]
#[case(SAMESITE_ENV, "sideways")]
#[case(ALLOW_EPHEMERAL_ENV, "")]
fn release_rejects_invalid_values(
    release_key: NamedTempFile,
    #[case] name: &'static str,
    #[case] value: &str,
) {
    let mut vars = release_vars(&release_key);
    vars.insert(name, value.to_owned());
    let env = mock_env(vars);
    let Err(err) = session_settings_from_env(&env, BuildMode::Release) else {
        panic!("invalid {name} should fail");
    };
    assert!(matches!(err, SessionConfigError::InvalidEnv { name: found, .. } if found == name));
}

#[rstest]
fn release_rejects_insecure_same_site_none(release_key: NamedTempFile) {
    let mut vars = release_vars(&release_key);
    vars.insert(COOKIE_SECURE_ENV, "0".to_owned());
    vars.insert(SAMESITE_ENV, "None".to_owned());
    let env = mock_env(vars);
    assert!(matches!(
        session_settings_from_env(&env, BuildMode::Release),
        Err(SessionConfigError::InsecureSameSiteNone)
    ));
}

#[rstest]
fn release_rejects_ephemeral_keys(release_key: NamedTempFile) {
    let mut vars = release_vars(&release_key);
    vars.insert(ALLOW_EPHEMERAL_ENV, "yes".to_owned());
    let env = mock_env(vars);
    assert!(matches!(
        session_settings_from_env(&env, BuildMode::Release),
        Err(SessionConfigError::EphemeralNotAllowed)
    ));
}

#[rstest]
fn release_rejects_short_keys() {
    let short = key_file(SESSION_KEY_MIN_LEN - 1);
    let env = mock_env(release_vars(&short));
    assert!(matches!(
        session_settings_from_env(&env, BuildMode::Release),
        Err(SessionConfigError::KeyTooShort { min_len: SESSION_KEY_MIN_LEN, .. })
    ));
}

#[rstest]
fn release_rejects_missing_key_file(release_key: NamedTempFile) {
    let mut vars = release_vars(&release_key);
    vars.insert(KEY_FILE_ENV, "/nonexistent/bookshelf/session_key".to_owned());
    let env = mock_env(vars);
    assert!(matches!(
        session_settings_from_env(&env, BuildMode::Release),
        Err(SessionConfigError::KeyRead { .. })
    ));
}

#[rstest]
fn debug_falls_back_to_defaults() {
    let env = mock_env(HashMap::from([(
        KEY_FILE_ENV,
        "/nonexistent/bookshelf/session_key".to_owned(),
    )]));
    let settings = session_settings_from_env(&env, BuildMode::Debug).expect("debug defaults");
    assert!(settings.cookie_secure);
    assert_eq!(settings.same_site, SameSite::Lax);
}

#[rstest]
fn debug_tolerates_insecure_same_site_none() {
    let env = mock_env(HashMap::from([
        (KEY_FILE_ENV, "/nonexistent/bookshelf/session_key".to_owned()),
        (COOKIE_SECURE_ENV, "0".to_owned()),
        (SAMESITE_ENV, "none".to_owned()),
    ]));
    let settings = session_settings_from_env(&env, BuildMode::Debug).expect("debug settings");
    assert!(!settings.cookie_secure);
    assert_eq!(settings.same_site, SameSite::None);
}

#[rstest]
fn debug_rejects_keys_too_short_to_derive() {
    let tiny = key_file(SESSION_KEY_DERIVE_MIN_LEN - 1);
    let env = mock_env(HashMap::from([(KEY_FILE_ENV, tiny.path().display().to_string())]));
    assert!(matches!(
        session_settings_from_env(&env, BuildMode::Debug),
        Err(SessionConfigError::KeyTooShort { .. })
    ));
}

#[rstest]
#[case("1", Some(true))]
#[case(" YES ", Some(true))]
#[case("n", Some(false))]
#[case("False", Some(false))]
#[case("2", None)]
fn parse_bool_accepts_documented_spellings(#[case] raw: &str, #[case] expected: Option<bool>) {
    assert_eq!(parse_bool(raw), expected);
}
