use super::*;

#[test]
fn normalize_keeps_real_token() {
    assert_eq!(normalize(Some("abc.def".to_owned())), Some("abc.def".to_owned()));
}

#[test]
fn normalize_trims_whitespace() {
    assert_eq!(normalize(Some("  abc \n".to_owned())), Some("abc".to_owned()));
}

#[test]
fn normalize_drops_blank_and_missing() {
    assert_eq!(normalize(Some(String::new())), None);
    assert_eq!(normalize(Some("   ".to_owned())), None);
    assert_eq!(normalize(None), None);
}

#[test]
fn storage_is_empty_outside_browser() {
    save("tok");
    assert_eq!(load(), None);
    clear();
}

#[test]
fn token_key_is_stable() {
    assert_eq!(TOKEN_KEY, "africore_token");
}
