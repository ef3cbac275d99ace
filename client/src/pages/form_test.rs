use super::*;

#[test]
fn required_trims_and_rejects_blank() {
    assert_eq!(required("Title", "  Solar  "), Ok("Solar".to_owned()));
    assert_eq!(required("Title", "   "), Err("Title is required.".to_owned()));
}

#[test]
fn parse_list_splits_commas_and_newlines() {
    assert_eq!(parse_list("Rust, Go\nPython,, "), vec!["Rust", "Go", "Python"]);
    assert!(parse_list("").is_empty());
}

#[test]
fn join_list_prefills_input() {
    let items = vec!["Rust".to_owned(), "Design".to_owned()];
    assert_eq!(join_list(&items), "Rust, Design");
    assert_eq!(parse_list(&join_list(&items)), items);
}

#[test]
fn parse_whole_enforces_range() {
    assert_eq!(parse_whole("Age", "22", 16, 35), Ok(22));
    assert_eq!(parse_whole("Age", "15", 16, 35), Err("Age must be between 16 and 35.".to_owned()));
    assert_eq!(parse_whole("Age", "abc", 16, 35), Err("Age must be a whole number.".to_owned()));
}

#[test]
fn parse_amount_accepts_currency_formatting() {
    assert_eq!(parse_amount("Amount", "$1,250.50", false), Ok(1250.5));
    assert_eq!(parse_amount("Amount", " 10 ", false), Ok(10.0));
}

#[test]
fn parse_amount_rejects_zero_unless_allowed() {
    assert!(parse_amount("Amount", "0", false).is_err());
    assert_eq!(parse_amount("Price", "0", true), Ok(0.0));
    assert!(parse_amount("Amount", "-5", true).is_err());
    assert!(parse_amount("Amount", "ten", true).is_err());
}

#[test]
fn optional_year_blank_is_none() {
    assert_eq!(parse_optional_year("Founded", " "), Ok(None));
    assert_eq!(parse_optional_year("Founded", "2019"), Ok(Some(2019)));
    assert!(parse_optional_year("Founded", "19").is_err());
}
