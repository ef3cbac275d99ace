use super::*;

fn profile() -> Profile {
    Profile {
        user_id: "u1".to_owned(),
        email: "a@b.com".to_owned(),
        full_name: "A B".to_owned(),
        country: "Kenya".to_owned(),
        age: 22,
        skills: vec!["Rust".to_owned(), "Design".to_owned()],
        languages: vec!["Swahili".to_owned()],
        ..Profile::default()
    }
}

#[test]
fn form_prefills_from_profile() {
    let form = ProfileForm::from_profile(&profile());
    assert_eq!(form.full_name, "A B");
    assert_eq!(form.age, "22");
    assert_eq!(form.skills, "Rust, Design");
    assert_eq!(form.interests, "");
}

#[test]
fn unchanged_form_yields_same_fields() {
    let original = profile();
    let update = ProfileForm::from_profile(&original).validate().unwrap();
    assert_eq!(update, ProfileUpdate::from(&original));
}

#[test]
fn edited_lists_are_split() {
    let form = ProfileForm {
        interests: "Farming,\nMusic".to_owned(),
        ..ProfileForm::from_profile(&profile())
    };
    let update = form.validate().unwrap();
    assert_eq!(update.interests, vec!["Farming", "Music"]);
}

#[test]
fn blank_name_is_rejected() {
    let form = ProfileForm { full_name: " ".to_owned(), ..ProfileForm::from_profile(&profile()) };
    assert_eq!(form.validate(), Err("Full name is required.".to_owned()));
}

#[test]
fn age_outside_range_is_rejected() {
    let form = ProfileForm { age: "40".to_owned(), ..ProfileForm::from_profile(&profile()) };
    assert!(form.validate().is_err());
}
