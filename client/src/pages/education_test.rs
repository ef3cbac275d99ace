use super::*;

fn course_form() -> CourseForm {
    CourseForm {
        title: "Intro to Data Science".to_owned(),
        description: "Python and pandas".to_owned(),
        category: "technology".to_owned(),
        level: "beginner".to_owned(),
        duration_hours: "12".to_owned(),
        skills_gained: "python, pandas".to_owned(),
        ..CourseForm::default()
    }
}

#[test]
fn blank_price_means_free() {
    let course = course_form().validate().unwrap();
    assert!(course.price.abs() < f64::EPSILON);
    assert_eq!(course.certificate_type, "completion");
    assert_eq!(course.skills_gained, vec!["python", "pandas"]);
}

#[test]
fn zero_price_is_allowed() {
    let form = CourseForm { price: "0".to_owned(), ..course_form() };
    assert!(form.validate().unwrap().price.abs() < f64::EPSILON);
}

#[test]
fn negative_price_is_rejected() {
    let form = CourseForm { price: "-10".to_owned(), ..course_form() };
    assert!(form.validate().is_err());
}

#[test]
fn duration_must_be_positive() {
    let form = CourseForm { duration_hours: "0".to_owned(), ..course_form() };
    assert_eq!(form.validate().unwrap_err(), "Duration must be between 1 and 1000.");
}

#[test]
fn price_label_free_and_paid() {
    let free = Course::default();
    assert_eq!(price_label(&free), "Free");
    let paid = Course { price: 19.5, ..Course::default() };
    assert_eq!(price_label(&paid), "$19.50");
}

#[test]
fn course_meta_uses_level_label() {
    let course = Course {
        level: "intermediate".to_owned(),
        duration_hours: 8,
        rating: 4.46,
        enrollment_count: 230,
        ..Course::default()
    };
    assert_eq!(course_meta(&course), "Intermediate • 8h • 4.5★ • 230 enrolled");
}
