//! Parsing model output into the presentation contract.
//!
//! The model is asked for JSON but nothing guarantees it complies; these
//! tests pin which deviations are tolerated (missing keys, nulls, absent
//! optionals) and which fail with a distinct malformed-content error.

use prompt2deck::errors::AppError;
use prompt2deck::models::Presentation;

#[test]
fn missing_slides_content_key_yields_empty_deck() {
    let presentation = Presentation::from_model_json("Empty", "{}").expect("parse");
    assert_eq!(presentation.title, "Empty");
    assert!(presentation.slides.is_empty());
}

#[test]
fn null_slides_content_is_treated_as_empty() {
    let presentation =
        Presentation::from_model_json("Nulled", r#"{"slidesContent": null}"#).expect("parse");
    assert!(presentation.slides.is_empty());
}

#[test]
fn non_object_top_level_is_malformed() {
    for raw in ["[1, 2, 3]", "\"just a string\"", "42"] {
        let err = Presentation::from_model_json("Bad", raw).expect_err("should fail");
        assert!(
            matches!(err, AppError::MalformedContent(_)),
            "expected malformed-content error for {raw}, got {err}"
        );
    }
}

#[test]
fn slides_content_must_be_an_array() {
    let err = Presentation::from_model_json("Bad", r#"{"slidesContent": {"oops": true}}"#)
        .expect_err("should fail");
    assert!(matches!(err, AppError::MalformedContent(_)));
}

#[test]
fn element_type_mismatch_is_malformed() {
    let raw = r#"{"slidesContent": [{"slide_name": "Ok", "key_points": "not an array"}]}"#;
    let err = Presentation::from_model_json("Bad", raw).expect_err("should fail");
    assert!(matches!(err, AppError::MalformedContent(_)));
}

#[test]
fn missing_optional_fields_default() {
    let raw = r#"{"slidesContent": [{"slide_number": 1, "slide_name": "Only a name"}]}"#;
    let presentation = Presentation::from_model_json("Deck", raw).expect("parse");

    assert_eq!(presentation.slides.len(), 1);
    let slide = &presentation.slides[0];
    assert_eq!(slide.slide_name, "Only a name");
    assert!(slide.header.is_none());
    assert!(slide.description.is_none());
    assert!(slide.key_points.is_empty());
}

#[test]
fn slide_order_follows_array_order() {
    let raw = r#"{"slidesContent": [
        {"slide_number": 3, "slide_name": "C"},
        {"slide_number": 1, "slide_name": "A"},
        {"slide_number": 2, "slide_name": "B"}
    ]}"#;
    let presentation = Presentation::from_model_json("Deck", raw).expect("parse");

    // slide_number is informational only; the array order wins.
    let names: Vec<&str> = presentation
        .slides
        .iter()
        .map(|s| s.slide_name.as_str())
        .collect();
    assert_eq!(names, vec!["C", "A", "B"]);
}

#[test]
fn full_slide_record_round_trips() {
    let raw = r#"{"slidesContent": [{
        "slide_number": 1,
        "slide_name": "Intro",
        "header": "Welcome",
        "description": "An opening slide.",
        "key_points": ["A", "B", "C"]
    }]}"#;
    let presentation = Presentation::from_model_json("Deck", raw).expect("parse");

    let slide = &presentation.slides[0];
    assert_eq!(slide.header.as_deref(), Some("Welcome"));
    assert_eq!(slide.description.as_deref(), Some("An opening slide."));
    assert_eq!(slide.key_points, vec!["A", "B", "C"]);
}
