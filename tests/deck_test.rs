//! Deck renderer properties: slide counts, ordering, and the mapping of one
//! slide record onto one content slide.

use std::io::{Cursor, Read};

use prompt2deck::models::{Presentation, SlideContent};
use prompt2deck::pptx::{DeckStyle, DeckWriter};
use zip::ZipArchive;

fn render(presentation: &Presentation) -> ZipArchive<Cursor<Vec<u8>>> {
    let bytes = DeckWriter::new(DeckStyle::default())
        .render(presentation)
        .expect("render");
    ZipArchive::new(Cursor::new(bytes)).expect("valid zip")
}

fn read_part(archive: &mut ZipArchive<Cursor<Vec<u8>>>, name: &str) -> String {
    let mut content = String::new();
    archive
        .by_name(name)
        .expect("part exists")
        .read_to_string(&mut content)
        .expect("read part");
    content
}

fn named_slide(name: &str) -> SlideContent {
    SlideContent {
        slide_name: name.to_string(),
        ..SlideContent::default()
    }
}

#[test]
fn zero_slides_yields_exactly_one_title_slide() {
    let mut archive = render(&Presentation::new("Lonely", Vec::new()));

    assert!(archive.by_name("ppt/slides/slide1.xml").is_ok());
    assert!(archive.by_name("ppt/slides/slide2.xml").is_err());

    let manifest = read_part(&mut archive, "ppt/presentation.xml");
    assert_eq!(manifest.matches("<p:sldId ").count(), 1);
}

#[test]
fn n_slides_yield_n_plus_one_in_input_order() {
    let slides = vec![named_slide("One"), named_slide("Two"), named_slide("Three")];
    let mut archive = render(&Presentation::new("Counted", slides));

    let manifest = read_part(&mut archive, "ppt/presentation.xml");
    assert_eq!(manifest.matches("<p:sldId ").count(), 4);

    assert!(read_part(&mut archive, "ppt/slides/slide2.xml").contains("<a:t>One</a:t>"));
    assert!(read_part(&mut archive, "ppt/slides/slide3.xml").contains("<a:t>Two</a:t>"));
    assert!(read_part(&mut archive, "ppt/slides/slide4.xml").contains("<a:t>Three</a:t>"));
    assert!(archive.by_name("ppt/slides/slide5.xml").is_err());
}

#[test]
fn title_slide_carries_title_and_dated_subtitle() {
    let mut archive = render(&Presentation::new("Demo Deck", Vec::new()));
    let slide1 = read_part(&mut archive, "ppt/slides/slide1.xml");

    assert!(slide1.contains("<a:t>Demo Deck</a:t>"));
    assert!(slide1.contains("<a:t>Created: "));
    // Title dark blue, subtitle medium gray.
    assert!(slide1.contains("<a:srgbClr val=\"2C4D79\"/>"));
    assert!(slide1.contains("<a:srgbClr val=\"595959\"/>"));
}

#[test]
fn demo_scenario_renders_header_and_bullets_without_description() {
    let slide = SlideContent {
        slide_number: 1,
        slide_name: "Intro".to_string(),
        header: Some("Welcome".to_string()),
        description: Some(String::new()),
        key_points: vec!["A".to_string(), "B".to_string()],
    };
    let mut archive = render(&Presentation::new("Demo", vec![slide]));

    let manifest = read_part(&mut archive, "ppt/presentation.xml");
    assert_eq!(manifest.matches("<p:sldId ").count(), 2);

    let slide2 = read_part(&mut archive, "ppt/slides/slide2.xml");
    assert!(slide2.contains("<a:t>Intro</a:t>"));

    // Header is a single bold block; the empty description is dropped.
    assert!(slide2.contains("b=\"1\""));
    assert!(slide2.contains("<a:t>Welcome</a:t>"));
    assert!(!slide2.contains("spcAft"));

    // Two top-level bullets, in order.
    assert_eq!(slide2.matches("<a:buChar").count(), 2);
    let a = slide2.find("<a:t>A</a:t>").expect("bullet A");
    let b = slide2.find("<a:t>B</a:t>").expect("bullet B");
    assert!(a < b);
}

#[test]
fn all_optionals_empty_renders_heading_only_slide() {
    let mut archive = render(&Presentation::new("Deck", vec![named_slide("Heading")]));
    let slide2 = read_part(&mut archive, "ppt/slides/slide2.xml");

    assert!(slide2.contains("<a:t>Heading</a:t>"));
    assert!(!slide2.contains("<p:ph idx=\"1\"/>"));
    assert!(!slide2.contains("<a:buChar"));
}

#[test]
fn description_paragraph_has_spacing_and_body_color() {
    let slide = SlideContent {
        slide_name: "Details".to_string(),
        description: Some("The long form.".to_string()),
        ..SlideContent::default()
    };
    let mut archive = render(&Presentation::new("Deck", vec![slide]));
    let slide2 = read_part(&mut archive, "ppt/slides/slide2.xml");

    assert!(slide2.contains("<a:t>The long form.</a:t>"));
    assert!(slide2.contains("<a:spcPts val=\"2000\"/>"));
    assert!(slide2.contains("sz=\"1800\""));
    assert!(slide2.contains("<a:srgbClr val=\"434343\"/>"));
}

#[test]
fn rendering_does_not_mutate_input() {
    let slides = vec![named_slide("Stable")];
    let presentation = Presentation::new("Deck", slides);
    let before = format!("{presentation:?}");

    let _ = DeckWriter::new(DeckStyle::default())
        .render(&presentation)
        .expect("render");

    assert_eq!(format!("{presentation:?}"), before);
}

#[test]
fn custom_style_colors_flow_through() {
    let style = DeckStyle {
        title_color: prompt2deck::pptx::Rgb::new(0, 0, 0),
        ..DeckStyle::default()
    };
    let bytes = DeckWriter::new(style)
        .render(&Presentation::new("Themed", Vec::new()))
        .expect("render");
    let mut archive = ZipArchive::new(Cursor::new(bytes)).expect("zip");

    let slide1 = read_part(&mut archive, "ppt/slides/slide1.xml");
    assert!(slide1.contains("<a:srgbClr val=\"000000\"/>"));
    assert!(!slide1.contains("<a:srgbClr val=\"2C4D79\"/>"));
}
