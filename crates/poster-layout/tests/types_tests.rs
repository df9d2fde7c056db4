use poster_layout::*;

#[test]
fn test_page_format_dimensions() {
    assert_eq!(PageFormat::A4.dimensions_mm(), (210.0, 297.0));
    assert_eq!(PageFormat::A3.dimensions_mm(), (297.0, 420.0));
    assert_eq!(PageFormat::A2.dimensions_mm(), (420.0, 594.0));
    assert_eq!(PageFormat::A1.dimensions_mm(), (594.0, 841.0));
    assert_eq!(PageFormat::Letter.dimensions_mm(), (215.9, 279.4));
    assert_eq!(PageFormat::Legal.dimensions_mm(), (215.9, 355.6));
}

#[test]
fn test_page_format_resolve_known_names() {
    for format in PageFormat::ALL {
        assert_eq!(PageFormat::resolve(format.name()), format);
        assert_eq!(PageFormat::lookup(format.name()), Some(format));
    }
    assert_eq!(PageFormat::resolve("Letter"), PageFormat::Letter);
    assert_eq!(PageFormat::resolve(" a3 "), PageFormat::A3);
}

#[test]
fn test_page_format_unknown_falls_back_to_a4() {
    assert_eq!(PageFormat::resolve("b5"), PageFormat::A4);
    assert_eq!(PageFormat::resolve(""), PageFormat::A4);
    assert_eq!(PageFormat::resolve("tabloid"), PageFormat::DEFAULT);
    assert_eq!(PageFormat::lookup("b5"), None);
}

#[test]
fn test_resolve_format() {
    assert_eq!(resolve_format("a1"), (594.0, 841.0));
    assert_eq!(resolve_format("legal"), (215.9, 355.6));
    assert_eq!(resolve_format("nonsense"), (210.0, 297.0));
}

#[test]
fn test_unit_conversion() {
    assert_eq!(Unit::Millimeter.to_mm(12.0), 12.0);
    assert_eq!(Unit::Centimeter.to_mm(12.0), 120.0);
    assert_eq!(Unit::Inch.to_mm(2.0), 50.8);
    assert_eq!(Unit::Foot.to_mm(1.0), 304.8);
}

#[test]
fn test_unit_resolve() {
    assert_eq!(Unit::resolve("mm"), Unit::Millimeter);
    assert_eq!(Unit::resolve("cm"), Unit::Centimeter);
    assert_eq!(Unit::resolve("inch"), Unit::Inch);
    assert_eq!(Unit::resolve("ft"), Unit::Foot);
    assert_eq!(Unit::resolve("furlong"), Unit::Millimeter);
    assert_eq!(Unit::lookup("furlong"), None);
}

#[test]
fn test_physical_size_to_mm() {
    let size = PhysicalSize::new(30.0, 60.0, Unit::Centimeter);
    assert_eq!(size.to_mm(), (300.0, 600.0));
}

#[test]
fn test_physical_size_validate() {
    assert!(PhysicalSize::new(1.0, 1.0, Unit::Inch).validate().is_ok());

    for (width, height) in [(0.0, 1.0), (1.0, 0.0), (-3.0, 1.0), (1.0, f64::INFINITY)] {
        match PhysicalSize::new(width, height, Unit::Millimeter).validate() {
            Err(PosterError::InvalidSize(msg)) => assert!(msg.contains("positive")),
            other => panic!("Expected InvalidSize, got {:?}", other),
        }
    }
}
