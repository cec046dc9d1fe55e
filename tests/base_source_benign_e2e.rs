use fieldsource::{BaseFieldSource, FieldSource, FieldVector};

#[test]
fn base_source_answers_every_event_with_zero() {
    // A host that was handed the base source (no model configured yet) must be
    // able to query it anywhere without failing.
    let base = BaseFieldSource::new();
    let before = base;
    let events = [
        (0.0, 0.0, 0.0, 0.0),
        (5.0, -3.0, 2.0, 10.0),
        (-1e300, 1e300, 0.0, -1e-300),
        (f64::INFINITY, f64::NEG_INFINITY, f64::NAN, 0.0),
    ];
    for &(x, y, z, t) in &events {
        assert_eq!(base.electric_field(x, y, z, t), FieldVector::ZERO);
        assert_eq!(base.magnetic_field(x, y, z, t), FieldVector::ZERO);
    }
    assert_eq!(base, before, "queries must not change the source");
}

#[test]
fn base_source_behind_trait_object() {
    let src: Box<dyn FieldSource> = Box::new(BaseFieldSource);
    let s = src.field(1.0, 2.0, 3.0, 4.0);
    assert_eq!(s.electric, FieldVector::ZERO);
    assert_eq!(s.magnetic, FieldVector::ZERO);
}
