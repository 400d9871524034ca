use super::*;

#[test]
fn test_span_point_display() {
    assert_eq!(Span::point(7), Span::new(7, 7));
    assert_eq!(Span::point(7).to_string(), "7..7");
}

#[test]
fn test_span_saturating_from_range_in_bounds() {
    assert_eq!(Span::saturating_from_range(3..4), Span::new(3, 4));
    assert_eq!(Span::saturating_from_range(0..0), Span::point(0));
}

#[cfg(target_pointer_width = "64")]
#[test]
fn test_span_saturating_from_range_clamps_each_end() {
    let big = u32::MAX as usize + 10;
    assert_eq!(
        Span::saturating_from_range(5..big),
        Span::new(5, u32::MAX)
    );
    assert_eq!(
        Span::saturating_from_range(big..big + 1),
        Span::new(u32::MAX, u32::MAX)
    );
}

#[test]
fn test_span_debug_matches_display() {
    let span = Span::new(2, 3);
    assert_eq!(format!("{span:?}"), format!("{span}"));
}
