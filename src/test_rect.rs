use crate::rect::Rect;

#[test]
fn test_overlap_partial() {
    let a = Rect::new(0.0, 0.0, 20.0, 20.0);
    let b = Rect::new(10.0, 10.0, 20.0, 20.0);

    assert!(a.overlaps(&b));
    assert!(b.overlaps(&a));
}

#[test]
fn test_touching_edges_do_not_overlap() {
    let a = Rect::new(0.0, 0.0, 20.0, 20.0);
    // shares only the corner point (20, 20)
    let b = Rect::new(20.0, 20.0, 20.0, 20.0);
    // shares the edge x = 20
    let c = Rect::new(20.0, 0.0, 20.0, 20.0);

    assert!(!a.overlaps(&b));
    assert!(!b.overlaps(&a));
    assert!(!a.overlaps(&c));
    assert!(!c.overlaps(&a));
}

#[test]
fn test_zero_size_never_overlaps() {
    let point = Rect::new(5.0, 5.0, 0.0, 0.0);
    let line = Rect::new(5.0, 2.0, 0.0, 15.0);
    let big = Rect::new(0.0, 0.0, 20.0, 20.0);

    assert!(!point.overlaps(&big));
    assert!(!big.overlaps(&point));
    assert!(!line.overlaps(&big));
    assert!(!big.overlaps(&line));
    assert!(!point.overlaps(&point));
}

#[test]
fn test_containment_counts_as_overlap() {
    let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
    let inner = Rect::new(40.0, 40.0, 10.0, 10.0);

    assert!(outer.overlaps(&inner));
    assert!(inner.overlaps(&outer));
}

#[test]
fn test_square_and_accessors() {
    let mut r = Rect::square(3.0, 4.0, 20.0);
    assert_eq!(r.x(), 3.0);
    assert_eq!(r.y(), 4.0);
    assert_eq!(r.width(), 20.0);
    assert_eq!(r.height(), 20.0);

    r.set_x(5.0);
    r.set_y(6.0);
    assert_eq!(r.get_xyxy(), [5.0, 6.0, 25.0, 26.0]);
}

#[test]
fn test_center() {
    let r = Rect::new(10.0, 20.0, 4.0, 6.0);
    assert_eq!(r.center(), (12.0, 23.0));
}

#[test]
fn test_from_xyxy() {
    let r = Rect::from_xyxy(1.0, 2.0, 11.0, 22.0);
    assert_eq!(r.width(), 10.0);
    assert_eq!(r.height(), 20.0);
}
