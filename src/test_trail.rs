use crate::termite::{color_for, Termite};
use crate::trail::{FrameRecord, Trail};
use std::collections::BTreeSet;

fn record(frame_index: usize, x: f32) -> FrameRecord {
    FrameRecord {
        frame_index,
        x,
        y: 0.0,
        interacting_with: BTreeSet::new(),
        distances: vec![(2, 1.5)],
    }
}

#[test]
fn test_append_preserves_order() {
    let mut trail = Trail::new();
    for i in 0..5 {
        trail.push(record(i, i as f32));
    }

    assert_eq!(trail.len(), 5);
    let indices: Vec<usize> =
        trail.records().iter().map(|r| r.frame_index).collect();
    assert_eq!(indices, vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_truncate_is_shrink_only() {
    let mut trail = Trail::new();
    for i in 0..5 {
        trail.push(record(i, 0.0));
    }

    trail.truncate(3);
    assert_eq!(trail.len(), 3);
    assert_eq!(trail.last().unwrap().frame_index, 2);

    // growing back is a no-op
    trail.truncate(10);
    assert_eq!(trail.len(), 3);
}

#[test]
fn test_overwrite_last_keeps_length() {
    let mut trail = Trail::new();
    trail.push(record(0, 1.0));
    trail.push(record(1, 2.0));

    assert!(trail.overwrite_last(record(1, 99.0)));

    assert_eq!(trail.len(), 2);
    assert_eq!(trail.last().unwrap().x, 99.0);
    assert_eq!(trail.get(0).unwrap().x, 1.0);
}

#[test]
fn test_overwrite_last_on_empty_trail() {
    let mut trail = Trail::new();
    assert!(!trail.overwrite_last(record(0, 0.0)));
    assert!(trail.is_empty());
}

#[test]
fn test_termite_label_and_color_deterministic() {
    let a: Termite<()> = Termite::new(3, crate::rect::Rect::square(0.0, 0.0, 20.0));
    let b: Termite<()> = Termite::new(3, crate::rect::Rect::square(9.0, 9.0, 20.0));

    assert_eq!(a.label(), "t3");
    assert_eq!(a.color(), b.color());
    assert_eq!(color_for(3), color_for(3));
    assert_ne!(color_for(1), color_for(2));
}
