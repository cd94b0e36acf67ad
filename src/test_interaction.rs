use crate::interaction::{InteractionDetector, InteractionKind};
use crate::rect::Rect;
use crate::termite::TermiteId;
use std::collections::BTreeSet;

fn square(id: TermiteId, x: f32, y: f32) -> (TermiteId, Rect<f32>) {
    (id, Rect::square(x, y, 20.0))
}

fn set(ids: &[TermiteId]) -> BTreeSet<TermiteId> {
    ids.iter().copied().collect()
}

#[test]
fn test_detect_overlapping_pair() {
    let detector = InteractionDetector::new(InteractionKind::BoxOverlap);
    let regions = vec![square(1, 0.0, 0.0), square(2, 10.0, 10.0)];

    let result = detector.detect(&regions);

    assert_eq!(result[0], set(&[2]));
    assert_eq!(result[1], set(&[1]));
}

#[test]
fn test_detect_touching_pair_is_not_interacting() {
    let detector = InteractionDetector::new(InteractionKind::BoxOverlap);
    let regions = vec![square(1, 0.0, 0.0), square(2, 20.0, 20.0)];

    let result = detector.detect(&regions);

    assert!(result[0].is_empty());
    assert!(result[1].is_empty());
}

#[test]
fn test_detect_is_symmetric() {
    let detector = InteractionDetector::new(InteractionKind::BoxOverlap);
    let regions = vec![
        square(1, 0.0, 0.0),
        square(2, 5.0, 5.0),
        square(3, 100.0, 100.0),
        square(4, 110.0, 95.0),
        square(5, 12.0, 3.0),
    ];

    let result = detector.detect(&regions);

    for (i, (id_i, _)) in regions.iter().enumerate() {
        for (j, (id_j, _)) in regions.iter().enumerate() {
            if i == j {
                continue;
            }
            assert_eq!(
                result[i].contains(id_j),
                result[j].contains(id_i),
                "asymmetric interaction between {} and {}",
                id_i,
                id_j
            );
        }
    }
}

#[test]
fn test_detect_excludes_self() {
    let detector = InteractionDetector::new(InteractionKind::BoxOverlap);
    let regions = vec![square(1, 0.0, 0.0)];

    let result = detector.detect(&regions);

    assert!(result[0].is_empty());
}

#[test]
fn test_detect_stateless() {
    let detector = InteractionDetector::new(InteractionKind::BoxOverlap);
    let apart = vec![square(1, 0.0, 0.0), square(2, 100.0, 100.0)];
    let touching = vec![square(1, 0.0, 0.0), square(2, 10.0, 10.0)];

    // history must not leak into the current result
    detector.detect(&touching);
    let result = detector.detect(&apart);

    assert!(result[0].is_empty());
    assert!(result[1].is_empty());
}

#[test]
fn test_proximity_threshold_is_strict() {
    let detector = InteractionDetector::new(InteractionKind::Proximity {
        threshold: 5.0,
        scale: 10.0,
    });
    // both size 0 so centers sit on the origins: 50px apart = 5.0 units
    let at_threshold = vec![
        (1, Rect::new(0.0, 0.0, 0.0, 0.0)),
        (2, Rect::new(30.0, 40.0, 0.0, 0.0)),
    ];
    let inside = vec![
        (1, Rect::new(0.0, 0.0, 0.0, 0.0)),
        (2, Rect::new(30.0, 39.0, 0.0, 0.0)),
    ];

    let result = detector.detect(&at_threshold);
    assert!(result[0].is_empty());

    let result = detector.detect(&inside);
    assert_eq!(result[0], set(&[2]));
    assert_eq!(result[1], set(&[1]));
}
