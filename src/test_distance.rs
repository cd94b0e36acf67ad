use crate::distance::DistanceCalculator;
use crate::error::ConfigError;
use crate::rect::Rect;
use nearly_eq::assert_nearly_eq;

fn regions(points: &[(f32, f32)]) -> Vec<(usize, Rect<f32>)> {
    points
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| (i + 1, Rect::square(x, y, 20.0)))
        .collect()
}

#[test]
fn test_known_distance() {
    let calculator = DistanceCalculator::new(10.0).unwrap();
    let regions = regions(&[(0.0, 0.0), (30.0, 40.0)]);

    let result = calculator.pairwise(&regions);

    // sqrt(900 + 1600) / 10
    assert_nearly_eq!(result[0][0].1, 5.00);
    assert_nearly_eq!(result[1][0].1, 5.00);
}

#[test]
fn test_symmetry_and_non_negativity() {
    let calculator = DistanceCalculator::new(7.3).unwrap();
    let regions = regions(&[
        (0.0, 0.0),
        (13.7, 91.2),
        (55.5, 3.3),
        (200.0, 150.0),
    ]);

    let result = calculator.pairwise(&regions);

    for (i, row) in result.iter().enumerate() {
        for &(other, d) in row {
            assert!(d >= 0.0);
            let back = result[other - 1]
                .iter()
                .find(|(id, _)| *id == i + 1)
                .map(|(_, d)| *d)
                .unwrap();
            assert_eq!(d, back, "distance {}-{} not symmetric", i + 1, other);
        }
    }
}

#[test]
fn test_distance_to_self_excluded() {
    let calculator = DistanceCalculator::new(1.0).unwrap();
    let regions = regions(&[(0.0, 0.0), (10.0, 0.0), (20.0, 0.0)]);

    let result = calculator.pairwise(&regions);

    assert_eq!(result.len(), 3);
    for (i, row) in result.iter().enumerate() {
        assert_eq!(row.len(), 2);
        assert!(row.iter().all(|(id, _)| *id != i + 1));
    }
}

#[test]
fn test_rounding_to_two_decimals() {
    let calculator = DistanceCalculator::new(3.0).unwrap();
    let regions = regions(&[(0.0, 0.0), (1.0, 1.0)]);

    let result = calculator.pairwise(&regions);

    // sqrt(2) / 3 = 0.4714... -> 0.47
    assert_nearly_eq!(result[0][0].1, 0.47);
}

#[test]
fn test_non_positive_scale_rejected() {
    assert_eq!(
        DistanceCalculator::new(0.0).unwrap_err(),
        ConfigError::NonPositiveScale(0.0)
    );
    assert_eq!(
        DistanceCalculator::new(-2.5).unwrap_err(),
        ConfigError::NonPositiveScale(-2.5)
    );
}
