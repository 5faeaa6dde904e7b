use itertools::Itertools;

use crate::error::CircuitError;
use crate::parser::{Point, MAX_COORD};

/// An unordered pair of junction boxes, `a < b`, with their squared distance.
///
/// Inputs are integer coordinates, so the squared distance is exact and orders
/// pairs the same way the Euclidean distance does. It is kept in `i128`, which
/// holds `3 * (2 * MAX_COORD)^2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pair {
    pub a: usize,
    pub b: usize,
    pub dist_sq: i128,
}

impl Pair {
    /// Straight-line distance between the two boxes.
    pub fn distance(&self) -> f64 {
        (self.dist_sq as f64).sqrt()
    }
}

/// Every pair `(i, j)` with `i < j`, in lexicographic order.
pub fn enumerate(points: &[Point]) -> Result<Vec<Pair>, CircuitError> {
    if points.len() < 2 {
        return Err(CircuitError::InvalidInput {
            count: points.len(),
        });
    }

    if let Some(index) = points.iter().position(|p| {
        p.to_array()
            .iter()
            .any(|c| c.unsigned_abs() > MAX_COORD.unsigned_abs())
    }) {
        return Err(CircuitError::OutOfRange {
            index,
            max: MAX_COORD,
        });
    }

    let pairs = (0..points.len())
        .tuple_combinations()
        .map(|(a, b)| Pair {
            a,
            b,
            dist_sq: distance_squared(points[a], points[b]),
        })
        .collect::<Vec<_>>();

    tracing::debug!(boxes = points.len(), pairs = pairs.len(), "enumerated pairs");
    Ok(pairs)
}

fn distance_squared(p: Point, q: Point) -> i128 {
    p.to_array()
        .into_iter()
        .zip(q.to_array())
        .map(|(u, v)| {
            let d = i128::from(u) - i128::from(v);
            d * d
        })
        .sum()
}

/// All pairs sorted by ascending distance.
///
/// The sort is stable: pairs at exactly the same distance keep their
/// enumeration order, lowest `a` first and then lowest `b`. Which of two
/// equidistant pairs closes the last circuit depends on this.
pub fn closest_first(points: &[Point]) -> Result<Vec<Pair>, CircuitError> {
    let mut pairs = enumerate(points)?;
    pairs.sort_by_key(|pair| pair.dist_sq);
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    use glam::I64Vec3;
    use rstest::rstest;

    #[rstest]
    #[case::empty(0)]
    #[case::single(1)]
    fn too_few_points_is_invalid(#[case] count: usize) {
        let points = vec![I64Vec3::ZERO; count];
        assert_eq!(
            enumerate(&points),
            Err(CircuitError::InvalidInput { count })
        );
    }

    #[test]
    fn enumerates_each_pair_once() {
        let points = (0..5).map(|x| I64Vec3::new(x, 0, 0)).collect::<Vec<_>>();
        let pairs = enumerate(&points).unwrap();

        assert_eq!(pairs.len(), 10);
        assert!(pairs.iter().all(|p| p.a < p.b));
        let indices = pairs.iter().map(|p| (p.a, p.b)).collect::<Vec<_>>();
        assert_eq!(&indices[..4], &[(0, 1), (0, 2), (0, 3), (0, 4)]);
        assert_eq!(indices[9], (3, 4));
    }

    #[test]
    fn distance_is_euclidean() {
        let points = [I64Vec3::new(1, 2, 3), I64Vec3::new(4, 6, 15)];
        let pairs = enumerate(&points).unwrap();

        assert_eq!(pairs[0].dist_sq, 9 + 16 + 144);
        assert_eq!(pairs[0].distance(), 13.0);
    }

    #[test]
    fn equal_distances_keep_enumeration_order() {
        // Corners of a unit square: four sides of length 1, two diagonals.
        let points = [
            I64Vec3::new(0, 0, 0),
            I64Vec3::new(1, 0, 0),
            I64Vec3::new(0, 1, 0),
            I64Vec3::new(1, 1, 0),
        ];
        let order = closest_first(&points)
            .unwrap()
            .iter()
            .map(|p| (p.a, p.b))
            .collect::<Vec<_>>();

        assert_eq!(order, vec![(0, 1), (0, 2), (1, 3), (2, 3), (0, 3), (1, 2)]);
    }

    #[test]
    fn far_apart_points_order_without_overflow() {
        let points = [
            I64Vec3::new(3_100_000_000, 0, 0),
            I64Vec3::new(0, 0, 0),
            I64Vec3::new(-3_100_000_000, 0, 0),
        ];
        let pairs = closest_first(&points).unwrap();

        let order = pairs.iter().map(|p| (p.a, p.b)).collect::<Vec<_>>();
        assert_eq!(order, vec![(0, 1), (1, 2), (0, 2)]);
        assert_eq!(pairs[2].dist_sq, 6_200_000_000_i128 * 6_200_000_000);
        assert_eq!(pairs[2].distance(), 6_200_000_000.0);
    }

    #[test]
    fn opposite_corners_at_the_coordinate_limit() {
        let points = [
            I64Vec3::splat(MAX_COORD),
            I64Vec3::splat(-MAX_COORD),
            I64Vec3::new(MAX_COORD, 0, -MAX_COORD),
        ];
        let pairs = closest_first(&points).unwrap();

        // Each axis differs by 2^62 between the two corners.
        assert_eq!((pairs[2].a, pairs[2].b), (0, 1));
        assert_eq!(pairs[2].dist_sq, 3 * (1_i128 << 124));
        assert!(pairs.windows(2).all(|w| w[0].dist_sq <= w[1].dist_sq));
    }

    #[rstest]
    #[case::too_large(I64Vec3::new(0, MAX_COORD + 1, 0))]
    #[case::too_small(I64Vec3::new(0, 0, i64::MIN))]
    fn coordinates_beyond_the_limit_are_rejected(#[case] outlier: Point) {
        let points = [I64Vec3::ZERO, outlier];
        assert_eq!(
            enumerate(&points),
            Err(CircuitError::OutOfRange {
                index: 1,
                max: MAX_COORD
            })
        );
    }

    #[test]
    fn coincident_points_come_first() {
        let points = [
            I64Vec3::new(0, 0, 0),
            I64Vec3::new(5, 0, 0),
            I64Vec3::new(0, 0, 0),
        ];
        let pairs = closest_first(&points).unwrap();

        assert_eq!((pairs[0].a, pairs[0].b, pairs[0].dist_sq), (0, 2, 0));
        assert!(pairs.windows(2).all(|w| w[0].dist_sq <= w[1].dist_sq));
    }
}
