// SPDX-License-Identifier: MIT
// Copyright 2026 The Sodium Tracker Authors

//! Chart projection: cumulative sodium for one to ten packages.

use crate::models::{Product, Projection, ProjectionPoint};

/// Number of points in a projection series.
pub const PROJECTION_POINTS: u32 = 10;

/// Build the projection series for `product` against `weekly_limit`.
pub fn projection(weekly_limit: u64, product: Product) -> Projection {
    let per_package = product.sodium_mg();
    let points = (1..=PROJECTION_POINTS)
        .map(|packages| ProjectionPoint {
            packages,
            sodium_mg: per_package * u64::from(packages),
        })
        .collect();

    Projection {
        weekly_limit,
        sodium_per_package: per_package,
        points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_cumulative_points() {
        let p = projection(14_000, Product::SarimiGoreng);

        assert_eq!(p.weekly_limit, 14_000);
        assert_eq!(p.sodium_per_package, 800);
        assert_eq!(p.points.len(), 10);
        assert_eq!(
            p.points.first(),
            Some(&ProjectionPoint {
                packages: 1,
                sodium_mg: 800
            })
        );
        assert_eq!(
            p.points.last(),
            Some(&ProjectionPoint {
                packages: 10,
                sodium_mg: 8000
            })
        );
    }
}
