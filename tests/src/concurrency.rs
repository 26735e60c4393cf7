#[cfg(test)]
mod concurrency_tests {
    use std::thread;

    use num_bigint::BigInt;
    use shamir_core::{Point, PointSet, ShamirRecovery};

    fn quadratic_points(secret: i64, count: usize) -> PointSet {
        let points = (1..=count as i64).map(|x| {
            let y = x * x + 2 * x + secret;
            Point::new(BigInt::from(x), BigInt::from(y))
        });
        PointSet::from_points(points).expect("distinct x coordinates")
    }

    #[test]
    fn recovers_distinct_cases_in_parallel() {
        let cases: Vec<(BigInt, PointSet)> = (0..8i64)
            .map(|worker| {
                let secret = 1_000 + 37 * worker;
                (BigInt::from(secret), quadratic_points(secret, 5))
            })
            .collect();

        let recovery = ShamirRecovery::new(3).expect("nonzero threshold");
        thread::scope(|scope| {
            for (secret, points) in &cases {
                scope.spawn(move || {
                    let recovered = recovery.recover(points).expect("recovery succeeds");
                    assert_eq!(&recovered, secret);
                });
            }
        });
    }

    #[test]
    fn shares_one_point_set_across_readers() {
        let secret = BigInt::from(424_242);
        let points = quadratic_points(424_242, 6);

        // Interpolating through more than degree + 1 points of the same
        // polynomial leaves the constant term unchanged, so every reader
        // expects the same secret.
        thread::scope(|scope| {
            for threshold in 3..=6usize {
                let secret = &secret;
                let points = &points;
                scope.spawn(move || {
                    let recovery =
                        ShamirRecovery::new(threshold).expect("nonzero threshold");
                    let recovered =
                        recovery.recover_checked(points).expect("consistent shares");
                    assert_eq!(&recovered, secret);
                });
            }
        });
    }
}
