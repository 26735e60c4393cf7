#[cfg(test)]
mod integration_tests {
    use math::prelude::*;
    use serde_json::json;
    use shamir_core::{
        loader::LoaderError, shamir::ShamirError, RecoveryCase, RecoveryResult,
    };

    const QUADRATIC_CASE: &str = r#"{
        "keys": { "n": 4, "k": 3 },
        "1": { "base": "10", "value": "4" },
        "2": { "base": "2", "value": "111" },
        "3": { "base": "10", "value": "12" },
        "6": { "base": "4", "value": "213" }
    }"#;

    const LINEAR_CASE: &str = r#"{
        "keys": { "n": 3, "k": 2 },
        "1": { "base": "10", "value": "18" },
        "2": { "base": "2", "value": "10101" },
        "3": { "base": "8", "value": "30" }
    }"#;

    fn poly_eval(coefficients: &[BigInt], x: &BigInt) -> BigInt {
        coefficients
            .iter()
            .rev()
            .fold(BigInt::from(0), |acc, coefficient| acc * x + coefficient)
    }

    #[test]
    fn recovers_secret_from_inline_case() -> RecoveryResult<()> {
        // 1. Decode the case file
        let case = RecoveryCase::from_json_str(QUADRATIC_CASE)?;
        assert_eq!(case.threshold(), 3);
        assert_eq!(case.declared_shares(), 4);
        assert_eq!(case.points().len(), 4);

        // 2. Recover from the first threshold points
        assert_eq!(case.recover()?, big!(3));

        // 3. The surplus share lies on the same polynomial
        assert_eq!(case.recover_checked()?, big!(3));

        Ok(())
    }

    #[test]
    fn decodes_shares_across_mixed_bases() -> RecoveryResult<()> {
        let case = RecoveryCase::from_json_str(LINEAR_CASE)?;
        assert_eq!(case.recover()?, big!(15));
        Ok(())
    }

    #[test]
    fn decodes_case_from_reader() -> RecoveryResult<()> {
        let case = RecoveryCase::from_reader(LINEAR_CASE.as_bytes())?;
        assert_eq!(case.recover()?, big!(15));
        Ok(())
    }

    #[test]
    fn numerically_equal_share_keys_collide() {
        let case = r#"{
            "keys": { "n": 3, "k": 2 },
            "1": { "base": "10", "value": "18" },
            "01": { "base": "10", "value": "18" },
            "2": { "base": "10", "value": "21" }
        }"#;

        let err = RecoveryCase::from_json_str(case).unwrap_err();
        assert!(matches!(
            err,
            LoaderError::Shamir(ShamirError::DuplicateXValue(x)) if x == big!(1)
        ));
    }

    #[test]
    fn recovery_needs_threshold_points() {
        let case = r#"{
            "keys": { "n": 2, "k": 3 },
            "1": { "base": "10", "value": "4" },
            "2": { "base": "10", "value": "7" }
        }"#;

        let case = RecoveryCase::from_json_str(case).expect("two shares decode");
        let err = case.recover().unwrap_err();
        assert!(matches!(
            err,
            ShamirError::InsufficientPoints {
                required: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn rejects_share_with_unsupported_base() {
        let case = r#"{
            "keys": { "n": 1, "k": 1 },
            "1": { "base": "1", "value": "0" }
        }"#;

        let err = RecoveryCase::from_json_str(case).unwrap_err();
        assert!(matches!(err, LoaderError::UnsupportedBase(1)));
    }

    #[test]
    fn flags_surplus_share_off_the_polynomial() {
        let case = r#"{
            "keys": { "n": 4, "k": 3 },
            "1": { "base": "10", "value": "4" },
            "2": { "base": "2", "value": "111" },
            "3": { "base": "10", "value": "12" },
            "6": { "base": "10", "value": "40" }
        }"#;

        let case = RecoveryCase::from_json_str(case).expect("shares decode");

        // Plain recovery never touches the corrupted surplus share.
        assert_eq!(case.recover().expect("first-threshold recovery"), big!(3));

        let err = case.recover_checked().unwrap_err();
        assert!(matches!(
            err,
            ShamirError::InconsistentPoints { x } if x == big!(6)
        ));
    }

    #[test]
    fn loads_case_file_from_disk() -> RecoveryResult<()> {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../cli/cases/quadratic.json");
        let case = RecoveryCase::load(path)?;
        assert_eq!(case.recover()?, big!(3));
        assert_eq!(case.recover_checked()?, big!(3));
        Ok(())
    }

    #[test]
    fn missing_case_file_reports_io_error() {
        let err = RecoveryCase::load("no-such-case.json").unwrap_err();
        assert!(matches!(err, LoaderError::Io(_)));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = RecoveryCase::from_json_str(r#"{ "keys": "#).unwrap_err();
        assert!(matches!(err, LoaderError::Json(_)));
    }

    #[test]
    fn recovers_large_secret_from_hex_shares() -> RecoveryResult<()> {
        let secret: BigInt = "12345678901234567890123456789012345678901234567890"
            .parse()
            .expect("valid decimal literal");
        let coefficients = [secret.clone(), big!(7), -big!(11), big!(5)];
        let threshold = coefficients.len();
        let count = threshold + 2;

        let mut case = serde_json::Map::new();
        case.insert("keys".to_string(), json!({ "n": count, "k": threshold }));
        for index in 1..=count {
            let x = BigInt::from(index);
            let y = poly_eval(&coefficients, &x);
            case.insert(
                index.to_string(),
                json!({ "base": "16", "value": y.to_str_radix(16) }),
            );
        }

        let text = serde_json::Value::Object(case).to_string();
        let case = RecoveryCase::from_json_str(&text)?;
        assert_eq!(case.recover()?, secret);
        assert_eq!(case.recover_checked()?, secret);
        Ok(())
    }
}
