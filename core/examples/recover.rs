use num_bigint::BigInt;
use shamir_core::error::RecoveryResult;
use shamir_core::RecoveryCase;

const CASE: &str = r#"{
    "keys": { "n": 4, "k": 3 },
    "1": { "base": "10", "value": "4" },
    "2": { "base": "2", "value": "111" },
    "3": { "base": "10", "value": "12" },
    "6": { "base": "4", "value": "213" }
}"#;

fn main() -> RecoveryResult<()> {
    let case = RecoveryCase::from_json_str(CASE)?;

    let secret = case.recover()?;
    assert_eq!(secret, BigInt::from(3));
    println!("Recovered Secret: {secret}");

    let checked = case.recover_checked()?;
    println!(
        "All {} shares agree on the secret {checked}",
        case.points().len()
    );

    Ok(())
}
