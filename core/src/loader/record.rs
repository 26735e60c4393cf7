use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use num_bigint::BigInt;
use num_traits::Num;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::loader::error::{LoaderError, LoaderResult};
use crate::shamir::error::ShamirResult;
use crate::shamir::{Point, PointSet, ShamirRecovery};

/// Radix bounds accepted by the share decoder. `BigInt::from_str_radix`
/// asserts on anything outside this range, so the bounds are enforced before
/// the digits are touched.
const MIN_BASE: u32 = 2;
const MAX_BASE: u32 = 36;

#[derive(Debug, Deserialize)]
struct RawKeys {
    n: usize,
    k: usize,
}

#[derive(Debug, Deserialize)]
struct RawShare {
    base: String,
    value: String,
}

/// Serde model of a case file: a `keys` header carrying the declared share
/// count and threshold, plus one record per share keyed by the share's
/// x-coordinate.
#[derive(Debug, Deserialize)]
struct RawCase {
    keys: RawKeys,
    #[serde(flatten)]
    shares: BTreeMap<String, RawShare>,
}

/// One decoded reconstruction case: the threshold and the decoded points.
///
/// Shares are handed to the recovery engine in ascending x order, making
/// "the first k points" independent of JSON map iteration order.
#[derive(Debug, Clone)]
pub struct RecoveryCase {
    threshold: usize,
    declared_shares: usize,
    points: PointSet,
}

impl RecoveryCase {
    /// Decode a case from JSON text.
    pub fn from_json_str(json: &str) -> LoaderResult<Self> {
        let raw: RawCase = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    /// Decode a case from any reader producing JSON.
    pub fn from_reader<R: Read>(reader: R) -> LoaderResult<Self> {
        let raw: RawCase = serde_json::from_reader(reader)?;
        Self::from_raw(raw)
    }

    /// Load and decode a case file from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> LoaderResult<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    fn from_raw(raw: RawCase) -> LoaderResult<Self> {
        let mut decoded: Vec<Point> = Vec::with_capacity(raw.shares.len());
        for (key, share) in &raw.shares {
            let x = parse_share_index(key)?;
            let y = decode_share_value(&share.value, &share.base)?;
            decoded.push(Point::new(x, y));
        }

        decoded.sort_by(|a, b| a.x().cmp(b.x()));
        let points = PointSet::from_points(decoded)?;

        if points.len() != raw.keys.n {
            warn!(
                declared = raw.keys.n,
                found = points.len(),
                "share count differs from declared n"
            );
        }
        debug!(
            threshold = raw.keys.k,
            shares = points.len(),
            "decoded recovery case"
        );

        Ok(RecoveryCase {
            threshold: raw.keys.k,
            declared_shares: raw.keys.n,
            points,
        })
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// The share count announced by the case header, which may differ from
    /// the number of share records actually present.
    pub fn declared_shares(&self) -> usize {
        self.declared_shares
    }

    pub fn points(&self) -> &PointSet {
        &self.points
    }

    pub fn into_parts(self) -> (usize, PointSet) {
        (self.threshold, self.points)
    }

    /// Recover the secret from the first `threshold` points.
    pub fn recover(&self) -> ShamirResult<BigInt> {
        ShamirRecovery::new(self.threshold)?.recover(&self.points)
    }

    /// Recover the secret, cross-checking surplus points for consistency.
    pub fn recover_checked(&self) -> ShamirResult<BigInt> {
        ShamirRecovery::new(self.threshold)?.recover_checked(&self.points)
    }
}

fn parse_share_index(key: &str) -> LoaderResult<BigInt> {
    key.parse()
        .map_err(|source| LoaderError::InvalidShareIndex {
            key: key.to_owned(),
            source,
        })
}

/// Decode a radix-encoded share value into an integer.
///
/// Digits above nine are accepted in either letter case; the radix must lie
/// in 2..=36.
fn decode_share_value(value: &str, base: &str) -> LoaderResult<BigInt> {
    let radix: u32 =
        base.parse().map_err(|source| LoaderError::InvalidBase {
            base: base.to_owned(),
            source,
        })?;
    if !(MIN_BASE..=MAX_BASE).contains(&radix) {
        return Err(LoaderError::UnsupportedBase(radix));
    }
    BigInt::from_str_radix(value, radix).map_err(|source| {
        LoaderError::InvalidShareValue {
            value: value.to_owned(),
            base: radix,
            source,
        }
    })
}
