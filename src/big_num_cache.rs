use lazy_static::*;

use crate::BigInt;
use crate::big_num_constants::*;

lazy_static! {
    /// Canonical values `0..=MAX_CONSTANT`, built on first use.
    pub static ref POS_CACHE: Vec<BigInt> = (0..=MAX_CONSTANT)
        .map(BigInt::from_u64_uncached)
        .collect();
}

#[test]
fn test_pos_cache() {
    assert_eq!(POS_CACHE.len() as u64, MAX_CONSTANT + 1);
    for (n, big) in POS_CACHE.iter().enumerate() {
        assert_eq!(big.to_u64(), n as u64);
    }
    assert_eq!(POS_CACHE[0].limbs(), &[0]);
    assert_eq!(POS_CACHE[16].limbs(), &[6, 1]);
}
