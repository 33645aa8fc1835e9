/// Storage type of a single limb.
pub type Limb = u32;

/// Base of one limb. Must be a power of ten so that every limb maps onto a
/// fixed-width group of decimal digits.
pub const BASE: Limb = 10;

/// Number of decimal digits one limb holds.
pub const NUMBER_OF_ZEROS: usize = digits_per_limb(BASE);

/// Values `0..=MAX_CONSTANT` are served from [`POS_CACHE`](crate::big_num_cache::POS_CACHE).
pub const MAX_CONSTANT: u64 = 16;

const fn digits_per_limb(mut base: Limb) -> usize {
    let mut digits = 1;
    while base > 10 {
        base /= 10;
        digits += 1;
    }
    digits
}

#[test]
fn test_digits_per_limb() {
    assert_eq!(digits_per_limb(10), 1);
    assert_eq!(digits_per_limb(100), 2);
    assert_eq!(digits_per_limb(1000), 3);
    assert_eq!(digits_per_limb(1_000_000_000), 9);
    assert_eq!(NUMBER_OF_ZEROS, 1);
}
