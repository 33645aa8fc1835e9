//! # BigInt
//! Arbitrary-precision unsigned integers, stored as base-[`BASE`] limbs with the least significant limb first.
//! # Example
//! ```
//! use dec_bigint::BigInt;
//!
//! let a: BigInt = "123456789012345678901234567890".parse().unwrap();
//! let b = BigInt::from(1000u32);
//! println!("a = {}", a);
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", &a - &b);
//! assert_eq!((&a + &b) - &b, a);
//! ```
//!

use std::cmp::Ordering;
use std::fmt::Display;
use std::iter::Sum;
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
};
use std::str::FromStr;

use log::debug;

use crate::big_num_constants::*;
use crate::big_num_cache::*;
use crate::error::{Error, Result};

/// A non-negative integer of arbitrary magnitude.
///
/// `limbs` is never empty, holds no most significant zero limb except the
/// single-limb zero `[0]`, and every limb lies in `[0, BASE)`. Two equal
/// values therefore always have identical limbs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    limbs: Vec<Limb>,
}

// 实现构造
impl BigInt {
    fn new(limbs: Vec<Limb>) -> Self {
        debug_assert!(!limbs.is_empty());
        BigInt { limbs }
    }

    pub fn zero() -> BigInt {
        BigInt::new(vec![0])
    }

    pub(crate) fn from_u64_uncached(mut val: u64) -> BigInt {
        let base = BASE as u64;
        let mut limbs = Vec::new();
        while val >= base {
            limbs.push((val % base) as Limb);
            val /= base;
        }
        limbs.push(val as Limb);
        BigInt::new(limbs)
    }

    fn value_of(val: u64) -> BigInt {
        if val <= MAX_CONSTANT {
            POS_CACHE[val as usize].clone()
        } else {
            BigInt::from_u64_uncached(val)
        }
    }
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt::zero()
    }
}

macro_rules! impl_unsigned_to_big_int {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInt {
        fn from(val: $u) -> Self {
            BigInt::value_of(val as u64)
        }
    }
    )*
    };
}
impl_unsigned_to_big_int!(u8, u16, u32, usize, u64);

// 访问器
impl BigInt {
    /// Limbs, least significant first.
    pub fn limbs(&self) -> &[Limb] {
        &self.limbs
    }

    pub fn limb_count(&self) -> usize {
        self.limbs.len()
    }

    pub fn is_zero(&self) -> bool {
        self.limbs == [0]
    }
}

// 实现解析
impl FromStr for BigInt {
    type Err = Error;

    /// Parses a decimal digit string. Leading zeros are skipped and an empty
    /// (or all-zero) string yields zero.
    fn from_str(val: &str) -> Result<Self> {
        let line = val.trim_start_matches('0');
        let skipped = val.len() - line.len();

        if let Some((position, digit)) = line.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            let position = skipped + position;
            debug!("rejecting {:?}: invalid digit {:?} at byte {}", val, digit, position);
            return Err(Error::InvalidDigit { digit, position });
        }

        if line.is_empty() {
            return Ok(BigInt::zero());
        }

        // group from the least significant end, the leading group may be short
        let limbs = line
            .as_bytes()
            .rchunks(NUMBER_OF_ZEROS)
            .map(|group| {
                group
                    .iter()
                    .fold(0 as Limb, |acc, digit| acc * 10 + Limb::from(digit - b'0'))
            })
            .collect();
        Ok(BigInt::new(limbs))
    }
}

impl TryFrom<&str> for BigInt {
    type Error = crate::error::Error;

    fn try_from(val: &str) -> Result<Self> {
        val.parse()
    }
}

// 实现打印
impl Display for BigInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad_integral(true, "", &self.to_decimal_string())
    }
}

impl BigInt {
    fn to_decimal_string(&self) -> String {
        let mut result = String::with_capacity(self.limbs.len() * NUMBER_OF_ZEROS);
        let mut limbs = self.limbs.iter().rev();

        // the most significant limb is written without padding
        if let Some(first) = limbs.next() {
            result.push_str(&first.to_string());
        }
        for limb in limbs {
            result.push_str(&format!("{:0width$}", limb, width = NUMBER_OF_ZEROS));
        }
        result
    }
}

// 实现到原生整数的转换
macro_rules! impl_big_int_to_unsigned {
    ($($u: ty => $wrapping: ident, $checked: ident);*) => {
    $(
    impl BigInt {
        /// Folds the limbs into a native integer. Values that do not fit wrap
        /// around silently; use the `TryFrom` conversion to detect that.
        pub fn $wrapping(&self) -> $u {
            let mut result: $u = 0;
            let mut current_base: $u = 1;
            for limb in self.limbs.iter() {
                result = result.wrapping_add((*limb as $u).wrapping_mul(current_base));
                current_base = current_base.wrapping_mul(BASE as $u);
            }
            result
        }

        fn $checked(&self) -> Option<$u> {
            self.limbs
                .iter()
                .rev()
                .try_fold(0 as $u, |acc, limb| acc.checked_mul(BASE as $u)?.checked_add(*limb as $u))
        }
    }

    impl TryFrom<&BigInt> for $u {
        type Error = crate::error::Error;

        fn try_from(val: &BigInt) -> Result<$u> {
            val.$checked().ok_or(Error::Overflow { target: stringify!($u) })
        }
    }
    )*
    };
}
impl_big_int_to_unsigned!(u32 => to_u32, checked_to_u32; u64 => to_u64, checked_to_u64);

// 实现大小比较
impl BigInt {
    fn compare_limbs(&self, other: &BigInt) -> Ordering {
        let self_len = self.limbs.len();
        let other_len = other.limbs.len();

        // no leading zero limbs, so the longer one is the larger one
        if self_len != other_len {
            return self_len.cmp(&other_len);
        }

        for (a, b) in self.limbs.iter().rev().zip(other.limbs.iter().rev()) {
            if a != b {
                return a.cmp(b);
            }
        }

        Ordering::Equal
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_limbs(other)
    }
}

// 实现加法
impl BigInt {
    fn add(x: &mut Vec<Limb>, y: &[Limb]) {
        if y.len() > x.len() {
            x.resize(y.len(), 0);
        }

        let mut carry: Limb = 0;
        for (i, x_val) in x.iter_mut().enumerate() {
            let y_val = match y.get(i) {
                Some(y_val) => *y_val,
                None if carry == 0 => break,
                None => 0,
            };
            let sum = *x_val + y_val + carry;
            *x_val = sum % BASE;
            carry = sum / BASE;
        }

        if carry != 0 {
            x.push(carry);
        }
    }
}

impl AddAssign<&BigInt> for BigInt {
    fn add_assign(&mut self, rhs: &BigInt) {
        BigInt::add(&mut self.limbs, &rhs.limbs);
    }
}

impl AddAssign for BigInt {
    fn add_assign(&mut self, rhs: Self) {
        *self += &rhs;
    }
}

impl Add<&BigInt> for BigInt {
    type Output = BigInt;

    fn add(mut self, rhs: &BigInt) -> Self::Output {
        self += rhs;
        self
    }
}

impl Add for BigInt {
    type Output = BigInt;

    fn add(self, rhs: Self) -> Self::Output {
        self + &rhs
    }
}

impl Add for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: Self) -> Self::Output {
        self.clone() + rhs
    }
}

impl Sum for BigInt {
    fn sum<I: Iterator<Item = BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::zero(), |acc, val| acc + val)
    }
}

impl<'a> Sum<&'a BigInt> for BigInt {
    fn sum<I: Iterator<Item = &'a BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::zero(), |acc, val| acc + val)
    }
}

// 实现减法
impl BigInt {
    /// `big -= little`, the caller guarantees `big >= little`.
    fn sub(big: &mut Vec<Limb>, little: &[Limb]) {
        let mut borrow: i64 = 0;
        for (i, big_val) in big.iter_mut().enumerate() {
            let little_val = match little.get(i) {
                Some(little_val) => *little_val,
                None if borrow == 0 => break,
                None => 0,
            };
            let difference = *big_val as i64 - little_val as i64 - borrow;
            if difference >= 0 {
                *big_val = difference as Limb;
                borrow = 0;
            } else {
                *big_val = (difference + BASE as i64) as Limb;
                borrow = 1;
            }
        }
        debug_assert_eq!(borrow, 0);

        BigInt::normalize(big);
    }

    fn normalize(limbs: &mut Vec<Limb>) {
        while limbs.len() > 1 && limbs.last() == Some(&0) {
            limbs.pop();
        }
    }

    /// `self - other`, or `None` when `other` is the larger value.
    pub fn checked_sub(&self, other: &BigInt) -> Option<BigInt> {
        if self < other {
            return None;
        }
        let mut result = self.clone();
        BigInt::sub(&mut result.limbs, &other.limbs);
        Some(result)
    }

    /// In-place `self -= other` that refuses to go below zero. On
    /// [`Error::Underflow`] `self` is left unchanged.
    pub fn try_sub_assign(&mut self, other: &BigInt) -> Result<()> {
        if *self < *other {
            debug!("refusing to subtract {} from {}", other, self);
            return Err(Error::Underflow);
        }
        BigInt::sub(&mut self.limbs, &other.limbs);
        Ok(())
    }
}

impl SubAssign<&BigInt> for BigInt {
    /// # Panics
    /// When `rhs` is greater than `self`, like the primitive unsigned integers.
    fn sub_assign(&mut self, rhs: &BigInt) {
        if *self < *rhs {
            panic!("attempt to subtract with overflow");
        }
        BigInt::sub(&mut self.limbs, &rhs.limbs);
    }
}

impl SubAssign for BigInt {
    fn sub_assign(&mut self, rhs: Self) {
        *self -= &rhs;
    }
}

impl Sub<&BigInt> for BigInt {
    type Output = BigInt;

    fn sub(mut self, rhs: &BigInt) -> Self::Output {
        self -= rhs;
        self
    }
}

impl Sub for BigInt {
    type Output = BigInt;

    fn sub(self, rhs: Self) -> Self::Output {
        self - &rhs
    }
}

impl Sub for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: Self) -> Self::Output {
        self.clone() - rhs
    }
}

// 实现自增自减
impl BigInt {
    /// Prefix increment: adds one and hands back the updated value.
    pub fn increment(&mut self) -> &mut Self {
        *self += &POS_CACHE[1];
        self
    }

    /// Postfix increment: adds one and returns the value held before.
    pub fn post_increment(&mut self) -> BigInt {
        let result = self.clone();
        self.increment();
        result
    }

    /// Prefix decrement.
    ///
    /// # Panics
    /// When `self` is zero.
    pub fn decrement(&mut self) -> &mut Self {
        *self -= &POS_CACHE[1];
        self
    }

    /// Postfix decrement, see [`BigInt::decrement`].
    pub fn post_decrement(&mut self) -> BigInt {
        let result = self.clone();
        self.decrement();
        result
    }
}

#[test]
fn test_from() {
    assert_eq!(BigInt::from(0u8).limbs, vec![0]);
    assert_eq!(BigInt::from(7u16).limbs, vec![7]);
    assert_eq!(BigInt::from(10u32).limbs, vec![0, 1]);
    assert_eq!(BigInt::from(1234usize).limbs, vec![4, 3, 2, 1]);
    assert_eq!(BigInt::from(u64::MAX).to_string(), u64::MAX.to_string());
    assert_eq!(BigInt::default(), BigInt::zero());
    assert!(BigInt::from(0u64).is_zero());
}

#[test]
fn test_from_str() {
    let a: BigInt = "123456789012345678901234567890".parse().unwrap();
    assert_eq!(a.limb_count(), 30);
    assert_eq!(a.limbs[0], 0);
    assert_eq!(a.limbs[29], 1);

    assert_eq!(BigInt::from_str("0005").unwrap(), BigInt::from(5u32));
    assert_eq!(BigInt::from_str("00042").unwrap(), BigInt::from_str("42").unwrap());
    assert_eq!(BigInt::from_str("0000").unwrap().limbs, vec![0]);
    assert_eq!(BigInt::from_str("").unwrap(), BigInt::zero());
    assert_eq!(BigInt::try_from("100").unwrap(), BigInt::from(100u32));
}

#[test]
fn test_from_str_invalid() {
    match BigInt::from_str("12a4") {
        Err(Error::InvalidDigit { digit, position }) => {
            assert_eq!(digit, 'a');
            assert_eq!(position, 2);
        }
        other => panic!("unexpected {:?}", other),
    }
    match BigInt::from_str("007x") {
        Err(Error::InvalidDigit { digit: 'x', position: 3 }) => {}
        other => panic!("unexpected {:?}", other),
    }
    assert!(BigInt::from_str("-1").is_err());
    assert!(BigInt::from_str("+1").is_err());
    assert!(BigInt::from_str(" 1").is_err());
    assert!(BigInt::from_str("1é").is_err());
}

#[test]
fn test_to_string() {
    let s = "123456789012345678901234567890";
    assert_eq!(BigInt::from_str(s).unwrap().to_string(), s);
    assert_eq!(BigInt::zero().to_string(), "0");
    assert_eq!(BigInt::from(1000u32).to_string(), "1000");
    assert_eq!(format!("{:>6}", BigInt::from(42u32)), "    42");
    assert_eq!(format!("{:06}", BigInt::from(42u32)), "000042");
}

#[test]
fn test_to_u64() {
    let a: BigInt = "123456789110".parse().unwrap();
    assert_eq!(a.to_u64(), 123456789110);
    assert_eq!(u64::try_from(&a).unwrap(), 123456789110);
    assert!(u32::try_from(&a).is_err());

    let max: BigInt = "18446744073709551615".parse().unwrap();
    assert_eq!(u64::try_from(&max).unwrap(), u64::MAX);

    // 2^64 wraps around to zero
    let two_pow_64: BigInt = "18446744073709551616".parse().unwrap();
    assert_eq!(two_pow_64.to_u64(), 0);
    match u64::try_from(&two_pow_64) {
        Err(Error::Overflow { target }) => assert_eq!(target, "u64"),
        other => panic!("unexpected {:?}", other),
    }

    let two_pow_32 = BigInt::from(1u64 << 32);
    assert_eq!(two_pow_32.to_u32(), 0);
    assert_eq!(BigInt::from(u32::MAX).to_u32(), u32::MAX);
}

#[test]
fn test_cmp() {
    let nine = BigInt::from(9u32);
    let ten = BigInt::from(10u32);
    assert!(ten > nine);
    assert!(nine < ten);
    assert!(nine <= nine.clone());
    assert!(nine >= nine.clone());
    assert!(nine != ten);
    assert_eq!(nine.cmp(&nine.clone()), Ordering::Equal);

    let a: BigInt = "123456789".parse().unwrap();
    let b: BigInt = "123456798".parse().unwrap();
    assert!(a < b);
    assert!(b > a);
    assert!(!(a > a.clone()));
    assert!(!(a < a.clone()));
}

#[test]
fn test_add() {
    assert_eq!((BigInt::from(999u32) + BigInt::from(1u32)).to_string(), "1000");

    let a: BigInt = "123456789012345678901234567890".parse().unwrap();
    assert_eq!((&a + &BigInt::from(1u32)).to_string(), "123456789012345678901234567891");

    // shorter lhs gets extended
    let mut b = BigInt::from(1u32);
    b += &"99999999999999999999".parse::<BigInt>().unwrap();
    assert_eq!(b.to_string(), "100000000000000000000");

    assert_eq!(&a + &BigInt::zero(), a);

    let total: BigInt = (1u32..=100).map(BigInt::from).sum();
    assert_eq!(total, BigInt::from(5050u32));
    let parts = vec![BigInt::from(7u32), BigInt::from(8u32)];
    assert_eq!(parts.iter().sum::<BigInt>(), BigInt::from(15u32));
}

#[test]
fn test_sub() {
    assert_eq!((BigInt::from(1000u32) - BigInt::from(1u32)).to_string(), "999");

    let a: BigInt = "1000000000000000000000".parse().unwrap();
    let b: BigInt = "999999999999999999999".parse().unwrap();
    let c = &a - &b;
    assert_eq!(c.to_string(), "1");
    assert_eq!(c.limbs, vec![1]);

    let zero = &a - &a;
    assert_eq!(zero.limbs, vec![0]);
    assert!(zero.is_zero());

    let mut d = BigInt::from(12345u32);
    d -= BigInt::from(12300u32);
    assert_eq!(d, BigInt::from(45u32));
}

#[test]
#[should_panic(expected = "attempt to subtract with overflow")]
fn test_sub_underflow() {
    let _ = BigInt::from(1u32) - BigInt::from(2u32);
}

#[test]
fn test_checked_sub() {
    let small = BigInt::from(5u32);
    let large = BigInt::from(50u32);
    assert_eq!(large.checked_sub(&small), Some(BigInt::from(45u32)));
    assert_eq!(small.checked_sub(&large), None);

    let mut value = small.clone();
    assert!(matches!(value.try_sub_assign(&large), Err(Error::Underflow)));
    assert_eq!(value, small);
    value.try_sub_assign(&BigInt::from(5u32)).unwrap();
    assert!(value.is_zero());
}

#[test]
fn test_increment() {
    let mut a = BigInt::from(5u32);
    let old = a.post_increment();
    assert_eq!(old, BigInt::from(5u32));
    assert_eq!(a, BigInt::from(6u32));

    let new = a.increment().clone();
    assert_eq!(new, BigInt::from(7u32));
    assert_eq!(a, new);

    let mut b: BigInt = "999".parse().unwrap();
    b.increment();
    assert_eq!(b.to_string(), "1000");
}

#[test]
fn test_decrement() {
    let mut a: BigInt = "1000".parse().unwrap();
    let old = a.post_decrement();
    assert_eq!(old.to_string(), "1000");
    assert_eq!(a.to_string(), "999");
    assert_eq!(a.limb_count(), 3);

    assert_eq!(a.decrement().to_string(), "998");

    let mut one = BigInt::from(1u32);
    one.decrement();
    assert_eq!(one.limbs, vec![0]);
}

#[test]
#[should_panic(expected = "attempt to subtract with overflow")]
fn test_decrement_zero() {
    BigInt::zero().decrement();
}
