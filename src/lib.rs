//! Dec BigInt \
//! This crate provides:
//! - [`BigInt`]: arbitrary-precision unsigned integers kept as decimal limbs, with comparison, addition,
//!   subtraction, increment/decrement, conversion to native integers and decimal text I/O.

mod big_int;
mod big_num_cache;
mod big_num_constants;
mod error;
mod stream;

pub use big_int::BigInt;
pub use big_num_constants::{Limb, BASE, NUMBER_OF_ZEROS};
pub use error::{Error, Result};

#[cfg(test)]
mod tests {
    use crate::BigInt;

    #[test]
    fn it_works() {
        let a: BigInt = "10000000000000".parse().unwrap();
        let b: BigInt = "900000000000".parse().unwrap();
        println!("a = {}", a);
        println!("a + b = {}", &a + &b);
        println!("a - b = {}", &a - &b);
        assert_eq!((&a + &b).to_string(), "10900000000000");
        assert_eq!((&a - &b).to_string(), "9100000000000");
    }
}
