use std::io::{BufRead, ErrorKind};

use log::trace;

use crate::BigInt;
use crate::error::{Error, Result};

// 实现流式读取
impl BigInt {
    /// Reads one whitespace-delimited token from `reader` and parses it as a
    /// decimal string. Leading whitespace is skipped; the delimiter after the
    /// token is left in the reader.
    pub fn read_from<R: BufRead + ?Sized>(reader: &mut R) -> Result<BigInt> {
        let token = read_token(reader)?;
        let token = String::from_utf8_lossy(&token);
        trace!("read BigInt token {:?}", token);
        token.parse()
    }
}

fn read_token<R: BufRead + ?Sized>(reader: &mut R) -> Result<Vec<u8>> {
    let mut token = Vec::new();
    loop {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        if buf.is_empty() {
            break;
        }

        let mut used = 0;
        let mut done = false;
        for byte in buf {
            if byte.is_ascii_whitespace() {
                if !token.is_empty() {
                    done = true;
                    break;
                }
            } else {
                token.push(*byte);
            }
            used += 1;
        }
        reader.consume(used);

        if done {
            break;
        }
    }

    if token.is_empty() {
        return Err(Error::EmptyInput);
    }
    Ok(token)
}

#[test]
fn test_read_from() {
    use std::io::{BufReader, Read};

    let mut input = "  42\n00017 123456789012345678901234567890\t".as_bytes();
    assert_eq!(BigInt::read_from(&mut input).unwrap(), BigInt::from(42u32));
    assert_eq!(BigInt::read_from(&mut input).unwrap(), BigInt::from(17u32));
    assert_eq!(
        BigInt::read_from(&mut input).unwrap().to_string(),
        "123456789012345678901234567890"
    );
    assert!(matches!(BigInt::read_from(&mut input), Err(Error::EmptyInput)));

    // tokens split across buffer refills
    let mut reader = BufReader::with_capacity(2, "98765 4321".as_bytes());
    assert_eq!(BigInt::read_from(&mut reader).unwrap(), BigInt::from(98765u32));
    let mut rest = String::new();
    reader.read_to_string(&mut rest).unwrap();
    assert_eq!(rest, " 4321");
}

#[test]
fn test_read_from_invalid() {
    let mut input = "12x4 5".as_bytes();
    assert!(matches!(
        BigInt::read_from(&mut input),
        Err(Error::InvalidDigit { digit: 'x', position: 2 })
    ));
    assert_eq!(BigInt::read_from(&mut input).unwrap(), BigInt::from(5u32));

    let mut input: &[u8] = &[b'1', 0xff, b' '];
    assert!(matches!(
        BigInt::read_from(&mut input),
        Err(Error::InvalidDigit { digit: char::REPLACEMENT_CHARACTER, .. })
    ));

    let mut input = "   \n".as_bytes();
    assert!(matches!(BigInt::read_from(&mut input), Err(Error::EmptyInput)));
}

#[test]
fn test_write() {
    use std::io::Write;

    let mut out = Vec::new();
    let a: BigInt = "1000000000000000000000".parse().unwrap();
    write!(out, "{} {}", a, BigInt::zero()).unwrap();
    assert_eq!(out, b"1000000000000000000000 0");
}
