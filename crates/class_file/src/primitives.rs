//! Big-endian decoding of fixed-width spans.
//!
//! Every function checks that the span has exactly the width of the value it
//! decodes and reports [`ClassFileError::WidthMismatch`] otherwise.

use byteorder::{BigEndian, ByteOrder};

use crate::{ClassFileError, Result};

type Endian = BigEndian;

fn expect_width(bytes: &[u8], expected: usize) -> Result<&[u8]> {
    if bytes.len() != expected {
        return Err(ClassFileError::WidthMismatch {
            expected,
            found: bytes.len(),
        });
    }
    Ok(bytes)
}

pub fn be_u16(bytes: &[u8]) -> Result<u16> {
    Ok(Endian::read_u16(expect_width(bytes, 2)?))
}

pub fn be_u32(bytes: &[u8]) -> Result<u32> {
    Ok(Endian::read_u32(expect_width(bytes, 4)?))
}

pub fn be_i32(bytes: &[u8]) -> Result<i32> {
    Ok(Endian::read_i32(expect_width(bytes, 4)?))
}

pub fn be_f32(bytes: &[u8]) -> Result<f32> {
    Ok(Endian::read_f32(expect_width(bytes, 4)?))
}

pub fn be_i64(bytes: &[u8]) -> Result<i64> {
    Ok(Endian::read_i64(expect_width(bytes, 8)?))
}

pub fn be_f64(bytes: &[u8]) -> Result<f64> {
    Ok(Endian::read_f64(expect_width(bytes, 8)?))
}

#[cfg(test)]
mod primitives_tests {
    use super::*;

    #[test]
    fn it_should_read_u16_big_endian() {
        assert_eq!(be_u16(&[0x12, 0x34]).unwrap(), 0x1234);
    }

    #[test]
    fn it_should_reject_a_short_u16_span() {
        assert_eq!(
            be_u16(&[0x12]),
            Err(ClassFileError::WidthMismatch {
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn it_should_sign_extend_i32() {
        assert_eq!(be_i32(&[0xff, 0xff, 0xff, 0xd6]).unwrap(), -42);
        assert_eq!(be_i32(&[0x80, 0x00, 0x00, 0x00]).unwrap(), i32::MIN);
        assert_eq!(be_i32(&[0x7f, 0xff, 0xff, 0xff]).unwrap(), i32::MAX);
    }

    #[test]
    fn it_should_read_u32_without_sign() {
        assert_eq!(be_u32(&[0xff, 0xff, 0xff, 0xff]).unwrap(), u32::MAX);
    }

    #[test]
    fn it_should_read_ieee_floats() {
        assert_eq!(be_f32(&[0x3f, 0xc0, 0x00, 0x00]).unwrap(), 1.5);
        assert_eq!(
            be_f64(&[0x40, 0x09, 0x21, 0xfb, 0x54, 0x44, 0x2d, 0x18]).unwrap(),
            std::f64::consts::PI
        );
        assert!(be_f32(&[0x7f, 0xc0, 0x00, 0x00]).unwrap().is_nan());
        assert_eq!(be_f32(&[0xff, 0x80, 0x00, 0x00]).unwrap(), f32::NEG_INFINITY);
    }

    #[test]
    fn it_should_read_i64() {
        assert_eq!(
            be_i64(&[0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe]).unwrap(),
            -2
        );
        assert_eq!(
            be_i64(&[0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00]).unwrap(),
            1 << 32
        );
    }

    #[test]
    fn it_should_reject_wide_spans() {
        assert!(be_i64(&[0; 9]).is_err());
        assert!(be_f32(&[0; 8]).is_err());
    }
}
