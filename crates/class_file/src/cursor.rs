use crate::{primitives, ClassFileError, Result};

/// Forward-only read position over a borrowed class file buffer.
///
/// A read either consumes exactly the bytes it asked for or fails with
/// [`ClassFileError::TruncatedInput`] and leaves the position untouched.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    buf: &'a [u8],
    position: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, position: 0 }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.position
    }

    pub fn at_end(&self) -> bool {
        self.position == self.buf.len()
    }

    pub fn read_fixed(&mut self, n: usize) -> Result<&'a [u8]> {
        if self.remaining() < n {
            return Err(ClassFileError::TruncatedInput {
                offset: self.position,
                needed: n,
                remaining: self.remaining(),
            });
        }

        let span = &self.buf[self.position..self.position + n];
        self.position += n;
        Ok(span)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_fixed(1)?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        primitives::be_u16(self.read_fixed(2)?)
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        primitives::be_u32(self.read_fixed(4)?)
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        primitives::be_i32(self.read_fixed(4)?)
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        primitives::be_f32(self.read_fixed(4)?)
    }

    pub fn read_i64(&mut self) -> Result<i64> {
        primitives::be_i64(self.read_fixed(8)?)
    }

    pub fn read_f64(&mut self) -> Result<f64> {
        primitives::be_f64(self.read_fixed(8)?)
    }
}
