use crate::{Attributes, ClassHeader, ClassVersion, ConstantPool, MethodInfo};

/// Receives each section of a class file as soon as the parser has decoded it.
///
/// Sections arrive in file order. When decoding fails, the sections decoded
/// before the failure have already been delivered. All methods default to
/// doing nothing.
pub trait DecodeObserver {
    fn magic(&mut self, _magic: [u8; 4]) {}

    fn version(&mut self, _version: &ClassVersion) {}

    fn constant_pool(&mut self, _constant_pool: &ConstantPool) {}

    fn header(&mut self, _header: &ClassHeader, _constant_pool: &ConstantPool) {}

    fn interfaces(&mut self, _count: u16) {}

    fn fields(&mut self, _count: u16) {}

    fn methods(&mut self, _count: u16) {}

    fn method(&mut self, _method: &MethodInfo, _constant_pool: &ConstantPool) {}

    fn attributes(&mut self, _attributes: &Attributes, _constant_pool: &ConstantPool) {}
}

impl DecodeObserver for () {}
