// https://docs.oracle.com/javase/specs/jvms/se6/html/ClassFile.doc.html

mod access_flags;
pub mod attributes;
mod class_file;
#[macro_use]
mod constant_pool;
mod cursor;
mod error;
mod observer;
mod parser;
pub mod primitives;
mod version;

use std::fmt;

pub use self::class_file::{ClassFile, ClassHeader, MethodInfo};
pub use access_flags::AccessFlags;
pub use attributes::Attributes;
pub use constant_pool::{ClassInfo, ConstantPool, ConstantTag, CpInfo, NameAndTypeInfo, RefInfo};
pub use cursor::ByteCursor;
pub use error::{ClassFileError, Feature};
pub use observer::DecodeObserver;
pub use parser::Parser;
pub use version::ClassVersion;

pub type Result<T, E = ClassFileError> = std::result::Result<T, E>;

#[derive(PartialEq, Clone)]
pub struct Attribute {
    pub attribute_name_index: u16,
    pub attribute_length: u32,
    pub info: Vec<u8>,
}
impl fmt::Debug for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attribute")
            .field("attribute_name_index", &self.attribute_name_index)
            .field("info", &format!("({} bytes)", self.info.len()))
            .finish()
    }
}
