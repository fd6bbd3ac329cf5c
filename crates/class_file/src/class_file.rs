use crate::{
    attributes::Attributes, constant_pool::ClassInfo, matches_cp_info, parser::Parser,
    AccessFlags, Attribute, ClassVersion, ConstantPool, DecodeObserver, Result,
};

#[derive(Debug, PartialEq, Clone)]
pub struct ClassFile {
    pub version: ClassVersion,
    pub constant_pool: ConstantPool,
    pub header: ClassHeader,
    pub methods: Vec<MethodInfo>,
    pub attributes: Attributes,
}
impl ClassFile {
    pub fn parse(bytes: &[u8]) -> Result<ClassFile> {
        Parser::new(bytes).parse()
    }

    pub fn parse_with(bytes: &[u8], observer: &mut dyn DecodeObserver) -> Result<ClassFile> {
        Parser::with_observer(bytes, observer).parse()
    }

    pub fn super_class(&self) -> Result<Option<&str>> {
        // Only java/lang/Object has no direct superclass, marked by a zero index.
        if self.header.super_class == 0 {
            return Ok(None);
        }

        let ClassInfo { name_index } =
            matches_cp_info!(self.constant_pool, self.header.super_class, Class)?;

        Ok(Some(
            matches_cp_info!(self.constant_pool, *name_index, Utf8)?.as_str(),
        ))
    }

    pub fn class_name(&self) -> Result<&str> {
        let ClassInfo { name_index } =
            matches_cp_info!(self.constant_pool, self.header.this_class, Class)?;

        Ok(matches_cp_info!(self.constant_pool, *name_index, Utf8)?.as_str())
    }

    pub fn method_name(&self, method: &MethodInfo) -> Result<&str> {
        Ok(matches_cp_info!(self.constant_pool, method.name_index, Utf8)?.as_str())
    }

    pub fn method_descriptor(&self, method: &MethodInfo) -> Result<&str> {
        Ok(matches_cp_info!(self.constant_pool, method.descriptor_index, Utf8)?.as_str())
    }

    pub fn attribute_name(&self, attribute: &Attribute) -> Result<&str> {
        Ok(matches_cp_info!(self.constant_pool, attribute.attribute_name_index, Utf8)?.as_str())
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct ClassHeader {
    pub access_flags: AccessFlags,
    pub this_class: u16,
    pub super_class: u16,
}

#[derive(Debug, PartialEq, Clone)]
pub struct MethodInfo {
    pub access_flags: AccessFlags,
    pub name_index: u16,
    pub descriptor_index: u16,
    pub attributes: Attributes,
}
