use std::convert::TryFrom;

use log::{debug, trace};

use crate::{
    attributes::Attributes,
    class_file::{ClassHeader, MethodInfo},
    constant_pool::{ClassInfo, ConstantTag, NameAndTypeInfo, RefInfo},
    ByteCursor, ClassVersion, DecodeObserver, Feature,
};

use super::{constant_pool::CpInfo, *};

const MAGIC_IDENTIFIER: [u8; 4] = [0xCA, 0xFE, 0xBA, 0xBE];

pub struct Parser<'a, 'o> {
    cursor: ByteCursor<'a>,
    observer: Option<&'o mut dyn DecodeObserver>,
}
impl<'a, 'o> Parser<'a, 'o> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            cursor: ByteCursor::new(buf),
            observer: None,
        }
    }

    pub fn with_observer(buf: &'a [u8], observer: &'o mut dyn DecodeObserver) -> Self {
        Self {
            cursor: ByteCursor::new(buf),
            observer: Some(observer),
        }
    }

    pub fn parse(mut self) -> Result<ClassFile> {
        let magic = self.parse_magic_identifier()?;
        self.notify(|o| o.magic(magic));

        let version = self.parse_version()?;
        debug!("Class file version {}", version);
        self.notify(|o| o.version(&version));

        let constant_pool = self.parse_constant_pool()?;
        debug!(
            "Constant pool has {} items, read {}/{} bytes",
            constant_pool.count(),
            self.cursor.position(),
            self.cursor.len()
        );
        self.notify(|o| o.constant_pool(&constant_pool));

        let header = self.parse_header()?;
        self.notify(|o| o.header(&header, &constant_pool));

        self.parse_unsupported_table(Feature::Interfaces)?;
        self.parse_unsupported_table(Feature::Fields)?;

        let methods_count = self.read_u16()?;
        debug!("Method table has {} entries", methods_count);
        self.notify(|o| o.methods(methods_count));
        let methods = (0..methods_count)
            .map(|_| -> Result<MethodInfo> {
                let method = self.parse_method_info()?;
                self.notify(|o| o.method(&method, &constant_pool));
                Ok(method)
            })
            .collect::<Result<Vec<_>>>()?;

        let attributes_count = self.read_u16()?;
        let attributes = self.parse_attributes(attributes_count)?;
        debug!("Attributes table has {} entries", attributes_count);
        self.notify(|o| o.attributes(&attributes, &constant_pool));

        self.parse_end()?;

        Ok(ClassFile {
            version,
            constant_pool,
            header,
            methods,
            attributes,
        })
    }

    fn notify(&mut self, f: impl FnOnce(&mut dyn DecodeObserver)) {
        if let Some(observer) = self.observer.as_deref_mut() {
            f(observer);
        }
    }

    fn parse_magic_identifier(&mut self) -> Result<[u8; 4]> {
        let bytes = self.cursor.read_fixed(4)?;
        let magic = [bytes[0], bytes[1], bytes[2], bytes[3]];

        if magic != MAGIC_IDENTIFIER {
            return Err(ClassFileError::BadMagicNumber(magic));
        }
        Ok(magic)
    }

    fn parse_version(&mut self) -> Result<ClassVersion> {
        let minor = self.read_u16()?;
        let major = self.read_u16()?;
        ClassVersion::new(major, minor)
    }

    fn parse_constant_pool(&mut self) -> Result<ConstantPool> {
        let constant_pool_count = self.read_u16()?;

        // The declared count is one more than the number of entries.
        let count = (constant_pool_count as usize).saturating_sub(1);
        let mut res = Vec::with_capacity(count);
        for index in 1..=count {
            let cp_info = self.parse_cp_info()?;
            trace!(
                "Constant #{}: {}, read {}/{} bytes",
                index,
                cp_info,
                self.cursor.position(),
                self.cursor.len()
            );
            res.push(cp_info);
        }
        Ok(ConstantPool::new(res))
    }

    fn parse_cp_info(&mut self) -> Result<CpInfo> {
        let offset = self.cursor.position();
        let tag = ConstantTag::try_from(self.read_u8()?)
            .map_err(|tag| ClassFileError::UnknownConstantTag { tag, offset })?;

        match tag {
            ConstantTag::Utf8 => self.parse_utf8(),
            ConstantTag::Integer => self.parse_integer(),
            ConstantTag::Float => self.parse_float(),
            ConstantTag::Long => self.parse_long(),
            ConstantTag::Double => self.parse_double(),
            ConstantTag::Class => self.parse_class_info(),
            ConstantTag::String => self.parse_string(),
            ConstantTag::FieldRef => self.parse_field_ref(),
            ConstantTag::MethodRef => self.parse_method_ref(),
            ConstantTag::InterfaceMethodRef => self.parse_interface_method_ref(),
            ConstantTag::NameAndType => self.parse_name_and_type_info(),
        }
    }

    fn parse_utf8(&mut self) -> Result<CpInfo> {
        let length = self.read_u16()?;
        let offset = self.cursor.position();
        let bytes = self.cursor.read_fixed(length as usize)?;

        let s = std::str::from_utf8(bytes).map_err(|_| ClassFileError::InvalidUtf8 { offset })?;
        Ok(CpInfo::Utf8(s.to_owned()))
    }

    fn parse_integer(&mut self) -> Result<CpInfo> {
        Ok(CpInfo::Integer(self.cursor.read_i32()?))
    }

    fn parse_float(&mut self) -> Result<CpInfo> {
        Ok(CpInfo::Float(self.cursor.read_f32()?))
    }

    fn parse_long(&mut self) -> Result<CpInfo> {
        Ok(CpInfo::Long(self.cursor.read_i64()?))
    }

    fn parse_double(&mut self) -> Result<CpInfo> {
        Ok(CpInfo::Double(self.cursor.read_f64()?))
    }

    fn parse_class_info(&mut self) -> Result<CpInfo> {
        let name_index = self.read_u16()?;

        Ok(CpInfo::Class(ClassInfo { name_index }))
    }

    fn parse_string(&mut self) -> Result<CpInfo> {
        let string_index = self.read_u16()?;

        Ok(CpInfo::String { string_index })
    }

    fn parse_field_ref(&mut self) -> Result<CpInfo> {
        let ref_info = self.parse_ref_info()?;

        Ok(CpInfo::FieldRef(ref_info))
    }

    fn parse_method_ref(&mut self) -> Result<CpInfo> {
        let ref_info = self.parse_ref_info()?;

        Ok(CpInfo::MethodRef(ref_info))
    }

    fn parse_interface_method_ref(&mut self) -> Result<CpInfo> {
        let ref_info = self.parse_ref_info()?;

        Ok(CpInfo::InterfaceMethodRef(ref_info))
    }

    fn parse_name_and_type_info(&mut self) -> Result<CpInfo> {
        let name_index = self.read_u16()?;
        let descriptor_index = self.read_u16()?;

        Ok(CpInfo::NameAndType(NameAndTypeInfo {
            name_index,
            descriptor_index,
        }))
    }

    fn parse_ref_info(&mut self) -> Result<RefInfo> {
        let class_index = self.read_u16()?;
        let name_and_type_index = self.read_u16()?;

        Ok(RefInfo {
            class_index,
            name_and_type_index,
        })
    }

    fn parse_header(&mut self) -> Result<ClassHeader> {
        let access_flags = AccessFlags::from_bits_truncate(self.read_u16()?);
        let this_class = self.read_u16()?;
        let super_class = self.read_u16()?;

        Ok(ClassHeader {
            access_flags,
            this_class,
            super_class,
        })
    }

    fn parse_unsupported_table(&mut self, feature: Feature) -> Result<()> {
        let count = self.read_u16()?;
        debug!("{} table has {} entries", feature, count);
        match feature {
            Feature::Interfaces => self.notify(|o| o.interfaces(count)),
            Feature::Fields => self.notify(|o| o.fields(count)),
        }

        if count != 0 {
            return Err(ClassFileError::Unsupported { feature, count });
        }
        Ok(())
    }

    fn parse_method_info(&mut self) -> Result<MethodInfo> {
        let access_flags = AccessFlags::from_bits_truncate(self.read_u16()?);
        let name_index = self.read_u16()?;
        let descriptor_index = self.read_u16()?;
        let attributes_count = self.read_u16()?;
        let attributes = self.parse_attributes(attributes_count)?;

        Ok(MethodInfo {
            access_flags,
            name_index,
            descriptor_index,
            attributes,
        })
    }

    fn parse_attribute(&mut self) -> Result<Attribute> {
        let attribute_name_index = self.read_u16()?;
        let attribute_length = self.read_u32()?;
        let info = self.cursor.read_fixed(attribute_length as usize)?.to_vec();
        trace!(
            "Attribute #{} ({} bytes), read {}/{} bytes",
            attribute_name_index,
            attribute_length,
            self.cursor.position(),
            self.cursor.len()
        );

        Ok(Attribute {
            attribute_name_index,
            attribute_length,
            info,
        })
    }

    fn parse_attributes(&mut self, attributes_count: u16) -> Result<Attributes> {
        (0..attributes_count)
            .map(|_| self.parse_attribute())
            .collect::<Result<Vec<_>>>()
            .map(Attributes)
    }

    fn parse_end(&self) -> Result<()> {
        if !self.cursor.at_end() {
            return Err(ClassFileError::TrailingOrMissingBytes {
                consumed: self.cursor.position(),
                length: self.cursor.len(),
            });
        }
        Ok(())
    }

    fn read_u32(&mut self) -> Result<u32> {
        self.cursor.read_u32()
    }

    fn read_u16(&mut self) -> Result<u16> {
        self.cursor.read_u16()
    }

    fn read_u8(&mut self) -> Result<u8> {
        self.cursor.read_u8()
    }
}

#[cfg(test)]
mod parse_magic_identifier_tests {
    use super::*;

    #[test]
    fn it_should_be_able_to_parse_the_correct_identifier() {
        assert!(Parser::new(&[0xca, 0xfe, 0xba, 0xbe])
            .parse_magic_identifier()
            .is_ok());
    }

    #[test]
    fn it_should_fail_if_there_is_not_enough_data() {
        assert_eq!(
            Parser::new(&[0xca, 0xfe, 0xba]).parse_magic_identifier(),
            Err(ClassFileError::TruncatedInput {
                offset: 0,
                needed: 4,
                remaining: 3
            })
        );
    }

    #[test]
    fn it_should_fail_if_the_magic_identifier_is_incorrect() {
        assert_eq!(
            Parser::new(&[0xca, 0xfe, 0xda, 0xda]).parse_magic_identifier(),
            Err(ClassFileError::BadMagicNumber([0xca, 0xfe, 0xda, 0xda]))
        );
    }
}






#[cfg(test)]
mod parse_unsupported_table_tests {
    use super::*;

    #[test]
    fn it_should_accept_an_empty_table() {
        assert!(Parser::new(&[0x00, 0x00])
            .parse_unsupported_table(Feature::Fields)
            .is_ok());
    }

    #[test]
    fn it_should_refuse_a_non_empty_table() {
        assert_eq!(
            Parser::new(&[0x00, 0x02]).parse_unsupported_table(Feature::Interfaces),
            Err(ClassFileError::Unsupported {
                feature: Feature::Interfaces,
                count: 2
            })
        );
    }
}
