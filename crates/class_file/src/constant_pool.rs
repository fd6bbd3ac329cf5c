use std::{convert::TryFrom, fmt};

use crate::{ClassFileError, Result};

#[derive(Debug, Default, PartialEq, Clone)]
pub struct ConstantPool {
    cp_infos: Vec<CpInfo>,
}
impl ConstantPool {
    pub fn new(cp_infos: Vec<CpInfo>) -> Self {
        Self { cp_infos }
    }

    /// The count as declared in the class file, one more than the number of entries.
    pub fn count(&self) -> u16 {
        self.cp_infos.len() as u16 + 1
    }

    pub fn len(&self) -> usize {
        self.cp_infos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cp_infos.is_empty()
    }

    /// Looks up a 1-based constant pool index.
    pub fn get(&self, index: u16) -> Result<&CpInfo> {
        (index as usize)
            .checked_sub(1)
            .and_then(|i| self.cp_infos.get(i))
            .ok_or(ClassFileError::InvalidReference {
                index,
                count: self.count(),
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = (u16, &CpInfo)> {
        self.cp_infos
            .iter()
            .enumerate()
            .map(|(i, cp_info)| (i as u16 + 1, cp_info))
    }
}
impl<'a> IntoIterator for &'a ConstantPool {
    type Item = &'a CpInfo;
    type IntoIter = std::slice::Iter<'a, CpInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.cp_infos.iter()
    }
}

#[macro_export]
macro_rules! matches_cp_info {
    ($cp:expr, $index:expr, $i:ident) => {
        match $cp.get($index)? {
            $crate::CpInfo::$i(ref n) => Ok(n),
            c => Err($crate::ClassFileError::UnexpectedConstantPoolEntry(
                stringify!($i),
                c.clone(),
            )),
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstantTag {
    Utf8 = 1,
    Integer = 3,
    Float = 4,
    Long = 5,
    Double = 6,
    Class = 7,
    String = 8,
    FieldRef = 9,
    MethodRef = 10,
    InterfaceMethodRef = 11,
    NameAndType = 12,
}
impl TryFrom<u8> for ConstantTag {
    type Error = u8;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            1 => Ok(ConstantTag::Utf8),
            3 => Ok(ConstantTag::Integer),
            4 => Ok(ConstantTag::Float),
            5 => Ok(ConstantTag::Long),
            6 => Ok(ConstantTag::Double),
            7 => Ok(ConstantTag::Class),
            8 => Ok(ConstantTag::String),
            9 => Ok(ConstantTag::FieldRef),
            10 => Ok(ConstantTag::MethodRef),
            11 => Ok(ConstantTag::InterfaceMethodRef),
            12 => Ok(ConstantTag::NameAndType),
            _ => Err(value),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum CpInfo {
    Utf8(String),
    Integer(i32),
    Float(f32),
    Long(i64),
    Double(f64),
    Class(ClassInfo),
    String { string_index: u16 },
    FieldRef(RefInfo),
    MethodRef(RefInfo),
    InterfaceMethodRef(RefInfo),
    NameAndType(NameAndTypeInfo),
}
impl CpInfo {
    pub fn tag(&self) -> ConstantTag {
        match self {
            CpInfo::Utf8(_) => ConstantTag::Utf8,
            CpInfo::Integer(_) => ConstantTag::Integer,
            CpInfo::Float(_) => ConstantTag::Float,
            CpInfo::Long(_) => ConstantTag::Long,
            CpInfo::Double(_) => ConstantTag::Double,
            CpInfo::Class(_) => ConstantTag::Class,
            CpInfo::String { .. } => ConstantTag::String,
            CpInfo::FieldRef(_) => ConstantTag::FieldRef,
            CpInfo::MethodRef(_) => ConstantTag::MethodRef,
            CpInfo::InterfaceMethodRef(_) => ConstantTag::InterfaceMethodRef,
            CpInfo::NameAndType(_) => ConstantTag::NameAndType,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self.tag() {
            ConstantTag::Utf8 => "string",
            ConstantTag::Integer => "integer",
            ConstantTag::Float => "float",
            ConstantTag::Long => "long",
            ConstantTag::Double => "double",
            ConstantTag::Class => "class-reference",
            ConstantTag::String => "string-reference",
            ConstantTag::FieldRef => "field-reference",
            ConstantTag::MethodRef => "method-reference",
            ConstantTag::InterfaceMethodRef => "interface-method-reference",
            ConstantTag::NameAndType => "name-type-descriptor",
        }
    }
}
impl fmt::Display for CpInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.kind())?;
        match self {
            CpInfo::Utf8(s) => write!(f, "{:?}", s),
            CpInfo::Integer(n) => write!(f, "{}", n),
            CpInfo::Float(n) => write!(f, "{}", n),
            CpInfo::Long(n) => write!(f, "{}", n),
            CpInfo::Double(n) => write!(f, "{}", n),
            CpInfo::Class(ClassInfo { name_index }) => write!(f, "#{}", name_index),
            CpInfo::String { string_index } => write!(f, "#{}", string_index),
            CpInfo::FieldRef(r) | CpInfo::MethodRef(r) | CpInfo::InterfaceMethodRef(r) => {
                write!(f, "#{}.#{}", r.class_index, r.name_and_type_index)
            }
            CpInfo::NameAndType(n) => write!(f, "#{}:#{}", n.name_index, n.descriptor_index),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct RefInfo {
    pub class_index: u16,
    pub name_and_type_index: u16,
}

#[derive(Debug, PartialEq, Clone)]
pub struct ClassInfo {
    // Expected to point at a Utf8 entry holding the binary class name in
    // internal form, e.g. "java/lang/Object".
    pub name_index: u16,
}

#[derive(Debug, PartialEq, Clone)]
pub struct NameAndTypeInfo {
    pub name_index: u16,
    pub descriptor_index: u16,
}

#[cfg(test)]
mod constant_pool_tests {
    use super::*;

    fn pool() -> ConstantPool {
        ConstantPool::new(vec![
            CpInfo::Utf8("java/lang/Object".into()),
            CpInfo::Class(ClassInfo { name_index: 1 }),
        ])
    }

    #[test]
    fn it_should_report_the_declared_count() {
        assert_eq!(ConstantPool::default().count(), 1);
        assert_eq!(pool().count(), 3);
    }

    #[test]
    fn it_should_index_from_one() {
        assert_eq!(
            pool().get(1).unwrap(),
            &CpInfo::Utf8("java/lang/Object".into())
        );
        assert_eq!(pool().iter().map(|(i, _)| i).collect::<Vec<_>>(), [1, 2]);
    }

    #[test]
    fn it_should_reject_out_of_range_indices() {
        assert_eq!(
            pool().get(0),
            Err(ClassFileError::InvalidReference { index: 0, count: 3 })
        );
        assert_eq!(
            pool().get(3),
            Err(ClassFileError::InvalidReference { index: 3, count: 3 })
        );
    }

    #[test]
    fn it_should_map_every_known_tag() {
        for tag in [1u8, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12] {
            assert_eq!(ConstantTag::try_from(tag).map(|t| t as u8), Ok(tag));
        }
        assert_eq!(ConstantTag::try_from(2), Err(2));
        assert_eq!(ConstantTag::try_from(15), Err(15));
    }

    #[test]
    fn it_should_display_entries_with_their_kind() {
        assert_eq!(
            pool().get(1).unwrap().to_string(),
            "string \"java/lang/Object\""
        );
        assert_eq!(pool().get(2).unwrap().to_string(), "class-reference #1");
        assert_eq!(
            CpInfo::MethodRef(RefInfo {
                class_index: 2,
                name_and_type_index: 7
            })
            .to_string(),
            "method-reference #2.#7"
        );
    }
}
