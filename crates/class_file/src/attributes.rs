use crate::{constant_pool::CpInfo, Attribute};

use super::ConstantPool;

#[derive(Debug, Default, PartialEq, Clone)]
pub struct Attributes(pub Vec<Attribute>);
impl Attributes {
    pub fn find_by_name(&self, name: &str, constant_pool: &ConstantPool) -> Option<&Attribute> {
        for a in &self.0 {
            let Ok(CpInfo::Utf8(s)) = constant_pool.get(a.attribute_name_index) else {
                continue;
            };

            if s == name {
                return Some(a);
            }
        }

        None
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Attribute> {
        self.0.iter()
    }
}

#[cfg(test)]
mod find_by_name_tests {
    use super::*;

    fn attribute(attribute_name_index: u16, info: &[u8]) -> Attribute {
        Attribute {
            attribute_name_index,
            attribute_length: info.len() as u32,
            info: info.to_vec(),
        }
    }

    #[test]
    fn it_should_find_an_attribute_by_its_resolved_name() {
        let constant_pool = ConstantPool::new(vec![
            CpInfo::Utf8("Code".into()),
            CpInfo::Utf8("SourceFile".into()),
        ]);
        let attributes = Attributes(vec![attribute(1, &[1, 2]), attribute(2, &[0, 3])]);

        assert_eq!(
            attributes.find_by_name("SourceFile", &constant_pool),
            Some(&attribute(2, &[0, 3]))
        );
        assert_eq!(attributes.find_by_name("Deprecated", &constant_pool), None);
    }

    #[test]
    fn it_should_skip_attributes_with_dangling_names() {
        let constant_pool = ConstantPool::new(vec![CpInfo::Utf8("Code".into())]);
        let attributes = Attributes(vec![attribute(9, &[]), attribute(1, &[])]);

        assert_eq!(
            attributes.find_by_name("Code", &constant_pool),
            Some(&attribute(1, &[]))
        );
    }
}
