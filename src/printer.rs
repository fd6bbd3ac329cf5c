use std::io::{self, Write};

use classdump_class_file::{
    Attribute, Attributes, ClassHeader, ClassVersion, ConstantPool, DecodeObserver, MethodInfo,
};

/// Prints every decoded section as soon as the parser reports it.
///
/// Observer callbacks cannot fail, so the first write error is kept and
/// handed back by [`Printer::finish`]; later output is skipped.
pub struct Printer<W: Write> {
    w: W,
    error: Option<io::Error>,
}

impl<W: Write> Printer<W> {
    pub fn new(w: W) -> Self {
        Self { w, error: None }
    }

    pub fn finish(mut self) -> io::Result<W> {
        if let Some(error) = self.error.take() {
            return Err(error);
        }
        self.w.flush()?;
        Ok(self.w)
    }

    fn section(&mut self, lines: &[String]) {
        if self.error.is_some() {
            return;
        }

        let result = lines
            .iter()
            .try_for_each(|line| writeln!(self.w, "{}", line))
            .and_then(|_| writeln!(self.w));
        if let Err(error) = result {
            self.error = Some(error);
        }
    }
}

fn resolve(constant_pool: &ConstantPool, index: u16) -> String {
    match constant_pool.get(index) {
        Ok(cp_info) => format!("{} => {}", index, cp_info),
        Err(_) => format!("{} => <invalid>", index),
    }
}

fn describe_attribute(attribute: &Attribute, constant_pool: &ConstantPool) -> String {
    format!(
        "{} ({} bytes)",
        resolve(constant_pool, attribute.attribute_name_index),
        attribute.attribute_length
    )
}

impl<W: Write> DecodeObserver for Printer<W> {
    fn magic(&mut self, magic: [u8; 4]) {
        let hex: String = magic.iter().map(|b| format!("{:02X}", b)).collect();
        self.section(&[format!("Checked magic number: {}", hex)]);
    }

    fn version(&mut self, version: &ClassVersion) {
        self.section(&[
            format!(
                "Using Java major version: {} ({})",
                version.major,
                version.platform_name()
            ),
            format!("Using Java minor version: {}", version.minor),
        ]);
    }

    fn constant_pool(&mut self, constant_pool: &ConstantPool) {
        let mut lines = vec![format!("Constant pool has {} items", constant_pool.count())];
        lines.extend(
            constant_pool
                .iter()
                .map(|(index, cp_info)| format!("    {} : {}", index, cp_info)),
        );
        self.section(&lines);
    }

    fn header(&mut self, header: &ClassHeader, constant_pool: &ConstantPool) {
        self.section(&[
            format!("Access flags: {:#x}", header.access_flags.bits()),
            format!(
                "Reference to 'this' class: {}",
                resolve(constant_pool, header.this_class)
            ),
            format!(
                "Reference to 'super' class: {}",
                resolve(constant_pool, header.super_class)
            ),
        ]);
    }

    fn interfaces(&mut self, count: u16) {
        self.section(&[format!("Interface table has {} entries", count)]);
    }

    fn fields(&mut self, count: u16) {
        self.section(&[format!("Field table has {} entries", count)]);
    }

    fn methods(&mut self, count: u16) {
        self.section(&[format!("Method table has {} entries", count)]);
    }

    fn method(&mut self, method: &MethodInfo, constant_pool: &ConstantPool) {
        let mut lines = vec![
            "Method:".to_owned(),
            format!("    Access flags: {:#x}", method.access_flags.bits()),
            format!("    Name: {}", resolve(constant_pool, method.name_index)),
            format!(
                "    Descriptor: {}",
                resolve(constant_pool, method.descriptor_index)
            ),
            format!("    Additional attributes: {}", method.attributes.len()),
        ];
        lines.extend(
            method
                .attributes
                .iter()
                .map(|a| format!("        Attr: {}", describe_attribute(a, constant_pool))),
        );
        self.section(&lines);
    }

    fn attributes(&mut self, attributes: &Attributes, constant_pool: &ConstantPool) {
        let mut lines = vec![format!("Attributes table has {} entries:", attributes.len())];
        lines.extend(
            attributes
                .iter()
                .map(|a| format!("    {}", describe_attribute(a, constant_pool))),
        );
        self.section(&lines);
    }
}
