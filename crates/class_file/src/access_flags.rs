use bitflags::bitflags;

bitflags! {
    /// Modifiers shared by classes and methods. Some bits mean different
    /// things depending on where they appear, e.g. `SUPER` on a class is
    /// `SYNCHRONIZED` on a method.
    pub struct AccessFlags: u16 {
        const PUBLIC = 0x0001;
        const PRIVATE = 0x0002;
        const PROTECTED = 0x0004;
        const STATIC = 0x0008;
        const FINAL = 0x0010;
        const SUPER = 0x0020;
        const SYNCHRONIZED = 0x0020;
        const BRIDGE = 0x0040;
        const VARARGS = 0x0080;
        const NATIVE = 0x0100;
        const INTERFACE = 0x0200;
        const ABSTRACT = 0x0400;
        const STRICT = 0x0800;
        const SYNTHETIC = 0x1000;
        const ANNOTATION = 0x2000;
        const ENUM = 0x4000;
        const MODULE = 0x8000;
    }
}

#[cfg(test)]
mod access_flags_tests {
    use super::*;

    #[test]
    fn it_should_keep_every_bit() {
        assert_eq!(AccessFlags::from_bits_truncate(0xffff).bits(), 0xffff);
    }

    #[test]
    fn it_should_decode_a_public_super_class() {
        assert_eq!(
            AccessFlags::from_bits_truncate(0x0021),
            AccessFlags::PUBLIC | AccessFlags::SUPER
        );
    }
}
