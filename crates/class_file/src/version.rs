use std::fmt;

use crate::{ClassFileError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassVersion {
    pub major: u16,
    pub minor: u16,
}

impl ClassVersion {
    /// Builds a version, rejecting majors the decoder does not know about.
    pub fn new(major: u16, minor: u16) -> Result<Self> {
        match platform_name(major) {
            Some(_) => Ok(Self { major, minor }),
            None => Err(ClassFileError::UnsupportedVersion(major)),
        }
    }

    pub fn platform_name(&self) -> &'static str {
        platform_name(self.major).unwrap_or("unknown")
    }
}

impl fmt::Display for ClassVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{} ({})", self.major, self.minor, self.platform_name())
    }
}

fn platform_name(major: u16) -> Option<&'static str> {
    match major {
        45 => Some("JDK 1.1"),
        46 => Some("JDK 1.2"),
        47 => Some("JDK 1.3"),
        48 => Some("JDK 1.4"),
        49 => Some("J2SE 5.0"),
        50 => Some("J2SE 6.0"),
        _ => None,
    }
}
