//! Primitive-type size reporting.
//!
//! Sizes are measured at runtime from the C ABI type aliases rather than
//! hardcoded, so the report stays correct on any target the toolchain
//! supports.

use serde::Serialize;
use std::io::{self, Write};
use std::mem::size_of;
use std::os::raw::{c_char, c_double, c_float, c_int};

/// Byte sizes of the four native primitive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TypeSizes {
    pub int_bytes: usize,
    pub float_bytes: usize,
    pub double_bytes: usize,
    pub char_bytes: usize,
}

impl TypeSizes {
    /// Measure the sizes on the current target.
    pub fn measure() -> Self {
        Self {
            int_bytes: size_of::<c_int>(),
            float_bytes: size_of::<c_float>(),
            double_bytes: size_of::<c_double>(),
            char_bytes: size_of::<c_char>(),
        }
    }

    /// The report rows in emission order: `(type name, byte size)`.
    pub fn entries(&self) -> [(&'static str, usize); 4] {
        [
            ("int", self.int_bytes),
            ("float", self.float_bytes),
            ("double", self.double_bytes),
            ("char", self.char_bytes),
        ]
    }

    /// Write the four-line report with the standard wording.
    pub fn write_report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for (name, bytes) in self.entries() {
            writeln!(out, "Size of {}: {} {}", name, bytes, unit(bytes))?;
        }
        Ok(())
    }
}

/// Singular "byte" for a size of one, "bytes" otherwise.
pub fn unit(bytes: usize) -> &'static str {
    if bytes == 1 {
        "byte"
    } else {
        "bytes"
    }
}
