//! Demo variant of the native utility library.
//!
//! Builds as a shared library exporting four C-ABI routines: `increment`,
//! `printstring`, `sqroot`, and `reportsizes`. All logic lives in
//! `ferrule-core`; this crate only owns the symbol names and the output
//! wording of this variant.

use std::ffi::CStr;
use std::io;
use std::os::raw::{c_char, c_double, c_int};

/// Line prefix used by [`printstring`].
pub const DESCRIBE_PREFIX: &str = "String passed library is:";

/// Add one to `a`. Wraps at the top of the `int` range.
#[no_mangle]
pub extern "C" fn increment(a: c_int) -> c_int {
    ferrule_core::increment(a)
}

/// Print the string quoted on one stdout line and return its byte length.
///
/// # Safety
///
/// `s` must be a non-null pointer to a NUL-terminated string that stays
/// valid for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn printstring(s: *const c_char) -> c_int {
    let bytes = CStr::from_ptr(s).to_bytes();
    // printf-style contract: a failed console write is not reported.
    let len = ferrule_core::describe_to(DESCRIBE_PREFIX, bytes, &mut io::stdout().lock())
        .unwrap_or(bytes.len());
    len as c_int
}

/// Principal square root; NaN for negative input.
#[no_mangle]
pub extern "C" fn sqroot(x: c_double) -> c_double {
    ferrule_core::sqroot(x)
}

/// Print the four primitive-type sizes to stdout. Always returns 0.
#[no_mangle]
pub extern "C" fn reportsizes() -> c_int {
    let _ = ferrule_core::TypeSizes::measure().write_report(&mut io::stdout().lock());
    0
}
