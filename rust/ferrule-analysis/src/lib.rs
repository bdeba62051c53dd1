//! Analysis variant of the native utility library.
//!
//! A second independently buildable shared library over the same core. It
//! exports the `dll_`-prefixed counterparts of the four demo routines with
//! its own output wording, plus two routines only this variant carries:
//! `random_0_to_1` and `error_function`.

use std::ffi::CStr;
use std::io::{self, Write};
use std::os::raw::{c_char, c_double, c_int};

use ferrule_core::sizes::unit;
use ferrule_core::TypeSizes;

/// Line prefix used by [`dll_print`].
pub const DESCRIBE_PREFIX: &str = "Analysis library received:";

/// Add one to `a`. Wraps at the top of the `int` range.
#[no_mangle]
pub extern "C" fn dll_inc(a: c_int) -> c_int {
    ferrule_core::increment(a)
}

/// Print the string quoted on one stdout line and return its byte length.
///
/// # Safety
///
/// `s` must be a non-null pointer to a NUL-terminated string that stays
/// valid for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn dll_print(s: *const c_char) -> c_int {
    let bytes = CStr::from_ptr(s).to_bytes();
    let len = ferrule_core::describe_to(DESCRIBE_PREFIX, bytes, &mut io::stdout().lock())
        .unwrap_or(bytes.len());
    len as c_int
}

/// Principal square root; NaN for negative input.
#[no_mangle]
pub extern "C" fn dll_sqrt(x: c_double) -> c_double {
    ferrule_core::sqroot(x)
}

/// Print the four primitive-type sizes to stdout. Always returns 0.
#[no_mangle]
pub extern "C" fn dll_reportsizes() -> c_int {
    let sizes = TypeSizes::measure();
    let mut out = io::stdout().lock();
    for (name, bytes) in sizes.entries() {
        let _ = writeln!(out, "{} occupies {} {}", name, bytes, unit(bytes));
    }
    0
}

/// A uniformly distributed value in `[0, 1)`.
#[no_mangle]
pub extern "C" fn random_0_to_1() -> c_double {
    ferrule_core::random_unit()
}

/// The Gauss error function of `x`.
#[no_mangle]
pub extern "C" fn error_function(x: c_double) -> c_double {
    ferrule_core::erf(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;

    #[test]
    fn inc_matches_demo_semantics() {
        assert_eq!(dll_inc(999), 1000);
        assert_eq!(dll_inc(c_int::MAX), c_int::MIN);
    }

    #[test]
    fn print_returns_byte_length() {
        let s = CString::new("Greetings from Python").unwrap();
        assert_eq!(unsafe { dll_print(s.as_ptr()) }, 21);
    }

    #[test]
    fn sqrt_matches_host_math() {
        assert_eq!(dll_sqrt(123456.0), 123456.0_f64.sqrt());
        assert!(dll_sqrt(-1.0).is_nan());
    }

    #[test]
    fn reportsizes_always_succeeds() {
        assert_eq!(dll_reportsizes(), 0);
    }

    #[test]
    fn random_stays_in_unit_interval() {
        for _ in 0..100 {
            let r = random_0_to_1();
            assert!((0.0..1.0).contains(&r));
        }
    }

    #[test]
    fn error_function_known_value() {
        assert!((error_function(2.0) - 0.995_322).abs() < 1e-6);
        assert_eq!(error_function(0.0), 0.0);
    }
}
