//! Host-side loader for the native utility libraries.
//!
//! Wraps a dynamically loaded utility library behind a typed call surface so
//! callers never touch raw symbols. Both shipped variants expose the same
//! four operations under different symbol names; [`SymbolTable`] carries the
//! names and [`UtilityLibrary`] resolves them per call.

mod resolve;

pub use resolve::{candidate_names, resolve_library_path};

use std::ffi::CString;
use std::os::raw::{c_char, c_double, c_int};
use std::path::Path;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Typed function pointer aliases
// ---------------------------------------------------------------------------

type IncrementFn = unsafe extern "C" fn(c_int) -> c_int;
type DescribeFn = unsafe extern "C" fn(*const c_char) -> c_int;
type SqrootFn = unsafe extern "C" fn(c_double) -> c_double;
type ReportSizesFn = unsafe extern "C" fn() -> c_int;
type RandomUnitFn = unsafe extern "C" fn() -> c_double;
type ErfFn = unsafe extern "C" fn(c_double) -> c_double;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum HostError {
    #[error("cannot load library '{path}': {source}")]
    Load {
        path: String,
        source: libloading::Error,
    },
    #[error("symbol '{name}' not found in library: {source}")]
    MissingSymbol {
        name: &'static str,
        source: libloading::Error,
    },
    #[error("string argument contains an interior NUL byte")]
    InteriorNul(#[from] std::ffi::NulError),
    #[error("the '{variant}' symbol set does not include '{routine}'")]
    Unsupported {
        variant: &'static str,
        routine: &'static str,
    },
}

// ---------------------------------------------------------------------------
// SymbolTable
// ---------------------------------------------------------------------------

/// The exported symbol names of one library variant.
///
/// The two shipped variants agree on the four-operation contract and differ
/// only in naming; the analysis variant additionally exports a random draw
/// and the error function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolTable {
    /// Short variant name, used in error messages and CLI flags.
    pub variant: &'static str,
    pub increment: &'static str,
    pub describe: &'static str,
    pub sqroot: &'static str,
    pub report_sizes: &'static str,
    pub random_unit: Option<&'static str>,
    pub erf: Option<&'static str>,
}

/// Symbol names exported by the demo variant.
pub const DEMO_SYMBOLS: SymbolTable = SymbolTable {
    variant: "demo",
    increment: "increment",
    describe: "printstring",
    sqroot: "sqroot",
    report_sizes: "reportsizes",
    random_unit: None,
    erf: None,
};

/// Symbol names exported by the analysis variant.
pub const ANALYSIS_SYMBOLS: SymbolTable = SymbolTable {
    variant: "analysis",
    increment: "dll_inc",
    describe: "dll_print",
    sqroot: "dll_sqrt",
    report_sizes: "dll_reportsizes",
    random_unit: Some("random_0_to_1"),
    erf: Some("error_function"),
};

impl SymbolTable {
    /// Look up a shipped symbol set by variant name.
    pub fn for_variant(name: &str) -> Option<Self> {
        match name {
            "demo" => Some(DEMO_SYMBOLS),
            "analysis" => Some(ANALYSIS_SYMBOLS),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// UtilityLibrary
// ---------------------------------------------------------------------------

/// A loaded utility library plus the symbol set to call it with.
///
/// Dropping the value unloads the library, so the handle must outlive every
/// call made through it (the borrow checker enforces this: symbols are
/// resolved per call and never stored).
#[derive(Debug)]
pub struct UtilityLibrary {
    lib: libloading::Library,
    symbols: SymbolTable,
}

impl UtilityLibrary {
    /// Load the library at `path` and bind it to `symbols`.
    pub fn open(path: &Path, symbols: SymbolTable) -> Result<Self, HostError> {
        let lib = unsafe {
            libloading::Library::new(path).map_err(|source| HostError::Load {
                path: path.display().to_string(),
                source,
            })?
        };
        Ok(Self { lib, symbols })
    }

    /// The symbol set this handle was opened with.
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    fn get<T>(&self, name: &'static str) -> Result<libloading::Symbol<'_, T>, HostError> {
        unsafe {
            self.lib
                .get(name.as_bytes())
                .map_err(|source| HostError::MissingSymbol { name, source })
        }
    }

    /// Call the increment routine.
    pub fn increment(&self, a: i32) -> Result<i32, HostError> {
        let f = self.get::<IncrementFn>(self.symbols.increment)?;
        Ok(unsafe { f(a) })
    }

    /// Call the describe routine; the library prints the string and returns
    /// its byte length.
    pub fn describe(&self, text: &str) -> Result<i32, HostError> {
        let c_text = CString::new(text)?;
        let f = self.get::<DescribeFn>(self.symbols.describe)?;
        // c_text stays alive until after the call returns.
        Ok(unsafe { f(c_text.as_ptr()) })
    }

    /// Call the square root routine.
    pub fn sqroot(&self, x: f64) -> Result<f64, HostError> {
        let f = self.get::<SqrootFn>(self.symbols.sqroot)?;
        Ok(unsafe { f(x) })
    }

    /// Call the size-report routine; the library prints four lines and
    /// returns its status code.
    pub fn report_sizes(&self) -> Result<i32, HostError> {
        let f = self.get::<ReportSizesFn>(self.symbols.report_sizes)?;
        Ok(unsafe { f() })
    }

    /// Call the random draw routine, if this variant exports one.
    pub fn random_unit(&self) -> Result<f64, HostError> {
        let name = self.symbols.random_unit.ok_or(HostError::Unsupported {
            variant: self.symbols.variant,
            routine: "random_unit",
        })?;
        let f = self.get::<RandomUnitFn>(name)?;
        Ok(unsafe { f() })
    }

    /// Call the error function routine, if this variant exports one.
    pub fn erf(&self, x: f64) -> Result<f64, HostError> {
        let name = self.symbols.erf.ok_or(HostError::Unsupported {
            variant: self.symbols.variant,
            routine: "erf",
        })?;
        let f = self.get::<ErfFn>(name)?;
        Ok(unsafe { f(x) })
    }
}
