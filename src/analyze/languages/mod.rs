//! Per-language analyzer definitions.
//!
//! Java and C++ build their reports by hand (they pull names out of the
//! source for the setup guide); the rest are static [`Profile`] tables.
//!
//! [`Profile`]: super::Profile

pub(crate) mod cpp;
pub(crate) mod csharp;
pub(crate) mod go;
pub(crate) mod java;
pub(crate) mod kotlin;
pub(crate) mod php;
pub(crate) mod powershell;
pub(crate) mod ruby;
pub(crate) mod rust_lang;
pub(crate) mod scala;
pub(crate) mod shell;
pub(crate) mod sql;
pub(crate) mod swift;
