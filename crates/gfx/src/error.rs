//! Unrecoverable resource failures.
//!
//! Surface allocation limits and asset decode failures indicate environment
//! problems (out of memory, corrupt install) the engine cannot work around.
//! The policy is fail-fast: print a diagnostic and exit the process, never
//! return an error. See [`fatal`].

use std::fmt;

/// Resource failures that terminate the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceError {
    /// Surface dimensions outside the allocatable range.
    SurfaceDims { w: i32, h: i32 },
    /// An asset could not be read or decoded.
    ImageDecode { path: String },
}

impl fmt::Display for ResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceError::SurfaceDims { w, h } => {
                write!(f, "cannot allocate a {}x{} surface", w, h)
            }
            ResourceError::ImageDecode { path } => {
                write!(f, "couldn't load {}", path)
            }
        }
    }
}

/// Print a diagnostic and terminate.
///
/// A `ResourceError` has no recovery path. Keep this a `!` return; do not
/// swap it for a `Result`.
pub fn fatal(err: ResourceError) -> ! {
    eprintln!("[Gfx] fatal: {}", err);
    std::process::exit(1);
}
