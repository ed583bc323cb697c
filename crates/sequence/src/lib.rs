//! # 3DE4 Sequence
//!
//! Frame range inference for image sequences referenced by a padded
//! placeholder (`plate.%04d.exr`).
//!
//! ## Flow
//!
//! ```text
//! plate.%04d.exr
//!     │
//!     ├──> Template (placeholder, width)
//!     │      └─> glob: plate.*.exr
//!     │
//!     ├──> Directory listing
//!     │      └─> frames: 1001, 1002, ...
//!     │
//!     └──> Step inference
//!            └─> plate.####.exr 1001-1100 x1
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use tde4_sequence::SequenceResolver;
//!
//! fn main() -> tde4_sequence::Result<()> {
//!     let range = SequenceResolver::new().resolve("/plates/sh010/plate.%04d.exr")?;
//!     println!("{} {}-{} x{}", range.hashed_path, range.start, range.end, range.step);
//!     Ok(())
//! }
//! ```

mod config;
mod error;
mod range;
mod resolver;
mod template;

pub use config::{ResolverConfig, LENIENT_ENV};
pub use error::{Result, SequenceError};
pub use range::SequenceRange;
pub use resolver::{ensure_file_exists, resolve, SequenceResolver};
pub use template::{FrameSpec, SequenceTemplate};
