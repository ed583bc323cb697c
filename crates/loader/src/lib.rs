//! # 3DE4 Loader
//!
//! Loader actions that bring published image sequences into 3DEqualizer4
//! cameras. Host access goes through the [`CameraScene`] trait; the frame
//! range comes from `tde4-sequence`.
//!
//! ```text
//! publish (path: plate.%04d.exr)
//!     │
//!     ├──> SequenceResolver ──> plate.####.exr 1001-1100 x1
//!     │
//!     └──> selected sequence cameras
//!            ├─ rename to shot name (sh010, sh010__01, ...)
//!            └─ sequence attrs, frame offset, path
//! ```

mod actions;
mod config;
mod error;
mod import;
mod scene;

pub use actions::{
    generate_actions, ActionInstance, ActionRequest, ImportAction, PublishPath, PublishRecord,
    UiArea,
};
pub use config::{LoaderConfig, NAME_SEPARATOR_ENV};
pub use error::{LoaderError, Result};
pub use import::{unique_camera_name, CameraAssignment, ImportReport, SequenceLoader};
pub use scene::{CameraId, CameraKind, CameraScene, InMemoryCamera, InMemoryScene};
