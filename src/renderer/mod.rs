//! Software 3D pipeline
//!
//! Backface culling, painter's-algorithm ordering and planar shadows are done
//! here on the CPU. The [`Backend`] only has to fill flat polygons.

pub mod backend;
pub mod camera;
pub mod frame;
pub mod recorder;
pub mod shadow;
pub mod vertex;
pub mod visibility;

pub use backend::{Backend, Color};
pub use camera::Camera;
pub use frame::{FrameStats, RenderOptions, render_frame};
pub use recorder::{DrawCommand, DrawList, RecordingBackend};
pub use shadow::{project_shadow, project_shadows};
pub use vertex::{DrawVertex, colors};
pub use visibility::{cull_backfaces, mean_depth, painter_sort, triangle_normal};
