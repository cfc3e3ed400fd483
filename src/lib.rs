//! A platform-independent 2D vector scene model.
//!
//! A scene is a tree of [`Element`]s placed by affine [`Transform`]s. Drawing
//! walks the tree depth-first in child order, composing each node's transform
//! with the one inherited from its ancestors, and emits primitive calls on an
//! abstract [`Canvas`]. Painting pixels is the backend's job.
//!
//! ```
//! use vecscene::{Color, Element, Group, Path, RecordingCanvas, Transform};
//!
//! let triangle = Path::parse("M 0 0 L 100 0 L 50 100 Z")?.with_brush(Color::YELLOW);
//! let scene = Group::new()
//!     .with_transform(Transform::translate(10.0, 10.0))
//!     .with_child(triangle);
//!
//! let mut canvas = RecordingCanvas::new();
//! Element::from(scene).draw(&mut canvas)?;
//! assert_eq!(canvas.commands().len(), 1);
//! # Ok::<(), miette::Report>(())
//! ```

pub mod canvas;
pub mod errors;
pub mod log;
pub mod operation;
pub mod parse;
pub mod render;
pub mod transform;
pub mod types;

pub use canvas::{
    Canvas, DrawCommand, Image, ImageCanvas, NullPlatform, Platform, RecordingCanvas,
    RecordingPlatform,
};
pub use errors::{CanvasError, DrawError, OperationError, PathDataError, TransformError};
pub use operation::{Operation, OperationParser, OperationType};
pub use render::{
    Brush, Color, Element, Ellipse, GradientStop, Group, ImageElement, Path, PathBuilder,
    PathCommand, Pen, Rectangle, RenderOptions, render,
};
pub use transform::Transform;
pub use types::{Point, Rect, Size};
