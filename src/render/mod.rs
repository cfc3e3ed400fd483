//! Element tree and drawing traversal
//!
//! This module is organized into submodules:
//! - `defaults`: Default pen and canvas settings, `RenderOptions`
//! - `style`: Pen, brush and colour attributes
//! - `path_builder`: PathCommand and the builder state machine
//! - `path`: the Path leaf element
//! - `group`: the Group composite element
//! - `shapes`: Ellipse, Rectangle and ImageElement leaves
//!
//! Drawing is a template method. [`Element::draw_with`] is the only entry
//! point: it composes the ambient transform with the element's own transform
//! and then hands over to the variant's `draw_element` hook. Variants never
//! see the ambient transform, only the composed one.

pub mod defaults;
pub mod group;
pub mod path;
pub mod path_builder;
pub mod shapes;
pub mod style;

use enum_dispatch::enum_dispatch;

pub use defaults::RenderOptions;
pub use group::Group;
pub use path::Path;
pub use path_builder::{PathBuilder, PathCommand};
pub use shapes::{Ellipse, ImageElement, Rectangle};
pub use style::{Brush, Color, GradientStop, Pen};

use crate::canvas::{Canvas, Platform};
use crate::errors::DrawError;
use crate::log::debug;
use crate::transform::Transform;

/// Per-variant behaviour behind [`Element`]
#[enum_dispatch]
pub(crate) trait Drawable {
    /// The element's own transform
    fn local_transform(&self) -> Transform;

    /// Emit primitives. `transform` already includes every ancestor and the
    /// element's own transform.
    fn draw_element(&self, canvas: &mut dyn Canvas, transform: Transform) -> Result<(), DrawError>;

    fn kind(&self) -> &'static str;
}

/// A node in a scene tree
#[enum_dispatch(Drawable)]
#[derive(Debug, Clone)]
pub enum Element {
    Group(Group),
    Path(Path),
    Ellipse(Ellipse),
    Rectangle(Rectangle),
    Image(ImageElement),
}

impl Element {
    /// Draw this element and everything below it
    pub fn draw(&self, canvas: &mut dyn Canvas) -> Result<(), DrawError> {
        self.draw_with(canvas, Transform::IDENTITY)
    }

    /// Draw under an ambient transform accumulated from ancestors
    pub fn draw_with(&self, canvas: &mut dyn Canvas, ambient: Transform) -> Result<(), DrawError> {
        let effective = ambient * self.local_transform();
        debug!(kind = self.kind(), %effective, "draw element");
        self.draw_element(canvas, effective)
    }

    pub fn transform(&self) -> Transform {
        self.local_transform()
    }

    /// Short lowercase name of the variant
    pub fn kind_name(&self) -> &'static str {
        self.kind()
    }
}

/// Render an element tree into a fresh image canvas from `platform`.
///
/// The background, if any, is filled before the tree is drawn.
pub fn render<P: Platform>(
    platform: &P,
    element: &Element,
    options: &RenderOptions,
) -> Result<P::Image, DrawError> {
    use crate::canvas::ImageCanvas;
    use crate::types::Rect;

    debug!(platform = platform.name(), size = %options.size, "render");
    let mut canvas = platform.create_image_canvas(options.size, options.scale, options.transparency);
    if let Some(background) = options.background {
        canvas.fill_rectangle(Rect::from_size(options.size), background)?;
    }
    element.draw(&mut canvas)?;
    Ok(canvas.image())
}
