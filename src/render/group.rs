//! Group: the composite element

use crate::canvas::Canvas;
use crate::errors::DrawError;
use crate::log::trace;
use crate::transform::Transform;

use super::{Drawable, Element};

/// An ordered list of child elements drawn under a shared transform.
///
/// Insertion order is paint order: later children paint over earlier ones.
/// The group owns its children, so a tree cannot be mutated while it is being
/// drawn.
#[derive(Debug, Clone, Default)]
pub struct Group {
    pub transform: Transform,
    children: Vec<Element>,
}

impl Group {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Builder-style `push`
    pub fn with_child(mut self, child: impl Into<Element>) -> Self {
        self.push(child);
        self
    }

    pub fn push(&mut self, child: impl Into<Element>) {
        self.children.push(child.into());
    }

    /// Insert at `index`, shifting later children up (toward the front)
    pub fn insert(&mut self, index: usize, child: impl Into<Element>) {
        self.children.insert(index, child.into());
    }

    pub fn remove(&mut self, index: usize) -> Element {
        self.children.remove(index)
    }

    pub fn clear(&mut self) {
        self.children.clear();
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [Element] {
        &mut self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<E: Into<Element>> FromIterator<E> for Group {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Group {
            transform: Transform::IDENTITY,
            children: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl Extend<Element> for Group {
    fn extend<I: IntoIterator<Item = Element>>(&mut self, iter: I) {
        self.children.extend(iter);
    }
}

impl Drawable for Group {
    fn local_transform(&self) -> Transform {
        self.transform
    }

    fn draw_element(&self, canvas: &mut dyn Canvas, transform: Transform) -> Result<(), DrawError> {
        trace!(children = self.children.len(), "draw group");
        for child in &self.children {
            child.draw_with(canvas, transform)?;
        }
        Ok(())
    }

    fn kind(&self) -> &'static str {
        "group"
    }
}
