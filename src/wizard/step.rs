//! Wizard step definitions
//!
//! A step is an immutable bundle of render tokens. The wizard core stores
//! and forwards them but never looks inside.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Opaque handle to something the renderer knows how to draw
#[derive(Clone)]
pub struct RenderToken(Arc<dyn Any + Send + Sync>);

impl RenderToken {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self(Arc::new(value))
    }

    /// Recover the renderer's value, if it has type `T`
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }

    /// Whether both handles point at the same value
    pub fn ptr_eq(&self, other: &RenderToken) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for RenderToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RenderToken(..)")
    }
}

/// One unit of wizard content
#[derive(Debug, Clone)]
pub struct Step {
    header: Option<RenderToken>,
    content: RenderToken,
    footer: Option<RenderToken>,
}

impl Step {
    /// Create a step with content only
    pub fn new(content: RenderToken) -> Self {
        Self {
            header: None,
            content,
            footer: None,
        }
    }

    /// Set the header token
    pub fn with_header(mut self, header: RenderToken) -> Self {
        self.header = Some(header);
        self
    }

    /// Set the footer token
    pub fn with_footer(mut self, footer: RenderToken) -> Self {
        self.footer = Some(footer);
        self
    }

    pub fn header(&self) -> Option<&RenderToken> {
        self.header.as_ref()
    }

    pub fn content(&self) -> &RenderToken {
        &self.content
    }

    pub fn footer(&self) -> Option<&RenderToken> {
        self.footer.as_ref()
    }
}
