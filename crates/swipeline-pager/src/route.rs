//! Host-facing navigation value types.

/// An opaque page identifier owned by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub key: String,
}

impl Route {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

/// The host's authoritative navigation state, re-supplied every render.
///
/// `index` is the committed current page. The route order is externally
/// authoritative and may grow or shrink between renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub index: usize,
    pub routes: Vec<Route>,
}

impl NavigationState {
    pub fn new(index: usize, routes: Vec<Route>) -> Self {
        Self { index, routes }
    }
}

/// Measured size of the paging viewport, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Layout {
    pub width: f32,
    pub height: f32,
}

impl Layout {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}
