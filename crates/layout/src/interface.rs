use crate::{ComputedStyle, LayoutError};
use quire_types::geometry::{Line, Region, Size};
use quire_types::{Stroke, TextStyle};
use std::fmt::Debug;

// --- Render Results ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RenderStatus {
    /// No render has been attempted yet. Kept apart from `Done` so a render
    /// that placed zero lines is never mistaken for completion.
    #[default]
    NotStarted,
    /// Everything the node owns has been emitted.
    Done,
    /// The region ran out before the content did. Call `render` again with
    /// a fresh region to continue.
    Incomplete,
}

/// The result of one render attempt.
///
/// `consumed` starts at the origin of the region that was offered. Its
/// height is the vertical space actually used; its width is the node's
/// configured (or maximum line) width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RenderOutcome {
    pub status: RenderStatus,
    pub consumed: Region,
}

impl RenderOutcome {
    pub fn not_started() -> Self {
        Self::default()
    }

    pub fn done(consumed: Region) -> Self {
        Self {
            status: RenderStatus::Done,
            consumed,
        }
    }

    pub fn incomplete(consumed: Region) -> Self {
        Self {
            status: RenderStatus::Incomplete,
            consumed,
        }
    }

    pub fn with_status(status: RenderStatus, consumed: Region) -> Self {
        Self { status, consumed }
    }

    pub fn is_done(&self) -> bool {
        self.status == RenderStatus::Done
    }

    pub fn is_incomplete(&self) -> bool {
        self.status == RenderStatus::Incomplete
    }

    pub fn height(&self) -> i32 {
        self.consumed.height
    }
}

// --- Host Capabilities ---

/// The drawing surface supplied by the host.
///
/// Style references are passed through untouched; only the host knows what
/// font, brush or pen they name.
pub trait Canvas {
    fn measure_text(&self, text: &str, style: &TextStyle) -> Size;

    fn draw_text(&mut self, text: &str, style: &TextStyle, x: f32, y: f32);

    fn draw_line(&mut self, stroke: &Stroke, line: Line);
}

// --- Nodes ---

pub trait LayoutNode: Debug {
    /// Whether at least part of the pending content fits in `region`.
    /// Never changes resume state.
    fn can_begin_render(&self, canvas: &dyn Canvas, region: Region) -> bool;

    /// Emits as much pending content as fits in `region` and remembers where
    /// it stopped.
    fn render(
        &mut self,
        canvas: &mut dyn Canvas,
        region: Region,
    ) -> Result<RenderOutcome, LayoutError>;

    fn style(&self) -> &ComputedStyle;

    fn style_mut(&mut self) -> &mut ComputedStyle;

    /// Configured width, or `0` when intrinsic.
    fn width(&self) -> i32 {
        self.style().box_model.width
    }

    /// Configured height, or `0` when intrinsic.
    fn height(&self) -> i32 {
        self.style().box_model.height
    }
}
