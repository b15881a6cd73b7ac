//! Part writers: each produces one structural section of the HTML document.
mod body;
mod head;

pub use body::Body;
pub use head::Head;

use super::context::RenderContext;
use super::lines::MarkupBuffer;

/// A structural section of the output document.
pub trait Part {
    /// Append this part's lines to `out`.
    fn write<'a>(&self, ctx: &mut RenderContext<'a>, out: &mut MarkupBuffer);
}
