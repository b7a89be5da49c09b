//! Noughts Render Library
//!
//! Drawing surface abstraction and board rendering for Noughts.
//! A recording surface is always available; the Vello surface is behind the
//! `vello-renderer` feature.

mod display_list;
mod renderer;
mod surface;

#[cfg(feature = "vello-renderer")]
mod vello_impl;

pub use display_list::{DisplayList, DrawCommand};
pub use renderer::{RenderContext, RenderResult, RendererError, draw_board, render_frame};
pub use surface::{Surface, TextMetrics};

#[cfg(feature = "vello-renderer")]
pub use vello_impl::VelloSurface;
