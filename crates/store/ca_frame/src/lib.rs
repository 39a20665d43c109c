//! Column set composition.
//!
//! The workflow produces raw column sets (results, boxplot data, stacked bar data). Before
//! they reach a chart, they are enriched with every metadata column that can be joined on
//! the sample axis, so the user can color and facet by any covariate. See [`compose`].
//!
//! Frames are created through a [`FrameDriver`], which is implemented by the host.
//! [`HashFrameDriver`] is a self-contained implementation for tests and headless use.

mod compose;
mod driver;

pub use self::{
    compose::{ConditionalExclusion, compose, joinable_metadata},
    driver::{FrameDriver, FrameHandle, HashFrameDriver},
};
