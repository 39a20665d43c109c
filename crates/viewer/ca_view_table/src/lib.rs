//! The results table.
//!
//! A table is built from a non-empty column set. Its first column, the anchor, decides how
//! the table can be partitioned: every axis of the anchor becomes a [`Sheet`] listing the
//! values found along that axis, so the user can browse the table one partition at a time.
//!
//! Sorting, filtering and column layout live in [`TableDisplayState`], which is owned by the
//! UI and passed through to the [`TableDriver`] untouched.

mod assemble;
mod display_state;
mod driver;
mod sheet;

pub use self::{
    assemble::{TableOutput, assemble_table},
    display_state::TableDisplayState,
    driver::{TableDriver, TableHandle},
    sheet::{Sheet, SheetOption},
};
