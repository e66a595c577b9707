//! Internal helpers.

pub(crate) mod text;
