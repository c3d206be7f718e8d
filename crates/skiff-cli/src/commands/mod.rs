//! Command implementations

pub(crate) mod create;
pub(crate) mod down;
pub(crate) mod reset;
pub(crate) mod status;
pub(crate) mod up;
