//! Output sinks for finished composites.

pub(crate) mod sink;
