//! CLI command implementations.

pub(crate) mod export;
pub(crate) mod watch;

pub(crate) use export::ExportArgs;
pub(crate) use watch::WatchArgs;
