//! client for the NextBus public transit JSON feed.
//!
//! the [`feed`] module builds command requests against the feed endpoint and
//! decodes each command's response into the records of [`record`]. the
//! [`app`] module wraps these in the `nextbus` command line tool.
pub mod app;
pub mod feed;
pub mod record;
pub mod util;
