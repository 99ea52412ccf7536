//! Test utilities for the testkit.
//!
//! Only available when the `testing` feature is enabled or during tests:
//!
//! ```toml
//! [dependencies]
//! common = { path = "../common", features = ["testing"] }
//! ```

mod recording_cursor;

pub use recording_cursor::RecordingCursor;
