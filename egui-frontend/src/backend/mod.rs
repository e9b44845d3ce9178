//! In-process backend. There is no server: every dashboard owns its data in
//! memory for as long as the session keeps it mounted.

pub mod domain;
