//! Request-level operations over the [`Repository`](crate::db::Repository).
//!
//! Every check that can reject a request runs before anything is written.

pub mod attendance;
pub mod employee;
