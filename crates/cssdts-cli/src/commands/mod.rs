//! Mode dispatch.
//!
//! [`run::execute`] turns parsed arguments into merged options and runs one
//! of generate, diff (`--list-different`) or watch.

pub mod run;

pub use run::{execute, run, widen_pattern};
