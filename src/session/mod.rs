//! The interactive session: command dispatch and the line loop.

mod dispatch;
pub mod repl;

pub use dispatch::{Reply, Session};
