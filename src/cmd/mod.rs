//! CLI command implementations.
//!
//! Each submodule owns one or more related `Commands` variants:
//!
//! | Module   | Commands handled                              |
//! |----------|-----------------------------------------------|
//! | `serve`  | `Serve`                                       |
//! | `issues` | `List`, `Submit`, `Status`, `Show`, `Stats`   |

pub mod issues;
pub mod serve;

pub use issues::{SubmitArgs, cmd_list, cmd_show, cmd_stats, cmd_status, cmd_submit};
pub use serve::cmd_serve;
