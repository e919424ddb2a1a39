//! Community issue reports: server and client halves.
//!
//! ## Module Map
//!
//! ```text
//! ┌──────────────────────┐   HTTP   ┌───────────────────────────────────────┐
//! │  board.rs            │ ───────> │  server.rs  (Router, ServerConfig)    │
//! │   ├─ form.rs         │          │    └─ api.rs  (handlers, AppState)    │
//! │   ├─ feed.rs         │ <─────── │         │                             │
//! │   └─ client.rs       │   JSON   │         v                             │
//! └──────────────────────┘          │  store.rs  (IssueStore, in-memory)    │
//!                                   └───────────────────────────────────────┘
//! ```
//!
//! | Module   | Responsibility                                              |
//! |----------|-------------------------------------------------------------|
//! | `models` | `Issue`, `IssueStatus`, request/envelope types, field limits |
//! | `store`  | Validated create, list, lookup, status update               |
//! | `api`    | Route handlers and `ApiError` → HTTP status mapping          |
//! | `server` | Full router (status page, CORS, tracing) and listener        |
//! | `client` | `reqwest` wrappers for the REST calls                        |
//! | `feed`   | `FeedFilter` projection and `IssueStats` aggregation         |
//! | `form`   | `IssueForm` state producing the create payload               |
//! | `board`  | Cached list with refresh / add / status-change operations    |

pub mod api;
pub mod board;
pub mod client;
pub mod feed;
pub mod form;
pub mod models;
pub mod server;
pub mod store;
