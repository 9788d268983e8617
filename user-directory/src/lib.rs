//! In-memory user directory served over HTTP.
//!
//! See `README.md` for the endpoints and the JSON shape. Modules:
//!
//! - [`user`] defines the user record exchanged with clients.
//! - [`store`] owns every record and the id cursor behind one reader/writer
//!   lock.
//! - [`routes`] maps HTTP requests onto store operations.
//! - [`error`] turns decode failures and missing users into responses.
//! - [`server`] runs the router on a bound listener until shutdown.
//! - [`cli`] parses the command line.

pub mod cli;
pub mod error;
pub mod routes;
pub mod server;
pub mod store;
pub mod user;
