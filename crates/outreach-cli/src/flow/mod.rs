//! The four workflow stages plus the shutdown watcher, run strictly in
//! order: login → people search → connect dialog → watch. Each takes the one
//! live [`Session`](outreach_browser::Session) by reference.

mod connect;
mod login;
mod search;
mod watch;

pub use connect::prepare_connect;
pub use login::login;
pub use search::people_search;
pub use watch::watch_until_closed;
