//! Request extractors shared by handlers.
//!
//! - [`client::ClientInfo`] -- Caller IP and user agent, recorded on visits.

pub mod client;
