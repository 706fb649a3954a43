//! HTTP surface of the scaffold server, split out so integration tests can
//! drive the router in-process.

pub mod http;
