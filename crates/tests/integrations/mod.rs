//! Integration tests exercising the server surface end to end.

mod hello;
mod logging_setup;
