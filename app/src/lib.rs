//! Terminal front end for the todo view.
//!
//! `main` parses [`config::Config`], installs logging, builds a
//! [`transport::HttpTransport`], and hands stdin/stdout to [`session::run`].

pub mod command;
pub mod config;
pub mod logging;
pub mod screen;
pub mod session;
pub mod transport;
