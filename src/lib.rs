#![warn(rust_2018_idioms)]

pub mod adapter;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod flash;
pub mod handler;
pub mod port;
pub mod test_support;
pub mod view;
