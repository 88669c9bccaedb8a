#![allow(dead_code)]

mod client;
pub mod common;

pub use client::run_app;
