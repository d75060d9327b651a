#![allow(dead_code)]

pub mod downstream;
pub mod server;
pub mod service;
