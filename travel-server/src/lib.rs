//! Travel time estimation server.
//!
//! A web application that answers: "how long would it take a snail, a
//! cheetah or a beam of light to cover this walking route?"

pub mod cache;
pub mod config;
pub mod domain;
pub mod estimate;
pub mod registry;
pub mod routing;
pub mod session;
pub mod web;
