#![recursion_limit = "256"]

pub mod api;
#[cfg(feature = "ssr")]
pub mod api_impl;
pub mod components;
pub mod components_impl;
#[cfg(feature = "ssr")]
pub mod config;
pub mod error;
#[cfg(feature = "ssr")]
pub mod planner_client;
pub mod submission;
pub mod suggestions;
pub mod types;
