//! Train route search server.
//!
//! A web application that answers: "Which trains run between these two
//! stations on this day?" Train lists come from a remote trains API and
//! are filtered, sorted and cleaned up for display here.

pub mod api;
pub mod cache;
pub mod config;
pub mod domain;
pub mod pipeline;
pub mod recent;
pub mod stations;
pub mod web;
