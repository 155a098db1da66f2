//! Command handlers for the Wayfarer CLI

pub mod hotels;
pub mod plan;
pub mod serve;
