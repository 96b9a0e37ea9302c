//! Concurrent load generator for conferencing rooms: expands a run config
//! into session targets, launches one staggered worker per target against an
//! injected [`driver::SessionDriver`], holds each session open for a fixed
//! duration, then leaves and reports per-target outcomes.

pub mod config;
pub mod driver;
pub mod orchestrator;
pub mod target;
