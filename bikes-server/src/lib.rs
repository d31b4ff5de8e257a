//! Dublin bike-share station catalog server.
//!
//! Exposes a catalog of docking stations (identity, capacity, live
//! availability, status) through a filter/sort/paginate query surface,
//! backed by either an in-memory snapshot or a remote document store
//! with local fallback. A background task perturbs availability to
//! simulate live telemetry.

pub mod cache;
pub mod domain;
pub mod query;
pub mod repo;
pub mod simulator;
pub mod snapshot;
pub mod store;
pub mod validate;
pub mod web;
