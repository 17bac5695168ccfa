#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Presentation adapter for the migration map dashboard.
//!
//! Shapes aggregation-engine output into renderer-ready structures:
//! fixed color tokens per category, formatted numeric labels, chart
//! series, the filtered heat-layer feed, and the explicit renderer
//! configuration. The renderer itself is an external collaborator, a
//! pure sink that draws whatever these modules hand it.

pub mod chart;
pub mod format;
pub mod heat;
pub mod theme;
