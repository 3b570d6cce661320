//! KUCCPS weighted cluster points.
//!
//! A grade sheet goes through three stages: [`engine::selector`] picks the
//! seven subjects that make up the aggregate, [`engine::scorer`] applies the
//! weighted cluster formula per cluster, and [`engine::policy`] decides
//! eligibility, standardizes and assigns a tier. [`engine::ScoringEngine`]
//! runs all three against one cycle's [`reference::ReferenceData`].

pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod recommend;
pub mod reference;
pub mod report;
pub mod telemetry;
pub mod types;
