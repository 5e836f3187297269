//! Data layer for the Oronno outreach portal: customer, call, feedback,
//! campaign, compliance, alerting, and script datasets with the filtering
//! and aggregation each page runs over them.

pub mod abtest;
pub mod alerts;
pub mod calls;
pub mod campaigns;
pub mod config;
pub mod consent;
pub mod customers;
pub mod dashboard;
pub mod dnc;
pub mod error;
pub mod feedback;
pub mod filter;
pub mod orchestrator;
pub mod roster;
pub mod scripts;
pub mod seed;
pub mod sentiment;
pub mod session;
pub mod state;
pub mod stats;
pub mod types;
