//! CLI module for the A/B test advisor
//!
//! Provides subcommands for:
//! - `serve`: HTTP API server
//! - `plan`: offline sample size, duration and trade-off matrix
//! - `analyze`: offline conversion metrics for a control/treatment pair

pub mod analyze;
pub mod plan;
pub mod serve;

use clap::{Parser, Subcommand};

/// A/B Test Advisor - plan and analyze conversion experiments
#[derive(Parser)]
#[command(name = "abtest-advisor")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve,

    /// Size an experiment and print the plan as JSON
    Plan(plan::PlanArgs),

    /// Compare two variants and print the metrics as JSON
    Analyze(analyze::AnalyzeArgs),
}
