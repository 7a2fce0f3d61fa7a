//! Analyze command - compares a control and a treatment from raw counts

use clap::Args;

use crate::domain::statistics::{ConversionMetrics, Variant};

#[derive(Args, Clone, Debug)]
pub struct AnalyzeArgs {
    /// Users exposed to the control
    #[arg(long)]
    pub control_users: u64,

    /// Conversions in the control
    #[arg(long)]
    pub control_conversions: u64,

    /// Users exposed to the treatment
    #[arg(long)]
    pub treatment_users: u64,

    /// Conversions in the treatment
    #[arg(long)]
    pub treatment_conversions: u64,
}

impl AnalyzeArgs {
    fn metrics(&self) -> anyhow::Result<ConversionMetrics> {
        let control = Variant::new("control", self.control_users, self.control_conversions)?;
        let treatment =
            Variant::new("treatment", self.treatment_users, self.treatment_conversions)?;

        Ok(ConversionMetrics::compare(&control, &treatment))
    }
}

/// Print the conversion metrics as JSON
pub fn run(args: AnalyzeArgs) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&args.metrics()?)?);

    Ok(())
}
