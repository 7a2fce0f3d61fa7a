//! Plan command - sizes an experiment without calling any text-generation provider

use clap::Args;

use crate::domain::statistics::{EffectKind, TestDesignParameters};
use crate::infrastructure::services::{ExperimentPlanRequest, PlanningService};

#[derive(Args, Clone, Debug)]
pub struct PlanArgs {
    /// Baseline conversion rate of the control, between 0 and 1
    #[arg(long)]
    pub baseline: f64,

    /// Minimum detectable effect as a fraction of the baseline (0.1 = +10%)
    #[arg(long, conflicts_with = "absolute_effect", required_unless_present = "absolute_effect")]
    pub relative_effect: Option<f64>,

    /// Minimum detectable effect in percentage points (0.01 = +1pp)
    #[arg(long)]
    pub absolute_effect: Option<f64>,

    /// Statistical power (1 - beta)
    #[arg(long, default_value_t = 0.8)]
    pub power: f64,

    /// Significance level (alpha)
    #[arg(long, default_value_t = 0.05)]
    pub alpha: f64,

    /// Number of variants, control included
    #[arg(long, default_value_t = 2)]
    pub variants: u32,

    /// Estimated users entering the experiment per day
    #[arg(long)]
    pub daily_users: u64,
}

impl PlanArgs {
    fn to_request(&self) -> anyhow::Result<ExperimentPlanRequest> {
        let (effect, kind) = match (self.relative_effect, self.absolute_effect) {
            (Some(effect), None) => (effect, EffectKind::Relative),
            (None, Some(effect)) => (effect, EffectKind::Absolute),
            _ => anyhow::bail!("Pass exactly one of --relative-effect or --absolute-effect"),
        };

        let design = TestDesignParameters::new(self.baseline, effect, kind)
            .with_power(self.power)
            .with_significance_level(self.alpha);

        Ok(ExperimentPlanRequest {
            hypothesis: String::new(),
            design,
            variants: self.variants,
            estimated_daily_users: self.daily_users,
        })
    }
}

/// Print the recommended plan and trade-off matrix as JSON
pub fn run(args: PlanArgs) -> anyhow::Result<()> {
    let feasibility = PlanningService::feasibility(&args.to_request()?)?;
    println!("{}", serde_json::to_string_pretty(&feasibility)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Command};
    use clap::Parser;

    fn parse(args: &[&str]) -> Result<PlanArgs, clap::Error> {
        let cli = Cli::try_parse_from(args)?;
        match cli.command {
            Command::Plan(args) => Ok(args),
            _ => panic!("expected plan command"),
        }
    }

    #[test]
    fn test_parse_plan_args() {
        let args = parse(&[
            "abtest-advisor",
            "plan",
            "--baseline",
            "0.05",
            "--relative-effect",
            "0.2",
            "--daily-users",
            "1000",
        ])
        .unwrap();

        assert_eq!(args.power, 0.8);
        assert_eq!(args.alpha, 0.05);
        assert_eq!(args.variants, 2);

        let feasibility = PlanningService::feasibility(&args.to_request().unwrap()).unwrap();
        assert_eq!(feasibility.recommended_plan.sample_size_per_variant, 4080);
    }

    #[test]
    fn test_effect_flags_are_exclusive() {
        let both = parse(&[
            "abtest-advisor",
            "plan",
            "--baseline",
            "0.05",
            "--relative-effect",
            "0.2",
            "--absolute-effect",
            "0.01",
            "--daily-users",
            "1000",
        ]);
        assert!(both.is_err());

        let neither = parse(&["abtest-advisor", "plan", "--baseline", "0.05", "--daily-users", "1000"]);
        assert!(neither.is_err());
    }
}
