use crate::infra::{
    parse_circumstance, parse_circumstance_fraction, parse_crime_type, parse_penalty,
};
use clap::Args;
use dosimetry::config::AppConfig;
use dosimetry::error::AppError;
use dosimetry::sentencing::report::format_years;
use dosimetry::sentencing::{
    CircumstanceFraction, CrimeType, JudicialCircumstance, JudicialCircumstances,
    SentencingEngine, SentencingOutcome, SentencingReport, SentencingRequest,
    SubstitutionAnswers,
};

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Minimum committed penalty, in years
    #[arg(long, value_parser = parse_penalty)]
    pub(crate) minimum: f64,
    /// Maximum committed penalty, in years
    #[arg(long, value_parser = parse_penalty)]
    pub(crate) maximum: f64,
    /// Whether the bounds are the simple or the qualified range
    #[arg(long, value_parser = parse_crime_type, default_value = "simple")]
    pub(crate) crime_type: CrimeType,
    /// Judicial circumstance assessed negatively (repeatable)
    #[arg(long = "negative", value_parser = parse_circumstance)]
    pub(crate) negatives: Vec<JudicialCircumstance>,
    /// Fraction applied per negative circumstance (1/8 or 1/6). Defaults to configuration.
    #[arg(long, value_parser = parse_circumstance_fraction)]
    pub(crate) fraction: Option<CircumstanceFraction>,
    /// Number of aggravating circumstances
    #[arg(long, default_value_t = 0)]
    pub(crate) aggravating: u32,
    /// Number of mitigating circumstances
    #[arg(long, default_value_t = 0)]
    pub(crate) mitigating: u32,
    /// Increase fraction such as 1/3 or 0.5 (repeatable)
    #[arg(long = "increase")]
    pub(crate) increases: Vec<String>,
    /// Decrease fraction such as 1/3 or 0,5 (repeatable)
    #[arg(long = "decrease")]
    pub(crate) decreases: Vec<String>,
    /// Defendant is a recidivist
    #[arg(long)]
    pub(crate) recidivist: bool,
    /// Crime involved violence or serious threat to a person
    #[arg(long)]
    pub(crate) violent_crime: bool,
    /// Defendant has a prior intentional-crime conviction
    #[arg(long)]
    pub(crate) prior_intentional_conviction: bool,
    /// Judicial circumstances do not indicate substitution is sufficient
    #[arg(long)]
    pub(crate) insufficient_circumstances: bool,
    /// Substitution is socially recommendable despite recidivism in a different crime
    #[arg(long)]
    pub(crate) recidivism_exception: bool,
    /// Print the outcome and report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

impl EvaluateArgs {
    fn to_request(&self) -> SentencingRequest {
        SentencingRequest {
            crime_type: self.crime_type,
            minimum_penalty: self.minimum,
            maximum_penalty: self.maximum,
            circumstances: JudicialCircumstances::from_negatives(self.negatives.iter().copied()),
            circumstance_fraction: self.fraction,
            aggravating_count: self.aggravating,
            mitigating_count: self.mitigating,
            increase_fractions: self.increases.clone(),
            decrease_fractions: self.decreases.clone(),
            recidivist: self.recidivist,
            substitution: SubstitutionAnswers {
                non_violent: !self.violent_crime,
                non_recidivist: !self.prior_intentional_conviction,
                sufficient_circumstances: !self.insufficient_circumstances,
                recidivism_exception: self.recidivism_exception,
            },
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print each sample outcome as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let engine = SentencingEngine::new(config.sentencing);

    let request = args.to_request();
    let outcome = engine.evaluate(&request)?;

    if args.json {
        print_json(&outcome)
    } else {
        render_outcome(&outcome, &outcome.report());
        Ok(())
    }
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let engine = SentencingEngine::new(config.sentencing);

    println!("Sentencing dosimetry demo");
    println!(
        "  Default circumstance fraction: {}",
        engine.config().default_circumstance_fraction
    );

    for (title, request) in demo_cases() {
        println!("\n== {title} ==");
        let outcome = engine.evaluate(&request)?;
        if args.json {
            print_json(&outcome)?;
        } else {
            render_outcome(&outcome, &outcome.report());
        }
    }

    Ok(())
}

fn print_json(outcome: &SentencingOutcome) -> Result<(), AppError> {
    let payload = serde_json::json!({
        "outcome": outcome,
        "report": outcome.report(),
    });
    let rendered = serde_json::to_string_pretty(&payload).map_err(std::io::Error::from)?;
    println!("{rendered}");
    Ok(())
}

fn demo_cases() -> Vec<(&'static str, SentencingRequest)> {
    let first_offender = SentencingRequest::new(1.0, 4.0);

    let mut graduated = SentencingRequest::new(1.0, 4.0);
    graduated.circumstances = JudicialCircumstances::from_negatives([
        JudicialCircumstance::Culpability,
        JudicialCircumstance::Consequences,
    ]);
    graduated.aggravating_count = 1;
    graduated.increase_fractions = vec!["1/3".to_string()];
    graduated.decrease_fractions = vec!["1/2".to_string()];

    let mut recidivist = SentencingRequest::new(2.0, 8.0);
    recidivist.crime_type = CrimeType::Qualified;
    recidivist.circumstances = JudicialCircumstances::from_negatives([
        JudicialCircumstance::Culpability,
        JudicialCircumstance::CriminalRecord,
        JudicialCircumstance::Motives,
        JudicialCircumstance::CrimeCircumstances,
    ]);
    recidivist.aggravating_count = 1;
    recidivist.recidivist = true;
    recidivist.substitution.non_recidivist = false;

    let mut mitigated = SentencingRequest::new(2.0, 8.0);
    mitigated.mitigating_count = 2;
    mitigated.decrease_fractions = vec!["2/3".to_string(), "one third".to_string()];

    vec![
        ("First offender at the legal minimum", first_offender),
        ("Graduated base with increase and decrease", graduated),
        ("Recidivist with unfavourable circumstances", recidivist),
        ("Mitigation held at the legal minimum", mitigated),
    ]
}

fn render_outcome(outcome: &SentencingOutcome, report: &SentencingReport) {
    println!(
        "{} crime, committed penalties {} to {}",
        outcome.crime_type.label(),
        format_years(outcome.range.minimum()),
        format_years(outcome.range.maximum())
    );

    for entry in &report.phases {
        println!("\n{}: {}", entry.phase_label, format_years(entry.value));
        for note in &entry.notes {
            println!("  - {note}");
        }
    }

    println!("\nInitial regime: {}", report.regime_summary);
    if let Some(qualifier) = outcome.regime.qualifier {
        println!("  Note: {qualifier}");
    }

    println!(
        "Substitution (Art. 44 CP): {}",
        if report.substitution_eligible {
            "eligible"
        } else {
            "not eligible"
        }
    );
    println!("  {}", report.substitution_summary);
}
