//! Command-line form shell for obesity-category prediction.
//!
//! Collects the sixteen questionnaire fields, loads the model artifact
//! once, runs a single prediction, and prints the resolved category.

mod display;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use somascore_core::RawInput;
use somascore_model::{ModelArtifact, encoded_row, predict};

/// Predict an obesity category from personal and lifestyle attributes.
///
/// Numeric flags are range-checked; categorical flags accept free text
/// so that values outside the listed options reach the model as
/// out-of-vocabulary rather than being rejected at the door.
#[derive(Debug, Parser)]
#[command(name = "somascore", version, about)]
struct Args {
    /// Path to the model artifact bundle.
    #[arg(
        long,
        env = "SOMASCORE_ARTIFACT",
        default_value = "artifacts/obesity_model.json"
    )]
    artifact: PathBuf,

    /// Print the assembled encoded record before normalization.
    #[arg(long)]
    show_record: bool,

    /// Age in years (1-120).
    #[arg(long, default_value_t = 25, value_parser = clap::value_parser!(u32).range(1..=120))]
    age: u32,

    /// Height in meters (0.5-2.5).
    #[arg(long, default_value_t = 1.70)]
    height: f64,

    /// Weight in kilograms (20-200).
    #[arg(long, default_value_t = 70.0)]
    weight: f64,

    /// Vegetable-eating frequency per week (0-10).
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(0..=10))]
    fcvc: u32,

    /// Main meals per day (1-10).
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..=10))]
    ncp: u32,

    /// Daily water intake in litres (0-5).
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(0..=5))]
    ch2o: u32,

    /// Physical-activity frequency per week (0-7).
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(0..=7))]
    faf: u32,

    /// Daily screen time in hours (0-5).
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(0..=5))]
    tue: u32,

    /// Gender: Male or Female.
    #[arg(long, default_value = "Male")]
    gender: String,

    /// Frequently eats high-calorie food: yes or no.
    #[arg(long, default_value = "yes")]
    favc: String,

    /// Smoker: yes or no.
    #[arg(long, default_value = "yes")]
    smoke: String,

    /// Alcohol frequency: no, Sometimes, Frequently, or Always.
    #[arg(long, default_value = "no")]
    calc: String,

    /// Snacking between meals: no, Sometimes, Frequently, or Always.
    #[arg(long, default_value = "no")]
    caec: String,

    /// Main transportation: Public_Transportation, Automobile, Walking,
    /// Motorbike, or Bike.
    #[arg(long, default_value = "Public_Transportation")]
    mtrans: String,

    /// Family history of obesity: yes or no.
    #[arg(long, default_value = "yes")]
    family_history: String,

    /// Tracks calorie intake: yes or no.
    #[arg(long, default_value = "yes")]
    scc: String,
}

impl Args {
    fn to_input(&self) -> RawInput {
        RawInput {
            age: self.age,
            height_m: self.height,
            weight_kg: self.weight,
            fcvc: self.fcvc,
            ncp: self.ncp,
            ch2o: self.ch2o,
            faf: self.faf,
            tue: self.tue,
            gender: self.gender.clone(),
            favc: self.favc.clone(),
            smoke: self.smoke.clone(),
            calc: self.calc.clone(),
            caec: self.caec.clone(),
            mtrans: self.mtrans.clone(),
            family_history: self.family_history.clone(),
            scc: self.scc.clone(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    tracing::info!("somascore v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();
    let input = args.to_input();

    let artifact = ModelArtifact::load(&args.artifact)
        .with_context(|| format!("loading model artifact from {}", args.artifact.display()))?;
    let ctx = artifact.into_context();

    display::print_input_card(&input);

    if args.show_record {
        let row = encoded_row(&input)?;
        display::print_encoded_row(&row);
    }

    let prediction = predict(&ctx, &input)?;
    display::print_prediction(&prediction);

    Ok(())
}
