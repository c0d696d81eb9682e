//! Command-line front end for the salary predictor.

use std::error::Error;

use rand::thread_rng;

use paygrade::api::{Predictor, PredictorConfig};
use paygrade::catalog::JobCatalog;
use paygrade::insights::{random_tip, salary_distribution, salary_percentile, CareerInsights};
use paygrade::profile::{
    CandidateForm, EducationLevel, FormMode, Gender, IndustrySector, WorkLocation,
};

const DEFAULT_DATASET: &str = "data/employee_income_data.csv";

/// Print command-line usage information.
fn print_usage() {
    println!("Usage:");
    println!("  paygrade [COMMAND] [OPTIONS]\n");
    println!("Commands:");
    println!("  predict            Estimate a salary for one candidate");
    println!("  titles [CSV]       List known job titles from the employee dataset");
    println!("  help               Show this help\n");
    println!("Predict options:");
    println!("  --age N            Candidate age (18-65)");
    println!("  --experience N     Years of experience (0-50)");
    println!("  --gender G         Male | Female | Other");
    println!("  --title T          Job title (free-form)");
    println!("  --education E      Bachelor's | Master's | PhD");
    println!("  --location L       Urban | Suburban | Rural");
    println!("  --industry I       Technology | Finance | Healthcare | Manufacturing | Retail");
    println!("  --extended         Use the extended form rules (industry required)");
    println!("  --schema PATH      Schema artifact (default models/feature_schema.json)");
    println!("  --model PATH       Model artifact (default models/salary_model.json)\n");
    println!("Examples:");
    println!("  paygrade predict --age 30 --experience 5 --gender Male \\");
    println!("      --title \"Software Engineer\" --education Master's --location Urban");
    println!("  paygrade titles data/employee_income_data.csv");
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|pos| args.get(pos + 1))
        .map(String::as_str)
}

fn parse_form(args: &[String]) -> Result<CandidateForm, Box<dyn Error>> {
    let mut form = CandidateForm::new();

    if let Some(age) = flag_value(args, "--age") {
        form.age = Some(age.parse()?);
    }
    if let Some(years) = flag_value(args, "--experience") {
        form.years_experience = Some(years.parse()?);
    }
    if let Some(label) = flag_value(args, "--gender") {
        form.gender = Some(
            Gender::from_label(label).ok_or_else(|| format!("unknown gender '{}'", label))?,
        );
    }
    if let Some(title) = flag_value(args, "--title") {
        form.job_title = Some(title.to_string());
    }
    if let Some(label) = flag_value(args, "--education") {
        form.education = Some(
            EducationLevel::from_label(label)
                .ok_or_else(|| format!("unknown education level '{}'", label))?,
        );
    }
    if let Some(label) = flag_value(args, "--location") {
        form.location = Some(
            WorkLocation::from_label(label)
                .ok_or_else(|| format!("unknown location '{}'", label))?,
        );
    }
    if let Some(label) = flag_value(args, "--industry") {
        form.industry = Some(
            IndustrySector::from_label(label)
                .ok_or_else(|| format!("unknown industry '{}'", label))?,
        );
    }

    Ok(form)
}

fn run_predict(args: &[String]) -> Result<(), Box<dyn Error>> {
    let mode = if args.iter().any(|a| a == "--extended") {
        FormMode::Extended
    } else {
        FormMode::Classic
    };

    let mut config = PredictorConfig::new().with_form_mode(mode);
    if let Some(path) = flag_value(args, "--schema") {
        config = config.with_schema_path(path);
    }
    if let Some(path) = flag_value(args, "--model") {
        config = config.with_model_path(path);
    }

    println!("Loading artifacts...");
    let predictor = Predictor::with_config(config)?;
    println!("  schema: {} columns\n", predictor.schema().len());

    let form = parse_form(args)?;
    let outcome = match predictor.predict(&form) {
        Ok(outcome) => outcome,
        Err(failure) => {
            println!("Submission rejected: {}", failure);
            return Ok(());
        }
    };

    println!(
        "Predicted annual salary for {}: {:.2}",
        outcome.profile.job_title, outcome.salary
    );

    let mut rng = thread_rng();
    let insights = CareerInsights::generate(outcome.salary, &mut rng);
    println!("\nCareer insights:");
    println!(
        "  Your salary is in the top {}% for this role",
        insights.percentile_rank
    );
    println!(
        "  Typical range for your profile: {:.0} - {:.0}",
        insights.typical_low, insights.typical_high
    );
    println!(
        "  5-year growth potential: {:.0}",
        insights.five_year_growth
    );
    println!(
        "  Market percentile: {}",
        salary_percentile(outcome.salary)
    );
    println!("  Tip: {}", random_tip(&mut rng));

    let samples = salary_distribution(outcome.salary, 50, &mut rng);
    let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
    let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean = samples.iter().sum::<f64>() / samples.len() as f64;
    println!(
        "\nSampled salary distribution (n={}): min {:.0}, mean {:.0}, max {:.0}",
        samples.len(),
        min,
        mean,
        max
    );

    Ok(())
}

fn run_titles(args: &[String]) -> Result<(), Box<dyn Error>> {
    let path = args.get(2).map(String::as_str).unwrap_or(DEFAULT_DATASET);
    let catalog = JobCatalog::from_csv(path)?;

    println!("{} job titles in {}:", catalog.len(), path);
    for title in catalog.titles() {
        println!("  {}", title);
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().collect();
    let command = if args.len() > 1 { args[1].as_str() } else { "help" };

    match command {
        "predict" => run_predict(&args),
        "titles" => run_titles(&args),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        _ => {
            println!("Unknown command: {}\n", command);
            print_usage();
            Ok(())
        }
    }
}
