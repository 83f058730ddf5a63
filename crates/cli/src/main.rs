use clap::{Parser, Subcommand};
use intake_core::{CaseStore, SessionScope};
use intake_record::{
    Case, CaseDraft, CaseRecord, DifferentialDiagnosis, DurationUnit, Gender, TranslatedResponse,
};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "intake")]
#[command(about = "Intake case store CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a representative intake draft as JSON
    Sample,
    /// Submit an intake draft and show the analysis for the new case
    Submit {
        /// Path to an intake draft JSON file
        file: PathBuf,
        /// Also show the translated answers for this language code
        #[arg(long)]
        language: Option<String>,
        /// Dump the stored record as wire JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("intake=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Sample) => {
            println!("{}", Case::render_draft(&sample_draft())?);
        }
        Some(Commands::Submit {
            file,
            language,
            json,
        }) => {
            tracing::debug!(path = %file.display(), "submitting intake draft");
            let text = std::fs::read_to_string(&file)?;
            let draft = Case::parse_draft(&text)?;

            // One process is one session: the store lives until exit.
            let mut scope = SessionScope::new();
            scope.initialise(CaseStore::new());

            let record = scope.store_mut()?.create_record(draft).clone();
            let store = scope.store()?;

            if json {
                println!("{}", Case::render(&record)?);
                return Ok(());
            }

            print_summary(&record);

            println!();
            print_diagnoses(store.diagnoses());

            println!();
            if store.next_steps().is_empty() {
                println!("No suggested next steps.");
            } else {
                println!("Suggested next steps:");
                for step in store.next_steps() {
                    println!("  - {step}");
                }
            }

            if let Some(language) = language {
                println!();
                match store.translation(&language) {
                    Some(bundle) => {
                        println!("Answers in '{language}':");
                        println!("  Primary concern: {}", bundle.primary_concern);
                        println!("  Additional symptoms: {}", bundle.additional_symptoms);
                        println!("  Medications: {}", bundle.medications);
                        println!("  Allergies: {}", bundle.allergies);
                        println!(
                            "  Pre-existing conditions: {}",
                            bundle.pre_existing_conditions
                        );
                    }
                    None => println!("No translation available for '{language}'."),
                }
            }
        }
        None => {
            println!("intake: see --help for commands");
        }
    }

    Ok(())
}

fn print_summary(record: &CaseRecord) {
    let gender = match (record.gender, record.other_gender.as_deref()) {
        (Gender::Other, Some(detail)) => detail.to_string(),
        (gender, _) => gender.to_wire().to_string(),
    };

    println!("Case {}", record.id);
    println!("Created: {}", record.created_at.to_rfc3339());
    println!("Patient: {} years old, {gender}", record.age);
    println!(
        "Concern: {} (for {} {})",
        record.primary_concern,
        record.symptom_duration,
        record.duration_unit.to_wire()
    );
    if !record.additional_symptoms.is_empty() {
        println!("Also reports: {}", record.additional_symptoms);
    }
    if !record.images.is_empty() {
        println!("Attachments: {}", record.images.len());
    }
}

fn print_diagnoses(diagnoses: &[DifferentialDiagnosis]) {
    if diagnoses.is_empty() {
        println!("No diagnoses available.");
        return;
    }

    println!("Differential diagnoses:");
    for diagnosis in diagnoses {
        println!("  {} ({})", diagnosis.condition, diagnosis.confidence);
        println!("    {}", diagnosis.description);
        for step in &diagnosis.next_steps {
            println!("    - {step}");
        }
    }
}

fn sample_draft() -> CaseDraft {
    CaseDraft {
        primary_concern: "persistent cough".to_string(),
        additional_symptoms: "mild fever in the evenings".to_string(),
        medications: "none".to_string(),
        allergies: "penicillin".to_string(),
        pre_existing_conditions: "asthma".to_string(),
        symptom_duration: 3,
        duration_unit: DurationUnit::Weeks,
        age: 34,
        gender: Gender::Female,
        other_gender: None,
        images: vec![],
        translated_responses: vec![TranslatedResponse {
            language: "es".to_string(),
            primary_concern: "tos persistente".to_string(),
            additional_symptoms: "fiebre leve por las tardes".to_string(),
            medications: "ninguno".to_string(),
            allergies: "penicilina".to_string(),
            pre_existing_conditions: "asma".to_string(),
        }],
        differential_diagnoses: vec![DifferentialDiagnosis {
            condition: "Post-viral cough".to_string(),
            confidence: "moderate".to_string(),
            description: "Lingering cough after a respiratory infection.".to_string(),
            next_steps: vec![
                "Monitor for 1-2 weeks".to_string(),
                "Stay hydrated".to_string(),
            ],
        }],
        suggested_next_steps: vec!["See a GP if the cough lasts beyond four weeks".to_string()],
    }
}
