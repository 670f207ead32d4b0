use anyhow::Context;
use clap::Parser;
use formgate::core::forms::HEALTH_FIELDS;
use formgate::core::health;
use formgate::utils::logger;
use formgate::{
    builtin_form, CliConfig, ConsolePresenter, Disposition, Form, FormEngine, SchemaForm,
    Submission,
};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting formgate CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let mut submission = config
        .submission()
        .context("could not read the submission")?;

    let form: Box<dyn Form> = match &config.schema {
        Some(path) => {
            let schema_form = SchemaForm::from_file(path)
                .with_context(|| format!("could not load form schema from {}", path))?;
            Box::new(schema_form)
        }
        None => builtin_form(&config.form).context("no such built-in form")?,
    };

    // Derive BMI when weight and height were supplied instead of the value
    // itself.
    if form.name() == "admin-add" && submission.value("bmi").trim().is_empty() {
        let weight = submission.value("weight_kg").trim().parse::<f64>();
        let height = submission.value("height_cm").trim().parse::<f64>();
        if let (Ok(weight), Ok(height)) = (weight, height) {
            if let Some(bmi) = health::calculate_bmi(weight, height) {
                tracing::debug!("Derived BMI {:.1} from weight/height", bmi);
                submission.set("bmi", format!("{:.1}", bmi));
            }
        }
    }

    let engine = FormEngine::new(form);
    let mut presenter = ConsolePresenter::new();

    match engine.submit(&submission, &mut presenter) {
        Disposition::Allowed => {
            tracing::info!("✅ Form '{}' passed all field checks", engine.form_name());
            println!("✅ Submission allowed");
            if engine.form_name() == "admin-add" {
                print_health_preview(&submission);
            }
        }
        Disposition::Blocked(report) => {
            tracing::warn!(
                "🚫 Form '{}' blocked: {} failing field(s)",
                engine.form_name(),
                report.failing_fields().len()
            );
            eprintln!(
                "🚫 Submission blocked: {} field(s) need attention",
                report.failing_fields().len()
            );
            std::process::exit(1);
        }
    }

    Ok(())
}

fn print_health_preview(submission: &Submission) {
    for field in HEALTH_FIELDS {
        if let Ok(value) = submission.value(field).trim().parse::<f64>() {
            if let Some(tip) = health::health_tip(field, value) {
                println!("💡 {}", tip);
            }
        }
    }

    if let Ok(bmi) = submission.value("bmi").trim().parse::<f64>() {
        println!("📊 BMI {:.1} ({})", bmi, health::bmi_category(bmi).as_str());
    }

    println!(
        "📈 Risk preview: {}",
        health::risk_preview(submission).as_str()
    );
}
