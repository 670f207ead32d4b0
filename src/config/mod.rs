pub mod schema;

use crate::domain::model::Submission;
use crate::utils::error::{FormError, Result};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "formgate")]
#[command(about = "Validates form submissions field by field and gates them on the result")]
pub struct CliConfig {
    #[arg(long, default_value = "login", help = "Built-in form: admin-add, register, or login")]
    pub form: String,

    #[arg(
        long = "field",
        value_name = "NAME=VALUE",
        help = "Field value, repeatable; overrides values from --input"
    )]
    pub fields: Vec<String>,

    #[arg(long, help = "Read field values from a JSON object file")]
    pub input: Option<String>,

    #[arg(long, help = "Validate against a TOML form schema instead of a built-in form")]
    pub schema: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Assembles the submission: the JSON input file first, then `--field`
    /// pairs on top.
    pub fn submission(&self) -> Result<Submission> {
        let mut submission = match &self.input {
            Some(path) => {
                let content = std::fs::read_to_string(path)?;
                Submission::from_json_str(&content)?
            }
            None => Submission::new(),
        };

        for pair in &self.fields {
            let (name, value) = pair
                .split_once('=')
                .ok_or_else(|| FormError::FieldArgumentError(pair.clone()))?;
            submission.set(name.trim(), value);
        }

        Ok(submission)
    }
}
