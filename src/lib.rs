pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::schema::{FieldSchema, FormSchema, Rule, SchemaForm};
pub use config::CliConfig;
pub use core::engine::FormEngine;
pub use core::forms::{builtin_form, AdminPatientForm, LoginForm, RegisterForm};
pub use core::presenter::{ConsolePresenter, ErrorSlot, FormView};
pub use domain::model::{Disposition, RuleResult, Submission, ValidationReport};
pub use domain::ports::{ErrorPresenter, Form};
pub use utils::error::{FormError, Result};
