pub mod engine;
pub mod forms;
pub mod health;
pub mod presenter;
pub mod rules;

pub use crate::domain::model::{Disposition, Submission, ValidationReport};
pub use crate::domain::ports::{ErrorPresenter, Form};
pub use crate::utils::error::Result;
