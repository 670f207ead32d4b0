//! Cosmetic health helpers shown alongside the admin patient form: a BMI
//! calculator, per-field tips for out-of-range readings, and a coarse risk
//! preview. None of this gates a submission.

use crate::domain::model::Submission;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "underweight",
            BmiCategory::Normal => "normal",
            BmiCategory::Overweight => "overweight",
            BmiCategory::Obese => "obese",
        }
    }
}

/// BMI from weight in kilograms and height in centimeters. `None` when
/// either measurement is non-positive or not finite.
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> Option<f64> {
    if !weight_kg.is_finite() || !height_cm.is_finite() || weight_kg <= 0.0 || height_cm <= 0.0 {
        return None;
    }
    let height_m = height_cm / 100.0;
    Some(weight_kg / (height_m * height_m))
}

pub fn bmi_category(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// A short tip when a reading sits outside its usual range; `None` when the
/// value looks fine or the field has no tip.
pub fn health_tip(field: &str, value: f64) -> Option<&'static str> {
    match field {
        "glucose" if value >= 140.0 => {
            Some("Glucose is elevated. Consider a follow-up fasting test.")
        }
        "blood_pressure" if value >= 90.0 => {
            Some("Blood pressure is high. A resting re-measurement is advisable.")
        }
        "bmi" if value >= 25.0 => Some("BMI is above the normal range."),
        "insulin" if value >= 166.0 => Some("Insulin is above the typical 2-hour serum range."),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
        }
    }
}

/// Preview based on how many readings are out of range. Purely indicative;
/// the prediction model proper lives outside this crate.
pub fn risk_preview(submission: &Submission) -> RiskLevel {
    let flagged = ["glucose", "blood_pressure", "bmi", "insulin"]
        .iter()
        .filter(|field| {
            submission
                .value(field)
                .trim()
                .parse::<f64>()
                .ok()
                .and_then(|value| health_tip(field, value))
                .is_some()
        })
        .count();

    match flagged {
        0 => RiskLevel::Low,
        1 => RiskLevel::Moderate,
        _ => RiskLevel::High,
    }
}
