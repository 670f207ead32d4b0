//! Field-level checks. Each rule takes the raw string value and returns
//! `Ok(())` or the inline message to show next to the field.

use crate::domain::model::RuleResult;
use regex::Regex;

const PASSWORD_SPECIALS: &str = "@$!%*?&";

/// Alphabetic characters and spaces, minimum 3 characters.
pub fn name(value: &str) -> RuleResult {
    let pattern = Regex::new(r"^[A-Za-z ]{3,}$").unwrap();
    if pattern.is_match(value) {
        Ok(())
    } else {
        Err("Name must be at least 3 letters (only alphabets and spaces).".to_string())
    }
}

/// 10 to 15 digits, nothing else.
pub fn phone(value: &str) -> RuleResult {
    let pattern = Regex::new(r"^\d{10,15}$").unwrap();
    if pattern.is_match(value) {
        Ok(())
    } else {
        Err("Phone must be 10–15 digits.".to_string())
    }
}

pub fn email(value: &str) -> RuleResult {
    let pattern = Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap();
    if pattern.is_match(value) {
        Ok(())
    } else {
        Err("Enter a valid email address.".to_string())
    }
}

/// Registration password: at least 8 characters with one uppercase letter,
/// one digit, and one of `@$!%*?&`. Checked class by class since the
/// lookahead form of this rule is not expressible as a single regex here.
pub fn register_password(value: &str) -> RuleResult {
    let long_enough = value.chars().count() >= 8;
    let has_upper = value.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    let has_special = value.chars().any(|c| PASSWORD_SPECIALS.contains(c));

    if long_enough && has_upper && has_digit && has_special {
        Ok(())
    } else {
        Err("Password must be ≥8 chars, include uppercase, number, special char.".to_string())
    }
}

pub fn confirm_password(password: &str, confirmation: &str) -> RuleResult {
    if confirmation == password {
        Ok(())
    } else {
        Err("Passwords do not match.".to_string())
    }
}

/// Login only checks length; character classes are a registration concern.
pub fn login_password(value: &str) -> RuleResult {
    if value.chars().count() >= 8 {
        Ok(())
    } else {
        Err("Password must be at least 8 characters.".to_string())
    }
}

/// Registration username: 3 to 20 characters from `[A-Za-z0-9_-]`, with at
/// least one letter.
pub fn username(value: &str) -> RuleResult {
    let len = value.chars().count();
    if len < 3 {
        return Err("Username must be at least 3 characters long.".to_string());
    }
    if len > 20 {
        return Err("Username cannot exceed 20 characters.".to_string());
    }
    let charset = Regex::new(r"^[A-Za-z0-9_-]+$").unwrap();
    if !charset.is_match(value) {
        return Err(
            "Username may only contain letters, numbers, underscores, and hyphens.".to_string(),
        );
    }
    if !value.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err("Username must contain at least one letter.".to_string());
    }
    Ok(())
}

/// Login only checks the length band.
pub fn login_username(value: &str) -> RuleResult {
    let len = value.chars().count();
    if (3..=20).contains(&len) {
        Ok(())
    } else {
        Err("Invalid username format.".to_string())
    }
}

pub fn required(label: &str, value: &str) -> RuleResult {
    if value.trim().is_empty() {
        Err(format!("{} is required.", label))
    } else {
        Ok(())
    }
}

pub fn numeric(label: &str, value: &str) -> RuleResult {
    match value.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(()),
        _ => Err(format!("{} must be a number.", label)),
    }
}

pub fn positive_age(value: &str) -> RuleResult {
    numeric("Age", value)?;
    if value.trim().parse::<f64>().unwrap_or(0.0) > 0.0 {
        Ok(())
    } else {
        Err("Age must be greater than 0.".to_string())
    }
}

// Parameterized variants backing schema-defined forms.

pub fn alphabetic(label: &str, value: &str, min: usize) -> RuleResult {
    let pattern = Regex::new(r"^[A-Za-z ]+$").unwrap();
    if pattern.is_match(value) && value.chars().count() >= min {
        Ok(())
    } else {
        Err(format!(
            "{} must be at least {} letters (only alphabets and spaces).",
            label, min
        ))
    }
}

pub fn digits(label: &str, value: &str, min: usize, max: usize) -> RuleResult {
    let len = value.chars().count();
    if !value.is_empty() && value.chars().all(|c| c.is_ascii_digit()) && (min..=max).contains(&len)
    {
        Ok(())
    } else {
        Err(format!("{} must be {}–{} digits.", label, min, max))
    }
}

pub fn length(label: &str, value: &str, min: Option<usize>, max: Option<usize>) -> RuleResult {
    let len = value.chars().count();
    if let Some(min_len) = min {
        if len < min_len {
            return Err(format!(
                "{} must be at least {} characters long.",
                label, min_len
            ));
        }
    }
    if let Some(max_len) = max {
        if len > max_len {
            return Err(format!("{} cannot exceed {} characters.", label, max_len));
        }
    }
    Ok(())
}

pub fn pattern(label: &str, value: &str, regex: &Regex, message: Option<&str>) -> RuleResult {
    if regex.is_match(value) {
        Ok(())
    } else {
        Err(message
            .map(str::to_string)
            .unwrap_or_else(|| format!("{} is not in the expected format.", label)))
    }
}

pub fn matches(label: &str, value: &str, other: &str, other_value: &str) -> RuleResult {
    if value == other_value {
        Ok(())
    } else {
        Err(format!("{} does not match {}.", label, other))
    }
}
