//! Field validation shared by services, run before anything reaches the database.

use crate::server::error::constraint::ConstraintError;

pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Trimmed value, rejecting blank strings
pub fn non_blank(field: &'static str, value: &str) -> Result<String, ConstraintError> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(ConstraintError::invalid(field, "must not be blank"));
    }

    Ok(trimmed.to_string())
}

/// Lowercased trimmed email, rejecting values without a local part and domain
pub fn email(value: &str) -> Result<String, ConstraintError> {
    let email = value.trim().to_lowercase();

    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(email),
        _ => Err(ConstraintError::invalid("email", "must be a valid email address")),
    }
}

pub fn password(value: &str) -> Result<(), ConstraintError> {
    if value.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ConstraintError::invalid(
            "password",
            format!("must be at least {} characters", MIN_PASSWORD_LENGTH),
        ));
    }

    Ok(())
}

pub fn non_negative(field: &'static str, value: Option<i32>) -> Result<(), ConstraintError> {
    match value {
        Some(value) if value < 0 => Err(ConstraintError::invalid(field, "must not be negative")),
        _ => Ok(()),
    }
}

/// Trimmed skills with blanks removed, rejecting an empty result
pub fn skills(field: &'static str, values: Vec<String>) -> Result<Vec<String>, ConstraintError> {
    let skills: Vec<String> = values
        .into_iter()
        .map(|skill| skill.trim().to_string())
        .filter(|skill| !skill.is_empty())
        .collect();

    if skills.is_empty() {
        return Err(ConstraintError::invalid(field, "must contain at least one skill"));
    }

    Ok(skills)
}

pub fn salary_range(min: Option<i32>, max: Option<i32>) -> Result<(), ConstraintError> {
    non_negative("salary_min", min)?;
    non_negative("salary_max", max)?;

    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            return Err(ConstraintError::invalid(
                "salary_min",
                "must not exceed salary_max",
            ));
        }
    }

    Ok(())
}
