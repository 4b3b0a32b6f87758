//! Per-section checks of loaded or edited values

use crate::error::ValidationError;
use std::fmt::Display;
use std::ops::RangeInclusive;

/// A `[table]` of config.toml that can check its own values
pub trait ConfigSection {
    /// Table name, used as the key prefix in validation messages
    const NAME: &'static str;

    fn check(&self, validator: &mut Validator);

    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut validator = Validator::new(Self::NAME);
        self.check(&mut validator);
        validator.finish()
    }
}

/// Collects the problems of one section
#[derive(Debug)]
pub struct Validator {
    section: &'static str,
    errors: Vec<ValidationError>,
}

impl Validator {
    pub fn new(section: &'static str) -> Self {
        Self {
            section,
            errors: Vec::new(),
        }
    }

    pub fn range<T>(&mut self, field: &str, value: T, bounds: RangeInclusive<T>) -> &mut Self
    where
        T: PartialOrd + Display,
    {
        if !bounds.contains(&value) {
            let problem = format!(
                "must be in {}..={}, got {}",
                bounds.start(),
                bounds.end(),
                value
            );
            self.push(field, problem);
        }
        self
    }

    pub fn not_blank(&mut self, field: &str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.push(field, "must not be blank");
        }
        self
    }

    fn push(&mut self, field: &str, problem: impl Into<String>) {
        self.errors.push(ValidationError::new(
            format!("{}.{}", self.section, field),
            problem,
        ));
    }

    pub fn finish(self) -> Result<(), Vec<ValidationError>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_bounds_are_inclusive() {
        let mut validator = Validator::new("player");
        validator
            .range("a", 0, 0..=100)
            .range("b", 100, 0..=100)
            .range("c", -1, 0..=100)
            .range("d", 101, 0..=100);

        let errors = validator.finish().unwrap_err();
        let keys: Vec<_> = errors.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["player.c", "player.d"]);
        assert_eq!(errors[1].problem, "must be in 0..=100, got 101");
    }

    #[test]
    fn test_not_blank() {
        let mut validator = Validator::new("probe");
        validator.not_blank("program", "ffprobe");
        assert!(validator.finish().is_ok());

        let mut validator = Validator::new("probe");
        validator.not_blank("program", "   ");
        assert_eq!(
            validator.finish().unwrap_err()[0].to_string(),
            "probe.program must not be blank"
        );
    }
}
