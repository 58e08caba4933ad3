// Domain rules - Parameter bounds

use std::fmt;

/// Inclusive numeric range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// NaN is never contained
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Unit a bounded value is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Seconds,
    Decibels,
    Megabytes,
}

/// Value rendered with its unit: `0.1s`, `-45 dB`
struct WithUnit(f64, Unit);

impl fmt::Display for WithUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.1 {
            Unit::Seconds => write!(f, "{}s", self.0),
            Unit::Decibels => write!(f, "{} dB", self.0),
            Unit::Megabytes => write!(f, "{} MB", self.0),
        }
    }
}

/// Describe why `value` falls outside `bounds`, or `None` when it fits
pub fn range_violation(label: &str, value: f64, unit: Unit, bounds: Bounds) -> Option<String> {
    if bounds.contains(value) {
        return None;
    }
    Some(format!(
        "{} ({}) must be between {} and {}.",
        label,
        WithUnit(value, unit),
        WithUnit(bounds.min, unit),
        WithUnit(bounds.max, unit),
    ))
}

/// Describe why `value` is not strictly positive, or `None` when it is.
///
/// NaN is rejected.
pub fn positive_violation(label: &str, value: f64, unit: Unit) -> Option<String> {
    if value > 0.0 {
        return None;
    }
    Some(format!("{} ({}) must be greater than 0.", label, WithUnit(value, unit)))
}

/// Collects bound violations so they can be reported together
#[derive(Debug, Default)]
pub struct BoundsCheck {
    violations: Vec<String>,
}

impl BoundsCheck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn check(&mut self, label: &str, value: f64, unit: Unit, bounds: Bounds) -> &mut Self {
        if let Some(violation) = range_violation(label, value, unit, bounds) {
            self.violations.push(violation);
        }
        self
    }

    /// Like `check`, skipped when no value was supplied
    pub fn check_opt(
        &mut self,
        label: &str,
        value: Option<f64>,
        unit: Unit,
        bounds: Bounds,
    ) -> &mut Self {
        match value {
            Some(value) => self.check(label, value, unit, bounds),
            None => self,
        }
    }

    pub fn check_positive(&mut self, label: &str, value: f64, unit: Unit) -> &mut Self {
        if let Some(violation) = positive_violation(label, value, unit) {
            self.violations.push(violation);
        }
        self
    }

    pub fn violations(&self) -> &[String] {
        &self.violations
    }

    pub fn is_ok(&self) -> bool {
        self.violations.is_empty()
    }
}

#[cfg(test)]
mod tests;
