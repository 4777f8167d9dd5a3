use std::fmt;

/// Errors raised by the cost model before any arithmetic is done
#[derive(Debug, Clone, PartialEq)]
pub enum CostError {
    InvalidParameter {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
}

impl CostError {
    pub(crate) fn invalid(field: &'static str, value: f64, reason: &'static str) -> Self {
        CostError::InvalidParameter {
            field,
            value,
            reason,
        }
    }

    /// Name of the offending parameter
    pub fn field(&self) -> &'static str {
        match self {
            CostError::InvalidParameter { field, .. } => field,
        }
    }
}

impl fmt::Display for CostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CostError::InvalidParameter {
                field,
                value,
                reason,
            } => write!(f, "invalid {field} ({value}): {reason}"),
        }
    }
}

impl std::error::Error for CostError {}

/// Errors raised while validating a template. No part of a template is
/// applied when one of these is returned.
#[derive(Debug, Clone, PartialEq)]
pub enum TemplateError {
    MissingField(&'static str),
    OutOfRange {
        field: &'static str,
        value: f64,
        expected: &'static str,
    },
    EmptyList(&'static str),
    UnknownTemplate(String),
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::MissingField(field) => write!(f, "template is missing {field}"),
            TemplateError::OutOfRange {
                field,
                value,
                expected,
            } => write!(f, "template {field} = {value} is out of range (expected {expected})"),
            TemplateError::EmptyList(field) => write!(f, "template {field} must not be empty"),
            TemplateError::UnknownTemplate(name) => write!(f, "unknown template '{name}'"),
        }
    }
}

impl std::error::Error for TemplateError {}

pub type CostResult<T> = std::result::Result<T, CostError>;
