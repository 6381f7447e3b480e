use pdplot_common::number::Number;
use pdplot_common::types::Font;

/// Semantic checks that serde cannot express, run once after the document is parsed.
///
/// `path` is the dotted location of the record inside its preset and is only used to
/// build the error message.
pub trait Validate {
    fn validate(&self, path: &str) -> Result<(), String>;
}

impl<T: Validate> Validate for Option<T> {
    fn validate(&self, path: &str) -> Result<(), String> {
        match self {
            Some(inner) => inner.validate(path),
            None => Ok(()),
        }
    }
}

impl Validate for Font {
    fn validate(&self, path: &str) -> Result<(), String> {
        non_negative(path, "size", self.size.as_ref())
    }
}

pub(crate) fn join(path: &str, field: &str) -> String {
    if path.is_empty() {
        field.to_string()
    } else {
        format!("{path}.{field}")
    }
}

pub(crate) fn non_negative(path: &str, field: &str, value: Option<&Number>) -> Result<(), String> {
    match value {
        Some(v) if v.is_negative() => {
            Err(format!("{} must be non-negative, got {v}", join(path, field)))
        }
        _ => Ok(()),
    }
}

pub(crate) fn unit_interval(path: &str, field: &str, value: Option<&Number>) -> Result<(), String> {
    match value {
        Some(v) if !(0.0..=1.0).contains(&v.as_f64()) => {
            Err(format!("{} must lie in [0, 1], got {v}", join(path, field)))
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checks() {
        assert!(non_negative("legend", "borderwidth", Some(&Number::from(0u32))).is_ok());
        assert!(non_negative("legend", "borderwidth", None).is_ok());
        assert_eq!(
            non_negative("legend", "borderwidth", Some(&Number::from(-1i32))).unwrap_err(),
            "legend.borderwidth must be non-negative, got -1"
        );
        assert!(unit_interval("", "opacity", Some(&Number::from_f64(1.2).unwrap())).is_err());
        assert!(unit_interval("", "opacity", Some(&Number::from(1u32))).is_ok());
        assert_eq!(join("", "opacity"), "opacity");
    }
}
