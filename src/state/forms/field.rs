//! Question field updates

use super::draft::{EditorError, QuestionType};

/// Editable fields of a question. The id is fixed for the life of the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionField {
    Title,
    Type,
    Required,
    MinValue,
    MaxValue,
    MinLabel,
    MaxLabel,
}

impl QuestionField {
    pub fn parse(name: &str) -> Result<Self, EditorError> {
        match name {
            "title" => Ok(Self::Title),
            "type" => Ok(Self::Type),
            "required" => Ok(Self::Required),
            "min_value" => Ok(Self::MinValue),
            "max_value" => Ok(Self::MaxValue),
            "min_label" => Ok(Self::MinLabel),
            "max_label" => Ok(Self::MaxLabel),
            other => Err(EditorError::UnknownField(other.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Type => "type",
            Self::Required => "required",
            Self::MinValue => "min_value",
            Self::MaxValue => "max_value",
            Self::MinLabel => "min_label",
            Self::MaxLabel => "max_label",
        }
    }
}

/// A single-field replacement on a question
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionUpdate {
    Title(String),
    Type(QuestionType),
    Required(bool),
    MinValue(Option<i64>),
    MaxValue(Option<i64>),
    MinLabel(String),
    MaxLabel(String),
}

impl QuestionUpdate {
    /// Build an update from a field name and its textual value.
    ///
    /// An empty value clears the numeric scale bounds.
    pub fn parse(field: &str, value: &str) -> Result<Self, EditorError> {
        let field = QuestionField::parse(field)?;
        let invalid = || EditorError::InvalidValue {
            field: field.name().to_string(),
            value: value.to_string(),
        };

        let update = match field {
            QuestionField::Title => Self::Title(value.to_string()),
            QuestionField::Type => Self::Type(QuestionType::parse(value).ok_or_else(invalid)?),
            QuestionField::Required => Self::Required(value.parse().map_err(|_| invalid())?),
            QuestionField::MinValue => Self::MinValue(parse_bound(value).ok_or_else(invalid)?),
            QuestionField::MaxValue => Self::MaxValue(parse_bound(value).ok_or_else(invalid)?),
            QuestionField::MinLabel => Self::MinLabel(value.to_string()),
            QuestionField::MaxLabel => Self::MaxLabel(value.to_string()),
        };
        Ok(update)
    }

    pub fn field(&self) -> QuestionField {
        match self {
            Self::Title(_) => QuestionField::Title,
            Self::Type(_) => QuestionField::Type,
            Self::Required(_) => QuestionField::Required,
            Self::MinValue(_) => QuestionField::MinValue,
            Self::MaxValue(_) => QuestionField::MaxValue,
            Self::MinLabel(_) => QuestionField::MinLabel,
            Self::MaxLabel(_) => QuestionField::MaxLabel,
        }
    }
}

/// `Some(None)` for an empty string, `None` if it is not an integer
fn parse_bound(value: &str) -> Option<Option<i64>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(None);
    }
    trimmed.parse().ok().map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_field_name() {
        for field in [
            QuestionField::Title,
            QuestionField::Type,
            QuestionField::Required,
            QuestionField::MinValue,
            QuestionField::MaxValue,
            QuestionField::MinLabel,
            QuestionField::MaxLabel,
        ] {
            assert_eq!(QuestionField::parse(field.name()), Ok(field));
        }
    }

    #[test]
    fn test_id_is_not_updatable() {
        assert_eq!(
            QuestionField::parse("id"),
            Err(EditorError::UnknownField("id".to_string()))
        );
    }

    #[test]
    fn test_parse_numeric_bounds() {
        assert_eq!(
            QuestionUpdate::parse("min_value", "0"),
            Ok(QuestionUpdate::MinValue(Some(0)))
        );
        assert_eq!(
            QuestionUpdate::parse("max_value", ""),
            Ok(QuestionUpdate::MaxValue(None))
        );
        assert!(matches!(
            QuestionUpdate::parse("max_value", "ten"),
            Err(EditorError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_parse_required_and_type() {
        assert_eq!(
            QuestionUpdate::parse("required", "false"),
            Ok(QuestionUpdate::Required(false))
        );
        assert_eq!(
            QuestionUpdate::parse("type", "multi_choice"),
            Ok(QuestionUpdate::Type(QuestionType::MultiChoice))
        );
        assert!(QuestionUpdate::parse("type", "matrix").is_err());
        assert!(QuestionUpdate::parse("required", "yes").is_err());
    }

    #[test]
    fn test_update_reports_its_field() {
        let update = QuestionUpdate::MinLabel("Low".into());
        assert_eq!(update.field(), QuestionField::MinLabel);
    }
}
