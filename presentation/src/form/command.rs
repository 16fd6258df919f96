//! Slash commands understood by the form REPL

use cardiacheck_domain::{DomainError, FieldName, FieldValue, Locale};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    /// Replace one form field
    Set(FieldValue),
    /// Switch locale, or list locales when none is given
    Lang(Option<Locale>),
    Submit,
    Form,
    Result,
    Info,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Unknown command: {0}")]
    Unknown(String),

    /// Rejected field name or value; shown with the localized validation message
    #[error(transparent)]
    Field(DomainError),

    #[error(transparent)]
    Locale(DomainError),
}

impl CommandError {
    /// Whether the localized form validation message applies
    pub fn is_field_error(&self) -> bool {
        matches!(self, CommandError::Field(_))
    }
}

impl ReplCommand {
    /// Parse one input line starting with `/`
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "/set" | "/s" => {
                let (field, value) = rest
                    .split_once(char::is_whitespace)
                    .ok_or(CommandError::Usage("/set <field> <value>"))?;
                let field: FieldName = field.parse().map_err(CommandError::Field)?;
                field
                    .parse_value(value)
                    .map(ReplCommand::Set)
                    .map_err(CommandError::Field)
            }
            "/lang" | "/l" => {
                if rest.is_empty() {
                    Ok(ReplCommand::Lang(None))
                } else {
                    rest.parse()
                        .map(|locale| ReplCommand::Lang(Some(locale)))
                        .map_err(CommandError::Locale)
                }
            }
            "/submit" | "/go" => Ok(ReplCommand::Submit),
            "/form" | "/f" => Ok(ReplCommand::Form),
            "/result" | "/r" => Ok(ReplCommand::Result),
            "/info" | "/i" => Ok(ReplCommand::Info),
            "/help" | "/h" | "/?" => Ok(ReplCommand::Help),
            "/quit" | "/exit" | "/q" => Ok(ReplCommand::Quit),
            _ => Err(CommandError::Unknown(command.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardiacheck_domain::{ChestPainType, RestEcg};

    #[test]
    fn test_simple_commands() {
        assert_eq!(ReplCommand::parse("/submit"), Ok(ReplCommand::Submit));
        assert_eq!(ReplCommand::parse("  /form "), Ok(ReplCommand::Form));
        assert_eq!(ReplCommand::parse("/r"), Ok(ReplCommand::Result));
        assert_eq!(ReplCommand::parse("/info"), Ok(ReplCommand::Info));
        assert_eq!(ReplCommand::parse("/?"), Ok(ReplCommand::Help));
        assert_eq!(ReplCommand::parse("/exit"), Ok(ReplCommand::Quit));
    }

    #[test]
    fn test_set_parses_typed_values() {
        assert_eq!(
            ReplCommand::parse("/set age 45"),
            Ok(ReplCommand::Set(FieldValue::Age(45)))
        );
        assert_eq!(
            ReplCommand::parse("/set cp typical angina"),
            Ok(ReplCommand::Set(FieldValue::ChestPainType(
                ChestPainType::TypicalAngina
            )))
        );
        assert_eq!(
            ReplCommand::parse("/set restecg lv-hypertrophy"),
            Ok(ReplCommand::Set(FieldValue::RestingEcg(RestEcg::LvHypertrophy)))
        );
        assert_eq!(
            ReplCommand::parse("/set fbs yes"),
            Ok(ReplCommand::Set(FieldValue::FastingBloodSugarHigh(true)))
        );
        assert_eq!(
            ReplCommand::parse("/set chol 233.5"),
            Ok(ReplCommand::Set(FieldValue::SerumCholesterol(233.5)))
        );
    }

    #[test]
    fn test_set_rejects_bad_input() {
        assert_eq!(
            ReplCommand::parse("/set age"),
            Err(CommandError::Usage("/set <field> <value>"))
        );

        let err = ReplCommand::parse("/set age 0").unwrap_err();
        assert!(err.is_field_error());

        let err = ReplCommand::parse("/set weight 80").unwrap_err();
        assert!(matches!(err, CommandError::Field(DomainError::UnknownField(_))));

        let err = ReplCommand::parse("/set trestbps high").unwrap_err();
        assert!(err.is_field_error());
    }

    #[test]
    fn test_lang() {
        assert_eq!(ReplCommand::parse("/lang"), Ok(ReplCommand::Lang(None)));
        assert_eq!(
            ReplCommand::parse("/lang de"),
            Ok(ReplCommand::Lang(Some(Locale::De)))
        );
        let err = ReplCommand::parse("/lang fr").unwrap_err();
        assert!(matches!(err, CommandError::Locale(DomainError::UnsupportedLocale(_))));
        assert!(!err.is_field_error());
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            ReplCommand::parse("/models"),
            Err(CommandError::Unknown("/models".to_string()))
        );
    }
}
