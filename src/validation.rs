use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeMap;

pub fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Checks length and character-class requirements, returning the first
/// applicable error message.
pub fn validate_password_strength(password: &str) -> Result<(), String> {
    lazy_static! {
        static ref DIGIT_RE: Regex = Regex::new(r"\d").unwrap();
        static ref UPPER_RE: Regex = Regex::new(r"[A-Z]").unwrap();
        static ref SPECIAL_RE: Regex =
            Regex::new(r#"[!@#$%^&*()_+\-=\[\]{};':"\\|,.<>/?]"#).unwrap();
    }

    const MIN_LENGTH: usize = 8;

    if password.is_empty() {
        return Err("Password is required".to_string());
    }
    if password.chars().count() < MIN_LENGTH {
        return Err(format!(
            "Password must be at least {} characters",
            MIN_LENGTH
        ));
    }
    if !DIGIT_RE.is_match(password)
        || !UPPER_RE.is_match(password)
        || !SPECIAL_RE.is_match(password)
    {
        return Err(
            "Password must include at least one number, one uppercase letter, and one special character"
                .to_string(),
        );
    }
    Ok(())
}

pub fn validate_required(value: &str, field_name: &str) -> Option<String> {
    if value.trim().is_empty() {
        return Some(format!("{} is required", field_name));
    }
    None
}

pub fn validate_length(value: &str, max: usize, field_name: &str) -> Option<String> {
    if !value.is_empty() && value.chars().count() > max {
        return Some(format!("{} must be less than {} characters", field_name, max));
    }
    None
}

pub fn is_valid_url(value: &str) -> bool {
    url::Url::parse(value).is_ok()
}

/// One declarative check in a field's rule list.
#[derive(Debug, Clone)]
pub enum Rule {
    Required {
        name: &'static str,
    },
    Email,
    Length {
        max: usize,
        name: &'static str,
    },
    PasswordStrength,
    /// Must equal the value of the named sibling field.
    Match {
        other: &'static str,
        name: &'static str,
        other_name: &'static str,
    },
    Url,
}

/// Per-submission validation outcome. Empty error map means valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormValidation {
    pub errors: BTreeMap<String, String>,
    pub is_valid: bool,
}

impl FormValidation {
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }
}

fn lookup<'a>(values: &'a [(&str, &str)], name: &str) -> &'a str {
    values
        .iter()
        .find(|(field, _)| *field == name)
        .map(|(_, value)| *value)
        .unwrap_or("")
}

/// Runs each field's rules in order, stopping at the first failure per field.
///
/// Empty values only fail `required` (and `match` against a non-empty
/// sibling); the remaining rule kinds pass on blank input so optional fields
/// stay optional.
pub fn validate_form(
    values: &[(&str, &str)],
    rules: &[(&'static str, Vec<Rule>)],
) -> FormValidation {
    let mut errors = BTreeMap::new();

    for (field, field_rules) in rules {
        let value = lookup(values, field);

        for rule in field_rules {
            let error = match rule {
                Rule::Required { name } => validate_required(value, name),
                Rule::Email => {
                    if !value.is_empty() && !is_valid_email(value) {
                        Some("Please enter a valid email address".to_string())
                    } else {
                        None
                    }
                }
                Rule::Length { max, name } => validate_length(value, *max, name),
                Rule::PasswordStrength => {
                    if value.is_empty() {
                        None
                    } else {
                        validate_password_strength(value).err()
                    }
                }
                Rule::Match {
                    other,
                    name,
                    other_name,
                } => {
                    if value != lookup(values, other) {
                        Some(format!("{} must match {}", name, other_name))
                    } else {
                        None
                    }
                }
                Rule::Url => {
                    if !value.is_empty() && !is_valid_url(value) {
                        Some("Please enter a valid URL".to_string())
                    } else {
                        None
                    }
                }
            };

            if let Some(message) = error {
                errors.insert((*field).to_string(), message);
                break;
            }
        }
    }

    let is_valid = errors.is_empty();
    FormValidation { errors, is_valid }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last@sub.domain.org"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("user"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("user name@example.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@.x"));
    }

    #[test]
    fn password_shorter_than_eight_gets_length_message() {
        for pw in ["", "A1!", "Abcde1!"] {
            let err = validate_password_strength(pw).unwrap_err();
            if pw.is_empty() {
                assert_eq!(err, "Password is required");
            } else {
                assert_eq!(err, "Password must be at least 8 characters");
            }
        }
    }

    #[test]
    fn password_missing_character_class_gets_composition_message() {
        for pw in ["Abcdefgh", "abcdefg1!", "ABCDEFG1", "abcdefghi"] {
            let err = validate_password_strength(pw).unwrap_err();
            assert!(err.starts_with("Password must include"), "{}: {}", pw, err);
        }
    }

    #[test]
    fn password_with_all_classes_is_valid() {
        assert!(validate_password_strength("Abcdef1!").is_ok());
        assert!(validate_password_strength("Secur3P@ssw0rd").is_ok());
    }

    #[test]
    fn required_trims_whitespace() {
        assert_eq!(
            validate_required("   ", "Name"),
            Some("Name is required".to_string())
        );
        assert_eq!(validate_required("ok", "Name"), None);
    }

    #[test]
    fn length_boundary_names_the_limit() {
        let exactly = "x".repeat(500);
        assert_eq!(validate_length(&exactly, 500, "Bio"), None);

        let over = "x".repeat(501);
        assert_eq!(
            validate_length(&over, 500, "Bio"),
            Some("Bio must be less than 500 characters".to_string())
        );
    }

    #[test]
    fn url_rule_requires_absolute_urls() {
        assert!(is_valid_url("https://example.com/avatar.png"));
        assert!(!is_valid_url("not a url"));
        assert!(!is_valid_url("/relative/path"));
    }

    #[test]
    fn form_runner_reports_first_failure_per_field() {
        let rules = vec![(
            "email",
            vec![Rule::Required { name: "Email" }, Rule::Email],
        )];

        let empty = validate_form(&[("email", "")], &rules);
        assert!(!empty.is_valid);
        assert_eq!(empty.error("email"), Some("Email is required"));

        // Required passes, so the email rule is the one that fires.
        let bad = validate_form(&[("email", "nope")], &rules);
        assert_eq!(bad.error("email"), Some("Please enter a valid email address"));

        let ok = validate_form(&[("email", "a@b.co")], &rules);
        assert!(ok.is_valid);
        assert!(ok.errors.is_empty());
    }

    #[test]
    fn match_rule_compares_sibling_fields() {
        let rules = vec![(
            "confirm_password",
            vec![Rule::Match {
                other: "password",
                name: "Confirm password",
                other_name: "password",
            }],
        )];

        let mismatch = validate_form(
            &[("password", "Abcdef1!"), ("confirm_password", "Abcdef1?")],
            &rules,
        );
        assert_eq!(
            mismatch.error("confirm_password"),
            Some("Confirm password must match password")
        );

        let matched = validate_form(
            &[("password", "Abcdef1!"), ("confirm_password", "Abcdef1!")],
            &rules,
        );
        assert!(matched.is_valid);
    }

    #[test]
    fn optional_fields_skip_format_rules_when_blank() {
        let rules = vec![
            ("avatar_url", vec![Rule::Url]),
            ("bio", vec![Rule::Length { max: 500, name: "Bio" }]),
        ];
        let result = validate_form(&[("avatar_url", ""), ("bio", "")], &rules);
        assert!(result.is_valid);
    }
}
