//! Form field bundles and their declarative rule sets. Validation errors stay
//! here, next to the input that caused them; they never reach a state slice.

use crate::models::{Category, ExperienceLevel};
use crate::skills::{CreateSkillRequest, UpdateSkillRequest};
use crate::validation::{validate_form, FormValidation, Rule};

fn none_if_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> FormValidation {
        let rules = vec![
            ("email", vec![Rule::Required { name: "Email" }, Rule::Email]),
            ("password", vec![Rule::Required { name: "Password" }]),
        ];
        validate_form(
            &[
                ("email", self.email.as_str()),
                ("password", self.password.as_str()),
            ],
            &rules,
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub location: String,
    pub bio: String,
}

impl RegisterForm {
    pub fn validate(&self) -> FormValidation {
        let rules = vec![
            ("name", vec![Rule::Required { name: "Name" }]),
            ("email", vec![Rule::Required { name: "Email" }, Rule::Email]),
            (
                "password",
                vec![Rule::Required { name: "Password" }, Rule::PasswordStrength],
            ),
            (
                "confirm_password",
                vec![Rule::Match {
                    other: "password",
                    name: "Password confirmation",
                    other_name: "password",
                }],
            ),
            ("bio", vec![Rule::Length { max: 500, name: "Bio" }]),
        ];
        validate_form(
            &[
                ("name", self.name.as_str()),
                ("email", self.email.as_str()),
                ("password", self.password.as_str()),
                ("confirm_password", self.confirm_password.as_str()),
                ("location", self.location.as_str()),
                ("bio", self.bio.as_str()),
            ],
            &rules,
        )
    }

    pub fn bio(&self) -> Option<String> {
        none_if_blank(&self.bio)
    }

    pub fn location(&self) -> Option<String> {
        none_if_blank(&self.location)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProfileForm {
    pub name: String,
    pub bio: String,
    pub location: String,
    pub avatar_url: String,
}

impl ProfileForm {
    pub fn validate(&self) -> FormValidation {
        let rules = vec![
            ("name", vec![Rule::Required { name: "Name" }]),
            ("bio", vec![Rule::Length { max: 500, name: "Bio" }]),
            ("avatar_url", vec![Rule::Url]),
        ];
        validate_form(
            &[
                ("name", self.name.as_str()),
                ("bio", self.bio.as_str()),
                ("location", self.location.as_str()),
                ("avatar_url", self.avatar_url.as_str()),
            ],
            &rules,
        )
    }
}

#[derive(Debug, Clone)]
pub struct SkillForm {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub experience_level: ExperienceLevel,
    pub location: String,
    pub image_url: String,
}

impl SkillForm {
    pub fn validate(&self) -> FormValidation {
        let rules = vec![
            (
                "title",
                vec![
                    Rule::Required { name: "Title" },
                    Rule::Length { max: 100, name: "Title" },
                ],
            ),
            (
                "description",
                vec![
                    Rule::Required { name: "Description" },
                    Rule::Length { max: 1000, name: "Description" },
                ],
            ),
            ("location", vec![Rule::Required { name: "Location" }]),
            ("image_url", vec![Rule::Url]),
        ];
        validate_form(
            &[
                ("title", self.title.as_str()),
                ("description", self.description.as_str()),
                ("location", self.location.as_str()),
                ("image_url", self.image_url.as_str()),
            ],
            &rules,
        )
    }

    pub fn to_create_request(&self) -> CreateSkillRequest {
        CreateSkillRequest {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            category: self.category,
            experience_level: self.experience_level,
            location: self.location.trim().to_string(),
            image_url: none_if_blank(&self.image_url),
        }
    }

    pub fn to_update_request(&self) -> UpdateSkillRequest {
        UpdateSkillRequest {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            category: self.category,
            experience_level: self.experience_level,
            location: self.location.trim().to_string(),
            image_url: none_if_blank(&self.image_url),
        }
    }
}
