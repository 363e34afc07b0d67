use serde::{Deserialize, Serialize};
use std::fmt;
use time::OffsetDateTime;
use uuid::Uuid;

/// A registered marketplace member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub avatar_url: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Listing category. Unknown input normalizes to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Category {
    Technology,
    Creative,
    Business,
    Education,
    Lifestyle,
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Technology,
        Category::Creative,
        Category::Business,
        Category::Education,
        Category::Lifestyle,
        Category::Other,
    ];

    pub fn parse(s: &str) -> Category {
        match s.trim().to_lowercase().as_str() {
            "technology" => Category::Technology,
            "creative" => Category::Creative,
            "business" => Category::Business,
            "education" => Category::Education,
            "lifestyle" => Category::Lifestyle,
            _ => Category::Other,
        }
    }

    /// Human-facing label, capitalized.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Technology => "Technology",
            Category::Creative => "Creative",
            Category::Business => "Business",
            Category::Education => "Education",
            Category::Lifestyle => "Lifestyle",
            Category::Other => "Other",
        }
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        Category::parse(&s)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    #[serde(alias = "Beginner")]
    Beginner,
    #[serde(alias = "Intermediate")]
    Intermediate,
    #[serde(alias = "Advanced")]
    Advanced,
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ExperienceLevel::Beginner => "Beginner",
            ExperienceLevel::Intermediate => "Intermediate",
            ExperienceLevel::Advanced => "Advanced",
        };
        f.write_str(s)
    }
}

/// Weak reference to the member offering a listing; the listing does not own
/// the full user record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingOwner {
    pub id: Uuid,
    pub name: String,
    pub avatar_url: Option<String>,
}

/// A skill offered for exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillListing {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub experience_level: ExperienceLevel,
    pub location: String,
    pub owner: ListingOwner,
    pub image_url: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    #[serde(alias = "Pending")]
    Pending,
    #[serde(alias = "Accepted")]
    Accepted,
    #[serde(alias = "Declined")]
    Declined,
}

/// A member's expressed intent to trade skills with a listing owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRequest {
    pub id: Uuid,
    pub listing_id: Uuid,
    pub requester_id: Uuid,
    pub status: RequestStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parse_normalizes_case() {
        assert_eq!(Category::parse("Technology"), Category::Technology);
        assert_eq!(Category::parse("LIFESTYLE"), Category::Lifestyle);
        assert_eq!(Category::parse(" creative "), Category::Creative);
    }

    #[test]
    fn category_parse_falls_back_to_other() {
        assert_eq!(Category::parse("gardening"), Category::Other);
        assert_eq!(Category::parse(""), Category::Other);
    }

    #[test]
    fn category_deserializes_unknown_as_other() {
        let c: Category = serde_json::from_str(r#""woodworking""#).unwrap();
        assert_eq!(c, Category::Other);
        let c: Category = serde_json::from_str(r#""Education""#).unwrap();
        assert_eq!(c, Category::Education);
    }
}
