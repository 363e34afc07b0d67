use std::collections::HashMap;
use time::macros::datetime;
use uuid::Uuid;

use crate::models::{Category, ExperienceLevel, ListingOwner, SkillListing, User};

/// Credentials of the seeded demo account.
pub const DEMO_EMAIL: &str = "jane.doe@example.com";
pub const DEMO_PASSWORD: &str = "Passw0rd!";

fn owner(id: u128, name: &str, avatar: u32) -> ListingOwner {
    ListingOwner {
        id: Uuid::from_u128(id),
        name: name.to_string(),
        avatar_url: Some(format!("https://i.pravatar.cc/150?img={}", avatar)),
    }
}

/// The demo account a fresh mock backend knows how to log in.
pub fn demo_user() -> User {
    User {
        id: Uuid::from_u128(100),
        name: "Jane Doe".into(),
        email: DEMO_EMAIL.into(),
        bio: Some(
            "Full-stack developer with a passion for teaching and learning new skills."
                .into(),
        ),
        location: Some("San Francisco, CA".into()),
        avatar_url: Some("https://i.pravatar.cc/150?img=12".into()),
        created_at: datetime!(2023-01-15 00:00:00 UTC),
    }
}

pub fn seed_credentials() -> HashMap<String, String> {
    let mut credentials = HashMap::new();
    credentials.insert(DEMO_EMAIL.to_string(), DEMO_PASSWORD.to_string());
    credentials
}

/// Six sample listings spanning every category.
pub fn seed_listings() -> Vec<SkillListing> {
    vec![
        SkillListing {
            id: Uuid::from_u128(1),
            title: "Web Development".into(),
            description: "Learn how to build responsive websites using HTML, CSS, and \
                          JavaScript. I can teach you the fundamentals of modern web development."
                .into(),
            category: Category::Technology,
            experience_level: ExperienceLevel::Intermediate,
            location: "Remote".into(),
            owner: owner(101, "Alex Johnson", 1),
            image_url: Some("https://images.unsplash.com/photo-1547658719-da2b51169166".into()),
            created_at: datetime!(2023-05-15 12:00:00 UTC),
        },
        SkillListing {
            id: Uuid::from_u128(2),
            title: "Digital Photography".into(),
            description: "I can teach you photography basics including composition, lighting, \
                          and post-processing techniques. Bring your own camera."
                .into(),
            category: Category::Creative,
            experience_level: ExperienceLevel::Beginner,
            location: "New York, NY".into(),
            owner: owner(102, "Sarah Williams", 5),
            image_url: Some("https://images.unsplash.com/photo-1516035069371-29a1b244cc32".into()),
            created_at: datetime!(2023-05-10 15:30:00 UTC),
        },
        SkillListing {
            id: Uuid::from_u128(3),
            title: "Business Plan Development".into(),
            description: "I can help you create a comprehensive business plan for your startup \
                          or small business. Includes market research and financial projections."
                .into(),
            category: Category::Business,
            experience_level: ExperienceLevel::Advanced,
            location: "Remote".into(),
            owner: owner(103, "Michael Chen", 3),
            image_url: Some("https://images.unsplash.com/photo-1460925895917-afdab827c52f".into()),
            created_at: datetime!(2023-05-05 09:15:00 UTC),
        },
        SkillListing {
            id: Uuid::from_u128(4),
            title: "Yoga Instruction".into(),
            description: "Learn yoga basics for beginners. Focus on proper alignment, breathing \
                          techniques, and simple sequences you can practice at home."
                .into(),
            category: Category::Lifestyle,
            experience_level: ExperienceLevel::Beginner,
            location: "Los Angeles, CA".into(),
            owner: owner(104, "Emma Rodriguez", 9),
            image_url: Some("https://images.unsplash.com/photo-1544367567-0f2fcb009e0b".into()),
            created_at: datetime!(2023-04-28 14:00:00 UTC),
        },
        SkillListing {
            id: Uuid::from_u128(5),
            title: "Spanish Language Tutoring".into(),
            description: "Conversational Spanish lessons for beginners to intermediate \
                          learners. Learn practical phrases and grammar through immersive \
                          conversation."
                .into(),
            category: Category::Education,
            experience_level: ExperienceLevel::Intermediate,
            location: "Remote".into(),
            owner: owner(105, "Carlos Mendez", 7),
            image_url: Some("https://images.unsplash.com/photo-1457369804613-52c61a468e7d".into()),
            created_at: datetime!(2023-04-20 10:45:00 UTC),
        },
        SkillListing {
            id: Uuid::from_u128(6),
            title: "Mobile App Development".into(),
            description: "Learn how to build native mobile applications for iOS or Android. \
                          From setup to deployment."
                .into(),
            category: Category::Technology,
            experience_level: ExperienceLevel::Advanced,
            location: "Remote".into(),
            owner: owner(106, "David Kim", 8),
            image_url: Some("https://images.unsplash.com/photo-1522542550221-31fd19575a2d".into()),
            created_at: datetime!(2023-04-15 16:20:00 UTC),
        },
    ]
}
