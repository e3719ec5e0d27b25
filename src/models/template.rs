use serde::Serialize;

/// Limit the form applies to the editor; the server does not enforce it.
pub const MAX_CONTENT_LENGTH: usize = 3000;

// Quick-start templates offered by the form
const POST_TEMPLATES: &[&str] = &[
    "🚀 Exciting day ahead! Here's what I'm working on:\n\n• [Project/Task 1]\n• [Project/Task 2]\n• [Project/Task 3]\n\nWhat are you focusing on today? #DailyUpdate #Productivity",
    "💡 Today I learned:\n\n[Share your learning or insight]\n\nAlways growing, always learning! #LearningJourney #ProfessionalGrowth",
    "✅ Daily wins:\n\n1. [Achievement 1]\n2. [Achievement 2]\n3. [Achievement 3]\n\nCelebrating progress! What did you accomplish today? #Wins #Success",
    "🎯 Monday Motivation:\n\n[Your motivational message or quote]\n\n#MondayMotivation #Inspiration",
];

#[derive(Debug, Clone, Serialize)]
pub struct PostTemplate {
    pub title: &'static str,
    pub body: &'static str,
}

impl PostTemplate {
    fn from_body(body: &'static str) -> Self {
        let title = body.lines().next().unwrap_or(body);
        Self { title, body }
    }
}

pub fn get_post_templates() -> Vec<PostTemplate> {
    POST_TEMPLATES.iter().copied().map(PostTemplate::from_body).collect()
}
