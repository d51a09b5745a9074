// Mock 数据，仅在 `mock` feature 下编译
use archfolio_shared::{Article, ArticleCategory, ArticleInput};

/// Return a sample unpublished article for the edit route.
pub fn get_mock_article(id: &str) -> Option<Article> {
    mock_articles().into_iter().find(|a| a.id == id)
}

/// Echo a save request back as the stored article.
pub fn mock_saved_article(id: Option<&str>, input: &ArticleInput) -> Article {
    let id = id
        .map(str::to_string)
        .unwrap_or_else(|| format!("draft-{}", js_sys::Date::now() as u64));
    Article {
        id,
        title: input.title.clone(),
        description: input.description.clone(),
        content: input.content.clone(),
        tags: input.tags.clone(),
        category: input.category,
        featured_image: input.featured_image.clone(),
        published: input.publish,
    }
}

fn mock_articles() -> Vec<Article> {
    vec![
        Article {
            id: "post-001".to_string(),
            title: "Bridges of Lagos".to_string(),
            description: "How the Third Mainland Bridge shaped a lagoon city.".to_string(),
            content: "## Spanning the lagoon\n\nEleven kilometres of prestressed concrete..."
                .to_string(),
            tags: vec!["lagos".to_string(), "bridges".to_string(), "concrete".to_string()],
            category: ArticleCategory::Engineering,
            featured_image: None,
            published: false,
        },
        Article {
            id: "post-002".to_string(),
            title: "Courtyards and climate".to_string(),
            description: "Passive cooling lessons from vernacular housing.".to_string(),
            content: "Shaded courtyards lower peak indoor temperatures...".to_string(),
            tags: vec!["passive-design".to_string(), "housing".to_string()],
            category: ArticleCategory::Sustainability,
            featured_image: None,
            published: false,
        },
    ]
}
