use anyhow::Result;

use newswire_core::storage::{Database, PostRepository};
use newswire_core::AppConfig;

pub async fn run(config: &AppConfig, limit: Option<u32>) -> Result<()> {
    let db = Database::new(config).await?;
    let repo = PostRepository::new(&db);

    let limit = limit.unwrap_or(config.store.feed_limit);
    let posts = repo.list_recent(limit, config.store.max_age_hours).await?;

    if posts.is_empty() {
        println!("No posts stored.");
        return Ok(());
    }

    for post in posts {
        println!(
            "[{}] {} ({})",
            post.created_at.format("%Y-%m-%d %H:%M"),
            post.title,
            post.category
        );
        println!("    {}\n", post.summary);
    }

    Ok(())
}
