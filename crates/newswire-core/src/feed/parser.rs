use feed_rs::parser;

use super::models::Headline;
use crate::{Error, Result};

/// Parse RSS/Atom content into candidate headlines. Entries without a title
/// are dropped here; everything else is the filter's problem.
pub fn parse_headlines(content: &[u8]) -> Result<Vec<Headline>> {
    let feed = parser::parse(content).map_err(|e| Error::FeedParse(e.to_string()))?;

    let headlines = feed
        .entries
        .into_iter()
        .filter_map(|entry| entry.title.map(|t| t.content))
        .filter(|title| !title.trim().is_empty())
        .map(|title| Headline { title })
        .collect();

    Ok(headlines)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RSS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Sample Feed</title>
    <item>
      <title>First headline</title>
      <link>https://example.com/1</link>
    </item>
    <item>
      <title>Second headline</title>
      <link>https://example.com/2</link>
    </item>
    <item>
      <title></title>
      <link>https://example.com/3</link>
    </item>
  </channel>
</rss>"#;

    #[test]
    fn test_parse_extracts_titles() {
        let headlines = parse_headlines(SAMPLE_RSS.as_bytes()).unwrap();
        assert_eq!(headlines.len(), 2);
        assert_eq!(headlines[0].title, "First headline");
        assert_eq!(headlines[1].title, "Second headline");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_headlines(b"this is not xml").is_err());
    }
}
