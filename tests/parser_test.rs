use news_digest::parser;

const RSS_FIXTURE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Example Tech</title>
    <link>https://example.com</link>
    <description>Example feed</description>
    <item>
      <title>First article</title>
      <link>https://example.com/first</link>
      <guid isPermaLink="false">tag:example.com,2026:first</guid>
      <description>&lt;p&gt;Plain &lt;b&gt;rich&lt;/b&gt; summary&lt;/p&gt;</description>
      <pubDate>Wed, 05 Aug 2026 10:00:00 GMT</pubDate>
    </item>
    <item>
      <title>No timestamp</title>
      <link>https://example.com/no-ts</link>
      <guid isPermaLink="false">tag:example.com,2026:no-ts</guid>
      <description>Still parsed, selector drops it later</description>
    </item>
  </channel>
</rss>"#;

const ATOM_FIXTURE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Example Atom</title>
  <id>urn:uuid:feed</id>
  <updated>2026-08-05T10:00:00Z</updated>
  <entry>
    <title>Atom entry</title>
    <id>urn:uuid:entry-1</id>
    <link href="https://example.com/atom-1"/>
    <published>2026-08-05T09:30:00Z</published>
    <updated>2026-08-05T09:30:00Z</updated>
    <summary>Atom summary</summary>
  </entry>
</feed>"#;

#[test]
fn rss_entries_parse_in_document_order() {
    let entries = parser::parse_feed(RSS_FIXTURE.as_bytes()).unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].title, "First article");
    assert_eq!(entries[1].title, "No timestamp");
}

#[test]
fn guid_prefers_the_feed_supplied_id() {
    let entries = parser::parse_feed(RSS_FIXTURE.as_bytes()).unwrap();

    assert_eq!(
        entries[0].guid.as_deref(),
        Some("tag:example.com,2026:first")
    );
    assert_eq!(entries[0].link, "https://example.com/first");
}

#[test]
fn publish_timestamp_is_optional() {
    let entries = parser::parse_feed(RSS_FIXTURE.as_bytes()).unwrap();

    let published = entries[0].published.expect("first entry has a pubDate");
    assert_eq!(published.to_rfc3339(), "2026-08-05T10:00:00+00:00");
    assert!(entries[1].published.is_none());
}

#[test]
fn summary_markup_survives_parsing_untouched() {
    // Normalization happens at selection time, not parse time.
    let entries = parser::parse_feed(RSS_FIXTURE.as_bytes()).unwrap();
    assert_eq!(entries[0].summary, "<p>Plain <b>rich</b> summary</p>");
}

#[test]
fn atom_documents_parse_too() {
    let entries = parser::parse_feed(ATOM_FIXTURE.as_bytes()).unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].guid.as_deref(), Some("urn:uuid:entry-1"));
    assert_eq!(entries[0].link, "https://example.com/atom-1");
    assert_eq!(entries[0].summary, "Atom summary");
    assert!(entries[0].published.is_some());
}

#[test]
fn malformed_documents_are_a_parse_error() {
    assert!(parser::parse_feed(b"this is not a feed").is_err());
    assert!(parser::parse_feed(b"<html><body>404</body></html>").is_err());
}
