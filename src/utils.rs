/// Text processing utilities
pub mod text {
    /// Extract clean text content from HTML.
    ///
    /// Drops everything between `<` and `>` and collapses whitespace. This
    /// is a text filter, not an HTML parser; feed summaries need no more.
    pub fn strip_html(html: &str) -> String {
        html.chars()
            .fold((String::new(), false), |(mut text, in_tag), c| match c {
                '<' => (text, true),
                '>' => (text, false),
                _ if !in_tag => {
                    text.push(c);
                    (text, in_tag)
                }
                _ => (text, in_tag),
            })
            .0
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Truncate to at most `max_chars` characters, appending `marker` if
    /// anything was cut. Counts characters, not bytes.
    pub fn clip(text: &str, max_chars: usize, marker: &str) -> String {
        if text.chars().count() <= max_chars {
            return text.to_string();
        }
        let mut clipped: String = text.chars().take(max_chars).collect();
        clipped.push_str(marker);
        clipped
    }
}

/// URL utilities
pub mod url {
    use url::Url;

    /// Validate feed URL format
    pub fn is_http_url(url_str: &str) -> bool {
        if let Ok(url) = Url::parse(url_str) {
            url.scheme() == "http" || url.scheme() == "https"
        } else {
            false
        }
    }
}
