//! HTML fragments for enriched repositories.

use crate::models::RepoRecord;

/// Render one enriched repository as a self-contained fragment.
///
/// Name, link, and description are escaped. The README body is inserted as
/// is: the upstream returns it already rendered to HTML.
pub fn repo_fragment(record: &RepoRecord) -> String {
    format!(
        "<article class=\"repo\">\n  \
         <h3><a href=\"{url}\">{name}</a></h3>\n  \
         <p>{description}</p>\n  \
         <section class=\"readme\">{readme}</section>\n\
         </article>",
        url = escape(&record.html_url),
        name = escape(&record.full_name),
        description = escape(record.description.as_deref().unwrap_or("")),
        readme = record.readme,
    )
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RepoSummary;

    #[test]
    fn test_fragment_contains_name_link_and_readme() {
        let summary = RepoSummary {
            full_name: "octocat/hello-world".to_string(),
            description: Some("My first repo".to_string()),
            html_url: "https://github.com/octocat/hello-world".to_string(),
        };
        let record = RepoRecord::new(&summary, "<h1>Hello</h1>".to_string());
        let html = repo_fragment(&record);
        assert!(html.contains("octocat/hello-world"));
        assert!(html.contains("https://github.com/octocat/hello-world"));
        assert!(html.contains("<h1>Hello</h1>"));
    }

    #[test]
    fn test_summary_fields_are_escaped() {
        let summary = RepoSummary {
            full_name: "evil/<script>".to_string(),
            description: Some("a & b".to_string()),
            html_url: "https://example.com/\"quote".to_string(),
        };
        let record = RepoRecord::new(&summary, String::new());
        let html = repo_fragment(&record);
        assert!(html.contains("evil/&lt;script&gt;"));
        assert!(html.contains("a &amp; b"));
        assert!(html.contains("&quot;quote"));
        assert!(!html.contains("<script>"));
    }
}
