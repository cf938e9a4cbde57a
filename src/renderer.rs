use maud::{html, PreEscaped, DOCTYPE};

use crate::metadata::Metadata;

pub(crate) const DEFAULT_TITLE: &str = "Privacy Policy";
pub(crate) const DEFAULT_DESCRIPTION: &str =
    "Privacy policy generated from Markdown using the BluePen Proof docs build.";

const STYLESHEET: &str = r#"
:root {
  color-scheme: light dark;
  font-family: "Inter", system-ui, -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif;
  line-height: 1.6;
  font-size: 16px;
  background: #f5f5f7;
  color: #1c1c1e;
}
body {
  margin: 0;
  padding: 2rem;
  display: flex;
  justify-content: center;
}
main {
  max-width: 48rem;
  width: 100%;
  background: #ffffff;
  border-radius: 16px;
  padding: 2.5rem;
  box-shadow: 0 25px 45px rgba(0, 0, 0, 0.08);
}
h1, h2, h3, h4, h5 {
  font-weight: 600;
  line-height: 1.2;
}
h1 {
  font-size: 2.5rem;
  margin-top: 0;
}
h2 {
  margin-top: 2.5rem;
}
p {
  margin: 1rem 0;
}
ul {
  padding-left: 1.2rem;
}
a {
  color: #0070f3;
}
.meta {
  margin: 0;
  color: #6e6e73;
}
hr {
  border: none;
  border-top: 1px solid #e5e5ea;
  margin: 2rem 0;
}
@media (max-width: 640px) {
  body {
    padding: 1rem;
  }
  main {
    padding: 1.5rem;
  }
}
"#;

/// Wraps already converted body HTML into the standalone page.
///
/// Metadata values and `body_html` are embedded as-is, without escaping.
pub(crate) fn render_page(metadata: &Metadata, body_html: &str) -> String {
    let title = metadata.title().unwrap_or(DEFAULT_TITLE);
    let description = metadata.description().unwrap_or(DEFAULT_DESCRIPTION);

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (PreEscaped(title)) }
                meta name="description" content=(PreEscaped(description));
                style { (PreEscaped(STYLESHEET)) }
            }
            body {
                main {
                    header {
                        h1 { (PreEscaped(title)) }
                        @if let Some(date) = metadata.date() {
                            p.meta { "Updated: " (PreEscaped(date)) }
                        }
                        @if let Some(version) = metadata.version() {
                            p.meta { "Version: " (PreEscaped(version)) }
                        }
                        hr;
                    }
                    (PreEscaped(body_html))
                }
            }
        }
    }
    .into_string()
}
