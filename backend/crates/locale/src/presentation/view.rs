//! HTML View
//!
//! Server-rendered page: navigation, language switcher, title and
//! description. A small inline script keeps the chosen locale in
//! `localStorage` and switches to it on load.

use crate::application::config::LocaleConfig;
use crate::application::normalize::switch_locale_path;
use crate::application::resolve_page::PageContext;
use crate::domain::lang::Lang;

/// Render a full HTML document for `page`
pub fn render_page(page: &PageContext, config: &LocaleConfig) -> String {
    let lang = page.lang;
    let title = escape_html(page.title());
    let nav = render_nav(lang);
    let switcher = render_switcher(page);
    let description = page
        .description()
        .map(|d| format!("<p>{}</p>\n", escape_html(d)))
        .unwrap_or_default();
    let script = render_storage_script(lang, &config.storage_key);

    format!(
        "<!DOCTYPE html>\n<html lang=\"{lang}\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body>\n<main>\n<header>\n{nav}{switcher}<h1>{title}</h1>\n</header>\n{description}</main>\n{script}</body>\n</html>\n"
    )
}

fn render_nav(lang: Lang) -> String {
    format!("<nav>\n<a href=\"/{lang}\">Home</a>\n<a href=\"/{lang}/about\">About</a>\n</nav>\n")
}

fn render_switcher(page: &PageContext) -> String {
    let items: String = Lang::ALL
        .into_iter()
        .map(|lang| {
            if lang == page.lang {
                format!(
                    "<button type=\"button\" data-lang=\"{lang}\" disabled>{}</button>\n",
                    lang.label()
                )
            } else {
                let href = escape_html(&switch_locale_path(&page.path, lang));
                format!("<a href=\"{href}\" data-lang=\"{lang}\">{}</a>\n", lang.label())
            }
        })
        .collect();

    format!("<div class=\"language-switcher\">\n{items}</div>\n")
}

fn render_storage_script(lang: Lang, storage_key: &str) -> String {
    let key = js_string(storage_key);
    let current = js_string(lang.as_str());
    let known = Lang::ALL
        .iter()
        .map(|l| js_string(l.as_str()))
        .collect::<Vec<_>>()
        .join(",");

    format!(
        r#"<script>
(function () {{
  var key = {key};
  var current = {current};
  var known = [{known}];
  document.querySelectorAll("a[data-lang]").forEach(function (link) {{
    link.addEventListener("click", function () {{
      localStorage.setItem(key, link.getAttribute("data-lang"));
    }});
  }});
  var saved = localStorage.getItem(key);
  if (saved && saved !== current && known.indexOf(saved) !== -1) {{
    var target = document.querySelector('a[data-lang="' + saved + '"]');
    if (target) {{
      window.location.replace(target.getAttribute("href"));
    }}
  }}
}})();
</script>
"#
    )
}

/// JSON string literal, safe to embed in an inline script
fn js_string(value: &str) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| "\"\"".to_string())
        .replace("</", "<\\/")
}

/// Escape text for HTML content and attribute values
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
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
    use crate::domain::route_key::RouteKey;
    use crate::domain::translation::TranslationRecord;

    fn page(lang: Lang, path: &str, title: Option<&str>) -> PageContext {
        PageContext {
            lang,
            route_key: RouteKey::new("about"),
            path: path.to_string(),
            record: title.map(|t| TranslationRecord {
                title: Some(t.to_string()),
                description: Some("<b>desc</b>".to_string()),
            }),
        }
    }

    #[test]
    fn test_page_sections_in_document_order() {
        let html = render_page(&page(Lang::En, "/en/about", Some("About")), &LocaleConfig::default());
        let positions: Vec<usize> = ["<!DOCTYPE html>", "<nav>", "language-switcher", "<h1>About</h1>", "<p>", "<script>", "</html>"]
            .iter()
            .map(|needle| html.find(needle).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
        assert_eq!(html.matches("<title>About</title>").count(), 1);
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_switcher_disables_current_locale() {
        let html = render_page(&page(Lang::Ro, "/ro/about", Some("Despre")), &LocaleConfig::default());
        assert!(html.contains("<button type=\"button\" data-lang=\"ro\" disabled>RO</button>"));
        assert!(html.contains("<a href=\"/en/about\" data-lang=\"en\">EN</a>"));
    }

    #[test]
    fn test_nav_links_use_page_locale() {
        let html = render_page(&page(Lang::Ro, "/ro/about", Some("Despre")), &LocaleConfig::default());
        assert!(html.contains("<a href=\"/ro\">Home</a>"));
        assert!(html.contains("<a href=\"/ro/about\">About</a>"));
        assert!(html.contains("<html lang=\"ro\">"));
    }

    #[test]
    fn test_description_is_escaped() {
        let html = render_page(&page(Lang::En, "/en/about", Some("About")), &LocaleConfig::default());
        assert!(html.contains("<p>&lt;b&gt;desc&lt;/b&gt;</p>"));
    }

    #[test]
    fn test_missing_record_renders_not_found_title() {
        let html = render_page(&page(Lang::En, "/en/nope", None), &LocaleConfig::default());
        assert!(html.contains("<h1>Page Not Found</h1>"));
        assert!(!html.contains("<p>"));
    }

    #[test]
    fn test_script_uses_storage_key() {
        let html = render_page(&page(Lang::En, "/en", Some("Welcome")), &LocaleConfig::default());
        assert!(html.contains("var key = \"app-language\";"));
        assert!(html.contains("var current = \"en\";"));
    }
}
