//! Markdown rendering with syntax highlighting

use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

use super::Content;

/// Compiles a post body into renderable HTML
pub struct MarkdownRenderer {
    syntax_set: SyntaxSet,
    theme: Theme,
    line_numbers: bool,
}

impl MarkdownRenderer {
    /// Create a renderer with the default theme and no line numbers
    pub fn new() -> Self {
        Self::with_options("base16-ocean.dark", false)
    }

    /// Create with custom settings. Unknown themes fall back to the default one.
    pub fn with_options(theme: &str, line_numbers: bool) -> Self {
        let mut theme_set = ThemeSet::load_defaults();
        let theme = match theme_set.themes.remove(theme) {
            Some(theme) => theme,
            None => {
                tracing::warn!("Unknown highlight theme {:?}, using base16-ocean.dark", theme);
                theme_set
                    .themes
                    .remove("base16-ocean.dark")
                    .unwrap_or_default()
            }
        };

        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme,
            line_numbers,
        }
    }

    /// Render a Markdown body
    pub fn render(&self, markdown: &str) -> Content {
        // Front-matter is stripped before the body gets here, so no
        // metadata-block option.
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_SMART_PUNCTUATION
            | Options::ENABLE_HEADING_ATTRIBUTES;
        let parser = Parser::new_ext(markdown, options);

        let mut events: Vec<Event> = Vec::new();
        let mut code_block: Option<(Option<String>, String)> = None;

        for event in parser {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(info) => info
                            .split_whitespace()
                            .next()
                            .map(|lang| lang.to_string()),
                        CodeBlockKind::Indented => None,
                    };
                    code_block = Some((lang, String::new()));
                }
                Event::End(TagEnd::CodeBlock) => {
                    if let Some((lang, code)) = code_block.take() {
                        let highlighted = self.highlight_code(&code, lang.as_deref());
                        events.push(Event::Html(CowStr::from(highlighted)));
                    }
                }
                Event::Text(text) if code_block.is_some() => {
                    if let Some((_, code)) = code_block.as_mut() {
                        code.push_str(&text);
                    }
                }
                event if code_block.is_none() => events.push(event),
                _ => {}
            }
        }

        let mut html_output = String::new();
        html::push_html(&mut html_output, events.into_iter());

        Content::new(html_output)
    }

    /// Highlight a code block
    fn highlight_code(&self, code: &str, lang: Option<&str>) -> String {
        let lang = lang.unwrap_or("text");

        let syntax = self
            .syntax_set
            .find_syntax_by_token(lang)
            .or_else(|| self.syntax_set.find_syntax_by_extension(lang))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let class = html_escape(lang);
        match highlighted_html_for_string(code, &self.syntax_set, syntax, &self.theme) {
            Ok(highlighted) if self.line_numbers => add_line_numbers(&highlighted, &class),
            Ok(highlighted) => format!(
                r#"<figure class="highlight {}">{}</figure>"#,
                class, highlighted
            ),
            Err(e) => {
                tracing::debug!("Highlighting failed for {}: {}", lang, e);
                format!(
                    r#"<pre><code class="language-{}">{}</code></pre>"#,
                    class,
                    html_escape(code)
                )
            }
        }
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Put a line-number gutter next to highlighted code
fn add_line_numbers(code: &str, class: &str) -> String {
    let gutter = (1..=code.lines().count())
        .map(|n| format!(r#"<span class="line-number">{}</span>"#, n))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<figure class="highlight {}"><table><tr><td class="gutter"><pre>{}</pre></td><td class="code">{}</td></tr></table></figure>"#,
        class, gutter, code
    )
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
