//! Visitor.
//!
//! Classic double dispatch over trait objects, plus the tagged-union
//! rendition where an enum and an exhaustive match replace accept().
//! Adding an operation means one new visitor; the elements stay
//! untouched.

pub struct MarkdownElement {
    pub text: String,
}

pub struct HtmlElement {
    pub items: Vec<String>,
}

pub trait DocumentVisitor {
    fn visit_markdown(&mut self, element: &MarkdownElement) -> Vec<String>;
    fn visit_html(&mut self, element: &HtmlElement) -> Vec<String>;
}

pub trait DocumentElement {
    fn accept(&self, visitor: &mut dyn DocumentVisitor) -> Vec<String>;
}

impl DocumentElement for MarkdownElement {
    fn accept(&self, visitor: &mut dyn DocumentVisitor) -> Vec<String> {
        visitor.visit_markdown(self)
    }
}

impl DocumentElement for HtmlElement {
    fn accept(&self, visitor: &mut dyn DocumentVisitor) -> Vec<String> {
        visitor.visit_html(self)
    }
}

/// Renders each element in its native syntax.
pub struct RenderVisitor;

impl DocumentVisitor for RenderVisitor {
    fn visit_markdown(&mut self, element: &MarkdownElement) -> Vec<String> {
        vec![format!("* {}", element.text)]
    }

    fn visit_html(&mut self, element: &HtmlElement) -> Vec<String> {
        let mut lines = vec!["<ul>".to_string()];
        for item in &element.items {
            lines.push(format!("\t<li>{item}</li>"));
        }
        lines.push("</ul>".to_string());
        lines
    }
}

/// A second operation added without touching the elements.
#[derive(Default)]
pub struct StatsVisitor {
    pub markdown_count: usize,
    pub html_count: usize,
    pub item_count: usize,
}

impl DocumentVisitor for StatsVisitor {
    fn visit_markdown(&mut self, _element: &MarkdownElement) -> Vec<String> {
        self.markdown_count += 1;
        Vec::new()
    }

    fn visit_html(&mut self, element: &HtmlElement) -> Vec<String> {
        self.html_count += 1;
        self.item_count += element.items.len();
        Vec::new()
    }
}

impl StatsVisitor {
    pub fn report(&self) -> String {
        format!(
            "{} markdown, {} html ({} items)",
            self.markdown_count, self.html_count, self.item_count
        )
    }
}

pub fn render_document(
    elements: &[Box<dyn DocumentElement>],
    visitor: &mut dyn DocumentVisitor,
) -> Vec<String> {
    let mut lines = Vec::new();
    for element in elements {
        lines.extend(element.accept(visitor));
    }
    lines
}

/// Tagged-union rendition. The match is exhaustive, so a new variant
/// is a compile error at every operation until handled.
pub enum Document {
    Markdown { text: String },
    Html { items: Vec<String> },
}

impl Document {
    pub fn render(&self) -> Vec<String> {
        match self {
            Document::Markdown { text } => vec![format!("* {text}")],
            Document::Html { items } => {
                let mut lines = vec!["<ul>".to_string()];
                for item in items {
                    lines.push(format!("\t<li>{item}</li>"));
                }
                lines.push("</ul>".to_string());
                lines
            }
        }
    }

    pub fn item_count(&self) -> usize {
        match self {
            Document::Markdown { .. } => 1,
            Document::Html { items } => items.len(),
        }
    }
}
