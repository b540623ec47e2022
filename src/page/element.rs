/// Element in the virtual document tree
///
/// The render sink builds rows and chips as `Element` values; the page keeps
/// them as the contents of its regions and serializes them to HTML on demand.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute, replacing an existing value
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(existing) => existing.1 = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .map(|c| c.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    /// Child elements, skipping text nodes
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// Depth-first search for the first descendant (or self) with an attribute
    pub fn find_by_attr(&self, name: &str) -> Option<&Element> {
        if self.get_attr(name).is_some() {
            return Some(self);
        }
        self.child_elements().find_map(|e| e.find_by_attr(name))
    }

    /// Concatenated text of this element and its descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        write_html(self, &mut out);
        out
    }
}

fn collect_text(element: &Element, out: &mut String) {
    for node in &element.children {
        match node {
            Node::Text(t) => out.push_str(t),
            Node::Element(e) => collect_text(e, out),
        }
    }
}

fn write_html(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&element.tag);
    for (name, value) in &element.attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape_html(value));
        out.push('"');
    }
    out.push('>');
    for node in &element.children {
        match node {
            Node::Text(t) => out.push_str(&escape_html(t)),
            Node::Element(e) => write_html(e, out),
        }
    }
    out.push_str("</");
    out.push_str(&element.tag);
    out.push('>');
}

/// Escape text for use in HTML content and double-quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

    #[test]
    fn test_to_html_nested() {
        let el = Element::new("td")
            .class("team-col")
            .child(Element::new("a").attr("href", "teams/x.html").text("X"));
        assert_eq!(
            el.to_html(),
            "<td class=\"team-col\"><a href=\"teams/x.html\">X</a></td>"
        );
    }

    #[test]
    fn test_attr_replaces_existing() {
        let el = Element::new("th").attr("class", "a").attr("class", "b");
        assert_eq!(el.get_attr("class"), Some("b"));
        assert_eq!(el.to_html(), "<th class=\"b\"></th>");
    }

    #[test]
    fn test_escaping() {
        let el = Element::new("span").attr("data-x", "a\"b").text("<Tom & Jerry's>");
        assert_eq!(
            el.to_html(),
            "<span data-x=\"a&quot;b\">&lt;Tom &amp; Jerry&#39;s&gt;</span>"
        );
    }

    #[test]
    fn test_text_content_and_find() {
        let el = Element::new("span")
            .text("1996")
            .child(Element::new("button").attr("data-remove-year", "1996").text("×"));
        assert_eq!(el.text_content(), "1996×");
        let button = el.find_by_attr("data-remove-year").unwrap();
        assert_eq!(button.text_content(), "×");
        assert!(el.find_by_attr("data-clear-search").is_none());
    }

    #[test]
    fn test_has_class() {
        let el = Element::new("span").class("badge league-NBA tooltip");
        assert!(el.has_class("badge"));
        assert!(el.has_class("tooltip"));
        assert!(!el.has_class("league"));
    }
}
