//! Owned markup tree produced by the field renderer.
//!
//! Nodes are plain values: a tag, ordered attributes, optional text and
//! ordered children. Only this crate builds them; callers inspect them or
//! serialize the whole form with [`FormDocument::render`](crate::FormDocument::render).

mod render;

pub(crate) use render::render_form;

/// Element tags the renderer emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Form,
    Fieldset,
    Legend,
    Label,
    Input,
    Textarea,
}

impl Tag {
    /// Returns the HTML tag name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Form => "form",
            Self::Fieldset => "fieldset",
            Self::Legend => "legend",
            Self::Label => "label",
            Self::Input => "input",
            Self::Textarea => "textarea",
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attribute names the renderer emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attr {
    Id,
    Name,
    Type,
    Class,
    For,
    Value,
    Action,
    Method,
}

impl Attr {
    /// Returns the HTML attribute name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Type => "type",
            Self::Class => "class",
            Self::For => "for",
            Self::Value => "value",
            Self::Action => "action",
            Self::Method => "method",
        }
    }
}

impl std::fmt::Display for Attr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single element in the markup tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    tag: Tag,
    attrs: Vec<(Attr, String)>,
    text: Option<String>,
    children: Vec<Self>,
}

impl Node {
    pub(crate) const fn new(tag: Tag) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Sets an attribute. Re-setting keeps the original position.
    #[must_use]
    pub(crate) fn attr(mut self, name: Attr, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    #[must_use]
    pub(crate) fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[must_use]
    pub(crate) fn child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    pub(crate) fn append(&mut self, child: Self) {
        self.children.push(child);
    }

    /// The element tag.
    #[must_use]
    pub const fn tag(&self) -> Tag {
        self.tag
    }

    /// Attributes in insertion order.
    #[must_use]
    pub fn attrs(&self) -> &[(Attr, String)] {
        &self.attrs
    }

    /// Looks up an attribute value.
    #[must_use]
    pub fn get_attr(&self, name: Attr) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// The `class` attribute split into its entries.
    #[must_use]
    pub fn classes(&self) -> Vec<&str> {
        self.get_attr(Attr::Class)
            .map(|c| c.split_whitespace().collect())
            .unwrap_or_default()
    }

    /// Text content, rendered after any children.
    #[must_use]
    pub fn text_content(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Direct children in document order.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// All descendants in document (pre-)order, excluding `self`.
    #[must_use]
    pub fn descendants(&self) -> Vec<&Self> {
        let mut out = Vec::new();
        for child in &self.children {
            out.push(child);
            out.extend(child.descendants());
        }
        out
    }

    /// Descendants with the given tag, in document order.
    #[must_use]
    pub fn find_all(&self, tag: Tag) -> Vec<&Self> {
        self.descendants()
            .into_iter()
            .filter(|n| n.tag == tag)
            .collect()
    }
}
