//! Fields that render as one label and one input.

use crate::error::{FormError, Result};
use crate::markup::{Attr, Node, Tag};
use crate::record::{attr, FieldRecord};

use super::FieldKind;

/// Prefix for every element id the renderer emits.
pub const ID_PREFIX: &str = "wufoo";

/// A field rendered as a single input with its label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleField {
    kind: FieldKind,
    name: String,
    element_id: String,
    title: String,
    classes: Vec<String>,
    value: Option<String>,
}

impl SingleField {
    pub(crate) fn from_record(kind: FieldKind, record: &FieldRecord) -> Result<Self> {
        debug_assert!(!kind.is_compound());

        let name = record.require_str(attr::ID)?;
        let title = record.require_str(attr::TITLE)?;
        let html_id = record.opt_str(attr::HTML_ID)?.unwrap_or(name);

        let mut classes = Vec::new();
        if record.require_str(attr::IS_REQUIRED)? == "1" {
            classes.push("required".to_string());
        }
        classes.extend(
            record
                .require_str(attr::CLASS_NAMES)?
                .split(' ')
                .filter(|c| !c.is_empty())
                .map(str::to_string),
        );
        if let Some(marker) = class_marker(kind) {
            classes.push(marker.to_string());
        }

        let value = if matches!(kind, FieldKind::Radio | FieldKind::Checkbox) {
            let label = record
                .opt_str(attr::LABEL)?
                .ok_or_else(|| FormError::malformed(name, attr::LABEL))?;
            Some(label.to_string())
        } else {
            None
        };

        Ok(Self {
            kind,
            name: name.to_string(),
            element_id: format!("{ID_PREFIX}-{html_id}"),
            title: title.to_string(),
            classes,
            value,
        })
    }

    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        self.kind
    }

    /// The `name` submitted with the form: the record's `ID`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The element id, `wufoo-` plus `HTMLID` (or `ID`).
    #[must_use]
    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    #[must_use]
    pub fn label_id(&self) -> String {
        format!("{}-label", self.element_id)
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// CSS classes shared by the input and its label.
    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// The `value` attribute of radio and checkbox inputs.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// The input's `type` attribute. Textareas have none.
    #[must_use]
    pub const fn input_type(&self) -> Option<&'static str> {
        match self.kind {
            FieldKind::TextArea => None,
            FieldKind::File => Some("file"),
            FieldKind::Radio => Some("radio"),
            FieldKind::Checkbox => Some("checkbox"),
            _ => Some("text"),
        }
    }

    #[must_use]
    pub const fn tag(&self) -> Tag {
        match self.kind {
            FieldKind::TextArea => Tag::Textarea,
            _ => Tag::Input,
        }
    }

    /// Whether the input is nested inside its label.
    #[must_use]
    pub const fn is_inline(&self) -> bool {
        matches!(self.kind, FieldKind::Radio | FieldKind::Checkbox)
    }

    /// Builds the input element.
    #[must_use]
    pub fn input(&self) -> Node {
        let mut input = Node::new(self.tag())
            .attr(Attr::Id, &self.element_id)
            .attr(Attr::Name, &self.name);
        if let Some(input_type) = self.input_type() {
            input = input.attr(Attr::Type, input_type);
        }
        if !self.classes.is_empty() {
            input = input.attr(Attr::Class, self.classes.join(" "));
        }
        if let Some(value) = &self.value {
            input = input.attr(Attr::Value, value);
        }
        input
    }

    /// Builds the label element, without the nested input.
    #[must_use]
    pub fn label(&self) -> Node {
        let mut label = Node::new(Tag::Label)
            .attr(Attr::For, &self.element_id)
            .attr(Attr::Id, self.label_id());
        if !self.classes.is_empty() {
            label = label.attr(Attr::Class, self.classes.join(" "));
        }
        label.text(&self.title)
    }

    /// Appends this field's markup to an existing fieldset.
    pub fn extend_fieldset(&self, fieldset: &mut Node) {
        if self.is_inline() {
            fieldset.append(self.label().child(self.input()));
        } else {
            fieldset.append(self.label());
            fieldset.append(self.input());
        }
    }

    /// Wraps this field in its own fieldset.
    #[must_use]
    pub fn fieldset(&self) -> Node {
        let mut fieldset = Node::new(Tag::Fieldset);
        self.extend_fieldset(&mut fieldset);
        fieldset
    }

    /// Appends this field's fieldset to `form`.
    pub fn extend_form(&self, form: &mut Node) {
        form.append(self.fieldset());
    }
}

const fn class_marker(kind: FieldKind) -> Option<&'static str> {
    match kind {
        FieldKind::Email => Some("email"),
        FieldKind::Url => Some("url"),
        _ => None,
    }
}
