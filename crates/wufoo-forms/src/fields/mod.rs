//! Field renderer: maps one schema record onto markup.
//!
//! [`Field::from_record`] is the factory. It reads the record's `Type`,
//! validates the attributes that type needs and returns an immutable
//! [`Field`]. Rendering then appends to a form node without keeping any
//! reference to it.

mod compound;
mod single;

pub use compound::CompoundField;
pub use single::SingleField;

use crate::error::{FormError, Result};
use crate::markup::Node;
use crate::record::{attr, FieldRecord, UNKNOWN_FIELD};

/// The closed set of field type tags understood by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Text,
    Email,
    Url,
    TextArea,
    File,
    Radio,
    Checkbox,
    ShortName,
    /// Checkbox group, one checkbox per `SubFields` entry.
    WufooCheckbox,
    /// Radio group, one radio per `Choices` entry.
    WufooRadio,
}

impl FieldKind {
    /// Every supported kind.
    pub const ALL: [Self; 10] = [
        Self::Text,
        Self::Email,
        Self::Url,
        Self::TextArea,
        Self::File,
        Self::Radio,
        Self::Checkbox,
        Self::ShortName,
        Self::WufooCheckbox,
        Self::WufooRadio,
    ];

    /// Returns the schema tag for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Url => "url",
            Self::TextArea => "textarea",
            Self::File => "file",
            Self::Radio => "radio",
            Self::Checkbox => "checkbox",
            Self::ShortName => "shortname",
            Self::WufooCheckbox => "wufoo-checkbox",
            Self::WufooRadio => "wufoo-radio",
        }
    }

    /// Parses a schema tag. Tags are matched exactly.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == tag)
    }

    /// Whether this kind expands into several inputs.
    #[must_use]
    pub const fn is_compound(self) -> bool {
        matches!(self, Self::ShortName | Self::WufooCheckbox | Self::WufooRadio)
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FieldKind {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_tag(s).ok_or_else(|| FormError::unsupported(UNKNOWN_FIELD, s))
    }
}

/// A validated field, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    Single(SingleField),
    Compound(CompoundField),
}

impl Field {
    /// Builds the field for a record, dispatching on its `Type`.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::UnsupportedFieldType`] for an unknown `Type`, and
    /// [`FormError::MalformedFieldRecord`] when an attribute the type needs
    /// is missing.
    pub fn from_record(record: &FieldRecord) -> Result<Self> {
        let type_name = record.require_str(attr::TYPE)?;
        let kind = FieldKind::from_tag(type_name)
            .ok_or_else(|| FormError::unsupported(record.id(), type_name))?;

        if kind.is_compound() {
            CompoundField::from_record(kind, record).map(Self::Compound)
        } else {
            SingleField::from_record(kind, record).map(Self::Single)
        }
    }

    /// The kind this field was built from.
    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        match self {
            Self::Single(f) => f.kind(),
            Self::Compound(f) => f.kind(),
        }
    }

    /// Builds the top-level `<fieldset>` for this field.
    #[must_use]
    pub fn fieldset(&self) -> Node {
        match self {
            Self::Single(f) => f.fieldset(),
            Self::Compound(f) => f.fieldset(),
        }
    }

    /// Appends this field's fieldset to `form`.
    pub fn extend_form(&self, form: &mut Node) {
        form.append(self.fieldset());
    }
}
