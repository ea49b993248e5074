//! Fields that expand into a fieldset of several inputs.

use crate::error::Result;
use crate::markup::{Node, Tag};
use crate::record::{attr, FieldRecord};

use super::single::ID_PREFIX;
use super::{FieldKind, SingleField};

/// A group of single fields that share one title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompoundField {
    kind: FieldKind,
    legend: Option<String>,
    members: Vec<SingleField>,
}

impl CompoundField {
    pub(crate) fn from_record(kind: FieldKind, record: &FieldRecord) -> Result<Self> {
        debug_assert!(kind.is_compound());

        let id = record.require_str(attr::ID)?;
        let html_id = record.opt_str(attr::HTML_ID)?.unwrap_or(id);
        // Members are keyed on the parent's full element id.
        let parent_ref = format!("{ID_PREFIX}-{html_id}");
        let title = record.require_str(attr::TITLE)?;

        let (collection, member_kind) = match kind {
            FieldKind::WufooRadio => (attr::CHOICES, FieldKind::Radio),
            FieldKind::WufooCheckbox => (attr::SUB_FIELDS, FieldKind::Checkbox),
            _ => (attr::SUB_FIELDS, FieldKind::Text),
        };
        let legend = (kind != FieldKind::ShortName).then(|| title.to_string());

        let members = record
            .entries(collection)?
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let mut sub = record.overlaid(entry);
                let label = sub.require_str(attr::LABEL)?;
                let sub_title = if kind == FieldKind::ShortName {
                    format!("{label} {title}")
                } else {
                    label.to_string()
                };

                sub.set(attr::TYPE, member_kind.as_str());
                sub.set(attr::TITLE, sub_title);
                sub.set(attr::HTML_ID, format!("{parent_ref}-{index}"));
                SingleField::from_record(member_kind, &sub)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            kind,
            legend,
            members,
        })
    }

    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        self.kind
    }

    /// The group title, shown as a `<legend>`. Short-name fields have none.
    #[must_use]
    pub fn legend(&self) -> Option<&str> {
        self.legend.as_deref()
    }

    /// The synthesized sub-fields, in schema order.
    #[must_use]
    pub fn members(&self) -> &[SingleField] {
        &self.members
    }

    /// Builds one fieldset holding the legend and every sub-field.
    #[must_use]
    pub fn fieldset(&self) -> Node {
        let mut fieldset = Node::new(Tag::Fieldset);
        if let Some(legend) = &self.legend {
            fieldset.append(Node::new(Tag::Legend).text(legend));
        }
        for member in &self.members {
            member.extend_fieldset(&mut fieldset);
        }
        fieldset
    }

    /// Appends the group's fieldset to `form`.
    pub fn extend_form(&self, form: &mut Node) {
        form.append(self.fieldset());
    }
}
