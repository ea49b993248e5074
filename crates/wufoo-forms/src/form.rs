//! Form assembly: fetch, filter, rewrite, render, finalize.

use tracing::{debug, info};

use crate::client::{ClientConfig, SchemaClient, SchemaSource};
use crate::error::Result;
use crate::fields::Field;
use crate::markup::{render_form, Attr, Node, Tag};
use crate::record::{attr, FieldRecord};

/// Server-managed fields that are never rendered as inputs.
pub const IGNORE_FIELDS: &[&str] = &[
    "EntryId",
    "DateCreated",
    "CreatedBy",
    "LastUpdated",
    "UpdatedBy",
];

/// Type tags rewritten before dispatch. The API's native checkbox and radio
/// records are multi-choice groups, not single inputs.
pub const TYPE_REWRITES: &[(&str, &str)] =
    &[("checkbox", "wufoo-checkbox"), ("radio", "wufoo-radio")];

/// Name of the hidden input carrying the post-authorization token.
pub const POST_KEY_NAME: &str = "idstamp";

/// Returns the public submission URL of a form.
#[must_use]
pub fn form_action_url(domain: &str, form_hash: &str) -> String {
    format!("https://{domain}.wufoo.com/forms/{form_hash}/")
}

/// A fully assembled `<form>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormDocument {
    root: Node,
}

impl FormDocument {
    /// The root `<form>` node.
    #[must_use]
    pub const fn root(&self) -> &Node {
        &self.root
    }

    /// Top-level fieldsets, one per rendered record.
    #[must_use]
    pub fn fieldsets(&self) -> Vec<&Node> {
        self.root
            .children()
            .iter()
            .filter(|n| n.tag() == Tag::Fieldset)
            .collect()
    }

    /// Serializes the form as HTML.
    #[must_use]
    pub fn render(&self) -> String {
        render_form(&self.root)
    }
}

impl std::fmt::Display for FormDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

/// Applies [`TYPE_REWRITES`] to a record in place.
pub fn rewrite_type(record: &mut FieldRecord) {
    let Some(current) = record.get(attr::TYPE).and_then(serde_json::Value::as_str) else {
        return;
    };
    if let Some((src, dst)) = TYPE_REWRITES.iter().find(|(src, _)| *src == current) {
        debug!(field = record.id(), from = src, to = dst, "rewriting field type");
        record.set(attr::TYPE, *dst);
    }
}

/// Builds a form from already-fetched records.
///
/// Records are rendered in the order given. Any record that fails to render
/// aborts the whole assembly.
///
/// # Errors
///
/// Returns the first renderer error; no partial document is produced.
pub fn assemble_form(
    action: &str,
    form_id: &str,
    post_key: &str,
    records: Vec<FieldRecord>,
) -> Result<FormDocument> {
    let mut form = Node::new(Tag::Form)
        .attr(Attr::Action, action)
        .attr(Attr::Method, "post")
        .attr(Attr::Id, form_id);

    let mut rendered = 0usize;
    for mut record in records {
        if IGNORE_FIELDS.contains(&record.id()) {
            debug!(field = record.id(), "skipping system field");
            continue;
        }

        rewrite_type(&mut record);
        Field::from_record(&record)?.extend_form(&mut form);
        rendered += 1;
    }

    form.append(
        Node::new(Tag::Input)
            .attr(Attr::Type, "hidden")
            .attr(Attr::Name, POST_KEY_NAME)
            .attr(Attr::Id, format!("wufoo-{POST_KEY_NAME}"))
            .attr(Attr::Value, post_key),
    );

    info!(form_id, fields = rendered, "assembled form");
    Ok(FormDocument { root: form })
}

/// Fetches a form schema and renders it.
#[derive(Debug)]
pub struct FormAssembler<S> {
    source: S,
    domain: String,
}

impl<S: SchemaSource> FormAssembler<S> {
    /// Creates an assembler for forms hosted under `domain`.
    #[must_use]
    pub fn new(source: S, domain: impl Into<String>) -> Self {
        Self {
            source,
            domain: domain.into(),
        }
    }

    /// Fetches the fields of `form_hash` and assembles the form.
    ///
    /// # Errors
    ///
    /// Propagates schema-fetch errors unchanged, and renderer errors as
    /// [`assemble_form`] does.
    pub fn make_form(
        &self,
        form_id: &str,
        form_hash: &str,
        post_key: &str,
    ) -> Result<FormDocument> {
        let records = self.source.get_fields(form_hash)?;
        let action = form_action_url(&self.domain, form_hash);
        assemble_form(&action, form_id, post_key, records)
    }
}

impl FormAssembler<SchemaClient> {
    /// Creates an assembler backed by the HTTP schema client.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Transport`](crate::FormError::Transport) if the
    /// HTTP client cannot be built.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let client = SchemaClient::new(config)?;
        let domain = client.domain().to_string();
        Ok(Self::new(client, domain))
    }
}

/// Fetches and renders a form in one call.
///
/// # Errors
///
/// See [`FormAssembler::make_form`].
pub fn make_form(
    config: &ClientConfig,
    form_id: &str,
    form_hash: &str,
    post_key: &str,
) -> Result<FormDocument> {
    let assembler = FormAssembler::from_config(config)?;
    assembler.make_form(form_id, form_hash, post_key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormError;
    use serde_json::json;

    fn records(value: serde_json::Value) -> Vec<FieldRecord> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_form_action_url() {
        assert_eq!(
            form_action_url("acme", "z7x4m1"),
            "https://acme.wufoo.com/forms/z7x4m1/"
        );
    }

    #[test]
    fn test_rewrite_type() {
        let mut checkbox = FieldRecord::new()
            .with("ID", "Field1")
            .with("Type", "checkbox");
        rewrite_type(&mut checkbox);
        assert_eq!(checkbox.require_str("Type").unwrap(), "wufoo-checkbox");

        let mut radio = FieldRecord::new().with("Type", "radio");
        rewrite_type(&mut radio);
        assert_eq!(radio.require_str("Type").unwrap(), "wufoo-radio");

        let mut text = FieldRecord::new().with("Type", "text");
        rewrite_type(&mut text);
        assert_eq!(text.require_str("Type").unwrap(), "text");
    }

    #[test]
    fn test_form_attributes_and_hidden_field() {
        let doc = assemble_form("/submit", "myform", "abc123", Vec::new()).unwrap();
        let root = doc.root();
        assert_eq!(root.tag(), Tag::Form);
        assert_eq!(root.get_attr(Attr::Action), Some("/submit"));
        assert_eq!(root.get_attr(Attr::Method), Some("post"));
        assert_eq!(root.get_attr(Attr::Id), Some("myform"));

        let last = root.children().last().unwrap();
        assert_eq!(last.get_attr(Attr::Type), Some("hidden"));
        assert_eq!(last.get_attr(Attr::Name), Some("idstamp"));
        assert_eq!(last.get_attr(Attr::Id), Some("wufoo-idstamp"));
        assert_eq!(last.get_attr(Attr::Value), Some("abc123"));
    }

    #[test]
    fn test_order_preserved() {
        let fields = records(json!([
            {"ID": "Field3", "Type": "text", "Title": "C", "IsRequired": "0", "ClassNames": ""},
            {"ID": "Field1", "Type": "textarea", "Title": "A", "IsRequired": "0", "ClassNames": ""},
            {"ID": "Field2", "Type": "file", "Title": "B", "IsRequired": "0", "ClassNames": ""}
        ]));
        let doc = assemble_form("/", "f", "k", fields).unwrap();
        let titles: Vec<_> = doc
            .fieldsets()
            .iter()
            .map(|fs| fs.children()[0].text_content().unwrap())
            .collect();
        assert_eq!(titles, ["C", "A", "B"]);
    }

    #[test]
    fn test_failure_aborts() {
        let fields = records(json!([
            {"ID": "Field1", "Type": "text", "Title": "A", "IsRequired": "0", "ClassNames": ""},
            {"ID": "Field2", "Type": "unknown", "Title": "B", "IsRequired": "0", "ClassNames": ""}
        ]));
        let err = assemble_form("/", "f", "k", fields).unwrap_err();
        assert!(matches!(err, FormError::UnsupportedFieldType { .. }));
    }
}
