//! # wufoo-forms
//!
//! Renders an HTML form from the field schema of a Wufoo form.
//!
//! This crate provides:
//! - A blocking client for the `forms/{hash}/fields` endpoint
//! - A field renderer covering every supported Wufoo field type
//! - Form assembly with the hidden post-authorization field
//! - An owned markup tree serialized through `ironhtml`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use wufoo_forms::{make_form, ClientConfig};
//!
//! let config = ClientConfig::new("acme", "XXXX-XXXX-XXXX-XXXX");
//! let form = make_form(&config, "contact", "z7x4m1", "post-key")?;
//! println!("{}", form.render());
//! # Ok::<(), wufoo_forms::FormError>(())
//! ```
//!
//! ## Rendering Fetched Records
//!
//! ```rust
//! use wufoo_forms::{assemble_form, FieldsResponse, Tag};
//!
//! let body = r#"{"Fields":[{"ID":"Field1","Type":"text","Title":"Name",
//!     "IsRequired":"1","ClassNames":""}]}"#;
//! let schema: FieldsResponse = serde_json::from_str(body).unwrap();
//!
//! let form = assemble_form("/submit", "myform", "abc123", schema.fields).unwrap();
//! assert_eq!(form.fieldsets().len(), 1);
//! assert_eq!(form.root().find_all(Tag::Input).len(), 2);
//! ```
//!
//! ## Field Types
//!
//! | Type | Markup |
//! |---|---|
//! | `text`, `email`, `url` | `<input type="text">` with a separate label |
//! | `textarea` | `<textarea>` with a separate label |
//! | `file` | `<input type="file">` with a separate label |
//! | `checkbox`, `radio` | a legend plus one inline input per choice |
//! | `shortname` | one text input per name part |

mod client;
mod error;
pub mod fields;
mod form;
pub mod markup;
mod record;

pub use client::{api_url, ClientConfig, SchemaClient, SchemaSource, API_FORMAT, API_VERSION};
pub use error::{FormError, Result};
pub use fields::{CompoundField, Field, FieldKind, SingleField};
pub use form::{
    assemble_form, form_action_url, make_form, rewrite_type, FormAssembler, FormDocument,
    IGNORE_FIELDS, POST_KEY_NAME, TYPE_REWRITES,
};
pub use markup::{Attr, Node, Tag};
pub use record::{attr, FieldRecord, FieldsResponse, UNKNOWN_FIELD};
