//! HTML serialization of the markup tree.

use ironhtml::html;
use ironhtml::typed::Element;
use ironhtml_elements::{Fieldset, Input, Label, Legend, Textarea};

use super::{Attr, Node, Tag};

fn attrs_except<'a>(
    node: &'a Node,
    skip: &'a [Attr],
) -> impl Iterator<Item = (&'static str, &'a str)> {
    node.attrs()
        .iter()
        .filter(move |(name, _)| !skip.contains(name))
        .map(|(name, value)| (name.as_str(), value.as_str()))
}

/// Renders a `<form>` node and everything below it.
pub fn render_form(form: &Node) -> String {
    let action = form.get_attr(Attr::Action).unwrap_or_default();
    let method = form.get_attr(Attr::Method).unwrap_or_default();

    let el = html! { form.action(#action).method(#method) };
    let el = attrs_except(form, &[Attr::Action, Attr::Method])
        .fold(el, |el, (name, value)| el.attr(name, value));

    form.children()
        .iter()
        .fold(el, |el, child| match child.tag() {
            Tag::Fieldset => el.child::<Fieldset, _>(|fs| render_fieldset(fs, child)),
            Tag::Input => el.child::<Input, _>(|i| render_input(i, child)),
            // Never placed directly in a form by the renderer.
            Tag::Form | Tag::Legend | Tag::Label | Tag::Textarea => el,
        })
        .render()
}

fn render_fieldset(fs: Element<Fieldset>, node: &Node) -> Element<Fieldset> {
    let fs = attrs_except(node, &[]).fold(fs, |el, (name, value)| el.attr(name, value));

    node.children().iter().fold(fs, |fs, child| match child.tag() {
        Tag::Legend => fs.child::<Legend, _>(|l| render_legend(l, child)),
        Tag::Label => fs.child::<Label, _>(|l| render_label(l, child)),
        Tag::Input => fs.child::<Input, _>(|i| render_input(i, child)),
        Tag::Textarea => fs.child::<Textarea, _>(|t| render_textarea(t, child)),
        Tag::Form | Tag::Fieldset => fs,
    })
}

fn render_legend(legend: Element<Legend>, node: &Node) -> Element<Legend> {
    let legend = attrs_except(node, &[]).fold(legend, |el, (name, value)| el.attr(name, value));
    match node.text_content() {
        Some(text) => legend.text(text),
        None => legend,
    }
}

fn render_label(label: Element<Label>, node: &Node) -> Element<Label> {
    let label = attrs_except(node, &[]).fold(label, |el, (name, value)| el.attr(name, value));

    // Inline fields nest their input ahead of the label text.
    let label = node
        .children()
        .iter()
        .filter(|child| child.tag() == Tag::Input)
        .fold(label, |label, child| {
            label.child::<Input, _>(|i| render_input(i, child))
        });

    match node.text_content() {
        Some(text) => label.text(text),
        None => label,
    }
}

fn render_input(input: Element<Input>, node: &Node) -> Element<Input> {
    attrs_except(node, &[]).fold(input, |el, (name, value)| el.attr(name, value))
}

fn render_textarea(area: Element<Textarea>, node: &Node) -> Element<Textarea> {
    let area = attrs_except(node, &[]).fold(area, |el, (name, value)| el.attr(name, value));
    match node.text_content() {
        Some(text) => area.text(text),
        None => area,
    }
}
