//! form! macro: parse tag syntax and generate formwork element builder code.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::ext::IdentExt;
use syn::parse::{Parse, ParseStream};
use syn::{Error, Ident, Lit, LitStr, Result, Token};

// ---------------------------------------------------------------------------
// AST types
// ---------------------------------------------------------------------------

/// A parsed attribute: `name="value"` or `name=true`. Names may contain
/// dashes (`required-suffix`) and keywords (`type`).
#[derive(Clone)]
pub(crate) struct Attribute {
    pub name: String,
    pub span: Span,
    pub value: Lit,
}

impl std::fmt::Debug for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Attribute")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// A parsed element: `<tag attrs... />` or `<tag attrs...> children </tag>`.
#[derive(Clone)]
pub(crate) struct Element {
    pub tag: Ident,
    pub attrs: Vec<Attribute>,
    pub children: Vec<Element>,
}

impl std::fmt::Debug for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Element")
            .field("tag", &self.tag.to_string())
            .field("attrs", &self.attrs)
            .field("children", &self.children)
            .finish()
    }
}

impl Element {
    fn attr(&self, name: &str) -> Option<&Attribute> {
        self.attrs.iter().find(|a| a.name == name)
    }
}

/// The top-level form! input: a sequence of elements.
#[derive(Debug)]
struct FormInput {
    elements: Vec<Element>,
}

// ---------------------------------------------------------------------------
// Tag and attribute tables
// ---------------------------------------------------------------------------

/// Constructors taking the field name.
const NAMED_TAGS: &[&str] = &[
    "input", "text", "email", "password", "hidden", "checkbox", "radio", "file", "select",
    "textarea",
];

/// Constructors taking the button content.
const CONTENT_TAGS: &[&str] = &["button", "submit", "reset"];

/// Attributes stored as element options rather than HTML attributes.
const OPTION_ATTRS: &[&str] = &[
    "label",
    "help",
    "prepend",
    "append",
    "btn",
    "btn-style",
    "container",
    "required-suffix",
];

/// The attribute consumed as the constructor argument, if the tag takes one.
fn constructor_attr(tag: &str) -> Option<&'static str> {
    if NAMED_TAGS.contains(&tag) {
        Some("name")
    } else if CONTENT_TAGS.contains(&tag) {
        Some("content")
    } else if tag == "fieldset" {
        Some("legend")
    } else {
        None
    }
}

fn is_known_tag(tag: &str) -> bool {
    NAMED_TAGS.contains(&tag) || CONTENT_TAGS.contains(&tag) || tag == "fieldset" || tag == "group"
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

impl Parse for FormInput {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut elements = Vec::new();
        while !input.is_empty() {
            elements.push(parse_element(input)?);
        }
        Ok(FormInput { elements })
    }
}

/// Parse `ident(-ident)*`, accepting keywords.
fn parse_attr_name(input: ParseStream) -> Result<(String, Span)> {
    let first = Ident::parse_any(input)?;
    let span = first.span();
    let mut name = first.to_string();
    while input.peek(Token![-]) {
        input.parse::<Token![-]>()?;
        let part = Ident::parse_any(input)?;
        name.push('-');
        name.push_str(&part.to_string());
    }
    Ok((name, span))
}

fn parse_attr_value(input: ParseStream) -> Result<Lit> {
    let value: Lit = input.parse()?;
    match value {
        Lit::Str(_) | Lit::Bool(_) => Ok(value),
        other => Err(Error::new(
            other.span(),
            "attribute values must be string or boolean literals",
        )),
    }
}

/// Parse a single element from the token stream.
pub(crate) fn parse_element(input: ParseStream) -> Result<Element> {
    input.parse::<Token![<]>()?;
    let tag = Ident::parse_any(input)?;

    let mut attrs = Vec::new();
    loop {
        if input.peek(Token![/]) {
            input.parse::<Token![/]>()?;
            input.parse::<Token![>]>()?;
            return Ok(Element {
                tag,
                attrs,
                children: Vec::new(),
            });
        }

        if input.peek(Token![>]) {
            input.parse::<Token![>]>()?;
            break;
        }

        let (name, span) = parse_attr_name(input)?;
        input.parse::<Token![=]>()?;
        let value = parse_attr_value(input)?;
        attrs.push(Attribute { name, span, value });
    }

    let mut children = Vec::new();
    loop {
        if input.peek(Token![<]) && input.peek2(Token![/]) {
            input.parse::<Token![<]>()?;
            input.parse::<Token![/]>()?;
            let closing_tag = Ident::parse_any(input)?;
            if closing_tag != tag {
                return Err(Error::new(
                    closing_tag.span(),
                    format!(
                        "mismatched closing tag: expected `</{}>`, found `</{}>`",
                        tag, closing_tag
                    ),
                ));
            }
            input.parse::<Token![>]>()?;
            break;
        }

        if input.peek(Token![<]) {
            children.push(parse_element(input)?);
        } else {
            return Err(input.error(
                "expected `<` to start a child element or `</` to close the parent",
            ));
        }
    }

    Ok(Element {
        tag,
        attrs,
        children,
    })
}

// ---------------------------------------------------------------------------
// Code generation
// ---------------------------------------------------------------------------

fn string_value(attr: &Attribute) -> Result<&LitStr> {
    match &attr.value {
        Lit::Str(value) => Ok(value),
        _ => Err(Error::new(
            attr.span,
            format!("`{}` must be a string literal", attr.name),
        )),
    }
}

/// `.with_choice(value, label)` for an `<option>` inside a `<select>`.
fn generate_choice(option: &Element) -> Result<TokenStream> {
    let value = option
        .attr("value")
        .ok_or_else(|| Error::new(option.tag.span(), "`<option>` requires a `value` attribute"))?;
    let value = string_value(value)?;
    let label = match option.attr("label") {
        Some(label) => string_value(label)?.clone(),
        None => value.clone(),
    };
    Ok(quote! { .with_choice(#value, #label) })
}

/// Generate code for a single element.
fn generate_element(elem: &Element) -> Result<TokenStream> {
    let tag_name = elem.tag.to_string().to_lowercase();
    if !is_known_tag(&tag_name) {
        return Err(Error::new(
            elem.tag.span(),
            format!("unknown form element `{}`", elem.tag),
        ));
    }
    let ctor = Ident::new(&tag_name, elem.tag.span());

    let ctor_attr = constructor_attr(&tag_name);
    let constructor = match ctor_attr {
        Some(required) => {
            let attr = elem.attr(required).ok_or_else(|| {
                Error::new(
                    elem.tag.span(),
                    format!("`<{}>` requires a `{}` attribute", tag_name, required),
                )
            })?;
            let value = string_value(attr)?;
            quote! { ::formwork::elements::#ctor(#value) }
        }
        None => quote! { ::formwork::elements::#ctor() },
    };

    let mut builder_calls = Vec::new();

    for attr in &elem.attrs {
        if Some(attr.name.as_str()) == ctor_attr {
            continue;
        }
        let val = &attr.value;
        let name = attr.name.as_str();

        let call = match name {
            "id" => quote! { .with_id(#val) },
            "class" => quote! { .with_class(#val) },
            "type" => quote! { .with_type(#val) },
            "value" => quote! { .with_value(#val) },
            "description" => quote! { .with_description(#val) },
            "error" => quote! { .with_error(#val) },
            _ if OPTION_ATTRS.contains(&name) => quote! { .with_option(#name, #val) },
            _ => quote! { .with_attr(#name, #val) },
        };
        builder_calls.push(call);
    }

    for child in &elem.children {
        if tag_name == "select" && child.tag == "option" {
            builder_calls.push(generate_choice(child)?);
            continue;
        }
        let child_code = generate_element(child)?;
        builder_calls.push(quote! { .with_child(#child_code) });
    }

    Ok(quote! {
        #constructor #(#builder_calls)*
    })
}

/// Entry point: generate code for the entire form! macro.
pub(crate) fn form_impl(input: TokenStream) -> Result<TokenStream> {
    let parsed: FormInput = syn::parse2(input)?;

    if parsed.elements.is_empty() {
        return Err(Error::new(
            Span::call_site(),
            "form! macro requires at least one element",
        ));
    }

    let element_exprs = parsed
        .elements
        .iter()
        .map(|elem| {
            let code = generate_element(elem)?;
            Ok(quote! {
                __elements.push(#code);
            })
        })
        .collect::<Result<Vec<TokenStream>>>()?;

    Ok(quote! {
        {
            let mut __elements: ::std::vec::Vec<::formwork::Element> = ::std::vec::Vec::new();
            #(#element_exprs)*
            __elements
        }
    })
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;

    fn parse_form(tokens: TokenStream) -> Result<FormInput> {
        syn::parse2(tokens)
    }

    fn parse_single_element(tokens: TokenStream) -> Result<Element> {
        syn::parse2::<FormInput>(tokens).map(|v| v.elements.into_iter().next().unwrap())
    }

    fn codegen(tokens: TokenStream) -> String {
        let elem = parse_single_element(tokens).unwrap();
        generate_element(&elem).unwrap().to_string()
    }

    // -----------------------------------------------------------------------
    // Parsing tests
    // -----------------------------------------------------------------------

    #[test]
    fn parse_self_closing_element() {
        let elem = parse_single_element(quote! { <email name="email" /> }).unwrap();
        assert_eq!(elem.tag.to_string(), "email");
        assert!(elem.children.is_empty());
        assert_eq!(elem.attrs.len(), 1);
        assert_eq!(elem.attrs[0].name, "name");
    }

    #[test]
    fn parse_keyword_and_dashed_names() {
        let elem = parse_single_element(quote! {
            <input name="a" type="number" required-suffix=" *" data-toggle="x" />
        })
        .unwrap();
        let names: Vec<&str> = elem.attrs.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["name", "type", "required-suffix", "data-toggle"]);
    }

    #[test]
    fn parse_boolean_values() {
        let elem = parse_single_element(quote! { <input name="a" required=true /> }).unwrap();
        assert!(matches!(elem.attrs[1].value, Lit::Bool(_)));
    }

    #[test]
    fn parse_rejects_numeric_values() {
        assert!(parse_single_element(quote! { <input name="a" maxlength=10 /> }).is_err());
    }

    #[test]
    fn parse_nested_groups() {
        let elem = parse_single_element(quote! {
            <fieldset legend="Account">
                <group>
                    <text name="user" />
                </group>
                <submit content="Save" />
            </fieldset>
        })
        .unwrap();
        assert_eq!(elem.children.len(), 2);
        assert_eq!(elem.children[0].children.len(), 1);
    }

    #[test]
    fn parse_multiple_root_elements() {
        let form = parse_form(quote! {
            <text name="a" />
            <text name="b" />
        })
        .unwrap();
        assert_eq!(form.elements.len(), 2);
    }

    #[test]
    fn parse_error_mismatched_closing_tag() {
        let err = parse_single_element(quote! {
            <group>
                <text name="a" />
            </fieldset>
        })
        .unwrap_err();
        assert!(err.to_string().contains("mismatched closing tag"));
    }

    // -----------------------------------------------------------------------
    // Code generation tests
    // -----------------------------------------------------------------------

    #[test]
    fn codegen_named_constructor() {
        let code = codegen(quote! { <email name="email" /> });
        assert!(code.contains(":: formwork :: elements :: email (\"email\")"), "{code}");
    }

    #[test]
    fn codegen_content_constructor() {
        let code = codegen(quote! { <Submit content="Go" btn="primary" /> });
        assert!(code.contains(":: formwork :: elements :: submit (\"Go\")"), "{code}");
        assert!(code.contains("with_option (\"btn\" , \"primary\")"), "{code}");
    }

    #[test]
    fn codegen_builder_mapping() {
        let code = codegen(quote! {
            <input name="a" id="x" class="wide" type="number" label="A"
                placeholder="0" required=true />
        });
        assert!(code.contains("with_id (\"x\")"), "{code}");
        assert!(code.contains("with_class (\"wide\")"), "{code}");
        assert!(code.contains("with_type (\"number\")"), "{code}");
        assert!(code.contains("with_option (\"label\" , \"A\")"), "{code}");
        assert!(code.contains("with_attr (\"placeholder\" , \"0\")"), "{code}");
        assert!(code.contains("with_attr (\"required\" , true)"), "{code}");
    }

    #[test]
    fn codegen_select_options_become_choices() {
        let code = codegen(quote! {
            <select name="color">
                <option value="r" label="Red" />
                <option value="g" />
            </select>
        });
        assert!(code.contains("with_choice (\"r\" , \"Red\")"), "{code}");
        assert!(code.contains("with_choice (\"g\" , \"g\")"), "{code}");
    }

    #[test]
    fn codegen_group_children() {
        let code = codegen(quote! {
            <fieldset legend="Login">
                <text name="user" />
            </fieldset>
        });
        assert!(code.contains("fieldset (\"Login\")"), "{code}");
        assert!(code.contains("with_child (:: formwork :: elements :: text (\"user\"))"), "{code}");
    }

    #[test]
    fn codegen_missing_constructor_attr() {
        let elem = parse_single_element(quote! { <email label="Email" /> }).unwrap();
        let err = generate_element(&elem).unwrap_err();
        assert!(err.to_string().contains("requires a `name` attribute"));
    }

    #[test]
    fn codegen_unknown_tag() {
        let elem = parse_single_element(quote! { <slider name="v" /> }).unwrap();
        let err = generate_element(&elem).unwrap_err();
        assert!(err.to_string().contains("unknown form element"));
    }

    #[test]
    fn codegen_full_form() {
        let code = form_impl(quote! {
            <text name="a" />
            <submit content="Go" />
        })
        .unwrap()
        .to_string();
        assert!(code.contains("__elements"));
        assert!(code.contains("text (\"a\")"));
        assert!(code.contains("submit (\"Go\")"));
    }

    #[test]
    fn codegen_empty_form_is_error() {
        let err = form_impl(quote! {}).unwrap_err();
        assert!(err.to_string().contains("at least one element"));
    }
}
