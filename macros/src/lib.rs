//! Proc macros for formwork: `form!` tag syntax for building element trees.
//!
//! This crate is not meant to be used directly; enable the `macros` feature on `formwork`.

use proc_macro::TokenStream;

mod form_macro;

/// Tag-style form composition macro.
///
/// Expands to a `Vec<formwork::Element>` built with the constructors in
/// `formwork::elements`.
///
/// # Syntax
///
/// - `<tag attr="val" />` for a leaf element
/// - `<group> ... </group>` or `<fieldset legend="..."> ... </fieldset>` for groups
/// - `<option value="v" label="Label" />` inside `<select>` adds a choice
///
/// # Attributes
///
/// - `name` (inputs, select, textarea), `content` (buttons) and `legend`
///   (fieldset) become the constructor argument
/// - `id`, `class`, `type`, `value`, `description`, `error` map to the
///   matching `with_*` builder
/// - `label`, `help`, `prepend`, `append`, `btn`, `btn-style`, `container`,
///   `required-suffix` become options
/// - Anything else becomes an HTML attribute; `required=true` sets a flag
///
/// # Example
///
/// ```ignore
/// let fields = form! {
///     <fieldset legend="Sign in">
///         <email name="email" label="Email" required=true />
///         <password name="password" label="Password" />
///         <submit content="Sign in" btn="primary" />
///     </fieldset>
/// };
/// ```
#[proc_macro]
pub fn form(input: TokenStream) -> TokenStream {
    form_macro::form_impl(input.into())
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}
