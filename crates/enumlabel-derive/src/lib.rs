use proc_macro::TokenStream;

mod labeled_enum;

/// Derive `enumlabel::LabeledEnum` for a fieldless enum.
///
/// Variants take an optional `#[label(name = "...", description = "...")]`;
/// either key may be omitted.
#[proc_macro_derive(LabeledEnum, attributes(label))]
pub fn derive_labeled_enum(input: TokenStream) -> TokenStream {
    labeled_enum::derive_labeled_enum(input.into()).into()
}
