use darling::{Error as DarlingError, FromDeriveInput, FromVariant, ast::Data};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Attribute, DeriveInput, Generics, Ident};

///
/// LabeledEnumInput
///

#[derive(Debug, FromDeriveInput)]
#[darling(supports(enum_unit), forward_attrs(repr))]
struct LabeledEnumInput {
    ident: Ident,
    generics: Generics,
    attrs: Vec<Attribute>,
    data: Data<LabeledVariant, ()>,
}

///
/// LabeledVariant
/// One unit variant plus its optional `#[label(...)]` metadata.
///

#[derive(Debug, FromVariant)]
#[darling(attributes(label))]
struct LabeledVariant {
    ident: Ident,

    #[darling(default)]
    name: Option<String>,

    #[darling(default)]
    description: Option<String>,
}

impl LabeledVariant {
    fn variant_entry(&self, enum_ident: &Ident) -> TokenStream {
        let ident = &self.ident;
        let ident_str = ident.to_string();

        quote! {
            ::enumlabel::Variant::from_discriminant(#ident_str, #enum_ident::#ident as i128)
        }
    }

    // unlabeled variants stay out of the side-table
    fn label_entry(&self) -> Option<TokenStream> {
        if self.name.is_none() && self.description.is_none() {
            return None;
        }

        let ident_str = self.ident.to_string();
        let name = quote_option(self.name.as_deref());
        let description = quote_option(self.description.as_deref());

        Some(quote! {
            ::enumlabel::DisplayLabel::new(#ident_str, #name, #description)
        })
    }
}

// 128-bit discriminants cannot be widened losslessly for the range check
fn check_repr(attrs: &[Attribute]) -> Result<(), DarlingError> {
    let mut errors = DarlingError::accumulator();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("repr")) {
        let parsed = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("u128") || meta.path.is_ident("i128") {
                errors.push(
                    DarlingError::custom(
                        "LabeledEnum values are i64; 128-bit reprs are not supported",
                    )
                    .with_span(&meta.path),
                );
            } else if meta.input.peek(syn::token::Paren) {
                // align(N) and friends
                let _ = meta.input.parse::<proc_macro2::Group>()?;
            }

            Ok(())
        });
        if let Err(err) = parsed {
            errors.push(err.into());
        }
    }

    errors.finish()
}

fn quote_option(value: Option<&str>) -> TokenStream {
    match value {
        Some(value) => quote!(::core::option::Option::Some(#value)),
        None => quote!(::core::option::Option::None),
    }
}

// derive_labeled_enum
pub fn derive_labeled_enum(input: TokenStream) -> TokenStream {
    match expand(input) {
        Ok(tokens) => tokens,
        Err(err) => err.write_errors(),
    }
}

fn expand(input: TokenStream) -> Result<TokenStream, DarlingError> {
    let input: DeriveInput = syn::parse2(input)?;
    let input = LabeledEnumInput::from_derive_input(&input)?;

    if !input.generics.params.is_empty() {
        return Err(
            DarlingError::custom("LabeledEnum cannot be derived for generic enums")
                .with_span(&input.generics),
        );
    }

    check_repr(&input.attrs)?;

    let ident = &input.ident;
    let ident_str = ident.to_string();
    let variants = input
        .data
        .take_enum()
        .ok_or_else(|| DarlingError::unsupported_shape("struct"))?;

    let variant_entries = variants.iter().map(|v| v.variant_entry(ident));
    let label_entries = variants.iter().filter_map(LabeledVariant::label_entry);

    let from_ident_arms = variants.iter().map(|v| {
        let variant = &v.ident;
        let variant_str = variant.to_string();

        quote!(#variant_str => ::core::option::Option::Some(Self::#variant),)
    });

    let ident_arms = variants.iter().map(|v| {
        let variant = &v.ident;
        let variant_str = variant.to_string();

        quote!(Self::#variant => #variant_str,)
    });

    Ok(quote! {
        #[automatically_derived]
        impl ::enumlabel::LabeledEnum for #ident {
            fn enum_type() -> &'static ::enumlabel::EnumType {
                static ENUM_TYPE: ::enumlabel::EnumType = ::enumlabel::EnumType::new(
                    #ident_str,
                    &[#(#variant_entries),*],
                    &[#(#label_entries),*],
                );

                &ENUM_TYPE
            }

            fn from_ident(ident: &str) -> ::core::option::Option<Self> {
                match ident {
                    #(#from_ident_arms)*
                    _ => ::core::option::Option::None,
                }
            }

            fn ident(&self) -> &'static str {
                match *self {
                    #(#ident_arms)*
                }
            }
        }
    })
}

///
/// TESTS
///
