//! Label lookups over an enumeration's static metadata.
//!
//! Every entry point funnels into [`find`]: scan the label side-table for
//! the queried field, reject ambiguous declarations, then re-resolve the
//! single matching label to its constant by ident.
//!
//! The untyped entry points take the type token at runtime; the typed ones
//! fix it through `E: LabeledEnum`. Absent arguments are modelled as `None`
//! and rejected with `LookupError::InvalidArgument` before any scan.

use crate::{
    error::LookupError,
    model::{EnumType, LabelField, Variant},
    traits::LabeledEnum,
};
use tracing::{debug, trace};

/// Constant of `ty` whose display description equals `description`.
pub fn variant_by_description(
    ty: Option<&EnumType>,
    description: Option<&str>,
) -> Result<Option<&'static Variant>, LookupError> {
    let ty = ty.ok_or_else(|| LookupError::invalid_argument("ty"))?;
    let description = description.ok_or_else(|| LookupError::invalid_argument("description"))?;

    find(ty, LabelField::Description, description)
}

/// Constant of `ty` whose display name equals `name`.
pub fn variant_by_name(
    ty: Option<&EnumType>,
    name: Option<&str>,
) -> Result<Option<&'static Variant>, LookupError> {
    let ty = ty.ok_or_else(|| LookupError::invalid_argument("ty"))?;
    let name = name.ok_or_else(|| LookupError::invalid_argument("name"))?;

    find(ty, LabelField::Name, name)
}

/// Typed form of [`variant_by_description`].
pub fn by_description<E: LabeledEnum>(
    description: Option<&str>,
) -> Result<Option<E>, LookupError> {
    let description = description.ok_or_else(|| LookupError::invalid_argument("description"))?;

    find_typed::<E>(LabelField::Description, description)
}

/// Typed form of [`variant_by_name`].
pub fn by_name<E: LabeledEnum>(name: Option<&str>) -> Result<Option<E>, LookupError> {
    let name = name.ok_or_else(|| LookupError::invalid_argument("name"))?;

    find_typed::<E>(LabelField::Name, name)
}

/// True if `value` equals the integer value of any constant of `E`.
#[must_use]
pub fn has_element<E: LabeledEnum>(value: i64) -> bool {
    E::enum_type().has_element(value)
}

fn find_typed<E: LabeledEnum>(field: LabelField, query: &str) -> Result<Option<E>, LookupError> {
    let variant = find(E::enum_type(), field, query)?;

    Ok(variant.and_then(|v| E::from_ident(v.ident)))
}

///
/// find
///
/// Shared matching algorithm. Labels are filtered on `field == query`;
/// more than one hit is a declaration defect, one hit is resolved back to
/// the constant declared under the same ident.
///
pub fn find(
    ty: &EnumType,
    field: LabelField,
    query: &str,
) -> Result<Option<&'static Variant>, LookupError> {
    let mut matches = ty.labels.iter().filter(|label| label.matches(field, query));

    let Some(label) = matches.next() else {
        trace!(enum_ident = ty.ident, %field, query, "no label matched");
        return Ok(None);
    };

    if let Some(second) = matches.next() {
        let idents: Vec<_> = [label.ident, second.ident]
            .into_iter()
            .chain(matches.map(|l| l.ident))
            .collect();
        debug!(enum_ident = ty.ident, %field, query, ?idents, "ambiguous display label");

        return Err(LookupError::AmbiguousMetadata {
            enum_ident: ty.ident,
            field,
            value: query.to_string(),
            idents,
        });
    }

    let variant = ty.variant(label.ident);
    trace!(
        enum_ident = ty.ident,
        %field,
        query,
        ident = label.ident,
        resolved = variant.is_some(),
        "label matched"
    );

    Ok(variant)
}

///
/// TESTS
///
