use crate::{
    error::LookupError,
    lookup,
    model::{DisplayLabel, EnumType},
};

///
/// LabeledEnum
///
/// Capability of an enumeration to expose its constants and their display
/// labels at runtime. Usually implemented by `#[derive(LabeledEnum)]`; a
/// hand-written impl only has to return a static `EnumType` and map idents
/// to constants and back.
///

pub trait LabeledEnum: Sized + 'static {
    /// Static metadata for the whole type.
    fn enum_type() -> &'static EnumType;

    /// Constant declared under `ident`.
    fn from_ident(ident: &str) -> Option<Self>;

    /// Ident this constant was declared under.
    fn ident(&self) -> &'static str;

    fn label(&self) -> Option<&'static DisplayLabel> {
        Self::enum_type().label(self.ident())
    }

    fn display_name(&self) -> Option<&'static str> {
        self.label().and_then(|label| label.name)
    }

    fn display_description(&self) -> Option<&'static str> {
        self.label().and_then(|label| label.description)
    }

    fn from_display_name(name: &str) -> Result<Option<Self>, LookupError> {
        lookup::by_name::<Self>(Some(name))
    }

    fn from_display_description(description: &str) -> Result<Option<Self>, LookupError> {
        lookup::by_description::<Self>(Some(description))
    }

    #[must_use]
    fn has_element(value: i64) -> bool {
        lookup::has_element::<Self>(value)
    }
}
