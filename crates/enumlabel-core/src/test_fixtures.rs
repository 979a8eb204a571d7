use crate::{
    model::{DisplayLabel, EnumType, Variant},
    traits::LabeledEnum,
};
use enumlabel_derive::LabeledEnum;

pub(crate) const NAME: &str = "Отображаемое имя";
pub(crate) const DESC: &str = "Отображаемое описание";
pub(crate) const NAME_ONE: &str = "Отображаемое имя 1";
pub(crate) const DESC_ONE: &str = "Отображаемое описание 1";

pub(crate) const UNUSED_NAME: &str = NAME;
pub(crate) const UNUSED_DESC: &str = DESC;

///
/// FooType
/// One labeled constant.
///

#[derive(Clone, Copy, Debug, Eq, LabeledEnum, PartialEq)]
pub(crate) enum FooType {
    #[label(
        name = "Отображаемое имя 1",
        description = "Отображаемое описание 1"
    )]
    One = 1,
}

///
/// FooType2
/// Two constants sharing both labels.
///

#[derive(Clone, Copy, Debug, Eq, LabeledEnum, PartialEq)]
pub(crate) enum FooType2 {
    #[label(
        name = "Отображаемое имя 1",
        description = "Отображаемое описание 1"
    )]
    One = 1,

    #[label(
        name = "Отображаемое имя 1",
        description = "Отображаемое описание 1"
    )]
    AnotherOne = 2,
}

///
/// Planet
///
/// Hand-written registration table: partial labels, one unlabeled
/// constant and a labeled alias (`Home` shares Earth's value).
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Planet {
    Mercury,
    Earth,
    Home,
    Mars,
}

static PLANET: EnumType = EnumType::new(
    "Planet",
    &[
        Variant::new("Mercury", 1),
        Variant::new("Earth", 3),
        Variant::new("Home", 3),
        Variant::new("Mars", 4),
    ],
    &[
        DisplayLabel::new("Earth", Some("Earth"), None),
        DisplayLabel::new("Home", Some("Home"), Some("where we live")),
        DisplayLabel::new("Mars", None, Some("the red planet")),
    ],
);

impl LabeledEnum for Planet {
    fn enum_type() -> &'static EnumType {
        &PLANET
    }

    fn from_ident(ident: &str) -> Option<Self> {
        match ident {
            "Mercury" => Some(Self::Mercury),
            "Earth" => Some(Self::Earth),
            "Home" => Some(Self::Home),
            "Mars" => Some(Self::Mars),
            _ => None,
        }
    }

    fn ident(&self) -> &'static str {
        match self {
            Self::Mercury => "Mercury",
            Self::Earth => "Earth",
            Self::Home => "Home",
            Self::Mars => "Mars",
        }
    }
}
