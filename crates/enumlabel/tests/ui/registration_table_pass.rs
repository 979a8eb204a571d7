use enumlabel::{DisplayLabel, EnumType, LabeledEnum, Variant};

/// Compile fixture: hand-written registration table without the derive.
pub enum Signal {
    Red,
    Green,
}

static SIGNAL: EnumType = EnumType::new(
    "Signal",
    &[Variant::new("Red", 0), Variant::new("Green", 1)],
    &[DisplayLabel::new("Red", Some("stop"), None)],
);

impl LabeledEnum for Signal {
    fn enum_type() -> &'static EnumType {
        &SIGNAL
    }

    fn from_ident(ident: &str) -> Option<Self> {
        match ident {
            "Red" => Some(Self::Red),
            "Green" => Some(Self::Green),
            _ => None,
        }
    }

    fn ident(&self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Green => "Green",
        }
    }
}

fn main() {
    assert!(matches!(Signal::from_display_name("stop"), Ok(Some(Signal::Red))));
    assert!(Signal::has_element(1));
}
