use enumlabel::prelude::*;

/// Compile fixture: derive on a public enum with mixed labels,
/// explicit discriminants and an explicit repr.
#[derive(Clone, Copy, Debug, LabeledEnum)]
#[repr(i32)]
pub enum Currency {
    #[label(name = "₽", description = "Российский рубль")]
    Rub = 643,

    #[label(name = "$")]
    Usd = 840,

    Unknown = -1,
}

/// Unsigned repr whose values all fit in i64.
#[derive(LabeledEnum)]
#[repr(u64)]
pub enum Capacity {
    #[label(name = "max")]
    Max = i64::MAX as u64,

    Empty = 0,
}

fn main() {
    assert!(Capacity::has_element(i64::MAX));
    assert!(!Capacity::has_element(-1));
    assert_eq!(Currency::enum_type().ident(), "Currency");
    assert!(Currency::has_element(643));
}
