// src/models/fuel.rs
use std::fmt;

/// The fuel a comparison recommends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fuel {
    Alcohol,
    Gasoline,
}

impl Fuel {
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Alcohol => "ALCOHOL",
            Self::Gasoline => "GASOLINE",
        }
    }
}

impl fmt::Display for Fuel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
