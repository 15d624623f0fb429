// src/models/price_input.rs

/// An editable price field holding the text exactly as the user typed it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceInput {
    raw: String,
}

impl PriceInput {
    #[inline]
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    #[inline]
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Replaces the field contents, as happens on every keystroke.
    #[inline]
    pub fn set(&mut self, raw: impl Into<String>) {
        self.raw = raw.into();
    }

    /// Parses the field as a price.
    ///
    /// Surrounding whitespace is trimmed and a comma decimal separator is
    /// accepted in place of a dot. Returns `None` for anything that is not
    /// a finite number.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        let normalized = self.raw.trim().replacen(',', ".", 1);
        normalized
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
    }
}
