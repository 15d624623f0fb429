// src/core/comparator.rs
use crate::error::InputError;
use crate::models::{ComparisonResult, PriceInput};

/// Compares an ethanol price against a gasoline price.
///
/// Both prices are given as raw text and may use either a dot or a comma
/// as decimal separator.
///
/// # Arguments
///
/// * `ethanol_raw` - The ethanol price as typed
/// * `gasoline_raw` - The gasoline price as typed
///
/// # Returns
///
/// * `Ok(ComparisonResult)` - The ethanol/gasoline ratio and the recommended fuel
///
/// # Errors
///
/// Returns [`InputError::InvalidInput`] if either price is not a finite number.
/// A gasoline price of zero is accepted and yields an infinite ratio.
#[inline]
pub fn compare(ethanol_raw: &str, gasoline_raw: &str) -> Result<ComparisonResult, InputError> {
    compare_inputs(&PriceInput::new(ethanol_raw), &PriceInput::new(gasoline_raw))
}

/// Same as [`compare`], for fields already held as [`PriceInput`]s.
///
/// # Errors
///
/// Returns [`InputError::InvalidInput`] if either field does not parse.
#[inline]
pub fn compare_inputs(
    ethanol: &PriceInput,
    gasoline: &PriceInput,
) -> Result<ComparisonResult, InputError> {
    let (Some(ethanol), Some(gasoline)) = (ethanol.value(), gasoline.value()) else {
        return Err(InputError::InvalidInput);
    };

    Ok(ComparisonResult::from_ratio(ethanol / gasoline))
}
