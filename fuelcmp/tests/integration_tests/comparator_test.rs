// tests/integration_tests/comparator_test.rs
use fuelcmp::{Fuel, InputError, compare};

#[test]
fn test_threshold_boundaries() -> Result<(), InputError> {
    assert_eq!(compare("3.5", "5.0")?.recommended, Fuel::Gasoline);
    assert_eq!(compare("3.49", "5.0")?.recommended, Fuel::Alcohol);
    assert_eq!(compare("3.5", "5.0")?.ratio_text(), "0.70");
    Ok(())
}

#[test]
fn test_localized_and_dotted_prices_agree() -> Result<(), InputError> {
    for (comma, dot) in [(("3,50", "5,00"), ("3.50", "5.00")), (("4,29", "6,19"), ("4.29", "6.19"))] {
        assert_eq!(compare(comma.0, comma.1)?, compare(dot.0, dot.1)?);
    }
    Ok(())
}

#[test]
fn test_invalid_prices() {
    for (ethanol, gasoline) in [("abc", "5.0"), ("3.5", ""), ("", ""), ("3.5", "five")] {
        assert_eq!(
            compare(ethanol, gasoline),
            Err(InputError::InvalidInput),
            "'{ethanol}' / '{gasoline}' should be rejected"
        );
    }
}

#[test]
fn test_zero_gasoline_price() -> Result<(), InputError> {
    let result = compare("3.5", "0")?;
    assert_eq!(result.ratio, f64::INFINITY);
    assert_eq!(result.recommended, Fuel::Gasoline);
    assert!((result.bar_fraction() - 1.0).abs() < f64::EPSILON);
    Ok(())
}

#[test]
fn test_both_prices_zero() -> Result<(), InputError> {
    let result = compare("0", "0")?;
    assert!(result.ratio.is_nan());
    assert_eq!(result.recommended, Fuel::Gasoline);
    assert!((result.bar_fraction() - 1.0).abs() < f64::EPSILON);
    Ok(())
}

#[test]
fn test_negative_prices_are_permitted() -> Result<(), InputError> {
    let result = compare("-3", "5")?;
    assert!(result.ratio < 0.0);
    assert_eq!(result.recommended, Fuel::Alcohol);
    assert!(result.bar_fraction().abs() < f64::EPSILON);
    Ok(())
}
