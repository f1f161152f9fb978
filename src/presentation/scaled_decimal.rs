use crate::prelude::*;

/// Renders a scaled root as a decimal string with `digits` fractional digits.
///
/// The decimal point is placed `digits` places from the right of
/// `scaled_root`, padding with zeros on the left when the root is too short.
/// With `digits == 0` the plain integer is returned.
///
/// ```text
/// (9055, 3) -> "9.055"
/// (5, 3)    -> "0.005"
/// (45, 0)   -> "45"
/// ```
///
/// # Errors
///
/// [`ErrorsAryabhata::InvalidDigitCount`] when `digits` does not fit a machine
/// index.
pub fn format_scaled_decimal(scaled_root: &Natural, digits: u64) -> Result<String,ErrorsAryabhata>{
    let text = scaled_root.to_str_radix(10);
    let digits = usize::try_from(digits).map_err(|_| {
        ErrorsAryabhata::InvalidDigitCount(format!("{digits} exceeds the addressable range"))
    })?;
    if digits == 0{
        return Ok(text);
    }
    let padded = if text.len() <= digits{
        format!("{}{}", "0".repeat(digits + 1 - text.len()), text)
    }else{
        text
    };
    let (integer_part, fractional_part) = padded.split_at(padded.len() - digits);
    Ok(format!("{integer_part}.{fractional_part}"))
}

#[cfg(test)]
mod test{
    use super::*;

    #[test]
    fn test_format_scaled_decimal(){
        assert_eq!(format_scaled_decimal(&Natural::from(9055u32), 3).unwrap(), "9.055");
        assert_eq!(format_scaled_decimal(&Natural::from(45u32), 0).unwrap(), "45");
        assert_eq!(format_scaled_decimal(&Natural::from(14_142_135u32), 7).unwrap(), "1.4142135");
        assert_eq!(format_scaled_decimal(&Natural::from(0u32), 0).unwrap(), "0");
        assert_eq!(format_scaled_decimal(&Natural::from(0u32), 2).unwrap(), "0.00");
    }

    #[test]
    fn test_format_pads_short_roots(){
        assert_eq!(format_scaled_decimal(&Natural::from(5u32), 3).unwrap(), "0.005");
        assert_eq!(format_scaled_decimal(&Natural::from(123u32), 3).unwrap(), "0.123");
        assert_eq!(format_scaled_decimal(&Natural::from(1234u32), 3).unwrap(), "1.234");
    }

    #[cfg(target_pointer_width = "32")]
    #[test]
    fn test_unaddressable_digit_count_is_an_error(){
        assert!(matches!(
            format_scaled_decimal(&Natural::from(1u32), u64::MAX),
            Err(ErrorsAryabhata::InvalidDigitCount(_))
        ));
    }
}
