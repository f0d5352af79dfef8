//! [`Amount`]-related definitions.

use std::str::FromStr;

use derive_more::{Display, Error, From, Into};
use rust_decimal::{prelude::ToPrimitive as _, Decimal};

use crate::ErrorKind;

/// Integer amount of a payment.
///
/// Currency-agnostic: the unit is whatever the books are kept in.
#[derive(
    Clone, Copy, Debug, Display, Eq, From, Into, Ord, PartialEq, PartialOrd,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(transparent)
)]
pub struct Amount(i64);

impl Amount {
    /// Returns the integer value of this [`Amount`].
    #[must_use]
    pub fn value(self) -> i64 {
        self.0
    }
}

impl FromStr for Amount {
    type Err = ParseError;

    /// Normalizes a free-form amount input into an [`Amount`].
    ///
    /// In order:
    /// 1. a plain integer is taken as-is;
    /// 2. an input with a `$` sign is split on it and the part after the sign
    ///    is parsed as a decimal number;
    /// 3. otherwise the whole input is parsed as a decimal number.
    ///
    /// Decimal inputs are truncated towards zero, so `"$150.75"` becomes
    /// `150`. Truncation (not rounding) keeps the historical output of the
    /// books unchanged.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use ParseError as E;

        if let Ok(int) = s.parse::<i64>() {
            return Ok(Self(int));
        }

        let decimal = if let Some(after_sign) = s.split('$').nth(1) {
            Decimal::from_str(after_sign)
        } else {
            Decimal::from_str(s)
        }
        .map_err(|_| E::NotANumber)?;

        decimal.trunc().to_i64().map(Self).ok_or(E::OutOfRange)
    }
}

/// Error of normalizing a free-form input into an [`Amount`].
#[derive(Clone, Copy, Debug, Display, Error)]
pub enum ParseError {
    /// Input is neither an integer nor a decimal number.
    #[display("amount is not a number")]
    NotANumber,

    /// Input doesn't fit into an integer amount.
    #[display("amount is out of range")]
    OutOfRange,
}

impl ParseError {
    /// Returns the [`ErrorKind`] of this [`ParseError`].
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Validation
    }
}

#[cfg(test)]
mod spec {
    use super::{Amount, ParseError};

    #[test]
    fn parses_plain_integer() {
        assert_eq!("150".parse::<Amount>().unwrap(), Amount::from(150));
        assert_eq!("-25".parse::<Amount>().unwrap(), Amount::from(-25));
    }

    #[test]
    fn strips_dollar_sign_and_truncates() {
        assert_eq!("$150.75".parse::<Amount>().unwrap(), Amount::from(150));
        assert_eq!("$150".parse::<Amount>().unwrap(), Amount::from(150));
        assert_eq!("$0.99".parse::<Amount>().unwrap(), Amount::from(0));
    }

    #[test]
    fn truncates_bare_decimal() {
        assert_eq!("150.75".parse::<Amount>().unwrap(), Amount::from(150));
        assert_eq!("150.00".parse::<Amount>().unwrap(), Amount::from(150));
    }

    #[test]
    fn rejects_non_numbers() {
        assert!(matches!(
            "abc".parse::<Amount>(),
            Err(ParseError::NotANumber),
        ));
        assert!(matches!("$".parse::<Amount>(), Err(ParseError::NotANumber)));
        assert!(matches!("".parse::<Amount>(), Err(ParseError::NotANumber)));
    }
}
