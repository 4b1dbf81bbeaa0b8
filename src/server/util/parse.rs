use std::str::FromStr;

use crate::server::error::Error;

/// Parses an enum stored as text back into its domain type.
///
/// A stored value nothing can parse means the row was written outside the application.
pub fn parse_stored<T: FromStr>(value: &str) -> Result<T, Error>
where
    T::Err: std::fmt::Display,
{
    value.parse::<T>().map_err(|err| Error::ParseError(err.to_string()))
}

/// Parses an optional stored enum, keeping `None` as `None`.
pub fn parse_stored_opt<T: FromStr>(value: Option<&str>) -> Result<Option<T>, Error>
where
    T::Err: std::fmt::Display,
{
    value.map(parse_stored).transpose()
}

#[cfg(test)]
mod tests {
    use crate::{
        model::asset::AssetCondition,
        server::{
            error::Error,
            util::parse::{parse_stored, parse_stored_opt},
        },
    };

    #[test]
    fn parses_known_value() {
        let condition: AssetCondition = parse_stored("poor").unwrap();
        assert_eq!(condition, AssetCondition::Poor);
    }

    #[test]
    fn unknown_value_is_parse_error() {
        let result = parse_stored::<AssetCondition>("broken");
        assert!(matches!(result, Err(Error::ParseError(_))));
    }

    #[test]
    fn optional_none_stays_none() {
        let result = parse_stored_opt::<AssetCondition>(None).unwrap();
        assert!(result.is_none());
    }
}
