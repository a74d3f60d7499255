//! Command implementations.

pub mod catalog;
pub mod triggers;

use program_rules::{CoreNeed, TriggerType};
use std::str::FromStr;

use crate::error::{CliError, CliResult};

/// Parse a trigger key, listing the valid keys on failure.
pub fn parse_trigger(key: &str) -> CliResult<TriggerType> {
    parse_key(key, TriggerType::ALL.iter().map(|t| t.key()))
}

/// Parse a core need key, listing the valid keys on failure.
pub fn parse_need(key: &str) -> CliResult<CoreNeed> {
    parse_key(key, CoreNeed::ALL.iter().map(|n| n.key()))
}

fn parse_key<T>(key: &str, valid: impl Iterator<Item = &'static str>) -> CliResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    T::from_str(key).map_err(|err| {
        CliError::InvalidArgument(format!(
            "{}; expected one of: {}",
            err,
            valid.collect::<Vec<_>>().join(", ")
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trigger() {
        assert_eq!(parse_trigger("exposed_flaw").unwrap(), TriggerType::ExposedFlaw);

        let err = parse_trigger("flaw").unwrap_err().to_string();
        assert!(err.contains("unknown trigger key 'flaw'"));
        assert!(err.contains("criticism, independence, boundary"));
    }

    #[test]
    fn test_parse_need() {
        assert_eq!(parse_need("control_supply").unwrap(), CoreNeed::ControlSupply);
        assert!(parse_need("control").is_err());
    }
}
