//! Custom serde helpers for Fireblocks' loosely typed JSON fields.
//!
//! The API is not consistent about empty values: optional strings arrive as
//! `""`, and amounts arrive as strings on some endpoints and as numbers on
//! others, sometimes as `""` or `null` when unknown.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, de};

/// Helper for empty strings that should be deserialized as None.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use fireblocks_api_client::types::serde_helpers::empty_string_as_none;
///
/// #[derive(Deserialize, Debug)]
/// struct Asset {
///     #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
///     contract_address: Option<String>,
/// }
///
/// let asset: Asset = serde_json::from_str(r#"{"contract_address":""}"#).unwrap();
/// assert!(asset.contract_address.is_none());
///
/// let asset: Asset = serde_json::from_str(r#"{"contract_address":"0xabc"}"#).unwrap();
/// assert_eq!(asset.contract_address.unwrap(), "0xabc");
/// ```
pub mod empty_string_as_none {
    use super::*;

    /// Deserialize a string, returning None if empty.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        Ok(s.filter(|s| !s.is_empty()))
    }
}

/// Helper for amounts that may be a decimal string, a number, `""` or `null`.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use rust_decimal::Decimal;
/// use fireblocks_api_client::types::serde_helpers::optional_decimal;
///
/// #[derive(Deserialize, Debug)]
/// struct Fee {
///     #[serde(deserialize_with = "optional_decimal::deserialize", default)]
///     network_fee: Option<Decimal>,
/// }
///
/// let fee: Fee = serde_json::from_str(r#"{"network_fee":"0.0001"}"#).unwrap();
/// assert_eq!(fee.network_fee.unwrap().to_string(), "0.0001");
///
/// let fee: Fee = serde_json::from_str(r#"{"network_fee":0.5}"#).unwrap();
/// assert_eq!(fee.network_fee.unwrap().to_string(), "0.5");
///
/// let fee: Fee = serde_json::from_str(r#"{"network_fee":""}"#).unwrap();
/// assert!(fee.network_fee.is_none());
/// ```
pub mod optional_decimal {
    use super::*;

    /// Deserialize a value that may be a decimal string, number, `""` or null.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OptionalDecimalVisitor;

        impl<'de> de::Visitor<'de> for OptionalDecimalVisitor {
            type Value = Option<Decimal>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a decimal string, a number, an empty string or null")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                let v = v.trim();
                if v.is_empty() {
                    return Ok(None);
                }
                v.parse::<Decimal>()
                    .or_else(|_| Decimal::from_scientific(v))
                    .map(Some)
                    .map_err(de::Error::custom)
            }

            fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                self.visit_str(&v)
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Some(Decimal::from(v)))
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Some(Decimal::from(v)))
            }

            fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                // Go through the shortest round-trip text so 0.1 stays 0.1.
                self.visit_str(&v.to_string())
            }

            fn visit_none<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(None)
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(None)
            }
        }

        deserializer.deserialize_any(OptionalDecimalVisitor)
    }
}
