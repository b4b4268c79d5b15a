use rust_decimal::Decimal;
use serde::Deserialize;
use serde::de::Error as DeError;

/// Money-like value returned by SMS Aero as either JSON string or JSON number.
///
/// Observed on the wire: `cost` is a number for SMS and Viber but a string for
/// flash calls (`"0.59"`). Both forms decode to the same [`Decimal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalField(Decimal);

impl DecimalField {
    pub fn into_decimal(self) -> Decimal {
        self.0
    }
}

impl<'de> Deserialize<'de> for DecimalField {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw: Box<serde_json::value::RawValue> = Deserialize::deserialize(deserializer)?;
        let token = raw.get();

        let text = match token.as_bytes().first().copied() {
            Some(b'"') => serde_json::from_str::<String>(token).map_err(D::Error::custom)?,
            Some(b'-' | b'0'..=b'9') => token.to_owned(),
            _ => {
                return Err(D::Error::custom(
                    "expected money field to be JSON string or number",
                ));
            }
        };

        let parsed = text
            .trim()
            .parse::<Decimal>()
            .or_else(|_| Decimal::from_scientific(text.trim()))
            .map_err(D::Error::custom)?;
        Ok(Self(parsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Payload {
        cost: DecimalField,
    }

    #[test]
    fn decodes_number_and_string_to_the_same_decimal() {
        let from_number: Payload = serde_json::from_str(r#"{"cost": 0.59}"#).unwrap();
        let from_string: Payload = serde_json::from_str(r#"{"cost": "0.59"}"#).unwrap();
        assert_eq!(
            from_number.cost.into_decimal(),
            from_string.cost.into_decimal()
        );
        assert_eq!(from_number.cost.into_decimal().to_string(), "0.59");
    }

    #[test]
    fn preserves_exact_decimal_digits() {
        let payload: Payload = serde_json::from_str(r#"{"cost": 1389.26}"#).unwrap();
        assert_eq!(payload.cost.into_decimal().to_string(), "1389.26");
    }

    #[test]
    fn rejects_non_numeric_tokens() {
        assert!(serde_json::from_str::<Payload>(r#"{"cost": true}"#).is_err());
        assert!(serde_json::from_str::<Payload>(r#"{"cost": "free"}"#).is_err());
    }
}
