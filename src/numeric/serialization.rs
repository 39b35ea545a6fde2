// ============================================================================
// Serde Adapter
// Amounts travel as bare JSON numbers carrying the canonical decimal text
// ============================================================================
//
// Both directions go through serde_json's `RawValue`, so the number text is
// never routed through `f64`. The adapter therefore targets serde_json;
// other formats see serde_json's private raw-value wrapper.

use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;

use super::amount::ScaledAmount;
use super::config::ParseConfig;

impl Serialize for ScaledAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let text = self.to_decimal_string().map_err(ser::Error::custom)?;
        let number = RawValue::from_string(text).map_err(ser::Error::custom)?;
        number.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ScaledAmount {
    /// Accepts a JSON number or a quoted decimal string; either way the
    /// literal text is parsed exactly, exponents included.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Box::<RawValue>::deserialize(deserializer)?;
        let text = raw.get();
        let literal = text
            .strip_prefix('"')
            .and_then(|quoted| quoted.strip_suffix('"'))
            .unwrap_or(text);

        ScaledAmount::parse_with(literal, &ParseConfig::lenient()).map_err(de::Error::custom)
    }
}
