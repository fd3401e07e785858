use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::{Number, Value};

/// Fields accepted by `POST /api/addresses`.
///
/// Sent either as a JSON body or as text parts of a `multipart/form-data`
/// request. Keys other than the ones below are ignored. `mobile` is coerced
/// from any JSON number or numeric string; integers stay integers.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NewAddress {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "Telephone", alias = "telephone", default)]
    pub telephone: Option<String>,
    #[serde(default, deserialize_with = "coerce_mobile")]
    pub mobile: Option<Number>,
    #[serde(default)]
    pub address: Option<String>,
}

impl NewAddress {
    /// Stores the value of a multipart text part under its form field name.
    ///
    /// Unknown field names are ignored. Fails only when `mobile` is not a number.
    pub fn set_form_value(&mut self, field: &str, value: String) -> Result<(), String> {
        match field {
            "name" => self.name = Some(value),
            "email" => self.email = Some(value),
            "Telephone" | "telephone" => self.telephone = Some(value),
            "mobile" => self.mobile = parse_mobile(&value)?,
            "address" => self.address = Some(value),
            _ => {}
        }
        Ok(())
    }
}

/// Body of `PUT /api/addresses/{id}`.
///
/// Every field is optional. The outer `Option` tells whether the key was sent
/// at all, the inner one whether it was `null`. Unknown keys (including `id`
/// and `image`) are rejected.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AddressPatch {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub email: Option<Option<String>>,
    #[serde(rename = "Telephone", alias = "telephone", default, deserialize_with = "present")]
    pub telephone: Option<Option<String>>,
    #[serde(default, deserialize_with = "present_mobile")]
    pub mobile: Option<Option<Number>>,
    #[serde(default, deserialize_with = "present")]
    pub address: Option<Option<String>>,
}

/// Parses a `mobile` value received as text. Blank input means "no value".
pub fn parse_mobile(value: &str) -> Result<Option<Number>, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    if let Ok(n) = value.parse::<i64>() {
        return Ok(Some(Number::from(n)));
    }
    value
        .parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Some)
        .ok_or_else(|| format!("mobile must be a number, got \"{}\"", value))
}

fn coerce_mobile<'de, D>(deserializer: D) -> Result<Option<Number>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => Ok(Some(n)),
        Some(Value::String(s)) => parse_mobile(&s).map_err(de::Error::custom),
        Some(other) => Err(de::Error::custom(format!(
            "mobile must be a number, got {}",
            other
        ))),
    }
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn present_mobile<'de, D>(deserializer: D) -> Result<Option<Option<Number>>, D::Error>
where
    D: Deserializer<'de>,
{
    coerce_mobile(deserializer).map(Some)
}
