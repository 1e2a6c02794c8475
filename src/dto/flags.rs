//! Formatos de entrada tolerantes y estrictos
//!
//! Al crear un vehículo la disponibilidad acepta cualquier valor booleano
//! razonable; al actualizar solo se acepta el entero 0 o 1.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Disponibilidad al crear: `true`/`false`, `0`/`1` o sus equivalentes en texto
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Availability(pub bool);

impl<'de> Deserialize<'de> for Availability {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let invalid = || de::Error::custom("available must be a boolean, 0 or 1");
        match Value::deserialize(deserializer)? {
            Value::Bool(b) => Ok(Self(b)),
            Value::Number(n) => match n.as_u64() {
                Some(0) => Ok(Self(false)),
                Some(1) => Ok(Self(true)),
                _ => Err(invalid()),
            },
            Value::String(s) => match s.trim() {
                "true" | "1" => Ok(Self(true)),
                "false" | "0" => Ok(Self(false)),
                _ => Err(invalid()),
            },
            _ => Err(invalid()),
        }
    }
}

/// Disponibilidad al actualizar: exactamente el entero 0 o 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilityBit(pub bool);

impl Serialize for AvailabilityBit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(u8::from(self.0))
    }
}

impl<'de> Deserialize<'de> for AvailabilityBit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Number(n) if n.as_u64() == Some(0) => Ok(Self(false)),
            Value::Number(n) if n.as_u64() == Some(1) => Ok(Self(true)),
            other => Err(de::Error::custom(format!(
                "available must be exactly 0 or 1, got {}",
                other
            ))),
        }
    }
}

/// Año como número JSON o como texto numérico; vacío cuenta como ausente
pub fn lenient_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let invalid = || de::Error::custom("year must be an integer");
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_i64()
            .and_then(|v| i32::try_from(v).ok())
            .map(Some)
            .ok_or_else(invalid),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => s.trim().parse::<i32>().map(Some).map_err(|_| invalid()),
        Some(_) => Err(invalid()),
    }
}
