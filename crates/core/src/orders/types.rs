use serde::{Deserialize, Serialize};

/// Value substituted for blank or missing text cells.
pub const MISSING: &str = "N/A";

/// Id text some exports write for rows whose id formula failed.
pub const UNDEFINED_ID: &str = "undefined";

/// One production job read from the order export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub client: String,
    pub article: String,
    pub color: String,
    /// Finishing process; doubles as the machine name for workload mapping.
    pub finishing: String,
    /// Remaining processing time. `f64::INFINITY` when the sheet had no
    /// usable duration.
    #[serde(with = "serde_minutes")]
    pub minutes_to_complete: f64,
}

impl Order {
    /// Whether this order has a usable duration.
    pub fn is_schedulable(&self) -> bool {
        self.minutes_to_complete.is_finite()
    }
}

/// Minute values on the wire: finite values as numbers, infinity as `null`.
///
/// JSON has no representation for infinity, and a silent `0` would hide an
/// unschedulable order.
pub mod serde_minutes {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(minutes: f64) -> Order {
        Order {
            id: "A1".to_string(),
            client: "Acme".to_string(),
            article: "Popeline".to_string(),
            color: "Blu".to_string(),
            finishing: "Ram".to_string(),
            minutes_to_complete: minutes,
        }
    }

    #[test]
    fn test_finite_minutes_serialize_as_number() {
        let json = serde_json::to_value(order(90.5)).unwrap();
        assert_eq!(json["minutes_to_complete"], 90.5);
    }

    #[test]
    fn test_infinite_minutes_serialize_as_null() {
        let json = serde_json::to_value(order(f64::INFINITY)).unwrap();
        assert!(json["minutes_to_complete"].is_null());

        let back: Order = serde_json::from_value(json).unwrap();
        assert!(back.minutes_to_complete.is_infinite());
        assert!(!back.is_schedulable());
    }
}
