use serde::{Deserialize, Serialize};

/// Number of orders for one client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSummary {
    pub name: String,
    pub orders: usize,
}

/// Number of orders falling in one urgency bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrgencySummary {
    pub name: String,
    pub orders: usize,
    /// 1 (most urgent) to 4.
    pub level: u8,
}

/// Fixed urgency buckets by remaining time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UrgencyBucket {
    #[serde(rename = "<1h")]
    UnderOneHour,
    #[serde(rename = "<4h")]
    UnderFourHours,
    #[serde(rename = "<1d")]
    UnderOneDay,
    #[serde(rename = ">1d")]
    OverOneDay,
}

impl UrgencyBucket {
    /// All buckets, most urgent first.
    pub const ALL: [UrgencyBucket; 4] = [
        UrgencyBucket::UnderOneHour,
        UrgencyBucket::UnderFourHours,
        UrgencyBucket::UnderOneDay,
        UrgencyBucket::OverOneDay,
    ];

    /// Bucket for a remaining time. Infinite durations land in `>1d`.
    pub fn for_minutes(minutes: f64) -> Self {
        if minutes < 60.0 {
            UrgencyBucket::UnderOneHour
        } else if minutes < 240.0 {
            UrgencyBucket::UnderFourHours
        } else if minutes < 1440.0 {
            UrgencyBucket::UnderOneDay
        } else {
            UrgencyBucket::OverOneDay
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UrgencyBucket::UnderOneHour => "<1h",
            UrgencyBucket::UnderFourHours => "<4h",
            UrgencyBucket::UnderOneDay => "<1d",
            UrgencyBucket::OverOneDay => ">1d",
        }
    }

    pub fn level(&self) -> u8 {
        match self {
            UrgencyBucket::UnderOneHour => 1,
            UrgencyBucket::UnderFourHours => 2,
            UrgencyBucket::UnderOneDay => 3,
            UrgencyBucket::OverOneDay => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(UrgencyBucket::for_minutes(-5.0), UrgencyBucket::UnderOneHour);
        assert_eq!(UrgencyBucket::for_minutes(59.9), UrgencyBucket::UnderOneHour);
        assert_eq!(UrgencyBucket::for_minutes(60.0), UrgencyBucket::UnderFourHours);
        assert_eq!(UrgencyBucket::for_minutes(239.0), UrgencyBucket::UnderFourHours);
        assert_eq!(UrgencyBucket::for_minutes(240.0), UrgencyBucket::UnderOneDay);
        assert_eq!(UrgencyBucket::for_minutes(1440.0), UrgencyBucket::OverOneDay);
        assert_eq!(
            UrgencyBucket::for_minutes(f64::INFINITY),
            UrgencyBucket::OverOneDay
        );
    }

    #[test]
    fn test_bucket_serializes_as_label() {
        for bucket in UrgencyBucket::ALL {
            let json = serde_json::to_string(&bucket).unwrap();
            assert_eq!(json, format!("\"{}\"", bucket.label()));
        }
    }
}
