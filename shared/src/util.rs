//! 时间工具 — 订单时间戳的规范字符串表示
//!
//! 所有对外暴露的时间戳统一使用固定宽度的 UTC 格式，
//! 保证字符串字典序与时间先后顺序一致（列表过滤依赖这一点）。

use chrono::{DateTime, Utc};

/// Canonical timestamp format: fixed-width UTC with millisecond precision.
///
/// Fixed width means lexicographic order equals chronological order,
/// which the order listing's `from`/`to` string comparison relies on.
pub const CANONICAL_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// 当前 UTC 时间
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Render a timestamp in the canonical wire format.
pub fn canonical_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format(CANONICAL_TIME_FORMAT).to_string()
}

/// Serde adapter serializing `DateTime<Utc>` in the canonical format.
///
/// Deserialization accepts any RFC 3339 offset and normalizes to UTC.
pub mod canonical_time {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::canonical_timestamp(ts))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|ts| ts.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }

    /// `Option<DateTime<Utc>>` variant, for fields like `cancelledAt`.
    pub mod option {
        use chrono::{DateTime, Utc};
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S>(
            ts: &Option<DateTime<Utc>>,
            serializer: S,
        ) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match ts {
                Some(ts) => serializer.serialize_str(&crate::util::canonical_timestamp(ts)),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
        where
            D: Deserializer<'de>,
        {
            let raw: Option<String> = Option::deserialize(deserializer)?;
            match raw {
                Some(raw) => DateTime::parse_from_rfc3339(&raw)
                    .map(|ts| Some(ts.with_timezone(&Utc)))
                    .map_err(serde::de::Error::custom),
                None => Ok(None),
            }
        }
    }
}
