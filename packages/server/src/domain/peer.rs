//! Value objects for peer identity and time.

use std::fmt;

use serde::Serialize;

use super::error::DomainError;

/// Opaque peer identifier, supplied by the relay collaborator.
///
/// Guaranteed non-empty; construction validates before any lobby state
/// can be touched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PeerId(String);

impl PeerId {
    /// Create a new PeerId, rejecting missing or blank values
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::MissingPeerId);
        }
        Ok(Self(value))
    }

    /// Parse an optional raw field from a request body
    pub fn from_optional(value: Option<String>) -> Result<Self, DomainError> {
        Self::new(value.unwrap_or_default())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display name shown to the matched partner.
///
/// Missing or blank names fall back to "Anonymous".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DisplayName(String);

impl DisplayName {
    pub const ANONYMOUS: &str = "Anonymous";

    /// Create a display name, falling back to "Anonymous" when absent or blank
    pub fn new(value: Option<String>) -> Self {
        match value {
            Some(v) if !v.trim().is_empty() => Self(v),
            _ => Self(Self::ANONYMOUS.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unix timestamp in milliseconds (UTC)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(millis: i64) -> Self {
        Self(millis)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    /// Milliseconds elapsed between this timestamp and `now`
    pub fn age_millis(&self, now: Timestamp) -> i64 {
        now.0 - self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peer_id_accepts_non_empty_value() {
        // テスト項目: 空でない peer id が受け入れられる
        // given (前提条件):
        let raw = "peer-123";

        // when (操作):
        let result = PeerId::new(raw);

        // then (期待する結果):
        assert_eq!(result.unwrap().as_str(), "peer-123");
    }

    #[test]
    fn test_peer_id_rejects_empty_value() {
        // テスト項目: 空の peer id が拒否される
        // given (前提条件):
        let raw = "";

        // when (操作):
        let result = PeerId::new(raw);

        // then (期待する結果):
        assert_eq!(result, Err(DomainError::MissingPeerId));
    }

    #[test]
    fn test_peer_id_rejects_blank_value() {
        // テスト項目: 空白のみの peer id が拒否される
        // given (前提条件):
        let raw = "   ";

        // when (操作):
        let result = PeerId::new(raw);

        // then (期待する結果):
        assert_eq!(result, Err(DomainError::MissingPeerId));
    }

    #[test]
    fn test_peer_id_from_optional_rejects_none() {
        // テスト項目: peer id が省略された場合に拒否される
        // given (前提条件):
        let raw: Option<String> = None;

        // when (操作):
        let result = PeerId::from_optional(raw);

        // then (期待する結果):
        assert_eq!(result, Err(DomainError::MissingPeerId));
    }

    #[test]
    fn test_display_name_uses_given_value() {
        // テスト項目: 指定された表示名がそのまま使われる
        // given (前提条件):
        let raw = Some("Alice".to_string());

        // when (操作):
        let name = DisplayName::new(raw);

        // then (期待する結果):
        assert_eq!(name.as_str(), "Alice");
    }

    #[test]
    fn test_display_name_defaults_to_anonymous() {
        // テスト項目: 表示名が省略された場合 "Anonymous" になる
        // given (前提条件):
        let missing: Option<String> = None;
        let blank = Some("  ".to_string());

        // when (操作):
        let name_missing = DisplayName::new(missing);
        let name_blank = DisplayName::new(blank);

        // then (期待する結果):
        assert_eq!(name_missing.as_str(), "Anonymous");
        assert_eq!(name_blank.as_str(), "Anonymous");
    }

    #[test]
    fn test_timestamp_age_millis() {
        // テスト項目: タイムスタンプの経過時間が正しく計算される
        // given (前提条件):
        let enqueued = Timestamp::new(1_000_000);
        let now = Timestamp::new(1_030_000);

        // when (操作):
        let age = enqueued.age_millis(now);

        // then (期待する結果):
        assert_eq!(age, 30_000);
    }
}
