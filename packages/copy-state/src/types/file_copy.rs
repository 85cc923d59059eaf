use chrono::{DateTime, Utc};
use tracing::warn;
use url::Url;

use super::CopyStatus;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileCopyStatus {
    Invalid,
    Pending,
    Success,
    Aborted,
    Failed,
    Other(String),
}

impl From<&str> for FileCopyStatus {
    fn from(token: &str) -> Self {
        match token {
            "invalid" => Self::Invalid,
            "pending" => Self::Pending,
            "success" => Self::Success,
            "aborted" => Self::Aborted,
            "failed" => Self::Failed,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<&FileCopyStatus> for CopyStatus {
    fn from(status: &FileCopyStatus) -> Self {
        match status {
            FileCopyStatus::Invalid => CopyStatus::Invalid,
            FileCopyStatus::Pending => CopyStatus::Pending,
            FileCopyStatus::Success => CopyStatus::Success,
            FileCopyStatus::Aborted => CopyStatus::Aborted,
            FileCopyStatus::Failed => CopyStatus::Failed,
            FileCopyStatus::Other(other) => {
                warn!("unrecognized file copy status: {}", other);
                CopyStatus::Invalid
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCopyState {
    pub copy_id: String,
    pub completion_time: Option<DateTime<Utc>>,
    pub status: FileCopyStatus,
    pub source: Url,
    pub bytes_copied: Option<u64>,
    pub total_bytes: Option<u64>,
    pub status_description: Option<String>,
    pub destination_snapshot_time: Option<DateTime<Utc>>,
}

#[cfg(feature = "test-helpers")]
impl rand::distributions::Distribution<FileCopyState> for rand::distributions::Standard {
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> FileCopyState {
        let status = match rng.gen_range(0..5) {
            0 => FileCopyStatus::Invalid,
            1 => FileCopyStatus::Pending,
            2 => FileCopyStatus::Success,
            3 => FileCopyStatus::Aborted,
            _ => FileCopyStatus::Failed,
        };

        FileCopyState {
            copy_id: format!("{:032x}", rng.r#gen::<u128>()),
            completion_time: None,
            status,
            source: format!(
                "https://{:08x}.file.example.com/{:08x}/{:08x}",
                rng.r#gen::<u32>(),
                rng.r#gen::<u32>(),
                rng.r#gen::<u32>()
            )
            .parse()
            .expect("generated url to be valid"),
            bytes_copied: Some(rng.r#gen()),
            total_bytes: Some(rng.r#gen()),
            status_description: None,
            destination_snapshot_time: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(FileCopyStatus::Invalid, CopyStatus::Invalid; "invalid")]
    #[test_case(FileCopyStatus::Pending, CopyStatus::Pending; "pending")]
    #[test_case(FileCopyStatus::Success, CopyStatus::Success; "success")]
    #[test_case(FileCopyStatus::Aborted, CopyStatus::Aborted; "aborted")]
    #[test_case(FileCopyStatus::Failed, CopyStatus::Failed; "failed")]
    fn normalizes_file_status_by_name(provider: FileCopyStatus, expected: CopyStatus) {
        assert_eq!(CopyStatus::from(&provider), expected);
    }

    #[test]
    fn unrecognized_file_status_degrades_to_invalid() {
        // given a discriminant outside the provider's published set
        let provider = FileCopyStatus::Other("11".to_string());

        // when
        let status = CopyStatus::from(&provider);

        // then
        assert_eq!(status, CopyStatus::Invalid);
    }

    #[test_case("pending", FileCopyStatus::Pending; "pending")]
    #[test_case("success", FileCopyStatus::Success; "success")]
    #[test_case("aborted", FileCopyStatus::Aborted; "aborted")]
    #[test_case("failed", FileCopyStatus::Failed; "failed")]
    fn parses_known_wire_tokens(token: &str, expected: FileCopyStatus) {
        assert_eq!(FileCopyStatus::from(token), expected);
    }

    #[test]
    fn unknown_wire_token_is_kept_verbatim() {
        // when
        let status = FileCopyStatus::from("Pending");

        // then: tokens are matched exactly, the service reports them lowercase
        assert_eq!(status, FileCopyStatus::Other("Pending".to_string()));
    }
}
