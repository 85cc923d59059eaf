use chrono::{DateTime, Utc};
use tracing::warn;
use url::Url;

use super::CopyStatus;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlobCopyStatus {
    Invalid,
    Pending,
    Success,
    Aborted,
    Failed,
    Other(String),
}

impl From<&str> for BlobCopyStatus {
    fn from(token: &str) -> Self {
        // tokens as the blob service reports them in its copy status header
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

impl From<&BlobCopyStatus> for CopyStatus {
    fn from(status: &BlobCopyStatus) -> Self {
        match status {
            BlobCopyStatus::Invalid => CopyStatus::Invalid,
            BlobCopyStatus::Pending => CopyStatus::Pending,
            BlobCopyStatus::Success => CopyStatus::Success,
            BlobCopyStatus::Aborted => CopyStatus::Aborted,
            BlobCopyStatus::Failed => CopyStatus::Failed,
            BlobCopyStatus::Other(other) => {
                warn!("unrecognized blob copy status: {}", other);
                CopyStatus::Invalid
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobCopyState {
    pub copy_id: String,
    pub completion_time: Option<DateTime<Utc>>,
    pub status: BlobCopyStatus,
    pub source: Url,
    pub bytes_copied: Option<u64>,
    pub total_bytes: Option<u64>,
    pub status_description: Option<String>,
    pub destination_snapshot_time: Option<DateTime<Utc>>,
}

#[cfg(feature = "test-helpers")]
impl rand::distributions::Distribution<BlobCopyState> for rand::distributions::Standard {
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> BlobCopyState {
        let status = match rng.gen_range(0..5) {
            0 => BlobCopyStatus::Invalid,
            1 => BlobCopyStatus::Pending,
            2 => BlobCopyStatus::Success,
            3 => BlobCopyStatus::Aborted,
            _ => BlobCopyStatus::Failed,
        };

        BlobCopyState {
            copy_id: format!("{:032x}", rng.r#gen::<u128>()),
            completion_time: None,
            status,
            source: format!(
                "https://{:08x}.blob.example.com/{:08x}/{:08x}",
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
