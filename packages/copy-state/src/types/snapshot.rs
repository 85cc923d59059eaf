use chrono::{DateTime, Utc};
use url::Url;

use super::{BlobCopyState, FileCopyState};
use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyStatus {
    Invalid,
    Pending,
    Success,
    Aborted,
    Failed,
}

impl CopyStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Success | Self::Aborted | Self::Failed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyStateSnapshot {
    copy_id: String,
    completion_time: Option<DateTime<Utc>>,
    status: CopyStatus,
    source: Url,
    bytes_copied: Option<u64>,
    total_bytes: Option<u64>,
    status_description: Option<String>,
    destination_snapshot_time: Option<DateTime<Utc>>,
}

impl CopyStateSnapshot {
    pub fn from_blob(state: Option<&BlobCopyState>) -> crate::Result<Self> {
        let state = state
            .ok_or_else(|| Error::InvalidArgument("blob copy state is missing".to_string()))?;

        Ok(Self {
            copy_id: state.copy_id.clone(),
            completion_time: state.completion_time,
            status: (&state.status).into(),
            source: state.source.clone(),
            bytes_copied: state.bytes_copied,
            total_bytes: state.total_bytes,
            status_description: state.status_description.clone(),
            destination_snapshot_time: state.destination_snapshot_time,
        })
    }

    pub fn from_file(state: Option<&FileCopyState>) -> crate::Result<Self> {
        let state = state
            .ok_or_else(|| Error::InvalidArgument("file copy state is missing".to_string()))?;

        Ok(Self {
            copy_id: state.copy_id.clone(),
            completion_time: state.completion_time,
            status: (&state.status).into(),
            source: state.source.clone(),
            bytes_copied: state.bytes_copied,
            total_bytes: state.total_bytes,
            status_description: state.status_description.clone(),
            destination_snapshot_time: state.destination_snapshot_time,
        })
    }

    pub fn copy_id(&self) -> &str {
        &self.copy_id
    }

    pub fn completion_time(&self) -> Option<DateTime<Utc>> {
        self.completion_time
    }

    pub fn status(&self) -> CopyStatus {
        self.status
    }

    pub fn source(&self) -> &Url {
        &self.source
    }

    pub fn bytes_copied(&self) -> Option<u64> {
        self.bytes_copied
    }

    pub fn total_bytes(&self) -> Option<u64> {
        self.total_bytes
    }

    pub fn status_description(&self) -> Option<&str> {
        self.status_description.as_deref()
    }

    pub fn destination_snapshot_time(&self) -> Option<DateTime<Utc>> {
        self.destination_snapshot_time
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(CopyStatus::Invalid, false; "invalid")]
    #[test_case(CopyStatus::Pending, false; "pending")]
    #[test_case(CopyStatus::Success, true; "success")]
    #[test_case(CopyStatus::Aborted, true; "aborted")]
    #[test_case(CopyStatus::Failed, true; "failed")]
    fn only_finished_copies_are_terminal(status: CopyStatus, expected: bool) {
        assert_eq!(status.is_terminal(), expected);
    }

    #[test]
    fn missing_blob_copy_state_is_an_invalid_argument() {
        // when
        let result = CopyStateSnapshot::from_blob(None);

        // then
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn missing_file_copy_state_is_an_invalid_argument() {
        // when
        let result = CopyStateSnapshot::from_file(None);

        // then
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }
}
