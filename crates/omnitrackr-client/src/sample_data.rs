//! The static records the pages show, loaded from `assets/sample_data.ron`

use anyhow::Context as _;
use omnitrackr_client_core::Scoped;
use omnitrackr_shared::status::{
    AlertKind, AlertStatus, AuditAction, AuditStatus, OutwardStatus, Priority, ReportStatus,
    SourceStatus, ValidationStatus,
};
use serde::Deserialize;

static SAMPLE_DATA_RON: &str = include_str!("../assets/sample_data.ron");

#[derive(Debug, Clone, Deserialize)]
pub struct SampleData {
    pub alerts: Vec<AlertRecord>,
    pub sources: Vec<SourceRecord>,
    pub outward_files: Vec<OutwardRecord>,
    pub validations: Vec<ValidationRecord>,
    pub audit_logs: Vec<AuditRecord>,
    pub reports: Vec<ScheduledReport>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlertRecord {
    pub id: u32,
    pub kind: AlertKind,
    pub title: String,
    pub description: String,
    pub source: String,
    pub department: String,
    pub priority: Priority,
    pub timestamp: String,
    pub status: AlertStatus,
    pub assigned_to: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceRecord {
    pub id: u32,
    pub name: String,
    pub protocol: String,
    pub host: String,
    pub direction: String,
    pub department: String,
    pub status: SourceStatus,
    pub success_rate: f32,
    pub files_processed: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutwardRecord {
    pub id: u32,
    pub file_name: String,
    pub destination: String,
    pub department: String,
    pub status: OutwardStatus,
    pub queued_at: String,
    pub retry_attempts: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ValidationRecord {
    pub id: u32,
    pub file_name: String,
    pub department: String,
    pub validation_type: String,
    pub status: ValidationStatus,
    pub errors: u32,
    pub warnings: u32,
    pub processed_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuditRecord {
    pub id: u32,
    pub file_name: String,
    pub source: String,
    pub department: String,
    pub status: AuditStatus,
    pub action: AuditAction,
    pub user: String,
    pub timestamp: String,
}

/// Reports go to fixed mailing lists and are not tied to a department
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduledReport {
    pub id: u32,
    pub name: String,
    pub frequency: String,
    pub recipients: String,
    pub format: String,
    pub status: ReportStatus,
}

impl SampleData {
    pub fn load() -> anyhow::Result<Self> {
        Self::from_ron(SAMPLE_DATA_RON).context("failed to load bundled sample data")
    }

    pub fn from_ron(s: &str) -> anyhow::Result<Self> {
        Ok(ron::from_str(s)?)
    }
}

macro_rules! impl_scoped {
    ($($record:ty),+) => {
        $(
            impl Scoped for $record {
                fn department(&self) -> &str {
                    &self.department
                }
            }
        )+
    };
}

impl_scoped!(AlertRecord, SourceRecord, OutwardRecord, ValidationRecord, AuditRecord);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_data_loads() {
        // Act
        let actual = SampleData::load().unwrap();

        // Assert
        assert!(!actual.alerts.is_empty());
        assert!(!actual.sources.is_empty());
        assert!(!actual.outward_files.is_empty());
        assert!(!actual.validations.is_empty());
        assert!(!actual.audit_logs.is_empty());
        assert!(!actual.reports.is_empty());
    }

    #[test]
    fn unknown_status_is_rejected() {
        // Arrange
        let input = SAMPLE_DATA_RON.replacen("status: open", "status: snoozed", 1);

        // Act
        let actual = SampleData::from_ron(&input);

        // Assert
        assert!(actual.is_err());
    }
}
