//! Closed sets of statuses shown on the dashboard pages and how each one is
//! presented as a badge
//!
//! Every kind parses from (and serializes to) the same lowercase identifiers
//! the sample datasets use. Anything else is rejected when parsing instead of
//! falling back to a neutral badge.

use std::fmt::Display;

use crate::errors::UnknownStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub label: &'static str,
}

pub trait HasBadge {
    fn badge(&self) -> Badge;
}

impl Display for Badge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.label)
    }
}

/// Declares a status enum along with its identifier and badge for each variant
///
/// The generated `match`es have no wildcard arm so adding a variant without a
/// badge does not compile.
macro_rules! status_kind {
    (
        $(#[$meta:meta])*
        $name:ident, $kind_desc:literal {
            $($variant:ident => ($ident:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            serde::Serialize,
            serde::Deserialize,
            strum::EnumIter,
        )]
        pub enum $name {
            $(
                #[serde(rename = $ident)]
                $variant,
            )+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $ident,)+
                }
            }
        }

        impl HasBadge for $name {
            fn badge(&self) -> Badge {
                match self {
                    $(Self::$variant => Badge { label: $label },)+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = UnknownStatus;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($ident => Ok(Self::$variant),)+
                    other => Err(UnknownStatus {
                        kind: $kind_desc,
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }
    };
}

status_kind! {
    /// What went wrong with an expected file exchange
    AlertKind, "alert type" {
        Error => ("error", "Error"),
        Missing => ("missing", "Missing"),
        Warning => ("warning", "Warning"),
        Delayed => ("delayed", "Delayed"),
        Duplicate => ("duplicate", "Duplicate"),
        Corrupt => ("corrupt", "Corrupt"),
    }
}

status_kind! {
    AlertStatus, "alert status" {
        Open => ("open", "Open"),
        Acknowledged => ("acknowledged", "Acknowledged"),
        InProgress => ("in_progress", "In Progress"),
        Resolved => ("resolved", "Resolved"),
        Escalated => ("escalated", "Escalated"),
    }
}

status_kind! {
    Priority, "priority" {
        High => ("high", "High"),
        Medium => ("medium", "Medium"),
        Low => ("low", "Low"),
    }
}

status_kind! {
    /// Health of a configured inbound or outbound file source
    SourceStatus, "source status" {
        Active => ("active", "Active"),
        Failed => ("failed", "Failed"),
        Pending => ("pending", "Pending"),
        Disabled => ("disabled", "Disabled"),
    }
}

status_kind! {
    OutwardStatus, "outward file status" {
        Queued => ("queued", "Queued"),
        Sent => ("sent", "Sent"),
        Acknowledged => ("acknowledged", "Acknowledged"),
        Failed => ("failed", "Failed"),
    }
}

status_kind! {
    ValidationStatus, "validation status" {
        Passed => ("passed", "Passed"),
        Warning => ("warning", "Warning"),
        Failed => ("failed", "Failed"),
    }
}

status_kind! {
    AuditStatus, "audit status" {
        Processed => ("processed", "Processed"),
        Failed => ("failed", "Failed"),
        Sent => ("sent", "Sent"),
        Pending => ("pending", "Pending"),
    }
}

status_kind! {
    AuditAction, "audit action" {
        FileReceived => ("file_received", "File Received"),
        FileProcessed => ("file_processed", "File Processed"),
        FileSent => ("file_sent", "File Sent"),
        ValidationFailed => ("validation_failed", "Validation Failed"),
        HashCheckFailed => ("hash_check_failed", "Hash Check Failed"),
        DataQualityCheck => ("data_quality_check", "Data Quality Check"),
        ScheduledExport => ("scheduled_export", "Scheduled Export"),
        DataIngestion => ("data_ingestion", "Data Ingestion"),
        ComplianceCheck => ("compliance_check", "Compliance Check"),
    }
}

status_kind! {
    ReportStatus, "report status" {
        Active => ("active", "Active"),
        Paused => ("paused", "Paused"),
    }
}

impl AlertStatus {
    /// Still needs someone to look at it
    pub fn is_unresolved(&self) -> bool {
        !matches!(self, Self::Resolved)
    }
}
