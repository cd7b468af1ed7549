use omnitrackr_client_core::Route;
use omnitrackr_shared::status::{AlertKind, HasBadge as _};
use std::fmt;

use super::{DisplayablePage, PageContext};
use crate::{cli::PageFilters, sample_data::AlertRecord, ui_helpers::write_table};

const RECENT_ALERTS_SHOWN: usize = 3;

#[derive(Debug)]
pub struct UiDashboard {
    department: String,
    role_title: &'static str,
    kpis: Kpis,
    recent_alerts: Vec<AlertRecord>,
}

/// Totals over the records in scope
#[derive(Debug, Default, PartialEq)]
struct Kpis {
    inward_sources: usize,
    outward_files: usize,
    files_processed: u32,
    /// Mean over the sources, `None` without sources
    success_rate: Option<f32>,
    open_alerts: usize,
    missing_files: usize,
}

impl DisplayablePage for UiDashboard {
    fn route() -> Route {
        Route::Dashboard
    }

    fn new_page(ctx: &PageContext<'_>, _filters: &PageFilters) -> anyhow::Result<Self> {
        let scope = ctx.scope;
        let identity = scope.identity();
        let department = identity
            .and_then(|x| x.current_department())
            .map(|x| x.to_string())
            .unwrap_or_default();
        let role_title = identity.map(|x| x.role.title()).unwrap_or_default();

        let sources = scope.filter(&ctx.data.sources);
        let alerts = scope.filter(&ctx.data.alerts);
        let success_rate = (!sources.is_empty()).then(|| {
            sources.iter().map(|x| x.success_rate).sum::<f32>() / sources.len() as f32
        });
        let kpis = Kpis {
            inward_sources: sources.iter().filter(|x| x.direction == "inward").count(),
            outward_files: scope.filter(&ctx.data.outward_files).len(),
            files_processed: sources.iter().map(|x| x.files_processed).sum(),
            success_rate,
            open_alerts: alerts.iter().filter(|x| x.status.is_unresolved()).count(),
            missing_files: alerts
                .iter()
                .filter(|x| x.kind == AlertKind::Missing && x.status.is_unresolved())
                .count(),
        };
        let recent_alerts = alerts
            .into_iter()
            .filter(|x| x.status.is_unresolved())
            .take(RECENT_ALERTS_SHOWN)
            .cloned()
            .collect();

        Ok(Self {
            department,
            role_title,
            kpis,
            recent_alerts,
        })
    }

    fn show(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} Dashboard [{}]", self.department, self.role_title)?;
        let success_rate = self
            .kpis
            .success_rate
            .map(|x| format!("{x:.1}%"))
            .unwrap_or_else(|| "-".to_string());
        write_table(
            f,
            [
                "Inward Sources",
                "Outward Files",
                "Files Processed",
                "Success Rate",
                "Open Alerts",
                "Missing Files",
            ],
            &[[
                self.kpis.inward_sources.to_string(),
                self.kpis.outward_files.to_string(),
                self.kpis.files_processed.to_string(),
                success_rate,
                self.kpis.open_alerts.to_string(),
                self.kpis.missing_files.to_string(),
            ]],
        )?;
        writeln!(f)?;
        writeln!(f, "Recent Alerts")?;
        let rows: Vec<_> = self
            .recent_alerts
            .iter()
            .map(|alert| {
                [
                    alert.kind.badge().to_string(),
                    alert.title.clone(),
                    alert.department.clone(),
                    alert.timestamp.clone(),
                ]
            })
            .collect();
        write_table(f, ["Type", "Title", "Department", "Time"], &rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::test_helpers::{build_page, render};

    #[test]
    fn finance_dashboard() {
        // Act
        let page: UiDashboard =
            build_page(Some("finance@omnitrackr.com"), &PageFilters::default()).unwrap();

        // Assert
        insta::assert_snapshot!(render(&page), @r"
        Finance Dashboard [Department User]
        Inward Sources  Outward Files  Files Processed  Success Rate  Open Alerts  Missing Files
        --------------  -------------  ---------------  ------------  -----------  -------------
        1               1              1703             97.4%         3            1

        Recent Alerts
        Type       Title                           Department  Time
        ---------  ------------------------------  ----------  -------------------
        [Error]    BSP Daily Report Missing        Finance     2024-12-19 09:15:00
        [Missing]  Interline Billing File Missing  Finance     2024-12-19 08:30:00
        [Delayed]  Settlement File Delayed         Finance     2024-12-19 07:45:00
        ");
    }

    #[test]
    fn admin_counts_every_department() {
        // Act
        let page: UiDashboard =
            build_page(Some("admin@omnitrackr.com"), &PageFilters::default()).unwrap();

        // Assert
        assert_eq!(page.role_title, "Administrator");
        assert_eq!(page.department, "Finance");
        assert_eq!(page.kpis.inward_sources, 5);
        assert_eq!(page.kpis.outward_files, 4);
        assert_eq!(page.kpis.open_alerts, 12);
        assert_eq!(page.kpis.missing_files, 2);
        assert_eq!(page.recent_alerts.len(), RECENT_ALERTS_SHOWN);
    }
}
