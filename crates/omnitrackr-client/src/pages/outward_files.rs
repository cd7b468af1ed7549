use omnitrackr_client_core::Route;
use omnitrackr_shared::status::{HasBadge as _, OutwardStatus};
use std::fmt;

use super::{DisplayablePage, PageContext};
use crate::{
    cli::PageFilters,
    sample_data::OutwardRecord,
    ui_helpers::{parse_filter, write_table},
};

#[derive(Debug)]
pub struct UiOutwardFiles {
    files: Vec<OutwardRecord>,
}

impl DisplayablePage for UiOutwardFiles {
    fn route() -> Route {
        Route::OutwardFiles
    }

    fn new_page(ctx: &PageContext<'_>, filters: &PageFilters) -> anyhow::Result<Self> {
        let status: Option<OutwardStatus> = parse_filter(filters.status.as_deref())?;
        let files = ctx
            .scope
            .filter(&ctx.data.outward_files)
            .into_iter()
            .filter(|file| status.is_none_or(|x| file.status == x))
            .cloned()
            .collect();
        Ok(Self { files })
    }

    fn show(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<_> = self
            .files
            .iter()
            .map(|file| {
                [
                    file.file_name.clone(),
                    file.destination.clone(),
                    file.department.clone(),
                    file.status.badge().to_string(),
                    file.queued_at.clone(),
                    file.retry_attempts.to_string(),
                ]
            })
            .collect();
        write_table(
            f,
            [
                "File",
                "Destination",
                "Department",
                "Status",
                "Queued At",
                "Retries",
            ],
            &rows,
        )
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::pages::test_helpers::build_page;

    #[rstest]
    #[case::loyalty(Some("loyalty@omnitrackr.com"), None, &[4])]
    #[case::finance_failed(Some("finance@omnitrackr.com"), Some("failed"), &[])]
    #[case::admin(Some("admin@omnitrackr.com"), None, &[1, 2, 3, 4])]
    #[case::admin_queued(Some("admin@omnitrackr.com"), Some("queued"), &[3])]
    fn scoped_and_filtered(
        #[case] email: Option<&str>,
        #[case] status: Option<&str>,
        #[case] expected: &[u32],
    ) {
        // Arrange
        let filters = PageFilters {
            status: status.map(Into::into),
            ..Default::default()
        };

        // Act
        let actual: UiOutwardFiles = build_page(email, &filters).unwrap();

        // Assert
        let ids: Vec<u32> = actual.files.iter().map(|x| x.id).collect();
        assert_eq!(ids, expected);
    }
}
