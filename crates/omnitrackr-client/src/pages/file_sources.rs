use omnitrackr_client_core::Route;
use omnitrackr_shared::status::HasBadge as _;
use std::fmt;

use super::{DisplayablePage, PageContext};
use crate::{cli::PageFilters, sample_data::SourceRecord, ui_helpers::write_table};

#[derive(Debug)]
pub struct UiFileSources {
    sources: Vec<SourceRecord>,
}

impl DisplayablePage for UiFileSources {
    fn route() -> Route {
        Route::FileSources
    }

    fn new_page(ctx: &PageContext<'_>, _filters: &PageFilters) -> anyhow::Result<Self> {
        Ok(Self {
            sources: ctx
                .scope
                .filter(&ctx.data.sources)
                .into_iter()
                .cloned()
                .collect(),
        })
    }

    fn show(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<_> = self
            .sources
            .iter()
            .map(|source| {
                [
                    source.name.clone(),
                    source.protocol.clone(),
                    source.host.clone(),
                    source.direction.clone(),
                    source.department.clone(),
                    source.status.badge().to_string(),
                    format!("{:.1}%", source.success_rate),
                    source.files_processed.to_string(),
                ]
            })
            .collect();
        write_table(
            f,
            [
                "Name",
                "Type",
                "Host",
                "Direction",
                "Department",
                "Status",
                "Success",
                "Files",
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
    #[case::finance(Some("finance@omnitrackr.com"), &[1, 5])]
    #[case::ops(Some("ops@omnitrackr.com"), &[3])]
    #[case::admin(Some("admin@omnitrackr.com"), &[1, 2, 3, 4, 5, 6])]
    #[case::no_session(None, &[])]
    fn scoped_to_session(#[case] email: Option<&str>, #[case] expected: &[u32]) {
        // Act
        let actual: UiFileSources = build_page(email, &PageFilters::default()).unwrap();

        // Assert
        let ids: Vec<u32> = actual.sources.iter().map(|x| x.id).collect();
        assert_eq!(ids, expected);
    }
}
