use omnitrackr_client_core::Route;
use omnitrackr_shared::status::{HasBadge as _, ValidationStatus};
use std::fmt;

use super::{DisplayablePage, PageContext};
use crate::{
    cli::PageFilters,
    sample_data::ValidationRecord,
    ui_helpers::{parse_filter, write_table},
};

#[derive(Debug)]
pub struct UiFileValidation {
    results: Vec<ValidationRecord>,
}

impl UiFileValidation {
    fn count(&self, status: ValidationStatus) -> usize {
        self.results.iter().filter(|x| x.status == status).count()
    }
}

impl DisplayablePage for UiFileValidation {
    fn route() -> Route {
        Route::FileValidation
    }

    fn new_page(ctx: &PageContext<'_>, filters: &PageFilters) -> anyhow::Result<Self> {
        let status: Option<ValidationStatus> = parse_filter(filters.status.as_deref())?;
        let results = ctx
            .scope
            .filter(&ctx.data.validations)
            .into_iter()
            .filter(|result| status.is_none_or(|x| result.status == x))
            .cloned()
            .collect();
        Ok(Self { results })
    }

    fn show(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Passed: {}  Warnings: {}  Failed: {}",
            self.count(ValidationStatus::Passed),
            self.count(ValidationStatus::Warning),
            self.count(ValidationStatus::Failed),
        )?;
        let rows: Vec<_> = self
            .results
            .iter()
            .map(|result| {
                [
                    result.file_name.clone(),
                    result.department.clone(),
                    result.validation_type.clone(),
                    result.status.badge().to_string(),
                    result.errors.to_string(),
                    result.warnings.to_string(),
                    result.processed_at.clone(),
                ]
            })
            .collect();
        write_table(
            f,
            [
                "File",
                "Department",
                "Validation",
                "Status",
                "Errors",
                "Warnings",
                "Processed At",
            ],
            &rows,
        )
    }
}
