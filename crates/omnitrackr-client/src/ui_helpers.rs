use omnitrackr_shared::errors::UnknownStatus;
use std::{fmt, str::FromStr};

/// Writes rows as left aligned columns separated by two spaces
pub fn write_table<const N: usize>(
    f: &mut fmt::Formatter<'_>,
    headers: [&str; N],
    rows: &[[String; N]],
) -> fmt::Result {
    if rows.is_empty() {
        return writeln!(f, "(no records)");
    }
    let mut widths = headers.map(|x| x.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }
    write_row(f, &widths, headers.iter().copied())?;
    write_row(f, &widths, widths.iter().map(|x| "-".repeat(*x)))?;
    for row in rows {
        write_row(f, &widths, row.iter())?;
    }
    Ok(())
}

fn write_row<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    widths: &[usize],
    cells: impl Iterator<Item = T>,
) -> fmt::Result {
    let mut line = String::new();
    for (i, (cell, &width)) in cells.zip(widths).enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        line.push_str(&format!("{cell:<width$}"));
    }
    writeln!(f, "{}", line.trim_end())
}

/// `None` and `"all"` both mean the filter is not applied
pub fn parse_filter<T>(value: Option<&str>) -> Result<Option<T>, UnknownStatus>
where
    T: FromStr<Err = UnknownStatus>,
{
    match value {
        None | Some("all") => Ok(None),
        Some(value) => value.parse().map(Some),
    }
}

/// Empty needles match everything
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use omnitrackr_shared::status::AlertKind;
    use rstest::rstest;

    use super::*;

    struct Table(Vec<[String; 2]>);

    impl fmt::Display for Table {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write_table(f, ["Name", "Status"], &self.0)
        }
    }

    #[test]
    fn table_aligns_columns() {
        // Arrange
        let table = Table(vec![
            ["BSP_DAILY.csv".into(), "[Open]".into()],
            ["AWB.xml".into(), "[Resolved]".into()],
        ]);

        // Act
        let actual = table.to_string();

        // Assert
        insta::assert_snapshot!(actual, @r"
        Name           Status
        -------------  ----------
        BSP_DAILY.csv  [Open]
        AWB.xml        [Resolved]
        ");
    }

    #[test]
    fn empty_table() {
        assert_eq!(Table(vec![]).to_string(), "(no records)\n");
    }

    #[rstest]
    #[case::none(None, Ok(None))]
    #[case::all(Some("all"), Ok(None))]
    #[case::known(Some("missing"), Ok(Some(AlertKind::Missing)))]
    #[case::unknown(Some("info"), Err(UnknownStatus { kind: "alert type", value: "info".into() }))]
    fn filter_parsing(
        #[case] input: Option<&str>,
        #[case] expected: Result<Option<AlertKind>, UnknownStatus>,
    ) {
        assert_eq!(parse_filter::<AlertKind>(input), expected);
    }

    #[rstest]
    #[case::same_case("BSP Daily", "BSP", true)]
    #[case::other_case("BSP Daily", "bsp", true)]
    #[case::empty("BSP Daily", "", true)]
    #[case::absent("BSP Daily", "cargo", false)]
    fn search(#[case] haystack: &str, #[case] needle: &str, #[case] expected: bool) {
        assert_eq!(contains_ignore_case(haystack, needle), expected);
    }
}
