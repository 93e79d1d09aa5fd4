use adv_engine::Report;

/// How much of each distribution to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Style {
    /// Every advance count, odds to twelve decimals.
    Full,
    /// Only the significant range, odds to two decimals, plus the possible range.
    #[default]
    Rounded,
}

/// Side-by-side tab-delimited tables, one per window, ready to paste
/// into a spreadsheet. Each window occupies three columns: advances,
/// odds in percent, and a spacer.
pub struct Table<'a> {
    reports: &'a [Report],
    style: Style,
}

impl<'a> Table<'a> {
    pub fn new(reports: &'a [Report], style: Style) -> Self {
        Self { reports, style }
    }
    fn header(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for report in self.reports {
            write!(f, "{}\t\t\t", report.window)?;
        }
        writeln!(f)?;
        for _ in self.reports {
            match self.style {
                Style::Full => write!(f, "Advance\tPercent\t\t")?,
                Style::Rounded => write!(f, "Advances\tOdds in %\t\t")?,
            }
        }
        writeln!(f)
    }
    fn full(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rows = self
            .reports
            .iter()
            .map(|r| r.distribution.len())
            .max()
            .unwrap_or(0);
        for row in 0..rows {
            for report in self.reports {
                match row < report.distribution.len() {
                    true => write!(
                        f,
                        "{}\t{:.12}\t\t",
                        row,
                        report.distribution.get(row) * 100.
                    )?,
                    false => write!(f, "\t\t\t")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
    fn rounded(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rows = self
            .reports
            .iter()
            .map(|r| r.summary.significant.height() + 1)
            .max()
            .unwrap_or(0);
        for row in 0..rows {
            for report in self.reports {
                let shown = report.summary.significant;
                let height = shown.height();
                let advance = shown.min + row;
                if shown.contains(advance) {
                    let odds = report.distribution.get(advance) * 100.;
                    write!(f, "{}\t{:.2}\t\t", advance, odds)?;
                } else if row == height {
                    write!(f, "possible advances: {}\t\t\t", report.summary.full)?;
                } else {
                    write!(f, "\t\t\t")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl std::fmt::Display for Table<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.header(f)?;
        match self.style {
            Style::Full => self.full(f),
            Style::Rounded => self.rounded(f),
        }
    }
}
