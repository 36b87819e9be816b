//! Text rendering of classified transfers
//!
//! Every view is a small value that hands out a fresh iterator of lines on each
//! call to `lines()`. Nothing is written here; the session decides where lines
//! go. Colors come from [`Palette`], so the same views render plain text when
//! styling is off.

use crate::core::classifier::Classified;
use crate::types::{TransferRecord, TransferType};
use crossterm::style::Stylize;

pub const NO_TRANSACTIONS: &str = "You currently have no transactions.\n";
pub const NO_MATCHING_TRANSACTIONS: &str = "None of your transactions match.\n";
pub const TRANSFER_NOT_FOUND: &str = "Transfer id does not exist.";
pub const NO_PENDING_REQUESTS: &str = "You have no pending transfer requests\n";
pub const NO_MATCHING_PENDING: &str = "None of your pending requests need your action.\n";
pub const INVALID_PENDING_SELECTION: &str = "Please select a valid transaction";

/// Cell content width; each cell is padded by one space on either side
const CELL: usize = 13;

/// Terminal styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    /// Green frames, cyan values, bold headings
    Ansi,
    /// No escape sequences at all
    Plain,
}

impl Palette {
    fn frame(self, text: &str) -> String {
        match self {
            Palette::Ansi => text.green().to_string(),
            Palette::Plain => text.to_string(),
        }
    }

    fn value(self, text: &str) -> String {
        match self {
            Palette::Ansi => text.cyan().to_string(),
            Palette::Plain => text.to_string(),
        }
    }

    fn heading(self, text: &str) -> String {
        match self {
            Palette::Ansi => text.cyan().bold().to_string(),
            Palette::Plain => text.to_string(),
        }
    }

    /// `+---------------+...` for `columns` cells
    fn border(self, columns: usize) -> String {
        let segment = format!("{}+", "-".repeat(CELL + 2));
        self.frame(&format!("+{}", segment.repeat(columns)))
    }

    /// Border with `title` centered in it
    fn banner(self, title: &str, columns: usize) -> String {
        let inner = columns * (CELL + 3) - 1;
        let padded = format!("{:-^inner$}", format!(" {} ", title));
        let split = padded.find(title).unwrap_or(0);
        let (left, rest) = padded.split_at(split);
        let right = &rest[title.len()..];
        format!(
            "{}{}{}",
            self.frame(&format!("+{}", left)),
            self.heading(title),
            self.frame(&format!("{}+", right))
        )
    }

    /// `| a | b | ... |` with left-aligned cells
    fn row<S: AsRef<str>>(self, cells: &[S], style: fn(Palette, &str) -> String) -> String {
        let mut line = self.frame("|");
        for cell in cells {
            line.push(' ');
            line.push_str(&style(self, &format!("{:<CELL$}", cell.as_ref())));
            line.push(' ');
            line.push_str(&self.frame("|"));
        }
        line
    }

    /// A row spanning `columns` cells, split into a left and right-aligned half
    fn split_row(self, left: &str, right: &str, columns: usize) -> String {
        let half = (columns * (CELL + 3) - 5) / 2;
        format!(
            "{} {} {} {} {}",
            self.frame("|"),
            self.value(&format!("{:<half$}", left)),
            self.frame("|"),
            self.value(&format!("{:>half$}", right)),
            self.frame("|")
        )
    }

    /// A row spanning `columns` cells with one left-aligned value
    fn full_row(self, text: &str, columns: usize) -> String {
        let width = columns * (CELL + 3) - 3;
        format!(
            "{} {} {}",
            self.frame("|"),
            self.heading(&format!("{:<width$}", text)),
            self.frame("|")
        )
    }
}

/// Labels for the two parties of a transfer in detail views
///
/// Sends read "FROM/TO"; requests read "BY" (requester, `from`) and "OF"
/// (payer, `to`).
pub fn party_labels(transfer_type: TransferType) -> (&'static str, &'static str) {
    match transfer_type {
        TransferType::Send => ("FROM", "TO"),
        TransferType::Request => ("BY", "OF"),
    }
}

fn dollars(record: &TransferRecord) -> String {
    format!("${}", record.amount())
}

/// Past transfers: id, type, status and signed amount
pub struct HistoryTable<'a> {
    rows: &'a [Classified<'a>],
    palette: Palette,
}

impl<'a> HistoryTable<'a> {
    const COLUMNS: usize = 4;

    pub fn new(rows: &'a [Classified<'a>], palette: Palette) -> Self {
        HistoryTable { rows, palette }
    }

    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        let p = self.palette;
        let head = [
            p.border(Self::COLUMNS),
            p.banner("TRANSACTIONS", Self::COLUMNS),
            p.border(Self::COLUMNS),
            p.row(&["ID", "Type", "Status", "Amount"], Palette::heading),
            p.border(Self::COLUMNS),
        ];
        let body = self.rows.iter().map(move |row| {
            p.row(
                &[
                    row.record.id().to_string(),
                    row.type_label.to_string(),
                    row.status_label.to_string(),
                    format!("{} {}", row.sign.symbol(), dollars(row.record)),
                ],
                Palette::value,
            )
        });

        head.into_iter()
            .chain(body)
            .chain(std::iter::once_with(move || p.border(Self::COLUMNS)))
    }
}

/// One transfer in full, with counterparties resolved to usernames
pub struct TransferDetail<'a> {
    row: Classified<'a>,
    from_username: &'a str,
    to_username: &'a str,
    palette: Palette,
}

impl<'a> TransferDetail<'a> {
    const COLUMNS: usize = 3;

    pub fn new(
        row: Classified<'a>,
        from_username: &'a str,
        to_username: &'a str,
        palette: Palette,
    ) -> Self {
        TransferDetail {
            row,
            from_username,
            to_username,
            palette,
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        let p = self.palette;
        let (from_label, to_label) = party_labels(self.row.record.transfer_type());
        let border = p.border(Self::COLUMNS);

        [
            border.clone(),
            p.full_row(&format!("ID: {}", self.row.record.id()), Self::COLUMNS),
            border.clone(),
            p.split_row(
                &format!("STATUS: {}", self.row.status_label),
                &format!("TYPE: {}", self.row.type_label),
                Self::COLUMNS,
            ),
            border.clone(),
            p.split_row(
                &format!("{}: {}", from_label, self.from_username),
                &format!("{}: {}", to_label, self.to_username),
                Self::COLUMNS,
            ),
            border.clone(),
            p.full_row(&format!("AMOUNT: {}", self.row.signed_amount()), Self::COLUMNS),
            border,
        ]
        .into_iter()
    }
}

/// Pending requests awaiting the viewer: id and amount
pub struct PendingTable<'a> {
    records: &'a [TransferRecord],
    palette: Palette,
}

impl<'a> PendingTable<'a> {
    const COLUMNS: usize = 2;

    pub fn new(records: &'a [TransferRecord], palette: Palette) -> Self {
        PendingTable { records, palette }
    }

    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        let p = self.palette;
        let head = [
            p.border(Self::COLUMNS),
            p.banner("PENDING REQUESTS", Self::COLUMNS),
            p.border(Self::COLUMNS),
            p.row(&["ID", "Amount"], Palette::heading),
            p.border(Self::COLUMNS),
        ];
        let body = self
            .records
            .iter()
            .map(move |record| p.row(&[record.id().to_string(), dollars(record)], Palette::value));

        head.into_iter()
            .chain(body)
            .chain(std::iter::once_with(move || p.border(Self::COLUMNS)))
    }
}

/// One pending request with its requester resolved to a username
pub struct PendingDetail<'a> {
    record: &'a TransferRecord,
    requester: &'a str,
    palette: Palette,
}

impl<'a> PendingDetail<'a> {
    const COLUMNS: usize = 4;

    pub fn new(record: &'a TransferRecord, requester: &'a str, palette: Palette) -> Self {
        PendingDetail {
            record,
            requester,
            palette,
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        let p = self.palette;
        let border = p.border(Self::COLUMNS);

        [
            border.clone(),
            p.row(&["ID", "Type", "Requested By", "Amount"], Palette::heading),
            border.clone(),
            p.row(
                &[
                    self.record.id().to_string(),
                    self.record.transfer_type().label().to_string(),
                    self.requester.to_string(),
                    dollars(self.record),
                ],
                Palette::value,
            ),
            border,
        ]
        .into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::classifier::classify_all;
    use crate::types::{TransferStatus, Viewer};
    use rust_decimal::Decimal;

    fn records() -> Vec<TransferRecord> {
        vec![
            TransferRecord::new(1, TransferType::Send, TransferStatus::Approved, 10, 20, Decimal::new(5000, 2))
                .unwrap(),
            TransferRecord::new(2, TransferType::Request, TransferStatus::Pending, 10, 20, Decimal::new(500, 2))
                .unwrap(),
        ]
    }

    #[test]
    fn test_history_table_plain() {
        let records = records();
        let rows = classify_all(&records, Viewer::new(20));
        let lines: Vec<String> = HistoryTable::new(&rows, Palette::Plain).lines().collect();

        assert_eq!(
            lines,
            vec![
                "+---------------+---------------+---------------+---------------+",
                "+------------------------ TRANSACTIONS -------------------------+",
                "+---------------+---------------+---------------+---------------+",
                "| ID            | Type          | Status        | Amount        |",
                "+---------------+---------------+---------------+---------------+",
                "| 1             | Send          | Approved      | + $50.00      |",
                "| 2             | Request       | Pending       | - $5.00       |",
                "+---------------+---------------+---------------+---------------+",
            ]
        );
    }

    #[test]
    fn test_history_table_is_restartable() {
        let records = records();
        let rows = classify_all(&records, Viewer::new(10));
        let table = HistoryTable::new(&rows, Palette::Ansi);

        let first: Vec<String> = table.lines().collect();
        let second: Vec<String> = table.lines().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 8);
    }

    #[test]
    fn test_history_table_without_rows() {
        let rows = classify_all(&[], Viewer::new(10));
        assert_eq!(HistoryTable::new(&rows, Palette::Plain).lines().count(), 6);
    }

    #[test]
    fn test_ansi_palette_styles_and_plain_does_not() {
        let records = records();
        let rows = classify_all(&records, Viewer::new(20));

        let ansi: String = HistoryTable::new(&rows, Palette::Ansi).lines().collect();
        let plain: String = HistoryTable::new(&rows, Palette::Plain).lines().collect();
        assert!(ansi.contains('\u{1b}'));
        assert!(!plain.contains('\u{1b}'));
    }

    #[test]
    fn test_transfer_detail_send() {
        let records = records();
        let rows = classify_all(&records, Viewer::new(10));
        let lines: Vec<String> = TransferDetail::new(rows[0], "alice", "bob", Palette::Plain)
            .lines()
            .collect();

        assert_eq!(
            lines,
            vec![
                "+---------------+---------------+---------------+",
                "| ID: 1                                         |",
                "+---------------+---------------+---------------+",
                "| STATUS: Approved      |            TYPE: Send |",
                "+---------------+---------------+---------------+",
                "| FROM: alice           |               TO: bob |",
                "+---------------+---------------+---------------+",
                "| AMOUNT: -50.00                                |",
                "+---------------+---------------+---------------+",
            ]
        );
    }

    #[test]
    fn test_transfer_detail_request_labels() {
        let records = records();
        let rows = classify_all(&records, Viewer::new(20));
        let text: Vec<String> = TransferDetail::new(rows[1], "alice", "bob", Palette::Plain)
            .lines()
            .collect();

        assert_eq!(text[5], "| BY: alice             |               OF: bob |");
        assert_eq!(text[7], "| AMOUNT: -5.00                                 |");
    }

    #[test]
    fn test_pending_table_and_detail() {
        let records = records();
        let pending = &records[1..];

        let table: Vec<String> = PendingTable::new(pending, Palette::Plain).lines().collect();
        assert_eq!(table[1], "+------ PENDING REQUESTS -------+");
        assert_eq!(table[5], "| 2             | $5.00         |");
        assert_eq!(table.len(), 7);

        let detail: Vec<String> = PendingDetail::new(&pending[0], "alice", Palette::Plain)
            .lines()
            .collect();
        assert_eq!(
            detail[3],
            "| 2             | Request       | alice         | $5.00         |"
        );
    }
}
