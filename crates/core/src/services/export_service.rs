use chrono::Local;

use crate::models::export::ExportRecord;
use crate::models::transaction::Transaction;

/// CSV column headers, in order.
pub const CSV_HEADERS: [&str; 6] = ["Date", "Time", "Type", "Description", "Amount", "Daily Limit"];

/// Builds the spending report from the transaction history.
pub struct ExportService;

impl ExportService {
    pub fn new() -> Self {
        Self
    }

    /// One record per transaction, in ledger order. Every row carries the
    /// daily limit as it stands at export time.
    #[must_use]
    pub fn records<'a>(
        &self,
        transactions: impl IntoIterator<Item = &'a Transaction>,
        daily_limit: f64,
    ) -> Vec<ExportRecord> {
        let limit = format_money(daily_limit);
        transactions
            .into_iter()
            .map(|t| {
                let local = t.timestamp.with_timezone(&Local);
                ExportRecord {
                    date: local.format("%Y-%m-%d").to_string(),
                    time: local.format("%H:%M:%S").to_string(),
                    kind: t.kind,
                    description: t.description.clone(),
                    amount: format_money(t.amount),
                    daily_limit: limit.clone(),
                }
            })
            .collect()
    }

    /// Render records as CSV. Descriptions are always quoted.
    #[must_use]
    pub fn to_csv(&self, records: &[ExportRecord]) -> String {
        let mut csv = CSV_HEADERS.join(",");
        csv.push('\n');
        for r in records {
            csv.push_str(&format!(
                "{},{},{},\"{}\",{},{}\n",
                r.date,
                r.time,
                r.kind,
                r.description.replace('"', "\"\""),
                r.amount,
                r.daily_limit,
            ));
        }
        csv
    }
}

impl Default for ExportService {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed-point with two fractional digits.
#[must_use]
pub fn format_money(value: f64) -> String {
    format!("{value:.2}")
}
