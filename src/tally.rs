// src/tally.rs
use std::collections::HashMap;

use crate::table::ReportTable;

pub const STATUS_HEADER: (&str, &str) = ("Статус", "Количество");
pub const TOTAL_LABEL: &str = "Всего";

/// Per-status counter that remembers first-seen order.
/// Missing keys start at zero on first increment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusTally {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl StatusTally {
    pub fn new() -> Self { Self::default() }

    /// Bump `status` by one and return the new count.
    pub fn increment(&mut self, status: &str) -> usize {
        let slot = match self.index.get(status) {
            Some(&i) => i,
            None => {
                self.entries.push((s!(status), 0));
                self.index.insert(s!(status), self.entries.len() - 1);
                self.entries.len() - 1
            }
        };
        let count = &mut self.entries[slot].1;
        *count += 1;
        *count
    }

    pub fn get(&self, status: &str) -> usize {
        self.index.get(status).map_or(0, |&i| self.entries[i].1)
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    /// (status, count) in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(s, n)| (s.as_str(), *n))
    }

    /// Header, one row per status, then the total row.
    pub fn to_table(&self) -> ReportTable {
        let rows = self
            .iter()
            .map(|(status, n)| [s!(status), n.to_string()])
            .chain(std::iter::once([s!(TOTAL_LABEL), self.total().to_string()]));
        ReportTable::from_fixed([s!(STATUS_HEADER.0), s!(STATUS_HEADER.1)], rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_seen_order() {
        let mut t = StatusTally::new();
        for s in ["Final", "Active", "Final", "Draft", "Active", "Final"] {
            t.increment(s);
        }
        let got: Vec<(&str, usize)> = t.iter().collect();
        assert_eq!(got, vec![("Final", 3), ("Active", 2), ("Draft", 1)]);
        assert_eq!(t.get("Rejected"), 0);
        assert_eq!(t.total(), 6);
    }

    #[test]
    fn table_has_header_rows_and_total() {
        let mut t = StatusTally::new();
        t.increment("Active");
        t.increment("Active");
        t.increment("Withdrawn");

        let table = t.to_table();
        assert_eq!(table.record_count(), t.len() + 2);
        assert_eq!(table.header(), &row!["Статус", "Количество"][..]);
        assert_eq!(table.rows()[0], row!["Active", "2"]);
        assert_eq!(table.rows()[1], row!["Withdrawn", "1"]);
        assert_eq!(table.rows()[2], row!["Всего", "3"]);
    }

    #[test]
    fn empty_tally_still_has_total() {
        let table = StatusTally::new().to_table();
        assert_eq!(table.record_count(), 2);
        assert_eq!(table.rows()[0], row!["Всего", "0"]);
    }

    #[test]
    fn total_row_sums_body_for_arbitrary_input() {
        let mut t = StatusTally::new();
        for i in 0..97u32 {
            t.increment(["A", "B", "C", "D", "E"][(i * 7 % 5) as usize]);
        }
        let table = t.to_table();
        let (total, body) = table.rows().split_last().unwrap();
        let sum: usize = body.iter().map(|r| r[1].parse::<usize>().unwrap()).sum();
        assert_eq!(total[1].parse::<usize>().unwrap(), sum);
        assert_eq!(sum, 97);
    }
}
