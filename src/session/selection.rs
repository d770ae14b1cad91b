use std::collections::BTreeSet;

use crate::task::TaskKind;

/// What the user chose to practice
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub kinds: BTreeSet<TaskKind>,
    pub tables: BTreeSet<u8>,
}

impl Selection {
    pub fn needs_tables(&self) -> bool {
        self.kinds.contains(&TaskKind::Multiplication) && self.tables.is_empty()
    }
}

/// Collect the operation kinds named by the symbols in `input`.
/// Repeated symbols collapse; anything else is ignored.
pub fn parse_kinds(input: &str) -> BTreeSet<TaskKind> {
    TaskKind::ALL
        .into_iter()
        .filter(|kind| input.contains(kind.symbol()))
        .collect()
}

/// Collect every digit in `input` as a times-table number
pub fn parse_tables(input: &str) -> BTreeSet<u8> {
    input
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| d as u8)
        .collect()
}
