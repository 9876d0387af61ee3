//! Symbol to code lookup.

use crate::bitcode::BitCode;
use oxihuff_core::{ALPH_SIZE, Symbol};

/// Codes for every symbol that has a leaf in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: Vec<Option<BitCode>>,
}

impl CodeTable {
    pub(crate) fn new() -> Self {
        Self {
            codes: vec![None; ALPH_SIZE + 1],
        }
    }

    pub(crate) fn insert(&mut self, symbol: Symbol, code: BitCode) {
        self.codes[symbol as usize] = Some(code);
    }

    /// Code for `symbol`, if it occurred.
    pub fn get(&self, symbol: Symbol) -> Option<&BitCode> {
        self.codes.get(symbol as usize).and_then(Option::as_ref)
    }

    /// `(symbol, code)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &BitCode)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(symbol, code)| code.as_ref().map(|code| (symbol as Symbol, code)))
    }

    /// Number of symbols with a code.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Whether no symbol has a code.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Length of the longest code.
    pub fn max_length(&self) -> usize {
        self.iter().map(|(_, code)| code.len()).max().unwrap_or(0)
    }
}
