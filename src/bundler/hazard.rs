//! Detection of input that would corrupt the document.
//!
//! Module sources are inserted into CDATA blocks and the root name into a
//! plain XML text node. Neither is escaped, so a source containing `]]>` or a
//! name containing markup characters breaks the model. The scan only reports;
//! whether to refuse is up to the caller.

use super::{module::ModuleSlot, module::ModuleTree, template::CDATA_TERMINATOR};
use std::fmt;

/// Something in the input that would break the surrounding XML.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentHazard {
    /// A module source contains the CDATA terminator at `offset` (bytes).
    CdataTerminator {
        /// Module containing the sequence
        slot: ModuleSlot,
        /// Byte offset of the sequence in the module text
        offset: usize,
    },
    /// The root name contains an XML markup character.
    NameMarkup {
        /// Offending character
        character: char,
    },
}

impl fmt::Display for ContentHazard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentHazard::CdataTerminator { slot, offset } => write!(
                f,
                "{slot} module contains {:?} at byte {offset}",
                CDATA_TERMINATOR
            ),
            ContentHazard::NameMarkup { character } => {
                write!(f, "root name contains markup character {character:?}")
            }
        }
    }
}

/// Lists every hazard in `tree` (modules in document order), then those in
/// `root_name` (each character once).
pub fn scan_hazards(tree: &ModuleTree, root_name: &str) -> Vec<ContentHazard> {
    let mut hazards: Vec<ContentHazard> = tree
        .iter()
        .flat_map(|module| {
            module
                .text()
                .match_indices(CDATA_TERMINATOR)
                .map(move |(offset, _)| ContentHazard::CdataTerminator {
                    slot: module.slot(),
                    offset,
                })
        })
        .collect();

    let mut seen = Vec::new();
    for character in root_name.chars().filter(|c| matches!(c, '<' | '>' | '&')) {
        if !seen.contains(&character) {
            seen.push(character);
            hazards.push(ContentHazard::NameMarkup { character });
        }
    }

    hazards
}
