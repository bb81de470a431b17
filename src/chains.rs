//! Parsing and validation of interactor chain-group specifications.

use serde::Serialize;
use thiserror::Error;

/// Errors raised while validating a chain-group specification string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChainSpecError {
    /// The specification string was empty.
    #[error("empty chain specification")]
    Empty,
    /// The specification contained non-ASCII characters.
    #[error("chain specification {0:?} is not ASCII, use chain identifiers [ A-Z ]")]
    NonAscii(String),
    /// A comma-separated token was not a single letter.
    #[error("invalid chain identifier {found:?} in {spec:?}, specify chains like A or A,B,C")]
    InvalidIdentifier {
        /// The full (upper-cased) specification being parsed.
        spec: String,
        /// The offending token.
        found: String,
    },
}

/// One interactor group: an ordered list of single-letter chain identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ChainGroup {
    chains: Vec<String>,
}

impl ChainGroup {
    /// Whether `chain_id` belongs to this group.
    pub fn contains(&self, chain_id: &str) -> bool {
        self.chains.iter().any(|c| c == chain_id)
    }

    /// The chain identifiers in specification order.
    pub fn chains(&self) -> &[String] {
        &self.chains
    }
}

impl std::fmt::Display for ChainGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.chains.join(","))
    }
}

/// Parse a single chain-group specification.
///
/// The string is upper-cased first, so `a,b` and `A,B` are equivalent. Each
/// comma-separated token must be exactly one letter; empty tokens reject
/// leading, trailing and doubled commas (`A,`, `,A`, `A,,B`).
pub fn parse_chain_group(spec: &str) -> Result<ChainGroup, ChainSpecError> {
    if spec.is_empty() {
        return Err(ChainSpecError::Empty);
    }
    if !spec.is_ascii() {
        return Err(ChainSpecError::NonAscii(spec.to_string()));
    }
    let spec = spec.to_ascii_uppercase();

    let mut chains = Vec::new();
    for token in spec.split(',') {
        let valid = token.len() == 1 && token.chars().all(|c| c.is_ascii_uppercase());
        if !valid {
            return Err(ChainSpecError::InvalidIdentifier {
                spec: spec.clone(),
                found: token.to_string(),
            });
        }
        chains.push(token.to_string());
    }
    Ok(ChainGroup { chains })
}

/// Parse raw chain-group specifications, one group per input string,
/// preserving input order.
pub fn parse_chain_groups<S: AsRef<str>>(specs: &[S]) -> Result<Vec<ChainGroup>, ChainSpecError> {
    specs.iter().map(|s| parse_chain_group(s.as_ref())).collect()
}
