//! Contact detection through an external all-atom contact executable.
//!
//! The program is invoked as `<executable> <cutoff>` with the structure fed
//! to its standard input as PDB text. Every output line describes one contact
//! as whitespace-separated tokens:
//!
//! ```text
//! <resn> <chain> <resi> <atomn>  <resn> <chain> <resi> <atomn>  <distance>
//! ```
//!
//! The final output line is a summary, not a contact, and is discarded.
//! Contacts are then filtered down to pairs with one chain in each interactor
//! group, in either orientation.

use super::structs::{Contact, ContactAtom};
use super::ContactDetector;
use crate::chains::ChainGroup;
use crate::error::PredictionError;
use pdbtbx::{StrictnessLevel, PDB};
use std::io::BufWriter;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use thiserror::Error;
use tracing::debug;

/// Errors from driving the external contact tool. Never retried.
#[derive(Debug, Error)]
pub enum ExternalToolError {
    /// The executable could not be started.
    #[error("failed to launch contact executable {path}: {source}")]
    Launch {
        /// Path the executable was resolved from.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The structure could not be serialized to the tool's input.
    #[error("failed to write the structure as PDB text to the contact executable")]
    FeedStructure,
    /// Collecting the tool's output failed.
    #[error("i/o error while talking to the contact executable: {0}")]
    Io(#[from] std::io::Error),
    /// The tool exited with a non-zero status.
    #[error("contact executable exited with {status}: {stderr}")]
    Failed {
        /// Exit status of the child process.
        status: std::process::ExitStatus,
        /// Whatever the tool printed on stderr.
        stderr: String,
    },
    /// An output line did not match the expected contact shape.
    #[error("malformed contact line from the external tool: {0:?}")]
    MalformedLine(String),
}

/// Contact detection delegated to an external executable.
pub struct ExternalContacts {
    executable: PathBuf,
}

impl ExternalContacts {
    /// A detector that runs `executable` for the distance search.
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
        }
    }
}

impl ContactDetector for ExternalContacts {
    fn detect(
        &self,
        pdb: &PDB,
        groups: &[ChainGroup; 2],
        cutoff: f64,
    ) -> Result<Vec<Contact>, PredictionError> {
        let mut child = Command::new(&self.executable)
            .arg(cutoff.to_string())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| ExternalToolError::Launch {
                path: self.executable.clone(),
                source,
            })?;

        // Stream the structure and close stdin so the tool can finish.
        if let Some(stdin) = child.stdin.take() {
            pdbtbx::save_pdb_raw(pdb, BufWriter::new(stdin), StrictnessLevel::Loose);
        }

        let output = child.wait_with_output().map_err(ExternalToolError::Io)?;
        if !output.status.success() {
            return Err(ExternalToolError::Failed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            }
            .into());
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let contacts = parse_contact_lines(&stdout, groups)?;
        debug!(
            "External tool reported {} contacts between the groups",
            contacts.len()
        );
        Ok(contacts)
    }
}

/// Parse the tool's stdout into contacts between the two groups.
fn parse_contact_lines(
    output: &str,
    groups: &[ChainGroup; 2],
) -> Result<Vec<Contact>, ExternalToolError> {
    let mut lines: Vec<&str> = output.lines().collect();
    // The last line is the tool's summary, never a contact.
    lines.pop();

    let mut contacts = Vec::new();
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        let contact = parse_contact_line(line)?;
        let (chain_1, chain_2) = (
            contact.ligand.chain.as_str(),
            contact.receptor.chain.as_str(),
        );
        let spans_groups = (groups[0].contains(chain_1) && groups[1].contains(chain_2))
            || (groups[1].contains(chain_1) && groups[0].contains(chain_2));
        if spans_groups {
            contacts.push(contact);
        }
    }
    Ok(contacts)
}

fn parse_contact_line(line: &str) -> Result<Contact, ExternalToolError> {
    let malformed = || ExternalToolError::MalformedLine(line.to_string());
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 9 {
        return Err(malformed());
    }

    let resi_1: isize = tokens[2].parse().map_err(|_| malformed())?;
    let resi_2: isize = tokens[6].parse().map_err(|_| malformed())?;
    let distance: f64 = tokens[8].parse().map_err(|_| malformed())?;

    Ok(Contact {
        ligand: ContactAtom {
            resn: tokens[0].to_string(),
            chain: tokens[1].to_ascii_uppercase(),
            resi: resi_1,
            atomn: tokens[3].to_string(),
        },
        receptor: ContactAtom {
            resn: tokens[4].to_string(),
            chain: tokens[5].to_ascii_uppercase(),
            resi: resi_2,
            atomn: tokens[7].to_string(),
        },
        distance,
    })
}
