//! Reader for the ketama server list text format.
//!
//! ```text
//! # address:port   weight
//! 10.0.1.1:11211   600
//! 10.0.1.2:11211   300
//! ```
//!
//! Blank lines and lines starting with `#` (after optional whitespace) are
//! skipped. Any other line must hold exactly one `ADDRESS:PORT WEIGHT` entry,
//! otherwise the whole list is rejected.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::error::{Error, ParseErrorKind, Result};
use crate::server::{Server, ServerList};

const MAX_ADDR_LEN: usize = 15;
const MAX_PORT_LEN: usize = 5;

impl FromStr for ServerList {
    type Err = Error;

    fn from_str(input: &str) -> Result<ServerList> {
        let mut servers = ServerList::new();

        for (n, line) in input.lines().enumerate() {
            if is_comment(line) {
                continue;
            }
            let server = parse_line(line).map_err(|kind| Error::Parse { line: n + 1, kind })?;
            trace!(line = n + 1, addr = %server.addr, weight = server.weight, "parsed server");
            servers.append(server)?;
        }

        debug!(
            servers = servers.len(),
            total_weight = %servers.total_weight(),
            "loaded server list"
        );
        Ok(servers)
    }
}

impl ServerList {
    /// Read a server list from the file at `path`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<ServerList> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading server list");
        fs::read_to_string(path)?.parse()
    }
}

fn is_comment(line: &str) -> bool {
    let line = line.trim_start();
    line.is_empty() || line.starts_with('#')
}

fn parse_line(line: &str) -> std::result::Result<Server, ParseErrorKind> {
    let line = line.trim_start();

    let colon = line.find(':').ok_or(ParseErrorKind::MissingPort)?;
    let addr = &line[..colon];
    if addr.contains(char::is_whitespace) {
        return Err(ParseErrorKind::MissingPort);
    }
    if addr.is_empty() || !addr.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return Err(ParseErrorKind::InvalidAddress);
    }
    if addr.len() > MAX_ADDR_LEN {
        return Err(ParseErrorKind::AddressTooLong);
    }

    let rest = &line[colon + 1..];
    let port_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
    let port = &rest[..port_end];
    if port.is_empty() || !port.chars().all(|c| c.is_ascii_digit()) {
        return Err(ParseErrorKind::InvalidPort);
    }
    if port.len() > MAX_PORT_LEN {
        return Err(ParseErrorKind::PortTooLong);
    }

    let rest = rest[port_end..].trim_start();
    if rest.is_empty() {
        return Err(ParseErrorKind::MissingWeight);
    }
    let weight_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let (weight, tail) = rest.split_at(weight_end);
    if weight.is_empty() || tail.starts_with(|c: char| !c.is_whitespace()) {
        return Err(ParseErrorKind::InvalidWeight);
    }
    if !tail.trim().is_empty() {
        return Err(ParseErrorKind::TrailingCharacters);
    }
    // only digits left, so overflow is the only way this can fail
    let weight = weight
        .parse::<u64>()
        .map_err(|_| ParseErrorKind::WeightOverflow)?;

    Ok(Server::new(&line[..colon + 1 + port_end], weight))
}
