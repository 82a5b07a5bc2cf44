// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info};
use notary_indexer::{Node, RawLog};

/// Parses one line of a JSON-lines log file. Blank lines are skipped.
fn parse_line(number: usize, line: &str) -> Result<Option<RawLog>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let log = serde_json::from_str(line)
        .with_context(|| format!("Invalid log on line {}", number))?;

    Ok(Some(log))
}

/// Ingests every log of a JSON-lines file in file order.
///
/// Stops at the first line which can not be parsed or indexed. Returns the number of logs which
/// resulted in a record.
pub async fn replay(node: &Node, path: &Path) -> Result<usize> {
    let file = File::open(path)
        .with_context(|| format!("Could not open replay file '{}'", path.display()))?;

    let mut indexed = 0;

    for (index, line) in BufReader::new(file).lines().enumerate() {
        let number = index + 1;
        let line = line.with_context(|| format!("Could not read line {}", number))?;

        let log = match parse_line(number, &line)? {
            Some(log) => log,
            None => continue,
        };

        let entity = node
            .ingest(&log)
            .await
            .with_context(|| format!("Failed indexing log on line {}", number))?;

        if let Some(entity) = entity {
            debug!("Replayed {} {}", entity.kind(), entity.id());
            indexed += 1;
        }
    }

    info!("Replayed {} logs from {}", indexed, path.display());

    Ok(indexed)
}
