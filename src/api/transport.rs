// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Line-delimited JSON transport
//!
//! One request object per input line, one response envelope per output line.
//! Blank lines are skipped; malformed lines get a failure envelope.

use std::io::{self, BufRead, Write};

use super::protocol::{failure, Request};
use super::service::PartScout;
use crate::error::{Result, ScoutError};

/// Serve requests from `reader` until EOF. Returns the number of responses written.
///
/// A line that is not valid UTF-8 gets a failure envelope like any other
/// malformed line; only read and write errors end the loop.
pub fn serve<R: BufRead, W: Write>(scout: &PartScout, mut reader: R, mut writer: W) -> Result<usize> {
    tracing::info!("serving line-delimited requests");
    let mut handled = 0;
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let response = match std::str::from_utf8(&buf) {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => match serde_json::from_str::<Request>(line) {
                Ok(request) => scout.handle_request(request),
                Err(e) => {
                    tracing::warn!("malformed request line: {}", e);
                    failure(&ScoutError::InvalidInput(format!("malformed request: {}", e)))
                }
            },
            Err(e) => {
                tracing::warn!(bytes = buf.len(), "request line is not UTF-8: {}", e);
                failure(&ScoutError::InvalidInput(format!("malformed request: {}", e)))
            }
        };

        writeln!(writer, "{}", serde_json::to_string(&response)?)?;
        writer.flush()?;
        handled += 1;
    }

    tracing::info!(handled, "input closed");
    Ok(handled)
}

/// Serve on stdin/stdout
pub fn serve_stdio(scout: &PartScout) -> Result<usize> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    serve(scout, stdin.lock(), stdout.lock())
}
