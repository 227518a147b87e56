use std::fmt::Write;
use std::fs;
use std::io::{self, Read};

use crate::error::Result;

/// Read input from a file or stdin
///
/// If `file` is `Some`, reads from the specified file path.
/// If `file` is `None`, reads from stdin.
pub(crate) fn read_input(file: Option<&str>) -> Result<Vec<u8>> {
    match file {
        Some(path) => Ok(fs::read(path)?),
        None => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Returns `arg` when given, otherwise the whole of stdin.
pub(crate) fn read_deckstring(arg: Option<&str>) -> Result<String> {
    match arg {
        Some(s) => Ok(s.to_string()),
        None => Ok(String::from_utf8(read_input(None)?)?),
    }
}

/// Format binary data as hexadecimal dump
///
/// 16 bytes per line with an extra gap after the eighth, offset on the left,
/// printable ASCII on the right.
pub(crate) fn format_hex_dump(data: &[u8]) -> String {
    const BYTES_PER_LINE: usize = 16;

    data.chunks(BYTES_PER_LINE)
        .enumerate()
        .fold(String::new(), |mut out, (line, chunk)| {
            let hex = (0..BYTES_PER_LINE)
                .map(|i| match chunk.get(i) {
                    Some(b) if i == 7 => format!("{:02x}  ", b),
                    Some(b) => format!("{:02x} ", b),
                    None if i == 7 => "    ".to_string(),
                    None => "   ".to_string(),
                })
                .collect::<String>();
            let ascii = chunk
                .iter()
                .map(|&b| {
                    if b.is_ascii_graphic() || b == b' ' {
                        b as char
                    } else {
                        '.'
                    }
                })
                .collect::<String>();
            // String as fmt::Write cannot fail
            let _ = writeln!(out, "{:08x}  {} |{}|", line * BYTES_PER_LINE, hex, ascii);
            out
        })
}
