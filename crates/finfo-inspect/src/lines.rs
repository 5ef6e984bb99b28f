//! Line counting with binary detection.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use finfo_core::LineCount;

/// Count the lines of a file.
pub fn count_file_lines(path: &Path, sniff_len: usize) -> io::Result<LineCount> {
    let file = File::open(path)?;
    count_lines(file, sniff_len)
}

/// Count `\n`-terminated lines, plus a trailing unterminated one.
///
/// The first `sniff_len` bytes are checked for NUL; if one is found the
/// input is reported as [`LineCount::Binary`] and the rest is not read.
pub fn count_lines<R: Read>(reader: R, sniff_len: usize) -> io::Result<LineCount> {
    let mut reader = BufReader::with_capacity(sniff_len.max(8 * 1024), reader);

    let mut head = Vec::with_capacity(sniff_len);
    reader.by_ref().take(sniff_len as u64).read_to_end(&mut head)?;
    if head.contains(&0) {
        return Ok(LineCount::Binary);
    }

    let mut lines = bytecount::count(&head, b'\n') as u64;
    let mut last_byte = head.last().copied();

    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            break;
        }
        lines += bytecount::count(buf, b'\n') as u64;
        last_byte = buf.last().copied();
        let consumed = buf.len();
        reader.consume(consumed);
    }

    if last_byte.is_some_and(|b| b != b'\n') {
        lines += 1;
    }
    Ok(LineCount::Lines(lines))
}
