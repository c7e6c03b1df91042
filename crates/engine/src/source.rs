use crate::error::{EngineError, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

const READ_BUFFER: usize = 256 * 1024;

/// Open `path` for buffered sequential reading.
pub fn open(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|e| EngineError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(BufReader::with_capacity(READ_BUFFER, file))
}

/// Read the next line into `buf` without its `\n` or `\r\n` terminator.
///
/// Returns `false` once the reader is exhausted. A final line without a
/// terminator is still returned.
pub fn next_line<R: BufRead>(reader: &mut R, buf: &mut String) -> io::Result<bool> {
    buf.clear();
    if reader.read_line(buf)? == 0 {
        return Ok(false);
    }
    if buf.ends_with('\n') {
        buf.pop();
        if buf.ends_with('\r') {
            buf.pop();
        }
    }
    Ok(true)
}
