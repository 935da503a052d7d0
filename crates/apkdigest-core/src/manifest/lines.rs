//! Manifest line splitting.
//!
//! Manifest lines end in `\r\n`, `\n` or a lone `\r`. Bytes that are not valid
//! UTF-8 are replaced rather than failing the read, so only real stream errors
//! surface as `Err`.

use std::io::{self, BufRead};

/// Iterator over the lines of a manifest stream, terminators stripped.
#[derive(Debug)]
pub struct ManifestLines<R> {
    reader: R,
    done: bool,
}

/// Split `reader` into manifest lines.
pub fn manifest_lines<R: BufRead>(reader: R) -> ManifestLines<R> {
    ManifestLines {
        reader,
        done: false,
    }
}

impl<R: BufRead> Iterator for ManifestLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match read_raw_line(&mut self.reader) {
            Ok(Some(bytes)) => Some(Ok(String::from_utf8_lossy(&bytes).into_owned())),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Read one line's bytes; `None` at end of stream with nothing pending.
fn read_raw_line<R: BufRead>(reader: &mut R) -> io::Result<Option<Vec<u8>>> {
    let mut line = Vec::new();
    loop {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if buf.is_empty() {
            return Ok(if line.is_empty() { None } else { Some(line) });
        }
        match buf.iter().position(|&b| b == b'\n' || b == b'\r') {
            Some(i) => {
                let terminator = buf[i];
                line.extend_from_slice(&buf[..i]);
                reader.consume(i + 1);
                if terminator == b'\r' {
                    skip_lf(reader)?;
                }
                return Ok(Some(line));
            }
            None => {
                let n = buf.len();
                line.extend_from_slice(buf);
                reader.consume(n);
            }
        }
    }
}

/// Consume a `\n` directly following a `\r`, if there is one.
fn skip_lf<R: BufRead>(reader: &mut R) -> io::Result<()> {
    loop {
        match reader.fill_buf() {
            Ok(buf) => {
                if buf.first() == Some(&b'\n') {
                    reader.consume(1);
                }
                return Ok(());
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}
