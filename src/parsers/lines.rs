use std::io::{self, BufRead};

/// Iterator over the logical lines of a history file as raw bytes
///
/// Each item is `(line_number, bytes)` where `line_number` is the 1-based number
/// of the first physical line. Only the final `\n` is removed; a `\r` before it
/// stays in the bytes so CRLF files are written back unchanged. A physical line
/// ending in `\` continues on the next one, and the joined lines come out as a
/// single item with their embedded `\n` kept. Bytes are not decoded here, so one
/// undecodable line cannot stop the read.
pub struct HistoryLines<R> {
    reader: R,
    line_number: usize,
}

impl<R: BufRead> HistoryLines<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, line_number: 0 }
    }
}

impl<R: BufRead> Iterator for HistoryLines<R> {
    type Item = io::Result<(usize, Vec<u8>)>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.line_number + 1;
        let mut buf = Vec::new();

        loop {
            match self.reader.read_until(b'\n', &mut buf) {
                Ok(0) if buf.is_empty() => return None,
                // A trailing `\` on the last line has nothing left to join
                Ok(0) => break,
                Ok(_) => {
                    self.line_number += 1;
                    if !(buf.ends_with(b"\n") && is_continued(&buf[..buf.len() - 1])) {
                        break;
                    }
                }
                Err(e) => return Some(Err(e)),
            }
        }

        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        Some(Ok((start, buf)))
    }
}

fn is_continued(line: &[u8]) -> bool {
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    line.last() == Some(&b'\\')
}
