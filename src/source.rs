//! Text sources
//!
//! Opens the file (or stdin) that the statistics engines read from.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor, Read, Seek};
use std::path::Path;

use crate::error::CounterError;

/// Path that selects stdin instead of a file
pub const STDIN_PATH: &str = "-";

/// A UTF-8 character stream, readable line by line and rewindable
///
/// Engines borrow a source for the duration of one call and rewind it
/// themselves before scanning.
pub trait TextSource: BufRead + Seek {}

impl<T: BufRead + Seek> TextSource for T {}

/// Open a file as a text source positioned at offset 0
///
/// # Returns
/// * `Ok(BufReader<File>)` - The opened file
/// * `Err(CounterError::FileNotFound)` - If the path does not exist
/// * `Err(CounterError::Io)` - For any other IO error
pub fn open_file(path: &Path) -> Result<BufReader<File>, CounterError> {
    match File::open(path) {
        Ok(file) => {
            log::debug!("Opened {:?}", path);
            Ok(BufReader::new(file))
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(CounterError::FileNotFound(path.to_path_buf()))
        }
        Err(e) => Err(e.into()),
    }
}

/// Open a file, or read stdin when the path is `-`
///
/// Stdin cannot seek, so it is read fully into memory first.
pub fn open_input(path: &Path) -> Result<Box<dyn TextSource>, CounterError> {
    if path == Path::new(STDIN_PATH) {
        let mut buffer = Vec::new();
        io::stdin().lock().read_to_end(&mut buffer)?;
        log::debug!("Read {} bytes from stdin", buffer.len());
        return Ok(Box::new(Cursor::new(buffer)));
    }
    Ok(Box::new(open_file(path)?))
}
