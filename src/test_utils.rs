//! Shared test utilities for advcounter
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use std::io::{self, BufRead, Cursor, Read, Seek, SeekFrom};

    /// Five words, fifteen letters
    pub const SAMPLE_TEXT: &str = "This is a good test";

    /// "Thíś íś ṕŕéttӳ fúń." with precomposed accents: 4 words, 15 letters
    pub const UNICODE_TEXT: &str =
        "Th\u{ed}\u{15b} \u{ed}\u{15b} \u{1e55}\u{155}\u{e9}tt\u{4f3} f\u{fa}\u{144}.\n ";

    /// Helper to build an in-memory source from text
    pub fn source(text: &str) -> Cursor<Vec<u8>> {
        Cursor::new(text.as_bytes().to_vec())
    }

    /// In-memory source that counts how many times it was rewound
    ///
    /// Every scan starts with a rewind, so this is the number of scans.
    pub struct CountingSource {
        inner: Cursor<Vec<u8>>,
        pub rewinds: usize,
    }

    impl CountingSource {
        pub fn new(text: &str) -> Self {
            CountingSource {
                inner: source(text),
                rewinds: 0,
            }
        }

        /// Move the cursor as if a caller had partially read the source
        pub fn advance(&mut self, bytes: u64) {
            self.inner.set_position(bytes);
        }
    }

    impl Read for CountingSource {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.inner.read(buf)
        }
    }

    impl BufRead for CountingSource {
        fn fill_buf(&mut self) -> io::Result<&[u8]> {
            self.inner.fill_buf()
        }

        fn consume(&mut self, amt: usize) {
            self.inner.consume(amt)
        }
    }

    impl Seek for CountingSource {
        fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
            if pos == SeekFrom::Start(0) {
                self.rewinds += 1;
            }
            self.inner.seek(pos)
        }
    }
}
