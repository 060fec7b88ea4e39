use std::cell::RefCell;
use std::cmp::min;
use std::io::{Error, ErrorKind, Read, Write};
use std::ops::DerefMut;
use std::rc::Rc;

/// Reader that hands out its chunks one read at a time, then reports EOF (or WouldBlock).
pub struct MockReader {
    pub return_would_block_when_empty: bool,
    pub data: Vec<Vec<u8>>,
}

impl MockReader {
    pub fn from_strs(data: Vec<&str>) -> MockReader {
        MockReader::from_bytes(data.into_iter().map(str::as_bytes).collect())
    }

    pub fn from_bytes(data: Vec<&[u8]>) -> MockReader {
        MockReader { data: data.into_iter().map(<[u8]>::to_vec).collect(), return_would_block_when_empty: false }
    }
}

impl Read for MockReader {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let next = match self.data.first_mut() {
            Some(next) => next,
            None if self.return_would_block_when_empty => return Err(Error::from(ErrorKind::WouldBlock)),
            None => return Ok(0)
        };

        let amount = min(buf.len(), next.len());
        buf[..amount].copy_from_slice(&next[..amount]);
        next.drain(..amount);

        if next.is_empty() {
            self.data.remove(0);
        }

        Ok(amount)
    }
}

/// Reader that returns its finite data, then repeats a sequence forever.
pub struct EndlessMockReader {
    finite_reader: MockReader,
    sequence: Vec<u8>,
    current: usize,
}

impl EndlessMockReader {
    pub fn from_strs(finite_data: Vec<&str>, sequence: &str) -> EndlessMockReader {
        EndlessMockReader { finite_reader: MockReader::from_strs(finite_data), sequence: sequence.as_bytes().to_vec(), current: 0 }
    }
}

impl Read for EndlessMockReader {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let size = self.finite_reader.read(buf)?;
        if size > 0 {
            return Ok(size);
        }
        let start = self.current;
        let range = min(self.sequence.len() - start, buf.len());
        buf[..range].copy_from_slice(&self.sequence[start..(start + range)]);
        self.current = (start + range) % self.sequence.len();
        Ok(range)
    }
}

/// Writer that records every write call, and moves recorded writes to `flushed` on flush.
pub struct MockWriter {
    pub written: Rc<RefCell<Vec<Vec<u8>>>>,
    pub flushed: Rc<RefCell<Vec<Vec<u8>>>>,
}

impl MockWriter {
    pub fn new() -> MockWriter {
        MockWriter { written: Rc::new(RefCell::new(vec![])), flushed: Rc::new(RefCell::new(vec![])) }
    }
}

impl Write for MockWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.written.borrow_mut().push(Vec::from(buf));
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flushed.borrow_mut().append(self.written.borrow_mut().deref_mut());
        Ok(())
    }
}

/// A stream with separate reading and writing halves.
pub struct MockStream<R, W> {
    pub reader: R,
    pub writer: W,
}

impl<R, W> MockStream<R, W> {
    pub fn new(reader: R, writer: W) -> MockStream<R, W> {
        MockStream { reader, writer }
    }
}

impl<R: Read, W> Read for MockStream<R, W> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.reader.read(buf)
    }
}

impl<R, W: Write> Write for MockStream<R, W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use crate::util::mock::{EndlessMockReader, MockReader};

    fn test_read(reader: &mut impl Read, expected: &str, buf_size: usize) {
        let mut buf = vec![0u8; buf_size];
        let len = reader.read(&mut buf).unwrap();
        assert_eq!(expected, String::from_utf8_lossy(&buf[..len]));
    }

    #[test]
    fn mock_reader_chunks_then_eof() {
        let mut reader = MockReader::from_strs(vec!["hello", "world"]);

        test_read(&mut reader, "hel", 3);
        test_read(&mut reader, "lo", 10);
        test_read(&mut reader, "world", 10);
        test_read(&mut reader, "", 10);
    }

    #[test]
    fn endless_mock_reader() {
        let mut reader = EndlessMockReader::from_strs(vec!["hello", "ok bye"], "blah");

        test_read(&mut reader, "hello", 5);
        test_read(&mut reader, "ok b", 4);
        test_read(&mut reader, "ye", 10);
        test_read(&mut reader, "blah", 10);
        test_read(&mut reader, "bla", 3);
        test_read(&mut reader, "h", 3);

        for _ in 0..100 {
            test_read(&mut reader, "blah", 10);
        }
    }
}
