use std::io::{Read, Write};

/// A stream that can be read and written.
pub trait Stream: Read + Write {}

impl<T: Read + Write> Stream for T {}
