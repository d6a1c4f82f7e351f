use crate::utils::errors::{LispError, LispResult};

/// Helper function for writing formatted strings to a buffer.
/// Used by the tree printer.
pub fn write_fragment(buf: &mut String, args: std::fmt::Arguments) -> LispResult<()> {
    use std::fmt::Write;
    buf.write_fmt(args)
        .map_err(|_| LispError::IoError(std::io::Error::new(std::io::ErrorKind::Other, "fmt error")))
}
