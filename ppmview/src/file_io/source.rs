//! Whole-file byte access for the decoder

use std::fs::File;
use std::io::{self, Read};

#[cfg(feature = "mmap")]
use memmap2::Mmap;

/// Run `f` over the full contents of `file`
///
/// With the `mmap` feature a non-empty regular file is mapped read-only
/// instead of copied. Anything else (pipes, FIFOs, `/proc` entries that
/// report a zero length) is read to the end.
#[cfg(feature = "mmap")]
pub(crate) fn with_file_bytes<T>(file: &File, f: impl FnOnce(&[u8]) -> T) -> io::Result<T> {
    let metadata = file.metadata()?;
    if !metadata.is_file() || metadata.len() == 0 {
        return read_all(file, f);
    }

    // SAFETY: the mapping is read-only and dropped before this function
    // returns; the decoder copies the payload out of it
    let map = unsafe { Mmap::map(file)? };
    Ok(f(&map))
}

#[cfg(not(feature = "mmap"))]
pub(crate) fn with_file_bytes<T>(file: &File, f: impl FnOnce(&[u8]) -> T) -> io::Result<T> {
    read_all(file, f)
}

fn read_all<T>(mut file: &File, f: impl FnOnce(&[u8]) -> T) -> io::Result<T> {
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    Ok(f(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file() {
        let file = tempfile::tempfile().unwrap();
        assert_eq!(with_file_bytes(&file, |b| b.len()).unwrap(), 0);
    }

    #[test]
    fn test_regular_file() {
        let mut file = tempfile::tempfile().unwrap();
        std::io::Write::write_all(&mut file, b"P6 1 1 255\n\x01\x02\x03").unwrap();
        std::io::Seek::rewind(&mut file).unwrap();

        let bytes = with_file_bytes(&file, |b| b.to_vec()).unwrap();
        assert_eq!(bytes, b"P6 1 1 255\n\x01\x02\x03");
    }

    #[test]
    #[cfg(target_os = "linux")]
    fn test_zero_length_proc_entry_is_read() {
        let file = File::open("/proc/self/stat").unwrap();
        assert_eq!(file.metadata().unwrap().len(), 0);
        assert!(with_file_bytes(&file, |b| b.len()).unwrap() > 0);
    }
}
