use std::borrow::Cow;
use std::fs::File;
use std::io;
use std::path::Path;

/// Random-access byte provider backing a parse
///
/// Sources are read by absolute offset, so a parser can rewind to any earlier
/// cursor without the source keeping track of a read position.
pub trait Source {
    /// Read up to `len` bytes starting at `offset`
    ///
    /// Returns fewer than `len` bytes only when the end of the source is reached.
    /// An empty result means `offset` is at or past the end of the source.
    fn read_at(&self, offset: usize, len: usize) -> io::Result<Cow<'_, [u8]>>;
}

impl Source for [u8] {
    fn read_at(&self, offset: usize, len: usize) -> io::Result<Cow<'_, [u8]>> {
        let start = offset.min(self.len());
        let end = offset.saturating_add(len).min(self.len());
        Ok(Cow::Borrowed(&self[start..end]))
    }
}

impl Source for Vec<u8> {
    fn read_at(&self, offset: usize, len: usize) -> io::Result<Cow<'_, [u8]>> {
        self.as_slice().read_at(offset, len)
    }
}

/// A file opened for positioned reads
///
/// The handle is closed when the `FileSource` is dropped.
#[derive(Debug)]
pub struct FileSource {
    file: File,
}

impl FileSource {
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        Ok(Self {
            file: File::open(path)?,
        })
    }

    pub fn from_file(file: File) -> Self {
        Self { file }
    }
}

impl Source for FileSource {
    fn read_at(&self, offset: usize, len: usize) -> io::Result<Cow<'_, [u8]>> {
        let mut buf = vec![0; len];
        let mut filled = 0;

        while filled < len {
            match read_file_at(&self.file, &mut buf[filled..], (offset + filled) as u64) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }

        buf.truncate(filled);
        Ok(Cow::Owned(buf))
    }
}

#[cfg(unix)]
fn read_file_at(file: &File, buf: &mut [u8], offset: u64) -> io::Result<usize> {
    std::os::unix::fs::FileExt::read_at(file, buf, offset)
}

#[cfg(windows)]
fn read_file_at(file: &File, buf: &mut [u8], offset: u64) -> io::Result<usize> {
    std::os::windows::fs::FileExt::seek_read(file, buf, offset)
}
