use crate::{Error, ErrorKind};

/// Bounds checked read access over an immutable byte buffer.
///
/// Every structure in a bundle is decoded through this view; nothing reads
/// the underlying slice directly. All multi-byte reads are little-endian,
/// and offset arithmetic that would wrap fails instead of wrapping.
#[derive(Debug, Clone, Copy)]
pub struct ByteView<'a> {
    data: &'a [u8],
}

impl<'a> ByteView<'a> {
    #[inline]
    pub fn new(data: &'a [u8]) -> ByteView<'a> {
        ByteView { data }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Return `len` bytes starting at `offset`
    #[inline]
    pub fn get(&self, offset: usize, len: usize) -> Result<&'a [u8], Error> {
        let end = offset
            .checked_add(len)
            .filter(|&end| end <= self.data.len())
            .ok_or_else(|| Error::out_of_bounds(offset, len, self.data.len()))?;
        Ok(&self.data[offset..end])
    }

    #[inline]
    pub fn read_array<const N: usize>(&self, offset: usize) -> Result<[u8; N], Error> {
        let bytes = self.get(offset, N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    #[inline]
    pub fn read_u32(&self, offset: usize) -> Result<u32, Error> {
        self.read_array::<4>(offset).map(u32::from_le_bytes)
    }

    #[inline]
    pub fn read_i32(&self, offset: usize) -> Result<i32, Error> {
        self.read_array::<4>(offset).map(i32::from_le_bytes)
    }

    /// Decode the NUL terminated UTF-8 string starting at `offset`.
    ///
    /// Fails when no NUL occurs before the end of the buffer or when the
    /// bytes before it are not valid UTF-8.
    pub fn read_cstr(&self, offset: usize) -> Result<&'a str, Error> {
        let rest = self.get(offset, self.data.len().saturating_sub(offset))?;
        let nul = rest
            .iter()
            .position(|&b| b == 0)
            .ok_or_else(|| Error::out_of_bounds(offset, rest.len() + 1, self.data.len()))?;
        std::str::from_utf8(&rest[..nul])
            .map_err(|_| Error::new(ErrorKind::InvalidEncoding { offset }))
    }

    /// Resolve a stored relative offset against the address of the field
    /// holding it.
    ///
    /// Stored offsets are signed and may point backwards; a result outside
    /// the buffer fails rather than wrapping.
    #[inline]
    pub fn resolve(&self, anchor: usize, rel: i32) -> Result<usize, Error> {
        let target = anchor as i64 + i64::from(rel);
        if target < 0 || target > self.data.len() as i64 {
            return Err(Error::out_of_bounds(anchor, 0, self.data.len()));
        }
        Ok(target as usize)
    }
}
