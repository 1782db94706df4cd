use crate::{cursor::ByteView, Error};

/// Byte position of the entry array offset within the table header. The
/// stored offset is measured from this field, not from the table start.
const ENTRIES_OFFSET_FIELD: usize = 0x8;

/// A single shader variable descriptor: a name and three opaque attributes
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UniformEntry<'a> {
    pub name: &'a str,
    pub unk4: u32,
    pub unk8: u32,
    pub unk_c: u32,
    start: usize,
}

impl<'a> UniformEntry<'a> {
    /// Fixed record size; entries are laid out back to back at this stride
    pub const SIZE: usize = 0x10;

    pub(crate) fn from_view(view: &ByteView<'a>, start: usize) -> Result<UniformEntry<'a>, Error> {
        let rel_name = view.read_i32(start)?;
        let unk4 = view.read_u32(start + 0x4)?;
        let unk8 = view.read_u32(start + 0x8)?;
        let unk_c = view.read_u32(start + 0xC)?;

        // the name offset is anchored at the start of this entry
        let name_offset = view.resolve(start, rel_name)?;
        let name = view.read_cstr(name_offset)?;

        Ok(UniformEntry {
            name,
            unk4,
            unk8,
            unk_c,
            start,
        })
    }

    /// Absolute offset this entry was decoded from
    #[inline]
    pub fn offset(&self) -> usize {
        self.start
    }
}

/// The per-shader table of uniform variable descriptors
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UniformTable<'a> {
    pub unk0: u32,
    pub unk4: u32,
    pub unk10: u32,
    start: usize,
    entries: Vec<UniformEntry<'a>>,
}

impl<'a> UniformTable<'a> {
    /// Fixed table header size
    pub const HEADER_SIZE: usize = 0x14;

    pub(crate) fn from_view(view: &ByteView<'a>, start: usize) -> Result<UniformTable<'a>, Error> {
        let unk0 = view.read_u32(start)?;
        let unk4 = view.read_u32(start + 0x4)?;
        let rel_entries = view.read_i32(start + ENTRIES_OFFSET_FIELD)?;
        let count = view.read_u32(start + 0xC)?;
        let unk10 = view.read_u32(start + 0x10)?;

        let base = view.resolve(start + ENTRIES_OFFSET_FIELD, rel_entries)?;

        // strict: the first bad entry aborts the whole table
        let mut entries = Vec::new();
        for i in 0..count as usize {
            entries.push(UniformEntry::from_view(view, base + i * UniformEntry::SIZE)?);
        }

        Ok(UniformTable {
            unk0,
            unk4,
            unk10,
            start,
            entries,
        })
    }

    /// Absolute offset the table header was decoded from
    #[inline]
    pub fn offset(&self) -> usize {
        self.start
    }

    /// The decoded entries, in file order
    #[inline]
    pub fn entries(&self) -> &[UniformEntry<'a>] {
        &self.entries
    }

    /// Number of uniforms in the table
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
