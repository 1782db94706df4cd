use crate::{
    cursor::ByteView,
    shader::{ShaderHeader, ShaderKind},
    Error, ErrorKind, FLUX_MAGIC,
};

/// A pair of exactly one vertex and one pixel shader.
///
/// Unlike every offset below this level, the two shader offsets are
/// measured from the start of the file, not from the field storing them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SecondaryHeader<'a> {
    pub unk0: u32,
    pub vertex_offset: u32,
    pub pixel_offset: u32,
    start: usize,
    vertex: ShaderHeader<'a>,
    pixel: ShaderHeader<'a>,
}

impl<'a> SecondaryHeader<'a> {
    /// Fixed record size; secondary headers follow the file header at this
    /// stride
    pub const SIZE: usize = 0xC;

    pub(crate) fn from_view(
        view: &ByteView<'a>,
        start: usize,
    ) -> Result<SecondaryHeader<'a>, Error> {
        let unk0 = view.read_u32(start)?;
        let vertex_offset = view.read_u32(start + 0x4)?;
        let pixel_offset = view.read_u32(start + 0x8)?;

        let vertex = ShaderHeader::from_view(view, vertex_offset as usize)?;
        let pixel = ShaderHeader::from_view(view, pixel_offset as usize)?;

        Ok(SecondaryHeader {
            unk0,
            vertex_offset,
            pixel_offset,
            start,
            vertex,
            pixel,
        })
    }

    /// Absolute offset this record was decoded from
    #[inline]
    pub fn offset(&self) -> usize {
        self.start
    }

    /// The shader addressed by the first slot
    #[inline]
    pub fn vertex(&self) -> &ShaderHeader<'a> {
        &self.vertex
    }

    /// The shader addressed by the second slot
    #[inline]
    pub fn pixel(&self) -> &ShaderHeader<'a> {
        &self.pixel
    }
}

/// A fully decoded FLUX shader bundle.
///
/// Decoding is a single strict top-down pass over the input: the file
/// header drives each secondary header, which drives its two shader
/// headers, which drive one GXP blob and one uniform table each. The first
/// failure anywhere in the tree aborts the parse and surfaces unchanged;
/// there is no partial result. The decoded tree borrows from the input
/// buffer and never copies payload or name bytes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FileHeader<'a> {
    pub unk4: u32,
    name: &'a str,
    secondary: Vec<SecondaryHeader<'a>>,
}

impl<'a> FileHeader<'a> {
    /// Fixed header size; the secondary header array starts here
    pub const SIZE: usize = 0x4C;

    /// Fixed width of the embedded name field
    const NAME_LEN: usize = 0x40;

    /// Decode a bundle from its raw bytes
    pub fn from_slice(data: &'a [u8]) -> Result<FileHeader<'a>, Error> {
        let view = ByteView::new(data);

        let magic = view.read_array::<4>(0)?;
        if magic != FLUX_MAGIC {
            return Err(Error::new(ErrorKind::InvalidMagic {
                offset: 0,
                expected: &FLUX_MAGIC,
                found: magic,
            }));
        }

        let unk4 = view.read_u32(0x4)?;
        let count = view.read_u32(0x8)?;

        // unlike uniform names, the bundle name tolerates a missing
        // terminator: with no NUL in its 64 bytes the whole field is the name
        let raw_name = view.get(0xC, Self::NAME_LEN)?;
        let end = raw_name
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(Self::NAME_LEN);
        let name = std::str::from_utf8(&raw_name[..end])
            .map_err(|_| Error::new(ErrorKind::InvalidEncoding { offset: 0xC }))?;

        let mut secondary = Vec::new();
        for i in 0..count as usize {
            secondary.push(SecondaryHeader::from_view(
                &view,
                Self::SIZE + i * SecondaryHeader::SIZE,
            )?);
        }

        Ok(FileHeader {
            unk4,
            name,
            secondary,
        })
    }

    /// The bundle name, taken from the fixed 64 byte field up to its first
    /// NUL
    #[inline]
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// The decoded secondary headers, in file order
    #[inline]
    pub fn secondary_headers(&self) -> &[SecondaryHeader<'a>] {
        &self.secondary
    }

    /// Iterate over every shader in the bundle in file order, paired with
    /// the index of its secondary header and its role within it
    pub fn shaders<'s>(
        &'s self,
    ) -> impl Iterator<Item = (usize, ShaderKind, &'s ShaderHeader<'a>)> + 's {
        self.secondary.iter().enumerate().flat_map(|(i, sec)| {
            vec![
                (i, ShaderKind::Vertex, sec.vertex()),
                (i, ShaderKind::Pixel, sec.pixel()),
            ]
        })
    }
}
