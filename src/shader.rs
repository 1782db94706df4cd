use crate::{
    cursor::ByteView, gxp::GxpBlob, uniform::UniformTable, Error, ErrorKind, FLUX_MAGIC,
};

/// Byte position of the GXP blob offset within a shader header. The stored
/// offset is measured from this field, not from the header start.
const GXP_OFFSET_FIELD: usize = 0xC;

/// Byte position of the uniform table offset within a shader header,
/// anchoring the second offset chain the same way.
const UNIFORM_OFFSET_FIELD: usize = 0x14;

/// Whether a shader was reached through the vertex or pixel slot of its
/// secondary header.
///
/// The file stores nothing for this; the role comes from construction order
/// alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ShaderKind {
    Vertex,
    Pixel,
}

impl ShaderKind {
    /// Short code used in extracted file names
    pub fn code(&self) -> &'static str {
        match self {
            ShaderKind::Vertex => "vp",
            ShaderKind::Pixel => "fp",
        }
    }
}

/// A single shader program description.
///
/// Ties together one [`GxpBlob`] and one [`UniformTable`] through two
/// independent relative offset chains, each anchored at the byte position
/// of the field storing it rather than at the header start.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ShaderHeader<'a> {
    pub unk4: u32,
    pub unk8: u32,
    /// Declared size of the GXP blob: header bytes plus program bytes
    pub gxp_blob_size: u32,
    pub unk18: u32,
    pub unk1c: u32,
    start: usize,
    gxp: GxpBlob<'a>,
    uniforms: UniformTable<'a>,
}

impl<'a> ShaderHeader<'a> {
    /// Fixed header size
    pub const SIZE: usize = 0x20;

    pub(crate) fn from_view(view: &ByteView<'a>, start: usize) -> Result<ShaderHeader<'a>, Error> {
        let magic = view.read_array::<4>(start)?;
        if magic != FLUX_MAGIC {
            return Err(Error::new(ErrorKind::InvalidMagic {
                offset: start,
                expected: &FLUX_MAGIC,
                found: magic,
            }));
        }

        let unk4 = view.read_u32(start + 0x4)?;
        let unk8 = view.read_u32(start + 0x8)?;
        let rel_gxp = view.read_i32(start + GXP_OFFSET_FIELD)?;
        let gxp_blob_size = view.read_u32(start + 0x10)?;
        let rel_uniforms = view.read_i32(start + UNIFORM_OFFSET_FIELD)?;
        let unk18 = view.read_u32(start + 0x18)?;
        let unk1c = view.read_u32(start + 0x1C)?;

        let gxp_start = view.resolve(start + GXP_OFFSET_FIELD, rel_gxp)?;
        let gxp = GxpBlob::from_view(view, gxp_start, gxp_blob_size as usize)?;

        let uniform_start = view.resolve(start + UNIFORM_OFFSET_FIELD, rel_uniforms)?;
        let uniforms = UniformTable::from_view(view, uniform_start)?;

        Ok(ShaderHeader {
            unk4,
            unk8,
            gxp_blob_size,
            unk18,
            unk1c,
            start,
            gxp,
            uniforms,
        })
    }

    /// Absolute offset this header was decoded from
    #[inline]
    pub fn offset(&self) -> usize {
        self.start
    }

    /// The embedded shader program
    #[inline]
    pub fn gxp(&self) -> &GxpBlob<'a> {
        &self.gxp
    }

    /// The uniform metadata attached to this shader
    #[inline]
    pub fn uniforms(&self) -> &UniformTable<'a> {
        &self.uniforms
    }
}
