use crate::{cursor::ByteView, shader::ShaderKind, Error, ErrorKind};

/// Signature expected at the start of every embedded shader program
pub const GXP_MAGIC: &[u8] = b"GXP";

/// An embedded GXM shader program and the small header wrapping it.
///
/// The header occupies the first 0x20 bytes of the blob; everything after
/// it, up to the total blob size declared by the parent
/// [`ShaderHeader`](crate::ShaderHeader), is the opaque program payload.
/// The payload is never interpreted, only exposed for extraction.
///
/// Most header fields are dummies in the file that the GXM runtime
/// overwrites after load; only two survive as meaningful values.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GxpBlob<'a> {
    pub unk4: u32,
    pub unk14: u32,
    start: usize,
    payload: &'a [u8],
}

impl<'a> GxpBlob<'a> {
    /// Size of the blob header preceding the program bytes
    pub const HEADER_SIZE: usize = 0x20;

    pub(crate) fn from_view(
        view: &ByteView<'a>,
        start: usize,
        total_size: usize,
    ) -> Result<GxpBlob<'a>, Error> {
        // the first field restates the header size; any other value means a
        // format revision this decoder does not understand
        let sub_offset = view.read_i32(start)?;
        if sub_offset != Self::HEADER_SIZE as i32 {
            return Err(Error::new(ErrorKind::InvalidFormat {
                offset: start,
                expected: Self::HEADER_SIZE as u32,
                found: sub_offset as u32,
            }));
        }

        let unk4 = view.read_u32(start + 0x4)?;
        let unk14 = view.read_u32(start + 0x14)?;

        if total_size < Self::HEADER_SIZE {
            return Err(Error::new(ErrorKind::InvalidFormat {
                offset: start,
                expected: Self::HEADER_SIZE as u32,
                found: total_size as u32,
            }));
        }

        let payload_offset = start + Self::HEADER_SIZE;
        let declared = total_size - Self::HEADER_SIZE;
        if payload_offset
            .checked_add(declared)
            .map_or(true, |end| end > view.len())
        {
            return Err(Error::new(ErrorKind::TruncatedPayload {
                offset: payload_offset,
                declared,
                available: view.len().saturating_sub(payload_offset),
            }));
        }
        let payload = view.get(payload_offset, declared)?;

        if payload.len() < GXP_MAGIC.len() || &payload[..GXP_MAGIC.len()] != GXP_MAGIC {
            let mut found = [0u8; 4];
            for (dst, src) in found.iter_mut().zip(payload.iter()) {
                *dst = *src;
            }
            return Err(Error::new(ErrorKind::InvalidMagic {
                offset: payload_offset,
                expected: GXP_MAGIC,
                found,
            }));
        }

        Ok(GxpBlob {
            unk4,
            unk14,
            start,
            payload,
        })
    }

    /// Absolute offset of the blob header within the input buffer
    #[inline]
    pub fn offset(&self) -> usize {
        self.start
    }

    /// Absolute offset of the program bytes within the input buffer
    #[inline]
    pub fn payload_offset(&self) -> usize {
        self.start + Self::HEADER_SIZE
    }

    /// The raw program bytes, starting with the `GXP` signature
    #[inline]
    pub fn payload(&self) -> &'a [u8] {
        self.payload
    }

    /// Deterministic file name for this program when extracted to disk,
    /// derived from the secondary header index, the shader role, and the
    /// absolute payload offset
    pub fn extract_file_name(&self, index: usize, kind: ShaderKind) -> String {
        format!(
            "shader_{}_{}_GXP0x{:X}.gxp",
            index,
            kind.code(),
            self.payload_offset()
        )
    }
}
