/*!

A low level, performance orientated parser for FLUX shader bundles: the
proprietary container that packs multiple GXM shader programs (`GXP`
binaries) together with their uniform metadata, addressing everything
through chains of field-relative byte offsets.

## Features

- ✔ Strict: a bundle decodes to a fully validated tree or a single
  descriptive error, never a partial result
- ✔ Zero-copy: decoded names and program payloads borrow from the input
  buffer
- ✔ Small: compiles with zero dependencies
- ✔ Safe: every read is bounds checked, offset arithmetic never wraps, and
  the parser is fuzzed against malicious input
- ✔ Diagnosable: every error carries the byte offset of the corrupt region
  and what was expected there

## Quick Start

```rust
use fluxshader::{ErrorKind, FileHeader};

let err = FileHeader::from_slice(b"nope").unwrap_err();
assert!(matches!(err.kind(), ErrorKind::InvalidMagic { .. }));
assert_eq!(err.offset(), 0);
```

Decoding a real bundle and extracting its embedded programs:

```rust,no_run
use fluxshader::FileHeader;

# fn main() -> Result<(), Box<dyn std::error::Error>> {
let data = std::fs::read("menu.flux")?;
let bundle = FileHeader::from_slice(&data)?;

println!("bundle: {}", bundle.name());
for (index, kind, shader) in bundle.shaders() {
    let gxp = shader.gxp();
    std::fs::write(gxp.extract_file_name(index, kind), gxp.payload())?;
    for uniform in shader.uniforms().entries() {
        println!("  {} uniform: {}", kind.code(), uniform.name);
    }
}
# Ok(())
# }
```

## Offset chains

The container is self-referential: apart from the two file-absolute shader
offsets in each secondary header, every stored offset is relative to the
byte position of the field storing it. A shader header at `start` finds its
GXP blob at `start + 0xC + rel` because `0xC` is where the offset field
itself sits. The parser keeps each of these anchors as a named constant and
resolves every hop through a bounds checked view, so a corrupt file fails
with the offset of the bad field instead of reading garbage.

## Caveats

The payload of a GXP blob is opaque to this crate: it is validated to start
with the `GXP` signature and exposed as raw bytes, nothing more. There is
no encode path and no recovery from corrupt input beyond reporting where it
is corrupt.

*/

mod cursor;
mod errors;
mod file;
mod gxp;
mod shader;
mod uniform;

pub use self::cursor::ByteView;
pub use self::errors::{Error, ErrorKind};
pub use self::file::{FileHeader, SecondaryHeader};
pub use self::gxp::{GxpBlob, GXP_MAGIC};
pub use self::shader::{ShaderHeader, ShaderKind};
pub use self::uniform::{UniformEntry, UniformTable};

/// Signature of the FLUX container, shared by the file header and every
/// shader header
pub const FLUX_MAGIC: [u8; 4] = *b"FLUX";
