pub mod cli;
pub mod grid;
pub mod input;
pub mod schematic;

pub mod prelude {
    //! Helper prelude with useful imports.
    pub use crate::grid::GridExt;
    pub use crate::input::{IStr, Nl, Ws};
    pub use crate::schematic::Schematic;
    pub use anyhow::{anyhow, bail, Context, Result};
    pub type ArrayVec<T, const N: usize = 16> = arrayvec::ArrayVec<T, N>;
    pub use bstr::{BStr, ByteSlice};
}

/// Input processing.
pub fn input(path: &'static str, read_path: &str) -> anyhow::Result<input::IStr> {
    use std::fs::File;
    use std::io::Read;

    use anyhow::{anyhow, Context};

    return inner(read_path).with_context(|| anyhow!("{path}"));

    fn inner(read_path: &str) -> anyhow::Result<input::IStr> {
        let mut file = File::open(read_path)?;
        let mut buf = Vec::with_capacity(4096);
        file.read_to_end(&mut buf)?;
        Ok(input::IStr::new(Box::leak(buf.into_boxed_slice()), 0))
    }
}

/// Prepare an input processor.
///
/// Inputs are read from `inputs/` under the calling crate's manifest
/// directory. The contents are leaked into a static buffer because they are
/// processed for the lifetime of the process and memory for them will be
/// freed once the process exits *anyway*.
#[macro_export]
macro_rules! input {
    ($path:literal) => {{
        let path = concat!("inputs/", $path);
        let read_path = concat!(env!("CARGO_MANIFEST_DIR"), "/inputs/", $path);
        ($crate::input(path, read_path)?, path)
    }};
}
