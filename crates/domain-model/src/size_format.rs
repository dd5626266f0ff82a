use bytesize::ByteSize;

/// How a byte count is rendered in output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeFormat {
    /// Raw integer byte count
    Bytes,
    /// IEC units (KiB, MiB, ...)
    #[default]
    Binary,
    /// SI units (kB, MB, ...)
    Decimal,
}

impl SizeFormat {
    pub fn render(self, size: u64) -> String {
        match self {
            SizeFormat::Bytes => size.to_string(),
            SizeFormat::Binary => ByteSize(size).display().iec().to_string(),
            SizeFormat::Decimal => ByteSize(size).display().si().to_string(),
        }
    }
}
