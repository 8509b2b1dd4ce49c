//! Byte-size formatting helpers.

use textgen_core::GIB;

/// Format a byte count as binary gigabytes with two decimals.
#[allow(clippy::cast_precision_loss)]
pub fn format_gib(bytes: u64) -> String {
    format!("{:.2}", bytes as f64 / GIB as f64)
}

/// Format a byte count with the largest fitting binary unit.
///
/// Uses `B` below 1 KiB, otherwise one decimal in `KiB`, `MiB` or `GiB`.
#[allow(clippy::cast_precision_loss)]
pub fn format_size(bytes: u64) -> String {
    const KIB: f64 = 1024.0;
    const MIB: f64 = KIB * 1024.0;
    const GIB_F: f64 = MIB * 1024.0;

    let bytes_f = bytes as f64;
    if bytes_f >= GIB_F {
        format!("{:.1} GiB", bytes_f / GIB_F)
    } else if bytes_f >= MIB {
        format!("{:.1} MiB", bytes_f / MIB)
    } else if bytes_f >= KIB {
        format!("{:.1} KiB", bytes_f / KIB)
    } else {
        format!("{bytes} B")
    }
}
