//! Block-size sweep construction
//!
//! The sweep is a fixed list of small sizes followed by triplets around
//! every 512-byte step up to twice the filesystem block size. The
//! +-100-byte neighbors expose performance cliffs at buffer-alignment
//! boundaries; the order is the report's row order.

/// Fixed seed sizes every sweep starts with
const SEED_SIZES: [u64; 13] = [1, 2, 3, 4, 5, 10, 20, 50, 100, 200, 256, 500, 512];

/// Build the ordered list of block sizes to test for a run.
pub fn block_size_sweep(fs_block_size: u64) -> Vec<u64> {
    let mut sizes: Vec<u64> = SEED_SIZES.to_vec();

    let mut x = 1024;
    while x <= 2 * fs_block_size {
        sizes.push(x - 100);
        sizes.push(x);
        sizes.push(x + 100);
        x += 512;
    }

    sizes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_for_4096_byte_filesystem() {
        let sizes = block_size_sweep(4096);

        assert_eq!(sizes[..13], SEED_SIZES);

        // Triplets around 1024, 1536, ..., 8192 (2 * 4096 is the ceiling)
        let mut expected = Vec::new();
        let mut x = 1024u64;
        while x <= 8192 {
            expected.extend_from_slice(&[x - 100, x, x + 100]);
            x += 512;
        }
        assert_eq!(sizes[13..], expected[..]);
        assert!(sizes.contains(&8292));
        assert!(!sizes.contains(&8704));
    }

    #[test]
    fn small_filesystem_block_size_yields_seed_only() {
        // 2 * 500 < 1024, so no generated triplet qualifies
        assert_eq!(block_size_sweep(500), SEED_SIZES.to_vec());
    }

    #[test]
    fn boundary_step_is_included() {
        // 2 * 512 = 1024: exactly one triplet
        let sizes = block_size_sweep(512);
        assert_eq!(sizes[13..], [924, 1024, 1124]);
    }

    #[test]
    fn sweep_is_deterministic() {
        assert_eq!(block_size_sweep(4096), block_size_sweep(4096));
    }
}
