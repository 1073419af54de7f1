//! Threefish-512 tweakable block cipher, the permutation under Skein-512.

use crate::consts::{C240, R};

macro_rules! mix {
    ($v:ident, $a:expr, $b:expr, $r:expr) => {
        $v[$a] = $v[$a].wrapping_add($v[$b]);
        $v[$b] = $v[$b].rotate_left($r) ^ $v[$a];
    };
}

/// Four rounds; the word permutation is folded into the pair indices.
macro_rules! four_rounds {
    ($v:ident, $r:expr) => {
        mix!($v, 0, 1, $r[0][0]);
        mix!($v, 2, 3, $r[0][1]);
        mix!($v, 4, 5, $r[0][2]);
        mix!($v, 6, 7, $r[0][3]);

        mix!($v, 2, 1, $r[1][0]);
        mix!($v, 4, 7, $r[1][1]);
        mix!($v, 6, 5, $r[1][2]);
        mix!($v, 0, 3, $r[1][3]);

        mix!($v, 4, 1, $r[2][0]);
        mix!($v, 6, 3, $r[2][1]);
        mix!($v, 0, 5, $r[2][2]);
        mix!($v, 2, 7, $r[2][3]);

        mix!($v, 6, 1, $r[3][0]);
        mix!($v, 0, 7, $r[3][1]);
        mix!($v, 2, 5, $r[3][2]);
        mix!($v, 4, 3, $r[3][3]);
    };
}

#[inline(always)]
fn inject_key(v: &mut [u64; 8], k: &[u64; 9], t: &[u64; 3], s: usize) {
    for (i, w) in v.iter_mut().enumerate() {
        *w = w.wrapping_add(k[(s + i) % 9]);
    }
    v[5] = v[5].wrapping_add(t[s % 3]);
    v[6] = v[6].wrapping_add(t[(s + 1) % 3]);
    v[7] = v[7].wrapping_add(s as u64);
}

/// Encrypt `block` in place under `key` and `tweak`.
///
/// 72 rounds, run as 9 passes of 8 rounds with a subkey injected every
/// 4 rounds.
pub fn encrypt_block(key: &[u64; 8], tweak: &[u64; 2], block: &mut [u64; 8]) {
    let mut k = [0u64; 9];
    k[..8].copy_from_slice(key);
    k[8] = key.iter().fold(C240, |acc, w| acc ^ w);
    let t = [tweak[0], tweak[1], tweak[0] ^ tweak[1]];

    let (lo, hi) = R.split_at(4);
    let v = block;
    for s in (0..18).step_by(2) {
        inject_key(v, &k, &t, s);
        four_rounds!(v, lo);
        inject_key(v, &k, &t, s + 1);
        four_rounds!(v, hi);
    }
    inject_key(v, &k, &t, 18);
}

#[cfg(test)]
mod tests {
    use super::encrypt_block;

    #[test]
    fn zero_key_vector() {
        let mut block = [0u64; 8];
        encrypt_block(&[0; 8], &[0; 2], &mut block);
        assert_eq!(
            block,
            [
                0xBC25_60EF_C6BB_A2B1,
                0xE336_1F16_2238_EB40,
                0xFB86_31EE_0ABB_D175,
                0x7B94_79D4_C547_9ED1,
                0xCFF0_356E_58F8_C27B,
                0xB1B7_B084_30F0_E7F7,
                0xE9A3_80A5_6139_ABF1,
                0xBE7B_6D4A_A11E_B47E,
            ]
        );
    }

    #[test]
    fn tweak_changes_output() {
        let mut a = [1u64; 8];
        let mut b = [1u64; 8];
        encrypt_block(&[7; 8], &[0, 0], &mut a);
        encrypt_block(&[7; 8], &[0, 1], &mut b);
        assert_ne!(a, b);
    }
}
