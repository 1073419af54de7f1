/// Key schedule parity constant.
pub(crate) const C240: u64 = 0x1BD1_1BDA_A9FC_1A22;

/// Threefish-512 rotation constants, indexed by round mod 8 and word pair.
pub(crate) const R: [[u32; 4]; 8] = [
    [46, 36, 19, 37],
    [33, 27, 14, 42],
    [17, 49, 36, 39],
    [44, 9, 54, 56],
    [39, 30, 34, 24],
    [13, 50, 10, 17],
    [25, 29, 39, 43],
    [8, 35, 56, 22],
];

pub(crate) const STATE_WORDS: usize = 8;
pub(crate) const BLOCK_SIZE: usize = 64;

/// UBI block types.
pub(crate) const TYPE_CFG: u64 = 4;
pub(crate) const TYPE_MSG: u64 = 48;
pub(crate) const TYPE_OUT: u64 = 63;

/// `"SHA3"` read as a little-endian word.
pub(crate) const SCHEMA_ID: u32 = 0x3341_4853;
pub(crate) const VERSION: u16 = 1;

pub(crate) const IV_224: [u64; 8] = [
    0xCCD0_6162_4867_7224,
    0xCBA6_5CF3_A923_39EF,
    0x8CCD_69D6_52FF_4B64,
    0x398A_ED7B_3AB8_90B4,
    0x0F59_D1B1_457D_2BD0,
    0x6776_FE65_75D4_EB3D,
    0x99FB_C70E_9974_13E9,
    0x9E2C_FCCF_E1C4_1EF7,
];

pub(crate) const IV_256: [u64; 8] = [
    0xCCD0_44A1_2FDB_3E13,
    0xE835_9030_1A79_A9EB,
    0x55AE_A061_4F81_6E6F,
    0x2A27_67A4_AE9B_94DB,
    0xEC06_025E_74DD_7683,
    0xE7A4_36CD_C474_6251,
    0xC36F_BAF9_393A_D185,
    0x3EED_BA18_33ED_FC13,
];

pub(crate) const IV_384: [u64; 8] = [
    0xA3F6_C6BF_3A75_EF5F,
    0xB0FE_F9CC_FD84_FAA4,
    0x9D77_DD66_3D77_0CFE,
    0xD798_CBF3_B468_FDDA,
    0x1BC4_A666_8A0E_4465,
    0x7ED7_D434_E580_7407,
    0x548F_C1AC_D4EC_44D6,
    0x266E_1754_6AA1_8FF8,
];

pub(crate) const IV_512: [u64; 8] = [
    0x4903_ADFF_749C_51CE,
    0x0D95_DE39_9746_DF03,
    0x8FD1_9341_27C7_9BCE,
    0x9A25_5629_FF35_2CB1,
    0x5DB6_2599_DF6C_A7B0,
    0xEABE_394C_A9D5_C3F4,
    0x9911_12C7_1A75_B523,
    0xAE18_A40B_660F_CC33,
];
