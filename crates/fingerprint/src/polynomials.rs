//! Catalog of irreducible polynomials over GF(2).
//!
//! For every degree `d` in 1..=64 the catalog carries two known irreducible
//! polynomials of degree `d`, in the crate's bit-reversed representation
//! (lowest-order coefficient in the most significant bit). The first entry
//! per degree seeds the standard generators; the second lets callers combine
//! several fingerprints of the same input for a stronger uniqueness bound.
//!
//! The catalog is pure lookup data. Irreducibility of the entries is a
//! property of the table, not something this module (or anything else in the
//! crate) verifies.

// All indexing below is guarded by the degree assertion; rows are 1..=64 and
// columns are a fixed [u64; 2].
#![allow(clippy::indexing_slicing)]

/// Two irreducible polynomials per degree; row `d - 1` holds degree `d`.
const CANDIDATES: [[u64; 2]; 64] = [
  [0xC000_0000_0000_0000, 0xC000_0000_0000_0000],
  [0xE000_0000_0000_0000, 0xE000_0000_0000_0000],
  [0xD000_0000_0000_0000, 0xB000_0000_0000_0000],
  [0xF800_0000_0000_0000, 0xF800_0000_0000_0000],
  [0xEC00_0000_0000_0000, 0xBC00_0000_0000_0000],
  [0xDA00_0000_0000_0000, 0xB600_0000_0000_0000],
  [0xE500_0000_0000_0000, 0xE500_0000_0000_0000],
  [0x9680_0000_0000_0000, 0xD480_0000_0000_0000],
  [0x80C0_0000_0000_0000, 0x8840_0000_0000_0000],
  [0xB0A0_0000_0000_0000, 0xE9A0_0000_0000_0000],
  [0xD9F0_0000_0000_0000, 0xC9B0_0000_0000_0000],
  [0xE758_0000_0000_0000, 0xDE98_0000_0000_0000],
  [0xE42C_0000_0000_0000, 0x94E4_0000_0000_0000],
  [0xD4CE_0000_0000_0000, 0xB892_0000_0000_0000],
  [0xE2AB_0000_0000_0000, 0x9E39_0000_0000_0000],
  [0xCCE4_8000_0000_0000, 0x9783_8000_0000_0000],
  [0xD8F8_C000_0000_0000, 0xA9CD_C000_0000_0000],
  [0x9A28_2000_0000_0000, 0xFD79_E000_0000_0000],
  [0xC782_5000_0000_0000, 0x96CD_3000_0000_0000],
  [0xBEE6_8800_0000_0000, 0xE902_C800_0000_0000],
  [0x86D7_E400_0000_0000, 0xF066_3400_0000_0000],
  [0x9888_0600_0000_0000, 0x910A_BE00_0000_0000],
  [0xFF30_E300_0000_0000, 0xB27E_FB00_0000_0000],
  [0x8E37_5B80_0000_0000, 0xA03D_9480_0000_0000],
  [0xD141_5C40_0000_0000, 0xF535_7CC0_0000_0000],
  [0x91A9_16E0_0000_0000, 0xB6CE_66E0_0000_0000],
  [0xE6D2_FC50_0000_0000, 0xD558_82B0_0000_0000],
  [0x9A3B_A0B8_0000_0000, 0xFBD6_54E8_0000_0000],
  [0xAEA5_D2E4_0000_0000, 0xF0E5_33AC_0000_0000],
  [0xDA88_B7BE_0000_0000, 0xAA3A_AEDE_0000_0000],
  [0xBA75_BB43_0000_0000, 0xF5A8_11C5_0000_0000],
  [0x9B6C_9A2F_8000_0000, 0x9603_CCED_8000_0000],
  [0xFABB_5388_4000_0000, 0xE274_7090_C000_0000],
  [0x8358_898E_A000_0000, 0x8C69_8D3D_2000_0000],
  [0xDA8A_BD5B_F000_0000, 0xF6DF_3A0A_F000_0000],
  [0xB090_C3F7_5800_0000, 0xD3B4_D3D2_9800_0000],
  [0xAD98_82F5_BC00_0000, 0x88DA_4FB5_4400_0000],
  [0xC3C3_6627_2A00_0000, 0xDCCF_2A22_6200_0000],
  [0x9BC0_224A_9700_0000, 0xAF5D_96F2_7300_0000],
  [0x8643_FFF6_2180_0000, 0x8E39_0C6E_DC80_0000],
  [0xE45C_0191_9BC0_0000, 0xCBB3_4C89_45C0_0000],
  [0x80D8_141B_C2E0_0000, 0x886A_FC39_1220_0000],
  [0xF605_807C_2650_0000, 0xA3B9_2D28_F630_0000],
  [0xCE9A_2CFC_7628_0000, 0x9840_0C19_2128_0000],
  [0xF618_9490_4C04_0000, 0xC8BE_6DBC_EC8C_0000],
  [0xE3A4_4C10_4D16_0000, 0xCA84_A594_4376_0000],
  [0xC7E8_4953_A11B_0000, 0xD9D4_F6AA_02CB_0000],
  [0xC26C_DD1C_9A35_8000, 0x8BE8_4784_3432_8000],
  [0xAE12_5DBE_B198_C000, 0xFCC5_DBFD_5AAA_C000],
  [0x86DE_52A0_79A6_A000, 0xC5F1_6BD8_8381_6000],
  [0xDF82_486A_AFE3_7000, 0xA293_EC73_5692_D000],
  [0xE91A_BA27_5C27_2800, 0xD686_1928_74E3_C800],
  [0x963D_0960_DAB3_FC00, 0xBA9D_E620_7262_1400],
  [0xA218_8C4E_8A46_CE00, 0xD31F_75BC_B497_7E00],
  [0xC43A_4160_20A6_CB00, 0x99F5_7FEC_A12B_3900],
  [0xA4F7_2EF8_2A58_AE80, 0xCECE_4391_B81D_A380],
  [0xB39F_1192_64BC_0940, 0x80A2_77D2_0DAB_B9C0],
  [0xFD66_16C0_CBFA_0B20, 0xED16_E641_17DC_11A0],
  [0xFFA8_BC44_327B_5390, 0xEDFB_13DB_3B66_C210],
  [0xCAE8_EB99_E73A_B548, 0xC861_35B6_EA2F_0B98],
  [0xBA49_BADC_DD19_B16C, 0x8F19_44AF_B185_64C4],
  [0xECFC_86D7_65EA_BBEE, 0x9190_E1C4_6CC1_3702],
  [0xE1F8_D6B3_195D_6D97, 0xDF70_267F_F5E4_C979],
  [0xD743_07D3_FD33_82DB, 0x9999_B3FF_DC76_9B48],
];

/// Returns the catalog's candidate polynomials for `degree`, in order.
///
/// # Panics
///
/// Panics if `degree` is not in 1..=64.
#[inline]
#[must_use]
pub const fn candidates(degree: u32) -> [u64; 2] {
  assert!(degree >= 1 && degree <= 64, "degree must be in 1..=64");
  CANDIDATES[(degree - 1) as usize]
}

/// Returns the first catalog polynomial for `degree`.
///
/// The standard generators are seeded with the degree-64 and degree-32
/// defaults.
///
/// # Panics
///
/// Panics if `degree` is not in 1..=64.
#[inline]
#[must_use]
pub const fn default_polynomial(degree: u32) -> u64 {
  candidates(degree)[0]
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn every_degree_has_two_nonzero_candidates() {
    for degree in 1..=64 {
      let [first, second] = candidates(degree);
      assert_ne!(first, 0, "degree {degree}");
      assert_ne!(second, 0, "degree {degree}");
    }
  }

  #[test]
  fn default_is_first_candidate() {
    for degree in 1..=64 {
      assert_eq!(default_polynomial(degree), candidates(degree)[0]);
    }
  }

  #[test]
  #[should_panic(expected = "degree must be in 1..=64")]
  fn degree_zero_panics() {
    let _ = candidates(0);
  }

  #[test]
  #[should_panic(expected = "degree must be in 1..=64")]
  fn degree_65_panics() {
    let _ = candidates(65);
  }
}
