//! SM2 field arithmetic
//!
//! Elements of 𝔽ₚ with p = 2²⁵⁶ − 2²²⁴ − 2⁹⁶ + 2⁶⁴ − 1, stored as eight
//! little-endian 32-bit limbs and always kept fully reduced.

use subtle::{Choice, ConditionallySelectable};

use super::constants::{bytes_to_limbs_le, limbs_to_bytes_be, NLIMBS, SM2_FIELD_ELEMENT_SIZE};
use crate::error::{Error, Result};

/// Element of the SM2 base field
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldElement(pub(crate) [u32; NLIMBS]);

impl FieldElement {
    /// p in little-endian limbs
    pub(crate) const MOD_LIMBS: [u32; NLIMBS] = [
        0xFFFF_FFFF, 0xFFFF_FFFF, 0x0000_0000, 0xFFFF_FFFF,
        0xFFFF_FFFF, 0xFFFF_FFFF, 0xFFFF_FFFF, 0xFFFF_FFFE,
    ];

    /// a = p − 3
    pub(crate) const A_M3: [u32; NLIMBS] = [
        0xFFFF_FFFC, 0xFFFF_FFFF, 0x0000_0000, 0xFFFF_FFFF,
        0xFFFF_FFFF, 0xFFFF_FFFF, 0xFFFF_FFFF, 0xFFFF_FFFE,
    ];

    /// Curve coefficient b
    pub(crate) const B_LIMBS: [u32; NLIMBS] = [
        0x4D94_0E93, 0xDDBC_BD41, 0x15AB_8F92, 0xF397_89F5,
        0xCF65_09A7, 0x4D5A_9E4B, 0x9D9F_5E34, 0x28E9_FA9E,
    ];

    /// p − 2, big-endian, for Fermat inversion
    const P_MINUS_2: [u8; 32] = [
        0xFF, 0xFF, 0xFF, 0xFE, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFD,
    ];

    /// Small constant `n < 2³²`
    #[inline]
    pub fn from_u32(n: u32) -> Self {
        let mut limbs = [0u32; NLIMBS];
        limbs[0] = n;
        FieldElement(limbs)
    }

    /// 0
    #[inline]
    pub fn zero() -> Self {
        FieldElement([0u32; NLIMBS])
    }

    /// 1
    #[inline]
    pub fn one() -> Self {
        Self::from_u32(1)
    }

    /// Decode 32 big-endian bytes, rejecting values ≥ p
    pub fn from_bytes(bytes: &[u8; SM2_FIELD_ELEMENT_SIZE]) -> Result<Self> {
        let fe = FieldElement(bytes_to_limbs_le(bytes));
        if !fe.is_valid() {
            return Err(Error::param("SM2 field element", "value is not below the modulus"));
        }
        Ok(fe)
    }

    /// Encode as 32 big-endian bytes
    pub fn to_bytes(&self) -> [u8; SM2_FIELD_ELEMENT_SIZE] {
        limbs_to_bytes_be(&self.0)
    }

    /// Is the value below p?
    #[inline(always)]
    pub fn is_valid(&self) -> bool {
        let (_, borrow) = Self::sbb8(self.0, Self::MOD_LIMBS);
        borrow == 1
    }

    /// Is the value zero?
    pub fn is_zero(&self) -> bool {
        self.0.iter().fold(0u32, |acc, &w| acc | w) == 0
    }

    /// (self + other) mod p
    pub fn add(&self, other: &Self) -> Self {
        let (sum, carry) = Self::adc8(self.0, other.0);
        let (reduced, borrow) = Self::sbb8(sum, Self::MOD_LIMBS);
        let need_reduce = (carry | (borrow ^ 1)) & 1;
        Self::conditional_select(&sum, &reduced, Choice::from(need_reduce as u8))
    }

    /// (self − other) mod p
    pub fn sub(&self, other: &Self) -> Self {
        let (diff, borrow) = Self::sbb8(self.0, other.0);
        let (diff_plus_p, _) = Self::adc8(diff, Self::MOD_LIMBS);
        Self::conditional_select(&diff, &diff_plus_p, Choice::from(borrow as u8))
    }

    /// (self · other) mod p
    pub fn mul(&self, other: &Self) -> Self {
        let mut t = [0u128; NLIMBS * 2];
        for i in 0..NLIMBS {
            for j in 0..NLIMBS {
                t[i + j] += (self.0[i] as u128) * (other.0[j] as u128);
            }
        }

        let mut wide = [0u32; NLIMBS * 2];
        let mut carry: u128 = 0;
        for i in 0..(NLIMBS * 2) {
            let v = t[i] + carry;
            wide[i] = (v & 0xFFFF_FFFF) as u32;
            carry = v >> 32;
        }

        Self::reduce_wide(wide)
    }

    /// self² mod p
    #[inline(always)]
    pub fn square(&self) -> Self {
        self.mul(self)
    }

    /// −self mod p
    pub fn negate(&self) -> Self {
        FieldElement::zero().sub(self)
    }

    /// Multiplicative inverse, a^(p−2)
    pub fn invert(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::param("SM2 field element", "inverse of zero"));
        }

        let mut result = FieldElement::one();
        for &byte in Self::P_MINUS_2.iter() {
            for bit in (0..8).rev() {
                result = result.square();
                let prod = result.mul(self);
                result = Self::conditional_select(
                    &result.0,
                    &prod.0,
                    Choice::from((byte >> bit) & 1),
                );
            }
        }
        Ok(result)
    }

    /// Returns `a` when `flag` is 0 and `b` when it is 1
    pub(crate) fn conditional_select(a: &[u32; NLIMBS], b: &[u32; NLIMBS], flag: Choice) -> Self {
        let mut out = [0u32; NLIMBS];
        for ((a_limb, b_limb), out_limb) in a.iter().zip(b.iter()).zip(out.iter_mut()) {
            *out_limb = u32::conditional_select(a_limb, b_limb, flag);
        }
        FieldElement(out)
    }

    #[inline(always)]
    fn adc8(a: [u32; NLIMBS], b: [u32; NLIMBS]) -> ([u32; NLIMBS], u32) {
        let mut r = [0u32; NLIMBS];
        let mut carry = 0u64;
        for ((&a_limb, &b_limb), r_limb) in a.iter().zip(b.iter()).zip(r.iter_mut()) {
            let tmp = (a_limb as u64) + (b_limb as u64) + carry;
            *r_limb = tmp as u32;
            carry = tmp >> 32;
        }
        (r, carry as u32)
    }

    #[inline(always)]
    fn sbb8(a: [u32; NLIMBS], b: [u32; NLIMBS]) -> ([u32; NLIMBS], u32) {
        let mut r = [0u32; NLIMBS];
        let mut borrow = 0u32;
        for ((&a_limb, &b_limb), r_limb) in a.iter().zip(b.iter()).zip(r.iter_mut()) {
            let ai = a_limb as u64;
            let bi = b_limb as u64 + borrow as u64;
            *r_limb = ai.wrapping_sub(bi) as u32;
            borrow = (ai < bi) as u32;
        }
        (r, borrow)
    }

    /// Reduce a 512-bit product modulo p.
    ///
    /// Limbs above 2²⁵⁶ are folded down with
    /// 2²⁵⁶ ≡ 2²²⁴ + 2⁹⁶ − 2⁶⁴ + 1 (mod p), top limb first, in signed
    /// 64-bit accumulators. Any carry out of the normalized low half is
    /// folded the same way before a final conditional subtraction.
    fn reduce_wide(t: [u32; NLIMBS * 2]) -> FieldElement {
        let mut r = [0i64; NLIMBS * 2];
        for (acc, &limb) in r.iter_mut().zip(t.iter()) {
            *acc = limb as i64;
        }

        for i in (NLIMBS..NLIMBS * 2).rev() {
            let w = r[i];
            r[i] = 0;
            r[i - 1] += w;
            r[i - 5] += w;
            r[i - 6] -= w;
            r[i - 8] += w;
        }

        loop {
            let mut carry = 0i64;
            for limb in r.iter_mut().take(NLIMBS) {
                let v = *limb + carry;
                *limb = v & 0xFFFF_FFFF;
                carry = v >> 32;
            }
            if carry == 0 {
                break;
            }
            r[7] += carry;
            r[3] += carry;
            r[2] -= carry;
            r[0] += carry;
        }

        let mut out = [0u32; NLIMBS];
        for (o, &limb) in out.iter_mut().zip(r.iter()) {
            *o = limb as u32;
        }

        let (sub, borrow) = Self::sbb8(out, Self::MOD_LIMBS);
        Self::conditional_select(&out, &sub, Choice::from((borrow ^ 1) as u8))
    }
}
