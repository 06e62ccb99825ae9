//! SM2 curve points
//!
//! Affine points for encoding and comparison, Jacobian points for
//! arithmetic. The curve is y² = x³ − 3x + b.

use subtle::{Choice, ConditionallySelectable};

use super::constants::{SM2_FIELD_ELEMENT_SIZE, SM2_POINT_UNCOMPRESSED_SIZE};
use super::field::FieldElement;
use super::scalar::Scalar;
use crate::error::{validate, Error, Result};

/// Affine point (x, y) or the identity
#[derive(Clone, Debug)]
pub struct Point {
    pub(crate) is_identity: Choice,
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
}

/// Jacobian point (X : Y : Z) with x = X/Z², y = Y/Z³
#[derive(Clone, Debug)]
pub(crate) struct ProjectivePoint {
    pub(crate) is_identity: Choice,
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    pub(crate) z: FieldElement,
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        let a_id: bool = self.is_identity.into();
        let b_id: bool = other.is_identity.into();
        if a_id || b_id {
            return a_id == b_id;
        }
        self.x == other.x && self.y == other.y
    }
}

impl Eq for Point {}

impl Point {
    /// Build a point from big-endian coordinates, checking the curve equation
    pub fn new_uncompressed(
        x_bytes: &[u8; SM2_FIELD_ELEMENT_SIZE],
        y_bytes: &[u8; SM2_FIELD_ELEMENT_SIZE],
    ) -> Result<Self> {
        let x = FieldElement::from_bytes(x_bytes)
            .map_err(|_| Error::InvalidPoint { context: "SM2 point x-coordinate" })?;
        let y = FieldElement::from_bytes(y_bytes)
            .map_err(|_| Error::InvalidPoint { context: "SM2 point y-coordinate" })?;
        if !Self::is_on_curve(&x, &y) {
            return Err(Error::InvalidPoint { context: "SM2 point not on curve" });
        }
        Ok(Point {
            is_identity: Choice::from(0),
            x,
            y,
        })
    }

    /// The point at infinity
    pub fn identity() -> Self {
        Point {
            is_identity: Choice::from(1),
            x: FieldElement::zero(),
            y: FieldElement::zero(),
        }
    }

    /// Is this the point at infinity?
    pub fn is_identity(&self) -> bool {
        self.is_identity.into()
    }

    /// x-coordinate, big-endian
    pub fn x_coordinate_bytes(&self) -> [u8; SM2_FIELD_ELEMENT_SIZE] {
        self.x.to_bytes()
    }

    /// y-coordinate, big-endian
    pub fn y_coordinate_bytes(&self) -> [u8; SM2_FIELD_ELEMENT_SIZE] {
        self.y.to_bytes()
    }

    /// 0x04 ‖ x ‖ y. The identity encodes as all zeros.
    pub fn serialize_uncompressed(&self) -> [u8; SM2_POINT_UNCOMPRESSED_SIZE] {
        let mut out = [0u8; SM2_POINT_UNCOMPRESSED_SIZE];
        if self.is_identity() {
            return out;
        }
        out[0] = 0x04;
        out[1..1 + SM2_FIELD_ELEMENT_SIZE].copy_from_slice(&self.x.to_bytes());
        out[1 + SM2_FIELD_ELEMENT_SIZE..].copy_from_slice(&self.y.to_bytes());
        out
    }

    /// Decode 0x04 ‖ x ‖ y
    ///
    /// The identity has no valid encoding here, so the all-zero form is
    /// rejected along with any other prefix.
    pub fn deserialize_uncompressed(bytes: &[u8]) -> Result<Self> {
        validate::length("SM2 point", bytes.len(), SM2_POINT_UNCOMPRESSED_SIZE)?;
        if bytes[0] != 0x04 {
            return Err(Error::InvalidPoint { context: "SM2 point prefix" });
        }
        let mut xb = [0u8; SM2_FIELD_ELEMENT_SIZE];
        let mut yb = [0u8; SM2_FIELD_ELEMENT_SIZE];
        xb.copy_from_slice(&bytes[1..1 + SM2_FIELD_ELEMENT_SIZE]);
        yb.copy_from_slice(&bytes[1 + SM2_FIELD_ELEMENT_SIZE..]);
        Self::new_uncompressed(&xb, &yb)
    }

    /// P + Q
    pub fn add(&self, other: &Self) -> Self {
        self.to_projective().add(&other.to_projective()).to_affine()
    }

    /// 2P
    pub fn double(&self) -> Self {
        self.to_projective().double().to_affine()
    }

    /// −P
    pub fn negate(&self) -> Self {
        if self.is_identity() {
            return self.clone();
        }
        Point {
            is_identity: Choice::from(0),
            x: self.x,
            y: self.y.negate(),
        }
    }

    /// scalar · P
    ///
    /// Double-and-add over all 256 bits, keeping or dropping each sum with
    /// a select. Additions involving the identity return early, so leading
    /// zero bits are cheaper and the running time depends on the scalar.
    pub fn mul(&self, scalar: &Scalar) -> Self {
        let base = self.to_projective();
        let mut acc = ProjectivePoint::identity();
        for &byte in scalar.as_secret_buffer().as_array().iter() {
            for i in (0..8).rev() {
                acc = acc.double();
                let sum = acc.add(&base);
                acc = ProjectivePoint::conditional_select(&acc, &sum, Choice::from((byte >> i) & 1));
            }
        }
        acc.to_affine()
    }

    /// y² = x³ − 3x + b
    pub(crate) fn is_on_curve(x: &FieldElement, y: &FieldElement) -> bool {
        let y2 = y.square();
        let x3 = x.square().mul(x);
        let a = FieldElement(FieldElement::A_M3);
        let b = FieldElement(FieldElement::B_LIMBS);
        let rhs = x3.add(&a.mul(x)).add(&b);
        y2 == rhs
    }

    fn to_projective(&self) -> ProjectivePoint {
        if self.is_identity() {
            ProjectivePoint::identity()
        } else {
            ProjectivePoint {
                is_identity: Choice::from(0),
                x: self.x,
                y: self.y,
                z: FieldElement::one(),
            }
        }
    }
}

impl ProjectivePoint {
    /// (0 : 1 : 0)
    pub fn identity() -> Self {
        ProjectivePoint {
            is_identity: Choice::from(1),
            x: FieldElement::zero(),
            y: FieldElement::one(),
            z: FieldElement::zero(),
        }
    }

    fn conditional_select(a: &Self, b: &Self, flag: Choice) -> Self {
        ProjectivePoint {
            is_identity: Choice::conditional_select(&a.is_identity, &b.is_identity, flag),
            x: FieldElement::conditional_select(&a.x.0, &b.x.0, flag),
            y: FieldElement::conditional_select(&a.y.0, &b.y.0, flag),
            z: FieldElement::conditional_select(&a.z.0, &b.z.0, flag),
        }
    }

    /// Jacobian addition
    pub fn add(&self, other: &Self) -> Self {
        if self.is_identity.into() {
            return other.clone();
        }
        if other.is_identity.into() {
            return self.clone();
        }

        let z1_sq = self.z.square();
        let z2_sq = other.z.square();
        let z1_cu = z1_sq.mul(&self.z);
        let z2_cu = z2_sq.mul(&other.z);

        let u1 = self.x.mul(&z2_sq);
        let u2 = other.x.mul(&z1_sq);
        let s1 = self.y.mul(&z2_cu);
        let s2 = other.y.mul(&z1_cu);

        let h = u2.sub(&u1);
        let r = s2.sub(&s1);

        if h.is_zero() {
            if r.is_zero() {
                return self.double();
            }
            return ProjectivePoint::identity();
        }

        let h2 = h.square();
        let h3 = h2.mul(&h);
        let v = u1.mul(&h2);

        // X₃ = r² − h³ − 2v
        let x3 = r.square().sub(&h3).sub(&v.add(&v));
        // Y₃ = r·(v − X₃) − s1·h³
        let y3 = r.mul(&v.sub(&x3)).sub(&s1.mul(&h3));
        // Z₃ = Z₁·Z₂·h
        let z3 = self.z.mul(&other.z).mul(&h);

        ProjectivePoint {
            is_identity: Choice::from(0),
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Jacobian doubling with a = −3
    pub fn double(&self) -> Self {
        if self.is_identity.into() {
            return self.clone();
        }
        if self.y.is_zero() {
            return ProjectivePoint::identity();
        }

        // δ = Z², γ = Y², β = X·γ, α = 3·(X − δ)·(X + δ)
        let delta = self.z.square();
        let gamma = self.y.square();
        let beta = self.x.mul(&gamma);
        let alpha = self
            .x
            .sub(&delta)
            .mul(&self.x.add(&delta))
            .mul(&FieldElement::from_u32(3));

        let two_beta = beta.add(&beta);
        let four_beta = two_beta.add(&two_beta);
        let eight_beta = four_beta.add(&four_beta);

        // X₃ = α² − 8β
        let x3 = alpha.square().sub(&eight_beta);
        // Z₃ = (Y + Z)² − γ − δ
        let z3 = self.y.add(&self.z).square().sub(&gamma).sub(&delta);
        // Y₃ = α·(4β − X₃) − 8γ²
        let gamma_sq = gamma.square();
        let two_g = gamma_sq.add(&gamma_sq);
        let four_g = two_g.add(&two_g);
        let eight_g = four_g.add(&four_g);
        let y3 = alpha.mul(&four_beta.sub(&x3)).sub(&eight_g);

        ProjectivePoint {
            is_identity: Choice::from(0),
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Back to affine; a zero Z is the point at infinity
    pub fn to_affine(&self) -> Point {
        if self.is_identity.into() {
            return Point::identity();
        }
        let z_inv = match self.z.invert() {
            Ok(z_inv) => z_inv,
            Err(_) => return Point::identity(),
        };
        let z_inv_sq = z_inv.square();
        let z_inv_cu = z_inv_sq.mul(&z_inv);
        Point {
            is_identity: Choice::from(0),
            x: self.x.mul(&z_inv_sq),
            y: self.y.mul(&z_inv_cu),
        }
    }
}
