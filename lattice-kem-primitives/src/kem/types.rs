#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![allow(clippy::indexing_slicing)]

//! Fixed-size KEM artifacts
//!
//! Secret material (`SecretKey`, `SharedSecret`) is zeroized on drop, compared in
//! constant time, and redacted from `Debug`.

use std::fmt;

use lattice_kem_prelude::{KemError, Result};
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::params::{
    CIPHERTEXT_BYTES, POLYVEC_BYTES, PUBLIC_KEY_BYTES, SECRET_KEY_BYTES, SHARED_SECRET_BYTES,
    SYM_BYTES,
};

fn to_array<const L: usize>(artifact: &'static str, bytes: &[u8]) -> Result<[u8; L]> {
    KemError::check_length(artifact, L, bytes.len())?;
    let mut out = [0u8; L];
    out.copy_from_slice(bytes);
    Ok(out)
}

/// Kyber-768 public key: `t` (12-bit packed) followed by the 32-byte public seed.
#[derive(Clone, PartialEq, Eq)]
pub struct PublicKey {
    bytes: [u8; PUBLIC_KEY_BYTES],
}

impl PublicKey {
    /// Parse a 1184-byte public key.
    ///
    /// # Errors
    /// Returns `InvalidLength` for any other length.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(Self { bytes: to_array("public key", bytes)? })
    }

    pub(crate) const fn from_array(bytes: [u8; PUBLIC_KEY_BYTES]) -> Self {
        Self { bytes }
    }

    /// Raw encoding.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; PUBLIC_KEY_BYTES] {
        &self.bytes
    }

    /// Owned copy of the encoding.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bytes.to_vec()
    }

    /// Packed `t` component.
    #[must_use]
    pub fn t_bytes(&self) -> &[u8] {
        &self.bytes[..POLYVEC_BYTES]
    }

    /// Seed of the public matrix `A`.
    #[must_use]
    pub fn public_seed(&self) -> [u8; SYM_BYTES] {
        let mut seed = [0u8; SYM_BYTES];
        seed.copy_from_slice(&self.bytes[POLYVEC_BYTES..]);
        seed
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicKey").field("len", &self.bytes.len()).finish()
    }
}

/// Kyber-768 secret key: `s` (12-bit packed).
///
/// Not `Clone`; wiped when dropped.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SecretKey {
    bytes: [u8; SECRET_KEY_BYTES],
}

impl SecretKey {
    /// Parse a 1152-byte secret key.
    ///
    /// # Errors
    /// Returns `InvalidLength` for any other length.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(Self { bytes: to_array("secret key", bytes)? })
    }

    pub(crate) const fn from_array(bytes: [u8; SECRET_KEY_BYTES]) -> Self {
        Self { bytes }
    }

    /// Raw encoding. Handle with care.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; SECRET_KEY_BYTES] {
        &self.bytes
    }
}

impl ConstantTimeEq for SecretKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.bytes.as_slice().ct_eq(other.bytes.as_slice())
    }
}

impl PartialEq for SecretKey {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for SecretKey {}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey").field("data", &"[REDACTED]").finish()
    }
}

/// Kyber-768 ciphertext: compressed `u` followed by compressed `v`.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Ciphertext {
    bytes: [u8; CIPHERTEXT_BYTES],
}

impl Ciphertext {
    /// Parse a 1088-byte ciphertext.
    ///
    /// # Errors
    /// Returns `InvalidLength` for any other length.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(Self { bytes: to_array("ciphertext", bytes)? })
    }

    pub(crate) const fn from_array(bytes: [u8; CIPHERTEXT_BYTES]) -> Self {
        Self { bytes }
    }

    /// Raw encoding.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; CIPHERTEXT_BYTES] {
        &self.bytes
    }

    /// Owned copy of the encoding.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bytes.to_vec()
    }
}

impl ConstantTimeEq for Ciphertext {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.bytes.as_slice().ct_eq(other.bytes.as_slice())
    }
}

impl PartialEq for Ciphertext {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Ciphertext {}

impl fmt::Debug for Ciphertext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ciphertext").field("len", &self.bytes.len()).finish()
    }
}

/// 32-byte shared secret.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SharedSecret {
    bytes: [u8; SHARED_SECRET_BYTES],
}

impl SharedSecret {
    pub(crate) const fn from_array(bytes: [u8; SHARED_SECRET_BYTES]) -> Self {
        Self { bytes }
    }

    /// Parse a 32-byte shared secret.
    ///
    /// # Errors
    /// Returns `InvalidLength` for any other length.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(Self { bytes: to_array("shared secret", bytes)? })
    }

    /// Raw secret. Handle with care.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; SHARED_SECRET_BYTES] {
        &self.bytes
    }
}

impl ConstantTimeEq for SharedSecret {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.bytes.as_slice().ct_eq(other.bytes.as_slice())
    }
}

impl PartialEq for SharedSecret {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for SharedSecret {}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedSecret").field("data", &"[REDACTED]").finish()
    }
}

/// A matching public / secret key pair.
#[derive(Debug)]
pub struct KeyPair {
    /// Encapsulation key.
    pub public_key: PublicKey,
    /// Decapsulation key.
    pub secret_key: SecretKey,
}

impl KeyPair {
    /// Borrow the public key.
    #[must_use]
    pub const fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Borrow the secret key.
    #[must_use]
    pub const fn secret_key(&self) -> &SecretKey {
        &self.secret_key
    }
}

#[cfg(test)]
#[allow(clippy::panic_in_result_fn, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_lengths_are_enforced() {
        assert!(PublicKey::from_bytes(&[0u8; 1183]).is_err());
        assert!(PublicKey::from_bytes(&[0u8; 1185]).is_err());
        assert!(SecretKey::from_bytes(&[0u8; 1151]).is_err());
        assert!(Ciphertext::from_bytes(&[]).is_err());
        assert!(SharedSecret::from_bytes(&[0u8; 31]).is_err());
    }

    #[test]
    fn test_length_error_names_artifact() {
        match Ciphertext::from_bytes(&[0u8; 10]) {
            Err(KemError::InvalidLength { artifact, expected, actual }) => {
                assert_eq!(artifact, "ciphertext");
                assert_eq!(expected, 1088);
                assert_eq!(actual, 10);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_public_key_layout() -> Result<()> {
        let mut bytes = vec![0u8; PUBLIC_KEY_BYTES];
        bytes[POLYVEC_BYTES..].fill(0xAB);
        let pk = PublicKey::from_bytes(&bytes)?;
        assert_eq!(pk.t_bytes().len(), 1152);
        assert_eq!(pk.public_seed(), [0xAB; 32]);
        assert_eq!(pk.to_bytes(), bytes);
        Ok(())
    }

    #[test]
    fn test_secret_debug_is_redacted() -> Result<()> {
        let sk = SecretKey::from_bytes(&[0x5A; SECRET_KEY_BYTES])?;
        let ss = SharedSecret::from_bytes(&[0x5A; 32])?;
        assert!(!format!("{sk:?}").contains("90"));
        assert!(format!("{ss:?}").contains("REDACTED"));
        Ok(())
    }

    #[test]
    fn test_constant_time_equality() -> Result<()> {
        let a = SharedSecret::from_bytes(&[1u8; 32])?;
        let b = SharedSecret::from_bytes(&[1u8; 32])?;
        let mut other = [1u8; 32];
        other[31] = 2;
        let c = SharedSecret::from_bytes(&other)?;
        assert!(bool::from(a.ct_eq(&b)));
        assert_eq!(a, b);
        assert_ne!(a, c);
        Ok(())
    }

    #[test]
    fn test_zeroize_clears_secret_key() -> Result<()> {
        let mut sk = SecretKey::from_bytes(&[0xFF; SECRET_KEY_BYTES])?;
        sk.zeroize();
        assert!(sk.as_bytes().iter().all(|&b| b == 0));
        Ok(())
    }
}
