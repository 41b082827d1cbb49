#![deny(unsafe_code)]
#![no_main]

//! Fuzz testing for polynomial decoding and compression
//!
//! Decoded coefficients are always canonical, and recompressing a
//! decompressed value is the identity. Out-of-range widths are errors.

use libfuzzer_sys::fuzz_target;
use lattice_kem_primitives::params::{DU, DV, N, POLYVEC_COMPRESSED_BYTES, POLY_BYTES, Q};
use lattice_kem_primitives::polynomial::poly::MAX_COMPRESSION_BITS;
use lattice_kem_primitives::polynomial::{Poly, PolyVec};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let encoded: Vec<u8> = data.iter().cycle().take(POLY_BYTES).copied().collect();
    if let Ok(poly) = Poly::from_bytes(&encoded) {
        assert!(poly.coeffs().iter().all(|&c| c < Q));
        let reencoded = Poly::from_bytes(&poly.to_bytes());
        assert_eq!(reencoded.ok(), Some(poly));
    }

    for bits in [1u32, DV, DU] {
        let len = bits as usize * N / 8;
        let packed: Vec<u8> = data.iter().cycle().take(len).copied().collect();
        if let Ok(poly) = Poly::decompress_from(&packed, bits) {
            assert!(poly.coeffs().iter().all(|&c| c < Q));
            let mut repacked = vec![0u8; len];
            if poly.compress_into(bits, &mut repacked).is_ok() {
                assert_eq!(repacked, packed);
            }
        }
    }

    let width = u32::from(data[0]);
    let mut sink = vec![0u8; data.len()];
    let poly = Poly::decompress_from(data, width);
    if width == 0 || width > MAX_COMPRESSION_BITS {
        assert!(poly.is_err());
        assert!(Poly::zero().compress_into(width, &mut sink).is_err());
    }

    let packed: Vec<u8> = data.iter().cycle().take(POLYVEC_COMPRESSED_BYTES).copied().collect();
    let _ = PolyVec::decompress(&packed);
});
