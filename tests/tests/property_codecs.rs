//! Property-based tests for the codecs and transport encoding

use msgseal::prelude::*;
use msgseal_tests::{rsa_pair, seeded_rng};
use once_cell::sync::Lazy;
use proptest::prelude::*;

static EC_PAIRS: Lazy<Vec<AsymmetricKeyPair>> = Lazy::new(|| {
    let mut rng = seeded_rng(30);
    NamedCurve::TABLE
        .iter()
        .map(|(bits, _)| KeyPairFactory::generate_with_rng(Algorithm::Ecc, *bits, &mut rng).unwrap())
        .collect()
});

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn transport_roundtrip(data in prop::collection::vec(any::<u8>(), 0..1024)) {
        let text = encode(&data);
        prop_assert!(!text.contains('\n') && !text.contains('\r'));
        prop_assert_eq!(decode(&text).unwrap(), data);
    }

    #[test]
    fn rsa_roundtrip_within_bound(message in "[ -~]{0,117}", seed in any::<u64>()) {
        let pair = rsa_pair(1024);
        let mut rng = seeded_rng(seed);
        let sealed = RsaCodec::encrypt_text(&message, pair.public_key(), &mut rng).unwrap();
        prop_assert_eq!(RsaCodec::decrypt_text(&sealed, pair.private_key()).unwrap(), message);
    }

    #[test]
    fn rsa_rejects_beyond_bound(extra in 1usize..64) {
        let pair = rsa_pair(1024);
        let mut rng = seeded_rng(31);
        let message = vec![0x41u8; 117 + extra];
        let err = RsaCodec::encrypt(&message, pair.public_key(), &mut rng).unwrap_err();
        prop_assert_eq!(err, Error::PayloadTooLarge { max: 117, actual: 117 + extra });
    }

    #[test]
    fn hybrid_roundtrip_any_text(message in ".{0,300}", curve in 0usize..3, gcm in any::<bool>()) {
        let pair = &EC_PAIRS[curve];
        let mode = if gcm { ModeKind::Gcm } else { ModeKind::Ecb };
        let codec = EccHybridCodec::with_mode(mode);
        let mut rng = seeded_rng(32);

        let sealed = codec
            .encrypt_text(&message, pair.public_key(), pair.private_key(), &mut rng)
            .unwrap();
        let opened = codec
            .decrypt_text(&sealed, pair.public_key(), pair.private_key())
            .unwrap();
        prop_assert_eq!(opened, message);
    }

    #[test]
    fn ecb_ciphertext_length(len in 0usize..512) {
        let pair = &EC_PAIRS[0];
        let mut rng = seeded_rng(33);
        let ct = EccHybridCodec::new()
            .encrypt(&vec![0u8; len], pair.public_key(), pair.private_key(), &mut rng)
            .unwrap();
        prop_assert_eq!(ct.len(), (len / 16 + 1) * 16);
    }
}
