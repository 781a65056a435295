//! Session usage as a messaging front end would drive it

use msgseal::prelude::*;
use msgseal_tests::fixtures::SESSION_MESSAGE;
use msgseal_tests::init_tracing;

#[test]
fn test_generate_encrypt_decrypt_both_algorithms() {
    init_tracing();
    let mut session = Session::default();

    for (algorithm, bits) in [(Algorithm::Rsa, 1024), (Algorithm::Ecc, 256)] {
        session.generate(algorithm, bits).unwrap();
        let sealed = session.encrypt(algorithm, SESSION_MESSAGE).unwrap();
        assert_eq!(session.decrypt(algorithm, &sealed).unwrap(), SESSION_MESSAGE);
    }

    // Both pairs are kept side by side
    assert!(session.key_pair(Algorithm::Rsa).is_some());
    assert!(session.key_pair(Algorithm::Ecc).is_some());
}

#[test]
fn test_pasted_ciphertext_is_trimmed() {
    let mut session = Session::default();
    session.generate(Algorithm::Rsa, 1024).unwrap();
    let sealed = session.encrypt(Algorithm::Rsa, SESSION_MESSAGE).unwrap();

    let pasted = format!("\r\n {} \t\n", sealed);
    assert_eq!(session.decrypt(Algorithm::Rsa, &pasted).unwrap(), SESSION_MESSAGE);
}

#[test]
fn test_embedded_whitespace_is_not_tolerated() {
    let mut session = Session::default();
    session.generate(Algorithm::Ecc, 256).unwrap();
    let sealed = session.encrypt(Algorithm::Ecc, SESSION_MESSAGE).unwrap();

    let (head, tail) = sealed.split_at(8);
    let broken = format!("{}\n{}", head, tail);
    let err = session.decrypt(Algorithm::Ecc, &broken).unwrap_err();
    assert_eq!(err.as_crypto().map(Error::kind), Some(ErrorKind::EncodingError));
}

#[test]
fn test_regenerated_pair_cannot_open_old_ciphertext() {
    let mut session = Session::default();
    session.generate(Algorithm::Ecc, 384).unwrap();
    let sealed = session.encrypt(Algorithm::Ecc, SESSION_MESSAGE).unwrap();

    session.generate(Algorithm::Ecc, 384).unwrap();
    assert_eq!(session.last_ciphertext(), None);

    let err = session.decrypt(Algorithm::Ecc, &sealed).unwrap_err();
    assert_eq!(err.as_crypto().map(Error::kind), Some(ErrorKind::DecryptionFailure));
}

#[test]
fn test_two_sessions_with_peer_keys() {
    let config = SessionConfig {
        symmetric_mode: ModeKind::Ecb,
        allow_self_agreement: false,
    };
    let mut alice = Session::new(config);
    let mut bob = Session::new(config);

    let alice_pub = alice.generate(Algorithm::Ecc, 256).unwrap().public_key().to_transport().unwrap();
    let bob_pub = bob.generate(Algorithm::Ecc, 256).unwrap().public_key().to_transport().unwrap();

    alice
        .set_peer_public_key(PublicKey::from_transport(Algorithm::Ecc, &bob_pub).unwrap())
        .unwrap();
    bob.set_peer_public_key(PublicKey::from_transport(Algorithm::Ecc, &alice_pub).unwrap())
        .unwrap();

    let sealed = alice.encrypt(Algorithm::Ecc, SESSION_MESSAGE).unwrap();
    assert_eq!(bob.decrypt(Algorithm::Ecc, &sealed).unwrap(), SESSION_MESSAGE);

    bob.clear_peer_public_key();
    assert_eq!(
        bob.decrypt(Algorithm::Ecc, &sealed).unwrap_err(),
        SessionError::MissingPeerKey
    );
}

#[test]
fn test_session_errors_display() {
    assert_eq!(
        SessionError::MissingKeyPair(Algorithm::Rsa).to_string(),
        "no RSA key pair has been generated in this session"
    );
    let wrapped = SessionError::from(Error::PayloadTooLarge { max: 117, actual: 200 });
    assert!(wrapped.to_string().contains("117"));
}
