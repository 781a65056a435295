//! Reproducible key material and messages

use msgseal_api::Algorithm;
use msgseal_kem::{AsymmetricKeyPair, KeyPairFactory};
use once_cell::sync::Lazy;
use rand::distributions::Alphanumeric;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing_subscriber::EnvFilter;

/// Message used by the RSA scenarios
pub const RSA_MESSAGE: &str = "Hello, World!";

/// Message used by the elliptic-curve scenarios
pub const ECC_MESSAGE: &str = "This is a test message for Elliptic Curve Cryptography.";

/// Message used by the session scenarios
pub const SESSION_MESSAGE: &str = "This is a secret message for testing.";

/// Deterministic CSPRNG for fixtures
pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// Alphanumeric text of exactly `len` bytes
pub fn random_message<R: Rng>(rng: &mut R, len: usize) -> String {
    rng.sample_iter(&Alphanumeric).take(len).map(char::from).collect()
}

/// Installs a test-writer subscriber once; `RUST_LOG` controls the level.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_test_writer()
        .try_init();
}

fn seeded_rsa(bits: u32) -> AsymmetricKeyPair {
    let mut rng = seeded_rng(u64::from(bits));
    match KeyPairFactory::generate_with_rng(Algorithm::Rsa, bits, &mut rng) {
        Ok(pair) => pair,
        Err(e) => panic!("RSA-{} fixture generation failed: {}", bits, e),
    }
}

static RSA_1024: Lazy<AsymmetricKeyPair> = Lazy::new(|| seeded_rsa(1024));
static RSA_2048: Lazy<AsymmetricKeyPair> = Lazy::new(|| seeded_rsa(2048));
static RSA_4096: Lazy<AsymmetricKeyPair> = Lazy::new(|| seeded_rsa(4096));

/// Cached RSA key pair for one of the offered modulus sizes.
///
/// # Panics
/// For sizes other than 1024, 2048 and 4096.
pub fn rsa_pair(bits: u32) -> &'static AsymmetricKeyPair {
    match bits {
        1024 => Lazy::force(&RSA_1024),
        2048 => Lazy::force(&RSA_2048),
        4096 => Lazy::force(&RSA_4096),
        other => panic!("no cached RSA fixture for {} bits", other),
    }
}
