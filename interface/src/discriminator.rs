use sha2::{
    Digest,
    Sha256,
};

/// First eight bytes of `sha256("{namespace}:{name}")`.
///
/// The program prefixes every account and instruction payload with this hash,
/// so readers can tell record kinds apart before deserializing anything.
pub fn discriminator(namespace: &str, name: &str) -> [u8; 8] {
    let preimage = format!("{namespace}:{name}");
    let hash = Sha256::digest(preimage.as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&hash[..8]);
    bytes
}
