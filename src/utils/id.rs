use ulid::Ulid;

pub const ID_LENGTH: usize = 24;

/// 12 bytes rendered as 24 hex characters: the 48-bit millisecond timestamp
/// of a ULID followed by 48 of its random bits.
pub fn generate() -> String {
    let bytes = Ulid::new().to_bytes();
    hex::encode(&bytes[..ID_LENGTH / 2])
}

pub fn is_valid(id: &str) -> bool {
    id.len() == ID_LENGTH && id.chars().all(|c| c.is_ascii_hexdigit())
}

/// Ids are stored in lowercase, so uppercase hex from a request is folded.
pub fn parse(raw: &str) -> Option<String> {
    match is_valid(raw) {
        true => Some(raw.to_ascii_lowercase()),
        false => None,
    }
}
