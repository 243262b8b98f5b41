//! Article identifier generation

use chrono::Utc;
use uuid::Uuid;

const RANDOM_LEN: usize = 5;
const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate an article identifier.
///
/// The identifier is the current time in milliseconds written in base 36,
/// followed by five random base-36 characters. Collisions are unlikely but
/// not impossible, and the value is not suitable as a secret.
pub fn generate_identifier() -> String {
    let millis = Utc::now().timestamp_millis().max(0) as u128;
    let mut id = to_base36(millis);

    let mut random = Uuid::new_v4().as_u128();
    for _ in 0..RANDOM_LEN {
        id.push(DIGITS[(random % 36) as usize] as char);
        random /= 36;
    }

    id
}

fn to_base36(mut value: u128) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while value > 0 {
        digits.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}
