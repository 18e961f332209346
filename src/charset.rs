//! ASCII character classes shared by the composition rules and the generator pool.

pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*";

/// Generator pool: ASCII uppercase, lowercase, digits and
/// [`SPECIAL_CHARACTERS`], 70 symbols in total.
pub(crate) const POOL: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                                 abcdefghijklmnopqrstuvwxyz\
                                 0123456789\
                                 !@#$%^&*";

pub fn is_special(c: char) -> bool {
    SPECIAL_CHARACTERS.contains(c)
}
