/// Looks up user-facing strings by key.
///
/// Implementations return the key itself when no translation exists, so a
/// missing entry degrades to a visible identifier rather than an empty label.
pub trait Translate {
    fn translate(&self, key: &str) -> String;
}
