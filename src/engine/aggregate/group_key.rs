/// Returns the value only when it is present and non-empty.
#[inline]
pub fn required(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Builds a two-part key, rejecting the record if either part is missing or empty.
pub fn pair_key(first: Option<&str>, second: Option<&str>) -> Option<(String, String)> {
    let first = required(first)?;
    let second = required(second)?;
    Some((first.to_string(), second.to_string()))
}
