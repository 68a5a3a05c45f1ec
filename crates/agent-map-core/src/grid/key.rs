use std::collections::BTreeMap;

use tracing::warn;

use crate::error::Result;

/// Lowercase and drop everything but ASCII letters and digits.
pub(crate) fn normalize_key(key: &str) -> String {
    key.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Resolve stored map keys to enum values, dropping unknown keys.
///
/// Entries come back ordered by enum value, with the exact display name
/// ahead of other spellings of the same key.
pub(crate) fn resolve_keys<K, V>(
    raw: BTreeMap<String, V>,
    from_key: impl Fn(&str) -> Result<K>,
    name: impl Fn(&K) -> &'static str,
    kind: &str,
) -> Vec<(K, String, V)>
where
    K: Copy + Ord,
{
    let mut entries: Vec<(K, String, V)> = raw
        .into_iter()
        .filter_map(|(key, value)| match from_key(&key) {
            Ok(resolved) => Some((resolved, key, value)),
            Err(_) => {
                warn!("Ignoring unknown {} key {:?}", kind, key);
                None
            }
        })
        .collect();
    entries.sort_by_key(|(resolved, key, _)| (*resolved, key.as_str() != name(resolved)));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Segment;

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key(" Private-Resale "), "privateresale");
        assert_eq!(normalize_key("Indus/Comm"), "induscomm");
    }

    #[test]
    fn test_resolve_keys_orders_exact_name_first() {
        let raw: BTreeMap<String, u32> = [("hdb", 1), ("Landed", 2), ("HDB", 3), ("Condo", 4)]
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect();
        let resolved = resolve_keys(raw, Segment::from_key, Segment::name, "segment");
        let values: Vec<(Segment, u32)> = resolved
            .into_iter()
            .map(|(segment, _, value)| (segment, value))
            .collect();
        assert_eq!(
            values,
            vec![(Segment::Hdb, 3), (Segment::Hdb, 1), (Segment::Landed, 2)]
        );
    }
}
