//! Store Module Tests
//!
//! Validates the result store mechanics the pipeline depends on.
//!
//! ## Test Scopes
//! - **Basic operations**: set/get/overwrite and missing keys.
//! - **Snapshot**: point-in-time copy semantics.
//! - **Retention**: entries survive across submissions; nothing resets them.
//! - **Concurrency**: disjoint-key writers never corrupt or lose entries.

#[cfg(test)]
mod tests {
    use crate::store::memory::ResultStore;
    use std::sync::Arc;

    // ============================================================
    // BASIC OPERATIONS
    // ============================================================

    #[test]
    fn test_set_and_get() {
        let store = ResultStore::new();

        store.set("letterCount", "17".to_string());

        assert_eq!(store.get("letterCount"), Some("17".to_string()));
    }

    #[test]
    fn test_get_missing_key() {
        let store = ResultStore::new();
        assert_eq!(store.get("speedup"), None);
    }

    #[test]
    fn test_set_overwrites_in_place() {
        let store = ResultStore::new();

        store.set("longestWord", "alpha".to_string());
        store.set("longestWord", "beta".to_string());

        assert_eq!(store.get("longestWord"), Some("beta".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = ResultStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    // ============================================================
    // SNAPSHOT SEMANTICS
    // ============================================================

    #[test]
    fn test_snapshot_contains_all_entries() {
        let store = ResultStore::new();
        store.set("a", "1".to_string());
        store.set("b", "2".to_string());

        let snapshot = store.snapshot();

        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.get("a"), Some(&"1".to_string()));
        assert_eq!(snapshot.get("b"), Some(&"2".to_string()));
    }

    #[test]
    fn test_snapshot_is_a_point_in_time_copy() {
        let store = ResultStore::new();
        store.set("a", "1".to_string());

        let snapshot = store.snapshot();
        store.set("a", "2".to_string());
        store.set("b", "3".to_string());

        // The copy does not observe later writes
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.get("a"), Some(&"1".to_string()));
    }

    // ============================================================
    // RETENTION ACROSS CALLS
    // ============================================================

    #[test]
    fn test_entries_are_retained_not_reset() {
        let store = ResultStore::new();

        // First submission writes one set of keys
        store.set("letterCount", "17".to_string());
        store.set("longestWord", "the".to_string());

        // A later submission touching only one key leaves the other stale
        store.set("letterCount", "0".to_string());

        assert_eq!(store.get("letterCount"), Some("0".to_string()));
        assert_eq!(store.get("longestWord"), Some("the".to_string()));
    }

    // ============================================================
    // CONCURRENT DISJOINT-KEY WRITERS
    // ============================================================

    #[tokio::test]
    async fn test_concurrent_writers_on_disjoint_keys() {
        let store = Arc::new(ResultStore::new());
        let keys = ["k0", "k1", "k2", "k3", "k4"];

        let mut handles = Vec::new();
        for key in keys {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                for round in 0..100 {
                    store.set(key, format!("{}-{}", key, round));
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        // Every writer's last value survived; nothing was lost or crossed
        for key in keys {
            assert_eq!(store.get(key), Some(format!("{}-99", key)));
        }
        assert_eq!(store.len(), keys.len());
    }
}
