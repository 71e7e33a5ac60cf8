//! Repository Integration Tests
//!
//! Tests for TodoStore and IdAllocator over in-memory storage.

#[cfg(test)]
mod tests {
    use crate::config::SEQUENCE_KEY;
    use crate::domain::{StoreError, StoreResult, Todo, TodoItem};
    use crate::repository::{IdAllocator, KeyValueStorage, MemoryStorage, TodoStore};

    fn setup_store() -> TodoStore<MemoryStorage> {
        TodoStore::new(MemoryStorage::new())
    }

    fn groceries(id: u32) -> Todo {
        Todo::new(
            id,
            "Groceries",
            vec![TodoItem::new("milk", false), TodoItem::new("bread", true)],
            "2024-03-01 09:15",
        )
    }

    /// Storage whose writes always fail
    struct ReadOnlyStorage;

    impl KeyValueStorage for ReadOnlyStorage {
        fn len(&self) -> StoreResult<usize> {
            Ok(0)
        }
        fn key(&self, _index: usize) -> StoreResult<Option<String>> {
            Ok(None)
        }
        fn get(&self, _key: &str) -> StoreResult<Option<String>> {
            Ok(None)
        }
        fn set(&self, _key: &str, _value: &str) -> StoreResult<()> {
            Err(StoreError::Backend("quota exceeded".into()))
        }
        fn remove(&self, _key: &str) -> StoreResult<()> {
            Err(StoreError::Backend("read only".into()))
        }
    }

    #[test]
    fn test_put_then_get_by_id() {
        let store = setup_store();
        let todo = groceries(1);

        store.put(&todo).expect("Failed to put");

        let found = store.get_by_id("1").expect("Todo should be stored");
        assert_eq!(found, todo);
    }

    #[test]
    fn test_put_overwrites_same_id() {
        let store = setup_store();
        store.put(&groceries(1)).unwrap();

        let mut renamed = groceries(1);
        renamed.title = "Hardware store".to_string();
        store.put(&renamed).unwrap();

        assert_eq!(store.count(), 1);
        assert_eq!(store.get_by_id("1").unwrap().title, "Hardware store");
    }

    #[test]
    fn test_put_without_id_is_rejected() {
        let store = setup_store();
        let todo = Todo::new(0, "No id", Vec::new(), "");

        let result = store.put(&todo);

        assert!(matches!(result, Err(StoreError::InvalidInput(_))));
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_put_drops_blank_items() {
        let store = setup_store();
        let mut todo = Todo::new(1, "Errands", vec![TodoItem::new("buy milk", true)], "2024-03-01 09:15");
        todo.items.insert(0, TodoItem::new("", false));

        store.put(&todo).unwrap();

        let found = store.get_by_id("1").unwrap();
        assert_eq!(found.items, vec![TodoItem::new("buy milk", true)]);
    }

    #[test]
    fn test_get_all_counts_distinct_ids() {
        let store = setup_store();
        for id in [1, 2, 2, 3, 1] {
            store.put(&groceries(id)).unwrap();
        }

        let all = store.get_all();
        assert_eq!(all.len(), 3);
        assert!(all.contains_key("2"));
    }

    #[test]
    fn test_get_all_skips_malformed_records() {
        let store = setup_store();
        store.put(&groceries(1)).unwrap();
        store.storage().set("2", "{not json").unwrap();

        let all = store.get_all();
        assert_eq!(all.len(), 1);
        assert!(all.contains_key("1"));
        // Malformed text is still a record as far as the count goes
        assert_eq!(store.count(), 2);
    }

    #[test]
    fn test_list_orders_by_id() {
        let store = setup_store();
        for id in [10, 2, 1] {
            store.put(&groceries(id)).unwrap();
        }

        let ids: Vec<u32> = store.list().iter().map(|todo| todo.id).collect();
        assert_eq!(ids, vec![1, 2, 10]);
    }

    #[test]
    fn test_remove_then_get_by_id() {
        let store = setup_store();
        store.put(&groceries(1)).unwrap();

        store.remove("1").expect("Remove failed");

        assert!(store.get_by_id("1").is_none());
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_remove_missing_and_empty_keys() {
        let store = setup_store();
        assert!(store.remove("42").is_ok());
        assert!(matches!(store.remove(""), Err(StoreError::InvalidInput(_))));
    }

    #[test]
    fn test_count_after_puts() {
        let store = setup_store();
        for id in 1..=5 {
            store.put(&groceries(id)).unwrap();
        }
        assert_eq!(store.count(), 5);
    }

    #[test]
    fn test_get_by_id_misses() {
        let store = setup_store();
        assert!(store.get_by_id("nonexistent-key").is_none());
        assert!(store.get_by_id("").is_none());

        store.storage().set("5", "[1, 2").unwrap();
        assert!(store.get_by_id("5").is_none());
    }

    #[test]
    fn test_create_first_todo_on_empty_store() {
        let store = setup_store();
        let mut ids = IdAllocator::resume(&store);

        let id = ids.allocate(&store).unwrap();
        let todo = Todo::new(id, "Groceries", vec![TodoItem::new("milk", false)], "2024-03-01 09:15");
        store.put(&todo).unwrap();

        assert_eq!(store.count(), 1);
        assert_eq!(store.get_by_id("1").unwrap().title, "Groceries");
    }

    #[test]
    fn test_sequence_key_is_not_a_record() {
        let store = setup_store();
        let mut ids = IdAllocator::resume(&store);
        let id = ids.allocate(&store).unwrap();
        store.put(&groceries(id)).unwrap();

        assert_eq!(store.storage().get(SEQUENCE_KEY).unwrap().as_deref(), Some("1"));
        assert_eq!(store.count(), 1);
        assert!(!store.get_all().contains_key(SEQUENCE_KEY));
    }

    #[test]
    fn test_allocator_never_reuses_after_delete() {
        let store = setup_store();
        let mut ids = IdAllocator::resume(&store);
        for _ in 0..3 {
            let id = ids.allocate(&store).unwrap();
            store.put(&groceries(id)).unwrap();
        }

        store.remove("3").unwrap();
        store.remove("1").unwrap();

        // A fresh session must not hand out 3 again
        let mut resumed = IdAllocator::resume(&store);
        assert_eq!(resumed.allocate(&store), Some(4));
        assert!(store.get_by_id("2").is_some());
    }

    #[test]
    fn test_allocator_resumes_past_unsequenced_records() {
        let store = setup_store();
        store.put(&groceries(7)).unwrap();
        store.put(&groceries(2)).unwrap();

        let mut ids = IdAllocator::resume(&store);
        assert_eq!(ids.last(), 7);
        assert_eq!(ids.allocate(&store), Some(8));
    }

    #[test]
    fn test_allocator_stops_at_id_space_end() {
        let store = setup_store();
        store.storage().set("4294967295", r#"{"id":4294967295}"#).unwrap();

        let mut ids = IdAllocator::resume(&store);
        assert_eq!(ids.last(), u32::MAX);
        assert_eq!(ids.allocate(&store), None);
        assert_eq!(ids.last(), u32::MAX);
        assert!(store.storage().get(SEQUENCE_KEY).unwrap().is_none());
    }

    #[test]
    fn test_allocator_stops_at_sequence_end() {
        let store = setup_store();
        store.storage().set(SEQUENCE_KEY, "4294967295").unwrap();

        let mut ids = IdAllocator::resume(&store);
        assert_eq!(ids.allocate(&store), None);
    }

    #[test]
    fn test_records_without_id_take_their_key() {
        let store = setup_store();
        store.storage().set("1", r#"{"title":"a"}"#).unwrap();
        store.storage().set("2", r#"{"title":"b"}"#).unwrap();

        let ids: Vec<u32> = store.list().iter().map(|todo| todo.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(store.get_by_id("2").unwrap().id, 2);
    }

    #[test]
    fn test_record_id_mismatch_uses_key() {
        let store = setup_store();
        store.storage().set("3", r#"{"id":9,"title":"moved"}"#).unwrap();
        store.storage().set("9", r#"{"id":9,"title":"original"}"#).unwrap();

        let listed: Vec<(u32, String)> = store.list().into_iter().map(|todo| (todo.id, todo.title)).collect();
        assert_eq!(listed, vec![(3, "moved".to_string()), (9, "original".to_string())]);
        assert_eq!(store.get_by_id("3").unwrap().id, 3);
    }

    #[test]
    fn test_allocator_ignores_malformed_sequence() {
        let store = setup_store();
        store.storage().set(SEQUENCE_KEY, "many").unwrap();
        store.put(&groceries(3)).unwrap();

        let ids = IdAllocator::resume(&store);
        assert_eq!(ids.last(), 3);
    }

    #[test]
    fn test_backend_write_failure_is_reported() {
        let store = TodoStore::new(ReadOnlyStorage);

        let result = store.put(&groceries(1));

        assert!(matches!(result, Err(StoreError::Backend(_))));
        assert!(store.remove("1").is_err());
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_allocator_survives_failed_sequence_write() {
        let store = TodoStore::new(ReadOnlyStorage);
        let mut ids = IdAllocator::resume(&store);

        assert_eq!(ids.allocate(&store), Some(1));
        assert_eq!(ids.allocate(&store), Some(2));
    }
}
