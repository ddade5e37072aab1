//! Property-Based Tests for Store Module
//!
//! Uses proptest to check that every backend behaves as a last-write-wins
//! single-record table.

use proptest::prelude::*;

use crate::store::{FileTable, MemoryTable, Setting, SettingStore, SETTING_KEY};

// == Strategies ==
/// Generates stored user names
fn name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 _-]{1,64}".prop_map(|s| s)
}

fn table_name() -> Option<String> {
    Some("settings".to_string())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Last write wins: after any sequence of puts, get returns the final value
    // and only one record exists.
    #[test]
    fn prop_memory_last_write_wins(names in prop::collection::vec(name_strategy(), 1..20)) {
        let table = MemoryTable::new(table_name());

        tokio_test::block_on(async {
            for name in &names {
                table.put(Setting::last_user_name(name.as_str())).await.unwrap();
            }

            let stored = table.get(SETTING_KEY).await.unwrap();
            prop_assert_eq!(stored.map(|s| s.value), names.last().cloned());
            prop_assert_eq!(table.len().await, 1);
            Ok::<(), TestCaseError>(())
        })?;
    }

    // Reads never change what is stored.
    #[test]
    fn prop_memory_reads_are_stable(name in name_strategy(), reads in 1usize..10) {
        let table = MemoryTable::new(table_name());

        tokio_test::block_on(async {
            table.put(Setting::last_user_name(name.as_str())).await.unwrap();
            for _ in 0..reads {
                let stored = table.get(SETTING_KEY).await.unwrap();
                prop_assert_eq!(stored, Some(Setting::last_user_name(name.as_str())));
            }
            Ok::<(), TestCaseError>(())
        })?;
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    // The file backend round-trips arbitrary names through its JSON file.
    #[test]
    fn prop_file_last_write_wins(names in prop::collection::vec(name_strategy(), 1..5)) {
        let dir = tempfile::tempdir().unwrap();

        tokio_test::block_on(async {
            let table = FileTable::new(dir.path(), table_name());
            for name in &names {
                table.put(Setting::last_user_name(name.as_str())).await.unwrap();
            }

            let reopened = FileTable::new(dir.path(), table_name());
            let stored = reopened.get(SETTING_KEY).await.unwrap();
            prop_assert_eq!(stored.map(|s| s.value), names.last().cloned());
            Ok::<(), TestCaseError>(())
        })?;
    }
}
