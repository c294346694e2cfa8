use mzcache::{Cache, CacheConfig, Lookup};
use proptest::prelude::*;
use tempfile::TempDir;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn write_then_read_returns_value(key in ".*", value in "\\PC{1,256}") {
        let temp_dir = TempDir::new().unwrap();
        let cache = Cache::new(CacheConfig::with_cache_dir(temp_dir.path())).unwrap();

        cache.write(&key, &value).unwrap();
        prop_assert_eq!(cache.read(&key, 1).unwrap(), value.clone());
        prop_assert_eq!(cache.lookup(&key, 7).unwrap(), Lookup::Hit(value));
    }

    #[test]
    fn resolve_is_a_pure_function_of_root_and_key(key in ".*") {
        let temp_dir = TempDir::new().unwrap();
        let cache = Cache::new(CacheConfig::with_cache_dir(temp_dir.path())).unwrap();

        let first = cache.resolve(&key);
        let second = cache.resolve(&key);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.hash_key.len(), 64);
        prop_assert!(first.shard_dir.starts_with(temp_dir.path()));
        prop_assert!(first.entry_file.starts_with(&first.shard_dir));
    }

    #[test]
    fn empty_value_never_creates_files(key in ".*") {
        let temp_dir = TempDir::new().unwrap();
        let cache = Cache::new(CacheConfig::with_cache_dir(temp_dir.path())).unwrap();

        prop_assert!(cache.write(&key, "").is_err());
        prop_assert!(!cache.resolve(&key).shard_dir.exists());
    }
}
