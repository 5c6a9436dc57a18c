use touchline_test_utils::prelude::*;

use crate::server::cache::{AppCache, MemoryCache};


fn memory_cache() -> AppCache {
    AppCache::Memory(MemoryCache::default())
}
