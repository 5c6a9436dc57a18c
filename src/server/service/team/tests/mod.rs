use touchline_test_utils::prelude::*;

use crate::server::cache::{AppCache, MemoryCache};

mod get_team;

fn memory_cache() -> AppCache {
    AppCache::Memory(MemoryCache::default())
}
