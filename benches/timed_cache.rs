//! Benchmarks for the timed cache hot path.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use criterion::{criterion_group, criterion_main, Criterion};

use petclinic::domain::errors::DomainResult;
use petclinic::{CacheLoader, TimedCache};

struct StaticLoader;

#[async_trait]
impl CacheLoader<i64, String> for StaticLoader {
    async fn load(&self, key: &i64) -> DomainResult<Option<String>> {
        Ok(Some(format!("pet-{key}")))
    }
}

fn bench_cache_hit(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().expect("runtime");
    let cache = Arc::new(TimedCache::new(
        Arc::new(StaticLoader),
        Duration::from_secs(3600),
    ));
    rt.block_on(cache.save(1, "pet-1".to_string()));

    c.bench_function("timed_cache_hit", |b| {
        b.to_async(&rt).iter(|| {
            let cache = Arc::clone(&cache);
            async move { cache.get(&1).await.unwrap() }
        });
    });
}

fn bench_cache_save(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().expect("runtime");
    let cache = Arc::new(TimedCache::new(
        Arc::new(StaticLoader),
        Duration::from_secs(3600),
    ));

    c.bench_function("timed_cache_save", |b| {
        b.to_async(&rt).iter(|| {
            let cache = Arc::clone(&cache);
            async move { cache.save(1, "pet-1".to_string()).await }
        });
    });
}

criterion_group!(benches, bench_cache_hit, bench_cache_save);
criterion_main!(benches);
