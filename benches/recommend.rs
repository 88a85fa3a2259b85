use criterion::{black_box, criterion_group, criterion_main, Criterion};
use savora_core::FlatIndex;
use savora_engine::{Narrator, Query, RecommendEngine, TextEmbedder, DEFAULT_EMBED_DIM};
use savora_store::{CatalogEntry, CatalogStore, RawEntry};

const CATALOG_SIZE: usize = 10_000;

fn build_engine() -> RecommendEngine {
    let cuisines = ["North Indian", "Italian", "Chinese", "Cafe", "Microbrewery"];
    let locations = ["Koramangala", "Indiranagar", "HSR", "Jayanagar", "BTM"];

    // Every tenth entry reuses a name so deduplication has work to do.
    let entries: Vec<CatalogEntry> = (0..CATALOG_SIZE)
        .map(|i| {
            CatalogEntry::from_raw(RawEntry {
                name: Some(format!("Restaurant {}", i / 10 * 10)),
                cuisine: Some(cuisines[i % cuisines.len()].to_string()),
                location: Some(locations[i % locations.len()].to_string()),
                rating: Some("4.0".to_string()),
                cost: Some("800".to_string()),
                ..RawEntry::default()
            })
        })
        .collect();

    let embedder = TextEmbedder::new(DEFAULT_EMBED_DIM);
    let mut index = FlatIndex::new(DEFAULT_EMBED_DIM).unwrap();
    for entry in &entries {
        index.add(&embedder.embed(&entry.embedding_text())).unwrap();
    }

    RecommendEngine::new(
        CatalogStore::from_entries(entries),
        index,
        embedder,
        Narrator::disabled(),
    )
    .unwrap()
}

fn bench_index_search(c: &mut Criterion) {
    let embedder = TextEmbedder::new(DEFAULT_EMBED_DIM);
    let mut index = FlatIndex::new(DEFAULT_EMBED_DIM).unwrap();
    for i in 0..CATALOG_SIZE {
        index
            .add(&embedder.embed(&format!("Restaurant {i} in Koramangala")))
            .unwrap();
    }
    let query = embedder.embed("italian food in koramangala");

    c.bench_function("flat_index_search_10k", |b| {
        b.iter(|| index.search(black_box(&query), 15).unwrap())
    });
}

fn bench_recommend(c: &mut Criterion) {
    let engine = build_engine();
    let rt = tokio::runtime::Runtime::new().unwrap();
    let query = Query::new("italian food in koramangala", 5);

    c.bench_function("recommend_top5_10k_catalog", |b| {
        b.iter(|| {
            rt.block_on(engine.recommend(black_box(&query))).unwrap()
        })
    });
}

criterion_group!(benches, bench_index_search, bench_recommend);
criterion_main!(benches);
