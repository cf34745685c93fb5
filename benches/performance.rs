use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tempfile::tempdir;
use wallet_tracker::{
    core::{AppState, Tracker},
    domain::{Category, Expense},
    ledger::{summarize, RecordStore, Wallet},
    storage::JsonFileStore,
};

fn build_sample_state(record_count: usize) -> AppState {
    let start_date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let records = (0..record_count)
        .map(|idx| {
            Expense::new(
                format!("Expense {idx}"),
                5.0 + (idx % 100) as f64,
                Category::ALL[idx % Category::ALL.len()],
                start_date + Duration::days((idx % 365) as i64),
            )
        })
        .collect();
    AppState::new(Wallet::new(1_000_000.0), RecordStore::from_records(records))
}

fn bench_summary(c: &mut Criterion) {
    let state = build_sample_state(black_box(10_000));

    c.bench_function("summarize_10k", |b| {
        b.iter(|| black_box(summarize(&state.records)))
    });
}

fn bench_storage_io(c: &mut Criterion) {
    let state = build_sample_state(black_box(10_000));
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("storage.json");
    let mut store = JsonFileStore::open(&path).expect("open store");

    c.bench_function("state_save_10k", |b| {
        b.iter(|| state.save(&mut store).expect("save state"))
    });

    c.bench_function("state_restore_10k", |b| {
        b.iter(|| {
            let store = JsonFileStore::open(&path).expect("reopen store");
            black_box(Tracker::restore(store, 0.0));
        })
    });
}

criterion_group!(benches, bench_summary, bench_storage_io);
criterion_main!(benches);
