use std::{hint::black_box, time::Duration};

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use geo::Coordinates;
use uuid::Uuid;
use venues_models::Venue;
use venues_queries::{PageRequest, SortField, SortSpec, VenueFilterQuery};

/// `count` venues spread over the seeded cities with unique ids.
fn venues(count: usize) -> Vec<Venue> {
    let seed = seeders::sample_venues();
    (0..count)
        .map(|i| {
            let mut venue = seed[i % seed.len()].clone();
            venue.id = Uuid::from_u128(i as u128 + 1);
            venue.name = format!("{} #{i}", venue.name);
            venue.lat += (i % 100) as f64 * 0.001;
            venue.lng -= (i % 50) as f64 * 0.001;
            venue
        })
        .collect()
}

fn benchmark_search(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
    let mut group = c.benchmark_group("venue_search");
    group.measurement_time(Duration::from_secs(10));

    for size in [100, 1_000, 10_000].iter() {
        let venues = venues(*size);

        let city = VenueFilterQuery::builder()
            .location("BUCHAREST")
            .sort(SortSpec::desc(SortField::Rating))
            .build()
            .with_filter_tokens(["live-music", "open-now"]);
        group.bench_with_input(
            BenchmarkId::new("city_tags_open_now", size),
            &venues,
            |b, venues| {
                b.iter(|| black_box(venues_search::search(venues, &city, today)))
            },
        );

        let near_me = VenueFilterQuery::builder()
            .location("NEAR_ME")
            .user_location(Coordinates::new(44.4268, 26.1025))
            .page(PageRequest::new(1, 20))
            .build();
        group.bench_with_input(
            BenchmarkId::new("near_me_first_page", size),
            &venues,
            |b, venues| {
                b.iter(|| {
                    black_box(venues_search::search(venues, &near_me, today))
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("nearby_5km", size),
            &venues,
            |b, venues| {
                b.iter(|| {
                    black_box(venues_search::nearby(
                        venues,
                        Coordinates::new(44.4268, 26.1025),
                        5.0,
                    ))
                })
            },
        );
    }

    group.finish();
}

criterion_group!(search_benches, benchmark_search);
criterion_main!(search_benches);
