//! Performance benchmarks for marathon-map-lib
//!
//! Run with: cargo bench

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use geo::Point;
use marathon_map_lib::{
    CategorySelection, CuisineIndex, CuisineSelection, FilterState, MARKER_INTERVAL_METERS, Poi,
    PoiCategory, Route, filter_pois, place_markers,
};

/// Generate a realistic wiggly route with the specified number of points
fn generate_route(num_points: usize) -> Route {
    let points = (0..num_points)
        .map(|i| {
            let t = i as f64 / num_points as f64;
            let lat = 51.5 + t * 0.3 + (t * 50.0).sin() * 0.001;
            let lon = -0.1 + t * 0.3 + (t * 30.0).cos() * 0.001;
            Point::new(lon, lat)
        })
        .collect();
    Route::new(points).unwrap()
}

/// Generate POIs cycling through categories and cuisines
fn generate_pois(count: usize) -> Vec<Poi> {
    const CUISINES: [&str; 5] = ["Italian", "Japanese", "Kebab", "Burger", "Coffee"];
    (0..count)
        .map(|i| {
            let category = PoiCategory::from_code((i % 5) as i64);
            Poi {
                category,
                cuisine: (category == PoiCategory::FoodAndDrinks)
                    .then(|| CUISINES[(i / 5) % CUISINES.len()].to_owned()),
                name: Some(format!("poi {i}")),
                description: None,
                photo: None,
                location: None,
                position: Point::new(-0.1 + i as f64 * 1e-5, 51.5),
            }
        })
        .collect()
}

fn bench_marker_placement(c: &mut Criterion) {
    let mut group = c.benchmark_group("markers");

    for num_points in [1_000usize, 50_000] {
        let route = generate_route(num_points);
        group.throughput(Throughput::Elements(num_points as u64));
        group.bench_function(format!("place_markers_{num_points}"), |b| {
            b.iter(|| place_markers(&route, MARKER_INTERVAL_METERS));
        });
    }

    group.finish();
}

fn bench_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");

    let pois = generate_pois(10_000);
    group.throughput(Throughput::Elements(pois.len() as u64));

    let all = FilterState::new();
    group.bench_function("all_all", |b| {
        b.iter(|| filter_pois(&pois, &all));
    });

    let mut food = FilterState::new();
    food.set_category(CategorySelection::Only(PoiCategory::FoodAndDrinks));
    group.bench_function("food_and_drinks", |b| {
        b.iter(|| filter_pois(&pois, &food));
    });

    let mut cuisine = FilterState::new();
    cuisine.set_category(CategorySelection::Only(PoiCategory::FoodAndDrinks));
    cuisine.set_cuisine(CuisineSelection::only("Italian"));
    group.bench_function("specific_cuisine", |b| {
        b.iter(|| filter_pois(&pois, &cuisine));
    });

    group.finish();
}

fn bench_cuisine_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("cuisine_index");

    let pois = generate_pois(10_000);
    group.throughput(Throughput::Elements(pois.len() as u64));
    group.bench_function("build_10k", |b| {
        b.iter(|| CuisineIndex::build(&pois));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_marker_placement,
    bench_filtering,
    bench_cuisine_index,
);

criterion_main!(benches);
