use criterion::{criterion_group, criterion_main};

mod network;

criterion_group!(
    benches,
    network::application::http::client::bench_build_request,
    network::application::http::client::bench_parse_response,
    network::application::http::client::bench_get_round_trip
);
criterion_main!(benches);
