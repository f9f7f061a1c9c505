use criterion::{Criterion, Throughput};
use std::hint::black_box;
use rawhttp::network::application::http::{Client, ParsedUrl, Request, Response, USER_AGENT};
use rawhttp::network::error::Error;
use rawhttp::network::{Close, Connect, Connection, Read, Write};

const FORM: &[(&str, &str)] = &[
    ("device", "sensor 01"),
    ("reading", "23.5/24.0"),
    ("note", "calibrated & verified"),
];

/// A connection that replays a fixed response and discards what is written.
struct ReplayConnection {
    response: &'static [u8],
    pos: usize,
}

impl Read for ReplayConnection {
    type Error = Error;
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let remaining = &self.response[self.pos..];
        let len = buf.len().min(remaining.len());
        buf[..len].copy_from_slice(&remaining[..len]);
        self.pos += len;
        Ok(len)
    }
}

impl Write for ReplayConnection {
    type Error = Error;
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl Close for ReplayConnection {
    type Error = Error;
    fn close(self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl Connection for ReplayConnection {}

struct ReplayNetwork {
    response: &'static [u8],
}

impl Connect for ReplayNetwork {
    type Connection = ReplayConnection;
    type Error = Error;
    fn connect(&mut self, _host: &str, _port: u16) -> Result<Self::Connection, Self::Error> {
        Ok(ReplayConnection {
            response: self.response,
            pos: 0,
        })
    }
}

fn sample_response() -> String {
    let body = "value%3D42%20units%26more ".repeat(256);
    format!(
        "HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: {}\r\n\r\n{}",
        body.len(),
        body
    )
}

pub fn bench_build_request(c: &mut Criterion) {
    let url = ParsedUrl::parse("http://example.com:8080/api/readings").unwrap();
    let endpoint = url.endpoint().unwrap();
    let mut group = c.benchmark_group("build_request");
    group.bench_function("post_form", |b| {
        b.iter(|| {
            let request =
                Request::post(black_box(&url), &endpoint, Some(black_box(FORM)), USER_AGENT).unwrap();
            black_box(request.to_bytes())
        })
    });
    group.finish();
}

pub fn bench_parse_response(c: &mut Criterion) {
    let raw = sample_response();
    let mut group = c.benchmark_group("parse_response");
    group.throughput(Throughput::Bytes(raw.len() as u64));
    group.bench_function("parse", |b| b.iter(|| Response::parse(black_box(&raw))));
    group.finish();
}

pub fn bench_get_round_trip(c: &mut Criterion) {
    let raw: &'static [u8] = Box::leak(sample_response().into_bytes().into_boxed_slice());
    let mut group = c.benchmark_group("get_round_trip");
    group.throughput(Throughput::Bytes(raw.len() as u64));
    group.bench_function("get", |b| {
        let mut client = Client::new(ReplayNetwork { response: raw });
        b.iter(|| {
            let response = client
                .get(black_box("http://example.com/api/readings"), Some(FORM))
                .unwrap();
            assert_eq!(response.code, 200);
        })
    });
    group.finish();
}
