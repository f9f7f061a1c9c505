use rawhttp::network::error::Error;
use rawhttp::network::prelude::*;
use rawhttp::network::{receive_all, send_all};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;


fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// What happened on a mock connection, kept outside the connection so tests
/// can inspect it after `close` has consumed it.
#[derive(Debug, Default)]
struct Wire {
    written: Vec<u8>,
    flushes: usize,
    closes: usize,
}

impl Wire {
    fn written_text(&self) -> String {
        String::from_utf8(self.written.clone()).unwrap()
    }
}

#[derive(Debug)]
struct MockConnection {
    reads: VecDeque<Result<Vec<u8>, Error>>,
    max_write: usize,
    wire: Rc<RefCell<Wire>>,
}

impl MockConnection {
    fn new(wire: Rc<RefCell<Wire>>) -> Self {
        Self {
            reads: VecDeque::new(),
            max_write: usize::MAX,
            wire,
        }
    }

    /// Queues one chunk to be returned by a single `read`.
    fn push_read(&mut self, data: &[u8]) {
        self.reads.push_back(Ok(data.to_vec()));
    }

    fn push_read_error(&mut self, error: Error) {
        self.reads.push_back(Err(error));
    }
}

impl Read for MockConnection {
    type Error = Error;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        match self.reads.pop_front() {
            // Script exhausted: the peer has closed.
            None => Ok(0),
            Some(Err(e)) => Err(e),
            Some(Ok(mut chunk)) => {
                let len = buf.len().min(chunk.len());
                buf[..len].copy_from_slice(&chunk[..len]);
                if len < chunk.len() {
                    self.reads.push_front(Ok(chunk.split_off(len)));
                }
                Ok(len)
            }
        }
    }
}

impl Write for MockConnection {
    type Error = Error;

    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        let len = buf.len().min(self.max_write);
        self.wire.borrow_mut().written.extend_from_slice(&buf[..len]);
        Ok(len)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.wire.borrow_mut().flushes += 1;
        Ok(())
    }
}

impl Close for MockConnection {
    type Error = Error;

    fn close(self) -> Result<(), Self::Error> {
        self.wire.borrow_mut().closes += 1;
        Ok(())
    }
}

impl Connection for MockConnection {}

/// Hands out pre-scripted connections and records where they were opened.
#[derive(Debug, Default)]
struct MockNetwork {
    scripted: VecDeque<MockConnection>,
    opened: Vec<(String, u16)>,
}

impl MockNetwork {
    /// Scripts a connection whose peer answers with `chunks` and then closes.
    fn respond_with(&mut self, chunks: &[&[u8]]) -> Rc<RefCell<Wire>> {
        let wire = Rc::new(RefCell::new(Wire::default()));
        let mut conn = MockConnection::new(wire.clone());
        for chunk in chunks {
            conn.push_read(chunk);
        }
        self.scripted.push_back(conn);
        wire
    }

    /// Scripts a connection that fails with `error` after sending `chunks`.
    fn fail_with(&mut self, chunks: &[&[u8]], error: Error) -> Rc<RefCell<Wire>> {
        let wire = self.respond_with(chunks);
        if let Some(conn) = self.scripted.back_mut() {
            conn.push_read_error(error);
        }
        wire
    }
}

impl Connect for MockNetwork {
    type Connection = MockConnection;
    type Error = Error;

    fn connect(&mut self, host: &str, port: u16) -> Result<Self::Connection, Self::Error> {
        self.opened.push((host.to_string(), port));
        self.scripted.pop_front().ok_or(Error::ConnectionRefused)
    }
}

#[test]
fn test_receive_all_concatenates_chunks() {
    let wire = Rc::new(RefCell::new(Wire::default()));
    let mut conn = MockConnection::new(wire);
    conn.push_read(b"ab");
    conn.push_read(b"cd");

    assert_eq!(receive_all(&mut conn, 1024).unwrap(), "abcd");
}

#[test]
fn test_receive_all_small_chunks() {
    let wire = Rc::new(RefCell::new(Wire::default()));
    let mut conn = MockConnection::new(wire);
    conn.push_read(b"HTTP/1.1 200 OK\r\n\r\nbody");

    assert_eq!(receive_all(&mut conn, 3).unwrap(), "HTTP/1.1 200 OK\r\n\r\nbody");
}

#[test]
fn test_receive_all_empty_stream() {
    let wire = Rc::new(RefCell::new(Wire::default()));
    let mut conn = MockConnection::new(wire);

    assert_eq!(receive_all(&mut conn, 1024).unwrap(), "");
}

#[test]
fn test_receive_all_multibyte_split_across_reads() {
    let wire = Rc::new(RefCell::new(Wire::default()));
    let mut conn = MockConnection::new(wire);
    let text = "naïve".as_bytes();
    conn.push_read(&text[..3]);
    conn.push_read(&text[3..]);

    assert_eq!(receive_all(&mut conn, 1024).unwrap(), "naïve");
}

#[test]
fn test_receive_all_invalid_utf8_is_replaced() {
    let wire = Rc::new(RefCell::new(Wire::default()));
    let mut conn = MockConnection::new(wire);
    conn.push_read(&[b'o', b'k', 0xFF]);

    assert_eq!(receive_all(&mut conn, 1024).unwrap(), "ok\u{FFFD}");
}

#[test]
fn test_receive_all_read_error() {
    let wire = Rc::new(RefCell::new(Wire::default()));
    let mut conn = MockConnection::new(wire);
    conn.push_read(b"partial");
    conn.push_read_error(Error::Timeout);

    assert_eq!(receive_all(&mut conn, 1024), Err(Error::ReadError));
}

#[test]
fn test_send_all_retries_partial_writes() {
    let wire = Rc::new(RefCell::new(Wire::default()));
    let mut conn = MockConnection::new(wire.clone());
    conn.max_write = 3;

    send_all(&mut conn, b"GET / HTTP/1.1\r\n\r\n").unwrap();

    let wire = wire.borrow();
    assert_eq!(wire.written_text(), "GET / HTTP/1.1\r\n\r\n");
    assert_eq!(wire.flushes, 1);
}

#[test]
fn test_send_all_zero_length_write() {
    let wire = Rc::new(RefCell::new(Wire::default()));
    let mut conn = MockConnection::new(wire.clone());
    conn.max_write = 0;

    assert_eq!(send_all(&mut conn, b"data"), Err(Error::WriteError));
    assert_eq!(wire.borrow().flushes, 0);
}

#[test]
fn test_connect_and_close() {
    let mut network = MockNetwork::default();
    let wire = network.respond_with(&[]);
    let conn = network.connect("example.com", 80).unwrap();
    conn.close().unwrap();

    assert_eq!(network.opened, vec![("example.com".to_string(), 80)]);
    assert_eq!(wire.borrow().closes, 1);
}

#[test]
fn test_error_display() {
    assert_eq!(Error::ConnectionRefused.to_string(), "connection refused");
    assert_eq!(Error::ReadError.to_string(), "failed to read from connection");
}
