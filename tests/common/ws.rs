//! Minimal WebSocket client over a raw TCP stream.
//!
//! Enough of RFC 6455 to drive `/lookup` from tests: the upgrade handshake,
//! masked client text frames and unmasked server frames.

use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;

use chromatch::server::{build_router, AppState};

const OPCODE_TEXT: u8 = 0x1;
const OPCODE_CLOSE: u8 = 0x8;
const MASK: [u8; 4] = [0x37, 0xfa, 0x21, 0x3d];

/// Start a real server on an available port and return the port number.
pub async fn start_test_server(state: AppState) -> u16 {
    let app = build_router(state);

    // Bind to port 0 to get an available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let port = listener.local_addr().unwrap().port();

    // Spawn the server in the background
    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    port
}

/// One frame received from the server
#[derive(Debug)]
pub struct Frame {
    pub opcode: u8,
    pub payload: Vec<u8>,
}

impl Frame {
    pub fn is_text(&self) -> bool {
        self.opcode == OPCODE_TEXT
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.payload).expect("Failed to parse frame as JSON")
    }
}

pub struct WsClient {
    stream: BufReader<TcpStream>,
}

impl WsClient {
    /// Connect and perform the upgrade handshake on `path`
    pub async fn connect(port: u16, path: &str) -> Self {
        let stream = TcpStream::connect(format!("127.0.0.1:{port}"))
            .await
            .expect("Failed to connect");
        let mut stream = BufReader::new(stream);

        let request = format!(
            "GET {path} HTTP/1.1\r\n\
             Host: 127.0.0.1:{port}\r\n\
             Upgrade: websocket\r\n\
             Connection: Upgrade\r\n\
             Sec-WebSocket-Key: dGhlIHNhbXBsZSBub25jZQ==\r\n\
             Sec-WebSocket-Version: 13\r\n\r\n"
        );
        stream
            .get_mut()
            .write_all(request.as_bytes())
            .await
            .expect("Failed to write handshake");

        let mut status_line = String::new();
        stream.read_line(&mut status_line).await.unwrap();
        assert!(
            status_line.starts_with("HTTP/1.1 101"),
            "Expected 101 Switching Protocols, got {status_line:?}"
        );

        // Skip the remaining response headers
        loop {
            let mut line = String::new();
            stream.read_line(&mut line).await.unwrap();
            if line == "\r\n" || line.is_empty() {
                break;
            }
        }

        Self { stream }
    }

    /// Send one masked text frame
    pub async fn send_text(&mut self, text: &str) {
        self.send_frame(OPCODE_TEXT, text.as_bytes()).await;
    }

    /// Send a close frame
    pub async fn close(&mut self) {
        self.send_frame(OPCODE_CLOSE, &[]).await;
    }

    async fn send_frame(&mut self, opcode: u8, payload: &[u8]) {
        let mut frame = vec![0x80 | opcode];
        match payload.len() {
            len if len < 126 => frame.push(0x80 | len as u8),
            len => {
                frame.push(0x80 | 126);
                frame.extend_from_slice(&(len as u16).to_be_bytes());
            }
        }
        frame.extend_from_slice(&MASK);
        frame.extend(payload.iter().enumerate().map(|(i, b)| b ^ MASK[i % 4]));

        self.stream
            .get_mut()
            .write_all(&frame)
            .await
            .expect("Failed to write frame");
    }

    /// Read the next complete frame from the server
    pub async fn read_frame(&mut self) -> Frame {
        let mut header = [0u8; 2];
        self.stream.read_exact(&mut header).await.expect("Failed to read frame");
        let opcode = header[0] & 0x0f;

        let len = match header[1] & 0x7f {
            126 => {
                let mut ext = [0u8; 2];
                self.stream.read_exact(&mut ext).await.unwrap();
                u16::from_be_bytes(ext) as usize
            }
            127 => {
                let mut ext = [0u8; 8];
                self.stream.read_exact(&mut ext).await.unwrap();
                u64::from_be_bytes(ext) as usize
            }
            len => len as usize,
        };

        let mut payload = vec![0u8; len];
        self.stream.read_exact(&mut payload).await.unwrap();
        Frame { opcode, payload }
    }

    /// Read the next text frame as JSON, failing on anything else
    pub async fn read_json(&mut self) -> serde_json::Value {
        let frame = tokio::time::timeout(std::time::Duration::from_secs(5), self.read_frame())
            .await
            .expect("Timed out waiting for a frame");
        assert!(frame.is_text(), "Expected text frame, got opcode {}", frame.opcode);
        frame.json()
    }
}

/// Start a server over `state` and connect to `/lookup`
pub async fn connect_lookup(state: AppState) -> WsClient {
    let port = start_test_server(state).await;
    WsClient::connect(port, "/lookup").await
}

/// Names from a lookup reply
pub fn reply_names(reply: &serde_json::Value) -> Vec<String> {
    reply
        .as_array()
        .expect("Expected a JSON array")
        .iter()
        .map(|entry| entry["name"].as_str().unwrap().to_string())
        .collect()
}
