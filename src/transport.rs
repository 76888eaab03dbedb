use crate::error::{FetchError, Result};

/// Respuesta HTTP cruda; la interpretación la hace cada componente.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, status_text: &str, body: &str) -> Self {
        Self {
            status,
            status_text: status_text.to_string(),
            body: body.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Todo lo que el visor necesita de la red. `Err` solo para fallos de transporte:
/// un 4xx/5xx sigue siendo un `Ok(HttpReply)`.
pub trait Transport: Send + Sync {
    /// GET con la caché desactivada.
    fn get(&self, url: &str) -> Result<HttpReply>;

    /// POST con `Content-Type: application/json`.
    fn post_json(&self, url: &str, body: String) -> Result<HttpReply>;
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::ReqwestTransport;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use super::*;
    use reqwest::blocking::{Client, Response};
    use reqwest::header::{CACHE_CONTROL, CONTENT_TYPE, PRAGMA};
    use std::time::Duration;

    pub struct ReqwestTransport {
        client: Client,
    }

    impl ReqwestTransport {
        pub fn new(timeout_secs: u64) -> Result<Self> {
            let client = Client::builder()
                .timeout(Duration::from_secs(timeout_secs.max(1)))
                .build()
                .map_err(|err| FetchError::Transport(err.to_string()))?;
            Ok(Self { client })
        }
    }

    fn into_reply(response: Response) -> Result<HttpReply> {
        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or_default().to_string();
        let body = response
            .text()
            .map_err(|err| FetchError::Transport(err.to_string()))?;
        Ok(HttpReply {
            status: status.as_u16(),
            status_text,
            body,
        })
    }

    impl Transport for ReqwestTransport {
        fn get(&self, url: &str) -> Result<HttpReply> {
            let response = self
                .client
                .get(url)
                .header(CACHE_CONTROL, "no-store")
                .header(PRAGMA, "no-cache")
                .send()
                .map_err(|err| FetchError::Transport(err.to_string()))?;
            into_reply(response)
        }

        fn post_json(&self, url: &str, body: String) -> Result<HttpReply> {
            let response = self
                .client
                .post(url)
                .header(CONTENT_TYPE, "application/json")
                .body(body)
                .send()
                .map_err(|err| FetchError::Transport(err.to_string()))?;
            into_reply(response)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::HttpReply;

    #[test]
    fn only_2xx_is_success() {
        assert!(HttpReply::new(200, "OK", "").is_success());
        assert!(HttpReply::new(204, "No Content", "").is_success());
        assert!(!HttpReply::new(429, "Too Many Requests", "").is_success());
        assert!(!HttpReply::new(500, "Internal Server Error", "").is_success());
    }

    #[cfg(not(target_arch = "wasm32"))]
    mod native {
        use super::super::{ReqwestTransport, Transport};
        use std::io::{Read, Write};
        use std::net::TcpListener;
        use std::sync::mpsc::channel;

        /// Atiende una sola petición y devuelve sus cabeceras en minúsculas.
        fn serve_once(response: &'static str) -> (String, std::sync::mpsc::Receiver<String>) {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            let url = format!("http://{}/static/content/index.json", listener.local_addr().unwrap());
            let (tx, rx) = channel();
            std::thread::spawn(move || {
                let (mut stream, _) = listener.accept().unwrap();
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    let n = stream.read(&mut buf).unwrap();
                    if n == 0 {
                        break;
                    }
                    request.extend_from_slice(&buf[..n]);
                }
                stream.write_all(response.as_bytes()).unwrap();
                tx.send(String::from_utf8_lossy(&request).to_ascii_lowercase())
                    .unwrap();
            });
            (url, rx)
        }

        #[test]
        fn get_disables_caching() {
            let (url, rx) = serve_once(
                "HTTP/1.1 200 OK\r\nContent-Length: 2\r\nConnection: close\r\n\r\n[]",
            );
            let reply = ReqwestTransport::new(5).unwrap().get(&url).unwrap();
            let request = rx.recv().unwrap();

            assert!(request.contains("cache-control: no-store"), "{request}");
            assert!(request.contains("pragma: no-cache"), "{request}");
            assert_eq!(reply.status, 200);
            assert_eq!(reply.status_text, "OK");
            assert_eq!(reply.body, "[]");
        }

        #[test]
        fn error_status_is_still_a_reply() {
            let (url, _rx) = serve_once(
                "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            );
            let reply = ReqwestTransport::new(5).unwrap().get(&url).unwrap();
            assert_eq!(reply.status, 404);
            assert_eq!(reply.status_text, "Not Found");
            assert!(!reply.is_success());
        }
    }
}
