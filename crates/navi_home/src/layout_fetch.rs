//! Thread que busca o `ui-layout.json` uma única vez e entrega o resultado
//! para a UI via channel.

use crossbeam_channel::{Receiver, bounded};
use navi_core::layout::{self, LayoutConfig, LayoutError};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::{debug, error, info};

/// Erros do GET do layout. Nenhum deles chega ao usuário.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP {0}")]
    Status(StatusCode),

    #[error("Falha de rede: {0}")]
    Transport(#[from] reqwest::Error),

    #[error(transparent)]
    Layout(#[from] LayoutError),
}

/// URL do documento com `?ts=<unix-millis>` para furar cache.
pub fn layout_request_url(base_url: &str) -> String {
    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    layout::layout_url(base_url, ts)
}

/// Um GET, sem retry.
pub fn fetch_layout(client: &Client, url: &str) -> Result<LayoutConfig, FetchError> {
    let response = client.get(url).send()?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }

    let body: serde_json::Value = response.json()?;
    Ok(LayoutConfig::from_value(&body)?)
}

/// Como [`fetch_layout`], mas sempre resolve para um layout válido.
pub fn load_layout(client: &Client, url: &str) -> LayoutConfig {
    debug!("GET {url}");
    LayoutConfig::or_default(fetch_layout(client, url))
}

/// Inicia a thread de fetch. Retorna o receiver do channel.
///
/// Se a thread não puder ser criada o channel já nasce desconectado, e a UI
/// aplica o layout padrão.
pub fn spawn_layout_fetch(url: String, timeout: Duration) -> Receiver<LayoutConfig> {
    let (tx, rx) = bounded::<LayoutConfig>(1);

    let spawned = std::thread::Builder::new()
        .name("layout-fetch".into())
        .spawn(move || {
            info!("Buscando layout em {url}");
            let config = match Client::builder().timeout(timeout).build() {
                Ok(client) => load_layout(&client, &url),
                Err(e) => {
                    error!("Falha ao criar cliente HTTP: {e}");
                    LayoutConfig::default()
                }
            };
            if tx.send(config).is_err() {
                debug!("UI encerrada antes do layout chegar");
            }
        });

    if let Err(e) = spawned {
        error!("Falha ao criar thread de fetch: {e}");
    }

    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use navi_core::DEFAULT_ICON_GRID_ROWS;
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::thread::JoinHandle;

    /// Servidor HTTP de uma requisição só. Retorna o base path e um handle
    /// que devolve a request line recebida.
    fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base = format!("http://{}/navi", listener.local_addr().unwrap());

        let handle = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());

            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();
            loop {
                let mut header = String::new();
                let n = reader.read_line(&mut header).unwrap();
                if n == 0 || header == "\r\n" {
                    break;
                }
            }

            let response = format!(
                "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();
            request_line
        });

        (base, handle)
    }

    fn client() -> Client {
        Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap()
    }

    #[test]
    fn valid_layout_is_used() {
        let (base, server) = serve_once("HTTP/1.1 200 OK", r#"{"iconGridRows": 3}"#);
        let config = load_layout(&client(), &layout_request_url(&base));
        assert_eq!(config.icon_grid_rows, 3);

        let request_line = server.join().unwrap();
        assert!(
            request_line.starts_with("GET /navi/config/ui-layout.json?ts="),
            "request: {request_line}"
        );
    }

    #[test]
    fn error_status_falls_back() {
        let (base, server) = serve_once("HTTP/1.1 404 Not Found", "{}");
        let url = layout_request_url(&base);
        let result = fetch_layout(&client(), &url);
        assert!(matches!(result, Err(FetchError::Status(s)) if s == StatusCode::NOT_FOUND));
        server.join().unwrap();
    }

    #[test]
    fn server_error_resolves_to_default() {
        let (base, server) = serve_once("HTTP/1.1 500 Internal Server Error", r#"{"iconGridRows": 3}"#);
        let config = load_layout(&client(), &layout_request_url(&base));
        assert_eq!(config.icon_grid_rows, DEFAULT_ICON_GRID_ROWS);
        server.join().unwrap();
    }

    #[test]
    fn non_json_body_falls_back() {
        let (base, server) = serve_once("HTTP/1.1 200 OK", "<html>oops</html>");
        let url = layout_request_url(&base);
        assert!(matches!(fetch_layout(&client(), &url), Err(FetchError::Transport(_))));
        server.join().unwrap();
    }

    #[test]
    fn wrong_shape_falls_back() {
        let (base, server) = serve_once("HTTP/1.1 200 OK", r#"{"iconGridRows": "3"}"#);
        let url = layout_request_url(&base);
        assert!(matches!(
            fetch_layout(&client(), &url),
            Err(FetchError::Layout(LayoutError::InvalidRows(_)))
        ));
        server.join().unwrap();
    }

    #[test]
    fn connection_refused_resolves_to_default() {
        // Porta livre: bind e drop
        let port = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
        let url = layout_request_url(&format!("http://127.0.0.1:{port}/"));
        let config = load_layout(&client(), &url);
        assert_eq!(config.icon_grid_rows, DEFAULT_ICON_GRID_ROWS);
    }

    #[test]
    fn spawned_fetch_delivers_once() {
        let (base, server) = serve_once("HTTP/1.1 200 OK", r#"{"iconGridRows": 1}"#);
        let rx = spawn_layout_fetch(layout_request_url(&base), Duration::from_secs(5));

        let config = rx.recv_timeout(Duration::from_secs(10)).unwrap();
        assert_eq!(config.icon_grid_rows, 1);
        server.join().unwrap();

        // Depois do único envio o channel fica desconectado
        assert!(rx.recv_timeout(Duration::from_secs(10)).is_err());
    }

    #[test]
    fn url_carries_timestamp() {
        let url = layout_request_url("http://localhost:5173/");
        let ts = url
            .strip_prefix("http://localhost:5173/config/ui-layout.json?ts=")
            .unwrap();
        assert!(ts.parse::<u128>().unwrap() > 0);
    }
}
