use super::*;
use crate::brand::fixture::brand;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// 用意した応答を接続ごとに順番に返すローカルサーバー
struct CannedServer {
    url: String,
    /// 受け取ったリクエスト（"METHOD /path"）
    requests: Arc<Mutex<Vec<String>>>,
}

impl CannedServer {
    async fn start(responses: Vec<(u16, String)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&requests);

        tokio::spawn(async move {
            for (status, body) in responses {
                let Ok((mut socket, _)) = listener.accept().await else {
                    return;
                };
                let request = read_request(&mut socket).await;
                log.lock().unwrap().push(request);
                let response = format!(
                    "HTTP/1.1 {} Canned\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        Self {
            url: format!("http://{}/brands", addr),
            requests,
        }
    }

    fn store(&self) -> HttpRecordStore {
        let client = Client::builder().no_proxy().build().unwrap();
        HttpRecordStore::new(client, self.url.clone())
    }

    fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// ヘッダーと Content-Length 分のボディを読み、リクエスト行の先頭2語を返す
async fn read_request(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = socket.read(&mut chunk).await.unwrap_or(0);
        if n == 0 {
            return String::new();
        }
        buf.extend_from_slice(&chunk[..n]);
        let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
            continue;
        };
        let head = String::from_utf8_lossy(&buf[..end]).to_string();
        let length = content_length(&head);
        while buf.len() < end + 4 + length {
            let n = socket.read(&mut chunk).await.unwrap_or(0);
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
        }
        return head
            .lines()
            .next()
            .unwrap_or_default()
            .split_whitespace()
            .take(2)
            .collect::<Vec<_>>()
            .join(" ");
    }
}

fn content_length(head: &str) -> usize {
    head.lines()
        .find_map(|line| {
            let (key, value) = line.split_once(':')?;
            key.trim()
                .eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse().unwrap_or(0))
        })
        .unwrap_or(0)
}

fn unavailable() -> (u16, String) {
    (503, String::new())
}

// ========================================
// URL・エラー変換
// ========================================

#[test]
fn test_item_url() {
    let store = HttpRecordStore::new(Client::new(), "http://localhost:3001/brands");
    assert_eq!(store.item_url("42"), "http://localhost:3001/brands/42");
}

#[test]
fn test_not_found_maps_to_brand_not_found() {
    let err = not_found_as(
        CatalogError::StoreApi {
            status: 404,
            message: String::new(),
        },
        "7",
    );
    assert!(matches!(err, CatalogError::BrandNotFound(id) if id == "7"));
}

#[test]
fn test_other_errors_pass_through() {
    let err = not_found_as(
        CatalogError::StoreApi {
            status: 500,
            message: String::new(),
        },
        "7",
    );
    assert!(matches!(err, CatalogError::StoreApi { status: 500, .. }));
}

#[tokio::test]
async fn test_unreachable_store_is_network_error() {
    // ポート1 では何も待ち受けていない前提
    let store = HttpRecordStore::new(Client::new(), "http://127.0.0.1:1/brands");
    let result = store.fetch_all().await;
    assert!(matches!(result, Err(CatalogError::Network(_))));
}

// ========================================
// list
// ========================================

#[tokio::test]
async fn test_list_decodes_records_and_quarantines_bad_ones() {
    let good = serde_json::to_value(brand("1", "Alpha", "US", 40)).unwrap();
    let body = serde_json::json!([good, { "id": "2", "name": "Broken" }]).to_string();
    let server = CannedServer::start(vec![(200, body)]).await;

    let loaded = server.store().list().await.unwrap();

    assert_eq!(loaded.brands.len(), 1);
    assert_eq!(loaded.brands[0].name, "Alpha");
    assert_eq!(loaded.quarantined.len(), 1);
    assert_eq!(loaded.quarantined[0].id.as_deref(), Some("2"));
    assert_eq!(server.requests(), vec!["GET /brands"]);
}

#[tokio::test]
async fn test_list_gives_up_after_max_retries() {
    let server = CannedServer::start(vec![unavailable(), unavailable(), unavailable()]).await;

    let result = server.store().list().await;

    assert!(matches!(result, Err(CatalogError::StoreApi { status: 503, .. })));
    assert_eq!(server.requests().len(), 1 + DEFAULT_MAX_RETRIES as usize);
}

// ========================================
// create / replace / delete
// ========================================

#[tokio::test]
async fn test_create_is_not_retried() {
    let server = CannedServer::start(vec![unavailable(), (201, "{}".to_string())]).await;

    let result = server.store().create(&brand("1", "Alpha", "US", 40)).await;

    assert!(matches!(result, Err(CatalogError::StoreApi { status: 503, .. })));
    assert_eq!(server.requests(), vec!["POST /brands"]);
}

#[tokio::test]
async fn test_replace_is_retried_on_server_error() {
    let server = CannedServer::start(vec![unavailable(), (200, "{}".to_string())]).await;

    server
        .store()
        .replace(&brand("1", "Alpha", "US", 40))
        .await
        .unwrap();

    assert_eq!(server.requests(), vec!["PUT /brands/1", "PUT /brands/1"]);
}

#[tokio::test]
async fn test_replace_missing_brand_is_not_found() {
    let server = CannedServer::start(vec![(404, String::new())]).await;

    let result = server.store().replace(&brand("9", "Ghost", "US", 40)).await;

    assert!(matches!(result, Err(CatalogError::BrandNotFound(id)) if id == "9"));
}

#[tokio::test]
async fn test_delete_missing_brand_is_not_found() {
    let server = CannedServer::start(vec![(404, String::new())]).await;

    let result = server.store().delete("9").await;

    assert!(matches!(result, Err(CatalogError::BrandNotFound(id)) if id == "9"));
    assert_eq!(server.requests(), vec!["DELETE /brands/9"]);
}

#[tokio::test]
async fn test_delete_retry_finding_record_gone_counts_as_deleted() {
    // 1回目の応答が失われ、再試行時には削除済み
    let server = CannedServer::start(vec![unavailable(), (404, String::new())]).await;

    server.store().delete("7").await.unwrap();

    assert_eq!(server.requests(), vec!["DELETE /brands/7", "DELETE /brands/7"]);
}
