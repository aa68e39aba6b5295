use std::net::SocketAddr;

use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use server::{startup, ServerState};

struct TestApp {
    base_url: String,
    shutdown: Option<oneshot::Sender<()>>,
    handle: tokio::task::JoinHandle<anyhow::Result<()>>,
}

impl TestApp {
    fn url(&self, path: &str) -> String {
        format!("{}/api/v1/customers{}", self.base_url, path)
    }

    async fn stop(mut self) -> anyhow::Result<()> {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        self.handle.await?
    }
}

async fn start_server() -> anyhow::Result<TestApp> {
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    let (tx, rx) = oneshot::channel::<()>();
    let handle = tokio::spawn(async move {
        startup::serve(listener, ServerState::in_memory(), async move {
            let _ = rx.await;
        })
        .await
    });

    Ok(TestApp { base_url, shutdown: Some(tx), handle })
}

#[tokio::test]
async fn e2e_jude_scenario() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();
    let jude = json!({"id": 1, "name": "Jude", "address": "Street", "age": 38});

    let res = c.post(app.url("/create")).json(&jude).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?, jude);

    let res = c.get(app.url("/all")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!([jude.clone()]));

    let res = c.get(app.url("/1")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?, jude);

    let res = c.get(app.url("/2")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);

    drop(c);
    app.stop().await
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn e2e_concurrent_creates_are_all_retrievable() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();
    let n = 64;

    let mut tasks = Vec::with_capacity(n);
    for id in 0..n as i32 {
        let c = c.clone();
        let url = app.url("/create");
        tasks.push(tokio::spawn(async move {
            let body = json!({"id": id, "name": format!("c{id}"), "address": "Street", "age": 30});
            c.post(url).json(&body).send().await.map(|r| r.status())
        }));
    }
    for t in tasks {
        assert_eq!(t.await??, HttpStatusCode::OK);
    }

    let all = c.get(app.url("/all")).send().await?.json::<Vec<Value>>().await?;
    assert_eq!(all.len(), n);

    for id in 0..n as i32 {
        let res = c.get(app.url(&format!("/{id}"))).send().await?;
        assert_eq!(res.status(), HttpStatusCode::OK, "id {id}");
        let body = res.json::<Value>().await?;
        assert_eq!(body["id"], id);
    }

    drop(c);
    app.stop().await
}

#[tokio::test]
async fn e2e_graceful_shutdown_returns_ok() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::get(format!("{}/health", app.base_url)).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    app.stop().await
}
