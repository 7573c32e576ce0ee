use std::net::SocketAddr;

use reqwest::{Client, RequestBuilder};
use shop_server::config::{AuthConfig, Config, TokenIdentity};
use tokio::net::TcpListener;

#[allow(dead_code)]
pub const ALICE_TOKEN: &str = "alice-token";
#[allow(dead_code)]
pub const BOB_TOKEN: &str = "bob-token";

pub struct TestServer {
    pub url: String,
    #[allow(dead_code)]
    pub addr: SocketAddr,
    pub client: Client,
}

/// Config with the fixed verifier accepting two callers
pub fn test_config() -> Config {
    let mut auth = AuthConfig {
        verifier: "fixed".into(),
        ..Default::default()
    };
    auth.tokens.insert(
        ALICE_TOKEN.into(),
        TokenIdentity {
            uid: "uid-alice".into(),
            email: "alice@example.com".into(),
        },
    );
    auth.tokens.insert(
        BOB_TOKEN.into(),
        TokenIdentity {
            uid: "uid-bob".into(),
            email: "bob@example.com".into(),
        },
    );

    Config {
        host: "127.0.0.1".into(),
        port: 0, // OS assigns port
        auth,
        ..Default::default()
    }
}

impl TestServer {
    pub async fn start() -> Self {
        Self::start_with(test_config()).await
    }

    pub async fn start_with(config: Config) -> Self {
        let state = shop_server::state::AppState::new(&config).await.unwrap();
        let app = shop_server::routes::router(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            url: format!("http://{addr}"),
            addr,
            client: Client::new(),
        }
    }

    #[allow(dead_code)]
    pub fn get(&self, path: &str, token: &str) -> RequestBuilder {
        self.client
            .get(format!("{}{}", self.url, path))
            .bearer_auth(token)
    }

    #[allow(dead_code)]
    pub fn post(&self, path: &str, token: &str) -> RequestBuilder {
        self.client
            .post(format!("{}{}", self.url, path))
            .bearer_auth(token)
    }

    #[allow(dead_code)]
    pub fn put(&self, path: &str, token: &str) -> RequestBuilder {
        self.client
            .put(format!("{}{}", self.url, path))
            .bearer_auth(token)
    }

    #[allow(dead_code)]
    pub fn delete(&self, path: &str, token: &str) -> RequestBuilder {
        self.client
            .delete(format!("{}{}", self.url, path))
            .bearer_auth(token)
    }
}
