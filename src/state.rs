use crate::client::ShortenClient;

#[derive(Debug, Clone)]
pub struct AppState {
    pub client: ShortenClient,
}

impl AppState {
    pub fn new(client: ShortenClient) -> Self {
        Self { client }
    }
}
