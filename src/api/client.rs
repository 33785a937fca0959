use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use std::time::Duration;

use crate::api::error::ApiError;
use crate::api::wire::{PostEnvelope, PostsEnvelope, UpdateBody};
use crate::api::PostsApi;
use crate::config::ApiConfig;
use crate::posts::{Post, PostDraft, PostId};

/// Collection path under the configured base URL.
const POSTS_SEGMENT: &str = "posts";

/// `PostsApi` over HTTP/JSON.
#[derive(Debug, Clone)]
pub struct HttpPostsApi {
    client: Client,
    posts_url: Url,
}

impl HttpPostsApi {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let posts_url = posts_url(&config.base_url)?;

        let mut builder = Client::builder();
        if let Some(seconds) = config.request_timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds as u64));
        }
        if let Some(seconds) = config.connect_timeout_seconds {
            builder = builder.connect_timeout(Duration::from_secs(seconds as u64));
        }
        let client = builder.build().map_err(ApiError::Client)?;

        Ok(Self { client, posts_url })
    }

    /// URL of the posts collection.
    pub fn posts_url(&self) -> &Url {
        &self.posts_url
    }

    fn post_url(&self, id: &PostId) -> Result<Url, ApiError> {
        let mut url = self.posts_url.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidUrl {
                url: self.posts_url.to_string(),
                reason: "cannot be a base".to_string(),
            })?
            .push(&id.to_string());
        Ok(url)
    }

    async fn send(
        &self,
        url: &Url,
        request: reqwest::RequestBuilder,
    ) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(|source| ApiError::Transport {
            url: url.to_string(),
            source,
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(ApiError::status(status.as_u16(), &body))
    }

    async fn body(url: &Url, response: Response) -> Result<Vec<u8>, ApiError> {
        response
            .bytes()
            .await
            .map(|bytes| bytes.to_vec())
            .map_err(|source| ApiError::Transport {
                url: url.to_string(),
                source,
            })
    }
}

#[async_trait]
impl PostsApi for HttpPostsApi {
    async fn list(&self) -> Result<Vec<Post>, ApiError> {
        let url = &self.posts_url;
        let response = self.send(url, self.client.get(url.clone())).await?;
        let body = Self::body(url, response).await?;
        let envelope: PostsEnvelope = serde_json::from_slice(&body)?;
        Ok(envelope.posts)
    }

    async fn create(&self, draft: &PostDraft) -> Result<Post, ApiError> {
        let url = &self.posts_url;
        let response = self
            .send(url, self.client.post(url.clone()).json(draft))
            .await?;
        let body = Self::body(url, response).await?;
        let envelope: PostEnvelope = serde_json::from_slice(&body)?;
        Ok(envelope.post)
    }

    async fn update(&self, post: &Post) -> Result<Post, ApiError> {
        let url = self.post_url(&post.id)?;
        let response = self.send(&url, self.client.put(url.clone()).json(post)).await?;
        let body = Self::body(&url, response).await?;

        // Services differ on what a PUT returns; whatever was sent is the
        // authoritative value when the body does not carry a post.
        match serde_json::from_slice::<UpdateBody>(&body) {
            Ok(updated) => Ok(updated.into_post()),
            Err(err) => {
                if !body.is_empty() {
                    tracing::debug!(id = %post.id, error = %err, "update response carried no post");
                }
                Ok(post.clone())
            }
        }
    }

    async fn delete(&self, id: &PostId) -> Result<(), ApiError> {
        let url = self.post_url(id)?;
        self.send(&url, self.client.delete(url.clone())).await?;
        Ok(())
    }
}

fn posts_url(base_url: &str) -> Result<Url, ApiError> {
    let invalid = |reason: String| ApiError::InvalidUrl {
        url: base_url.to_string(),
        reason,
    };

    let mut url = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|()| invalid("cannot be a base".to_string()))?
        .pop_if_empty()
        .push(POSTS_SEGMENT);
    Ok(url)
}
