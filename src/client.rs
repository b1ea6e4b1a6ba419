use super::*;

#[derive(Clone)]
pub(crate) struct Client {
  api_base: Url,
  client: reqwest::Client,
}

impl Client {
  const PAGE_PATH: [&str; 2] = ["api", "topstories"];

  const USER_AGENT: &str = concat!("hnfeed/", env!("CARGO_PKG_VERSION"));

  pub(crate) async fn fetch_page(
    &self,
    request: PageRequest,
  ) -> Result<PageResult, FetchError> {
    let url = self.page_url(request);

    debug!(%url, "requesting page");

    let response = self
      .client
      .get(url.clone())
      .header(ACCEPT, "application/json")
      .send()
      .await
      .inspect_err(|error| warn!(%url, %error, "page request failed"))?;

    let status = response.status();

    if !status.is_success() {
      warn!(%url, %status, "page request rejected");
      return Err(FetchError::Server(status.as_u16()));
    }

    let body = response.text().await?;

    serde_json::from_str(&body).map_err(|error| {
      warn!(%url, %error, "page response is not valid JSON");
      FetchError::Decode(error.to_string())
    })
  }

  pub(crate) fn new(config: &Config) -> Result<Self> {
    let client = reqwest::Client::builder()
      .timeout(config.request_timeout)
      .user_agent(Self::USER_AGENT)
      .build()
      .context("failed to build HTTP client")?;

    Ok(Self {
      api_base: config.api_base.clone(),
      client,
    })
  }

  pub(crate) fn page_url(&self, request: PageRequest) -> Url {
    let mut url = self.api_base.clone();

    if let Ok(mut segments) = url.path_segments_mut() {
      segments.pop_if_empty().extend(Self::PAGE_PATH);
    }

    {
      let mut query = url.query_pairs_mut();

      query
        .clear()
        .append_pair("page", &request.page.max(1).to_string())
        .append_pair("limit", &request.limit.to_string());

      if let Some(filter) = request.filter {
        query.append_pair("type", filter.as_str());
      }
    }

    url
  }
}
