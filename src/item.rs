use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub(crate) struct Item {
  #[serde(default, deserialize_with = "deserialize_optional_string")]
  pub(crate) by: Option<String>,
  pub(crate) id: u64,
  #[serde(default, deserialize_with = "deserialize_lenient_integer")]
  pub(crate) score: Option<i64>,
  #[serde(default, deserialize_with = "deserialize_lenient_integer")]
  pub(crate) time: Option<i64>,
  #[serde(default, deserialize_with = "deserialize_optional_string")]
  pub(crate) title: Option<String>,
  #[serde(default, deserialize_with = "deserialize_lenient_item_type")]
  pub(crate) r#type: Option<ItemType>,
  #[serde(default, deserialize_with = "deserialize_optional_string")]
  pub(crate) url: Option<String>,
}

impl Item {
  pub(crate) fn author(&self) -> &str {
    self.by.as_deref().unwrap_or("unknown")
  }

  pub(crate) fn detail(&self) -> String {
    format!(
      "{} by {} • {}",
      self.points(),
      self.author(),
      self.formatted_time()
    )
  }

  pub(crate) fn formatted_time(&self) -> String {
    format_time(self.time)
  }

  pub(crate) fn label(&self) -> String {
    match (self.title.as_deref(), self.r#type) {
      (Some(title), _) if !title.is_empty() => title.to_string(),
      (_, Some(item_type)) => format!("({item_type})"),
      _ => "(item)".to_string(),
    }
  }

  pub(crate) fn points(&self) -> String {
    format_points(self.score.unwrap_or(0))
  }

  pub(crate) fn resolved_url(&self) -> String {
    self
      .url
      .clone()
      .filter(|url| !url.is_empty())
      .unwrap_or_else(|| {
        format!("https://news.ycombinator.com/item?id={}", self.id)
      })
  }
}
