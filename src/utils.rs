use super::*;

pub(crate) fn deserialize_lenient_count<'de, D>(
  deserializer: D,
) -> Result<u64, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(
    Option::<Value>::deserialize(deserializer)?
      .as_ref()
      .and_then(Value::as_u64)
      .unwrap_or_default(),
  )
}

pub(crate) fn deserialize_lenient_integer<'de, D>(
  deserializer: D,
) -> Result<Option<i64>, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(
    Option::<Value>::deserialize(deserializer)?
      .as_ref()
      .and_then(Value::as_i64),
  )
}

pub(crate) fn deserialize_lenient_item_type<'de, D>(
  deserializer: D,
) -> Result<Option<ItemType>, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(
    Option::<Value>::deserialize(deserializer)?
      .as_ref()
      .and_then(Value::as_str)
      .and_then(|name| name.parse().ok()),
  )
}

pub(crate) fn deserialize_lenient_items<'de, D>(
  deserializer: D,
) -> Result<Vec<Item>, D::Error>
where
  D: Deserializer<'de>,
{
  let values = match Option::<Value>::deserialize(deserializer)? {
    None | Some(Value::Null) => return Ok(Vec::new()),
    Some(Value::Array(values)) => values,
    Some(_) => {
      warn!("ignoring items field that is not an array");
      return Ok(Vec::new());
    }
  };

  Ok(
    values
      .into_iter()
      .enumerate()
      .filter_map(|(index, value)| {
        serde_json::from_value(value)
          .inspect_err(|error| warn!(index, %error, "skipping malformed item"))
          .ok()
      })
      .collect(),
  )
}

pub(crate) fn deserialize_optional_string<'de, D>(
  deserializer: D,
) -> Result<Option<String>, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(match Option::<Value>::deserialize(deserializer)? {
    Some(Value::String(s)) => Some(s),
    Some(Value::Number(n)) => Some(n.to_string()),
    _ => None,
  })
}

pub(crate) fn format_points(score: i64) -> String {
  format!("{score} pts")
}

pub(crate) fn format_time(time: Option<i64>) -> String {
  format_time_in(time, &Local)
}

pub(crate) fn format_time_in<Tz>(time: Option<i64>, zone: &Tz) -> String
where
  Tz: TimeZone,
  Tz::Offset: Display,
{
  time
    .and_then(|seconds| DateTime::from_timestamp(seconds, 0))
    .map_or_else(
      || TIME_PLACEHOLDER.to_string(),
      |datetime| {
        datetime
          .with_timezone(zone)
          .format("%Y-%m-%d %H:%M:%S")
          .to_string()
      },
    )
}

pub(crate) fn truncate(text: &str, max_chars: usize) -> String {
  if text.chars().count() <= max_chars {
    return text.to_string();
  }

  let mut result = String::new();

  for (idx, ch) in text.chars().enumerate() {
    if idx >= max_chars {
      result.push_str("...");
      break;
    }

    result.push(ch);
  }

  result.trim_end().to_string()
}
