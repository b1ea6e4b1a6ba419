use super::*;

pub(crate) struct Router;

impl Router {
  const TYPE_PREFIX: &str = "/type/";

  fn fallback() -> Resolution {
    Resolution {
      filter: None,
      path: ROOT_PATH.into(),
      redirected: true,
    }
  }

  pub(crate) fn resolve(path: &str) -> Resolution {
    let trimmed = match path.strip_suffix('/') {
      Some(rest) if !rest.is_empty() => rest,
      _ => path,
    };

    if trimmed == ROOT_PATH {
      return Resolution {
        filter: None,
        path: ROOT_PATH.into(),
        redirected: false,
      };
    }

    let Some(name) = trimmed.strip_prefix(Self::TYPE_PREFIX) else {
      return Self::fallback();
    };

    match name.parse::<ItemType>() {
      Ok(item_type) => Resolution {
        filter: Some(item_type),
        path: format!("{}{item_type}", Self::TYPE_PREFIX),
        redirected: false,
      },
      Err(_) => Self::fallback(),
    }
  }
}
