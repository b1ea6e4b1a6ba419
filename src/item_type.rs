use super::*;

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ItemType {
  Comment,
  Job,
  Poll,
  #[serde(rename = "pollopt")]
  PollOpt,
  Story,
}

impl ItemType {
  pub(crate) const ALL: [ItemType; 5] = [
    ItemType::Story,
    ItemType::Comment,
    ItemType::Job,
    ItemType::Poll,
    ItemType::PollOpt,
  ];

  pub(crate) fn as_str(self) -> &'static str {
    match self {
      ItemType::Comment => "comment",
      ItemType::Job => "job",
      ItemType::Poll => "poll",
      ItemType::PollOpt => "pollopt",
      ItemType::Story => "story",
    }
  }
}

impl Display for ItemType {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for ItemType {
  type Err = UnknownItemType;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    ItemType::ALL
      .into_iter()
      .find(|item_type| item_type.as_str() == s)
      .ok_or_else(|| UnknownItemType(s.to_string()))
  }
}

#[derive(Debug, Error, PartialEq)]
#[error("unknown item type `{0}`")]
pub(crate) struct UnknownItemType(pub(crate) String);
