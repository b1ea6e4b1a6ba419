pub(crate) struct ListView<T> {
  items: Vec<T>,
  offset: usize,
  selected: usize,
}

impl<T> Default for ListView<T> {
  fn default() -> Self {
    Self::new(Vec::new())
  }
}

impl<T> ListView<T> {
  pub(crate) fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  pub(crate) fn items(&self) -> &[T] {
    &self.items
  }

  pub(crate) fn new(items: Vec<T>) -> Self {
    Self {
      items,
      offset: 0,
      selected: 0,
    }
  }

  pub(crate) fn offset(&self) -> usize {
    if self.items.is_empty() {
      0
    } else {
      self.offset.min(self.selected)
    }
  }

  pub(crate) fn select_next(&mut self) {
    self.set_selected(self.selected.saturating_add(1));
  }

  pub(crate) fn select_previous(&mut self) {
    self.set_selected(self.selected.saturating_sub(1));
  }

  pub(crate) fn selected_index(&self) -> Option<usize> {
    (!self.items.is_empty()).then_some(self.selected)
  }

  pub(crate) fn selected_item(&self) -> Option<&T> {
    self.items.get(self.selected)
  }

  pub(crate) fn set_offset(&mut self, offset: usize) {
    self.offset = offset.min(self.items.len().saturating_sub(1));
  }

  pub(crate) fn set_selected(&mut self, index: usize) {
    self.selected = index.min(self.items.len().saturating_sub(1));
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn selected_index_is_none_when_empty() {
    let view = ListView::<i32>::default();
    assert_eq!(view.selected_index(), None);
    assert!(view.selected_item().is_none());
  }

  #[test]
  fn selection_and_offset_are_clamped_to_bounds() {
    let mut view = ListView::new(vec![1, 2, 3]);

    view.set_selected(10);
    assert_eq!(view.selected_index(), Some(2));

    view.set_offset(10);
    assert_eq!(view.offset(), 2);
  }

  #[test]
  fn select_next_and_previous_stop_at_edges() {
    let mut view = ListView::new(vec!["a", "b"]);

    view.select_previous();
    assert_eq!(view.selected_item(), Some(&"a"));

    view.select_next();
    view.select_next();
    assert_eq!(view.selected_item(), Some(&"b"));
  }

  #[test]
  fn offset_never_passes_selection() {
    let mut view = ListView::new(vec![10, 20, 30]);

    view.set_selected(2);
    view.set_offset(2);
    view.set_selected(0);

    assert_eq!(view.offset(), 0);
    assert_eq!(view.items().len(), 3);
  }
}
