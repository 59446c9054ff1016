/// Per-row action menu anchors, indexed by row position.
///
/// Several menus may be open at once. Closing clears every anchor, so all
/// open menus close together.
#[derive(Debug, Clone, PartialEq)]
pub struct RowMenus<A> {
    anchors: Vec<Option<A>>,
}

impl<A> Default for RowMenus<A> {
    fn default() -> Self {
        Self {
            anchors: Vec::new(),
        }
    }
}

impl<A> RowMenus<A> {
    pub fn open(&mut self, row: usize, anchor: A) {
        if self.anchors.len() <= row {
            self.anchors.resize_with(row + 1, || None);
        }
        self.anchors[row] = Some(anchor);
    }

    pub fn anchor(&self, row: usize) -> Option<&A> {
        self.anchors.get(row)?.as_ref()
    }

    pub fn is_open(&self, row: usize) -> bool {
        self.anchor(row).is_some()
    }

    pub fn open_rows(&self) -> Vec<usize> {
        self.anchors
            .iter()
            .enumerate()
            .filter_map(|(row, anchor)| anchor.as_ref().map(|_| row))
            .collect()
    }

    pub fn close_all(&mut self) {
        self.anchors.clear();
    }
}
