//! A single row of a [`Table`](super::Table).

use super::table::MAX_TABLE_COLUMNS;
use super::{Margin, Padding, Rect};
use crate::config::TableConfig;
use crate::error::{UiError, UiResult};
use crate::platform::Clipboard;
use crate::style::Color;
use crate::widget::{Dock, WidgetFlags, WidgetId, WidgetTree};

type SelectionHandler = Box<dyn FnMut(WidgetId)>;

/// A row of up to [`MAX_TABLE_COLUMNS`] text cells.
///
/// Cells are child widgets of the row. All earlier cells pack to the left
/// and the last one fills the remaining width. Accessors addressing a column
/// that has no cell do nothing.
pub struct TableRow {
    id: WidgetId,
    cells: [Option<WidgetId>; MAX_TABLE_COLUMNS],
    column_count: usize,
    even: bool,
    cell_padding: Padding,
    cell_margin: Margin,
    on_selected: Vec<SelectionHandler>,
}

impl TableRow {
    /// Creates an empty row widget (no columns) that accepts keyboard input.
    pub fn new(tree: &mut WidgetTree, parent: Option<WidgetId>, config: &TableConfig) -> Self {
        let id = tree.create(parent);
        tree.set_flag(id, WidgetFlags::KEYBOARD_INPUT, true);
        Self {
            id,
            cells: [None; MAX_TABLE_COLUMNS],
            column_count: 0,
            even: false,
            cell_padding: Padding::uniform(config.cell_padding),
            cell_margin: Margin::new(0, 0, config.cell_spacing, 0),
            on_selected: Vec::new(),
        }
    }

    /// The row's own widget.
    #[must_use]
    pub const fn id(&self) -> WidgetId {
        self.id
    }

    /// Number of populated columns.
    #[must_use]
    pub const fn column_count(&self) -> usize {
        self.column_count
    }

    /// Changes the number of columns, creating or discarding cells.
    ///
    /// # Errors
    ///
    /// [`UiError::InvalidColumnCount`] if `count` is not below
    /// [`MAX_TABLE_COLUMNS`].
    pub fn set_column_count(&mut self, tree: &mut WidgetTree, count: usize) -> UiResult<()> {
        if count == self.column_count {
            return Ok(());
        }
        if count >= MAX_TABLE_COLUMNS {
            tracing::warn!(count, max = MAX_TABLE_COLUMNS, "invalid row column count");
            return Err(UiError::InvalidColumnCount {
                requested: count,
                max: MAX_TABLE_COLUMNS,
            });
        }
        self.resize_cells(tree, count);
        Ok(())
    }

    /// Resizes the cell array to an already validated count.
    pub(crate) fn resize_cells(&mut self, tree: &mut WidgetTree, count: usize) {
        if count == self.column_count {
            return;
        }

        for (column, slot) in self.cells.iter_mut().enumerate() {
            if column < count {
                if slot.is_none() {
                    let cell = tree.create(Some(self.id));
                    tree.set_padding(cell, self.cell_padding);
                    tree.set_margin(cell, self.cell_margin);
                    *slot = Some(cell);
                }
            } else if let Some(cell) = slot.take() {
                tree.remove(cell);
            }
        }

        for (column, cell) in self.cells.iter().take(count).enumerate() {
            if let Some(cell) = *cell {
                let dock = if column + 1 == count { Dock::Fill } else { Dock::Left };
                tree.set_dock(cell, dock);
            }
        }

        self.column_count = count;
        tree.invalidate(self.id);
    }

    /// Cell widget of `column`, if populated.
    #[must_use]
    pub fn cell(&self, column: usize) -> Option<WidgetId> {
        self.cells.get(column).copied().flatten()
    }

    /// First widget embedded in the cell of `column`.
    #[must_use]
    pub fn cell_contents(&self, tree: &WidgetTree, column: usize) -> Option<WidgetId> {
        self.cell(column).and_then(|cell| tree.children(cell).first().copied())
    }

    /// Embeds `contents` in the cell of `column` and toggles mouse input on
    /// the cell.
    pub fn set_cell_contents(
        &mut self,
        tree: &mut WidgetTree,
        column: usize,
        contents: WidgetId,
        enable_mouse_input: bool,
    ) {
        let Some(cell) = self.cell(column) else {
            return;
        };
        tree.set_parent(contents, cell);
        tree.set_flag(cell, WidgetFlags::MOUSE_INPUT, enable_mouse_input);
    }

    /// Text of the cell in `column`.
    #[must_use]
    pub fn cell_text<'t>(&self, tree: &'t WidgetTree, column: usize) -> Option<&'t str> {
        self.cell(column).and_then(|cell| tree.text(cell))
    }

    /// Sets the text of the cell in `column`.
    pub fn set_cell_text(&mut self, tree: &mut WidgetTree, column: usize, text: impl Into<String>) {
        if let Some(cell) = self.cell(column) {
            tree.set_text(cell, text);
        }
    }

    /// Text of the first column.
    #[must_use]
    pub fn text<'t>(&self, tree: &'t WidgetTree) -> Option<&'t str> {
        self.cell_text(tree, 0)
    }

    /// Sets the text of the first column.
    pub fn set_text(&mut self, tree: &mut WidgetTree, text: impl Into<String>) {
        self.set_cell_text(tree, 0, text);
    }

    /// Sets the width of the cell in `column`.
    pub fn set_column_width(&mut self, tree: &mut WidgetTree, column: usize, width: i32) {
        if let Some(cell) = self.cell(column) {
            tree.set_width(cell, width);
        }
    }

    /// Sets the text colour of every cell.
    pub fn set_text_color(&mut self, tree: &mut WidgetTree, color: Color) {
        for cell in self.cells.iter().take(self.column_count).flatten() {
            tree.set_text_color(*cell, color);
        }
    }

    /// Alternating-row tint hint, assigned by the table.
    #[must_use]
    pub const fn is_even(&self) -> bool {
        self.even
    }

    pub(crate) fn set_even(&mut self, even: bool) {
        self.even = even;
    }

    /// Sizes each cell to its content and the row to the cells.
    ///
    /// A cell hosting embedded widgets is sized to enclose them; otherwise it
    /// is sized to its text. The row becomes the sum of cell widths and the
    /// tallest cell, margins included.
    pub fn size_to_contents(&mut self, tree: &mut WidgetTree) {
        let mut width = 0;
        let mut height = 0;

        for cell in self.cells.iter().take(self.column_count).flatten() {
            let cell = *cell;
            if tree.children(cell).is_empty() {
                tree.size_to_contents(cell);
            } else {
                tree.size_to_children(cell);
            }
            let (w, h) = tree.size(cell);
            let margin = tree.margin(cell);
            width += w + margin.horizontal();
            height = height.max(h + margin.vertical());
        }

        tree.set_size(self.id, width, height);
    }

    /// Packs the cells inside the row: left-docked cells keep their width,
    /// the last cell fills what remains.
    pub(crate) fn arrange_cells(&self, tree: &mut WidgetTree) {
        let (row_width, row_height) = tree.size(self.id);
        let mut x = 0;

        for cell in self.cells.iter().take(self.column_count).flatten() {
            let cell = *cell;
            let margin = tree.margin(cell);
            let width = match tree.dock(cell) {
                Dock::Fill => row_width - x - margin.horizontal(),
                _ => tree.size(cell).0,
            };
            tree.set_bounds(
                cell,
                Rect::new(x + margin.left, margin.top, width, row_height - margin.vertical()),
            );
            x += width + margin.horizontal();
        }
        tree.mark_laid_out(self.id);
    }

    /// Registers a listener for [`TableRow::select`].
    pub fn on_selected(&mut self, handler: impl FnMut(WidgetId) + 'static) {
        self.on_selected.push(Box::new(handler));
    }

    /// Notifies every selection listener, in registration order.
    pub fn select(&mut self) {
        tracing::debug!(row = self.id.raw(), listeners = self.on_selected.len(), "row selected");
        for handler in &mut self.on_selected {
            handler(self.id);
        }
    }

    /// Places the first column's text on the clipboard.
    pub fn copy_to(&self, tree: &WidgetTree, clipboard: &mut impl Clipboard) {
        clipboard.set_text(self.text(tree).unwrap_or_default());
    }
}

impl std::fmt::Debug for TableRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableRow")
            .field("id", &self.id)
            .field("cells", &self.cells)
            .field("column_count", &self.column_count)
            .field("even", &self.even)
            .field("on_selected", &self.on_selected.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::platform::MemoryClipboard;

    fn row(tree: &mut WidgetTree, columns: usize) -> TableRow {
        let mut row = TableRow::new(tree, None, &TableConfig::default());
        row.set_column_count(tree, columns).unwrap();
        row
    }

    #[test]
    fn test_cells_are_created_and_docked() {
        let mut tree = WidgetTree::new();
        let mut row = row(&mut tree, 3);

        assert!(tree.has_flag(row.id(), WidgetFlags::KEYBOARD_INPUT));
        assert_eq!(tree.children(row.id()).len(), 3);
        let first = row.cell(0).unwrap();
        assert_eq!(tree.padding(first), Padding::uniform(3));
        assert_eq!(tree.margin(first), Margin::new(0, 0, 2, 0));
        assert_eq!(tree.dock(first), Dock::Left);
        assert_eq!(tree.dock(row.cell(2).unwrap()), Dock::Fill);

        row.set_column_count(&mut tree, 2).unwrap();
        assert_eq!(tree.children(row.id()).len(), 2);
        assert_eq!(row.cell(2), None);
        assert_eq!(tree.dock(row.cell(1).unwrap()), Dock::Fill);
    }

    #[test]
    fn test_column_count_bound() {
        let mut tree = WidgetTree::new();
        let mut row = row(&mut tree, 1);

        assert_eq!(
            row.set_column_count(&mut tree, MAX_TABLE_COLUMNS),
            Err(UiError::InvalidColumnCount {
                requested: MAX_TABLE_COLUMNS,
                max: MAX_TABLE_COLUMNS
            })
        );
        assert_eq!(row.column_count(), 1);
        assert_eq!(tree.children(row.id()).len(), 1);
    }

    #[test]
    fn test_missing_cells_are_ignored() {
        let mut tree = WidgetTree::new();
        let mut row = row(&mut tree, 2);
        let widget_count = tree.len();
        let stray = tree.create(None);

        row.set_cell_text(&mut tree, 3, "ghost");
        row.set_cell_text(&mut tree, 99, "ghost");
        row.set_column_width(&mut tree, 4, 500);
        row.set_cell_contents(&mut tree, 7, stray, true);

        assert_eq!(row.cell_text(&tree, 3), None);
        assert_eq!(row.cell_text(&tree, 99), None);
        assert_eq!(row.cell_contents(&tree, 42), None);
        assert_eq!(tree.parent(stray), None);
        assert_eq!(tree.len(), widget_count + 1);
    }

    #[test]
    fn test_size_to_contents_text_and_children() {
        let mut tree = WidgetTree::new();
        let mut row = row(&mut tree, 2);

        row.set_text(&mut tree, "Vega");
        let icon = tree.create(None);
        tree.set_bounds(icon, Rect::new(3, 3, 24, 24));
        row.set_cell_contents(&mut tree, 1, icon, true);

        row.size_to_contents(&mut tree);

        let text_cell = row.cell(0).unwrap();
        let icon_cell = row.cell(1).unwrap();
        assert_eq!(row.cell_contents(&tree, 1), Some(icon));
        assert!(tree.has_flag(icon_cell, WidgetFlags::MOUSE_INPUT));
        assert_eq!(tree.size(text_cell), (4 * 8 + 6, 16 + 6));
        assert_eq!(tree.size(icon_cell), (27 + 3, 27 + 3));
        assert_eq!(tree.size(row.id()), (38 + 2 + 30 + 2, 30));
    }

    #[test]
    fn test_arrange_fills_last_cell() {
        let mut tree = WidgetTree::new();
        let mut row = row(&mut tree, 3);
        tree.set_size(row.id(), 200, 22);
        row.set_column_width(&mut tree, 0, 40);
        row.set_column_width(&mut tree, 1, 60);

        row.arrange_cells(&mut tree);

        assert_eq!(tree.rect(row.cell(0).unwrap()), Rect::new(0, 0, 40, 22));
        assert_eq!(tree.rect(row.cell(1).unwrap()), Rect::new(42, 0, 60, 22));
        assert_eq!(tree.rect(row.cell(2).unwrap()), Rect::new(104, 0, 94, 22));
    }

    #[test]
    fn test_selection_and_copy() {
        let mut tree = WidgetTree::new();
        let mut row = row(&mut tree, 2);
        row.set_text(&mut tree, "Altair");
        row.set_cell_text(&mut tree, 1, "12 cr");

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        row.on_selected(move |id| sink.borrow_mut().push(id));
        row.select();
        assert_eq!(*seen.borrow(), vec![row.id()]);

        let mut clipboard = MemoryClipboard::default();
        row.copy_to(&tree, &mut clipboard);
        assert_eq!(clipboard.text(), Some("Altair"));
    }
}
