//! Multi-column table layout.
//!
//! A [`Table`] owns its [`TableRow`]s and keeps the authoritative column
//! widths. Each frame the layout phase pushes those widths into every row;
//! the post-layout phase runs a pending autosize request, if any:
//!
//! 1. every row sizes its cells to their content,
//! 2. each column takes the widest cell (plus horizontal margin) over all rows,
//! 3. with a non-zero maximum width, the last column fills whatever the
//!    others leave,
//! 4. the table becomes the sum of column widths by the sum of row heights.
//!
//! The fill in step 3 is not clamped and goes negative once the other
//! columns exceed the maximum.

use super::{LayoutPass, Rect, TableRow};
use crate::config::TableConfig;
use crate::error::{UiError, UiResult};
use crate::widget::{Dock, WidgetId, WidgetTree};

/// Capacity of the per-row cell array. Column counts must stay below it.
pub const MAX_TABLE_COLUMNS: usize = 5;

/// Rows of text cells with shared column widths.
#[derive(Debug)]
pub struct Table {
    id: WidgetId,
    rows: Vec<TableRow>,
    column_count: usize,
    column_widths: [i32; MAX_TABLE_COLUMNS],
    default_row_height: i32,
    config: TableConfig,
    /// Autosize request with its maximum width, consumed by the next pass.
    pending_autosize: Option<i32>,
}

impl Table {
    /// Creates an empty single-column table widget.
    pub fn new(tree: &mut WidgetTree, parent: Option<WidgetId>, config: &TableConfig) -> Self {
        Self {
            id: tree.create(parent),
            rows: Vec::new(),
            column_count: 1,
            column_widths: [config.default_column_width; MAX_TABLE_COLUMNS],
            default_row_height: config.default_row_height,
            config: *config,
            pending_autosize: None,
        }
    }

    /// The table's own widget.
    #[must_use]
    pub const fn id(&self) -> WidgetId {
        self.id
    }

    /// Number of columns.
    #[must_use]
    pub const fn column_count(&self) -> usize {
        self.column_count
    }

    /// Changes the number of columns of the table and every row.
    ///
    /// # Errors
    ///
    /// [`UiError::InvalidColumnCount`] if `count` is not below
    /// [`MAX_TABLE_COLUMNS`]. Nothing changes in that case.
    pub fn set_column_count(&mut self, tree: &mut WidgetTree, count: usize) -> UiResult<()> {
        if count == self.column_count {
            return Ok(());
        }
        if count >= MAX_TABLE_COLUMNS {
            tracing::warn!(count, max = MAX_TABLE_COLUMNS, "invalid table column count");
            return Err(UiError::InvalidColumnCount {
                requested: count,
                max: MAX_TABLE_COLUMNS,
            });
        }

        for row in &mut self.rows {
            row.resize_cells(tree, count);
        }
        self.column_count = count;
        tree.invalidate(self.id);
        Ok(())
    }

    /// Pixel width of `column`, or `None` past the column capacity.
    #[must_use]
    pub fn column_width(&self, column: usize) -> Option<i32> {
        self.column_widths.get(column).copied()
    }

    /// Sets the pixel width of `column`. Out-of-range columns are ignored.
    pub fn set_column_width(&mut self, tree: &mut WidgetTree, column: usize, width: i32) {
        let Some(slot) = self.column_widths.get_mut(column) else {
            return;
        };
        if *slot == width {
            return;
        }
        *slot = width;
        tree.invalidate(self.id);
    }

    /// Height given to new rows.
    #[must_use]
    pub const fn default_row_height(&self) -> i32 {
        self.default_row_height
    }

    /// Changes the height given to rows added from now on.
    pub fn set_default_row_height(&mut self, height: i32) {
        self.default_row_height = height;
    }

    /// Number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// All rows, top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Row at `index`.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&TableRow> {
        self.rows.get(index)
    }

    /// Mutable row at `index`.
    #[must_use]
    pub fn row_mut(&mut self, index: usize) -> Option<&mut TableRow> {
        self.rows.get_mut(index)
    }

    /// Position of the row whose widget is `row`.
    #[must_use]
    pub fn row_index(&self, row: WidgetId) -> Option<usize> {
        self.rows.iter().position(|r| r.id() == row)
    }

    /// Appends an empty row with the table's column count.
    pub fn add_row(&mut self, tree: &mut WidgetTree) -> &mut TableRow {
        let row = TableRow::new(tree, Some(self.id), &self.config);
        self.push_row(tree, row)
    }

    /// Appends a row with `text` in its first column.
    pub fn add_row_with_text(&mut self, tree: &mut WidgetTree, text: impl Into<String>) -> &mut TableRow {
        let row = self.add_row(tree);
        row.set_text(tree, text);
        row
    }

    /// Adopts an existing row, reparenting it under the table and matching
    /// its column count and height to the table's.
    pub fn push_row(&mut self, tree: &mut WidgetTree, mut row: TableRow) -> &mut TableRow {
        tree.set_parent(row.id(), self.id);
        row.resize_cells(tree, self.column_count);
        tree.set_height(row.id(), self.default_row_height);
        tree.set_dock(row.id(), Dock::Top);
        tree.invalidate(self.id);

        let index = self.rows.len();
        self.rows.push(row);
        &mut self.rows[index]
    }

    /// Removes the row at `index` and its widgets. Returns false if there
    /// is no such row.
    pub fn remove_row(&mut self, tree: &mut WidgetTree, index: usize) -> bool {
        if index >= self.rows.len() {
            return false;
        }
        let row = self.rows.remove(index);
        tree.remove(row.id());
        true
    }

    /// Removes the row whose widget is `row`. Returns false if that widget
    /// is not one of this table's rows.
    pub fn remove_row_by_id(&mut self, tree: &mut WidgetTree, row: WidgetId) -> bool {
        match self.row_index(row) {
            Some(index) => self.remove_row(tree, index),
            None => false,
        }
    }

    /// Removes every row.
    pub fn remove_all(&mut self, tree: &mut WidgetTree) {
        for row in self.rows.drain(..) {
            tree.remove(row.id());
        }
    }

    /// Requests an autosize on the next post-layout pass. Zero means no
    /// maximum; any other `max_width` makes the last column fill up to that
    /// total width, even when the result is negative.
    pub fn size_to_contents(&mut self, tree: &mut WidgetTree, max_width: i32) {
        self.pending_autosize = Some(max_width);
        tree.invalidate(self.id);
    }

    /// True while an autosize request is waiting for the next pass.
    #[must_use]
    pub const fn is_autosize_pending(&self) -> bool {
        self.pending_autosize.is_some()
    }

    fn autosize(&mut self, tree: &mut WidgetTree, max_width: i32) {
        let count = self.column_count;
        let mut widths = [0; MAX_TABLE_COLUMNS];
        let mut height = 0;

        for row in &mut self.rows {
            row.size_to_contents(tree);
            for (column, width) in widths.iter_mut().enumerate().take(count) {
                if let Some(cell) = row.cell(column) {
                    let cell_width = tree.size(cell).0 + tree.margin(cell).horizontal();
                    *width = (*width).max(cell_width);
                }
            }
            height += tree.size(row.id()).1;
        }

        if max_width != 0 && count > 0 {
            let others: i32 = widths[..count - 1].iter().sum();
            widths[count - 1] = max_width - others;
        }

        self.column_widths[..count].copy_from_slice(&widths[..count]);
        let width: i32 = widths[..count].iter().sum();
        tree.set_size(self.id, width, height);

        tracing::debug!(
            table = self.id.raw(),
            rows = self.rows.len(),
            width,
            height,
            max_width,
            "table autosized"
        );
    }
}

impl LayoutPass for Table {
    fn layout(&mut self, tree: &mut WidgetTree) {
        let width = tree.size(self.id).0;
        let padding = tree.padding(self.id);
        let mut y = padding.top;
        let mut even = false;

        for row in &mut self.rows {
            row.set_even(even);
            even = !even;

            for (column, &column_width) in self.column_widths.iter().enumerate().take(self.column_count) {
                row.set_column_width(tree, column, column_width);
            }

            let height = tree.size(row.id()).1;
            tree.set_bounds(row.id(), Rect::new(padding.left, y, width - padding.horizontal(), height));
            row.arrange_cells(tree);
            y += height;
        }

        tree.mark_laid_out(self.id);
    }

    fn post_layout(&mut self, tree: &mut WidgetTree) {
        if let Some(max_width) = self.pending_autosize.take() {
            self.autosize(tree, max_width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::{MonospaceMeasurer, WidgetFlags};

    /// Two pixels per glyph, so a cell with `n` glyphs and the stock
    /// padding/spacing spans `2n + 8` pixels of column.
    fn table_with_rows(tree: &mut WidgetTree) -> Table {
        let mut table = Table::new(tree, None, &TableConfig::default());
        table.set_column_count(tree, 3).unwrap();

        let lines = [
            ["a", "bbbbbbbbbbbbbbbbbbbbbbbbbb", "c"],
            ["aaaaaaaaaaaaaaaa", "b", "ccccccccccc"],
            ["aaaa", "bbbbbbbbbb", "cc"],
        ];
        for line in lines {
            let row = table.add_row(tree);
            for (column, text) in line.iter().enumerate() {
                row.set_cell_text(tree, column, *text);
            }
        }
        table
    }

    fn tree() -> WidgetTree {
        WidgetTree::with_measurer(MonospaceMeasurer::new(2, 16))
    }

    fn autosize(table: &mut Table, tree: &mut WidgetTree, max_width: i32) {
        table.size_to_contents(tree, max_width);
        table.layout(tree);
        table.post_layout(tree);
    }

    fn widths(table: &Table) -> Vec<i32> {
        (0..table.column_count()).filter_map(|c| table.column_width(c)).collect()
    }

    #[test]
    fn test_autosize_takes_column_maximum() {
        let mut tree = tree();
        let mut table = table_with_rows(&mut tree);

        autosize(&mut table, &mut tree, 0);

        assert_eq!(widths(&table), vec![40, 60, 30]);
        assert_eq!(tree.size(table.id()), (130, 3 * 22));
        assert!(!table.is_autosize_pending());
    }

    #[test]
    fn test_autosize_last_column_fills_max_width() {
        let mut tree = tree();
        let mut table = table_with_rows(&mut tree);

        autosize(&mut table, &mut tree, 200);

        assert_eq!(widths(&table), vec![40, 60, 100]);
        assert_eq!(tree.size(table.id()).0, 200);
    }

    #[test]
    fn test_autosize_fill_is_not_clamped() {
        let mut tree = tree();
        let mut table = table_with_rows(&mut tree);

        autosize(&mut table, &mut tree, 50);

        assert_eq!(widths(&table), vec![40, 60, -50]);
        assert_eq!(tree.size(table.id()).0, 50);
    }

    #[test]
    fn test_negative_max_width_still_fills() {
        let mut tree = tree();
        let mut table = table_with_rows(&mut tree);

        autosize(&mut table, &mut tree, -20);

        assert_eq!(widths(&table), vec![40, 60, -120]);
        assert_eq!(tree.size(table.id()).0, -20);
    }

    #[test]
    fn test_autosize_is_one_shot() {
        let mut tree = tree();
        let mut table = table_with_rows(&mut tree);
        autosize(&mut table, &mut tree, 0);

        table.set_column_width(&mut tree, 1, 5);
        table.layout(&mut tree);
        table.post_layout(&mut tree);

        assert_eq!(table.column_width(1), Some(5));
        assert_eq!(tree.size(table.id()), (130, 66));
    }

    #[test]
    fn test_layout_stripes_and_stacks_rows() {
        let mut tree = tree();
        let mut table = table_with_rows(&mut tree);
        tree.set_size(table.id(), 300, 100);
        table.set_column_width(&mut tree, 0, 50);
        table.layout(&mut tree);

        let stripes: Vec<bool> = table.rows().iter().map(TableRow::is_even).collect();
        assert_eq!(stripes, vec![false, true, false]);

        let second = table.row(1).unwrap();
        assert_eq!(tree.rect(second.id()), Rect::new(0, 22, 300, 22));
        assert_eq!(tree.size(second.cell(0).unwrap()).0, 50);
    }

    #[test]
    fn test_column_count_propagates_and_is_bounded() {
        let mut tree = tree();
        let mut table = table_with_rows(&mut tree);

        tree.set_size(table.id(), 300, 100);
        table.layout(&mut tree);
        let cells = |table: &Table| -> Vec<Option<WidgetId>> {
            table
                .rows()
                .iter()
                .flat_map(|row| (0..MAX_TABLE_COLUMNS).map(|c| row.cell(c)))
                .collect()
        };
        let before = cells(&table);
        let widget_count = tree.len();

        table.set_column_count(&mut tree, 3).unwrap();
        assert_eq!(table.row(0).unwrap().column_count(), 3);
        assert_eq!(cells(&table), before);
        assert_eq!(tree.len(), widget_count);
        assert!(!tree.has_flag(table.id(), WidgetFlags::DIRTY_LAYOUT));

        table.set_column_count(&mut tree, 2).unwrap();
        assert!(table.rows().iter().all(|row| row.column_count() == 2));
        assert_eq!(table.row(1).unwrap().cell_text(&tree, 2), None);

        let err = table.set_column_count(&mut tree, MAX_TABLE_COLUMNS).unwrap_err();
        assert_eq!(
            err,
            UiError::InvalidColumnCount {
                requested: MAX_TABLE_COLUMNS,
                max: MAX_TABLE_COLUMNS
            }
        );
        assert_eq!(table.column_count(), 2);
    }

    #[test]
    fn test_out_of_range_access_changes_nothing() {
        let mut tree = tree();
        let mut table = table_with_rows(&mut tree);
        let before = widths(&table);

        table.set_column_width(&mut tree, MAX_TABLE_COLUMNS + 3, 99);
        assert_eq!(table.column_width(MAX_TABLE_COLUMNS), None);
        assert!(table.row(17).is_none());
        assert!(!table.remove_row(&mut tree, 17));

        let row = table.row_mut(0).unwrap();
        row.set_cell_text(&mut tree, 4, "nope");
        assert_eq!(row.cell_text(&tree, 0), Some("a"));

        assert_eq!(widths(&table), before);
        assert_eq!(table.row_count(), 3);
    }

    #[test]
    fn test_rows_add_and_remove() {
        let mut tree = tree();
        let mut table = Table::new(&mut tree, None, &TableConfig::default());
        table.set_default_row_height(30);

        let first = table.add_row_with_text(&mut tree, "Deneb").id();
        let second = table.add_row(&mut tree).id();

        assert_eq!(tree.size(first).1, 30);
        assert_eq!(tree.dock(first), Dock::Top);
        assert_eq!(table.row_index(second), Some(1));
        assert_eq!(table.row(0).unwrap().text(&tree), Some("Deneb"));

        assert!(table.remove_row(&mut tree, 0));
        assert!(!tree.contains(first));
        assert_eq!(table.row_index(second), Some(0));

        let third = table.add_row(&mut tree).id();
        let stranger = tree.create(None);
        assert!(!table.remove_row_by_id(&mut tree, stranger));
        assert!(tree.contains(stranger));
        assert!(table.remove_row_by_id(&mut tree, third));
        assert!(!tree.contains(third));
        assert!(!table.remove_row_by_id(&mut tree, third));
        assert_eq!(table.row_index(second), Some(0));

        table.remove_all(&mut tree);
        assert_eq!(table.row_count(), 0);
        assert!(tree.children(table.id()).is_empty());
    }

    #[test]
    fn test_push_row_adopts_existing_row() {
        let mut tree = tree();
        let config = TableConfig::default();
        let mut table = Table::new(&mut tree, None, &config);
        table.set_column_count(&mut tree, 2).unwrap();

        let loose = TableRow::new(&mut tree, None, &config);
        let id = loose.id();
        let row = table.push_row(&mut tree, loose);

        assert_eq!(row.column_count(), 2);
        assert_eq!(tree.parent(id), Some(table.id()));
        assert_eq!(tree.size(id).1, config.default_row_height);
    }
}
