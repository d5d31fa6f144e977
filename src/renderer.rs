use backtrack_maze::{CellView, Sides, WallGrid};

// terminal columns per unit of cell size
const COLUMNS_PER_UNIT: f32 = 0.1;

/// Draws a wall grid as box-ish ASCII, one text row per cell row plus a
/// wall row beneath it.
pub struct TextRenderer {
    cell_width: usize,
}

impl TextRenderer {
    pub fn for_grid(grid: &WallGrid) -> Self {
        let cell_width = (grid.cell_size * COLUMNS_PER_UNIT).round().max(1.0) as usize;
        Self { cell_width }
    }

    pub fn render(&self, grid: &WallGrid, cursor: Option<(usize, usize)>) -> String {
        let width = grid.dims.width;
        let views: Vec<CellView> = grid.views().collect();
        let mut out = String::new();

        // top border, every cell on row 0 still has its Up wall
        out.push('+');
        for view in &views[..width] {
            out.push_str(&self.horizontal(view.sides.contains(Sides::UP)));
            out.push('+');
        }
        out.push('\n');

        for row in views.chunks(width) {
            match row.first() {
                Some(first) if first.sides.contains(Sides::LEFT) => out.push('|'),
                _ => out.push(' '),
            }
            for view in row {
                let fill = if cursor == Some((view.x, view.y)) {
                    '@'
                } else if view.visited {
                    ' '
                } else {
                    '.'
                };
                out.extend(std::iter::repeat(fill).take(self.cell_width));
                out.push(if view.sides.contains(Sides::RIGHT) { '|' } else { ' ' });
            }
            out.push('\n');

            out.push('+');
            for view in row {
                out.push_str(&self.horizontal(view.sides.contains(Sides::DOWN)));
                out.push('+');
            }
            out.push('\n');
        }

        out
    }

    fn horizontal(&self, wall: bool) -> String {
        let ch = if wall { '-' } else { ' ' };
        std::iter::repeat(ch).take(self.cell_width).collect()
    }
}
