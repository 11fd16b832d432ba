use std::io::{self, Write};

use sweeper_core::{BoardEngine, CellView, Coord};

pub const fn cell_symbol(view: CellView) -> char {
    match view {
        CellView::Hidden => 'H',
        CellView::Safe(count) => (b'0' + count) as char,
        CellView::Mine => 'X',
    }
}

/// One board row with cells separated by single spaces.
pub fn render_row(engine: &BoardEngine, x: Coord) -> String {
    (0..engine.cols())
        .map(|y| engine.cell_at((x, y)).map_or('?', cell_symbol))
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn render_board(engine: &BoardEngine, out: &mut impl Write) -> io::Result<()> {
    for x in 0..engine.rows() {
        writeln!(out, "{}", render_row(engine, x))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sweeper_core::MineLayout;

    #[test]
    fn renders_hidden_safe_and_mine_cells() {
        let mut engine = BoardEngine::new((2, 3)).unwrap();
        engine
            .initialize_with_layout(MineLayout::from_mine_coords((2, 3), &[(0, 0)]).unwrap())
            .unwrap();
        engine.reveal((0, 0)).unwrap();
        engine.reveal((1, 1)).unwrap();
        engine.reveal((1, 2)).unwrap();

        let mut out = Vec::new();
        render_board(&engine, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "X H H\nH 1 0\n");
    }
}
