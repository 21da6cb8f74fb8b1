use crate::container::Container;

const MAX_WIDTH: f64 = 80.0;
const MAX_HEIGHT: f64 = 40.0;

/// Renders a top-down floor plan of the container: the length axis runs
/// across, the width axis runs down, and only floor-level placements
/// (z = 0) are drawn, labelled with their footprint.
pub fn render_plan(container: &Container) -> String {
    let scale = f64::min(
        MAX_WIDTH / container.dims.length as f64,
        MAX_HEIGHT / container.dims.width as f64,
    );
    let grid_w = (container.dims.length as f64 * scale).round() as usize;
    let grid_h = (container.dims.width as f64 * scale).round() as usize;

    if grid_w == 0 || grid_h == 0 {
        return String::new();
    }

    let mut grid = vec![vec![' '; grid_w + 1]; grid_h + 1];

    // Container outline first
    draw_rect(&mut grid, 0, 0, grid_w, grid_h);

    for p in container.items.iter().filter(|p| p.position.z == 0) {
        let sx = (p.position.x as f64 * scale).round() as usize;
        let sy = (p.position.y as f64 * scale).round() as usize;
        let sw = (p.dims.length as f64 * scale).round() as usize;
        let sh = (p.dims.width as f64 * scale).round() as usize;

        if sw == 0 || sh == 0 {
            continue;
        }

        draw_rect(&mut grid, sx, sy, sw, sh);

        // Footprint label
        let label = format!("{}x{}", p.dims.length, p.dims.width);
        let label_chars: Vec<char> = label.chars().collect();

        if sw > 2 && sh > 0 {
            let cx = sx + sw / 2;
            let cy = sy + sh / 2;
            let half = label_chars.len() / 2;
            let start_x = cx.saturating_sub(half);

            for (i, &ch) in label_chars.iter().enumerate() {
                let x = start_x + i;
                if x > sx && x < sx + sw && cy > sy && cy < sy + sh {
                    grid[cy][x] = ch;
                }
            }
        }
    }

    let mut result = String::new();
    for row in &grid {
        let line: String = row.iter().collect();
        result.push_str(line.trim_end());
        result.push('\n');
    }
    result
}

#[allow(clippy::needless_range_loop)]
fn draw_rect(grid: &mut [Vec<char>], x: usize, y: usize, w: usize, h: usize) {
    let rows = grid.len();
    let cols = if rows > 0 { grid[0].len() } else { return };

    // Horizontal edges
    for i in x..=x + w {
        if i < cols {
            if y < rows {
                grid[y][i] = if grid[y][i] == '|' || grid[y][i] == '+' {
                    '+'
                } else {
                    '-'
                };
            }
            if y + h < rows {
                grid[y + h][i] = if grid[y + h][i] == '|' || grid[y + h][i] == '+' {
                    '+'
                } else {
                    '-'
                };
            }
        }
    }

    // Vertical edges
    for j in y..=y + h {
        if j < rows {
            if x < cols {
                grid[j][x] = if grid[j][x] == '-' || grid[j][x] == '+' {
                    '+'
                } else {
                    '|'
                };
            }
            if x + w < cols {
                grid[j][x + w] = if grid[j][x + w] == '-' || grid[j][x + w] == '+' {
                    '+'
                } else {
                    '|'
                };
            }
        }
    }

    // Corners
    for &cx in &[x, x + w] {
        for &cy in &[y, y + h] {
            if cy < rows && cx < cols {
                grid[cy][cx] = '+';
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Dims, Orientation, PlacedItem, Position};

    fn placed(dims: Dims, pos: Position) -> PlacedItem {
        PlacedItem {
            name: "box_1".to_string(),
            dims,
            orientation: Orientation::Lwh,
            position: pos,
            weight: 1.0,
            color: "#FF6B6B".to_string(),
            item_type: "box".to_string(),
        }
    }

    #[test]
    fn test_render_single_item() {
        let mut c = Container::new(Dims::new(100, 50, 50), 100.0);
        c.commit(placed(Dims::new(100, 50, 50), Position::new(0, 0, 0)));
        let output = render_plan(&c);
        assert!(output.contains('+'));
        assert!(output.contains('-'));
        assert!(output.contains('|'));
        assert!(output.contains("100x50"));
    }

    #[test]
    fn test_render_skips_stacked_items() {
        let mut c = Container::new(Dims::new(100, 100, 100), 100.0);
        c.commit(placed(Dims::new(100, 100, 50), Position::new(0, 0, 0)));
        c.commit(placed(Dims::new(60, 60, 50), Position::new(0, 0, 50)));
        let output = render_plan(&c);
        assert!(output.contains("100x100"));
        assert!(!output.contains("60x60"));
    }

    #[test]
    fn test_render_empty_container() {
        let c = Container::new(Dims::new(100, 100, 100), 100.0);
        let output = render_plan(&c);
        // Still draws the container outline
        assert!(output.contains('+'));
    }
}
