//! Generalized Hilbert ("gilbert") curve over arbitrary rectangles.
//!
//! Visits every cell of a `width x height` grid exactly once. Power-of-two
//! squares produce the classic Hilbert curve; other sizes are split into two
//! or three sub-rectangles with a parity fix on the half-size so odd
//! dimensions don't leave gaps.

/// Call `visit(x, y)` for every cell along the curve.
pub fn traverse<F: FnMut(usize, usize)>(width: usize, height: usize, mut visit: F) {
    if width == 0 || height == 0 {
        return;
    }
    let (w, h) = (width as i64, height as i64);
    if width >= height {
        generate(0, 0, w, 0, 0, h, &mut visit);
    } else {
        generate(0, 0, 0, h, w, 0, &mut visit);
    }
}

/// Curve order as flat `y * width + x` offsets.
pub fn order(width: usize, height: usize) -> Vec<usize> {
    let mut out = Vec::with_capacity(width * height);
    traverse(width, height, |x, y| out.push(y * width + x));
    out
}

/// `(ax, ay)` is the major axis vector, `(bx, by)` the orthogonal one.
fn generate<F: FnMut(usize, usize)>(
    mut x: i64,
    mut y: i64,
    ax: i64,
    ay: i64,
    bx: i64,
    by: i64,
    visit: &mut F,
) {
    let w = (ax + ay).abs();
    let h = (bx + by).abs();

    let (dax, day) = (ax.signum(), ay.signum());
    let (dbx, dby) = (bx.signum(), by.signum());

    if h == 1 {
        for _ in 0..w {
            visit(x as usize, y as usize);
            x += dax;
            y += day;
        }
        return;
    }

    if w == 1 {
        for _ in 0..h {
            visit(x as usize, y as usize);
            x += dbx;
            y += dby;
        }
        return;
    }

    let (mut ax2, mut ay2) = (ax / 2, ay / 2);
    let (mut bx2, mut by2) = (bx / 2, by / 2);

    let w2 = (ax2 + ay2).abs();
    let h2 = (bx2 + by2).abs();

    if 2 * w > 3 * h {
        // Long rectangle: split along the major axis only.
        if w2 % 2 != 0 && w > 2 {
            ax2 += dax;
            ay2 += day;
        }
        generate(x, y, ax2, ay2, bx, by, visit);
        generate(x + ax2, y + ay2, ax - ax2, ay - ay2, bx, by, visit);
        return;
    }

    if h2 % 2 != 0 && h > 2 {
        bx2 += dbx;
        by2 += dby;
    }

    // Up, across, down.
    generate(x, y, bx2, by2, ax2, ay2, visit);
    generate(x + bx2, y + by2, ax, ay, bx - bx2, by - by2, visit);
    generate(
        x + (ax - dax) + (bx2 - dbx),
        y + (ay - day) + (by2 - dby),
        -bx2,
        -by2,
        -(ax - ax2),
        -(ay - ay2),
        visit,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_covers_once(width: usize, height: usize) {
        let path = order(width, height);
        assert_eq!(path.len(), width * height, "{width}x{height}");
        let mut seen = vec![false; width * height];
        for &p in &path {
            assert!(p < width * height, "{width}x{height}: {p} out of range");
            assert!(!seen[p], "{width}x{height}: {p} visited twice");
            seen[p] = true;
        }
    }

    #[test]
    fn visits_every_cell_once() {
        for &(w, h) in &[
            (1, 1),
            (1, 7),
            (7, 1),
            (2, 2),
            (3, 5),
            (5, 3),
            (8, 8),
            (17, 4),
            (4, 17),
            (31, 29),
            (100, 3),
            (64, 48),
        ] {
            assert_covers_once(w, h);
        }
    }

    #[test]
    fn power_of_two_square_is_unit_stepped() {
        for size in [2usize, 4, 8, 16] {
            let mut prev: Option<(usize, usize)> = None;
            traverse(size, size, |x, y| {
                if let Some((px, py)) = prev {
                    let step = px.abs_diff(x) + py.abs_diff(y);
                    assert_eq!(step, 1, "jump from ({px},{py}) to ({x},{y})");
                }
                prev = Some((x, y));
            });
        }
    }

    #[test]
    fn starts_at_origin() {
        assert_eq!(order(6, 4)[0], 0);
        assert_eq!(order(4, 6)[0], 0);
    }

    #[test]
    fn empty_grid_visits_nothing() {
        assert!(order(0, 5).is_empty());
        assert!(order(5, 0).is_empty());
    }
}
