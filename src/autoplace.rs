//! Random completion of a partially placed ship.

use alloc::vec::Vec;
use rand::Rng;

use crate::common::Coordinate;
use crate::ship::Ship;

const MAX_ATTEMPTS: usize = 100;

/// Unit steps a fresh ship may be laid along.
const ORTHOGONAL: [(i32, i32); 2] = [(1, 0), (0, 1)];

/// Pick the cells still missing from `ship`, in an order the validator
/// accepts one by one. The returned cells extend the ship's current line,
/// stay inside a `width` × `height` board and avoid every cell for which
/// `occupied` is true. Gives up after a bounded number of random attempts.
pub fn random_run<R, F>(
    rng: &mut R,
    ship: &Ship,
    width: usize,
    height: usize,
    occupied: F,
) -> Option<Vec<Coordinate>>
where
    R: Rng,
    F: Fn(Coordinate) -> bool,
{
    let (w, h) = (width as i32, height as i32);
    let free = |c: Coordinate| c.x >= 0 && c.y >= 0 && c.x < w && c.y < h && !occupied(c);
    let spaces = ship.spaces();
    let need = ship.remaining();
    if need == 0 || w <= 0 || h <= 0 {
        return None;
    }

    for _ in 0..MAX_ATTEMPTS {
        // Anchor of the run and the part of the line already covered,
        // as step offsets from the anchor.
        let (anchor, step, mut lo, mut hi, mut run) = match spaces {
            [] => {
                let start = Coordinate::new(rng.random_range(0..w), rng.random_range(0..h));
                if !free(start) {
                    continue;
                }
                let step = ORTHOGONAL[rng.random_range(0..ORTHOGONAL.len())];
                (start, step, 0, 0, alloc::vec![start])
            }
            [only] => {
                let step = ORTHOGONAL[rng.random_range(0..ORTHOGONAL.len())];
                (*only, step, 0, 0, Vec::new())
            }
            [first, second, ..] => {
                let step = ((second.x - first.x).signum(), (second.y - first.y).signum());
                let offsets = spaces.iter().map(|c| offset_along(*first, step, *c));
                let lo = offsets.clone().min().unwrap_or(0);
                let hi = offsets.max().unwrap_or(0);
                (*first, step, lo, hi, Vec::new())
            }
        };

        let missing = need - run.len();
        let before = rng.random_range(0..=missing);
        let at = |t: i32| Coordinate::new(anchor.x + step.0 * t, anchor.y + step.1 * t);
        for _ in 0..missing - before {
            hi += 1;
            run.push(at(hi));
        }
        for _ in 0..before {
            lo -= 1;
            run.push(at(lo));
        }
        if run.iter().all(|c| free(*c)) {
            return Some(run);
        }
    }
    None
}

/// Number of `step`s from `origin` to `c`, assuming `c` lies on that line.
fn offset_along(origin: Coordinate, step: (i32, i32), c: Coordinate) -> i32 {
    if step.0 != 0 {
        (c.x - origin.x) / step.0
    } else {
        (c.y - origin.y) / step.1
    }
}
