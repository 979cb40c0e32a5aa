//! Random theme selection.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::mode::AppMode;
use crate::theme::Catalog;

/// Pick up to `weeks` distinct theme ids at random.
///
/// The pool is the catalog in display-title order, limited to the themes the
/// app mode allows. Fewer ids come back when the pool is smaller than `weeks`.
pub fn pick_random<R: Rng + ?Sized>(
    catalog: &Catalog,
    weeks: u32,
    mode: AppMode,
    rng: &mut R,
) -> Vec<String> {
    let mut pool: Vec<String> = catalog
        .sorted_by_title()
        .into_iter()
        .filter(|theme| mode.allows_theme(&theme.id))
        .map(|theme| theme.id.clone())
        .collect();

    let n = (weeks as usize).min(pool.len());
    pool.shuffle(rng);
    pool.truncate(n);
    pool
}
