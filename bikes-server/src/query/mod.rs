//! Query engine: filter → sort → paginate over a station snapshot.
//!
//! Pure functions only; the repository supplies the snapshot and the
//! web layer parses the parameters. Pagination always applies to the
//! full filtered and sorted set, never to a raw snapshot.

mod filter;
mod page;
mod sort;

pub use filter::StationFilter;
pub use page::{MAX_PAGE_SIZE, Paginated, paginate};
pub use sort::{SortDir, SortKey, sort_stations};

use crate::domain::Station;

/// Run the full pipeline over a snapshot.
pub fn run_query(
    stations: Vec<Station>,
    filter: &StationFilter,
    key: SortKey,
    dir: SortDir,
    page: usize,
    page_size: usize,
) -> Paginated<Station> {
    let mut filtered = filter.apply(stations);
    sort_stations(&mut filtered, key, dir);
    paginate(filtered, page, page_size)
}
