pub mod comms;
pub mod error;
pub mod grid;
pub mod location;
pub mod paths;
pub mod placement;
pub mod region;
pub mod visual;

pub use comms::{can_communicate, connected_towers};
pub use error::{CityGridError, Result};
pub use grid::{CellState, CityGrid, TowerId};
pub use location::Location;
pub use paths::{all_simple_paths, find_all_data_paths, find_reliable_path, SearchLimits};
pub use placement::optimize_tower_placement;
pub use region::{find_connected_region, NEIGHBORS_4};
pub use visual::{render_city, tower_coverage, CityVisualizer};
